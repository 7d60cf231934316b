#[cfg(test)]
#[path = "../../tests/unit/models/formulation_test.rs"]
mod formulation_test;

use std::fmt::{Display, Formatter};

/// A name prefix of arc variables block.
pub const ARC_VARIABLES: &str = "x";

/// A reference to a variable of a formulation.
///
/// Variables are referenced by their number in the addition sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(usize);

impl VariableId {
    /// Returns variable index in formulation.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Specifies a domain of variable values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableDomain {
    /// Variable takes only 0 or 1 values.
    Binary,
    /// Variable takes any real value within its bounds.
    Continuous,
}

/// A variable definition.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDef {
    /// A unique name, e.g. `x_0_1`.
    pub name: String,
    /// A value domain.
    pub domain: VariableDomain,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

/// A block of variables of the same family laid out in row-major order.
///
/// Blocks with one column are vectors (e.g. `u[i]`), others are matrices (e.g. `x[i][j]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableBlock {
    start: usize,
    rows: usize,
    cols: usize,
}

impl VariableBlock {
    /// Returns variable at given position.
    pub fn get(&self, row: usize, col: usize) -> VariableId {
        assert!(row < self.rows && col < self.cols);
        VariableId(self.start + row * self.cols + col)
    }

    /// Returns variable of a vector block.
    pub fn at(&self, row: usize) -> VariableId {
        self.get(row, 0)
    }

    /// Returns amount of variables in the block.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if block has no variables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over variables of the block.
    pub fn ids(&self) -> impl Iterator<Item = VariableId> + '_ {
        (self.start..self.start + self.len()).map(VariableId)
    }

    /// Checks whether the variable belongs to the block.
    pub fn contains(&self, id: VariableId) -> bool {
        (self.start..self.start + self.len()).contains(&id.0)
    }
}

/// A relation between left and right hand sides of a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `lhs = rhs`
    Equal,
    /// `lhs <= rhs`
    LessOrEqual,
    /// `lhs >= rhs`
    GreaterOrEqual,
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Equal => write!(f, "="),
            Relation::LessOrEqual => write!(f, "<="),
            Relation::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// Specifies a role of constraint within formulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Forbids an arc from a node to itself.
    NoSelfLoop,
    /// Exactly one arc leaves a node.
    OutDegree,
    /// Exactly one arc enters a node.
    InDegree,
    /// Fixes a rank of the reference node.
    RankAnchor,
    /// Orders ranks of nodes joined by a selected arc.
    RankOrder,
    /// Forbids flow into the depot.
    FlowReturn,
    /// Each non-depot node consumes one unit of flow.
    FlowConservation,
    /// The depot emits one unit of flow per remaining node.
    FlowSource,
    /// Allows flow only on selected arcs.
    FlowLink,
}

impl ConstraintKind {
    /// Checks whether the constraint is a degree (assignment) constraint.
    pub fn is_degree(&self) -> bool {
        matches!(self, ConstraintKind::OutDegree | ConstraintKind::InDegree)
    }
}

/// A sum of variables multiplied by constant coefficients.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VariableId, f64)>,
}

impl LinearExpr {
    /// Creates an empty expression.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a term. Adding the same variable several times is forbidden.
    pub fn add(&mut self, var: VariableId, coeff: f64) {
        debug_assert!(self.terms.iter().all(|(id, _)| *id != var), "duplicate variable in expression");
        self.terms.push((var, coeff));
    }

    /// Adds a term and returns the expression.
    pub fn with(mut self, var: VariableId, coeff: f64) -> Self {
        self.add(var, coeff);
        self
    }

    /// Returns terms of the expression.
    pub fn terms(&self) -> &[(VariableId, f64)] {
        self.terms.as_slice()
    }

    /// Evaluates expression using variable values indexed by variable id.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|(var, coeff)| coeff * values[var.index()]).sum()
    }
}

impl FromIterator<(VariableId, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (VariableId, f64)>>(iter: I) -> Self {
        iter.into_iter().fold(LinearExpr::empty(), |expr, (var, coeff)| expr.with(var, coeff))
    }
}

/// A linear constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    /// A unique name, e.g. `out_0`.
    pub name: String,
    /// A constraint role.
    pub kind: ConstraintKind,
    /// Left hand side.
    pub expr: LinearExpr,
    /// Relation.
    pub relation: Relation,
    /// Right hand side.
    pub rhs: f64,
}

impl Constraint {
    /// Checks whether the constraint holds for given values within tolerance.
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.expr.evaluate(values);

        match self.relation {
            Relation::Equal => (lhs - self.rhs).abs() <= tolerance,
            Relation::LessOrEqual => lhs <= self.rhs + tolerance,
            Relation::GreaterOrEqual => lhs >= self.rhs - tolerance,
        }
    }
}

/// A solver independent description of a minimization MILP model for a problem with `size` nodes.
///
/// Every formulation starts with a binary arc variables block `x`, where `x[i][j]` means that
/// arc `i -> j` is used.
#[derive(Clone, Debug)]
pub struct Formulation {
    name: String,
    size: usize,
    variables: Vec<VariableDef>,
    blocks: Vec<(String, VariableBlock)>,
    constraints: Vec<Constraint>,
    objective: LinearExpr,
}

impl Formulation {
    /// Creates a new formulation with arc variables block.
    pub fn new(name: &str, size: usize) -> Self {
        let mut formulation = Self {
            name: name.to_string(),
            size,
            variables: Vec::with_capacity(2 * size * size),
            blocks: vec![],
            constraints: vec![],
            objective: LinearExpr::empty(),
        };

        formulation.add_block(ARC_VARIABLES, size, size, VariableDomain::Binary, (0., 1.));

        formulation
    }

    /// Adds a block of variables with the same domain and bounds.
    pub fn add_block(
        &mut self,
        prefix: &str,
        rows: usize,
        cols: usize,
        domain: VariableDomain,
        (lower, upper): (f64, f64),
    ) -> VariableBlock {
        let block = VariableBlock { start: self.variables.len(), rows, cols };

        (0..rows).for_each(|row| {
            (0..cols).for_each(|col| {
                let name = if cols == 1 { format!("{prefix}_{row}") } else { format!("{prefix}_{row}_{col}") };
                self.variables.push(VariableDef { name, domain, lower, upper });
            })
        });

        self.blocks.push((prefix.to_string(), block));

        block
    }

    /// Adds a constraint.
    pub fn add_constraint(
        &mut self,
        name: String,
        kind: ConstraintKind,
        expr: LinearExpr,
        relation: Relation,
        rhs: f64,
    ) {
        self.constraints.push(Constraint { name, kind, expr, relation, rhs });
    }

    /// Sets minimization objective.
    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    /// Returns formulation name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns all variables in addition order.
    pub fn variables(&self) -> &[VariableDef] {
        self.variables.as_slice()
    }

    /// Returns variable definition.
    pub fn variable(&self, id: VariableId) -> &VariableDef {
        &self.variables[id.index()]
    }

    /// Returns all constraints in addition order.
    pub fn constraints(&self) -> &[Constraint] {
        self.constraints.as_slice()
    }

    /// Returns minimization objective.
    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    /// Returns arc variables block.
    pub fn arcs(&self) -> VariableBlock {
        self.blocks[0].1
    }

    /// Returns variables block by its prefix.
    pub fn block(&self, prefix: &str) -> Option<VariableBlock> {
        self.blocks.iter().find(|(name, _)| name == prefix).map(|(_, block)| *block)
    }

    /// Returns amount of constraints of given kind.
    pub fn count_constraints(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|constraint| constraint.kind == kind).count()
    }

    /// Evaluates objective for given variable values.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective.evaluate(values)
    }

    /// Returns constraints violated by given values.
    pub fn violated_constraints<'a>(
        &'a self,
        values: &'a [f64],
        tolerance: f64,
    ) -> impl Iterator<Item = &'a Constraint> + 'a {
        self.constraints.iter().filter(move |constraint| !constraint.is_satisfied(values, tolerance))
    }

    /// Checks whether values satisfy variable bounds, domains and all constraints.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.variables.len()
            && self.variables.iter().zip(values.iter()).all(|(variable, &value)| {
                let is_in_domain = match variable.domain {
                    VariableDomain::Binary => value.abs() <= tolerance || (value - 1.).abs() <= tolerance,
                    VariableDomain::Continuous => true,
                };

                is_in_domain && value >= variable.lower - tolerance && value <= variable.upper + tolerance
            })
            && self.violated_constraints(values, tolerance).next().is_none()
    }
}
