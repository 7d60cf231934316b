//! Contains formulation builders for different subtour elimination schemes.

#[cfg(test)]
#[path = "../../tests/unit/construction/construction_test.rs"]
mod construction_test;

use crate::models::*;
use crate::utils::GenericError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod gg;
pub use self::gg::{FLOW_VARIABLES, build_gg_formulation};

mod mtz;
pub use self::mtz::{ORDER_VARIABLES, build_mtz_formulation};

/// Specifies a subtour elimination scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormulationKind {
    /// Miller-Tucker-Zemlin formulation with order variables.
    Mtz,
    /// Gavish-Graves single commodity flow formulation.
    Gg,
}

impl FormulationKind {
    /// Returns all known formulation kinds.
    pub fn all() -> Vec<FormulationKind> {
        vec![FormulationKind::Mtz, FormulationKind::Gg]
    }

    /// Returns a short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            FormulationKind::Mtz => "MTZ",
            FormulationKind::Gg => "GG",
        }
    }

    /// Builds formulation of this kind for given cost matrix.
    pub fn build(&self, matrix: &CostMatrix) -> Formulation {
        build_formulation(*self, matrix)
    }
}

impl Display for FormulationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FormulationKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mtz" => Ok(FormulationKind::Mtz),
            "gg" => Ok(FormulationKind::Gg),
            _ => Err(format!("unknown formulation: '{value}', expected one of 'mtz' or 'gg'").into()),
        }
    }
}

/// Builds formulation of given kind.
pub fn build_formulation(kind: FormulationKind, matrix: &CostMatrix) -> Formulation {
    match kind {
        FormulationKind::Mtz => build_mtz_formulation(matrix),
        FormulationKind::Gg => build_gg_formulation(matrix),
    }
}

/// Sets objective to minimize total cost of selected arcs. Diagonal costs are never used.
fn add_travel_cost_objective(formulation: &mut Formulation, matrix: &CostMatrix) {
    let size = matrix.size();
    let arcs = formulation.arcs();

    let objective = (0..size)
        .flat_map(|from| (0..size).filter(move |&to| to != from).map(move |to| (from, to)))
        .map(|(from, to)| (arcs.get(from, to), matrix.cost(from, to)))
        .collect();

    formulation.set_objective(objective);
}

/// Adds assignment constraints shared by all formulations: no self loops and exactly one
/// outgoing and one incoming arc per node.
fn add_assignment_constraints(formulation: &mut Formulation) {
    let size = formulation.size();
    let arcs = formulation.arcs();

    (0..size).for_each(|node| {
        formulation.add_constraint(
            format!("no_self_loop_{node}"),
            ConstraintKind::NoSelfLoop,
            LinearExpr::empty().with(arcs.get(node, node), 1.),
            Relation::Equal,
            0.,
        );
    });

    (0..size).for_each(|node| {
        let outgoing = (0..size).filter(|&other| other != node).map(|other| (arcs.get(node, other), 1.)).collect();
        formulation.add_constraint(format!("out_{node}"), ConstraintKind::OutDegree, outgoing, Relation::Equal, 1.);

        let incoming = (0..size).filter(|&other| other != node).map(|other| (arcs.get(other, node), 1.)).collect();
        formulation.add_constraint(format!("in_{node}"), ConstraintKind::InDegree, incoming, Relation::Equal, 1.);
    });
}
