#[cfg(test)]
#[path = "../../tests/unit/solver/good_lp_adapter_test.rs"]
mod good_lp_adapter_test;

use super::engine::{EngineSolution, run_engine};
use super::*;
use crate::models::{LinearExpr, Relation, VariableDomain};
use good_lp::solvers::microlp::MicroLpProblem;
use good_lp::{Expression, ProblemVariables, ResolutionError, Solution, SolutionStatus, SolverModel, Variable};
use good_lp::{WithTimeLimit, constraint, variable};

/// A solver which builds models through `good_lp` modeling layer and solves them with its
/// `microlp` engine.
#[derive(Clone, Default)]
pub struct GoodLpSolver {
    settings: SolverSettings,
}

impl GoodLpSolver {
    /// Creates a new instance of `GoodLpSolver`.
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }
}

impl Solver for GoodLpSolver {
    fn name(&self) -> &str {
        SolverKind::GoodLp.name()
    }

    fn solve(&self, formulation: &Formulation) -> SolveResult {
        run_engine(formulation, &self.settings, self.name(), solve_with_good_lp)
    }
}

/// Solves formulation with time limit passed to the engine. The modeling layer runs the engine
/// in one call, so interruption flag is checked only before it starts.
fn solve_with_good_lp(
    formulation: &Formulation,
    settings: &SolverSettings,
) -> Result<EngineSolution, NoIncumbentReason> {
    if settings.is_interrupted() {
        return Err(NoIncumbentReason::Interrupted);
    }

    let (model, variables) = create_model(formulation, settings);

    solve_model(formulation, model, variables.as_slice())
}

fn create_model(formulation: &Formulation, settings: &SolverSettings) -> (MicroLpProblem, Vec<Variable>) {
    let mut problem = ProblemVariables::new();

    let variables = formulation
        .variables()
        .iter()
        .map(|definition| match definition.domain {
            VariableDomain::Binary => problem.add(variable().binary().name(definition.name.as_str())),
            VariableDomain::Continuous => problem
                .add(variable().min(definition.lower).max(definition.upper).name(definition.name.as_str())),
        })
        .collect::<Vec<Variable>>();

    let to_expression = |expr: &LinearExpr| -> Expression {
        expr.terms().iter().map(|(var, coeff)| *coeff * variables[var.index()]).sum()
    };

    let mut model = problem.minimise(to_expression(formulation.objective())).using(good_lp::microlp);

    if let Some(time_limit) = settings.time_limit {
        model = model.with_time_limit(time_limit.as_secs_f64());
    }

    formulation.constraints().iter().for_each(|definition| {
        let lhs = to_expression(&definition.expr);
        let rhs = definition.rhs;

        model.add_constraint(match definition.relation {
            Relation::Equal => constraint!(lhs == rhs),
            Relation::LessOrEqual => constraint!(lhs <= rhs),
            Relation::GreaterOrEqual => constraint!(lhs >= rhs),
        });
    });

    (model, variables)
}

fn solve_model(
    formulation: &Formulation,
    model: MicroLpProblem,
    variables: &[Variable],
) -> Result<EngineSolution, NoIncumbentReason> {
    match model.solve() {
        Ok(solution) => {
            let values = variables.iter().map(|&var| solution.value(var)).collect::<Vec<_>>();
            let is_optimal = matches!(solution.status(), SolutionStatus::Optimal);
            let gap = if is_optimal { 0. } else { solution.into_inner().gap().unwrap_or(1.) };

            Ok(EngineSolution { objective: formulation.objective_value(values.as_slice()), values, is_optimal, gap })
        }
        Err(ResolutionError::Infeasible) => Err(NoIncumbentReason::Infeasible),
        // NOTE the modeling layer reports an engine call stopped without incumbent as `Other`
        Err(ResolutionError::Other(_)) => Err(NoIncumbentReason::TimeLimit),
        Err(err) => Err(NoIncumbentReason::Failed(err.to_string())),
    }
}
