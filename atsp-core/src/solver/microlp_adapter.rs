#[cfg(test)]
#[path = "../../tests/unit/solver/microlp_adapter_test.rs"]
mod microlp_adapter_test;

use super::engine::{EngineSolution, run_engine};
use super::*;
use crate::models::{Relation, VariableDomain};
use crate::utils::Timer;
use microlp::{ComparisonOp, OptimizationDirection, Problem, ResumeOptions, SolutionStatus, SolveOptions};
use microlp::{TerminationReason, Variable};

/// Max duration of a single engine call when interruption is requested through a flag: the
/// search is resumed until the time limit while the flag is not set.
const INTERRUPTION_CHECK_INTERVAL: Duration = Duration::from_millis(100);

/// A solver which uses native API of pure Rust `microlp` engine.
#[derive(Clone, Default)]
pub struct MicrolpSolver {
    settings: SolverSettings,
}

impl MicrolpSolver {
    /// Creates a new instance of `MicrolpSolver`.
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }
}

impl Solver for MicrolpSolver {
    fn name(&self) -> &str {
        SolverKind::Microlp.name()
    }

    fn solve(&self, formulation: &Formulation) -> SolveResult {
        run_engine(formulation, &self.settings, self.name(), solve_with_microlp)
    }
}

fn solve_with_microlp(
    formulation: &Formulation,
    settings: &SolverSettings,
) -> Result<EngineSolution, NoIncumbentReason> {
    let (problem, variables) = create_problem(formulation);

    solve_problem(&problem, variables.as_slice(), SolveOptions::default(), settings)
}

/// Translates formulation into `microlp` problem. Returned variables are in formulation order.
fn create_problem(formulation: &Formulation) -> (Problem, Vec<Variable>) {
    let mut problem = Problem::new(OptimizationDirection::Minimize);

    let mut obj_coeffs = vec![0.; formulation.variables().len()];
    formulation.objective().terms().iter().for_each(|(var, coeff)| obj_coeffs[var.index()] += coeff);

    let variables = formulation
        .variables()
        .iter()
        .zip(obj_coeffs)
        .map(|(variable, obj_coeff)| match variable.domain {
            VariableDomain::Binary => problem.add_binary_var(obj_coeff),
            VariableDomain::Continuous => problem.add_var(obj_coeff, (variable.lower, variable.upper)),
        })
        .collect::<Vec<_>>();

    formulation.constraints().iter().for_each(|constraint| {
        let expr =
            constraint.expr.terms().iter().map(|(var, coeff)| (variables[var.index()], *coeff)).collect::<Vec<_>>();

        let cmp_op = match constraint.relation {
            Relation::Equal => ComparisonOp::Eq,
            Relation::LessOrEqual => ComparisonOp::Le,
            Relation::GreaterOrEqual => ComparisonOp::Ge,
        };

        problem.add_constraint(expr, cmp_op, constraint.rhs);
    });

    (problem, variables)
}

/// Runs branch and bound search within time limit. When settings have interruption flag, the
/// search runs in short calls and the flag is checked between them.
fn solve_problem(
    problem: &Problem,
    variables: &[Variable],
    mut options: SolveOptions,
    settings: &SolverSettings,
) -> Result<EngineSolution, NoIncumbentReason> {
    if settings.is_interrupted() {
        return Err(NoIncumbentReason::Interrupted);
    }

    let timer = Timer::start();
    let mip_gap = options.mip_gap;

    options.time_limit = get_call_time_limit(settings, &timer);
    let mut outcome = problem.solve_with(options).map_err(get_no_incumbent_reason)?;

    while matches!(outcome.termination_reason(), TerminationReason::TimeLimit)
        && !settings.is_interrupted()
        && settings.time_limit.is_none_or(|limit| timer.elapsed() < limit)
    {
        let mut resume_options = ResumeOptions::default();
        resume_options.time_limit = get_call_time_limit(settings, &timer);
        resume_options.mip_gap = Some(mip_gap);

        outcome = outcome.resume_with(resume_options).map_err(get_no_incumbent_reason)?;
    }

    match outcome.into_solution() {
        Ok(solution) => Ok(EngineSolution {
            objective: solution.objective(),
            values: variables.iter().map(|&var| solution[var]).collect(),
            is_optimal: solution.status() == SolutionStatus::Optimal,
            gap: solution.gap().unwrap_or(1.),
        }),
        Err(_) if settings.is_interrupted() => Err(NoIncumbentReason::Interrupted),
        Err(_) => Err(NoIncumbentReason::TimeLimit),
    }
}

/// Returns time limit of the next engine call: the remaining time, cut to the check interval
/// when interruption flag is present.
fn get_call_time_limit(settings: &SolverSettings, timer: &Timer) -> Option<Duration> {
    let remaining = settings.time_limit.map(|limit| limit.saturating_sub(timer.elapsed()));

    match (remaining, settings.should_interrupt.is_some()) {
        (Some(remaining), true) => Some(remaining.min(INTERRUPTION_CHECK_INTERVAL)),
        (None, true) => Some(INTERRUPTION_CHECK_INTERVAL),
        (remaining, false) => remaining,
    }
}

fn get_no_incumbent_reason(err: microlp::Error) -> NoIncumbentReason {
    match err {
        microlp::Error::Infeasible => NoIncumbentReason::Infeasible,
        err => NoIncumbentReason::Failed(err.to_string()),
    }
}
