#[cfg(test)]
#[path = "../../tests/unit/solver/engine_test.rs"]
mod engine_test;

use super::*;
use crate::utils::Timer;

/// Variable values and objective of the best solution returned by a MILP engine.
pub(crate) struct EngineSolution {
    pub objective: f64,
    pub values: Vec<f64>,
    /// True if the engine has proven optimality.
    pub is_optimal: bool,
    /// Relative gap between incumbent and best bound reported by the engine.
    pub gap: f64,
}

/// A function which solves formulation using concrete engine API. The engine is expected to
/// respect time limit and interruption flag of the settings.
pub(crate) type EngineFn = fn(&Formulation, &SolverSettings) -> Result<EngineSolution, NoIncumbentReason>;

/// Runs engine and normalizes its output into a solve result.
pub(crate) fn run_engine(
    formulation: &Formulation,
    settings: &SolverSettings,
    solver_name: &str,
    engine: EngineFn,
) -> SolveResult {
    let variables = formulation.variables().len();
    let constraints = formulation.constraints().len();

    settings.log(&format!(
        "solving {} model with {solver_name}: {variables} variables, {constraints} constraints, time limit: {}",
        formulation.name(),
        settings.time_limit.map_or("none".to_string(), |limit| format!("{}s", limit.as_secs_f64()))
    ));

    let (result, elapsed) = Timer::measure_duration(|| engine(formulation, settings));

    let outcome = match result {
        Ok(solution) => create_outcome(formulation, solution),
        Err(reason) => SolveOutcome::NoIncumbent(reason),
    };

    settings.log(&format!("{} finished in {:.3}s: {outcome}", formulation.name(), elapsed.as_secs_f64()));

    SolveResult { outcome, elapsed, variables, constraints }
}

fn create_outcome(formulation: &Formulation, solution: EngineSolution) -> SolveOutcome {
    let arc_values = formulation.arcs().ids().map(|id| solution.values[id.index()]).collect::<Vec<_>>();

    let tour = match Tour::from_arc_values(formulation.size(), arc_values.as_slice()) {
        Ok(tour) => tour,
        Err(err) => {
            return SolveOutcome::NoIncumbent(NoIncumbentReason::Failed(format!(
                "cannot decode tour from solution: {err}"
            )));
        }
    };

    let incumbent = Incumbent { objective: solution.objective, tour };

    if solution.is_optimal {
        SolveOutcome::Optimal(incumbent)
    } else {
        // NOTE engines may report a tiny negative gap because of float round off
        SolveOutcome::Feasible { incumbent, gap: solution.gap.max(0.) }
    }
}
