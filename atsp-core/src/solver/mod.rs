//! Contains the solver adapter contract and its implementations.
//!
//! The branch-and-bound search itself runs inside external MILP engines: a solver adapter only
//! translates a [`Formulation`] into engine specific API, passes the time limit to the engine and
//! normalizes the result into a [`SolveResult`].

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::models::{Formulation, Tour};
use crate::utils::GenericError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

mod engine;

mod good_lp_adapter;
pub use self::good_lp_adapter::GoodLpSolver;

mod microlp_adapter;
pub use self::microlp_adapter::MicrolpSolver;

mod telemetry;
pub use self::telemetry::*;

/// A best feasible solution found by a solver.
#[derive(Clone, Debug, PartialEq)]
pub struct Incumbent {
    /// Objective value.
    pub objective: f64,
    /// A tour decoded from arc variables.
    pub tour: Tour,
}

/// Specifies why solver terminated without any feasible solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoIncumbentReason {
    /// The model is proven to be infeasible.
    Infeasible,
    /// Time limit is reached before any feasible solution is found.
    TimeLimit,
    /// Solving is interrupted on request before any feasible solution is found.
    Interrupted,
    /// Solver engine has failed.
    Failed(String),
}

/// An outcome of a single solver run.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveOutcome {
    /// Optimality is proven: the gap is zero.
    Optimal(Incumbent),
    /// Search is stopped with a feasible solution, but without optimality proof.
    Feasible {
        /// Best solution found.
        incumbent: Incumbent,
        /// Relative gap between best bound and incumbent, e.g. 0.05 for 5%.
        gap: f64,
    },
    /// No feasible solution is known at termination.
    NoIncumbent(NoIncumbentReason),
}

impl SolveOutcome {
    /// Returns incumbent, if any.
    pub fn incumbent(&self) -> Option<&Incumbent> {
        match self {
            SolveOutcome::Optimal(incumbent) | SolveOutcome::Feasible { incumbent, .. } => Some(incumbent),
            SolveOutcome::NoIncumbent(_) => None,
        }
    }

    /// Returns objective value of incumbent, if any.
    pub fn objective(&self) -> Option<f64> {
        self.incumbent().map(|incumbent| incumbent.objective)
    }

    /// Returns relative gap: zero when optimal, `None` when there is no incumbent.
    pub fn gap(&self) -> Option<f64> {
        match self {
            SolveOutcome::Optimal(_) => Some(0.),
            SolveOutcome::Feasible { gap, .. } => Some(*gap),
            SolveOutcome::NoIncumbent(_) => None,
        }
    }

    /// Returns true if optimality is proven.
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveOutcome::Optimal(_))
    }
}

impl Display for SolveOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveOutcome::Optimal(incumbent) => write!(f, "optimal, objective: {}", incumbent.objective),
            SolveOutcome::Feasible { incumbent, gap } => {
                write!(f, "feasible, objective: {}, gap: {:.2}%", incumbent.objective, gap * 100.)
            }
            SolveOutcome::NoIncumbent(NoIncumbentReason::Infeasible) => write!(f, "no incumbent, model is infeasible"),
            SolveOutcome::NoIncumbent(NoIncumbentReason::TimeLimit) => write!(f, "no incumbent, time limit reached"),
            SolveOutcome::NoIncumbent(NoIncumbentReason::Interrupted) => write!(f, "no incumbent, interrupted"),
            SolveOutcome::NoIncumbent(NoIncumbentReason::Failed(err)) => write!(f, "no incumbent, solver failed: {err}"),
        }
    }
}

/// Keeps solution statistics of a single solver run.
#[derive(Clone, Debug)]
pub struct SolveResult {
    /// A solve outcome.
    pub outcome: SolveOutcome,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
    /// Amount of model variables.
    pub variables: usize,
    /// Amount of model constraints.
    pub constraints: usize,
}

/// Solves formulations using some MILP engine.
pub trait Solver {
    /// Returns solver name.
    fn name(&self) -> &str;

    /// Solves formulation to optimality or until time limit is reached. Engine failures are
    /// reported as an outcome without incumbent.
    fn solve(&self, formulation: &Formulation) -> SolveResult;
}

/// Specifies solver settings shared by all adapters.
#[derive(Clone, Default)]
pub struct SolverSettings {
    /// Max time of a single solve. No limit if not set.
    pub time_limit: Option<Duration>,
    /// A logger for solver progress.
    pub logger: Option<InfoLogger>,
    /// A flag which requests to stop solving as soon as the engine allows.
    pub should_interrupt: Option<Arc<AtomicBool>>,
}

impl SolverSettings {
    /// Creates settings with given time limit and logger.
    pub fn new(time_limit: Option<Duration>, logger: Option<InfoLogger>) -> Self {
        Self { time_limit, logger, should_interrupt: None }
    }

    /// Sets a flag which is checked while solving.
    pub fn with_interruption(mut self, should_interrupt: Arc<AtomicBool>) -> Self {
        self.should_interrupt = Some(should_interrupt);
        self
    }

    pub(crate) fn is_interrupted(&self) -> bool {
        self.should_interrupt.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    pub(crate) fn log(&self, message: &str) {
        if let Some(logger) = self.logger.as_ref() {
            (logger)(message)
        }
    }
}

/// Specifies a solver back end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Native `microlp` engine.
    Microlp,
    /// `good_lp` modeling layer.
    GoodLp,
}

impl SolverKind {
    /// Returns all known solver kinds.
    pub fn all() -> Vec<SolverKind> {
        vec![SolverKind::Microlp, SolverKind::GoodLp]
    }

    /// Returns solver name.
    pub fn name(&self) -> &'static str {
        match self {
            SolverKind::Microlp => "microlp",
            SolverKind::GoodLp => "good-lp",
        }
    }
}

impl Display for SolverKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SolverKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "microlp" => Ok(SolverKind::Microlp),
            "good-lp" | "good_lp" | "goodlp" => Ok(SolverKind::GoodLp),
            _ => Err(format!("unknown solver: '{value}', expected one of 'microlp' or 'good-lp'").into()),
        }
    }
}

/// Creates solver of given kind.
pub fn create_solver(kind: SolverKind, settings: SolverSettings) -> Box<dyn Solver> {
    match kind {
        SolverKind::Microlp => Box::new(MicrolpSolver::new(settings)),
        SolverKind::GoodLp => Box::new(GoodLpSolver::new(settings)),
    }
}
