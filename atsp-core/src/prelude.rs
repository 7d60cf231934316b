//! This module reimports commonly used types.

pub use crate::construction::{FormulationKind, build_formulation};
pub use crate::models::{CostMatrix, Formulation, Instance, Tour};
pub use crate::solver::{
    GoodLpSolver, Incumbent, InfoLogger, MicrolpSolver, NoIncumbentReason, SolveOutcome, SolveResult, Solver,
    SolverKind, SolverSettings, create_silent_logger, create_solver, create_stdout_logger,
};
pub use crate::utils::{GenericError, GenericResult, Timer};
