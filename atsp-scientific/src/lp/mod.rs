//! Contains a writer of formulations in CPLEX LP format, so models can be solved by external
//! MILP solvers.

mod writer;
pub use self::writer::LpModel;
