//! Scientific crate contains logic to read and write problem formats used to benchmark ATSP
//! formulations.
//!
//!
//! # Supported formats
//!
//! - **atsp**: explicit full matrix subset of TSPLIB95 format, see [TSPLIB](http://comopt.ifi.uni-heidelberg.de/software/TSPLIB95/)
//! - **lp**: CPLEX LP format to export formulations for external MILP solvers

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use atsp_core as core;

pub mod atsp;
pub mod common;
pub mod lp;
