//! Core crate contains the building blocks to formulate and solve the ***Asymmetric Traveling
//! Salesman Problem*** (ATSP) as a mixed integer linear program.
//!
//! # Formulations
//!
//! Two well known subtour elimination schemes are supported:
//!
//! - **MTZ**: Miller-Tucker-Zemlin formulation which uses auxiliary order variables.
//! - **GG**: Gavish-Graves single commodity flow formulation which uses auxiliary flow variables.
//!
//! Both are expressed as a solver independent [`Formulation`](models::Formulation), so they are
//! interchangeable inputs for any [`Solver`](solver::Solver) implementation.
//!
//! # Example
//!
//! ```
//! use atsp_core::prelude::*;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![0., 2., 9., 10.],
//!     vec![1., 0., 6., 4.],
//!     vec![15., 7., 0., 8.],
//!     vec![6., 3., 12., 0.],
//! ])
//! .unwrap();
//!
//! let formulation = FormulationKind::Mtz.build(&matrix);
//! let result = MicrolpSolver::default().solve(&formulation);
//!
//! let objective = result.outcome.objective().expect("no incumbent");
//! assert!((objective - 21.).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
