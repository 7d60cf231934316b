//! A collection of models to represent problem and formulation definitions.

mod formulation;
pub use self::formulation::*;

mod matrix;
pub use self::matrix::*;

mod tour;
pub use self::tour::Tour;
