//! Contains readers and writers of ATSP instances in TSPLIB95 explicit full matrix format.
//!
//! A typical instance looks like:
//!
//! ```text
//! NAME: br4
//! TYPE: ATSP
//! DIMENSION: 4
//! EDGE_WEIGHT_TYPE: EXPLICIT
//! EDGE_WEIGHT_FORMAT: FULL_MATRIX
//! EDGE_WEIGHT_SECTION
//! 0 2 9 10
//! 1 0 6 4
//! 15 7 0 8
//! 6 3 12 0
//! EOF
//! ```

mod error;
pub use self::error::InstanceError;

mod reader;
pub use self::reader::{AtspProblem, read_atsp_instance};

mod writer;
pub use self::writer::AtspInstance;
