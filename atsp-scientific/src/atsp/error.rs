#[cfg(test)]
#[path = "../../tests/unit/atsp/error_test.rs"]
mod error_test;

use atsp_core::prelude::GenericError;
use std::fmt::{Display, Formatter};

/// Specifies reasons why an instance cannot be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstanceError {
    /// No `DIMENSION` line was found.
    MissingDimension,
    /// Amount of matrix values differs from `DIMENSION` squared.
    SizeMismatch {
        /// Expected amount of values.
        expected: usize,
        /// Actual amount of values.
        actual: usize,
    },
    /// Malformed content.
    Format(String),
    /// Input cannot be read.
    Io(String),
}

impl Display for InstanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::MissingDimension => write!(f, "cannot find DIMENSION"),
            InstanceError::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} values in EDGE_WEIGHT_SECTION, got: '{actual}'")
            }
            InstanceError::Format(msg) => write!(f, "invalid format: {msg}"),
            InstanceError::Io(msg) => write!(f, "cannot read instance: {msg}"),
        }
    }
}

impl std::error::Error for InstanceError {}

impl From<std::io::Error> for InstanceError {
    fn from(err: std::io::Error) -> Self {
        InstanceError::Io(err.to_string())
    }
}

impl From<InstanceError> for GenericError {
    fn from(err: InstanceError) -> Self {
        err.to_string().into()
    }
}
