//! Solve command helpers.

pub mod interruption;
