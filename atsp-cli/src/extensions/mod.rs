//! Module provides various helper functionality.

pub mod experiment;
pub mod generate;
pub mod solve;
