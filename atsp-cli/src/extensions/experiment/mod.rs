//! Experiment command helpers: runs formulations over a directory of instances and writes a
//! CSV report.

mod config;
pub use self::config::*;

mod report;
pub use self::report::*;

mod runner;
pub use self::runner::*;
