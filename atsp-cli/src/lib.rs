//! A library behind a command line interface to run experiments with ATSP formulations.
//!
//! # Example
//!
//! ```no_run
//! use atsp_cli::extensions::experiment::{read_config, ExperimentConfig};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let config = read_config(BufReader::new(File::open("data/config/experiment.json")?))?;
//! let settings = config.merge(ExperimentConfig::default()).into_settings()?;
//!
//! println!("solving instances from '{}'", settings.input_dir.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/features/experiment_test.rs"]
mod experiment_feature_test;

pub use atsp_core as core;
pub use atsp_scientific as scientific;

pub mod extensions;
