//! Experiment configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/experiment/config_test.rs"]
mod config_test;

use atsp_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::time::Duration;

/// Default directory with instances.
pub const DEFAULT_INPUT_DIR: &str = "data/atsp";
/// Default time limit of a single solve in seconds.
pub const DEFAULT_TIME_LIMIT: f64 = 3600.;

/// An experiment configuration. Missing values are taken from defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentConfig {
    /// A directory with `.atsp` instances.
    pub input_dir: Option<String>,
    /// A path to the CSV report.
    pub out_result: Option<String>,
    /// A time limit of a single solve in seconds.
    pub time_limit: Option<f64>,
    /// A solver back end name.
    pub solver: Option<String>,
    /// Formulation names.
    pub models: Option<Vec<String>>,
    /// Enables progress logging.
    pub logging: Option<bool>,
}

/// Experiment settings with all values resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentSettings {
    /// A directory with `.atsp` instances.
    pub input_dir: PathBuf,
    /// A path to the CSV report.
    pub out_result: PathBuf,
    /// A time limit of a single solve.
    pub time_limit: Duration,
    /// A solver back end.
    pub solver: SolverKind,
    /// Formulations to run for each instance, in the given order.
    pub models: Vec<FormulationKind>,
    /// Enables progress logging.
    pub logging: bool,
}

impl ExperimentConfig {
    /// Merges two configs: values set in `self` take precedence over values in `other`.
    pub fn merge(self, other: ExperimentConfig) -> Self {
        Self {
            input_dir: self.input_dir.or(other.input_dir),
            out_result: self.out_result.or(other.out_result),
            time_limit: self.time_limit.or(other.time_limit),
            solver: self.solver.or(other.solver),
            models: self.models.or(other.models),
            logging: self.logging.or(other.logging),
        }
    }

    /// Validates config and resolves missing values with defaults.
    pub fn into_settings(self) -> GenericResult<ExperimentSettings> {
        let solver = self.solver.as_deref().map_or(Ok(SolverKind::Microlp), |solver| solver.parse())?;

        let models = match self.models {
            Some(models) if models.is_empty() => return Err("at least one model should be specified".into()),
            Some(models) => models.iter().map(|model| model.parse()).collect::<GenericResult<Vec<FormulationKind>>>()?,
            None => FormulationKind::all(),
        };

        let time_limit = self.time_limit.unwrap_or(DEFAULT_TIME_LIMIT);
        if !time_limit.is_finite() || time_limit <= 0. {
            return Err(format!("time limit should be positive, got: '{time_limit}'").into());
        }
        let time_limit =
            Duration::try_from_secs_f64(time_limit).map_err(|_| format!("time limit is too large: '{time_limit}'"))?;

        let out_result = self.out_result.unwrap_or_else(|| format!("results_{}.csv", solver.name()));

        Ok(ExperimentSettings {
            input_dir: PathBuf::from(self.input_dir.unwrap_or_else(|| DEFAULT_INPUT_DIR.to_string())),
            out_result: PathBuf::from(out_result),
            time_limit,
            solver,
            models,
            logging: self.logging.unwrap_or(false),
        })
    }
}

/// Reads experiment config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<ExperimentConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
