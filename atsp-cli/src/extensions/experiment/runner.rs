//! Experiment driver.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/experiment/runner_test.rs"]
mod runner_test;

use super::{ReportRow, ReportWriter};
use crate::extensions::solve::interruption::is_interrupted;
use atsp_core::prelude::*;
use atsp_scientific::atsp::read_atsp_instance;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// An extension of instance files processed by experiment.
pub const INSTANCE_EXTENSION: &str = "atsp";

/// Runs every selected formulation with the same solver over all instances of a directory.
pub struct Experiment {
    models: Vec<FormulationKind>,
    solver: SolverKind,
    time_limit: Option<Duration>,
    logger: InfoLogger,
    should_interrupt: Arc<AtomicBool>,
}

/// Summarizes an experiment run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExperimentSummary {
    /// Names of instances which were solved.
    pub processed: Vec<String>,
    /// Names of instances which cannot be loaded with the reason.
    pub skipped: Vec<(String, String)>,
    /// Amount of report rows written.
    pub rows: usize,
    /// True if experiment was stopped on interruption request.
    pub is_interrupted: bool,
}

impl Experiment {
    /// Creates a new instance of `Experiment`.
    pub fn new(
        models: Vec<FormulationKind>,
        solver: SolverKind,
        time_limit: Option<Duration>,
        logger: InfoLogger,
        should_interrupt: Arc<AtomicBool>,
    ) -> Self {
        Self { models, solver, time_limit, logger, should_interrupt }
    }

    /// Solves instances from the directory in file name order and writes one report row per
    /// instance and formulation. Instances which cannot be loaded are skipped.
    pub fn run<W: Write>(&self, input_dir: &Path, writer: W) -> GenericResult<ExperimentSummary> {
        let settings = SolverSettings::new(self.time_limit, Some(self.logger.clone()))
            .with_interruption(self.should_interrupt.clone());
        let solver = create_solver(self.solver, settings);

        self.run_with_solver(solver.as_ref(), input_dir, writer)
    }

    fn run_with_solver<W: Write>(
        &self,
        solver: &dyn Solver,
        input_dir: &Path,
        writer: W,
    ) -> GenericResult<ExperimentSummary> {
        let paths = get_instance_paths(input_dir)?;
        let mut report = ReportWriter::new(writer)?;
        let mut summary = ExperimentSummary::default();

        self.log(&format!("found {} instances in '{}'", paths.len(), input_dir.display()));

        'instances: for path in paths {
            let file_name = path.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default();

            self.log(&format!(">>> processing instance: {file_name}"));

            let instance = match read_atsp_instance(&path) {
                Ok(instance) => instance,
                Err(err) => {
                    self.log(&format!("skipping instance '{file_name}': {err}"));
                    summary.skipped.push((file_name, err.to_string()));
                    continue;
                }
            };

            for &kind in self.models.iter() {
                if is_interrupted(self.should_interrupt.as_ref()) {
                    summary.is_interrupted = true;
                    break 'instances;
                }

                self.log(&format!("   - running {kind} with {}...", solver.name()));

                let formulation = kind.build(&instance.matrix);
                let result = solver.solve(&formulation);

                report.write_row(&ReportRow::new(&instance, kind, &result))?;
                summary.rows += 1;
            }

            summary.processed.push(file_name);
        }

        report.flush()?;

        if summary.is_interrupted {
            self.log("experiment is interrupted");
        }
        self.log(&format!(
            "experiment is completed: {} instances processed, {} skipped, {} rows written",
            summary.processed.len(),
            summary.skipped.len(),
            summary.rows
        ));

        Ok(summary)
    }

    fn log(&self, message: &str) {
        (self.logger)(message)
    }
}

/// Returns paths of instance files in the directory sorted by file name.
pub fn get_instance_paths(input_dir: &Path) -> GenericResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(input_dir)
        .map_err(|err| format!("cannot read input directory '{}': '{err}'", input_dir.display()))?;

    let mut paths = entries
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("cannot list input directory '{}': '{err}'", input_dir.display()))?
        .into_iter()
        .filter(|path| path.is_file() && path.extension().is_some_and(|extension| extension == INSTANCE_EXTENSION))
        .collect::<Vec<_>>();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths)
}
