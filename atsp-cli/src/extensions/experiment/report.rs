//! A CSV report of experiment results.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/experiment/report_test.rs"]
mod report_test;

use atsp_core::prelude::*;
use serde::Serialize;
use std::io::Write;

/// Report columns.
pub const REPORT_HEADER: [&str; 8] = [
    "Instancia",
    "Nodos",
    "Modelo",
    "Variables",
    "Restricciones",
    "Tiempo(s)",
    "Gap(%)",
    "Best Bound / Valor Objetivo",
];

/// A single row of the report: one formulation solved for one instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    /// Instance file name.
    pub instance: String,
    /// Amount of nodes.
    pub nodes: usize,
    /// Formulation name.
    pub model: String,
    /// Amount of variables.
    pub variables: usize,
    /// Amount of constraints.
    pub constraints: usize,
    /// Elapsed time in seconds with three decimals.
    pub time: String,
    /// Gap percentage with two decimals.
    pub gap: String,
    /// Objective value or `Inf` when there is no incumbent.
    pub objective: String,
}

impl ReportRow {
    /// Creates a row from solve result.
    pub fn new(instance: &Instance, kind: FormulationKind, result: &SolveResult) -> Self {
        Self {
            instance: instance.name.clone(),
            nodes: instance.size(),
            model: kind.name().to_string(),
            variables: result.variables,
            constraints: result.constraints,
            time: format!("{:.3}", result.elapsed.as_secs_f64()),
            gap: format_gap(&result.outcome),
            objective: format_objective(&result.outcome),
        }
    }
}

/// Formats gap as a percentage: zero when optimal, `100.00` without incumbent.
pub fn format_gap(outcome: &SolveOutcome) -> String {
    match outcome {
        SolveOutcome::Optimal(_) => "0.00".to_string(),
        SolveOutcome::Feasible { gap, .. } => format!("{:.2}", gap * 100.),
        SolveOutcome::NoIncumbent(_) => "100.00".to_string(),
    }
}

/// Formats objective value or returns `Inf` when there is no incumbent.
pub fn format_objective(outcome: &SolveOutcome) -> String {
    outcome.objective().map_or_else(|| "Inf".to_string(), |objective| objective.to_string())
}

/// Writes report rows as CSV. The header is written on creation, so a report without rows is
/// still a valid one.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a new writer and writes the header.
    pub fn new(writer: W) -> GenericResult<Self> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        writer.write_record(REPORT_HEADER).map_err(|err| format!("cannot write report header: '{err}'"))?;

        Ok(Self { writer })
    }

    /// Writes a single row.
    pub fn write_row(&mut self, row: &ReportRow) -> GenericResult<()> {
        self.writer.serialize(row).map_err(|err| format!("cannot write report row: '{err}'").into())
    }

    /// Flushes written rows.
    pub fn flush(&mut self) -> GenericResult<()> {
        self.writer.flush().map_err(GenericError::from)
    }
}
