#[cfg(test)]
#[path = "../../tests/unit/lp/writer_test.rs"]
mod writer_test;

use crate::common::write_wrapped;
use atsp_core::models::{Formulation, LinearExpr, VariableDomain};
use atsp_core::prelude::GenericError;
use std::io::{BufWriter, Write};

/// Max width of a line with wrapped tokens.
const MAX_LINE_WIDTH: usize = 100;

/// A trait to write formulation in CPLEX LP format.
pub trait LpModel<W: Write> {
    /// Writes formulation as a minimization model.
    fn write_lp(&self, writer: BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> LpModel<W> for Formulation {
    fn write_lp(&self, writer: BufWriter<W>) -> Result<(), GenericError> {
        let mut writer = writer;

        writeln!(writer, "\\ Problem: {}", self.name())?;

        writeln!(writer, "Minimize")?;
        let objective = std::iter::once("obj:".to_string()).chain(format_expression(self, self.objective()));
        write_wrapped(&mut writer, objective, " ", MAX_LINE_WIDTH)?;

        writeln!(writer, "Subject To")?;
        for constraint in self.constraints() {
            let tokens = std::iter::once(format!("{}:", constraint.name))
                .chain(format_expression(self, &constraint.expr))
                .chain(std::iter::once(format!("{} {}", constraint.relation, constraint.rhs)));

            write_wrapped(&mut writer, tokens, " ", MAX_LINE_WIDTH)?;
        }

        writeln!(writer, "Bounds")?;
        for variable in self.variables().iter().filter(|variable| variable.domain == VariableDomain::Continuous) {
            writeln!(writer, " {} <= {} <= {}", variable.lower, variable.name, variable.upper)?;
        }

        writeln!(writer, "Binary")?;
        let binaries = self
            .variables()
            .iter()
            .filter(|variable| variable.domain == VariableDomain::Binary)
            .map(|variable| variable.name.clone());
        write_wrapped(&mut writer, binaries, " ", MAX_LINE_WIDTH)?;

        writeln!(writer, "End")?;
        writer.flush()?;

        Ok(())
    }
}

fn format_expression(formulation: &Formulation, expr: &LinearExpr) -> Vec<String> {
    if expr.terms().is_empty() {
        // NOTE LP format has no empty expressions
        let name = formulation.variables().first().map(|variable| variable.name.as_str()).unwrap_or_default();
        return vec![format!("0 {name}")];
    }

    expr.terms()
        .iter()
        .enumerate()
        .map(|(idx, (var, coeff))| {
            let name = formulation.variable(*var).name.as_str();
            let sign = match (idx, *coeff < 0.) {
                (0, false) => "",
                (0, true) => "-",
                (_, false) => "+ ",
                (_, true) => "- ",
            };

            if coeff.abs() == 1. { format!("{sign}{name}") } else { format!("{sign}{} {name}", coeff.abs()) }
        })
        .collect()
}
