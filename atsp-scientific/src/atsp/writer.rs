#[cfg(test)]
#[path = "../../tests/unit/atsp/writer_test.rs"]
mod writer_test;

use atsp_core::models::Instance;
use atsp_core::prelude::GenericError;
use std::io::{BufWriter, Write};

/// A trait to write ATSP instance in explicit full matrix format.
pub trait AtspInstance<W: Write> {
    /// Writes instance with optional comment. Values are written in their shortest form which
    /// is parsed back into exactly the same value.
    fn write_atsp(&self, writer: BufWriter<W>, comment: Option<&str>) -> Result<(), GenericError>;
}

impl<W: Write> AtspInstance<W> for Instance {
    fn write_atsp(&self, writer: BufWriter<W>, comment: Option<&str>) -> Result<(), GenericError> {
        let mut writer = writer;
        let name = self.name.strip_suffix(".atsp").unwrap_or(self.name.as_str());

        writeln!(writer, "NAME: {name}")?;
        writeln!(writer, "TYPE: ATSP")?;
        if let Some(comment) = comment {
            writeln!(writer, "COMMENT: {comment}")?;
        }
        writeln!(writer, "DIMENSION: {}", self.size())?;
        writeln!(writer, "EDGE_WEIGHT_TYPE: EXPLICIT")?;
        writeln!(writer, "EDGE_WEIGHT_FORMAT: FULL_MATRIX")?;
        writeln!(writer, "EDGE_WEIGHT_SECTION")?;

        for row in self.matrix.rows() {
            let row = row.iter().map(|value| value.to_string()).collect::<Vec<_>>();
            writeln!(writer, "{}", row.join(" "))?;
        }

        writeln!(writer, "EOF")?;
        writer.flush()?;

        Ok(())
    }
}
