#[cfg(test)]
#[path = "../../tests/unit/atsp/reader_test.rs"]
mod reader_test;

use super::InstanceError;
use crate::common::*;
use atsp_core::models::{CostMatrix, Instance};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A trait to read ATSP instances in explicit full matrix format.
pub trait AtspProblem {
    /// Reads cost matrix.
    fn read_atsp(self) -> Result<CostMatrix, InstanceError>;
}

impl<R: Read> AtspProblem for BufReader<R> {
    fn read_atsp(self) -> Result<CostMatrix, InstanceError> {
        AtspReader::new(self).read_matrix()
    }
}

impl AtspProblem for String {
    fn read_atsp(self) -> Result<CostMatrix, InstanceError> {
        AtspReader::new(BufReader::new(self.as_bytes())).read_matrix()
    }
}

/// Reads an instance from the file. The instance is named by the file name.
pub fn read_atsp_instance<P: AsRef<Path>>(path: P) -> Result<Instance, InstanceError> {
    let path = path.as_ref();
    let matrix = BufReader::new(File::open(path)?).read_atsp()?;
    let name = path.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default();

    Ok(Instance::new(name.as_str(), matrix))
}

struct AtspReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    dimension: Option<usize>,
    values: Vec<f64>,
}

impl<R: Read> AtspReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, dimension: None, values: vec![] }
    }

    fn read_matrix(mut self) -> Result<CostMatrix, InstanceError> {
        self.read_lines()?;

        let dimension = self.dimension.ok_or(InstanceError::MissingDimension)?;
        let expected = dimension
            .checked_mul(dimension)
            .ok_or_else(|| InstanceError::Format(format!("DIMENSION is too large: '{dimension}'")))?;
        if self.values.len() != expected {
            return Err(InstanceError::SizeMismatch { expected, actual: self.values.len() });
        }

        CostMatrix::new(dimension, self.values).map_err(|err| InstanceError::Format(err.to_string()))
    }

    fn read_lines(&mut self) -> Result<(), InstanceError> {
        let mut is_matrix_section = false;

        while self.read_line()? > 0 {
            let line = self.buffer.trim();

            if line.starts_with("DIMENSION") {
                self.dimension = Some(parse_dimension(line)?);
            }

            if line.starts_with("EDGE_WEIGHT_SECTION") {
                is_matrix_section = true;
                continue;
            }

            if line.starts_with("EOF") {
                break;
            }

            if is_matrix_section {
                for token in line.split_whitespace() {
                    let value = parse_float(token, "cannot parse matrix value").map_err(format_error)?;
                    self.values.push(value);
                }
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> Result<usize, InstanceError> {
        read_line(&mut self.reader, &mut self.buffer).map_err(|err| InstanceError::Io(err.to_string()))
    }
}

fn parse_dimension(line: &str) -> Result<usize, InstanceError> {
    let (_, value) =
        split_key_value(line).ok_or_else(|| InstanceError::Format(format!("expected colon after DIMENSION: '{line}'")))?;

    let dimension = parse_int(value, "cannot parse DIMENSION").map_err(format_error)?;
    if dimension < 2 {
        return Err(InstanceError::Format(format!("DIMENSION should be at least 2, got: '{dimension}'")));
    }

    Ok(dimension)
}

fn format_error(err: impl ToString) -> InstanceError {
    InstanceError::Format(err.to_string())
}
