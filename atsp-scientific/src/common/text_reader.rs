#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use atsp_core::prelude::GenericError;
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// Reads next line into the buffer. Returns zero when the end of input is reached.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.into())
}

/// Splits `KEY : value` line into a trimmed key and value.
pub(crate) fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').map(|(key, value)| (key.trim(), value.trim()))
}

pub(crate) fn parse_float(data: &str, err_msg: &str) -> Result<f64, GenericError> {
    data.parse::<f64>().map_err(|err| format!("{err_msg} '{data}': '{err}'").into())
}

pub(crate) fn parse_int(data: &str, err_msg: &str) -> Result<usize, GenericError> {
    data.parse::<usize>().map_err(|err| format!("{err_msg} '{data}': '{err}'").into())
}
