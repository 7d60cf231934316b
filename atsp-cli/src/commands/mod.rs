use atsp_cli::core::prelude::*;
use clap::ArgMatches;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;
use std::time::Duration;

pub mod experiment;
pub mod export;
pub mod generate;
pub mod solve;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_logger(is_logging: bool) -> InfoLogger {
    if is_logging { create_stdout_logger() } else { create_silent_logger() }
}

fn create_optional_logger(is_logging: bool) -> Option<InfoLogger> {
    is_logging.then(create_stdout_logger)
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_kind_value<T: FromStr<Err = GenericError>>(matches: &ArgMatches, arg_name: &str) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| arg.parse::<T>().map(Some).map_err(|err| err.to_string()))
        .unwrap_or(Ok(None))
}

fn get_time_limit(seconds: Option<f64>) -> Result<Option<Duration>, String> {
    match seconds {
        Some(seconds) if !seconds.is_finite() || seconds <= 0. => {
            Err(format!("time limit should be positive, got: '{seconds}'"))
        }
        Some(seconds) => {
            Duration::try_from_secs_f64(seconds).map(Some).map_err(|_| format!("time limit is too large: '{seconds}'"))
        }
        None => Ok(None),
    }
}

fn get_solver_settings(time_limit: Option<f64>, is_logging: bool) -> Result<SolverSettings, String> {
    Ok(SolverSettings::new(get_time_limit(time_limit)?, create_optional_logger(is_logging)))
}
