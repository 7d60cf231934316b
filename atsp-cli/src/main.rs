//! A command line interface to run experiments with ATSP formulations.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use clap::Command;
use commands::experiment::{get_experiment_app, run_experiment};
use commands::export::{get_export_app, run_export};
use commands::generate::{get_generate_app, run_generate};
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("experiment", experiment_matches)) => run_experiment(experiment_matches),
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        Some(("export", export_matches)) => run_export(export_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("ATSP formulations")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to solve ATSP with MTZ and GG integer programming formulations")
        .subcommand(get_experiment_app())
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
        .subcommand(get_export_app())
}
