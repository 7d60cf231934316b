#[cfg(test)]
#[path = "../../tests/unit/commands/export_test.rs"]
mod export_test;

use super::*;
use atsp_cli::scientific::atsp::read_atsp_instance;
use atsp_cli::scientific::lp::LpModel;
use clap::{Arg, Command};

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const MODEL_ARG_NAME: &str = "model";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_export_app() -> Command {
    Command::new("export")
        .about("Exports formulation of a single .atsp instance in CPLEX LP format")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(MODEL_ARG_NAME)
                .help("Specifies formulation")
                .short('m')
                .long(MODEL_ARG_NAME)
                .required(false)
                .default_value("MTZ"),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for model output. Stdout if not set")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_export(matches: &ArgMatches) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let kind = parse_kind_value::<FormulationKind>(matches, MODEL_ARG_NAME)?.unwrap_or(FormulationKind::Mtz);

    let instance = read_atsp_instance(problem_path).map_err(|err| format!("cannot read problem: '{err}'"))?;
    let formulation = kind.build(&instance.matrix);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    formulation.write_lp(create_write_buffer(out_result)).map_err(|err| format!("cannot write model: '{err}'"))
}
