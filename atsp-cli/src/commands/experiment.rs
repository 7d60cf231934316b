#[cfg(test)]
#[path = "../../tests/unit/commands/experiment_test.rs"]
mod experiment_test;

use super::*;
use atsp_cli::extensions::experiment::{Experiment, ExperimentConfig, ExperimentSummary, read_config};
use atsp_cli::extensions::solve::interruption::get_interruption_flag;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;

const INPUT_DIR_ARG_NAME: &str = "input-dir";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const TIME_LIMIT_ARG_NAME: &str = "time-limit";
const SOLVER_ARG_NAME: &str = "solver";
const MODELS_ARG_NAME: &str = "models";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";

pub fn get_experiment_app() -> Command {
    Command::new("experiment")
        .about("Solves all .atsp instances of a directory with each formulation and writes a csv report")
        .arg(
            Arg::new(INPUT_DIR_ARG_NAME)
                .help("Specifies path to the directory with .atsp instances")
                .short('i')
                .long(INPUT_DIR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the csv report")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_LIMIT_ARG_NAME)
                .help("Specifies time limit of a single solve in seconds")
                .short('t')
                .long(TIME_LIMIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SOLVER_ARG_NAME)
                .help("Specifies solver back end")
                .short('s')
                .long(SOLVER_ARG_NAME)
                .required(false)
                .value_parser(["microlp", "good-lp"]),
        )
        .arg(
            Arg::new(MODELS_ARG_NAME)
                .help("Specifies comma separated list of formulations, e.g. MTZ,GG")
                .short('m')
                .long(MODELS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json config. Explicit arguments override its values")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether progress should be logged to stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_experiment(matches: &ArgMatches) -> Result<(), String> {
    let file_config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()
        .map_err(|err| err.to_string())?
        .unwrap_or_default();

    let settings = get_config_from_args(matches)?
        .merge(file_config)
        .into_settings()
        .map_err(|err| format!("invalid experiment settings: '{err}'"))?;

    let logger = create_logger(settings.logging);
    let out_result = create_file(&settings.out_result.to_string_lossy(), "out result");

    let experiment = Experiment::new(
        settings.models.clone(),
        settings.solver,
        Some(settings.time_limit),
        logger.clone(),
        get_interruption_flag(),
    );

    let summary = experiment
        .run(settings.input_dir.as_path(), out_result)
        .map_err(|err| format!("cannot run experiment: '{err}'"))?;

    report_summary(&summary);
    (logger)(&format!("results are saved to '{}'", settings.out_result.display()));

    Ok(())
}

fn get_config_from_args(matches: &ArgMatches) -> Result<ExperimentConfig, String> {
    let models = matches.get_one::<String>(MODELS_ARG_NAME).map(|models| {
        models.split(',').map(|model| model.trim()).filter(|model| !model.is_empty()).map(str::to_string).collect()
    });

    Ok(ExperimentConfig {
        input_dir: matches.get_one::<String>(INPUT_DIR_ARG_NAME).cloned(),
        out_result: matches.get_one::<String>(OUT_RESULT_ARG_NAME).cloned(),
        time_limit: parse_float_value(matches, TIME_LIMIT_ARG_NAME, "time limit")?,
        solver: matches.get_one::<String>(SOLVER_ARG_NAME).cloned(),
        models,
        logging: matches.get_flag(LOG_ARG_NAME).then_some(true),
    })
}

fn report_summary(summary: &ExperimentSummary) {
    summary.skipped.iter().for_each(|(name, reason)| eprintln!("skipped instance '{name}': {reason}"));

    if summary.is_interrupted {
        eprintln!("experiment was interrupted, report contains {} rows", summary.rows);
    }
}
