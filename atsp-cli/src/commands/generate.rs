#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use atsp_cli::extensions::generate::{GenerateOptions, generate_instance};
use atsp_cli::scientific::atsp::AtspInstance;
use clap::{Arg, ArgAction, Command};

const SIZE_ARG_NAME: &str = "size";
const MIN_COST_ARG_NAME: &str = "min";
const MAX_COST_ARG_NAME: &str = "max";
const SYMMETRIC_ARG_NAME: &str = "symmetric";
const SEED_ARG_NAME: &str = "seed";
const COMMENT_ARG_NAME: &str = "comment";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a random .atsp instance with integer costs")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Specifies amount of nodes")
                .short('n')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MIN_COST_ARG_NAME)
                .help("Specifies min travel cost")
                .long(MIN_COST_ARG_NAME)
                .required(false)
                .default_value("1"),
        )
        .arg(
            Arg::new(MAX_COST_ARG_NAME)
                .help("Specifies max travel cost")
                .long(MAX_COST_ARG_NAME)
                .required(false)
                .default_value("100"),
        )
        .arg(
            Arg::new(SYMMETRIC_ARG_NAME)
                .help("Generates symmetric costs")
                .long(SYMMETRIC_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new(SEED_ARG_NAME).help("Specifies random seed").long(SEED_ARG_NAME).required(false))
        .arg(Arg::new(COMMENT_ARG_NAME).help("Specifies instance comment").long(COMMENT_ARG_NAME).required(false))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for instance output. Stdout if not set")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "size")?.ok_or("size is not specified")?;
    let min = parse_int_value::<u32>(matches, MIN_COST_ARG_NAME, "min cost")?.unwrap_or(1);
    let max = parse_int_value::<u32>(matches, MAX_COST_ARG_NAME, "max cost")?.unwrap_or(100);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let is_symmetric = matches.get_flag(SYMMETRIC_ARG_NAME);

    let options = GenerateOptions { size, cost_range: (min, max), is_symmetric, seed };
    let instance = generate_instance(&options).map_err(|err| format!("cannot generate instance: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let comment = matches.get_one::<String>(COMMENT_ARG_NAME).map(String::as_str);

    instance
        .write_atsp(create_write_buffer(out_result), comment)
        .map_err(|err| format!("cannot write instance: '{err}'"))
}
