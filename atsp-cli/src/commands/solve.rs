#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use atsp_cli::extensions::experiment::{format_gap, format_objective};
use atsp_cli::scientific::atsp::read_atsp_instance;
use clap::{Arg, ArgAction, Command};

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const MODEL_ARG_NAME: &str = "model";
const SOLVER_ARG_NAME: &str = "solver";
const TIME_LIMIT_ARG_NAME: &str = "time-limit";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves a single .atsp instance with one formulation")
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
            Arg::new(SOLVER_ARG_NAME)
                .help("Specifies solver back end")
                .short('s')
                .long(SOLVER_ARG_NAME)
                .required(false)
                .default_value("microlp")
                .value_parser(["microlp", "good-lp"]),
        )
        .arg(
            Arg::new(TIME_LIMIT_ARG_NAME)
                .help("Specifies time limit in seconds. No limit if not set")
                .short('t')
                .long(TIME_LIMIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output. Stdout if not set")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether solver progress should be logged to stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let kind = parse_kind_value::<FormulationKind>(matches, MODEL_ARG_NAME)?.unwrap_or(FormulationKind::Mtz);
    let solver_kind = parse_kind_value::<SolverKind>(matches, SOLVER_ARG_NAME)?.unwrap_or(SolverKind::Microlp);
    let time_limit = parse_float_value::<f64>(matches, TIME_LIMIT_ARG_NAME, "time limit")?;
    let settings = get_solver_settings(time_limit, matches.get_flag(LOG_ARG_NAME))?;

    let instance = read_atsp_instance(problem_path).map_err(|err| format!("cannot read problem: '{err}'"))?;
    let formulation = kind.build(&instance.matrix);
    let result = create_solver(solver_kind, settings).solve(&formulation);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let mut writer = create_write_buffer(out_result);

    write_solve_result(&mut writer, &instance, kind, solver_kind, &result)
        .and_then(|_| writer.flush())
        .map_err(|err| format!("cannot write result: '{err}'"))
}

fn write_solve_result<W: Write>(
    writer: &mut W,
    instance: &Instance,
    kind: FormulationKind,
    solver_kind: SolverKind,
    result: &SolveResult,
) -> std::io::Result<()> {
    writeln!(writer, "instance: {} ({} nodes)", instance.name, instance.size())?;
    writeln!(
        writer,
        "model: {kind}, solver: {solver_kind}, variables: {}, constraints: {}",
        result.variables, result.constraints
    )?;
    writeln!(writer, "status: {}", result.outcome)?;
    writeln!(writer, "time(s): {:.3}", result.elapsed.as_secs_f64())?;
    writeln!(writer, "gap(%): {}", format_gap(&result.outcome))?;
    writeln!(writer, "objective: {}", format_objective(&result.outcome))?;

    if let Some(incumbent) = result.outcome.incumbent() {
        writeln!(writer, "tour: {}", incumbent.tour)?;
    }

    Ok(())
}
