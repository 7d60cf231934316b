use super::*;
use atsp_cli::scientific::atsp::read_atsp_instance;
use std::fs;
use tempfile::TempDir;

const FOUR_ASYMMETRIC_PATH: &str = "../data/atsp/four_asymmetric.atsp";

fn run_solve_to_string(args: &[&str]) -> String {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    let out_result = tmp_dir.path().join("result.txt");
    let mut args = args.to_vec();
    args.extend(["-o", out_result.to_str().unwrap()]);

    let matches = get_solve_app().try_get_matches_from(args).expect("cannot parse arguments");
    run_solve(&matches).expect("cannot run solve");

    fs::read_to_string(out_result).expect("cannot read result")
}

fn get_value<'a>(result: &'a str, key: &str) -> &'a str {
    result
        .lines()
        .find_map(|line| line.strip_prefix(key).and_then(|rest| rest.strip_prefix(": ")))
        .unwrap_or_else(|| panic!("cannot find '{key}' in '{result}'"))
}

#[test]
fn can_solve_problem_with_default_args() {
    let result = run_solve_to_string(&["solve", FOUR_ASYMMETRIC_PATH]);

    assert!(result.starts_with("instance: four_asymmetric.atsp (4 nodes)\n"));
    assert_eq!(get_value(&result, "model"), "MTZ, solver: microlp, variables: 20, constraints: 19");
    assert!(get_value(&result, "status").starts_with("optimal"));
    assert_eq!(get_value(&result, "gap(%)"), "0.00");
    assert_float_eq!(get_value(&result, "objective").parse::<f64>().unwrap(), 21.);
    assert_eq!(get_value(&result, "tour"), "0 -> 2 -> 3 -> 1 -> 0");
}

#[test]
fn can_solve_problem_with_gg_and_good_lp() {
    let result = run_solve_to_string(&["solve", FOUR_ASYMMETRIC_PATH, "-m", "gg", "-s", "good-lp", "-t", "60"]);

    assert_eq!(get_value(&result, "model"), "GG, solver: good-lp, variables: 32, constraints: 31");
    assert_float_eq!(get_value(&result, "objective").parse::<f64>().unwrap(), 21.);
    assert_eq!(get_value(&result, "tour"), "0 -> 2 -> 3 -> 1 -> 0");
}

#[test]
fn can_write_result_without_incumbent() {
    let instance = read_atsp_instance(FOUR_ASYMMETRIC_PATH).expect("cannot read instance");
    let result = SolveResult {
        outcome: SolveOutcome::NoIncumbent(NoIncumbentReason::TimeLimit),
        elapsed: Duration::from_millis(1500),
        variables: 20,
        constraints: 19,
    };
    let mut buffer = Vec::new();

    write_solve_result(&mut buffer, &instance, FormulationKind::Mtz, SolverKind::Microlp, &result)
        .expect("cannot write result");

    assert_eq!(
        String::from_utf8(buffer).expect("invalid utf8"),
        "instance: four_asymmetric.atsp (4 nodes)\n\
         model: MTZ, solver: microlp, variables: 20, constraints: 19\n\
         status: no incumbent, time limit reached\n\
         time(s): 1.500\n\
         gap(%): 100.00\n\
         objective: Inf\n"
    );
}

#[test]
fn can_reject_unknown_model() {
    let matches = get_solve_app().try_get_matches_from(["solve", FOUR_ASYMMETRIC_PATH, "-m", "dfj"]).unwrap();

    let result = run_solve(&matches);

    assert_eq!(result, Err("unknown formulation: 'dfj', expected one of 'mtz' or 'gg'".to_string()));
}

#[test]
fn can_reject_non_positive_time_limit() {
    let matches = get_solve_app().try_get_matches_from(["solve", FOUR_ASYMMETRIC_PATH, "-t", "0"]).unwrap();

    let result = run_solve(&matches);

    assert_eq!(result, Err("time limit should be positive, got: '0'".to_string()));
}

#[test]
fn can_reject_too_large_time_limit() {
    let matches = get_solve_app().try_get_matches_from(["solve", FOUR_ASYMMETRIC_PATH, "-t", "1e30"]).unwrap();

    let result = run_solve(&matches);

    assert_eq!(result, Err("time limit is too large: '1000000000000000000000000000000'".to_string()));
}

#[test]
fn can_report_missing_problem_file() {
    let matches = get_solve_app().try_get_matches_from(["solve", "../data/atsp/missing.atsp"]).unwrap();

    let result = run_solve(&matches);

    assert!(result.unwrap_err().starts_with("cannot read problem: 'cannot read instance: "));
}
