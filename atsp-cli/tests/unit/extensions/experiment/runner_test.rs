use super::*;
use crate::extensions::generate::{GenerateOptions, generate_instance};
use crate::helpers::{copy_instances, read_report};
use atsp_scientific::atsp::AtspInstance;
use std::fs;
use std::io::BufWriter;
use std::sync::Mutex;
use tempfile::TempDir;

/// Pretends that search has stopped with the `0 -> 1 -> ... -> 0` tour and a fixed gap.
struct StoppedSolver;

impl Solver for StoppedSolver {
    fn name(&self) -> &str {
        "stopped"
    }

    fn solve(&self, formulation: &Formulation) -> SolveResult {
        let size = formulation.size();
        let tour = Tour::from_successors((1..size).chain([0]).collect::<Vec<_>>().as_slice()).expect("invalid tour");

        SolveResult {
            outcome: SolveOutcome::Feasible { incumbent: Incumbent { objective: 22., tour }, gap: 0.125 },
            elapsed: Duration::from_millis(250),
            variables: formulation.variables().len(),
            constraints: formulation.constraints().len(),
        }
    }
}

fn write_generated_instance(target: &Path, size: usize) -> String {
    let options = GenerateOptions { size, cost_range: (1, 100), is_symmetric: false, seed: Some(42) };
    let instance = generate_instance(&options).expect("cannot generate instance");
    let file = fs::File::create(target.join(instance.name.as_str())).expect("cannot create instance file");

    instance.write_atsp(BufWriter::new(file), None).expect("cannot write instance");

    instance.name
}

fn create_experiment(models: Vec<FormulationKind>, should_interrupt: Arc<AtomicBool>) -> Experiment {
    Experiment::new(models, SolverKind::Microlp, Some(Duration::from_secs(60)), create_silent_logger(), should_interrupt)
}

#[test]
fn can_get_sorted_instance_paths() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    copy_instances(tmp_dir.path(), &["six_decimal.atsp", "four_asymmetric.atsp"]);
    fs::write(tmp_dir.path().join("notes.txt"), "not an instance").unwrap();
    fs::create_dir(tmp_dir.path().join("nested.atsp")).unwrap();

    let paths = get_instance_paths(tmp_dir.path()).expect("cannot get paths");

    let names = paths.iter().map(|path| path.file_name().unwrap().to_str().unwrap()).collect::<Vec<_>>();
    assert_eq!(names, vec!["four_asymmetric.atsp", "six_decimal.atsp"]);
}

#[test]
fn can_report_missing_input_dir() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");

    let result = get_instance_paths(tmp_dir.path().join("missing").as_path());

    assert!(result.unwrap_err().to_string().starts_with("cannot read input directory"));
}

#[test]
fn can_run_experiment_over_all_models() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    let input_dir = copy_instances(&tmp_dir.path().join("in"), &["four_asymmetric.atsp", "five_symmetric.atsp"]);
    let out_result = tmp_dir.path().join("report.csv");
    let experiment = create_experiment(FormulationKind::all(), Arc::new(AtomicBool::new(false)));

    let summary = experiment.run(&input_dir, fs::File::create(&out_result).unwrap()).expect("cannot run experiment");

    assert_eq!(summary.processed, vec!["five_symmetric.atsp".to_string(), "four_asymmetric.atsp".to_string()]);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.rows, 4);
    assert!(!summary.is_interrupted);

    let report = read_report(&out_result);
    let columns = report.iter().skip(1).map(|row| (row[0].as_str(), row[2].as_str())).collect::<Vec<_>>();
    assert_eq!(report.len(), 5);
    assert_eq!(
        columns,
        vec![
            ("five_symmetric.atsp", "MTZ"),
            ("five_symmetric.atsp", "GG"),
            ("four_asymmetric.atsp", "MTZ"),
            ("four_asymmetric.atsp", "GG"),
        ]
    );
}

#[test]
fn can_skip_malformed_instances() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    let input_dir = copy_instances(tmp_dir.path(), &["four_asymmetric.atsp"]);
    fs::write(input_dir.join("broken.atsp"), "NAME: broken\nEDGE_WEIGHT_SECTION\n1 2 3\nEOF\n").unwrap();
    let experiment = create_experiment(vec![FormulationKind::Mtz], Arc::new(AtomicBool::new(false)));
    let mut buffer = Vec::new();

    let summary = experiment.run(&input_dir, &mut buffer).expect("cannot run experiment");

    assert_eq!(summary.processed, vec!["four_asymmetric.atsp".to_string()]);
    assert_eq!(summary.skipped, vec![("broken.atsp".to_string(), "cannot find DIMENSION".to_string())]);
    assert_eq!(summary.rows, 1);
}

#[test]
fn can_stop_on_interruption() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    let input_dir = copy_instances(tmp_dir.path(), &["four_asymmetric.atsp"]);
    let experiment = create_experiment(FormulationKind::all(), Arc::new(AtomicBool::new(true)));
    let mut buffer = Vec::new();

    let summary = experiment.run(&input_dir, &mut buffer).expect("cannot run experiment");

    assert!(summary.is_interrupted);
    assert_eq!(summary.rows, 0);
    assert!(summary.processed.is_empty());
    assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
}

#[test]
fn can_log_progress() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    let input_dir = copy_instances(tmp_dir.path(), &["four_asymmetric.atsp"]);
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let should_interrupt = Arc::new(AtomicBool::new(false));
    let experiment = Experiment::new(vec![FormulationKind::Gg], SolverKind::GoodLp, None, logger, should_interrupt);

    experiment.run(&input_dir, Vec::new()).expect("cannot run experiment");

    let messages = messages.lock().unwrap();
    assert!(messages.contains(&">>> processing instance: four_asymmetric.atsp".to_string()));
    assert!(messages.contains(&"   - running GG with good-lp...".to_string()));
    assert!(messages.last().unwrap().starts_with("experiment is completed: 1 instances processed, 0 skipped"));
}

#[test]
fn can_write_row_without_incumbent_when_time_limit_is_reached() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    let input_dir = tmp_dir.path().join("in");
    fs::create_dir(&input_dir).expect("cannot create input dir");
    let name = write_generated_instance(&input_dir, 40);
    let out_result = tmp_dir.path().join("report.csv");
    let experiment = Experiment::new(
        vec![FormulationKind::Gg],
        SolverKind::Microlp,
        Some(Duration::from_micros(1)),
        create_silent_logger(),
        Arc::new(AtomicBool::new(false)),
    );

    let summary = experiment.run(&input_dir, fs::File::create(&out_result).unwrap()).expect("cannot run experiment");

    assert_eq!(summary.rows, 1);
    let report = read_report(&out_result);
    assert_eq!(report.len(), 2);
    let row = &report[1];
    assert_eq!(&row[..5], &[name, "40".to_string(), "GG".to_string(), "3200".to_string(), "1759".to_string()]);
    assert!(row[5].parse::<f64>().expect("cannot parse time") < 5.);
    assert_eq!(&row[6..], &["100.00".to_string(), "Inf".to_string()]);
}

#[test]
fn can_write_feasible_row_when_search_stops_early() {
    let tmp_dir = TempDir::new().expect("cannot create temp dir");
    let input_dir = copy_instances(tmp_dir.path(), &["four_asymmetric.atsp"]);
    let experiment = create_experiment(vec![FormulationKind::Mtz], Arc::new(AtomicBool::new(false)));
    let mut buffer = Vec::new();

    let summary = experiment.run_with_solver(&StoppedSolver, &input_dir, &mut buffer).expect("cannot run experiment");

    assert_eq!(summary.rows, 1);
    assert_eq!(
        String::from_utf8(buffer).unwrap().lines().nth(1),
        Some("four_asymmetric.atsp,4,MTZ,20,19,0.250,12.50,22")
    );
}
