use super::*;

#[test]
fn can_measure_duration_of_action() {
    let (result, duration) = Timer::measure_duration(|| {
        std::thread::sleep(Duration::from_millis(5));
        42
    });

    assert_eq!(result, 42);
    assert!(duration >= Duration::from_millis(5));
}

#[test]
fn can_report_elapsed_time_since_start() {
    let timer = Timer::start();

    std::thread::sleep(Duration::from_millis(2));

    assert!(timer.elapsed() >= Duration::from_millis(2));
}
