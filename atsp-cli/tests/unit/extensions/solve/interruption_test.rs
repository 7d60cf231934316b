use super::*;

#[test]
fn can_share_the_same_flag() {
    let first = get_interruption_flag();
    let second = get_interruption_flag();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!is_interrupted(first.as_ref()));
}

#[test]
fn can_detect_interruption() {
    let should_interrupt = AtomicBool::new(false);
    assert!(!is_interrupted(&should_interrupt));

    should_interrupt.store(true, Ordering::Relaxed);

    assert!(is_interrupted(&should_interrupt));
}

#[test]
fn can_detect_repeated_interruption_request() {
    let should_interrupt = AtomicBool::new(false);

    assert!(!request_interruption(&should_interrupt));
    assert!(is_interrupted(&should_interrupt));
    assert!(request_interruption(&should_interrupt));
    assert!(is_interrupted(&should_interrupt));
}
