//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// An exit code used when the process is stopped by a repeated interruption request.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static SHOULD_INTERRUPT: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Returns a flag which is set when the process receives Ctrl-C. The handler is registered on
/// the first call only, as a process can have one handler. A second Ctrl-C exits the process
/// without waiting for the solver.
pub fn get_interruption_flag() -> Arc<AtomicBool> {
    SHOULD_INTERRUPT
        .get_or_init(|| {
            let should_interrupt = Arc::new(AtomicBool::new(false));

            let result = ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || {
                    if request_interruption(should_interrupt.as_ref()) {
                        eprintln!("interrupted again, exiting");
                        std::process::exit(INTERRUPTED_EXIT_CODE);
                    }
                    eprintln!("interruption requested, stopping... press Ctrl-C again to exit immediately");
                }
            });

            if let Err(err) = result {
                eprintln!("cannot set interruption handler: '{err}'");
            }

            should_interrupt
        })
        .clone()
}

/// Requests interruption. Returns true if it was already requested before.
pub fn request_interruption(should_interrupt: &AtomicBool) -> bool {
    should_interrupt.swap(true, Ordering::Relaxed)
}

/// Checks whether interruption was requested.
pub fn is_interrupted(should_interrupt: &AtomicBool) -> bool {
    should_interrupt.load(Ordering::Relaxed)
}
