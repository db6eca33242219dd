use std::{
    process,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Exit status used when a second interrupt aborts immediately.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Installs the process-wide Ctrl-C and SIGTERM handler. The first signal
/// asks the capture loop to stop after the current step; a second one shows
/// the pointer again and exits right away.
pub fn install_stop_handler() -> Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);

    ctrlc::set_handler(move || {
        if handle_interrupt(&flag, restore_pointer) {
            process::exit(INTERRUPTED_EXIT_CODE);
        }
        warn!("Stopping after the current page, press Ctrl-C again to quit immediately");
    })
    .context("Failed to install Ctrl-C handler")?;

    Ok(stop)
}

/// Sets the stop flag. When it was already set the process is about to exit
/// without running destructors, so `restore` runs first and `true` is
/// returned.
fn handle_interrupt(flag: &AtomicBool, restore: impl FnOnce()) -> bool {
    if !flag.swap(true, Ordering::SeqCst) {
        return false;
    }
    restore();
    true
}

fn restore_pointer() {
    if let Err(err) = folio_input::restore_pointer() {
        debug!("Pointer not restored on exit: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn first_interrupt_only_requests_stop() {
        let flag = AtomicBool::new(false);
        let restored = Cell::new(0);

        assert!(!handle_interrupt(&flag, || restored.set(restored.get() + 1)));
        assert!(flag.load(Ordering::SeqCst));
        assert_eq!(restored.get(), 0);
    }

    #[test]
    fn second_interrupt_restores_pointer_before_exit() {
        let flag = AtomicBool::new(false);
        let restored = Cell::new(0);

        handle_interrupt(&flag, || restored.set(restored.get() + 1));
        assert!(handle_interrupt(&flag, || restored.set(restored.get() + 1)));
        assert_eq!(restored.get(), 1);
    }
}
