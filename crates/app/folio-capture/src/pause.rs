use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use folio_core::{FolioError, FolioResult};

const DEFAULT_SLICE: Duration = Duration::from_millis(50);

/// Waits between capture steps.
pub trait Pause {
    /// Waits for `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Cancelled`] as soon as `stop_signal` is set.
    fn pause(&mut self, duration: Duration, stop_signal: &AtomicBool) -> FolioResult<()>;
}

/// Sleeps the current thread in short slices so a stop request is noticed
/// promptly.
#[derive(Debug, Clone, Copy)]
pub struct ThreadPause {
    slice: Duration,
}

impl ThreadPause {
    pub fn new() -> Self {
        Self::with_slice(DEFAULT_SLICE)
    }

    pub fn with_slice(slice: Duration) -> Self {
        Self {
            slice: slice.max(Duration::from_millis(1)),
        }
    }
}

impl Default for ThreadPause {
    fn default() -> Self {
        Self::new()
    }
}

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration, stop_signal: &AtomicBool) -> FolioResult<()> {
        // Waits past the clock's range only end through the stop signal.
        let deadline = Instant::now().checked_add(duration);
        loop {
            if stop_signal.load(Ordering::SeqCst) {
                return Err(FolioError::Cancelled);
            }
            let remaining = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(());
                    }
                    deadline - now
                }
                None => self.slice,
            };
            thread::sleep(self.slice.min(remaining));
        }
    }
}
