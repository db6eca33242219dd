use std::ops::{Deref, DerefMut};

use folio_core::FolioError;
use folio_input::InputControl;
use tracing::{debug, error, warn};

/// Borrows the input controller for the capture loop and shows the pointer
/// again when dropped, if it was hidden through this guard.
pub struct PointerGuard<'a, I: InputControl + ?Sized> {
    input: &'a mut I,
    hidden: bool,
}

impl<'a, I: InputControl + ?Sized> PointerGuard<'a, I> {
    pub fn new(input: &'a mut I) -> Self {
        Self {
            input,
            hidden: false,
        }
    }

    /// Hides the pointer. Platforms without support are logged and skipped.
    pub fn hide(&mut self) {
        if self.hidden {
            return;
        }
        match self.input.set_pointer_visible(false) {
            Ok(()) => {
                debug!("Pointer hidden");
                self.hidden = true;
            }
            Err(FolioError::Unsupported) => {
                warn!("Pointer hiding is not supported on this platform, continuing with it visible");
            }
            Err(err) => {
                warn!("Failed to hide pointer, continuing with it visible: {}", err);
            }
        }
    }
}

impl<I: InputControl + ?Sized> Deref for PointerGuard<'_, I> {
    type Target = I;

    fn deref(&self) -> &I {
        &*self.input
    }
}

impl<I: InputControl + ?Sized> DerefMut for PointerGuard<'_, I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut *self.input
    }
}

impl<I: InputControl + ?Sized> Drop for PointerGuard<'_, I> {
    fn drop(&mut self) {
        if !self.hidden {
            return;
        }
        match self.input.set_pointer_visible(true) {
            Ok(()) => debug!("Pointer restored"),
            Err(err) => error!("Failed to restore pointer visibility: {}", err),
        }
    }
}
