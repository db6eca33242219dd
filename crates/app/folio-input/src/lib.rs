mod enigo_input;
mod keys;

pub use enigo_input::EnigoInput;

use folio_core::{FolioResult, KeyName, ScreenSize};

#[cfg(target_os = "macos")]
#[path = "macos/mod.rs"]
mod platform;

#[cfg(not(target_os = "macos"))]
#[path = "fallback/mod.rs"]
mod platform;

/// Shows the pointer again without an [`InputControl`] handle, for exit paths
/// that skip destructors.
pub fn restore_pointer() -> FolioResult<()> {
    platform::set_pointer_visible(true)
}

/// OS level keyboard, pointer and display control.
pub trait InputControl {
    fn press_key(&mut self, key: KeyName) -> FolioResult<()>;

    /// Moves the pointer to `(x, y)` and clicks the primary button there.
    fn click(&mut self, x: i32, y: i32) -> FolioResult<()>;

    fn move_pointer(&mut self, x: i32, y: i32) -> FolioResult<()>;

    fn pointer_position(&self) -> FolioResult<(i32, i32)>;

    fn screen_size(&self) -> FolioResult<ScreenSize>;

    /// Returns [`folio_core::FolioError::Unsupported`] where the platform
    /// cannot hide the pointer.
    fn set_pointer_visible(&mut self, visible: bool) -> FolioResult<()>;
}
