use core_graphics::display::CGDisplay;
use folio_core::{FolioError, FolioResult};

pub(crate) fn set_pointer_visible(visible: bool) -> FolioResult<()> {
    let display = CGDisplay::main();
    let result = if visible {
        display.show_cursor()
    } else {
        display.hide_cursor()
    };
    result.map_err(|code| FolioError::Input(format!("CoreGraphics cursor call failed: {code}")))
}
