use enigo::{Button, Coordinate, Direction, Enigo, Keyboard, Mouse, Settings};
use folio_core::{FolioError, FolioResult, KeyName, ScreenSize};
use tracing::debug;

use crate::{InputControl, keys::to_enigo_key, platform};

/// [`InputControl`] backed by `enigo`.
pub struct EnigoInput {
    enigo: Enigo,
}

impl EnigoInput {
    pub fn new() -> FolioResult<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| FolioError::Input(format!("Failed to connect to input system: {}", e)))?;
        Ok(Self { enigo })
    }
}

fn input_error(err: enigo::InputError) -> FolioError {
    FolioError::Input(err.to_string())
}

impl InputControl for EnigoInput {
    fn press_key(&mut self, key: KeyName) -> FolioResult<()> {
        debug!("Pressing {}", key);
        self.enigo
            .key(to_enigo_key(key), Direction::Click)
            .map_err(input_error)
    }

    fn click(&mut self, x: i32, y: i32) -> FolioResult<()> {
        debug!("Clicking at ({}, {})", x, y);
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(input_error)?;
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(input_error)
    }

    fn move_pointer(&mut self, x: i32, y: i32) -> FolioResult<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(input_error)
    }

    fn pointer_position(&self) -> FolioResult<(i32, i32)> {
        self.enigo.location().map_err(input_error)
    }

    fn screen_size(&self) -> FolioResult<ScreenSize> {
        let (width, height) = self.enigo.main_display().map_err(input_error)?;
        if width <= 0 || height <= 0 {
            return Err(FolioError::NoDisplay);
        }
        Ok(ScreenSize::new(width as u32, height as u32))
    }

    fn set_pointer_visible(&mut self, visible: bool) -> FolioResult<()> {
        platform::set_pointer_visible(visible)
    }
}
