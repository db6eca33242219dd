//! Fakes standing in for the display, input system and clock.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use folio_capture::Pause;
use folio_core::{FolioError, FolioResult, KeyName, Region, ScreenSize};
use folio_input::InputControl;
use folio_vision::ScreenCapture;
use image::{Rgba, RgbaImage};

pub const SCREEN: ScreenSize = ScreenSize {
    width: 1280,
    height: 800,
};

/// Returns solid images sized like the requested region, optionally failing
/// on the n-th capture (1-based).
#[derive(Debug, Default)]
pub struct FakeScreen {
    pub requests: Vec<Option<Region>>,
    pub fail_on: Option<usize>,
}

impl FakeScreen {
    pub fn failing_on(capture: usize) -> Self {
        Self {
            fail_on: Some(capture),
            ..Self::default()
        }
    }
}

impl ScreenCapture for FakeScreen {
    fn capture(&mut self, region: Option<Region>) -> FolioResult<RgbaImage> {
        self.requests.push(region);
        if self.fail_on == Some(self.requests.len()) {
            return Err(FolioError::Capture("injected failure".into()));
        }
        let bounds = region.unwrap_or(SCREEN.bounds());
        let shade = (self.requests.len() % 256) as u8;
        Ok(RgbaImage::from_pixel(
            bounds.width,
            bounds.height,
            Rgba([shade, shade, shade, 255]),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyName),
    Click(i32, i32),
    Move(i32, i32),
    PointerVisible(bool),
}

#[derive(Debug)]
pub struct FakeInput {
    pub events: Vec<InputEvent>,
    pub pointer_visible: bool,
    pub can_hide_pointer: bool,
    pub fail_key_on: Option<usize>,
}

impl FakeInput {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            pointer_visible: true,
            can_hide_pointer: true,
            fail_key_on: None,
        }
    }

    pub fn without_pointer_hiding() -> Self {
        Self {
            can_hide_pointer: false,
            ..Self::new()
        }
    }

    pub fn keys(&self) -> Vec<KeyName> {
        self.events
            .iter()
            .filter_map(|event| match event {
                InputEvent::Key(key) => Some(*key),
                _ => None,
            })
            .collect()
    }

    pub fn clicks(&self) -> Vec<(i32, i32)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                InputEvent::Click(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl InputControl for FakeInput {
    fn press_key(&mut self, key: KeyName) -> FolioResult<()> {
        let presses = self.keys().len() + 1;
        if self.fail_key_on == Some(presses) {
            return Err(FolioError::Input("injected key failure".into()));
        }
        self.events.push(InputEvent::Key(key));
        Ok(())
    }

    fn click(&mut self, x: i32, y: i32) -> FolioResult<()> {
        self.events.push(InputEvent::Click(x, y));
        Ok(())
    }

    fn move_pointer(&mut self, x: i32, y: i32) -> FolioResult<()> {
        self.events.push(InputEvent::Move(x, y));
        Ok(())
    }

    fn pointer_position(&self) -> FolioResult<(i32, i32)> {
        Ok((0, 0))
    }

    fn screen_size(&self) -> FolioResult<ScreenSize> {
        Ok(SCREEN)
    }

    fn set_pointer_visible(&mut self, visible: bool) -> FolioResult<()> {
        if !self.can_hide_pointer {
            return Err(FolioError::Unsupported);
        }
        self.pointer_visible = visible;
        self.events.push(InputEvent::PointerVisible(visible));
        Ok(())
    }
}

/// Records requested waits without sleeping. `cancel_on` makes the n-th
/// pause (1-based) behave as if Ctrl-C arrived during it.
#[derive(Debug, Default)]
pub struct RecordingPause {
    pub waits: Vec<Duration>,
    pub cancel_on: Option<usize>,
}

impl RecordingPause {
    pub fn cancelling_on(pause: usize) -> Self {
        Self {
            cancel_on: Some(pause),
            ..Self::default()
        }
    }
}

impl Pause for RecordingPause {
    fn pause(&mut self, duration: Duration, stop_signal: &AtomicBool) -> FolioResult<()> {
        self.waits.push(duration);
        if self.cancel_on == Some(self.waits.len()) {
            stop_signal.store(true, Ordering::SeqCst);
        }
        if stop_signal.load(Ordering::SeqCst) {
            return Err(FolioError::Cancelled);
        }
        Ok(())
    }
}
