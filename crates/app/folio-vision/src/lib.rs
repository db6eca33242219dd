use folio_core::{FolioError, FolioResult, Region};
use image::RgbaImage;
use xcap::Monitor;

/// Source of page screenshots.
pub trait ScreenCapture {
    /// Captures `region`, or the whole primary display when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if no display is available or the platform capture fails.
    fn capture(&mut self, region: Option<Region>) -> FolioResult<RgbaImage>;
}

impl<T: ScreenCapture + ?Sized> ScreenCapture for &mut T {
    fn capture(&mut self, region: Option<Region>) -> FolioResult<RgbaImage> {
        (**self).capture(region)
    }
}

/// [`ScreenCapture`] backed by `xcap`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XcapScreen;

impl XcapScreen {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenCapture for XcapScreen {
    fn capture(&mut self, region: Option<Region>) -> FolioResult<RgbaImage> {
        match region {
            Some(region) => capture_region(region),
            None => capture_primary_monitor(),
        }
    }
}

pub fn primary_monitor() -> FolioResult<Monitor> {
    let monitors = Monitor::all().map_err(|e| FolioError::Capture(e.to_string()))?;
    if monitors.is_empty() {
        return Err(FolioError::NoDisplay);
    }

    let mut fallback = None;
    for monitor in monitors {
        if monitor.is_primary().unwrap_or(false) {
            return Ok(monitor);
        }
        fallback.get_or_insert(monitor);
    }

    fallback.ok_or(FolioError::NoDisplay)
}

pub fn capture_primary_monitor() -> FolioResult<RgbaImage> {
    let monitor = primary_monitor()?;
    monitor
        .capture_image()
        .map_err(|e| FolioError::Capture(format!("Failed to capture monitor: {}", e)))
}

/// Captures a region given in global desktop coordinates from the monitor
/// that contains its top-left corner.
pub fn capture_region(region: Region) -> FolioResult<RgbaImage> {
    let monitor = Monitor::from_point(region.left, region.top).map_err(|e| {
        FolioError::Capture(format!("No monitor contains {}: {}", region, e))
    })?;

    let origin = (
        monitor.x().map_err(|e| FolioError::Capture(e.to_string()))?,
        monitor.y().map_err(|e| FolioError::Capture(e.to_string()))?,
    );
    let (x, y) = to_monitor_relative(region, origin);

    tracing::debug!(
        "Capturing region {} at monitor offset ({}, {})",
        region,
        x,
        y
    );

    monitor
        .capture_region(x, y, region.width, region.height)
        .map_err(|e| FolioError::Capture(format!("Failed to capture region: {}", e)))
}

/// Translates a region's origin into coordinates relative to a monitor at
/// `origin`, clamping at the monitor's top-left edge.
pub fn to_monitor_relative(region: Region, origin: (i32, i32)) -> (u32, u32) {
    let x = region.left.saturating_sub(origin.0).max(0) as u32;
    let y = region.top.saturating_sub(origin.1).max(0) as u32;
    (x, y)
}
