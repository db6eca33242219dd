use bon::bon;
use serde::Deserialize;
use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use crate::{FolioError, FolioResult, KeyName, Region};

pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);
pub const DEFAULT_REFOCUS_EVERY: u32 = 10;
/// Page names carry four digits; beyond this lexical order would break.
pub const MAX_PAGE_COUNT: u32 = 9999;

/// Converts operator supplied seconds into a [`Duration`].
pub fn seconds(value: f64) -> FolioResult<Duration> {
    Duration::try_from_secs_f64(value).map_err(|_| {
        FolioError::invalid_config(format!(
            "'{value}' is not a valid number of seconds (must be finite and >= 0)"
        ))
    })
}

fn validate_page_count(count: u32) -> FolioResult<u32> {
    if count == 0 {
        return Err(FolioError::invalid_config("page count must be at least 1"));
    }
    if count > MAX_PAGE_COUNT {
        return Err(FolioError::invalid_config(format!(
            "page count cannot be greater than {MAX_PAGE_COUNT}"
        )));
    }
    Ok(count)
}

fn validate_region(region: Option<Region>) -> FolioResult<Option<Region>> {
    match region {
        Some(region) if region.is_empty() => Err(FolioError::invalid_config(format!(
            "region {region} has no area"
        ))),
        other => Ok(other),
    }
}

/// Encoding used for captured page files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageImageFormat {
    #[default]
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
}

impl PageImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            PageImageFormat::Png => "png",
            PageImageFormat::Jpeg => "jpg",
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            PageImageFormat::Png => image::ImageFormat::Png,
            PageImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

impl FromStr for PageImageFormat {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(PageImageFormat::Png),
            "jpg" | "jpeg" => Ok(PageImageFormat::Jpeg),
            other => Err(FolioError::invalid_config(format!(
                "unsupported page image format '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PageImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Settings for one capture session.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub page_count: u32,
    pub flip_key: KeyName,
    pub delay: Duration,
    /// `None` captures the whole primary display.
    pub region: Option<Region>,
    /// Wait before the first capture so the operator can bring the reader to front.
    pub grace_period: Duration,
    /// Re-click the reader every N pages. Zero disables it.
    pub refocus_every: u32,
    pub focus_click: bool,
    pub hide_pointer: bool,
    pub image_format: PageImageFormat,
    pub output_root: PathBuf,
}

#[bon]
impl CaptureConfig {
    /// Creates a validated capture configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_core::{CaptureConfig, KeyName, Region};
    /// use std::time::Duration;
    ///
    /// let config = CaptureConfig::builder()
    ///     .page_count(120)
    ///     .flip_key(KeyName::PageDown)
    ///     .delay(Duration::from_millis(1500))
    ///     .region(Region::new(100, 100, 400, 300))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.refocus_every, 10);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`] for a page count outside
    /// `1..=9999` or a region without area.
    #[builder]
    pub fn new(
        page_count: u32,
        #[builder(default)] flip_key: KeyName,
        #[builder(default = DEFAULT_DELAY)] delay: Duration,
        region: Option<Region>,
        #[builder(default = DEFAULT_GRACE_PERIOD)] grace_period: Duration,
        #[builder(default = DEFAULT_REFOCUS_EVERY)] refocus_every: u32,
        #[builder(default = true)] focus_click: bool,
        #[builder(default = true)] hide_pointer: bool,
        #[builder(default)] image_format: PageImageFormat,
        #[builder(into, default = PathBuf::from("."))] output_root: PathBuf,
    ) -> FolioResult<Self> {
        Ok(Self {
            page_count: validate_page_count(page_count)?,
            flip_key,
            delay,
            region: validate_region(region)?,
            grace_period,
            refocus_every,
            focus_click,
            hide_pointer,
            image_format,
            output_root,
        })
    }
}
