use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_core::{CaptureConfig, KeyName, PageImageFormat, seconds};
use folio_document::{DEFAULT_DPI, DEFAULT_JPEG_QUALITY, DocumentOptions};
use serde::Deserialize;
use tracing::debug;

use crate::cli::{AssembleArgs, CaptureArgs};

const CONFIG_DIR: &str = "folio";
const CONFIG_FILE: &str = "folio.toml";

/// Defaults read from `folio.toml`. Command line flags take precedence.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub flip_key: Option<String>,
    /// Seconds.
    pub delay: Option<f64>,
    /// Seconds.
    pub grace_period: Option<f64>,
    pub refocus_every: Option<u32>,
    pub focus_click: Option<bool>,
    pub hide_pointer: Option<bool>,
    pub image_format: Option<PageImageFormat>,
    pub output_root: Option<PathBuf>,
    pub jpeg_quality: Option<u8>,
    pub dpi: Option<f32>,
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

impl FileSettings {
    /// Reads `path`, or the per-user settings file when `None`. A missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(default_settings_path) else {
            debug!("No config directory, using built-in defaults");
            return Ok(Self::default());
        };

        debug!("Loading settings from {}", path.display());
        folio_fs::read_toml_file_or_default(&path)
    }

    pub fn flip_key(&self) -> Result<Option<KeyName>> {
        self.flip_key
            .as_deref()
            .map(|name| {
                name.parse::<KeyName>()
                    .context("Invalid flip_key in settings file")
            })
            .transpose()
    }

    pub fn delay(&self) -> Result<Option<std::time::Duration>> {
        self.delay
            .map(seconds)
            .transpose()
            .context("Invalid delay in settings file")
    }

    pub fn grace_period(&self) -> Result<Option<std::time::Duration>> {
        self.grace_period
            .map(seconds)
            .transpose()
            .context("Invalid grace_period in settings file")
    }

    /// Merges flags over file values over built-in defaults.
    pub fn capture_config(&self, args: &CaptureArgs) -> Result<CaptureConfig> {
        let flip_key = match args.key {
            Some(key) => Some(key),
            None => self.flip_key()?,
        };
        let delay = match args.delay {
            Some(delay) => Some(seconds(delay)?),
            None => self.delay()?,
        };
        let grace_period = match args.grace {
            Some(grace) => Some(seconds(grace)?),
            None => self.grace_period()?,
        };
        let focus_click = !args.no_focus_click && self.focus_click.unwrap_or(true);
        let hide_pointer = !args.no_hide_pointer && self.hide_pointer.unwrap_or(true);

        let config = CaptureConfig::builder()
            .page_count(args.pages)
            .maybe_flip_key(flip_key)
            .maybe_delay(delay)
            .maybe_region(args.region)
            .maybe_grace_period(grace_period)
            .maybe_refocus_every(args.refocus_every.or(self.refocus_every))
            .focus_click(focus_click)
            .hide_pointer(hide_pointer)
            .maybe_image_format(args.format.or(self.image_format))
            .maybe_output_root(args.output_root.clone().or_else(|| self.output_root.clone()))
            .build()?;
        Ok(config)
    }

    pub fn document_options(
        &self,
        quality: Option<u8>,
        dpi: Option<f32>,
        title: Option<String>,
    ) -> Result<DocumentOptions> {
        let options = DocumentOptions::builder()
            .jpeg_quality(
                quality
                    .or(self.jpeg_quality)
                    .unwrap_or(DEFAULT_JPEG_QUALITY),
            )?
            .dpi(dpi.or(self.dpi).unwrap_or(DEFAULT_DPI))?
            .maybe_title(title)
            .build();
        Ok(options)
    }

    pub fn assemble_options(&self, args: &AssembleArgs) -> Result<DocumentOptions> {
        self.document_options(args.quality, args.dpi, args.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use folio_core::Region;
    use std::{fs, time::Duration};
    use tempfile::tempdir;

    use crate::cli::{Cli, Command};

    fn capture_args(argv: &[&str]) -> CaptureArgs {
        let cli = Cli::try_parse_from(["folio", "capture"].iter().chain(argv)).unwrap();
        match cli.command {
            Some(Command::Capture(args)) => args,
            other => panic!("expected capture, got {other:?}"),
        }
    }

    fn file_settings() -> FileSettings {
        FileSettings {
            flip_key: Some("pgdn".into()),
            delay: Some(3.0),
            grace_period: Some(1.0),
            refocus_every: Some(25),
            focus_click: Some(false),
            hide_pointer: None,
            image_format: Some(PageImageFormat::Jpeg),
            output_root: Some(PathBuf::from("/books")),
            jpeg_quality: Some(85),
            dpi: Some(150.0),
        }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = FileSettings::load(Some(&dir.path().join("folio.toml"))).unwrap();
        assert_eq!(settings, FileSettings::default());
    }

    #[test]
    fn parses_settings_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(
            &path,
            "flip_key = \"space\"\ndelay = 1.25\nimage_format = \"jpg\"\ndpi = 300\n",
        )
        .unwrap();

        let settings = FileSettings::load(Some(&path)).unwrap();
        assert_eq!(settings.flip_key().unwrap(), Some(KeyName::Space));
        assert_eq!(settings.delay().unwrap(), Some(Duration::from_millis(1250)));
        assert_eq!(settings.image_format, Some(PageImageFormat::Jpeg));
        assert_eq!(settings.dpi, Some(300.0));
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let config = FileSettings::default()
            .capture_config(&capture_args(&["--pages", "4"]))
            .unwrap();
        assert_eq!(config.page_count, 4);
        assert_eq!(config.flip_key, KeyName::Right);
        assert_eq!(config.delay, Duration::from_secs(2));
        assert_eq!(config.grace_period, Duration::from_secs(5));
        assert_eq!(config.refocus_every, 10);
        assert!(config.focus_click);
        assert!(config.hide_pointer);
        assert_eq!(config.output_root, PathBuf::from("."));
    }

    #[test]
    fn file_values_fill_in_missing_flags() {
        let config = file_settings()
            .capture_config(&capture_args(&["--pages", "4"]))
            .unwrap();
        assert_eq!(config.flip_key, KeyName::PageDown);
        assert_eq!(config.delay, Duration::from_secs(3));
        assert_eq!(config.grace_period, Duration::from_secs(1));
        assert_eq!(config.refocus_every, 25);
        assert!(!config.focus_click);
        assert!(config.hide_pointer);
        assert_eq!(config.image_format, PageImageFormat::Jpeg);
        assert_eq!(config.output_root, PathBuf::from("/books"));
    }

    #[test]
    fn flags_override_file_values() {
        let config = file_settings()
            .capture_config(&capture_args(&[
                "--pages",
                "4",
                "--key",
                "left",
                "--delay",
                "0.5",
                "--refocus-every",
                "0",
                "--format",
                "png",
                "--region",
                "100,100,400,300",
                "--no-hide-pointer",
            ]))
            .unwrap();
        assert_eq!(config.flip_key, KeyName::Left);
        assert_eq!(config.delay, Duration::from_millis(500));
        assert_eq!(config.refocus_every, 0);
        assert_eq!(config.image_format, PageImageFormat::Png);
        assert_eq!(config.region, Some(Region::new(100, 100, 400, 300)));
        assert!(!config.hide_pointer);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let settings = FileSettings::default();
        assert!(settings.capture_config(&capture_args(&["--pages", "0"])).is_err());
        assert!(
            settings
                .capture_config(&capture_args(&["--pages", "2", "--delay=-1"]))
                .is_err()
        );
        assert!(
            settings
                .capture_config(&capture_args(&["--pages", "2", "--region", "0,0,0,10"]))
                .is_err()
        );

        let bad_key = FileSettings {
            flip_key: Some("warp".into()),
            ..FileSettings::default()
        };
        assert!(bad_key.capture_config(&capture_args(&["--pages", "2"])).is_err());
    }

    #[test]
    fn document_options_merge() {
        let options = file_settings().document_options(None, None, None).unwrap();
        assert_eq!(options.jpeg_quality, 85);
        assert_eq!(options.dpi, 150.0);

        let options = file_settings()
            .document_options(Some(60), Some(72.0), Some("Book".into()))
            .unwrap();
        assert_eq!(options.jpeg_quality, 60);
        assert_eq!(options.dpi, 72.0);
        assert_eq!(options.title.as_deref(), Some("Book"));

        assert!(FileSettings::default().document_options(Some(0), None, None).is_err());
    }
}
