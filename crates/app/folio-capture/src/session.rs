use std::{
    io::Cursor,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::{DateTime, Local};
use folio_core::{
    CaptureConfig, FolioError, FolioResult, PageImageFormat, page_file_name, session_dir_name,
};
use folio_input::InputControl;
use folio_vision::ScreenCapture;
use image::{DynamicImage, RgbaImage};
use tracing::{debug, error, info, warn};

use crate::{Pause, PointerGuard, focus::refocus};

/// Outcome of a capture run. Partial output is kept when the run is
/// cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSummary {
    pub directory: PathBuf,
    /// Saved page files in capture order.
    pub pages: Vec<PathBuf>,
    pub flips: u32,
    pub cancelled: bool,
}

/// Creates the `ebook_screenshots_<timestamp>` directory under `root`,
/// suffixed when a run in the same second already claimed the name.
pub fn create_session_dir(root: &Path, started_at: &DateTime<Local>) -> FolioResult<PathBuf> {
    let name = session_dir_name(started_at);
    folio_fs::create_unique_dir(root, &name).map_err(|source| FolioError::Write {
        path: root.join(&name),
        source,
    })
}

pub struct CaptureSession<S, I, P> {
    config: CaptureConfig,
    screen: S,
    input: I,
    pause: P,
    stop_signal: Arc<AtomicBool>,
}

impl<S, I, P> CaptureSession<S, I, P>
where
    S: ScreenCapture,
    I: InputControl,
    P: Pause,
{
    pub fn new(config: CaptureConfig, screen: S, input: I, pause: P) -> Self {
        Self {
            config,
            screen,
            input,
            pause,
            stop_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shares an externally owned stop flag, e.g. one set from a Ctrl-C handler.
    #[must_use]
    pub fn with_stop_signal(mut self, stop_signal: Arc<AtomicBool>) -> Self {
        self.stop_signal = stop_signal;
        self
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn pause(&self) -> &P {
        &self.pause
    }

    /// Runs the whole session: grace period, optional focus click, then
    /// capture → save → flip → wait for every page.
    ///
    /// # Errors
    ///
    /// Capture, input and write failures abort the run. Pages saved before
    /// the failure stay on disk and the pointer is shown again.
    pub fn run(&mut self) -> FolioResult<CaptureSummary> {
        let directory = create_session_dir(&self.config.output_root, &Local::now())?;
        info!("Saving pages to {}", directory.display());

        let mut summary = CaptureSummary {
            directory,
            pages: Vec::with_capacity(self.config.page_count as usize),
            flips: 0,
            cancelled: false,
        };

        match self.capture_pages(&mut summary) {
            Ok(()) => {
                info!(
                    "Captured {} pages into {}",
                    summary.pages.len(),
                    summary.directory.display()
                );
                Ok(summary)
            }
            Err(FolioError::Cancelled) => {
                warn!(
                    "Capture cancelled after {} of {} pages",
                    summary.pages.len(),
                    self.config.page_count
                );
                summary.cancelled = true;
                Ok(summary)
            }
            Err(err) => {
                error!(
                    "Capture aborted after {} of {} pages: {}",
                    summary.pages.len(),
                    self.config.page_count,
                    err
                );
                Err(err)
            }
        }
    }

    fn capture_pages(&mut self, summary: &mut CaptureSummary) -> FolioResult<()> {
        let Self {
            config,
            screen,
            input,
            pause,
            stop_signal,
        } = self;
        let stop: &AtomicBool = stop_signal;

        info!(
            "Starting in {:?}, switch to the e-book reader and open the first page",
            config.grace_period
        );
        pause.pause(config.grace_period, stop)?;

        let mut pointer = PointerGuard::new(input);

        let screen_size = if config.focus_click || config.refocus_every > 0 {
            Some(pointer.screen_size()?)
        } else {
            None
        };

        if config.focus_click
            && let Some(size) = screen_size
        {
            refocus(&mut *pointer, size, config.region)?;
        }

        if config.hide_pointer {
            pointer.hide();
        }

        let total = config.page_count;
        for page in 1..=total {
            if stop.load(Ordering::SeqCst) {
                return Err(FolioError::Cancelled);
            }

            let image = screen.capture(config.region)?;
            let path = summary
                .directory
                .join(page_file_name(page, config.image_format));
            save_page(image, &path, config.image_format)?;
            summary.pages.push(path);
            info!("Captured page {}/{}", page, total);

            if page == total {
                break;
            }

            if config.refocus_every > 0
                && page % config.refocus_every == 0
                && let Some(size) = screen_size
            {
                debug!("Re-asserting reader focus after page {}", page);
                refocus(&mut *pointer, size, config.region)?;
            }

            pointer.press_key(config.flip_key)?;
            summary.flips += 1;
            debug!("Flipped to page {}", page + 1);

            pause.pause(config.delay, stop)?;
        }

        Ok(())
    }
}

fn save_page(image: RgbaImage, path: &Path, format: PageImageFormat) -> FolioResult<()> {
    let image = match format {
        PageImageFormat::Png => DynamicImage::ImageRgba8(image),
        // JPEG has no alpha channel
        PageImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image).to_rgb8()),
    };

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format.image_format())?;

    folio_fs::write(path, &bytes).map_err(|source| FolioError::Write {
        path: path.to_path_buf(),
        source,
    })
}
