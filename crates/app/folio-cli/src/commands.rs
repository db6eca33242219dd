use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, atomic::AtomicBool},
};

use anyhow::{Context, Result, bail};
use folio_capture::{CaptureSession, CaptureSummary, ThreadPause};
use folio_core::{CaptureConfig, KeyName};
use folio_document::{Assembled, DocumentOptions, default_output_path};
use folio_input::EnigoInput;
use folio_vision::XcapScreen;
use tracing::{info, warn};

use crate::{
    cli::{AssembleArgs, CaptureArgs},
    settings::FileSettings,
    signal,
};

/// Runs a capture session against the real display and input devices.
pub fn run_capture(config: CaptureConfig, stop: Arc<AtomicBool>) -> Result<CaptureSummary> {
    let input = EnigoInput::new().context("Failed to initialize input simulation")?;
    let mut session = CaptureSession::new(config, XcapScreen::new(), input, ThreadPause::new())
        .with_stop_signal(stop);
    let summary = session.run()?;
    Ok(summary)
}

pub fn print_summary(summary: &CaptureSummary) {
    if summary.cancelled {
        println!(
            "Capture cancelled, {} pages saved to {}",
            summary.pages.len(),
            summary.directory.display()
        );
    } else {
        println!(
            "Captured {} pages to {}",
            summary.pages.len(),
            summary.directory.display()
        );
    }
}

pub fn compile_pdf(source: &Path, output: &Path, options: &DocumentOptions) -> Result<Assembled> {
    let assembled = folio_document::assemble(source, output, options)
        .with_context(|| format!("Failed to compile {} into a PDF", source.display()))?;
    println!(
        "PDF with {} pages written to {}",
        assembled.pages.len(),
        assembled.output.display()
    );
    Ok(assembled)
}

/// Whether `document` would be removed along with `directory`.
pub fn holds_document(directory: &Path, document: &Path) -> bool {
    let resolve = |path: &Path| {
        fs::canonicalize(path)
            .or_else(|_| std::path::absolute(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    resolve(document).starts_with(resolve(directory))
}

/// Removes the page folder unless the compiled `document` lives inside it. A
/// failure leaves the folder in place and is only reported.
pub fn delete_images(directory: &Path, document: &Path) {
    if holds_document(directory, document) {
        warn!(
            "Not deleting {}, it contains {}",
            directory.display(),
            document.display()
        );
        println!(
            "Kept {} because the PDF was saved inside it",
            directory.display()
        );
        return;
    }

    match fs::remove_dir_all(directory) {
        Ok(()) => {
            info!("Removed {}", directory.display());
            println!("Deleted {}", directory.display());
        }
        Err(err) => {
            warn!("Failed to delete {}: {}", directory.display(), err);
            println!("Could not delete {}, it was left in place", directory.display());
        }
    }
}

pub fn capture(args: &CaptureArgs, settings: &FileSettings) -> Result<()> {
    let config = settings.capture_config(args)?;
    let options = match args.pdf {
        Some(_) => Some(settings.document_options(None, None, None)?),
        None => None,
    };

    let stop = signal::install_stop_handler()?;
    let summary = run_capture(config, stop)?;
    print_summary(&summary);

    let (Some(pdf), Some(options)) = (&args.pdf, options) else {
        return Ok(());
    };
    if summary.pages.is_empty() {
        bail!("No pages were captured, skipping PDF compilation");
    }

    let assembled = compile_pdf(&summary.directory, pdf, &options)?;
    if args.delete_images {
        delete_images(&summary.directory, &assembled.output);
    }
    Ok(())
}

pub fn assemble(args: &AssembleArgs, settings: &FileSettings) -> Result<()> {
    let options = settings.assemble_options(args)?;
    let output: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.dir));
    compile_pdf(&args.dir, &output, &options)?;
    Ok(())
}

pub fn list_keys() {
    for (name, key) in KeyName::NAMED {
        let canonical = key.to_string();
        if *name == canonical {
            println!("{name}");
        } else {
            println!("{name} (same as {canonical})");
        }
    }
    println!("any single character, e.g. n or j");
}
