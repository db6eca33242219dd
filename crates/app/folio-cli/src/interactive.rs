use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use folio_core::{DEFAULT_DELAY, KeyName, MAX_PAGE_COUNT, Region, seconds};
use folio_document::default_output_path;
use folio_input::{EnigoInput, InputControl};

use crate::{
    cli::CaptureArgs,
    commands::{compile_pdf, delete_images, holds_document, print_summary, run_capture},
    settings::FileSettings,
    signal,
};

/// Prompt driven session: collect settings, capture, then offer to compile
/// and clean up.
pub fn run(settings: &FileSettings) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("folio: capture e-reader pages and compile them into a PDF\n");

    let pages: u32 = Input::with_theme(&theme)
        .with_prompt("How many pages should be captured?")
        .validate_with(|count: &u32| validate_page_count(*count))
        .interact_text()?;

    let region = prompt_region(&theme)?;

    let key: KeyName = Input::with_theme(&theme)
        .with_prompt("Key that turns the page (see `folio keys`)")
        .default(settings.flip_key()?.unwrap_or_default())
        .interact_text()?;

    let delay: f64 = Input::with_theme(&theme)
        .with_prompt("Seconds to wait after each page turn")
        .default(settings.delay.unwrap_or(DEFAULT_DELAY.as_secs_f64()))
        .validate_with(|delay: &f64| validate_delay(*delay))
        .interact_text()?;

    let args = CaptureArgs {
        pages,
        key: Some(key),
        delay: Some(delay),
        region,
        grace: None,
        refocus_every: None,
        no_focus_click: false,
        no_hide_pointer: false,
        format: None,
        output_root: None,
        pdf: None,
        delete_images: false,
    };
    let config = settings.capture_config(&args)?;

    println!("\nCapture settings");
    println!("  pages:   {}", config.page_count);
    println!("  region:  {}", describe_region(config.region));
    println!("  key:     {}", config.flip_key);
    println!("  delay:   {:?}", config.delay);
    println!("  format:  {}", config.image_format);
    println!("  save to: {}\n", config.output_root.display());

    if !Confirm::with_theme(&theme)
        .with_prompt("Start capturing?")
        .default(true)
        .interact()?
    {
        println!("Nothing captured");
        return Ok(());
    }

    println!(
        "Switch to the e-book reader and open the first page. Capture starts in {:?}, press Ctrl-C to stop.",
        config.grace_period
    );
    let stop = signal::install_stop_handler()?;
    let summary = run_capture(config, stop)?;
    print_summary(&summary);

    if summary.pages.is_empty()
        || !Confirm::with_theme(&theme)
            .with_prompt("Compile the pages into a PDF?")
            .default(true)
            .interact()?
    {
        return Ok(());
    }

    let output: String = Input::with_theme(&theme)
        .with_prompt("PDF file")
        .default(default_output_path(&summary.directory).display().to_string())
        .interact_text()?;
    let options = settings.document_options(None, None, None)?;
    let assembled = compile_pdf(&summary.directory, &PathBuf::from(output), &options)?;

    if holds_document(&summary.directory, &assembled.output) {
        println!(
            "The PDF is inside {}, keeping the image folder",
            summary.directory.display()
        );
        return Ok(());
    }

    if Confirm::with_theme(&theme)
        .with_prompt(format!(
            "Delete the image folder {}?",
            summary.directory.display()
        ))
        .default(false)
        .interact()?
    {
        delete_images(&summary.directory, &assembled.output);
    }

    Ok(())
}

fn prompt_region(theme: &ColorfulTheme) -> Result<Option<Region>> {
    let partial = Confirm::with_theme(theme)
        .with_prompt("Capture only part of the screen?")
        .default(true)
        .interact()?;
    if !partial {
        return Ok(None);
    }

    let input = EnigoInput::new().context("Failed to read the pointer position")?;
    loop {
        let first = sample_pointer(
            theme,
            &input,
            "Hover over the top-left corner of the page and press Enter",
        )?;
        let second = sample_pointer(
            theme,
            &input,
            "Hover over the bottom-right corner of the page and press Enter",
        )?;

        let region = Region::from_corners(first, second);
        if !region.is_empty() {
            println!("Capture region: {}", describe_region(Some(region)));
            return Ok(Some(region));
        }
        println!("Those corners do not enclose an area, try again");
    }
}

fn sample_pointer(
    theme: &ColorfulTheme,
    input: &impl InputControl,
    prompt: &str,
) -> Result<(i32, i32)> {
    let _: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let position = input.pointer_position()?;
    println!("  recorded ({}, {})", position.0, position.1);
    Ok(position)
}

fn validate_page_count(count: u32) -> Result<(), String> {
    if (1..=MAX_PAGE_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(format!("enter a number between 1 and {MAX_PAGE_COUNT}"))
    }
}

fn validate_delay(delay: f64) -> Result<(), String> {
    seconds(delay).map(|_| ()).map_err(|err| err.to_string())
}

fn describe_region(region: Option<Region>) -> String {
    match region {
        Some(region) => format!(
            "{}x{} at ({}, {})",
            region.width, region.height, region.left, region.top
        ),
        None => "full screen".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_prompt_bounds() {
        assert!(validate_page_count(0).is_err());
        assert!(validate_page_count(1).is_ok());
        assert!(validate_page_count(MAX_PAGE_COUNT).is_ok());
        assert!(validate_page_count(MAX_PAGE_COUNT + 1).is_err());
    }

    #[test]
    fn delay_prompt_rejects_negative() {
        assert!(validate_delay(0.0).is_ok());
        assert!(validate_delay(2.5).is_ok());
        assert!(validate_delay(-0.1).is_err());
        assert!(validate_delay(f64::INFINITY).is_err());
    }

    #[test]
    fn region_description() {
        assert_eq!(describe_region(None), "full screen");
        assert_eq!(
            describe_region(Some(Region::new(100, 50, 400, 300))),
            "400x300 at (100, 50)"
        );
    }
}
