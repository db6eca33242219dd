use bon::bon;

use crate::AssembleError;

pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const DEFAULT_DPI: f32 = 100.0;

fn validate_quality(quality: u8) -> Result<u8, AssembleError> {
    if quality == 0 || quality > 100 {
        return Err(AssembleError::InvalidOptions {
            reason: "JPEG quality must be between 1 and 100".into(),
        });
    }
    Ok(quality)
}

fn validate_dpi(dpi: f32) -> Result<f32, AssembleError> {
    if !dpi.is_finite() || dpi <= 0.0 {
        return Err(AssembleError::InvalidOptions {
            reason: "resolution must be a positive number of dots per inch".into(),
        });
    }
    Ok(dpi)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    /// Quality of the JPEG stream embedded for every page.
    pub jpeg_quality: u8,
    /// Resolution used to turn pixel sizes into page sizes.
    pub dpi: f32,
    /// Document title; defaults to the source directory name.
    pub title: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            dpi: DEFAULT_DPI,
            title: None,
        }
    }
}

#[bon]
impl DocumentOptions {
    /// Creates document options using the builder pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_document::DocumentOptions;
    ///
    /// let options = DocumentOptions::builder()
    ///     .jpeg_quality(80)
    ///     .unwrap()
    ///     .dpi(150.0)
    ///     .unwrap()
    ///     .title("My Book")
    ///     .build();
    /// ```
    #[builder]
    pub fn new(
        #[builder(
            default = DEFAULT_JPEG_QUALITY,
            with = |quality: u8| -> Result<_, AssembleError> { validate_quality(quality) },
        )]
        jpeg_quality: u8,
        #[builder(
            default = DEFAULT_DPI,
            with = |dpi: f32| -> Result<_, AssembleError> { validate_dpi(dpi) },
        )]
        dpi: f32,
        #[builder(into)] title: Option<String>,
    ) -> Self {
        Self {
            jpeg_quality,
            dpi,
            title,
        }
    }

    /// Page extent in PDF points for a side of `pixels` length.
    pub fn points(&self, pixels: u32) -> f32 {
        pixels as f32 * 72.0 / self.dpi
    }
}
