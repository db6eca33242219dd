use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader, codecs::jpeg::JpegEncoder};
use tracing::{debug, info};

use crate::{
    AssembleError, AssembleResult, DocumentOptions, collect_page_images,
    pdf::{self, PdfPage},
};

/// A written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub output: PathBuf,
    /// Source images in page order.
    pub pages: Vec<PathBuf>,
}

/// Appends `.pdf` unless the path already ends with it.
pub fn normalize_output_path(output: &Path) -> PathBuf {
    let has_pdf_extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if has_pdf_extension {
        output.to_path_buf()
    } else {
        let mut name = output.as_os_str().to_owned();
        name.push(".pdf");
        PathBuf::from(name)
    }
}

/// `<parent>/<dir name>.pdf`, next to the source directory.
pub fn default_output_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pages".to_owned());
    let parent = source.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{name}.pdf"))
}

/// Collects every page image in `source` in file-name order and writes them
/// as one PDF at `output` (with `.pdf` appended when missing), one page per
/// image.
///
/// Nothing is written unless every page decodes.
///
/// # Errors
///
/// [`AssembleError::NoImages`] when `source` holds no page images, otherwise
/// the first decode, render or write failure.
pub fn assemble(
    source: &Path,
    output: &Path,
    options: &DocumentOptions,
) -> AssembleResult<Assembled> {
    let files = collect_page_images(source)?;
    if files.is_empty() {
        return Err(AssembleError::NoImages(source.to_path_buf()));
    }

    let output = normalize_output_path(output);
    info!(
        "Assembling {} pages from {} into {}",
        files.len(),
        source.display(),
        output.display()
    );

    let mut pages = Vec::with_capacity(files.len());
    for file in &files {
        pages.push(encode_page(file, options.jpeg_quality)?);
        debug!("Encoded {}", file.display());
    }

    let title = options.title.clone().or_else(|| {
        source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });

    let page_count = pages.len();
    let bytes = pdf::render(pages, options, title.as_deref())?;

    folio_fs::create_dirs_then_write(&output, &bytes).map_err(|source| AssembleError::Write {
        path: output.clone(),
        source,
    })?;

    info!("Wrote {} pages to {}", page_count, output.display());
    Ok(Assembled {
        output,
        pages: files,
    })
}

fn encode_page(path: &Path, quality: u8) -> AssembleResult<PdfPage> {
    let decode_error = |source: image::ImageError| AssembleError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .map_err(|err| decode_error(err.into()))?
        .with_guessed_format()
        .map_err(|err| decode_error(err.into()))?
        .decode()
        .map_err(decode_error)?;

    let rgb = match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    };
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .encode_image(&rgb)
        .map_err(|source| AssembleError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(PdfPage {
        width,
        height,
        jpeg,
    })
}
