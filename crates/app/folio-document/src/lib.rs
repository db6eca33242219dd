mod assemble;
mod error;
mod options;
mod pdf;
mod source;

pub use assemble::{Assembled, assemble, default_output_path, normalize_output_path};
pub use error::{AssembleError, AssembleResult};
pub use options::{DEFAULT_DPI, DEFAULT_JPEG_QUALITY, DocumentOptions};
pub use source::{collect_page_images, is_page_image};
