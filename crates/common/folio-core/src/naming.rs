use chrono::{DateTime, TimeZone};

use crate::PageImageFormat;

pub const SESSION_DIR_PREFIX: &str = "ebook_screenshots_";

/// `ebook_screenshots_<YYYYMMDD_HHMMSS>` for the given start time.
pub fn session_dir_name<Tz: TimeZone>(started_at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{SESSION_DIR_PREFIX}{}",
        started_at.format("%Y%m%d_%H%M%S")
    )
}

/// 1-based, zero padded to four digits so lexical order equals capture order.
pub fn page_file_name(index: u32, format: PageImageFormat) -> String {
    format!("page_{index:04}.{}", format.extension())
}
