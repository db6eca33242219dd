mod config;
mod error;
mod key;
mod naming;
mod region;

pub use config::{
    CaptureConfig, DEFAULT_DELAY, DEFAULT_GRACE_PERIOD, DEFAULT_REFOCUS_EVERY, MAX_PAGE_COUNT,
    PageImageFormat, seconds,
};
pub use error::{FolioError, FolioResult};
pub use key::KeyName;
pub use naming::{SESSION_DIR_PREFIX, page_file_name, session_dir_name};
pub use region::{Region, ScreenSize};
