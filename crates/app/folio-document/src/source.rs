use std::path::{Path, PathBuf};

use crate::{AssembleError, AssembleResult};

const PAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// `png`, `jpg` or `jpeg`, in any case.
pub fn is_page_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Page images directly inside `dir`, ordered by file name. A missing
/// directory has no pages.
pub fn collect_page_images(dir: &Path) -> AssembleResult<Vec<PathBuf>> {
    let files = folio_fs::list_files(dir, false).map_err(|err| AssembleError::List {
        path: dir.to_path_buf(),
        reason: format!("{err:#}"),
    })?;

    let mut pages: Vec<PathBuf> = files.into_iter().filter(|p| is_page_image(p)).collect();
    pages.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pages)
}
