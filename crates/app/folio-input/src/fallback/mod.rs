use folio_core::{FolioError, FolioResult};

pub(crate) fn set_pointer_visible(_visible: bool) -> FolioResult<()> {
    Err(FolioError::Unsupported)
}
