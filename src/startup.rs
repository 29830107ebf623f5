//! Directory picking and session preparation, run before any window exists.

use crate::config::{FAILURE_POLICY, PICKER_TITLE};
use crate::error::Result;
use crate::file_utils;
use crate::state::SlideshowController;
use log::info;
use rfd::FileDialog;
use std::path::PathBuf;

/// Folder the picker opens in.
fn start_directory() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Shows the folder dialog. `None` means the user cancelled.
pub fn pick_directory() -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title(PICKER_TITLE);
    if let Some(home) = start_directory() {
        dialog = dialog.set_directory(home);
    }
    dialog.pick_folder()
}

/// Enumerates `directory` and builds the controller positioned on the
/// first entry. Errors are returned unlogged; `main` reports them.
pub fn prepare_slideshow(directory: PathBuf) -> Result<SlideshowController> {
    let files = file_utils::scan_directory(&directory)?;
    info!(
        "Selected {} with {} entries",
        directory.display(),
        files.len()
    );

    SlideshowController::new(directory, files, FAILURE_POLICY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::fs::File;

    #[test]
    fn picker_starts_in_the_home_folder() {
        assert_eq!(start_directory(), dirs::home_dir());
        if let Some(home) = start_directory() {
            assert!(home.is_absolute());
        }
    }

    #[test]
    fn empty_directory_is_an_explicit_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = prepare_slideshow(dir.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, AppError::NoImages(_)));
        assert!(err.to_string().starts_with("No images found"));
    }

    #[test]
    fn controller_starts_on_first_enumerated_entry() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("one.jpg")).unwrap();
        File::create(dir.path().join("two.jpg")).unwrap();

        let expected = file_utils::scan_directory(dir.path()).unwrap();
        let controller = prepare_slideshow(dir.path().to_path_buf()).unwrap();

        assert_eq!(controller.len(), 2);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current_path(), expected[0]);
        assert_eq!(controller.directory(), dir.path());
    }

    #[test]
    fn unreadable_directory_is_a_scan_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = prepare_slideshow(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, AppError::DirectoryScan(_)));
    }
}
