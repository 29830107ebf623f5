use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the regular files directly inside `dir`.
///
/// Entries keep the order the filesystem returns them in. No extension
/// filter is applied: anything that fails to decode is dealt with when the
/// slideshow reaches it.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    Ok(files)
}

/// Short path rendering for log lines.
pub trait PathExt {
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display().to_string())
    }
}
