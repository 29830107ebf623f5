//! Unified error types for the slideshow application.

use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error reading the chosen directory
    DirectoryScan(String),
    /// The chosen directory contains no files at all
    NoImages(PathBuf),
    /// Every file in the directory failed to decode
    NoDecodableImages(PathBuf),
    /// Error opening, decoding or scaling a single image file
    ImageLoad { path: PathBuf, message: String },
    /// A target surface with a zero dimension
    InvalidSurface { width: u32, height: u32 },
}

impl AppError {
    pub fn image_load(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        AppError::ImageLoad {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl AppError {
    /// Whether a failed first load ends the session. A single bad file does
    /// not; it only becomes fatal when the timer reaches it again.
    pub fn ends_session_at_startup(&self) -> bool {
        matches!(
            self,
            AppError::NoImages(_) | AppError::NoDecodableImages(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DirectoryScan(msg) => write!(f, "Failed to read directory: {}", msg),
            AppError::NoImages(dir) => write!(f, "No images found in {}", dir.display()),
            AppError::NoDecodableImages(dir) => {
                write!(f, "No file in {} could be decoded", dir.display())
            }
            AppError::ImageLoad { path, message } => {
                write!(f, "Failed to load image {}: {}", path.display(), message)
            }
            AppError::InvalidSurface { width, height } => {
                write!(f, "Invalid display size {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
