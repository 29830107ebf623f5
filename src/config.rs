//! Application configuration constants.

use crate::image_loader::SurfaceSize;
use crate::state::FailurePolicy;
use std::time::Duration;

/// Delay between two slides.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(3000);

/// Title of the directory picker dialog.
pub const PICKER_TITLE: &str = "Photo Directory";

/// What happens when a file in the cycle cannot be decoded.
pub const FAILURE_POLICY: FailurePolicy = FailurePolicy::Abort;

/// Number of scaled bitmaps kept for instant redisplay.
pub const IMAGE_CACHE_CAPACITY: usize = 6;

/// Used when the window has not reported a real size yet.
pub const FALLBACK_SURFACE_SIZE: SurfaceSize = SurfaceSize {
    width: 1920,
    height: 1080,
};
