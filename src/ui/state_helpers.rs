//! Helper functions that group ViewState updates and window queries.

use crate::config::FALLBACK_SURFACE_SIZE;
use crate::image_loader::SurfaceSize;
use log::warn;
use slint::ComponentHandle;

/// Puts a new slide on screen.
///
/// Groups: current-image, image-loaded, current-filename
pub fn set_slide(ui: &crate::AppWindow, image: slint::Image, filename: &str) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_image(image);
    view_state.set_image_loaded(true);
    view_state.set_current_filename(filename.into());
}

/// Current physical size of the display surface.
///
/// Falls back to a fixed size while the window still reports zero.
pub fn surface_size(ui: &crate::AppWindow) -> SurfaceSize {
    let size = ui.window().size();
    SurfaceSize::new(size.width, size.height).unwrap_or_else(|err| {
        warn!("{}, using {:?}", err, FALLBACK_SURFACE_SIZE);
        FALLBACK_SURFACE_SIZE
    })
}
