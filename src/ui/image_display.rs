//! Slide loading and display logic.
//!
//! Uses `rayon::spawn` for decoding and scaling, then
//! `slint::invoke_from_event_loop` to hand the bitmap back to the UI thread.
//! Regular loads and preloads share the controller's single decode slot, so
//! at most one decode is outstanding at any time.

use crate::file_utils::PathExt;
use crate::image_loader::{self, Bitmap};
use crate::state::{AppState, FailureAction, LoadSlot, load_first_decodable};
use crate::ui::{set_slide, surface_size};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Shows a decoded bitmap and logs its position in the cycle.
fn present(ui: &crate::AppWindow, state: &AppState, path: &Path, bitmap: Bitmap) {
    let (index, total) = {
        let slideshow = state.slideshow();
        (slideshow.current_index(), slideshow.len())
    };
    debug!(
        "Showing slide {}/{}: {}",
        index + 1,
        total,
        path.format_for_log()
    );
    set_slide(ui, image_loader::create_slint_image(bitmap), &path.format_for_log());
}

/// Shows the first slide, then starts the repeating timer through `start`.
///
/// The first load runs on the UI thread. A failure here is logged and the
/// surface stays black; the timer still starts, so the failure policy only
/// ends the session from a timer-driven load. The exception is the skip
/// policy finding nothing decodable at all.
pub fn show_first_slide(
    ui_handle: slint::Weak<crate::AppWindow>,
    state: AppState,
    start: impl FnOnce(),
) {
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    let size = surface_size(&ui);

    let started = Instant::now();
    let result = {
        let mut slideshow = state.slideshow();
        load_first_decodable(&mut slideshow, size)
    };

    match result {
        Ok((path, bitmap)) => {
            debug!(
                "Decoded {} in {:?}",
                path.format_for_log(),
                started.elapsed()
            );
            state.cache().put(&path, bitmap.clone());
            present(&ui, &state, &path, bitmap);
        }
        Err(err) if err.ends_session_at_startup() => {
            state.fail(err);
            return;
        }
        Err(err) => warn!("First slide not shown: {}", err),
    }

    start();
    preload_next(ui_handle, state);
}

/// Timer callback: advances the controller and loads the new slide.
pub fn on_tick(ui_handle: slint::Weak<crate::AppWindow>, state: AppState) {
    let next = state.slideshow().tick();
    if let Some(path) = next {
        load_and_display_slide(ui_handle, state, path);
    }
}

/// Frees the decode slot, then replays a deferred tick or starts a preload.
fn finish_load(ui_handle: slint::Weak<crate::AppWindow>, state: AppState) {
    let resume = state.slideshow().complete_load();
    if resume {
        on_tick(ui_handle, state);
    } else {
        preload_next(ui_handle, state);
    }
}

/// Displays `path`, from the cache when possible, otherwise after a
/// background decode.
///
/// The caller must already hold the decode slot.
pub fn load_and_display_slide(
    ui_handle: slint::Weak<crate::AppWindow>,
    state: AppState,
    path: PathBuf,
) {
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    let size = surface_size(&ui);

    let cached = state.cache().get(&path, size);
    if let Some(bitmap) = cached {
        present(&ui, &state, &path, bitmap);
        finish_load(ui_handle, state);
        return;
    }

    rayon::spawn(move || {
        let started = Instant::now();
        let result = image_loader::load_scaled_blocking(&path, size);
        let elapsed = started.elapsed();

        let _ = slint::invoke_from_event_loop(move || match result {
            Ok(bitmap) => {
                debug!("Decoded {} in {:?}", path.format_for_log(), elapsed);
                state.cache().put(&path, bitmap.clone());
                if let Some(ui) = ui_handle.upgrade() {
                    present(&ui, &state, &path, bitmap);
                }
                finish_load(ui_handle, state);
            }
            Err(err) => {
                let action = state.slideshow().resolve_failure(&err);
                match action {
                    FailureAction::Abort => state.fail(err),
                    FailureAction::Skip => finish_load(ui_handle, state),
                }
            }
        });
    });
}

/// Decodes the next slide into the cache while the current one is shown.
///
/// Errors are ignored here; the file is decoded again when the index
/// reaches it and the failure policy applies then.
fn preload_next(ui_handle: slint::Weak<crate::AppWindow>, state: AppState) {
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    let size = surface_size(&ui);

    let next = state.slideshow().peek_next().to_path_buf();
    if state.cache().contains(&next, size) {
        return;
    }
    let Some(path) = state.slideshow().begin_preload() else {
        return;
    };

    rayon::spawn(move || {
        let result = image_loader::load_scaled_blocking(&path, size);

        let _ = slint::invoke_from_event_loop(move || {
            match result {
                Ok(bitmap) => state.cache().put(&path, bitmap),
                Err(err) => debug!("Preload failed, retrying on display: {}", err),
            }

            let resume = {
                let mut slideshow = state.slideshow();
                debug_assert_eq!(slideshow.slot(), LoadSlot::Preloading);
                slideshow.complete_load()
            };
            if resume {
                on_tick(ui_handle, state);
            }
        });
    });
}
