//! State management for the slideshow application.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::error::AppError;
use crate::image_cache::ImageCache;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod slideshow;

pub use slideshow::{
    FailureAction, FailurePolicy, LoadSlot, SlideshowController, load_first_decodable,
};

/// Application-wide state container.
///
/// Cloned into UI callbacks and into closures sent back through
/// `slint::invoke_from_event_loop`; the locks are only taken on the UI thread.
#[derive(Clone)]
pub struct AppState {
    pub slideshow: Arc<Mutex<SlideshowController>>,
    /// LRU cache for scaled bitmaps.
    pub image_cache: Arc<Mutex<ImageCache>>,
    /// Error that ended the session, reported by `main` after the event loop.
    pub fatal: Arc<Mutex<Option<AppError>>>,
}

impl AppState {
    pub fn new(controller: SlideshowController) -> Self {
        Self {
            slideshow: Arc::new(Mutex::new(controller)),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
            fatal: Arc::new(Mutex::new(None)),
        }
    }

    /// Locks the controller. Callers must not hold the guard across calls
    /// that lock it again.
    pub fn slideshow(&self) -> MutexGuard<'_, SlideshowController> {
        self.slideshow.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn cache(&self) -> MutexGuard<'_, ImageCache> {
        self.image_cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Keeps the first error that ends the session; later ones are dropped.
    pub fn record_fatal(&self, err: AppError) {
        let mut fatal = self.fatal.lock().unwrap_or_else(PoisonError::into_inner);
        if fatal.is_none() {
            *fatal = Some(err);
        } else {
            log::debug!("Session already failing, ignoring: {}", err);
        }
    }

    /// Records `err` and stops the event loop. `main` reports it once the
    /// loop has returned.
    pub fn fail(&self, err: AppError) {
        self.record_fatal(err);
        let _ = slint::quit_event_loop();
    }

    pub fn take_fatal(&self) -> Option<AppError> {
        self.fatal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
