//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::Timer`: slide interval, fires on the UI thread
//! - `rayon::spawn`: image decode and scaling, one outstanding job at a time
//! - `slint::invoke_from_event_loop`: hands the decoded bitmap back to the UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::{schedule_first_slide, setup_handlers};
pub use state_helpers::*;
