//! Event handlers for UI callbacks and the slide timer.

use crate::config::SLIDE_INTERVAL;
use crate::state::AppState;
use crate::ui::image_display::{on_tick, show_first_slide};
use log::info;
use slint::{ComponentHandle, Timer, TimerMode};
use std::rc::Rc;
use std::time::Duration;

/// Registers the Logic callbacks.
pub fn setup_handlers(ui: &crate::AppWindow) {
    // Double-click anywhere on the surface ends the session normally.
    ui.global::<crate::Logic>().on_quit_requested(|| {
        info!("Double-click received, quitting");
        let _ = slint::quit_event_loop();
    });
}

/// Queues the synchronous first load for the first event loop iteration,
/// once the window is mapped. The repeating `slide_timer` starts only after
/// that slide is on screen.
pub fn schedule_first_slide(ui: &crate::AppWindow, state: &AppState, slide_timer: Rc<Timer>) {
    let ui_handle = ui.as_weak();
    let state = state.clone();

    Timer::single_shot(Duration::ZERO, move || {
        let tick_ui = ui_handle.clone();
        let tick_state = state.clone();
        show_first_slide(ui_handle, state, move || {
            slide_timer.start(TimerMode::Repeated, SLIDE_INTERVAL, move || {
                on_tick(tick_ui.clone(), tick_state.clone());
            });
        });
    });
}
