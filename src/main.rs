// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_cache;
mod image_loader;
mod startup;
mod state;
mod ui;

use slint::ComponentHandle;
use std::rc::Rc;

fn init_logging() {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let Some(directory) = startup::pick_directory() else {
        println!("No selection");
        return Ok(());
    };

    let controller = startup::prepare_slideshow(directory)?;
    let app_state = state::AppState::new(controller);

    let app = AppWindow::new()?;
    ui::setup_handlers(&app);

    app.show()?;
    app.window().set_maximized(true);

    let slide_timer = Rc::new(slint::Timer::default());
    ui::schedule_first_slide(&app, &app_state, slide_timer.clone());

    slint::run_event_loop()?;
    app.hide()?;

    match app_state.take_fatal() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
