#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Context;
use pac_dialog::app::App;
use pac_dialog::platform;
use tracing::{error, info};

fn start() -> anyhow::Result<App> {
    let force_console = std::env::args().skip(1).any(|arg| arg == "--console" || arg == "-c");
    platform::init_console(force_console).context("could not set up logging")?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Pac Dialog");
    App::new().context("startup failed")
}

pub fn main() {
    let mut app = match start() {
        Ok(app) => app,
        Err(e) => {
            // Logging may be the thing that failed
            error!("{e:#}");
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    info!(frame_budget = ?pac_dialog::constants::LOOP_TIME, "Starting game loop");
    while app.run() {}
    info!("Game loop ended");
}
