//! Desktop platform implementation.

use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::PlatformError;
use crate::formatter::FrameFormatter;

/// Level used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "debug";

/// Sleeps precisely while focused, and cheaply otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global subscriber.
///
/// `force_console` only matters on Windows release builds, which have no
/// console attached; elsewhere it is accepted and ignored.
pub fn init_console(force_console: bool) -> Result<(), PlatformError> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(cfg!(not(windows))).event_format(FrameFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {e}")))?;

    tracing::debug!(force_console, "Logging initialized");
    Ok(())
}
