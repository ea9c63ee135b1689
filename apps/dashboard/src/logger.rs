//! Logging for the shortener dashboard.
//!
//! Always writes a plain-text log file. Colored console output goes to
//! stderr so it never mixes with command output on stdout, and is left off
//! while the TUI owns the terminal.

use crate::error::DashboardError;

use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "dashboard.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger.
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Arguments
///
/// * `log_dir` - Directory where `dashboard.log` is created (must exist)
/// * `console` - Also echo records to stderr with colors
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the global logger
/// was already set by someone else.
pub fn initialize(log_dir: &Path, console: bool) -> Result<(), DashboardError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir, console);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(log_dir: &Path, console: bool) -> Result<(), DashboardError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(fern::log_file(&log_file_path).map_err(|e| {
            DashboardError::dashboard(format!("Failed to create log file: {e}"))
        })?);

    let mut base_dispatch = Dispatch::new()
        .level(LOG_LEVEL)
        // transport internals stay at Warn
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(file_dispatch);

    if console {
        let color_configuration = ColoredLevelConfig::new()
            .debug(Blue)
            .info(Green)
            .warn(Yellow)
            .error(Red)
            .trace(Magenta);

        let console_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = format_rfc3339(SystemTime::now()),
                    level = color_configuration.color(record.level()),
                    message = message,
                ))
            })
            .chain(stderr());

        base_dispatch = base_dispatch.chain(console_dispatch);
    }

    base_dispatch
        .apply()
        .map_err(|e| DashboardError::dashboard(format!("Failed to initialize logger: {e}")))?;

    Ok(())
}
