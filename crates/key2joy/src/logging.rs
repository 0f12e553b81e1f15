//! Timestamped, colored log lines.
//!
//! The `print_*` macros format nothing unless their level is enabled for the
//! calling module, so they are safe to use per input event. Errors go to
//! stderr, everything else to stdout.

use fern::Dispatch;

#[inline(always)]
pub fn format_log(message: &str) -> String {
    let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S");
    format!("[{now}] {message}")
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        if log::log_enabled!(log::Level::Error) {
            let message = $crate::logging::format_log(&format!($($arg)*));
            log::error!("{}", message.bright_red());
        }
    }
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        if log::log_enabled!(log::Level::Warn) {
            let message = $crate::logging::format_log(&format!($($arg)*));
            log::warn!("{}", message.bright_yellow());
        }
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        if log::log_enabled!(log::Level::Info) {
            let message = $crate::logging::format_log(&format!($($arg)*));
            log::info!("{message}");
        }
    }
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        if log::log_enabled!(log::Level::Debug) {
            let message = $crate::logging::format_log(&format!($($arg)*));
            log::debug!("{}", message.dimmed());
        }
    }
}

fn level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Build the dispatcher: `key2joy` logs at `level`, other crates only
/// report errors.
fn dispatch(verbose: bool) -> Dispatch {
    let stdout = Dispatch::new()
        .filter(|meta| meta.level() > log::Level::Error)
        .chain(std::io::stdout());
    let stderr = Dispatch::new()
        .level(log::LevelFilter::Error)
        .chain(std::io::stderr());

    Dispatch::new()
        .level(log::LevelFilter::Error)
        .level_for("key2joy", level(verbose))
        .chain(stdout)
        .chain(stderr)
}

/// Setup the logger.
pub fn setup(verbose: bool, no_color: bool) {
    dispatch(verbose).apply().expect("Unable to set up logger");

    if no_color {
        colored::control::set_override(false);
    }
}
