//! Logger setup and verbose output helpers.
//!
//! Diagnostic tracing goes through the `log` facade and is initialized once
//! with a colored stderr dispatch. User-facing verbose output stays on stdout
//! via [`VerboseLogger`].

use std::sync::atomic::{AtomicBool, Ordering};

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use log::LevelFilter;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the global logger.
///
/// Safe to call more than once; only the first call applies a dispatch.
pub fn init(debug: bool) {
    if LOGGER_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let result = Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {target}: {message}",
                date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                level = colors.color(record.level()),
                target = record.target(),
                message = message,
            ))
        })
        .chain(std::io::stderr())
        .apply();

    if let Err(err) = result {
        eprintln!("Warning: failed to initialize logger: {}", err);
    }
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
    }

    #[test]
    fn test_verbose_logger_tracks_enabled_state() {
        assert!(VerboseLogger::new(true).is_enabled());
        assert!(!VerboseLogger::new(false).is_enabled());
    }
}
