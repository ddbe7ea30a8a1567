// Conditional logging macros - only active in debug builds

use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const APP_DIR: &str = "hangman-arcade";
const LOG_FILE_NAME: &str = "hangman.log";

/// Default location for the log file when output must stay off the terminal.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the `env_logger` backend.
///
/// `RUST_LOG` takes precedence over the default filter. When `log_file` is
/// given the records are appended there instead of stderr. If a logger is
/// already installed it stays in place.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already installed, keeping the existing one");
    }
    Ok(())
}
