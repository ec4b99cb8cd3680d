//! # duolog
//! Process-wide logger with priority filtering and dual console/file output.
//!
//! Every accepted log call is timestamped, written to standard output and,
//! when a file sink is enabled, appended to the log file as well. Calls below
//! the configured priority return immediately without taking the log lock.
//!
//! ## Usage
//! ```rust
//! duolog::set_priority(duolog::Priority::Debug);
//! duolog::debug!("starting up");
//! duolog::info!("{} plus {} is {}", 1, 2, 1 + 2);
//! ```
//!
//! ## Logging to a file
//! The log file is created if it does not exist and appended to if it does.
//! Enabling a new file closes the previous one first. On open failure the
//! enable call returns `false` and console logging keeps working. Both sinks
//! receive the same composed line, except that the severity label on the
//! console is colorized when standard output is a terminal; the file always
//! gets the plain text.
//!
//! ```rust
//! std::fs::remove_file("/tmp/duolog-doc.log").ok();
//! assert!(duolog::enable_file_output_to("/tmp/duolog-doc.log"));
//! duolog::warn!("disk almost full");
//! assert!(std::fs::read_to_string("/tmp/duolog-doc.log")
//!     .unwrap()
//!     .ends_with("[WARN ]     disk almost full\n"));
//! ```
//!
//! ## Timestamps
//! Timestamps follow a strftime-style template, `%T  %d-%m-%Y` by default
//! (e.g. `14:03:21  05-03-2024`). The template is not validated; a malformed
//! directive truncates the rendered timestamp where rendering failed, it is
//! never an error.
//!
//! ```rust
//! duolog::set_timestamp_format("%Y-%m-%dT%H:%M:%S");
//! duolog::info!("ISO timestamps from here on");
//! ```
//!
//! ## Formatting
//! The message argument of every severity macro is a `std::fmt` format string
//! with positional substitution, checked at compile time. The printf-style
//! contract of treating runtime text as a template, and the format-string
//! hazard that comes with it, cannot be expressed here: a runtime string can
//! only ever be an argument, never a template.

mod config;
mod facade;
mod log_writer;

pub use facade::hook_log_facade;

use std::{
    fmt,
    fmt::Write as _,
    path::{Path, PathBuf},
    sync::{
        LazyLock, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU8, Ordering},
    },
};

use chrono::Local;
use colored::{ColoredString, Colorize};

use crate::{
    config::DUOLOG_CONFIG,
    log_writer::{LogFile, LogStdout, LogWriter},
};

/// Importance of a log call. Calls below the configured minimum priority are
/// dropped before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    Trace = 0,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Priority {
    /// Fixed-width bracketed label, as it appears in every rendered line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "[TRACE]     ",
            Self::Debug => "[DEBUG]     ",
            Self::Info => "[INFO ]     ",
            Self::Warn => "[WARN ]     ",
            Self::Error => "[ERROR]     ",
            Self::Critical => "[CRIT ]     ",
        }
    }

    fn label_colored(self) -> ColoredString {
        match self {
            Self::Trace => self.label().purple(),
            Self::Debug => self.label().blue(),
            Self::Info => self.label().green(),
            Self::Warn => self.label().yellow(),
            Self::Error => self.label().red(),
            Self::Critical => self.label().red().bold(),
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Trace,
            1 => Self::Debug,
            3 => Self::Warn,
            4 => Self::Error,
            5 => Self::Critical,
            _ => Self::Info,
        }
    }
}

/// State behind the log lock. Only accepted log calls and the configuration
/// setters touch it.
struct Inner {
    /// Reusable timestamp scratch buffer.
    stamp: String,
    timestamp_format: String,
    /// Last path a caller asked to log to, kept even if the open failed.
    filepath: Option<PathBuf>,
    file: Option<LogFile>,
    stdout: LogStdout,
}

struct Logger {
    /// Minimum accepted priority, read without the lock on the reject path.
    priority: AtomicU8,
    inner: Mutex<Inner>,
}

/// Global logger, constructed once on first use.
static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger {
    priority: AtomicU8::new(Priority::Info as u8),
    inner: Mutex::new(Inner {
        stamp: String::with_capacity(80),
        timestamp_format: DUOLOG_CONFIG.TIMESTAMP_FORMAT.clone(),
        filepath: None,
        file: None,
        stdout: LogStdout,
    }),
});

fn lock_inner() -> MutexGuard<'static, Inner> {
    // A poisoned lock must not disable logging for the rest of the process.
    LOGGER.inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets the minimum priority. Messages below it are not recorded.
/// The default is [`Priority::Info`].
pub fn set_priority(priority: Priority) {
    LOGGER.priority.store(priority as u8, Ordering::Relaxed);
}

/// Current minimum priority.
pub fn priority() -> Priority {
    Priority::from_u8(LOGGER.priority.load(Ordering::Relaxed))
}

/// Enables file output to the configured default path (`log.txt`, or
/// `DUOLOG_FILE_PATH`). See [`enable_file_output_to`].
pub fn enable_file_output() -> bool {
    enable_file_output_to(&DUOLOG_CONFIG.FILE_PATH)
}

/// Enables file output to `path`, creating the file if it does not exist and
/// appending to it if it does. Any previously open log file is closed first.
/// Returns whether the open succeeded; on failure no file sink is active and
/// console logging keeps working.
pub fn enable_file_output_to<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let mut inner = lock_inner();
    inner.filepath = Some(path.to_path_buf());
    inner.file = None;
    match LogFile::open(path) {
        Ok(file) => {
            inner.file = Some(file);
            true
        }
        Err(_) => false,
    }
}

/// Path passed to the last `enable_file_output*` call, whether or not that
/// open succeeded.
pub fn filepath() -> Option<PathBuf> {
    lock_inner().filepath.clone()
}

/// True iff a log file is currently open.
pub fn is_file_output_enabled() -> bool {
    lock_inner().file.is_some()
}

/// Sets the strftime-style timestamp template. Not validated: an unknown
/// directive truncates the rendered timestamp at the point of failure.
pub fn set_timestamp_format(format: &str) {
    lock_inner().timestamp_format = format.to_owned();
}

/// Current timestamp template.
pub fn timestamp_format() -> String {
    lock_inner().timestamp_format.clone()
}

/// Records `args` at `priority`. Prefer the severity macros.
pub fn log(priority: Priority, args: fmt::Arguments<'_>) {
    if (priority as u8) < LOGGER.priority.load(Ordering::Relaxed) {
        return;
    }
    write_record(priority, &args.to_string());
}

/// Single exit for both sinks. Holding the lock across the timestamp render
/// and both writes keeps lines whole under concurrent callers.
fn write_record(priority: Priority, message: &str) {
    let mut inner = lock_inner();
    let Inner {
        stamp,
        timestamp_format,
        filepath: _,
        file,
        stdout,
    } = &mut *inner;
    stamp.clear();
    // Partial output from a malformed template stays in the buffer as-is.
    let _ = write!(stamp, "{}", Local::now().format(timestamp_format.as_str()));
    stdout.regular(&format!("{stamp}    {}{message}", priority.label_colored()));
    if let Some(file) = file {
        file.regular(&format!("{stamp}    {}{message}", priority.label()));
    }
}

/// Logs at [`Priority::Trace`].
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log($crate::Priority::Trace, ::std::format_args!($($arg)*))
    };
}

/// Logs at [`Priority::Debug`].
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log($crate::Priority::Debug, ::std::format_args!($($arg)*))
    };
}

/// Logs at [`Priority::Info`].
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log($crate::Priority::Info, ::std::format_args!($($arg)*))
    };
}

/// Logs at [`Priority::Warn`].
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log($crate::Priority::Warn, ::std::format_args!($($arg)*))
    };
}

/// Logs at [`Priority::Error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log($crate::Priority::Error, ::std::format_args!($($arg)*))
    };
}

/// Logs at [`Priority::Critical`].
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {
        $crate::log($crate::Priority::Critical, ::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Priority; 6] = [
        Priority::Trace,
        Priority::Debug,
        Priority::Info,
        Priority::Warn,
        Priority::Error,
        Priority::Critical,
    ];

    #[test]
    fn priority_scale_is_ordered() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn labels_are_fixed_width() {
        for priority in ALL {
            let label = priority.label();
            assert_eq!(label.len(), 12);
            assert!(label.starts_with('['));
            assert_eq!(label.as_bytes()[6], b']');
        }
    }

    #[test]
    fn from_u8_round_trips() {
        for priority in ALL {
            assert_eq!(Priority::from_u8(priority as u8), priority);
        }
        assert_eq!(Priority::from_u8(42), Priority::Info);
    }
}
