use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::Priority;

impl From<Level> for Priority {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Priority::Error,
            Level::Warn => Priority::Warn,
            Level::Info => Priority::Info,
            Level::Debug => Priority::Debug,
            Level::Trace => Priority::Trace,
        }
    }
}

/// Adapter routing `log` crate records into the global logger.
struct LogFacade;

static FACADE: LogFacade = LogFacade;

impl Log for LogFacade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Priority::from(metadata.level()) >= crate::priority()
    }

    fn log(&self, record: &Record) {
        crate::log(Priority::from(record.level()), *record.args());
    }

    fn flush(&self) {}
}

/// Installs the adapter as the `log` crate's global logger, so `log::info!`
/// and friends route into this logger. Returns `false` if another logger was
/// installed first. Filtering stays with [`set_priority`](crate::set_priority);
/// the `log` facade has no `Critical` level.
pub fn hook_log_facade() -> bool {
    if log::set_logger(&FACADE).is_err() {
        return false;
    }
    log::set_max_level(LevelFilter::Trace);
    true
}
