#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted for the log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

/// Writes records to stderr so they never interleave with the game board on
/// stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolve the level: explicit override, then `SEA_BATTLE_LOG`, then `warn`.
pub fn resolve_level(explicit: Option<LevelFilter>) -> LevelFilter {
    explicit
        .or_else(|| env::var(LOG_ENV).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Calling it again only adjusts the level.
pub fn init_logging(explicit: Option<LevelFilter>) {
    let level = resolve_level(explicit);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_wins() {
        assert_eq!(resolve_level(Some(LevelFilter::Trace)), LevelFilter::Trace);
    }

    #[test]
    fn init_is_repeatable() {
        init_logging(Some(LevelFilter::Debug));
        assert_eq!(log::max_level(), LevelFilter::Debug);
        init_logging(Some(LevelFilter::Error));
        assert_eq!(log::max_level(), LevelFilter::Error);
        log::error!("logger smoke test");
    }
}
