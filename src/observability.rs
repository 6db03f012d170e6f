//! This module provides logging setup and structured diagnostics for the
//! leaderboard core.
//!
//! The library itself only talks to the `log` facade. Hosts that want output
//! call `init_logging` once; it installs `env_logger` behind a `Once` guard so
//! repeated calls (e.g. from several views mounting) are harmless.

use std::fs::OpenOptions;
use std::sync::Once;

use log::LevelFilter;

use crate::error::LeaderboardError;

/// Logs a structured key-value metric line at debug level, only in debug builds.
///
/// # Example
/// ```
/// use tags_leaderboard::log_metric;
/// let rows = 20;
/// log_metric!("event" = "visible_rows", "rows" = rows);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("{}={}", $key, $value));
            )+
            $crate::__log::debug!("TAGS_METRIC: {}", parts.join(" "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs the `env_logger` backend at `level`, optionally appending to `log_file`.
///
/// Only the first call has any effect.
pub fn init_logging(level: LevelFilter, log_file: Option<&str>) -> Result<(), LeaderboardError> {
    // Open the file up front so a bad path is reported instead of swallowed.
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
