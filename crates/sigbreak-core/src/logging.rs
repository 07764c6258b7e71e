//! Tracing subscriber setup shared by the sigbreak binaries

use crate::error::{CoreError, CoreResult};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "SIGBREAK_LOG";

/// Install the global subscriber.
///
/// Logs go to stderr, or to `<log_dir>/sigbreak.log` when a directory is
/// given. The returned guard must be held until exit so buffered file
/// output gets flushed.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> CoreResult<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| CoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let appender = tracing_appender::rolling::never(dir, "sigbreak.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .try_init()
                .map_err(|e| CoreError::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| CoreError::Logging(e.to_string()))?;
            Ok(None)
        }
    }
}
