//! File-backed tracing subscriber.
//!
//! The TUI owns the terminal, so log output only ever goes to a file. When
//! no log file is configured no subscriber is installed and `tracing` macros
//! are no-ops.

use std::path::Path;

use eventlens::ListingError;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "EVENTLENS_LOG";

/// Directive applied when [`LOG_ENV_VAR`] is unset.
pub const DEFAULT_DIRECTIVE: &str = "eventlens=debug";

/// Installs the global subscriber writing to `log_file`.
///
/// # Errors
///
/// Returns [`ListingError::Configuration`] when the file cannot be opened or
/// a subscriber is already installed.
pub fn init(log_file: &str) -> Result<(), ListingError> {
    let path = Path::new(log_file);
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ListingError::Configuration {
            message: format!("log_file `{log_file}` has no file name"),
        })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|error| ListingError::Configuration {
            message: format!("failed to open log file `{log_file}`: {error}"),
        })?;

    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|error| ListingError::Configuration {
            message: format!("invalid log directive: {error}"),
        })?;
    let filter = EnvFilter::builder()
        .with_default_directive(directive)
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_filter(filter),
        )
        .try_init()
        .map_err(|error| ListingError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })
}
