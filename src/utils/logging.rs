use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Environment variable holding an `EnvFilter` directive, e.g. `worklog_summary=debug`
pub(crate) const LOG_ENV: &str = "WORKLOG_LOG";

pub(crate) fn init_tracing(quiet: bool, debug: bool) -> Result<(), AppError> {
    let level = if quiet {
        "error"
    } else if debug {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| AppError::Logging(error.to_string()))
}
