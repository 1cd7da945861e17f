//! Log output setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

/// Install the global subscriber. `level` takes precedence over `RUST_LOG`;
/// without either, warnings and errors are shown.
pub fn init_logger(level: Option<&str>) -> Result<(), AppError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| AppError::SettingsError(format!("Invalid log filter `{}`: {}", level, e)))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::SettingsError(format!("Failed to install logger: {}", e)))?;

    Ok(())
}
