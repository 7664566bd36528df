//! Tracing subscriber setup

use crate::errors::TravelStoreError;
use config::{LogFormat, LoggingConfig};
use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once is a no-op, including when another caller installed a global
/// subscriber first.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TravelStoreError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let env_filter = build_filter(config)?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(true).json())
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
    };

    if let Err(e) = result {
        // Lost the race to a concurrent caller; their subscriber stands.
        if !tracing::dispatcher::has_been_set() {
            return Err(TravelStoreError::Logging(e.to_string()));
        }
    }
    let _ = INITIALIZED.set(());
    Ok(())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TravelStoreError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| TravelStoreError::Logging(format!("invalid level '{}': {}", config.level, e))),
    }
}
