//! Logging setup.
//!
//! - Console output on stderr, pretty or JSON per `logging.format`
//! - `RUST_LOG` overrides the configured level when set

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is unset: the configured level for this crate
/// and the HTTP stack, warnings for everything else.
#[must_use]
pub fn default_directive(config: &LoggingConfig) -> String {
    format!(
        "warn,mysuru_trails={level},tower_http={level}",
        level = config.level
    )
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(config))
            .with_context(|| format!("Invalid log level '{}'", config.level))?,
    };

    let fmt_layer = if config.format == "json" {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .json()
            .with_current_span(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .pretty()
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
