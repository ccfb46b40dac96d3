//! `tracing` subscriber setup.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogConfig;

/// Errors installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log level: {0}")]
    InvalidLevel(String),
    #[error("invalid filter directive: {0}")]
    Filter(#[from] ParseError),
    #[error("subscriber already installed: {0}")]
    Init(#[from] TryInitError),
}

/// Expands a bare level into a filter that keeps transport crates quiet.
/// Directive strings containing `,` or `=` are used as-is.
pub fn filter_directives(level: &str) -> Result<String, LoggingError> {
    let level = level.trim();
    if level.contains(',') || level.contains('=') {
        return Ok(level.to_string());
    }
    LevelFilter::from_str(level).map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;
    Ok(format!(
        "{level},hyper=info,hyper_util=info,reqwest=info,alloy_transport_http=info"
    ))
}

/// Installs the global subscriber. Fails on a bad level or if one is
/// already set.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let directives = filter_directives(&config.level)?;
    let filter = EnvFilter::from_str(&directives)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_target(false).with_current_span(false))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).compact())
            .try_init()?;
    }

    tracing::info!(
        filter = %directives,
        output = if config.json { "json" } else { "compact" },
        "logging initialized"
    );
    Ok(())
}
