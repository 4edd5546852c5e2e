//! Structured logging infrastructure for Gatecall
//!
//! Announcements are printed on stdout, so every log layer writes to stderr
//! or to a file.

use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gatecall_i18n=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Default configuration at a different level
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }
}

/// Build the level filter, preferring `RUST_LOG` when it is set.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(build_filter(&config.level));

    let file = match &config.file_path {
        Some(path) => Some(Mutex::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        )),
        None => None,
    };

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry.with(layer.with_writer(file)).try_init()?,
            None => registry.with(layer.with_writer(io::stderr)).try_init()?,
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()?,
            None => registry.with(layer.with_writer(io::stderr)).try_init()?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(!config.json_format);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_with_level() {
        let config = LoggingConfig::with_level("debug");
        assert_eq!(config.level, "debug");
        assert!(!config.json_format);
    }
}
