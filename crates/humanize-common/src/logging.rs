//! Structured logging setup built on `tracing-subscriber`

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Boxed error returned by the logging initializers
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "humanize_locale=debug")
    pub level: String,
    /// Single-line compact output instead of the full formatter
    pub compact: bool,
    /// Whether to emit ANSI colors (ignored when writing to a file)
    pub ansi: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to log span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: false,
            ansi: true,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Build the env filter, preferring `RUST_LOG` over the configured level
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails instead of panicking when a global subscriber is already installed,
/// so embedding applications can call this unconditionally.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let layer = fmt::layer()
        .with_span_events(config.span_events())
        .with_target(config.include_targets);

    match (&config.file_path, config.compact) {
        (Some(path), compact) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let layer = layer.with_ansi(false).with_writer(file);
            if compact {
                registry.with(layer.compact()).try_init()?;
            } else {
                registry.with(layer).try_init()?;
            }
        }
        (None, true) => registry.with(layer.with_ansi(config.ansi).compact()).try_init()?,
        (None, false) => registry.with(layer.with_ansi(config.ansi)).try_init()?,
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<(), LoggingError> {
    init_logging(&LoggingConfig::default())
}

/// Initialize logging for development (debug level, span events)
pub fn init_dev_logging() -> Result<(), LoggingError> {
    init_logging(&LoggingConfig {
        level: "debug".to_string(),
        include_spans: true,
        ..LoggingConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.compact);
        assert!(config.ansi);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_span_events_follow_flag() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.span_events(), FmtSpan::NONE);

        config.include_spans = true;
        assert_eq!(config.span_events(), FmtSpan::NEW | FmtSpan::CLOSE);
    }

    #[test]
    fn test_second_init_reports_error() {
        // The first call may or may not win depending on test ordering.
        let _ = init_default_logging();
        assert!(init_default_logging().is_err());
    }
}
