use std::path::PathBuf;

use color_eyre::Report;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    Layer, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for console output
    pub console_level: Level,
    /// Log level for file output
    pub file_level: Level,
    /// Directory where log files should be written; no file output when unset
    pub log_dir: Option<PathBuf>,
    /// Whether file logs are written as JSON
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: Level::WARN,
            file_level: Level::DEBUG,
            log_dir: None,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = var("GLDEBUG_LOG_LEVEL").and_then(|l| l.parse::<Level>().ok()) {
            config.console_level = level;
            config.file_level = level;
        }

        if let Some(log_dir) = var("GLDEBUG_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(log_dir));
        }

        if var("GLDEBUG_JSON_LOGS").is_some() {
            config.json_format = true;
        }

        config
    }
}

/// Initialize the logging system with the given configuration.
///
/// The returned guard flushes the file writer when dropped and must be held
/// for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, Report> {
    let mut layers = vec![];
    let mut guard = None;

    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;

        let file_appender = tracing_appender::rolling::daily(log_dir, "shader-check.log");
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);

        let file_filter = EnvFilter::builder()
            .with_default_directive(config.file_level.into())
            .from_env_lossy();

        let file_layer = if config.json_format {
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(file_filter)
                .boxed()
        } else {
            fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_filter(file_filter)
                .boxed()
        };

        layers.push(file_layer);
    }

    // stdout is reserved for reported messages
    let console_filter = EnvFilter::builder()
        .with_default_directive(config.console_level.into())
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter)
        .boxed();

    layers.push(console_layer);

    tracing_subscriber::registry().with(layers).init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> LoggingConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LoggingConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]);

        assert_eq!(config.console_level, Level::WARN);
        assert!(config.log_dir.is_none());
        assert!(!config.json_format);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("GLDEBUG_LOG_LEVEL", "trace"),
            ("GLDEBUG_LOG_DIR", "/tmp/gldebug-logs"),
            ("GLDEBUG_JSON_LOGS", "1"),
        ]);

        assert_eq!(config.console_level, Level::TRACE);
        assert_eq!(config.file_level, Level::TRACE);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/gldebug-logs")));
        assert!(config.json_format);
    }

    #[test]
    fn test_invalid_level_is_ignored() {
        let config = config_from(&[("GLDEBUG_LOG_LEVEL", "chatty")]);
        assert_eq!(config.console_level, Level::WARN);
    }
}
