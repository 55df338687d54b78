//! Logging and tracing configuration
//!
//! All diagnostics go to stderr (and optionally a daily rolling file) so that
//! stdout carries nothing but the day report.

use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::types::CliArgs;

/// Prefix of the daily rolling log files
pub const LOG_FILE_PREFIX: &str = "computer-club-simulator";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Log file directory, if logging to file
    pub log_directory: Option<String>,
    /// Whether to enable span events
    pub enable_span_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: Level::WARN, json_format: false, log_directory: None, enable_span_events: false }
    }
}

/// Keeps the non-blocking file writer flushing until dropped
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration selected by the command line flags
    ///
    /// Defaults to WARN. `--debug` wins over `--verbose`, and both turn on span close events.
    pub fn from_args(args: &CliArgs) -> Self {
        let mut config = Self::new();
        if args.debug {
            config = config.with_level(Level::DEBUG).with_span_events();
        } else if args.verbose {
            config = config.with_level(Level::INFO).with_span_events();
        }
        if args.log_json {
            config = config.with_json_format();
        }
        if let Some(directory) = &args.log_dir {
            config = config.with_file_logging(directory.clone());
        }
        config
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging into `directory`
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Whether a log file will be written
    pub fn logs_to_file(&self) -> bool {
        self.log_directory.is_some()
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// The returned guard must be held for as long as file logging should run.
    pub fn init(self) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()));

        let registry = Registry::default().with(env_filter);

        let (file_writer, file_guard) = match &self.log_directory {
            Some(directory) => {
                let appender = rolling::daily(directory, LOG_FILE_PREFIX);
                let (writer, guard) = non_blocking(appender);
                (Some(writer), Some(guard))
            }
            None => (None, None),
        };
        // JSON to file regardless of console format
        let file_layer = file_writer.map(|writer| {
            fmt::layer().json().with_writer(writer).with_span_events(self.span_events())
        });

        if self.json_format {
            let console_layer =
                fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events());
            registry.with(file_layer).with(console_layer).try_init()?;
        } else {
            let console_layer = fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_span_events(self.span_events());
            registry.with(file_layer).with(console_layer).try_init()?;
        }

        info!(
            level = %self.level,
            json = self.json_format,
            file = self.logs_to_file(),
            "Logging initialized"
        );
        Ok(LoggingGuard { _file_guard: file_guard })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["computer-club-simulator", "day.txt"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_logging_config_creation() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.json_format);
        assert!(!config.logs_to_file());
        assert!(!config.enable_span_events);
    }

    #[test]
    fn test_from_args_defaults_to_warn() {
        let config = LoggingConfig::from_args(&args(&[]));
        assert_eq!(config.level, Level::WARN);
        assert!(!config.enable_span_events);
        assert!(!config.logs_to_file());
    }

    #[test]
    fn test_from_args_debug_wins_over_verbose() {
        let config = LoggingConfig::from_args(&args(&["--verbose", "--debug"]));
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.enable_span_events);

        let config = LoggingConfig::from_args(&args(&["--verbose"]));
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_from_args_output_options() {
        let config = LoggingConfig::from_args(&args(&["--log-json", "--log-dir", "logs"]));
        assert!(config.json_format);
        assert!(config.logs_to_file());
        assert_eq!(config.log_directory.as_deref(), Some("logs"));
    }

    #[test]
    fn test_default_directive_targets_crate() {
        let config = LoggingConfig::new().with_level(Level::INFO);
        assert_eq!(config.default_directive(), "computer_club_simulator=INFO");
    }
}
