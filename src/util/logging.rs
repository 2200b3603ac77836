//! Structured logging setup for infopack
//!
//! Initializes a `tracing` subscriber with either human-readable or JSON
//! output. Logs always go to stderr so stdout stays free for the run report.
//! `RUST_LOG` takes precedence over the configured level.
//!
//! # Example
//!
//! ```no_run
//! use infopack::config::InfopackConfig;
//! use infopack::util::logging::{init_logging, LoggingConfig};
//! use tracing::info;
//!
//! let config = InfopackConfig::from_env()?;
//! init_logging(LoggingConfig::from(&config));
//! info!(source = "data", "Starting run");
//! # Ok::<(), infopack::ConfigError>(())
//! ```

use crate::config::InfopackConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., infopack::pipeline) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl From<&InfopackConfig> for LoggingConfig {
    fn from(config: &InfopackConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.log_json,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, case-insensitively. Unknown values fall
/// back to `INFO`.
///
/// ```
/// use infopack::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let directive = format!("infopack={}", level);
    match directive.parse() {
        Ok(directive) => EnvFilter::new("warn").add_directive(directive),
        Err(_) => EnvFilter::new("info"),
    }
}

/// Initializes the logging system. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        }
    });
}
