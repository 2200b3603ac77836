//! Utility modules for infopack

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
