//! infopack - collects info directories, builds them and catalogues them
//!
//! Scans the immediate subdirectories of a source root for names containing
//! `info`, copies each into a target root under a derived name, compiles the
//! first Go file inside each copy with `go build`, and writes a
//! `metadata.json` summary at the target root.
//!
//! # Example Usage
//!
//! ```no_run
//! use infopack::config::PipelineSettings;
//! use infopack::Orchestrator;
//! use std::path::Path;
//!
//! let report = Orchestrator::system(PipelineSettings::default())
//!     .run(Path::new("data"), Path::new("out"))?;
//! println!("{} directories processed", report.processed.len());
//! # Ok::<(), infopack::PipelineError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`pipeline`]: discovery, naming, copy, build and metadata phases plus the orchestrator
//! - [`fs`]: file system abstraction with real and in-memory implementations
//! - [`process`]: subprocess execution with explicit working directories
//! - [`progress`]: progress events emitted during a run
//! - [`cli`]: command-line arguments and report formatting

pub mod cli;
pub mod config;
pub mod fs;
pub mod pipeline;
pub mod process;
pub mod progress;
pub mod util;

pub use config::{ConfigError, InfopackConfig, PipelineSettings};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use pipeline::{BuildOutcome, InfoMetadata, Orchestrator, PipelineError, RunReport};
pub use process::{CommandRunner, MockCommandRunner, SystemCommandRunner};
pub use progress::{LoggingHandler, ProgressEvent, ProgressHandler};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
