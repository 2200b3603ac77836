pub mod error;
pub mod orchestrator;
pub mod phases;
pub mod report;

pub use error::PipelineError;
pub use orchestrator::Orchestrator;
pub use phases::metadata::InfoMetadata;
pub use report::{BuildOutcome, ProcessedInfo, RunReport};
