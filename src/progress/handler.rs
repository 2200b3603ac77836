//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while a run copies and builds info directories
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started
    Started {
        source_root: String,
        target_root: String,
    },

    /// Source root scanned for info directories
    DirectoriesDiscovered { count: usize },

    /// One directory copied into the target root
    CopyComplete {
        name: String,
        index: usize,
        total: usize,
        duration: Duration,
    },

    /// Build step finished for one directory (`attempted` is false when no
    /// source file was found)
    BuildComplete {
        name: String,
        attempted: bool,
        success: bool,
        duration: Duration,
    },

    /// Metadata file written
    MetadataWritten { path: String, entries: usize },

    /// Run completed
    Completed {
        processed: usize,
        failed_builds: usize,
        total_time: Duration,
    },

    /// Run aborted
    Failed { error: String },
}

/// Trait for handling progress events during a run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
