//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started {
                source_root,
                target_root,
            } => {
                info!(source = %source_root, target = %target_root, "Starting run");
            }
            ProgressEvent::DirectoriesDiscovered { count } => {
                info!(count, "Info directories discovered");
            }
            ProgressEvent::CopyComplete {
                name,
                index,
                total,
                duration,
            } => {
                info!(
                    name = %name,
                    progress = format!("{}/{}", index, total),
                    duration_ms = duration.as_millis(),
                    "Directory copied"
                );
            }
            ProgressEvent::BuildComplete {
                name,
                attempted,
                success,
                duration,
            } => {
                if !*attempted {
                    debug!(name = %name, "No source file to build");
                } else if *success {
                    info!(
                        name = %name,
                        duration_ms = duration.as_millis(),
                        "Build complete"
                    );
                } else {
                    warn!(
                        name = %name,
                        duration_ms = duration.as_millis(),
                        "Build failed"
                    );
                }
            }
            ProgressEvent::MetadataWritten { path, entries } => {
                info!(path = %path, entries, "Metadata written");
            }
            ProgressEvent::Completed {
                processed,
                failed_builds,
                total_time,
            } => {
                info!(
                    processed,
                    failed_builds,
                    total_time_ms = total_time.as_millis(),
                    "Run complete"
                );
            }
            ProgressEvent::Failed { error } => {
                warn!(error = %error, "Run failed");
            }
        }
    }
}
