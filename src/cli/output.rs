//! Run report formatting for JSON, YAML and human-readable output

use anyhow::{Context, Result};

use crate::pipeline::{BuildOutcome, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize run report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize run report to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &RunReport) -> String {
        let mut output = String::new();

        if report.failed_builds() == 0 {
            output.push_str("\u{2713} Info directories processed\n");
        } else {
            output.push_str("\u{26A0} Info directories processed (some builds failed)\n");
        }
        output.push_str(&"\u{2501}".repeat(42));
        output.push_str("\n\n");

        output.push_str(&format!("Source:    {}\n", report.source_root.display()));
        output.push_str(&format!("Target:    {}\n", report.target_root.display()));
        output.push_str(&format!("Metadata:  {}\n\n", report.metadata_path.display()));

        if report.processed.is_empty() {
            output.push_str("No info directories found.\n");
            return output;
        }

        output.push_str(&format!("Directories ({}):\n", report.processed.len()));
        for (i, item) in report.processed.iter().enumerate() {
            let is_last = i == report.processed.len() - 1;
            let connector = if is_last { "\u{2514}" } else { "\u{251C}" };
            let file = item
                .build
                .file()
                .map(|f| format!(" ({})", f))
                .unwrap_or_default();
            output.push_str(&format!(
                "{}\u{2500} {}  build: {}{}\n",
                connector,
                item.name,
                item.build.label(),
                file
            ));

            let detail = match &item.build {
                BuildOutcome::Failed { stderr, .. } => stderr.trim(),
                BuildOutcome::SpawnFailed { error, .. } => error.trim(),
                _ => "",
            };
            if !detail.is_empty() {
                let indent = if is_last { "   " } else { "\u{2502}  " };
                for line in detail.lines() {
                    output.push_str(&format!("{}{}\n", indent, line));
                }
            }
        }

        output
    }
}
