use super::{CommandOutput, CommandRunner, CommandSpec};
use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Spawns real processes via `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        debug!(
            command = %spec,
            cwd = %spec.working_dir.display(),
            "Spawning process"
        );

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.working_dir)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute '{}'", spec))?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
