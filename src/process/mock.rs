use super::{CommandOutput, CommandRunner, CommandSpec};
use anyhow::{anyhow, Result};
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum MockResponse {
    Output(CommandOutput),
    SpawnError(String),
}

/// Records every invocation and replies with a canned response
pub struct MockCommandRunner {
    response: MockResponse,
    invocations: Mutex<Vec<CommandSpec>>,
}

impl MockCommandRunner {
    fn with_response(response: MockResponse) -> Self {
        Self {
            response,
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::with_response(MockResponse::Output(CommandOutput {
            exit_code: Some(0),
            success: true,
            stdout: String::new(),
            stderr: String::new(),
        }))
    }

    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::with_response(MockResponse::Output(CommandOutput {
            exit_code: Some(exit_code),
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }))
    }

    /// Simulates a program missing from PATH
    pub fn unavailable() -> Self {
        Self::with_response(MockResponse::SpawnError(
            "No such file or directory (os error 2)".to_string(),
        ))
    }

    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.invocations.lock().unwrap().clone()
    }
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.invocations.lock().unwrap().push(spec.clone());

        match &self.response {
            MockResponse::Output(output) => Ok(output.clone()),
            MockResponse::SpawnError(message) => {
                Err(anyhow!("Failed to execute '{}': {}", spec, message))
            }
        }
    }
}
