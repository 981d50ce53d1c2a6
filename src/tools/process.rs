use std::process::Command;

use crate::error::{DocsPublishError, Result};
use crate::tools::{Invocation, ToolRunner};

/// Runs invocations as real child processes.
///
/// The child inherits stdio, so the external tool streams directly to the
/// user's terminal, and the call blocks until the child exits. Environment
/// additions from the invocation are set on the child only; the parent
/// environment is left untouched.
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        ProcessRunner
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        let status = cmd.status().map_err(|e| {
            DocsPublishError::tool(format!("Failed to execute {}: {}", invocation.program, e))
        })?;

        // Termination by signal carries no code; report it as a plain failure.
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_fails() {
        let runner = ProcessRunner::new();
        let invocation = Invocation::new("/nonexistent/path/to/tool").arg("serve");

        let result = runner.run(&invocation);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to execute"));
    }
}
