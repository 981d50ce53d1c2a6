use std::sync::Mutex;

use crate::error::Result;
use crate::tools::{Invocation, ToolRunner};

/// Mock runner for testing without spawning real processes.
///
/// Records every invocation it receives and returns a fixed exit code.
pub struct MockRunner {
    invocations: Mutex<Vec<Invocation>>,
    exit_code: i32,
}

impl MockRunner {
    /// Create a mock runner that reports success for every invocation.
    pub fn new() -> Self {
        Self::with_exit_code(0)
    }

    /// Create a mock runner that reports the given exit code.
    pub fn with_exit_code(exit_code: i32) -> Self {
        MockRunner {
            invocations: Mutex::new(Vec::new()),
            exit_code,
        }
    }

    /// Snapshot of the invocations received so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().expect("invocation log poisoned").clone()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        self.invocations
            .lock()
            .expect("invocation log poisoned")
            .push(invocation.clone());
        Ok(self.exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_records_invocations() {
        let runner = MockRunner::new();

        runner
            .run(&Invocation::new("mkdocs").arg("serve"))
            .unwrap();
        runner
            .run(&Invocation::new("mkdocs").arg("build"))
            .unwrap();

        let recorded = runner.invocations();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].args, vec!["serve"]);
        assert_eq!(recorded[1].args, vec!["build"]);
    }

    #[test]
    fn test_mock_runner_exit_code() {
        let runner = MockRunner::with_exit_code(3);
        let code = runner.run(&Invocation::new("mike")).unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn test_mock_runner_default_succeeds() {
        let runner = MockRunner::default();
        let code = runner.run(&Invocation::new("mkdocs")).unwrap();
        assert_eq!(code, 0);
        assert_eq!(runner.invocations().len(), 1);
    }
}
