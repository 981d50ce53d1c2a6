//! External tool invocation boundary.
//!
//! This module provides a trait-based abstraction over subprocess execution,
//! allowing for multiple implementations including a real process runner and
//! a mock implementation for testing.
//!
//! The primary abstraction is the [ToolRunner] trait paired with the
//! [Invocation] value type. Concrete implementations:
//!
//! - [process::ProcessRunner]: spawns real child processes via `std::process`
//! - [mock::MockRunner]: records invocations for testing
//!
//! Most code should depend on the [ToolRunner] trait rather than concrete
//! implementations to enable easy testing.

pub mod mock;
pub mod process;

pub use mock::MockRunner;
pub use process::ProcessRunner;

use std::fmt;

use crate::error::Result;

/// Description of one external call: program, ordered arguments, and
/// environment entries added on top of the inherited environment.
///
/// The environment additions apply to the child only; the parent process
/// environment is never mutated. An invocation is immutable once handed to a
/// runner.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl Invocation {
    /// Create an invocation of the given program with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add an environment entry visible to the child only.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value)?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Common runner trait for external tool invocations.
///
/// Implementors must be `Send + Sync`. A runner executes the invocation to
/// completion and reports the child's exit code; it does not interpret a
/// non-zero code as an error. Errors are reserved for failures to run the
/// tool at all (e.g. executable not found).
pub trait ToolRunner: Send + Sync {
    /// Run the invocation to completion and return the child's exit code.
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}
