//! The four dispatcher actions and their external invocations.
//!
//! Each action builds an [Invocation] from the configuration and hands it to
//! a [ToolRunner]. Invocation construction is split out into plain functions
//! so the exact argument vectors can be tested without running anything.

use crate::config::Config;
use crate::deploy::DeployRequest;
use crate::error::Result;
use crate::tools::{Invocation, ToolRunner};

/// Environment flag the documentation generator reads to enable PDF export.
pub const ENABLE_PDF_EXPORT: &str = "ENABLE_PDF_EXPORT";

/// The closed set of dispatchable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Serve,
    Build,
    BuildPdf,
    DeployVersion,
}

impl Action {
    /// Valid command tokens, in display order.
    pub const NAMES: [&'static str; 4] = ["serve", "build", "build-pdf", "deploy-version"];

    /// Match a command-line token against the known actions. Case-sensitive.
    pub fn from_token(token: &str) -> Option<Action> {
        match token {
            "serve" => Some(Action::Serve),
            "build" => Some(Action::Build),
            "build-pdf" => Some(Action::BuildPdf),
            "deploy-version" => Some(Action::DeployVersion),
            _ => None,
        }
    }

    /// Get the action's command token as a string
    pub fn name(&self) -> &'static str {
        match self {
            Action::Serve => "serve",
            Action::Build => "build",
            Action::BuildPdf => "build-pdf",
            Action::DeployVersion => "deploy-version",
        }
    }
}

/// Serve the documentation locally.
///
/// Blocks until the server process exits.
pub fn serve<R: ToolRunner>(runner: &R, config: &Config) -> Result<i32> {
    runner.run(&serve_invocation(config))
}

/// Build the static documentation output.
pub fn build<R: ToolRunner>(runner: &R, config: &Config) -> Result<i32> {
    runner.run(&build_invocation(config))
}

/// Build the documentation with PDF export enabled.
///
/// Only the child process sees the export flag; the dispatcher's own
/// environment is left untouched.
pub fn build_pdf<R: ToolRunner>(runner: &R, config: &Config) -> Result<i32> {
    runner.run(&build_pdf_invocation(config))
}

/// Deploy a tagged version of the documentation.
///
/// Prints the resolved version and message before invoking the deployment
/// tool, which publishes the version and repoints the alias.
pub fn deploy_version<R: ToolRunner>(
    runner: &R,
    config: &Config,
    request: &DeployRequest,
) -> Result<i32> {
    println!("Deploying documentation version: {}", request.version);
    println!("Commit message: {}", request.message);

    runner.run(&deploy_invocation(config, request))
}

pub fn serve_invocation(config: &Config) -> Invocation {
    Invocation::new(&config.tools.mkdocs).arg("serve")
}

pub fn build_invocation(config: &Config) -> Invocation {
    Invocation::new(&config.tools.mkdocs).arg("build")
}

pub fn build_pdf_invocation(config: &Config) -> Invocation {
    build_invocation(config).env(ENABLE_PDF_EXPORT, "1")
}

pub fn deploy_invocation(config: &Config, request: &DeployRequest) -> Invocation {
    let mut invocation = Invocation::new(&config.tools.mike).arg("deploy");

    if config.deploy.push {
        invocation = invocation.arg("--push");
    }
    if config.deploy.update_aliases {
        invocation = invocation.arg("--update-aliases");
    }

    invocation
        .arg(&request.version)
        .arg(&config.deploy.alias)
        .arg("-m")
        .arg(&request.message)
}
