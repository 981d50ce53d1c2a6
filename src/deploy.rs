//! Version and message resolution for deployments.
//!
//! Pure defaulting logic separated from the invocation layer so it can be
//! tested without touching any external tool.

/// Version label used when no version argument is supplied.
pub const DEFAULT_VERSION: &str = "latest";

/// A resolved deployment request: which version to publish and the commit
/// message recorded alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployRequest {
    pub version: String,
    pub message: String,
}

impl DeployRequest {
    /// Resolve version and message from the positional arguments that follow
    /// the `deploy-version` token.
    ///
    /// The first argument is the version (default "latest"), the second the
    /// commit message (default "Deploy version {version}", built from the
    /// resolved version). Extra arguments are ignored.
    pub fn from_args(args: &[String]) -> Self {
        let version = args
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let message = args
            .get(1)
            .cloned()
            .unwrap_or_else(|| format!("Deploy version {}", version));

        DeployRequest { version, message }
    }
}
