use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for docs-publish.
///
/// Contains the external tool executables and deployment behavior switches.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub deploy: DeployConfig,
}

/// Returns the default documentation generator executable.
fn default_mkdocs() -> String {
    "mkdocs".to_string()
}

/// Returns the default versioned-deployment executable.
fn default_mike() -> String {
    "mike".to_string()
}

/// Returns the default alias label updated on deploy.
fn default_alias() -> String {
    "latest".to_string()
}

fn default_true() -> bool {
    true
}

/// External tool executables.
///
/// Both tools are resolved through PATH unless an absolute path is configured.
/// No existence check is performed before invocation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default = "default_mkdocs")]
    pub mkdocs: String,

    #[serde(default = "default_mike")]
    pub mike: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            mkdocs: default_mkdocs(),
            mike: default_mike(),
        }
    }
}

/// Deployment behavior switches.
///
/// Defaults reproduce the standard deploy invocation: push to the remote and
/// repoint the "latest" alias in the same run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeployConfig {
    #[serde(default = "default_alias")]
    pub alias: String,

    #[serde(default = "default_true")]
    pub push: bool,

    #[serde(default = "default_true")]
    pub update_aliases: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        DeployConfig {
            alias: default_alias(),
            push: true,
            update_aliases: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tools: ToolsConfig::default(),
            deploy: DeployConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docspublish.toml` in current directory
/// 3. `~/.config/.docspublish.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./docspublish.toml").exists() {
        fs::read_to_string("./docspublish.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".docspublish.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
