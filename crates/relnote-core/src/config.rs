// crates/relnote-core/src/config.rs - Configuration System
//
// All knobs that used to be ambient state (repository root layout, the
// automated committer identity, the pause behaviour) live here and are
// passed explicitly into the scaffolder.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--root, --no-pause, --debug)
// 2. Environment variables (RELNOTE_ROOT, RELNOTE_GIT, RELNOTE_PAUSE)
// 3. Root-specific config file (<root>/.relnote/config.toml)
// 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every section has serde defaults so a partial config file only needs to
/// name the values it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelnoteConfig {
    /// Folder names under the repository root
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Version-control query and the automated-commit heuristic
    #[serde(default)]
    pub vcs: VcsConfig,

    /// Interactive console behaviour
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Where templates, patch folders and legacy artifacts live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Directory under the root holding one folder per category
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Sub-directory of the target folder holding the legacy artifact
    #[serde(default = "default_release_dir")]
    pub release_dir: String,

    /// Appended to the identifier to name the legacy artifact
    #[serde(default = "default_legacy_suffix")]
    pub legacy_suffix: String,
}

/// Settings for the legacy-artifact history check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcsConfig {
    /// Executable used for the log query
    #[serde(default = "default_vcs_program")]
    pub program: String,

    /// Author name of the automated committer (exact match)
    #[serde(default = "default_automation_author")]
    pub automation_author: String,

    /// Commit-message phrases that mark an automated commit (substring match)
    #[serde(default = "default_automated_messages")]
    pub automated_messages: Vec<String>,
}

/// When to wait for a key press before exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// Pause only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for PauseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(PauseMode::Auto),
            "always" => Ok(PauseMode::Always),
            "never" => Ok(PauseMode::Never),
            other => Err(ConfigError::ValidationError(format!(
                "Invalid pause mode '{}'. Must be one of: auto, always, never",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub pause: PauseMode,
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Relative location of the config file under the root
    pub const CONFIG_FILE: &'static str = ".relnote/config.toml";

    /// Load configuration for the given repository root
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Replace with `<root>/.relnote/config.toml` if it exists
    /// 3. Apply environment variable overrides
    /// 4. Validate
    ///
    /// A missing config file is not an error. Command-line overrides are
    /// applied by the caller after loading.
    pub fn load_config(root: &Path) -> ConfigResult<RelnoteConfig> {
        let mut config = Self::try_load_root_config(root)?.unwrap_or_default();

        Self::apply_env_overrides(&mut config);
        Self::validate_config(&config)?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Path of the config file for a root
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(Self::CONFIG_FILE)
    }

    fn try_load_root_config(root: &Path) -> ConfigResult<Option<RelnoteConfig>> {
        let config_path = Self::config_path(root);

        if !config_path.exists() {
            return Ok(None);
        }

        let config_content = std::fs::read_to_string(&config_path)?;
        let config = Self::parse(&config_content, &config_path)?;

        Ok(Some(config))
    }

    /// Parse TOML text into a configuration, naming `origin` in errors
    pub fn parse(content: &str, origin: &Path) -> ConfigResult<RelnoteConfig> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: origin.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Environment overrides:
    /// - RELNOTE_GIT -> vcs.program
    /// - RELNOTE_PAUSE -> console.pause (ignored if unparseable)
    ///
    /// RELNOTE_ROOT is resolved by the CLI before the config file is located.
    fn apply_env_overrides(config: &mut RelnoteConfig) {
        use std::env;

        if let Ok(program) = env::var("RELNOTE_GIT") {
            config.vcs.program = program;
        }

        if let Ok(pause) = env::var("RELNOTE_PAUSE") {
            match pause.parse() {
                Ok(mode) => config.console.pause = mode,
                Err(e) => tracing::warn!("ignoring RELNOTE_PAUSE: {}", e),
            }
        }
    }

    /// Reject configurations that would make every run fail or misbehave
    pub fn validate_config(config: &RelnoteConfig) -> ConfigResult<()> {
        let required = [
            ("layout.templates_dir", &config.layout.templates_dir),
            ("layout.legacy_suffix", &config.layout.legacy_suffix),
            ("vcs.program", &config.vcs.program),
            ("vcs.automation_author", &config.vcs.automation_author),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{} cannot be empty",
                    key
                )));
            }
        }

        if config
            .vcs
            .automated_messages
            .iter()
            .all(|message| message.trim().is_empty())
        {
            return Err(ConfigError::ValidationError(
                "vcs.automated_messages must contain at least one non-empty phrase".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_templates_dir() -> String {
    "_Templates".to_string()
}
fn default_release_dir() -> String {
    "release".to_string()
}
fn default_legacy_suffix() -> String {
    "_readme.html".to_string()
}

fn default_vcs_program() -> String {
    "git".to_string()
}
fn default_automation_author() -> String {
    "Release Automation".to_string()
}
fn default_automated_messages() -> Vec<String> {
    vec![
        "Automated release note generation".to_string(),
        "Generated readme".to_string(),
    ]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            release_dir: default_release_dir(),
            legacy_suffix: default_legacy_suffix(),
        }
    }
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            program: default_vcs_program(),
            automation_author: default_automation_author(),
            automated_messages: default_automated_messages(),
        }
    }
}
