use anyhow::{Context as AnyhowContext, Result};
use relnote_core::{ConfigManager, PauseMode, RelnoteConfig};
use std::env;
use std::path::{Path, PathBuf};

/// Application context that gets passed to command handlers
///
/// Holds the resolved repository root and the merged configuration, so
/// command handlers never read environment or config files themselves.
pub struct Context {
    root: PathBuf,
    config: RelnoteConfig,
}

impl Context {
    /// Create new context from command-line overrides
    pub fn new(root: Option<PathBuf>, no_pause: bool) -> Result<Self> {
        // Determine root using precedence: CLI arg > environment > current directory
        let root = match root.or_else(|| env::var("RELNOTE_ROOT").ok().map(PathBuf::from)) {
            Some(root) => root,
            None => env::current_dir().context("Failed to determine current directory")?,
        };

        let mut config = ConfigManager::load_config(&root).with_context(|| {
            format!(
                "Failed to load {}",
                ConfigManager::config_path(&root).display()
            )
        })?;

        if no_pause {
            config.console.pause = PauseMode::Never;
        }

        tracing::debug!(root = %root.display(), "context ready");

        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &RelnoteConfig {
        &self.config
    }
}
