//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/branchnet/branchnet.toml`
//! 3. Local config: file passed via `--config`
//! 4. Environment variables: `BRANCHNET_*` prefix (`__` separates nested keys)
//!
//! CLI flags (`--seed`, `--trees`) are applied on top by the caller.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{BranchRange, DEFAULT_SEED};

/// Unified configuration for branchnet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of trees in the forest
    pub trees: usize,
    /// Generator seed
    pub seed: u32,
    /// Great branches per tree
    pub large_branches: BranchRange,
    /// Middle branches per great branch
    pub middle_branches: BranchRange,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trees: 5,
            seed: DEFAULT_SEED,
            large_branches: BranchRange { min: 3, max: 5 },
            middle_branches: BranchRange { min: 2, max: 3 },
        }
    }
}

/// Get the XDG config directory for branchnet.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "branchnet").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("branchnet.toml"))
}

/// Expand `~` and `$VAR` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings with layered precedence, including the global config file.
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), local)
    }

    /// Load settings from explicit global and local files.
    ///
    /// Missing global files are skipped; a missing local file is an error,
    /// since the user asked for it.
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = toml::to_string(&Self::default()).map_err(|e| ApplicationError::Config {
            message: format!("serialize defaults: {}", e),
        })?;
        let mut builder =
            Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).format(FileFormat::Toml));
            }
        }

        if let Some(local_path) = local {
            let local_path = expand_path(local_path);
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            debug!("local config: {}", local_path.display());
            builder = builder.add_source(File::from(local_path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("BRANCHNET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject ranges that cannot be drawn from.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.large_branches.validate()?;
        self.middle_branches.validate()?;
        Ok(())
    }

    /// Apply CLI overrides (explicit user input wins over every file).
    pub fn with_overrides(mut self, seed: Option<u32>, trees: Option<usize>) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(trees) = trees {
            self.trees = trees;
        }
        self
    }

    /// Serialize settings to TOML format.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize: {}", e),
        })
    }

    /// Generate a template config file with comments.
    pub fn template() -> String {
        r#"# branchnet configuration
# Global: ~/.config/branchnet/branchnet.toml

# Number of trees in the village
# trees = 5

# Generator seed; the same seed always grows the same forest
# seed = 1

# Great branches per tree (inclusive)
# [large_branches]
# min = 3
# max = 5

# Middle branches per great branch (inclusive)
# [middle_branches]
# min = 2
# max = 3
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
