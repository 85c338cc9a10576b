//! Configuration
//!
//! Layered settings loaded with the `config` crate. Precedence, lowest to
//! highest: built-in defaults, global file
//! (`$XDG_CONFIG_HOME/cessa-vault/config.toml`), workspace file
//! (`<workspace>/vault.toml`), then `VAULT__SECTION__KEY` environment
//! variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use crate::tree::RootLocator;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the material tree lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Fixed data root. When unset the root is discovered from the working
    /// directory on every scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl DataConfig {
    pub fn locator(&self) -> RootLocator {
        match &self.root {
            Some(root) => RootLocator::Fixed(root.clone()),
            None => RootLocator::Discover,
        }
    }
}
