//! @ai:module:intent Configuration for the docfields CLI, loaded from TOML
//! @ai:module:layer infrastructure
//! @ai:module:public_api DocfieldsConfig, CheckConfig, DEFAULT_CONFIG_FILE
//! @ai:module:depends_on dialect, docstring, error
//! @ai:module:stateless true

use crate::dialect::Dialect;
use crate::docstring::ParseOptions;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "docfields.toml";

/// @ai:intent Main configuration for parsing and checking docstrings
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocfieldsConfig {
    #[serde(default)]
    pub dialect: Dialect,
    #[serde(default = "default_true")]
    pub warn_unknown_params: bool,
    #[serde(default)]
    pub check: CheckConfig,
}

/// @ai:intent Settings for the directory checker
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub deny_warnings: bool,
}

impl Default for DocfieldsConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            warn_unknown_params: true,
            check: CheckConfig::default(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            deny_warnings: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "rst".to_string()]
}

impl DocfieldsConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// @ai:intent Load an explicit config, else ./docfields.toml when present, else defaults
    /// @ai:effects fs:read
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!("using {}", fallback.display());
            Self::load(fallback)
        } else {
            Ok(Self::default())
        }
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            warn_unknown_params: self.warn_unknown_params,
        }
    }
}

impl CheckConfig {
    /// @ai:intent Check whether a file should be parsed by the checker
    /// @ai:effects pure
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}
