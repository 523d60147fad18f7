//! Translator configuration (`sqlpred.toml`).
//!
//! ```toml
//! dialect = "sqlserver"
//! parameters = "non_numeric"
//! max_depth = 128
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TranslateError, TranslateResult};
use crate::transpiler::{DEFAULT_MAX_DEPTH, Dialect, ParameterPolicy};

/// Project-local config file name.
pub const CONFIG_FILE: &str = "sqlpred.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub dialect: Dialect,
    pub parameters: ParameterPolicy,
    pub max_depth: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            parameters: ParameterPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TranslatorConfig {
    pub fn from_toml(content: &str) -> TranslateResult<Self> {
        let config: TranslatorConfig =
            toml::from_str(content).map_err(|e| TranslateError::Config(e.to_string()))?;
        if config.max_depth == 0 {
            return Err(TranslateError::Config("max_depth must be positive".to_string()));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> TranslateResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Candidate locations, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlpred").join("config.toml"));
        }
        paths
    }

    /// The first config found on the search path, or the defaults.
    pub fn load_default() -> TranslateResult<Self> {
        for path in Self::search_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }
}
