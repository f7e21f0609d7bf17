//! Configuration for embedding applications
//!
//! Stored as TOML, conventionally in `dirgraph.toml`:
//!
//! ```toml
//! format = "json"
//! log_level = "debug"
//!
//! [build]
//! max_depth = 8
//! detect_cycles = true
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DirGraphError, Result};
use crate::format::OutputFormat;
use crate::graph::BuildOptions;

/// Conventional config file name
pub const CONFIG_FILE: &str = "dirgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Default rendering format
    #[serde(default)]
    pub format: OutputFormat,

    /// Log level or filter directive, see `logging::init_tracing`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Traversal options used by the builder
    #[serde(default)]
    pub build: BuildOptions,
}

impl GraphConfig {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| DirGraphError::io_operation("read config", path.display(), e))?;

        toml::from_str(&content).map_err(|e| DirGraphError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load `dirgraph.toml` from `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load(&dir.join(CONFIG_FILE))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DirGraphError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| DirGraphError::io_operation("write config", path.display(), e))
    }
}
