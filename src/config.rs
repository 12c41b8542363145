// ⚙️ Parse Configuration
// Where the data section starts and which language catalog to match against

use crate::languages::LanguageCatalog;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn default_data_marker() -> String {
    "5. THE DATA".to_string()
}

fn default_skip_after_marker() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DyenConfig {
    /// Exact line (without line ending) that opens the data section
    #[serde(default = "default_data_marker")]
    pub data_marker: String,

    /// Lines discarded right after the marker
    #[serde(default = "default_skip_after_marker")]
    pub skip_after_marker: usize,

    /// JSON array of language names replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for DyenConfig {
    fn default() -> Self {
        Self {
            data_marker: default_data_marker(),
            skip_after_marker: default_skip_after_marker(),
            catalog_path: None,
        }
    }
}

impl DyenConfig {
    /// Defaults overridden by DYEN_DATA_MARKER, DYEN_SKIP_AFTER_MARKER
    /// and DYEN_CATALOG_PATH
    pub fn from_env() -> Self {
        let data_marker = env::var("DYEN_DATA_MARKER").unwrap_or_else(|_| default_data_marker());

        let skip_after_marker = env::var("DYEN_SKIP_AFTER_MARKER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_skip_after_marker);

        let catalog_path = env::var("DYEN_CATALOG_PATH").ok().map(PathBuf::from);

        DyenConfig {
            data_marker,
            skip_after_marker,
            catalog_path,
        }
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Built-in Dyen catalog, or the override at `catalog_path`
    pub fn load_catalog(&self) -> Result<LanguageCatalog> {
        match &self.catalog_path {
            Some(path) => LanguageCatalog::from_file(path),
            None => Ok(LanguageCatalog::dyen()),
        }
    }
}
