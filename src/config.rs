// ⚙️ Settings for the CLI and server binaries
// Resolution: defaults → optional JSON file → EXPENSE_CATEGORIZER_* environment variables

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::keywords::KeywordDictionary;

pub const DEFAULT_CONFIG_FILE: &str = "categorizer.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5003";
pub const DEFAULT_LOG_FILTER: &str = "expense_categorizer=info";

const ENV_ADDR: &str = "EXPENSE_CATEGORIZER_ADDR";
const ENV_DICTIONARY: &str = "EXPENSE_CATEGORIZER_DICTIONARY";
const ENV_LOG: &str = "EXPENSE_CATEGORIZER_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Replacement keyword dictionary (JSON). `None` = built-in table.
    pub dictionary_path: Option<PathBuf>,

    /// tracing-subscriber EnvFilter directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            dictionary_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Load from `categorizer.json` in the working directory (if present), then env overrides
    pub fn load() -> Result<Self> {
        let mut settings = Self::from_file_or_default(DEFAULT_CONFIG_FILE)?;
        settings.apply_overrides(|key| env::var(key).ok());
        Ok(settings)
    }

    /// Read a settings file; a missing file yields defaults
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))
    }

    /// Apply overrides from a key lookup (the environment, in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_ADDR).filter(|v| !v.trim().is_empty()) {
            self.bind_addr = addr;
        }
        if let Some(path) = lookup(ENV_DICTIONARY).filter(|v| !v.trim().is_empty()) {
            self.dictionary_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter;
        }
    }

    /// The configured dictionary, or a copy of the built-in one
    pub fn dictionary(&self) -> Result<KeywordDictionary> {
        match &self.dictionary_path {
            Some(path) => KeywordDictionary::from_file(path),
            None => Ok(KeywordDictionary::builtin().clone()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
