//! TOML configuration for the `folio` binary.
//!
//! Every section is optional; a missing file yields the defaults, so
//! the binary runs out of the box against the embedded sample
//! catalog.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use folio_core::session::{DEFAULT_CONTEXT_CAP, DEFAULT_HISTORY_CAP};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub engine: EngineConfig,
    pub speech: SpeechConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file. Unset means the embedded sample.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Capacity of the conversation-context ring.
    #[serde(default = "default_context_cap")]
    pub context_cap: usize,
    /// Capacity of the command-history ring.
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

fn default_context_cap() -> usize {
    DEFAULT_CONTEXT_CAP
}
fn default_history_cap() -> usize {
    DEFAULT_HISTORY_CAP
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            context_cap: default_context_cap(),
            history_cap: default_history_cap(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpeechConfig {
    /// Locale tag forwarded unchanged to the speech capabilities.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Speak every response aloud in `ask`/`chat`.
    #[serde(default)]
    pub auto_speak: bool,
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            auto_speak: false,
        }
    }
}

/// Load the configuration, falling back to defaults when the file
/// does not exist.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}
