//! User configuration feeding the live lists.
//!
//! Hosts that keep their own settings implement [`SymbolConfig`]; the CLI
//! reads a [`ConfigFile`] from disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Source of the favorites and custom kaomojis.
pub trait SymbolConfig {
    /// Favorite symbols as one string, one code point per favorite.
    fn favorite_symbols(&self) -> &str;

    /// Custom kaomojis in display order.
    fn custom_kaomojis(&self) -> &[String];
}

/// JSON settings file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub favorite_symbols: String,
    #[serde(default)]
    pub custom_kaomojis: Vec<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parsing config {}", path.display()))
    }
}

impl SymbolConfig for ConfigFile {
    fn favorite_symbols(&self) -> &str {
        &self.favorite_symbols
    }

    fn custom_kaomojis(&self) -> &[String] {
        &self.custom_kaomojis
    }
}
