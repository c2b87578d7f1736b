//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmenter: SegmenterSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmenterSection {
    /// Default language for segmentation (auto, english, japanese)
    pub language: String,

    /// Drop sentences shorter than this many characters (0 keeps all)
    pub min_chars: usize,
}

impl Default for SegmenterSection {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            min_chars: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputSection {
    /// Default output format (text, json, markdown)
    pub default_format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }
}
