//! Configuration loading for resumerank.
//! Reads resumerank.toml from the current directory or path in RESUMERANK_CONFIG env var.

use anyhow::Context;
use resumerank_ranker::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};


const DEFAULT_CONFIG_FILE: &str = "resumerank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Shape of the JSON written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `[["id", score], ...]`
    Pairs,
    /// `[{"rank": 1, "id": "...", "score": ...}, ...]`
    Entries,
    /// Full run report with per-feature breakdown
    Report,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    /// Number of top results to emit (0 = all)
    #[serde(default)]
    pub top_n: usize,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_format() -> OutputFormat { OutputFormat::Pairs }
fn default_pretty() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            top_n: 0,
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Path from RESUMERANK_CONFIG, falling back to ./resumerank.toml
    pub fn path() -> PathBuf {
        std::env::var_os("RESUMERANK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// `Ok(None)` when no config file exists; a file that exists must parse
    /// and validate.
    pub fn load() -> anyhow::Result<Option<Self>> {
        Self::load_optional(&Self::path())
    }

    pub fn load_optional(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.scoring.validate()?;
        Ok(config)
    }
}
