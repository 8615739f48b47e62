//! Configuration structures for line conversion.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NumWordsError, Result};

/// Main configuration for numwords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumWordsConfig {
    /// Input handling.
    pub input: InputConfig,

    /// Output formatting.
    pub output: OutputConfig,

    /// Batch processing.
    pub batch: BatchConfig,
}

/// Input line handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Input file used by `batch` when no pattern is given.
    pub default_path: PathBuf,

    /// Drop blank lines instead of reporting them as invalid.
    pub skip_blank_lines: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("fixtures/input.txt"),
            skip_blank_lines: false,
        }
    }
}

/// Output formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,

    /// Prefix each text result with its input line.
    pub include_input: bool,
}

/// Batch processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Keep going when an input file cannot be read.
    pub continue_on_error: bool,
}

/// Output format for conversion results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Text,
    /// JSON array of conversion records
    Json,
    /// CSV with a header row
    Csv,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = NumWordsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(NumWordsError::Config(format!(
                "unknown output format: {other} (expected text, json or csv)"
            ))),
        }
    }
}

impl NumWordsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| NumWordsError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
