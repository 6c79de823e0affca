//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigError, ConfigWarning};
use crate::domain::value_objects::RecordKind;

/// Where the camp and victim files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the data files (default: working directory)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_camps_file")]
    pub camps_file: String,

    #[serde(default = "default_victims_file")]
    pub victims_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            camps_file: default_camps_file(),
            victims_file: default_victims_file(),
        }
    }
}

fn default_camps_file() -> String {
    RecordKind::Camps.default_file_name().to_string()
}

fn default_victims_file() -> String {
    RecordKind::Victims.default_file_name().to_string()
}

impl StorageConfig {
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or(Path::new("."))
    }

    pub fn camps_path(&self) -> PathBuf {
        self.data_dir().join(&self.camps_file)
    }

    pub fn victims_path(&self) -> PathBuf {
        self.data_dir().join(&self.victims_file)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `warn` or `reliefdesk=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Output format for listings and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable tables
    #[default]
    Table,
    /// JSON for scripting
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect warnings for unknown keys
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }
}
