//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; the CLI flags override them.

use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Surface an empty question set as a visible message instead of the
    /// historical silent no-op
    pub surface_empty_sets: bool,
}

/// Raw identity configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIdentityConfig {
    /// Signed-in email; absent means signed out
    pub email: Option<String>,
}

/// Raw data source configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Path to the seed data file for the in-memory store
    pub seed_file: Option<String>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub behavior: FileBehaviorConfig,
    pub identity: FileIdentityConfig,
    pub data: FileDataConfig,
    pub output: FileOutputConfig,
}
