//! Seed data for the in-memory store
//!
//! A TOML document mapping lookup keys to question-id lists, and identity
//! keys to score points:
//!
//! ```toml
//! [subjects]
//! pslemath = ["q1", "q2", "q3"]
//! "a-levelh2physics" = ["p1", "p2"]
//!
//! [scores]
//! "student@example.com" = 120
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors loading a seed data file
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Deserialized seed data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    /// Lookup key -> question identifiers
    pub subjects: HashMap<String, Vec<String>>,
    /// Identity key (email) -> score points
    pub scores: HashMap<String, i64>,
}

impl SeedData {
    pub fn from_toml_str(raw: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[subjects]
pslemath = ["q1", "q2"]
"a-levelh2physics" = ["p1"]

[scores]
"a@example.com" = 120
"#;

    #[test]
    fn test_parse_sample() {
        let seed = SeedData::from_toml_str(SAMPLE).unwrap();
        assert_eq!(seed.subjects["pslemath"], vec!["q1", "q2"]);
        assert_eq!(seed.subjects["a-levelh2physics"], vec!["p1"]);
        assert_eq!(seed.scores["a@example.com"], 120);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let seed = SeedData::from_toml_str("").unwrap();
        assert!(seed.subjects.is_empty());
        assert!(seed.scores.is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(SeedData::from_toml_str("subjects = 3").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.subjects.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let error = SeedData::load(Path::new("/nonexistent/seed.toml")).unwrap_err();
        assert!(matches!(error, SeedError::Io(_)));
    }
}
