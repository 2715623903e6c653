//! Writer settings supplied by the surrounding pipeline.
//!
//! Settings can be filled in directly or loaded from a TOML file:
//!
//! ```toml
//! # writer.toml
//! write_pthat = 1
//! final_state_writer_header_version = 3
//! ```

use std::path::Path;

use serde::Deserialize;

use super::error::WriterError;

/// Per-event header version used when none is configured.
pub const DEFAULT_HEADER_VERSION: u32 = 2;

/// Configuration for the final-state writer.
///
/// Absent keys read as 0, matching the upstream configuration subsystem
/// where a missing integer element yields 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriterConfig {
    /// Nonzero to append the per-event `pt_hat` field. Consulted on every
    /// event write, never cached at init.
    #[serde(default)]
    pub write_pthat: i64,

    /// Per-event header version, >= 2 when meaningful. 0 reads as
    /// "unconfigured" and keeps the default (see
    /// [`WriterConfig::resolved_header_version`]).
    #[serde(default)]
    pub final_state_writer_header_version: i64,
}

impl WriterConfig {
    /// Load settings from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, WriterError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, WriterError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the per-event header version.
    ///
    /// A configured value overwrites the default only when it is nonzero, so
    /// a configured 0 is indistinguishable from an absent key and keeps the
    /// default of 2. The check is on the value, not on key presence.
    pub fn resolved_header_version(&self) -> u32 {
        if self.final_state_writer_header_version != 0 {
            self.final_state_writer_header_version as u32
        } else {
            DEFAULT_HEADER_VERSION
        }
    }

    /// Whether `pt_hat` is recorded in event headers.
    pub fn writes_pthat(&self) -> bool {
        self.write_pthat != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            write_pthat = 1
            final_state_writer_header_version = 3
        "#;

        let config = WriterConfig::from_toml_str(toml).unwrap();
        assert!(config.writes_pthat());
        assert_eq!(config.resolved_header_version(), 3);
    }

    #[test]
    fn test_partial_config() {
        let config = WriterConfig::from_toml_str("write_pthat = 1").unwrap();
        assert!(config.writes_pthat());
        assert_eq!(config.final_state_writer_header_version, 0);
        assert_eq!(config.resolved_header_version(), DEFAULT_HEADER_VERSION);
    }

    #[test]
    fn test_empty_config() {
        let config = WriterConfig::from_toml_str("").unwrap();
        assert!(!config.writes_pthat());
        assert_eq!(config.resolved_header_version(), DEFAULT_HEADER_VERSION);
    }

    #[test]
    fn test_configured_zero_keeps_default() {
        // 0 is indistinguishable from an absent key; the default wins.
        let config =
            WriterConfig::from_toml_str("final_state_writer_header_version = 0").unwrap();
        assert_eq!(config.resolved_header_version(), DEFAULT_HEADER_VERSION);
    }
}
