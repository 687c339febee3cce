//! Lexer configuration.
//!
//! The defaults are what a compiler driver wants in almost every case; the
//! settings exist for embedding the lexer behind slow pipes or untrusted
//! input. Configurations can be written in TOML:
//!
//! ```toml
//! buffer_capacity = 4096
//! skip_bom = true
//! max_literal_len = 65536
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default size of the read buffer in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Settings for a [`Lexer`](crate::Lexer).
///
/// # Examples
///
/// ```
/// use statelang_lex::LexerConfig;
///
/// let config = LexerConfig {
///     max_literal_len: Some(256),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Size of the read buffer placed in front of the source, in bytes.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,

    /// Skip a UTF-8 byte order mark at the very start of the stream.
    #[serde(default = "default_true")]
    pub skip_bom: bool,

    /// Upper bound on the length of string literals, identifiers and number
    /// literals, in characters. `None` means unbounded.
    #[serde(default)]
    pub max_literal_len: Option<usize>,
}

fn default_buffer_capacity() -> usize {
    DEFAULT_BUFFER_CAPACITY
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
            skip_bom: true,
            max_literal_len: None,
        }
    }
}

impl LexerConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: LexerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.buffer_capacity == 0 {
            return Err(ConfigError::Invalid(
                "buffer_capacity must be non-zero".to_string(),
            ));
        }
        if self.max_literal_len == Some(0) {
            return Err(ConfigError::Invalid(
                "max_literal_len must be non-zero when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
        assert!(config.skip_bom);
        assert_eq!(config.max_literal_len, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = LexerConfig::from_toml_str("").unwrap();
        assert_eq!(config, LexerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = LexerConfig::from_toml_str("max_literal_len = 32\nskip_bom = false").unwrap();
        assert_eq!(config.max_literal_len, Some(32));
        assert!(!config.skip_bom);
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let err = LexerConfig::from_toml_str("buffer_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_literal_limit_rejected() {
        let err = LexerConfig::from_toml_str("max_literal_len = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = LexerConfig::from_toml_str("buffer_capacity = \"large\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = LexerConfig {
            buffer_capacity: 512,
            skip_bom: false,
            max_literal_len: Some(10),
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(LexerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "buffer_capacity = 128").unwrap();
        let config = LexerConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.buffer_capacity, 128);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexerConfig::load_from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
