//! Path delimiter for dotted keys.
//!
//! Responsibilities:
//! - Validate that a delimiter is exactly one character.
//! - Split keys into path segments.
//!
//! Invariants:
//! - A `Delimiter` always holds exactly one Unicode scalar value.

use std::fmt;

use crate::constants::DEFAULT_DELIMITER;
use crate::loader::ConfigError;

/// Single-character separator between path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(char);

impl Delimiter {
    /// Validate a delimiter string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDelimiter` when `raw` is empty or holds
    /// more than one character.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(ConfigError::InvalidDelimiter(raw.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Split `key` into segments. An empty key yields one empty segment.
    pub fn split(self, key: &str) -> std::str::Split<'_, char> {
        key.split(self.0)
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER)
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = ConfigError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
