//! Supported file formats and extension dispatch.
//!
//! Responsibilities:
//! - Map a file extension (case-insensitive) to a closed set of formats.
//! - Dispatch raw bytes to the matching parser.
//!
//! Invariants:
//! - `UnsupportedFormat` carries the upper-cased extension (`TXT`, or empty when missing).

use std::fmt;
use std::path::Path;

use super::error::ConfigError;
use super::{ini, json};
use crate::constants::{INI_EXTENSION, JSON_EXTENSION};
use crate::value::Mapping;

/// A configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Ini,
}

impl Format {
    /// Resolve a format from a bare extension such as `json` or `INI`.
    pub fn from_extension(extension: &str) -> Result<Self, ConfigError> {
        match extension.to_ascii_lowercase().as_str() {
            JSON_EXTENSION => Ok(Format::Json),
            INI_EXTENSION => Ok(Format::Ini),
            _ => Err(ConfigError::UnsupportedFormat(extension.to_uppercase())),
        }
    }

    /// Resolve a format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }

    /// Upper-case format name.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Ini => "INI",
        }
    }

    /// Parse raw file content. `path` is only used for error context.
    pub fn parse(self, path: &Path, content: &[u8]) -> Result<Mapping, ConfigError> {
        match self {
            Format::Json => json::parse(content).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            }),
            Format::Ini => {
                let text = std::str::from_utf8(content).map_err(|e| {
                    let line = content[..e.valid_up_to()]
                        .iter()
                        .filter(|b| **b == b'\n')
                        .count()
                        + 1;
                    ConfigError::ini(
                        path,
                        ini::IniSyntaxError {
                            line,
                            message: "invalid UTF-8".to_string(),
                        },
                    )
                })?;
                ini::parse(text).map_err(|e| ConfigError::ini(path, e))
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::ConfigErrorKind;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(Format::from_extension("json").unwrap(), Format::Json);
        assert_eq!(Format::from_extension("JSON").unwrap(), Format::Json);
        assert_eq!(Format::from_extension("Ini").unwrap(), Format::Ini);
    }

    #[test]
    fn test_unsupported_extension_is_upper_cased() {
        let err = Format::from_path(Path::new("data/config.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref f) if f == "TXT"));
    }

    #[test]
    fn test_missing_extension() {
        let err = Format::from_path(Path::new("config")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref f) if f.is_empty()));
    }

    #[test]
    fn test_parse_errors_are_typed_per_format() {
        let path = Path::new("bad");
        let err = Format::Json.parse(path, b"{").unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::JsonParse);

        let err = Format::Ini.parse(path, b"[open").unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::IniParse);
    }

    #[test]
    fn test_invalid_utf8_ini_reports_line() {
        let err = Format::Ini
            .parse(Path::new("x.ini"), b"a = 1\nb = \xff\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::IniParse { line: 2, .. }));
    }
}
