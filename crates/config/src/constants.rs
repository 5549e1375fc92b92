//! Centralized constants for the confkit workspace.
//!
//! This module contains default values and format tables shared by the
//! loader, the resolver and the CLI.

// =============================================================================
// Lookup Defaults
// =============================================================================

/// Default path delimiter for dotted keys.
pub const DEFAULT_DELIMITER: char = '.';

// =============================================================================
// File Formats
// =============================================================================

/// File extension (lower-case, without the dot) handled by the JSON loader.
pub const JSON_EXTENSION: &str = "json";

/// File extension (lower-case, without the dot) handled by the INI loader.
pub const INI_EXTENSION: &str = "ini";

// =============================================================================
// INI Dialect
// =============================================================================

/// Unquoted INI literals normalized to `"1"`.
pub const INI_TRUE_LITERALS: &[&str] = &["true", "on", "yes"];

/// Unquoted INI literals normalized to the empty string.
pub const INI_FALSE_LITERALS: &[&str] = &["false", "off", "no", "none", "null"];

/// Characters that may not appear in an INI key.
pub const INI_RESERVED_KEY_CHARS: &[char] = &[
    '{', '}', '|', '&', '~', '!', '(', ')', '^', '"', '?',
];
