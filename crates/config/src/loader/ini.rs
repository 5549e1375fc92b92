//! Section-aware INI parser.
//!
//! Responsibilities:
//! - Parse INI text into a `Mapping` where `[section]` headers open nested mappings.
//! - Support `key[] = v` (sequence append) and `key[sub] = v` (nested mapping entry).
//! - Normalize unquoted boolean-like literals to `"1"` / `""`.
//!
//! Does NOT handle:
//! - Reading files or attaching paths to errors (see `loader/mod.rs`).
//! - Type coercion. Every scalar is a `ConfigValue::String`.
//!
//! Invariants:
//! - Every failure is reported as an `IniSyntaxError` with a 1-based line number.
//! - A document without a single entry or section is a syntax error.
//! - Keys outside any section are top-level; a section with the same name replaces them.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::constants::{INI_FALSE_LITERALS, INI_RESERVED_KEY_CHARS, INI_TRUE_LITERALS};
use crate::value::{ConfigValue, Mapping};

/// A syntax error found while parsing INI text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct IniSyntaxError {
    pub line: usize,
    pub message: String,
}

impl IniSyntaxError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Key with an optional bracket suffix.
#[derive(Debug, PartialEq, Eq)]
struct IniKey {
    name: String,
    index: Option<IniIndex>,
}

#[derive(Debug, PartialEq, Eq)]
enum IniIndex {
    /// `key[]`
    Append,
    /// `key[sub]`
    Key(String),
}

/// Parse INI text into a mapping.
pub fn parse(content: &str) -> Result<Mapping, IniSyntaxError> {
    let mut globals = Mapping::new();
    let mut sections: BTreeMap<String, Mapping> = BTreeMap::new();
    let mut current: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = parse_section_header(rest, line_no)?;
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let (raw_key, raw_value) = line
            .split_once('=')
            .ok_or_else(|| IniSyntaxError::new(line_no, "expected '=' after key"))?;
        let key = parse_key(raw_key, line_no)?;
        let value = parse_value(raw_value, line_no)?;

        let target = match &current {
            Some(name) => sections.entry(name.clone()).or_default(),
            None => &mut globals,
        };
        insert_entry(target, key, value);
    }

    let mut root = globals;
    for (name, section) in sections {
        root.insert(name, ConfigValue::Mapping(section));
    }

    if root.is_empty() {
        return Err(IniSyntaxError::new(1, "document contains no entries"));
    }
    Ok(root)
}

/// Parse the remainder of a `[section]` line (after the opening bracket).
fn parse_section_header(rest: &str, line: usize) -> Result<String, IniSyntaxError> {
    let close = rest
        .find(']')
        .ok_or_else(|| IniSyntaxError::new(line, "unterminated section header"))?;

    let trailing = rest[close + 1..].trim();
    if !trailing.is_empty() && !trailing.starts_with(';') && !trailing.starts_with('#') {
        return Err(IniSyntaxError::new(
            line,
            "unexpected text after section header",
        ));
    }

    let name = rest[..close].trim();
    if name.is_empty() {
        return Err(IniSyntaxError::new(line, "empty section name"));
    }
    Ok(name.to_string())
}

fn parse_key(raw: &str, line: usize) -> Result<IniKey, IniSyntaxError> {
    let raw = raw.trim();

    let (name, index) = match raw.strip_suffix(']') {
        Some(head) => {
            let open = head
                .find('[')
                .ok_or_else(|| IniSyntaxError::new(line, "unmatched ']' in key"))?;
            let inner = head[open + 1..].trim();
            let index = if inner.is_empty() {
                IniIndex::Append
            } else {
                validate_key_text(inner, line)?;
                IniIndex::Key(inner.to_string())
            };
            (head[..open].trim(), Some(index))
        }
        None => (raw, None),
    };

    if name.is_empty() {
        return Err(IniSyntaxError::new(line, "empty key"));
    }
    validate_key_text(name, line)?;

    Ok(IniKey {
        name: name.to_string(),
        index,
    })
}

fn validate_key_text(text: &str, line: usize) -> Result<(), IniSyntaxError> {
    match text
        .chars()
        .find(|c| INI_RESERVED_KEY_CHARS.contains(c) || *c == '[' || *c == ']')
    {
        Some(c) => Err(IniSyntaxError::new(
            line,
            format!("reserved character '{c}' in key"),
        )),
        None => Ok(()),
    }
}

fn parse_value(raw: &str, line: usize) -> Result<String, IniSyntaxError> {
    let raw = raw.trim();

    if let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let body = &raw[1..];
        let close = body
            .find(quote)
            .ok_or_else(|| IniSyntaxError::new(line, "unterminated quoted value"))?;
        let trailing = body[close + 1..].trim();
        if !trailing.is_empty() && !trailing.starts_with(';') {
            return Err(IniSyntaxError::new(
                line,
                "unexpected text after quoted value",
            ));
        }
        return Ok(body[..close].to_string());
    }

    let unquoted = raw.split(';').next().unwrap_or_default().trim();
    let lowered = unquoted.to_ascii_lowercase();
    let normalized = if INI_TRUE_LITERALS.contains(&lowered.as_str()) {
        "1"
    } else if INI_FALSE_LITERALS.contains(&lowered.as_str()) {
        ""
    } else {
        unquoted
    };
    Ok(normalized.to_string())
}

/// One past the largest integer key, or 0 when no key is an integer.
fn next_index(map: &Mapping) -> i64 {
    map.keys()
        .filter_map(|key| key.parse::<i64>().ok())
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

fn insert_entry(target: &mut Mapping, key: IniKey, value: String) {
    let value = ConfigValue::String(value);

    match key.index {
        None => {
            target.insert(key.name, value);
        }
        Some(IniIndex::Append) => {
            match target
                .entry(key.name)
                .or_insert_with(|| ConfigValue::Sequence(Vec::new()))
            {
                ConfigValue::Sequence(items) => items.push(value),
                ConfigValue::Mapping(map) => {
                    map.insert(next_index(map).to_string(), value);
                }
                slot => *slot = ConfigValue::Sequence(vec![value]),
            }
        }
        Some(IniIndex::Key(sub)) => {
            let slot = target
                .entry(key.name)
                .or_insert_with(|| ConfigValue::Mapping(Mapping::new()));
            match slot {
                ConfigValue::Mapping(map) => {
                    map.insert(sub, value);
                }
                ConfigValue::Sequence(items) => {
                    let mut map: Mapping = std::mem::take(items)
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| (i.to_string(), item))
                        .collect();
                    map.insert(sub, value);
                    *slot = ConfigValue::Mapping(map);
                }
                _ => *slot = ConfigValue::Mapping(Mapping::from([(sub, value)])),
            }
        }
    }
}
