//! Read-only configuration store.
//!
//! Responsibilities:
//! - Own the parsed (and environment-narrowed) document, the delimiter and the lookup cache.
//! - Expose dotted-path reads: `get`, `get_or`, `read`, `exists` and `Index<&str>`.
//! - Invalidate the cache whenever the delimiter changes.
//!
//! Does NOT handle:
//! - Mutating configuration content. `set` and `unset` are accepted and ignored.
//! - Reloading or merging sources.
//!
//! Invariants:
//! - A store only exists with fully loaded data; construction either succeeds or returns the first error.
//! - Cached entries always belong to the current delimiter.
//! - A failed `set_delimiter` leaves delimiter and cache untouched.

use std::ops::Index;
use std::path::{Path, PathBuf};

use crate::delimiter::Delimiter;
use crate::loader::{self, ConfigError, Format};
use crate::resolver::{CacheStats, PathResolver, lookup};
use crate::value::{ConfigValue, Mapping};

static NULL: ConfigValue = ConfigValue::Null;

/// Configuration loaded from a JSON or INI file, queried by dotted keys.
#[derive(Debug)]
pub struct ConfigStore {
    data: Mapping,
    delimiter: Delimiter,
    resolver: PathResolver,
    format: Option<Format>,
    environment: Option<String>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Load the file at `path`, optionally narrowed to `environment`.
    ///
    /// # Errors
    ///
    /// - `PathNotFound` if `path` is not an existing regular file.
    /// - `UnsupportedFormat` if the extension is neither `.json` nor `.ini`.
    /// - `JsonParse` / `IniParse` if the content is malformed.
    /// - `EnvironmentNotFound` / `EnvironmentNotMapping` if the environment cannot be selected.
    pub fn new(path: impl AsRef<Path>, environment: Option<&str>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let (format, data) = loader::load(path, environment)?;
        Ok(Self {
            format: Some(format),
            environment: environment.map(str::to_string),
            path: Some(path.to_path_buf()),
            ..Self::from_mapping(data)
        })
    }

    /// Alias for [`ConfigStore::new`].
    pub fn load(path: impl AsRef<Path>, environment: Option<&str>) -> Result<Self, ConfigError> {
        Self::new(path, environment)
    }

    /// Build a store from in-memory content in the given format.
    pub fn from_content(
        content: &str,
        format: Format,
        environment: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let source = Path::new("<memory>");
        let data = format.parse(source, content.as_bytes())?;
        let data = loader::select_environment(data, environment)?;
        Ok(Self {
            format: Some(format),
            environment: environment.map(str::to_string),
            ..Self::from_mapping(data)
        })
    }

    /// Wrap an already-built mapping.
    pub fn from_mapping(data: Mapping) -> Self {
        Self {
            data,
            delimiter: Delimiter::default(),
            resolver: PathResolver::new(),
            format: None,
            environment: None,
            path: None,
        }
    }

    /// Resolve `key` using the current delimiter. Results are memoized per key.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.resolver.resolve(&self.data, key, self.delimiter)
    }

    /// Resolve `key`, returning `default` when it is absent.
    pub fn get_or(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Container-style read; same as [`ConfigStore::get`].
    pub fn read(&self, key: &str) -> Option<ConfigValue> {
        self.get(key)
    }

    /// True when `key` resolves to a non-null value.
    pub fn exists(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    /// Accepted for container-style compatibility; the store is read-only and nothing changes.
    pub fn set(&self, key: &str, _value: impl Into<ConfigValue>) {
        tracing::debug!(key, "Ignoring write to read-only config store");
    }

    /// Accepted for container-style compatibility; the store is read-only and nothing changes.
    pub fn unset(&self, key: &str) {
        tracing::debug!(key, "Ignoring unset on read-only config store");
    }

    /// Change the path delimiter and clear the lookup cache.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDelimiter` unless `delimiter` is exactly one character.
    pub fn set_delimiter(&mut self, delimiter: &str) -> Result<(), ConfigError> {
        let delimiter = Delimiter::new(delimiter)?;
        self.delimiter = delimiter;
        self.resolver.clear();
        tracing::debug!(%delimiter, "Delimiter changed, lookup cache cleared");
        Ok(())
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// The active document root.
    pub fn data(&self) -> &Mapping {
        &self.data
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.resolver.stats()
    }
}

impl Index<&str> for ConfigStore {
    type Output = ConfigValue;

    /// Borrowing lookup that bypasses the cache; a miss yields `ConfigValue::Null`.
    fn index(&self, key: &str) -> &ConfigValue {
        lookup(&self.data, key, self.delimiter).unwrap_or(&NULL)
    }
}
