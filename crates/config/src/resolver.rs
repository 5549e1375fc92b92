//! Dotted-path resolution with memoization.
//!
//! Responsibilities:
//! - Walk a `Mapping` along delimiter-separated segments.
//! - Memoize successful lookups keyed by the full, unsplit key string.
//!
//! Does NOT handle:
//! - Delimiter validation (see `delimiter.rs`).
//! - Deciding when the cache becomes stale. The owner calls `clear()`
//!   whenever the delimiter changes.
//!
//! Invariants:
//! - Only hits are cached; a miss never stores the caller's default.
//! - A `null` value is a miss, so it is never cached.
//! - The value is returned after the last segment by position, so repeated
//!   segment names (`a.b.a`) resolve the full path.
//! - A segment addresses a mapping key or a canonical sequence index.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::delimiter::Delimiter;
use crate::value::{ConfigValue, Mapping};

/// Snapshot of cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, ConfigValue>,
    hits: u64,
    misses: u64,
}

/// Resolves dotted keys against a mapping and owns the lookup cache.
#[derive(Debug, Default)]
pub struct PathResolver {
    cache: Mutex<CacheState>,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `key` against `data`, consulting and filling the cache.
    pub fn resolve(&self, data: &Mapping, key: &str, delimiter: Delimiter) -> Option<ConfigValue> {
        let mut state = self.lock();

        if let Some(value) = state.entries.get(key) {
            let value = value.clone();
            state.hits += 1;
            tracing::trace!(key, "Lookup cache hit");
            return Some(value);
        }

        state.misses += 1;
        let value = lookup(data, key, delimiter)?.clone();
        tracing::trace!(key, "Lookup cache miss, caching resolved value");
        state.entries.insert(key.to_string(), value.clone());
        Some(value)
    }

    /// Resolve `key`, falling back to `default` on a miss.
    pub fn resolve_or(
        &self,
        data: &Mapping,
        key: &str,
        delimiter: Delimiter,
        default: ConfigValue,
    ) -> ConfigValue {
        self.resolve(data, key, delimiter).unwrap_or(default)
    }

    /// Whether `key` currently has a cached value.
    pub fn is_cached(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    /// Drop every cached entry. Counters are kept.
    pub fn clear(&mut self) {
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.entries.len(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // The cache holds plain data; a panic elsewhere cannot leave it half-written.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Walk `data` along `key` without touching any cache.
///
/// Returns `None` as soon as a segment is absent at its level. A segment
/// holding `null` counts as absent.
pub fn lookup<'a>(data: &'a Mapping, key: &str, delimiter: Delimiter) -> Option<&'a ConfigValue> {
    let mut segments = delimiter.split(key);
    let first = segments.next()?;
    let present = |value: &&ConfigValue| !value.is_null();
    segments.try_fold(data.get(first).filter(present)?, |node, segment| {
        node.child(segment).filter(present)
    })
}
