//! Case-insensitive concurrent string index.

use dashmap::DashMap;

/// Thread-safe map from case-insensitive string keys to values.
///
/// Keys are normalized to lower case before storage and lookup, so
/// `"MyProj"` and `"myproj"` address the same entry. Enumeration returns the
/// normalized form; the original casing does not survive a round trip.
///
/// Backed by `DashMap`, so get/put/remove/enumerate are safe under arbitrary
/// concurrent invocation without external locking.
pub struct CaseInsensitiveIndex<V> {
    entries: DashMap<String, V>,
}

impl<V> Default for CaseInsensitiveIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CaseInsensitiveIndex<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    fn normalize(key: &str) -> String {
        key.to_lowercase()
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&Self::normalize(key))
    }

    /// All keys currently in the index, in normalized form.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl<V: Clone> CaseInsensitiveIndex<V> {
    /// Insert or replace the value for the key.
    ///
    /// Returns the previous value if the (normalized) key was present.
    pub fn put(&self, key: &str, value: V) -> Option<V> {
        self.entries.insert(Self::normalize(key), value)
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .get(&Self::normalize(key))
            .map(|entry| entry.value().clone())
    }

    /// Remove the entry for the key, returning it if it was present.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.entries
            .remove(&Self::normalize(key))
            .map(|(_, value)| value)
    }
}
