//! Ordered map type for object values.
//!
//! This module provides [`ObjectMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object entries, and [`Key`], the closed set
//! of key types an object can carry.
//!
//! ## Why IndexMap?
//!
//! Canonical encoding needs a reproducible view of an object's entries:
//!
//! - **Insertion-order mode**: with `unordered_objects = false`, entries are
//!   emitted exactly in the order they were inserted
//! - **Sorted mode**: with the default `unordered_objects = true`, entries are
//!   sorted by their encoded key text, which requires a stable starting order
//!   to be meaningfully testable
//!
//! A `HashMap` would randomize iteration between processes and break both.
//!
//! ## Why a closed `Key` type?
//!
//! Keys are restricted to strings and symbols. Container-valued keys cannot be
//! expressed, so key encoding never recurses and is trivially deterministic,
//! which is what allows object encoding to sort by encoded key text.
//!
//! ## Examples
//!
//! ```rust
//! use object_hash::{Key, ObjectMap, Value};
//!
//! let mut map = ObjectMap::new();
//! map.insert(Key::from("name"), Value::from("Alice"));
//! map.insert(Key::symbol("role"), Value::from("admin"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get_str("name").and_then(|v| v.as_str().map(String::from)), Some("Alice".to_string()));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An object key: an ordinary string or an interned symbol.
///
/// Symbols and strings with identical text are distinct keys and encode to
/// different tokens.
///
/// # Examples
///
/// ```rust
/// use object_hash::Key;
///
/// let s = Key::from("a");
/// let sym = Key::symbol("a");
/// assert_ne!(s, sym);
/// assert_eq!(s.as_str(), sym.as_str());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    String(String),
    Symbol(String),
}

impl Key {
    /// Creates a symbol key.
    #[must_use]
    pub fn symbol(text: impl Into<String>) -> Self {
        Key::Symbol(text.into())
    }

    /// Returns the key's text regardless of kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Key::String(s) | Key::Symbol(s) => s,
        }
    }

    /// Returns `true` if this key is a symbol.
    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value)
    }
}

/// An ordered map of keys to values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which is what the insertion-order encoding mode emits verbatim.
///
/// # Examples
///
/// ```rust
/// use object_hash::{Key, ObjectMap, Value};
///
/// let mut map = ObjectMap::new();
/// map.insert(Key::from("first"), Value::from(1));
/// map.insert(Key::from("second"), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().map(Key::as_str).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMap(IndexMap<Key, crate::Value>);

impl ObjectMap {
    /// Creates an empty `ObjectMap`.
    #[must_use]
    pub fn new() -> Self {
        ObjectMap(IndexMap::new())
    }

    /// Creates an empty `ObjectMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    pub fn insert(&mut self, key: Key, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a reference to the value under a plain string key.
    ///
    /// Symbol keys with the same text are not matched.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(&Key::String(key.to_string()))
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for ObjectMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        map.into_iter().map(|(k, v)| (Key::String(k), v)).collect()
    }
}

impl IntoIterator for ObjectMap {
    type Item = (Key, crate::Value);
    type IntoIter = indexmap::map::IntoIter<Key, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(Key, crate::Value)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (Key, crate::Value)>>(iter: T) -> Self {
        ObjectMap(IndexMap::from_iter(iter))
    }
}
