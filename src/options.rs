//! Configuration options for canonical encoding.
//!
//! This module provides [`EncodeOptions`], the per-call configuration the
//! encoder reads:
//!
//! - a **replacer**: an optional hook that can substitute any node with a
//!   different value before type dispatch
//! - **key ordering**: whether object entries are sorted by their encoded key
//!   text (the default) or emitted in insertion order
//!
//! ## Examples
//!
//! ```rust
//! use object_hash::{encode_with_options, value, EncodeOptions, Value};
//!
//! // Preserve insertion order instead of sorting keys
//! let options = EncodeOptions::new().with_unordered_objects(false);
//! let encoded = encode_with_options(&value!({"b": 2, "a": 1}), &options).unwrap();
//! assert_eq!(encoded, "object:2:string:1:b:number:2,string:1:a:number:1,");
//!
//! // Rewrite every string to a fixed marker
//! let options = EncodeOptions::new()
//!     .with_replacer(|v: &Value| v.as_str().map(|_| Value::symbol("redacted")));
//! ```

use crate::Value;
use std::fmt;
use std::sync::Arc;

/// A caller-supplied hook that can override how a value is encoded.
///
/// Invoked once per node before default dispatch; returning `None` means "no
/// override, dispatch normally". A returned value is itself re-canonicalized
/// (including another replacer pass), never spliced into the output verbatim.
pub type Replacer = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// Per-call configuration for the encoder.
///
/// The traversal state (the stack of container identities) is *not* part of
/// the options; it belongs to a single encode call and never outlives it.
///
/// # Examples
///
/// ```rust
/// use object_hash::EncodeOptions;
///
/// let options = EncodeOptions::default();
/// assert!(options.unordered_objects);
/// assert!(options.replacer.is_none());
/// ```
#[derive(Clone)]
pub struct EncodeOptions {
    /// Optional value-rewriting hook, applied before type dispatch.
    pub replacer: Option<Replacer>,
    /// When `true` (the default), object entries are sorted by their encoded
    /// key text so that insertion order does not affect the output. When
    /// `false`, insertion order is preserved.
    pub unordered_objects: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            replacer: None,
            unordered_objects: true,
        }
    }
}

impl EncodeOptions {
    /// Creates the default options: no replacer, sorted object keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacer hook.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_hash::{EncodeOptions, Value};
    ///
    /// let options = EncodeOptions::new()
    ///     .with_replacer(|v: &Value| v.as_opaque().map(|_| Value::Null));
    /// assert!(options.replacer.is_some());
    /// ```
    #[must_use]
    pub fn with_replacer<F>(mut self, replacer: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.replacer = Some(Arc::new(replacer));
        self
    }

    /// Sets whether object entries are sorted (`true`) or kept in insertion
    /// order (`false`).
    #[must_use]
    pub fn with_unordered_objects(mut self, unordered: bool) -> Self {
        self.unordered_objects = unordered;
        self
    }
}

impl fmt::Debug for EncodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeOptions")
            .field("replacer", &self.replacer.as_ref().map(|_| "<fn>"))
            .field("unordered_objects", &self.unordered_objects)
            .finish()
    }
}
