//! Canonical encoding.
//!
//! This module provides the [`Encoder`] that converts a [`Value`] tree into
//! its canonical string form. The encoding is a pure function of the value
//! and the options: equal inputs produce byte-identical output across calls
//! and across processes.
//!
//! ## Token formats
//!
//! | Type | Format |
//! |------|--------|
//! | Null | `Null` |
//! | Bool | `bool:true` / `bool:false` |
//! | Number | `number:<v>` |
//! | String | `string:<n>:<v>` (`<n>` = character count) |
//! | Symbol | `symbol:<v>` |
//! | Date | `date:<iso8601-with-millis-Z>` |
//! | Array | `array:<n>:<e0><e1>...` |
//! | Object | `object:<n>:<k>:<v>,<k>:<v>,...` (trailing comma per entry) |
//!
//! A container that appears inside itself encodes as a string token whose
//! text is `[CIRCULAR:<i>]`, where `<i>` is the stack depth of the ancestor.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use object_hash::{encode, value};
//!
//! assert_eq!(encode(&value!([1, 2, 3])).unwrap(), "array:3:number:1number:2number:3");
//! ```
//!
//! The encoder can also be driven directly when the same options are reused
//! across many values:
//!
//! ```rust
//! use object_hash::{value, EncodeOptions, Encoder};
//!
//! let options = EncodeOptions::new();
//! let mut encoder = Encoder::new(&options);
//! assert_eq!(encoder.encode(&value!(true)).unwrap(), "bool:true");
//! assert_eq!(encoder.encode(&value!("hi")).unwrap(), "string:2:hi");
//! ```

use crate::{Array, EncodeOptions, Error, Key, Object, Result, Value};
use chrono::SecondsFormat;
use std::borrow::Cow;

/// The canonical encoder.
///
/// Holds the per-call options and the traversal stack of container
/// identities. The stack is empty between top-level [`Encoder::encode`]
/// calls; it carries no state across them.
pub struct Encoder<'a> {
    options: &'a EncodeOptions,
    stack: Vec<usize>,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a EncodeOptions) -> Self {
        Encoder {
            options,
            stack: Vec::new(),
        }
    }

    /// Encodes a value into its canonical string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEncoder`] when an [`Value::Opaque`] node reaches
    /// dispatch with no replacer override.
    pub fn encode(&mut self, value: &Value) -> Result<String> {
        debug_assert!(self.stack.is_empty());
        self.encode_node(value)
    }

    /// One node: replacer pass, then circularity check, then type dispatch.
    fn encode_node(&mut self, value: &Value) -> Result<String> {
        let mut current = Cow::Borrowed(value);
        if let Some(replacer) = &self.options.replacer {
            // A replacement is re-submitted to the replacer, so a hook can
            // rewrite in stages. Convergence is the caller's responsibility.
            while let Some(replacement) = replacer(current.as_ref()) {
                current = Cow::Owned(replacement);
            }
        }
        self.dispatch(current.as_ref())
    }

    fn dispatch(&mut self, value: &Value) -> Result<String> {
        match value {
            Value::Null => Ok("Null".to_string()),
            Value::Bool(b) => Ok(format!("bool:{}", b)),
            Value::Number(n) => Ok(format!("number:{}", n)),
            Value::String(s) => Ok(string_token(s)),
            Value::Symbol(s) => Ok(format!("symbol:{}", s)),
            Value::Date(dt) => Ok(format!(
                "date:{}",
                dt.to_rfc3339_opts(SecondsFormat::Millis, true)
            )),
            Value::Array(arr) => self.encode_array(arr),
            Value::Object(obj) => self.encode_object(obj),
            Value::Opaque(op) => Err(Error::no_encoder(op.type_name())),
        }
    }

    fn encode_array(&mut self, array: &Array) -> Result<String> {
        let id = array.identity();
        if let Some(depth) = self.ancestor_depth(id) {
            return Ok(circular_token(depth));
        }
        self.stack.push(id);
        let result = self.encode_array_entries(array);
        self.stack.pop();
        result
    }

    fn encode_array_entries(&mut self, array: &Array) -> Result<String> {
        let items = array.read();
        let mut out = format!("array:{}:", items.len());
        for item in items.iter() {
            out.push_str(&self.encode_node(item)?);
        }
        Ok(out)
    }

    fn encode_object(&mut self, object: &Object) -> Result<String> {
        let id = object.identity();
        if let Some(depth) = self.ancestor_depth(id) {
            return Ok(circular_token(depth));
        }
        self.stack.push(id);
        let result = self.encode_object_entries(object);
        self.stack.pop();
        result
    }

    /// Two passes: encode every key and value first, then order and join.
    /// Sorting compares the encoded key strings, not the raw keys, so the
    /// ordering policy is itself a function of the canonical form.
    fn encode_object_entries(&mut self, object: &Object) -> Result<String> {
        let map = object.read();
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map.iter() {
            entries.push((key_token(key), self.encode_node(value)?));
        }
        if self.options.unordered_objects {
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        }

        let mut out = format!("object:{}:", entries.len());
        for (key, value) in entries {
            out.push_str(&key);
            out.push(':');
            out.push_str(&value);
            out.push(',');
        }
        Ok(out)
    }

    /// 0-based depth of the container in the current traversal, counted from
    /// the outermost container, or `None` if it is not an ancestor.
    fn ancestor_depth(&self, identity: usize) -> Option<usize> {
        self.stack.iter().position(|&id| id == identity)
    }
}

fn string_token(s: &str) -> String {
    // `<n>` is the character count, not the byte count.
    format!("string:{}:{}", s.chars().count(), s)
}

fn key_token(key: &Key) -> String {
    match key {
        Key::String(s) => string_token(s),
        Key::Symbol(s) => format!("symbol:{}", s),
    }
}

fn circular_token(depth: usize) -> String {
    string_token(&format!("[CIRCULAR:{}]", depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_token_counts_chars() {
        assert_eq!(string_token("Hello World"), "string:11:Hello World");
        assert_eq!(string_token(""), "string:0:");
        // 5 characters, 6 bytes
        assert_eq!(string_token("héllo"), "string:5:héllo");
    }

    #[test]
    fn test_circular_token_is_a_string_token() {
        assert_eq!(circular_token(0), "string:12:[CIRCULAR:0]");
        assert_eq!(circular_token(12), "string:13:[CIRCULAR:12]");
    }

    #[test]
    fn test_key_tokens() {
        assert_eq!(key_token(&Key::from("a")), "string:1:a");
        assert_eq!(key_token(&Key::symbol("a")), "symbol:a");
    }
}
