//! # object_hash
//!
//! Deterministic canonical encoding and fixed-length fingerprinting for
//! structured values.
//!
//! ## What is this for?
//!
//! Turning a value — possibly nested, possibly self-referential — into a
//! stable fingerprint: cache keys, content addressing, structural equality,
//! and change detection across processes. Semantically-identical input always
//! yields byte-identical output.
//!
//! Two components run in sequence:
//!
//! - the **encoder** recursively converts a [`Value`] into a canonical string
//!   (type-tagged tokens, sorted object keys, circular-reference markers, and
//!   an optional caller-supplied replacer hook)
//! - the **digest dispatcher** hashes that string with a named algorithm
//!   (`md5`, `sha1`, `sha2`/`sha256`, `rmd160`, or `none` to preview the
//!   encoding) and renders uppercase hex
//!
//! The encoder knows nothing about hashing; composition is plain sequencing.
//!
//! ## Quick Start
//!
//! ```rust
//! use object_hash::{encode, hash, value};
//!
//! // Canonical encoding
//! assert_eq!(encode(&value!(123)).unwrap(), "number:123");
//! assert_eq!(encode(&value!("Hello World")).unwrap(), "string:11:Hello World");
//! assert_eq!(
//!     encode(&value!([1, 2, 3])).unwrap(),
//!     "array:3:number:1number:2number:3"
//! );
//!
//! // Fingerprint (SHA-1 by default)
//! assert_eq!(
//!     hash(&value!(123)).unwrap(),
//!     "7D37103E1C4D22DE8F7B4096B4BE8C2DDFA4CAA0"
//! );
//! ```
//!
//! Object key order does not affect the fingerprint (by default entries are
//! sorted by their encoded key text):
//!
//! ```rust
//! use object_hash::{hash, value};
//!
//! let a = value!({"a": 2, "b": 3, "c": 1});
//! let b = value!({"c": 1, "a": 2, "b": 3});
//! assert_eq!(hash(&a).unwrap(), hash(&b).unwrap());
//! ```
//!
//! ## Native types
//!
//! Any `#[derive(Serialize)]` type can be converted with [`to_value`] and
//! then encoded or hashed:
//!
//! ```rust
//! use object_hash::{hash, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Config {
//!     retries: u32,
//!     verbose: bool,
//! }
//!
//! let value = to_value(&Config { retries: 3, verbose: false }).unwrap();
//! let key = hash(&value).unwrap();
//! assert_eq!(key.len(), 40);
//! ```
//!
//! ## Self-referential values
//!
//! Containers are shared handles, so a container can contain itself. The
//! encoder detects the cycle by identity and emits a marker instead of
//! recursing forever:
//!
//! ```rust
//! use object_hash::{encode, Array, Value};
//!
//! let arr = Array::new();
//! arr.push(Value::Array(arr.clone()));
//! assert_eq!(encode(&Value::Array(arr)).unwrap(), "array:1:string:12:[CIRCULAR:0]");
//! ```
//!
//! ## Extending the encoder
//!
//! Types outside the closed variant set travel as [`Opaque`] payloads and are
//! resolved by a replacer, a hook that substitutes a value before dispatch.
//! Replacer output is re-canonicalized like any native input, so overrides
//! cannot break determinism:
//!
//! ```rust
//! use object_hash::{encode_with_options, EncodeOptions, Opaque, Value};
//!
//! struct Celsius(f64);
//!
//! let options = EncodeOptions::new().with_replacer(|v: &Value| {
//!     let c = v.as_opaque()?.downcast_ref::<Celsius>()?;
//!     Some(Value::from(c.0))
//! });
//!
//! let value = Value::Opaque(Opaque::new(Celsius(21.5)));
//! assert_eq!(encode_with_options(&value, &options).unwrap(), "number:21.5");
//! ```
//!
//! Without a matching replacer, opaque values fail with
//! [`Error::NoEncoder`] — there is no silent fallback.
//!
//! ## Guarantees and limits
//!
//! - Encoding is a pure function of `(value, options)`; no state crosses
//!   calls, and concurrent calls from different threads are independent
//! - String tokens count characters, not bytes
//! - Object keys are [`Key`]s — strings or symbols only. Hosts that allow
//!   numbers or containers as keys must map them to one of the two via a
//!   replacer or ahead of construction
//! - Float text is Rust's shortest round-trip decimal; fingerprints shared
//!   with other hosts require the same numeric formatting on both sides
//! - There is no decoding path: this is a fingerprint format, not a
//!   serialization format

pub mod digest;
pub mod encode;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use digest::Algorithm;
pub use encode::Encoder;
pub use error::{Error, Result};
pub use map::{Key, ObjectMap};
pub use options::{EncodeOptions, Replacer};
pub use ser::ValueSerializer;
pub use value::{Array, Number, Object, Opaque, Value};

use serde::Serialize;

/// The algorithm used by [`hash`] when none is named.
pub const DEFAULT_ALGORITHM: &str = "sha1";

/// Encodes a value into its canonical string with default options.
///
/// # Examples
///
/// ```rust
/// use object_hash::{encode, value};
///
/// assert_eq!(encode(&value!(true)).unwrap(), "bool:true");
/// assert_eq!(encode(&value!(null)).unwrap(), "Null");
/// ```
///
/// # Errors
///
/// Returns [`Error::NoEncoder`] if the value contains an opaque payload.
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &EncodeOptions::default())
}

/// Encodes a value into its canonical string with the given options.
///
/// # Errors
///
/// Returns [`Error::NoEncoder`] if the value contains an opaque payload the
/// replacer does not resolve.
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> Result<String> {
    Encoder::new(options).encode(value)
}

/// Fingerprints a value with the default algorithm (SHA-1).
///
/// # Examples
///
/// ```rust
/// use object_hash::{hash, value};
///
/// assert_eq!(
///     hash(&value!("Hello World")).unwrap(),
///     "3415EF7FD82C1A04DEA35838ED84A6CECB03C790"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::NoEncoder`] if the value contains an unresolvable opaque
/// payload.
pub fn hash(value: &Value) -> Result<String> {
    hash_with_options(value, DEFAULT_ALGORITHM, &EncodeOptions::default())
}

/// Fingerprints a value with a named algorithm.
///
/// Pass `"none"` to get the canonical encoding back unhashed.
///
/// # Errors
///
/// Returns [`Error::UnknownAlgorithm`] for unrecognized algorithm names and
/// [`Error::NoEncoder`] for unresolvable opaque payloads.
pub fn hash_with(value: &Value, algorithm: &str) -> Result<String> {
    hash_with_options(value, algorithm, &EncodeOptions::default())
}

/// Fingerprints a value with a named algorithm and explicit encode options.
///
/// Composition only: the algorithm name is resolved, the value is encoded,
/// and the encoding's bytes are digested.
///
/// # Errors
///
/// Returns [`Error::UnknownAlgorithm`] or [`Error::NoEncoder`], unchanged
/// from the components that raise them.
pub fn hash_with_options(
    value: &Value,
    algorithm: &str,
    options: &EncodeOptions,
) -> Result<String> {
    let algorithm: Algorithm = algorithm.parse()?;
    let encoded = encode_with_options(value, options)?;
    Ok(digest::digest_with(&encoded, algorithm))
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// Useful for fingerprinting native Rust types without hand-building value
/// trees.
///
/// # Examples
///
/// ```rust
/// use object_hash::to_value;
///
/// let value = to_value(&vec![1, 2, 3]).unwrap();
/// assert!(value.is_array());
/// ```
///
/// # Errors
///
/// Returns an error if the type uses a serde shape with no value-level
/// equivalent (tuple or struct enum variants, non-string map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
