//! Dynamic value representation for canonical encoding.
//!
//! This module provides the [`Value`] enum which represents any value the
//! encoder understands, plus the container handles [`Array`] and [`Object`].
//!
//! ## Core Types
//!
//! - [`Value`]: an enum over null, bool, number, string, symbol, array,
//!   object, date, and opaque payloads
//! - [`Number`]: integer, float, or arbitrary-precision integer
//! - [`Array`] / [`Object`]: shared container handles with stable identity
//! - [`Opaque`]: a type-erased payload only a replacer can encode
//!
//! ## Container identity
//!
//! Arrays and objects are handles (`Arc` internally), not owned trees.
//! Cloning a handle shares the underlying container, so a container can be
//! pushed into itself and the encoder can recognize the cycle by identity:
//!
//! ```rust
//! use object_hash::{encode, Array, Value};
//!
//! let arr = Array::new();
//! arr.push(Value::from(1));
//! arr.push(Value::Array(arr.clone())); // self-reference
//!
//! let encoded = encode(&Value::Array(arr)).unwrap();
//! assert_eq!(encoded, "array:2:number:1string:12:[CIRCULAR:0]");
//! ```
//!
//! Two structurally-equal but distinct containers compare equal with `==`
//! but have different identities, and are never flagged as circular.
//!
//! ## Creating Values
//!
//! ```rust
//! use object_hash::{value, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let sym = Value::symbol("hello");
//! assert_ne!(text, sym);
//!
//! let obj = value!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```

use crate::{Key, ObjectMap};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A dynamically-typed representation of any encodable value.
///
/// The variant set is closed: anything outside it must be wrapped in
/// [`Value::Opaque`] and resolved through a replacer, or encoding fails.
///
/// # Examples
///
/// ```rust
/// use object_hash::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Symbol(String),
    Array(Array),
    Object(Object),
    Date(DateTime<Utc>),
    Opaque(Opaque),
}

/// A numeric value: machine integer, float, or arbitrary-precision integer.
///
/// Integers outside the `i64` range are carried as [`Number::BigInt`] so they
/// encode as exact decimal text instead of a lossy float.
///
/// # Examples
///
/// ```rust
/// use object_hash::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), Some(3.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
}

impl Number {
    /// Returns `true` if this is a machine integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it fits exactly.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Number::BigInt(b) => i64::try_from(b.clone()).ok(),
        }
    }

    /// Converts this number to an `f64` if the conversion is meaningful.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Integer(i) => Some(*i as f64),
            Number::Float(f) => Some(*f),
            Number::BigInt(_) => None,
        }
    }
}

impl fmt::Display for Number {
    // This text is the `<v>` of the `number:<v>` token: integers as plain
    // decimal, floats as Rust's shortest round-trip decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::BigInt(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInt(value)
    }
}

/// A shared, ordered sequence of values.
///
/// Cloning an `Array` clones the handle, not the contents; all clones refer
/// to the same container and share its identity.
#[derive(Clone, Default)]
pub struct Array(Arc<RwLock<Vec<Value>>>);

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Array(Arc::new(RwLock::new(Vec::new())))
    }

    /// Appends a value to the back of the array.
    pub fn push(&self, value: Value) {
        self.write().push(value);
    }

    /// Returns a clone of the element at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.read().get(index).cloned()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the array contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Identity of the underlying container, stable across handle clones.
    #[must_use]
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Value>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Value>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(Arc::new(RwLock::new(values)))
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Array::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        // Identity shortcut also keeps comparison of self-referential arrays
        // from recursing forever through the shared handle.
        Arc::ptr_eq(&self.0, &other.0) || *self.read() == *other.read()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.read().iter()).finish()
    }
}

/// A shared, insertion-ordered mapping of keys to values.
///
/// Like [`Array`], this is a handle with stable identity; cloning shares the
/// underlying map.
#[derive(Clone, Default)]
pub struct Object(Arc<RwLock<ObjectMap>>);

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Object(Arc::new(RwLock::new(ObjectMap::new())))
    }

    /// Inserts a key-value pair, returning the previous value if any.
    pub fn insert(&self, key: impl Into<Key>, value: Value) -> Option<Value> {
        self.write().insert(key.into(), value)
    }

    /// Returns a clone of the value under the given key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Returns a clone of the value under a plain string key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<Value> {
        self.read().get_str(key).cloned()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the object contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Identity of the underlying container, stable across handle clones.
    #[must_use]
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, ObjectMap> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ObjectMap> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ObjectMap> for Object {
    fn from(map: ObjectMap) -> Self {
        Object(Arc::new(RwLock::new(map)))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.read() == *other.read()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.read().iter()).finish()
    }
}

/// A type-erased payload outside the supported variant set.
///
/// The encoder refuses opaque values; they exist so callers can route
/// arbitrary types through a replacer, which can downcast and substitute an
/// encodable [`Value`].
///
/// # Examples
///
/// ```rust
/// use object_hash::{encode_with_options, EncodeOptions, Opaque, Value};
///
/// struct UserId(u32);
///
/// let value = Value::Opaque(Opaque::new(UserId(7)));
/// let options = EncodeOptions::new().with_replacer(|v: &Value| {
///     let id = v.as_opaque()?.downcast_ref::<UserId>()?;
///     Some(Value::from(id.0))
/// });
///
/// assert_eq!(encode_with_options(&value, &options).unwrap(), "number:7");
/// ```
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wraps an arbitrary value for replacer-mediated encoding.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Opaque {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// The type name of the wrapped value, as reported in `NoEncoder` errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Attempts to borrow the wrapped value as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        // Identity only: the payload is opaque, so there is nothing else to
        // compare by.
        std::ptr::eq(
            Arc::as_ptr(&self.inner) as *const (),
            Arc::as_ptr(&other.inner) as *const (),
        )
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl Value {
    /// Creates a symbol value.
    ///
    /// Symbols encode with a distinct token prefix, so a symbol and a string
    /// with equal text produce different encodings.
    #[must_use]
    pub fn symbol(text: impl Into<String>) -> Self {
        Value::Symbol(text.into())
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a symbol.
    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Returns `true` if the value is an opaque payload.
    #[inline]
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Value::Opaque(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns its text. Symbols are not matched.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integral number, returns it as `i64`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// If the value is an array, returns the handle.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns the handle.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a date, returns it.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is an opaque payload, returns it.
    #[inline]
    #[must_use]
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Opaque(op) => Some(op),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, BigInt);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Array::from(value))
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<ObjectMap> for Value {
    fn from(value: ObjectMap) -> Self {
        Value::Object(Object::from(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}
