//! Error types for canonical encoding and digest dispatch.
//!
//! Both failure modes are terminal for the call that raises them: there is no
//! partial result and no silent substitution. Given the same input they fail
//! the same way every time, so neither is worth retrying.
//!
//! ## Error Categories
//!
//! - [`Error::NoEncoder`]: a value outside the supported variants reached
//!   dispatch and no replacer resolved it
//! - [`Error::UnknownAlgorithm`]: the requested digest algorithm name is not
//!   in the recognized set
//!
//! ## Examples
//!
//! ```rust
//! use object_hash::{hash_with, value, Error};
//!
//! let result = hash_with(&value!(123), "blake9000");
//! assert!(matches!(result, Err(Error::UnknownAlgorithm(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while encoding or hashing a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A value's type is outside the supported variants and the replacer
    /// either was absent or declined to override it. Carries the offending
    /// type's name for diagnostics.
    #[error("no encoder for value of type `{0}` and no replacer matched")]
    NoEncoder(String),

    /// The requested digest algorithm name is not recognized. Carries the
    /// requested name.
    #[error("unknown digest algorithm: `{0}`")]
    UnknownAlgorithm(String),

    /// Generic message, used when converting native types via serde.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a [`Error::NoEncoder`] for the given type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_hash::Error;
    ///
    /// let err = Error::no_encoder("std::fs::File");
    /// assert!(err.to_string().contains("std::fs::File"));
    /// ```
    pub fn no_encoder(type_name: impl Into<String>) -> Self {
        Error::NoEncoder(type_name.into())
    }

    /// Creates an [`Error::UnknownAlgorithm`] for the given algorithm name.
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Error::UnknownAlgorithm(name.into())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
