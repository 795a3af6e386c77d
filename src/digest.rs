//! Digest dispatch.
//!
//! Maps an algorithm name to a hashing capability and applies it to the
//! canonical encoding, rendering the result as uppercase hexadecimal with no
//! separators or prefix. The dispatcher owns no state; every call is
//! independent, so concurrent use needs no synchronization.
//!
//! The recognized names are case-sensitive:
//!
//! | Name | Behavior | Output width |
//! |------|----------|--------------|
//! | `none`, `passthrough` | input returned unchanged | input length |
//! | `md5` | MD5 | 32 hex chars |
//! | `sha1` | SHA-1 | 40 hex chars |
//! | `sha2`, `sha256` | SHA-256 | 64 hex chars |
//! | `rmd160` | RIPEMD-160 | 40 hex chars |
//!
//! ## Examples
//!
//! ```rust
//! use object_hash::digest::digest;
//!
//! assert_eq!(digest("Hello World", "none").unwrap(), "Hello World");
//! assert_eq!(
//!     digest("Hello World", "md5").unwrap(),
//!     "B10A8DB164E0754105B7A99BE72E3FE5"
//! );
//! assert!(digest("Hello World", "whirlpool").is_err());
//! ```

use crate::{Error, Result};
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A recognized digest algorithm.
///
/// Parsed from its case-sensitive name; `sha2` and `sha256` are aliases, as
/// are `none` and `passthrough`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Identity: returns the canonical encoding unchanged. Useful to preview
    /// what would be hashed.
    Passthrough,
    Md5,
    Sha1,
    Sha256,
    Rmd160,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "none" | "passthrough" => Ok(Algorithm::Passthrough),
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha2" | "sha256" => Ok(Algorithm::Sha256),
            "rmd160" => Ok(Algorithm::Rmd160),
            other => Err(Error::unknown_algorithm(other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Passthrough => "none",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Rmd160 => "rmd160",
        };
        f.write_str(name)
    }
}

/// Hashes `input` with the named algorithm.
///
/// # Errors
///
/// Returns [`Error::UnknownAlgorithm`] for any name outside the recognized
/// set.
pub fn digest(input: &str, algorithm: &str) -> Result<String> {
    Ok(digest_with(input, algorithm.parse()?))
}

/// Hashes `input` with an already-resolved algorithm. Infallible.
#[must_use]
pub fn digest_with(input: &str, algorithm: Algorithm) -> String {
    match algorithm {
        Algorithm::Passthrough => input.to_string(),
        Algorithm::Md5 => hex_digest::<Md5>(input.as_bytes()),
        Algorithm::Sha1 => hex_digest::<Sha1>(input.as_bytes()),
        Algorithm::Sha256 => hex_digest::<Sha256>(input.as_bytes()),
        Algorithm::Rmd160 => hex_digest::<Ripemd160>(input.as_bytes()),
    }
}

fn hex_digest<D: Digest>(bytes: &[u8]) -> String {
    hex::encode_upper(D::digest(bytes))
}
