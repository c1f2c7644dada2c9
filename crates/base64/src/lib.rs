//! Base64 encoding and decoding per RFC 4648 (standard alphabet, `=` padding).
//!
//! This crate provides:
//! - Allocating [`encode`]/[`decode`] conveniences
//! - Buffer-writing [`encode_into`]/[`decode_into`] for callers that pre-size
//!   their own storage with [`encoded_len`]/[`decoded_len`]
//! - [`decode_in_place`] for decoding an encoded buffer into its own prefix
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode, encode};
//!
//! let data = b"light work.";
//! let encoded = encode(data);
//! assert_eq!(encoded, "bGlnaHQgd29yay4=");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod decode;
mod encode;
mod len;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use decode::{decode, decode_in_place, decode_into};
pub use encode::{encode, encode_into};
pub use len::{decoded_len, encoded_len};

use thiserror::Error;

/// Error type for base64 decoding.
///
/// Both variants are deterministic input-validation failures; encoding never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The input length is not a multiple of 4.
    #[error("base64 input length {length} is not a multiple of 4")]
    MalformedLength { length: usize },
    /// A byte outside the alphabet was found in a non-padding position.
    #[error("invalid base64 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}
