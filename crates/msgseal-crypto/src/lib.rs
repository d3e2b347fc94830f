//! Keyed-hash primitives for msgseal.
//!
//! Provides HMAC factories over MD5, SHA-1, SHA-256 and SHA-512, a redacting
//! [`Secret`] wrapper for key material, and constant-time digest comparison.
//!
//! All primitives wrap established RustCrypto crates; no custom cryptography.

pub mod compare;
pub mod error;
pub mod hasher;
pub mod secret;

pub use compare::constant_time_eq;
pub use error::{CryptoError, CryptoResult};
pub use hasher::{HashAlgorithm, Hasher, KeyedHash};
pub use secret::Secret;
