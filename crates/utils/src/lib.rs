//! Utilities and helpers for the cryptkit library
//!
//! Hex and base64 conversions for the string-oriented calls, and random
//! data and key generation from the operating system CSPRNG.

#![forbid(unsafe_code)]

pub mod encoding;
pub mod random;

pub use encoding::{from_base64, from_hex, to_base64, to_hex};
pub use random::{generate_random_key, random_data, random_key, KeyKind};
