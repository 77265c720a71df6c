//! Hex and base64 conversions
//!
//! Base64 uses the standard alphabet with `=` padding, the form Foundation's
//! `base64EncodedString()` produces, so payloads interoperate with data
//! encrypted on Apple platforms.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cryptkit_api::{Error, Result};

/// Lowercase hex, two characters per byte
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Parse hex in either case
pub fn from_hex(input: &str) -> Result<Vec<u8>> {
    hex::decode(input).map_err(|e| Error::decoding("hex", e.to_string()))
}

pub fn to_base64(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard padded base64
pub fn from_base64(input: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(input)
        .map_err(|e| Error::decoding("base64", e.to_string()))
}
