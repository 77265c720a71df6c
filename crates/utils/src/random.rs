//! Random data and key generation
//!
//! Bytes come from [`OsRng`]. A failing OS source is reported as
//! [`Error::RandomGenerationError`] rather than a panic.

use cryptkit_api::{Error, Result};
use cryptkit_api::error::validate;
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::encoding::to_base64;

/// Named key sizes for [`generate_random_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyKind {
    Aes128,
    Aes192,
    Aes256,
    Des,
    TripleDes,
}

impl KeyKind {
    pub const ALL: [KeyKind; 5] = [
        KeyKind::Aes128,
        KeyKind::Aes192,
        KeyKind::Aes256,
        KeyKind::Des,
        KeyKind::TripleDes,
    ];

    /// Key length in bytes
    pub const fn key_size(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
            Self::Des => 8,
            Self::TripleDes => 24,
        }
    }
}

/// `len` bytes from the OS CSPRNG
pub fn random_data(len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| Error::RandomGenerationError {
            context: "OS random source",
            message: e.to_string(),
        })?;
    Ok(buf)
}

/// A fresh `len`-byte key, base64 encoded
pub fn random_key(len: usize) -> Result<String> {
    validate::parameter(len > 0, "random key", "length must be at least one byte")?;
    let key = Zeroizing::new(random_data(len)?);
    Ok(to_base64(&key[..]))
}

/// A fresh key sized for `kind`, base64 encoded
pub fn generate_random_key(kind: KeyKind) -> Result<String> {
    debug!("generating {:?} key ({} bytes)", kind, kind.key_size());
    random_key(kind.key_size())
}
