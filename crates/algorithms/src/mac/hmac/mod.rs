//! HMAC (Hash-based Message Authentication Code) contexts
//!
//! RFC 2104 keyed hashing over every supported digest. Keys of any length
//! are accepted; keys longer than the digest block size are hashed first, as
//! the RFC requires.

use cryptkit_api::{CryptStatus, DigestContext, DigestKind};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Incremental state of a keyed digest
#[derive(Clone)]
pub enum HmacContext {
    /// HMAC-MD5 state
    Md5(Hmac<Md5>),
    /// HMAC-SHA-1 state
    Sha1(Hmac<Sha1>),
    /// HMAC-SHA-224 state
    Sha224(Hmac<Sha224>),
    /// HMAC-SHA-256 state
    Sha256(Hmac<Sha256>),
    /// HMAC-SHA-384 state
    Sha384(Hmac<Sha384>),
    /// HMAC-SHA-512 state
    Sha512(Hmac<Sha512>),
}

fn keyed<M: KeyInit>(key: &[u8]) -> Result<M, CryptStatus> {
    <M as KeyInit>::new_from_slice(key).map_err(|_| CryptStatus::KeySizeError)
}

impl HmacContext {
    /// Create a new HMAC context for `kind` keyed with `key`
    pub fn new(kind: DigestKind, key: &[u8]) -> Result<Self, CryptStatus> {
        Ok(match kind {
            DigestKind::Md5 => Self::Md5(keyed(key)?),
            DigestKind::Sha1 => Self::Sha1(keyed(key)?),
            DigestKind::Sha224 => Self::Sha224(keyed(key)?),
            DigestKind::Sha256 => Self::Sha256(keyed(key)?),
            DigestKind::Sha384 => Self::Sha384(keyed(key)?),
            DigestKind::Sha512 => Self::Sha512(keyed(key)?),
        })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(m) => Mac::update(m, data),
            Self::Sha1(m) => Mac::update(m, data),
            Self::Sha224(m) => Mac::update(m, data),
            Self::Sha256(m) => Mac::update(m, data),
            Self::Sha384(m) => Mac::update(m, data),
            Self::Sha512(m) => Mac::update(m, data),
        }
    }

    /// Finalise and return the tag
    pub fn finish(self) -> Vec<u8> {
        match self {
            Self::Md5(m) => m.finalize().into_bytes().to_vec(),
            Self::Sha1(m) => m.finalize().into_bytes().to_vec(),
            Self::Sha224(m) => m.finalize().into_bytes().to_vec(),
            Self::Sha256(m) => m.finalize().into_bytes().to_vec(),
            Self::Sha384(m) => m.finalize().into_bytes().to_vec(),
            Self::Sha512(m) => m.finalize().into_bytes().to_vec(),
        }
    }

    /// One-shot MAC helper
    pub fn mac(kind: DigestKind, key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptStatus> {
        let mut h = Self::new(kind, key)?;
        h.update(data);
        Ok(h.finish())
    }
}

impl DigestContext for HmacContext {
    fn update(&mut self, data: &[u8]) {
        HmacContext::update(self, data)
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        (*self).finish()
    }
}

#[cfg(test)]
mod tests;
