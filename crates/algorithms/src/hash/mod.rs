//! Digest contexts for the supported hash functions
//!
//! A [`HashContext`] is the init/update/finalize triad for one algorithm,
//! selected at runtime by [`DigestKind`].

use cryptkit_api::{DigestContext, DigestKind};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// Incremental state of an unkeyed digest
#[derive(Clone)]
pub enum HashContext {
    /// MD5 state
    Md5(Md5),
    /// SHA-1 state
    Sha1(Sha1),
    /// SHA-224 state
    Sha224(Sha224),
    /// SHA-256 state
    Sha256(Sha256),
    /// SHA-384 state
    Sha384(Sha384),
    /// SHA-512 state
    Sha512(Sha512),
}

impl HashContext {
    /// Initialise a fresh context for `kind`
    pub fn new(kind: DigestKind) -> Self {
        match kind {
            DigestKind::Md5 => Self::Md5(Md5::new()),
            DigestKind::Sha1 => Self::Sha1(Sha1::new()),
            DigestKind::Sha224 => Self::Sha224(Sha224::new()),
            DigestKind::Sha256 => Self::Sha256(Sha256::new()),
            DigestKind::Sha384 => Self::Sha384(Sha384::new()),
            DigestKind::Sha512 => Self::Sha512(Sha512::new()),
        }
    }

    /// Algorithm this context computes
    pub fn kind(&self) -> DigestKind {
        match self {
            Self::Md5(_) => DigestKind::Md5,
            Self::Sha1(_) => DigestKind::Sha1,
            Self::Sha224(_) => DigestKind::Sha224,
            Self::Sha256(_) => DigestKind::Sha256,
            Self::Sha384(_) => DigestKind::Sha384,
            Self::Sha512(_) => DigestKind::Sha512,
        }
    }

    /// Absorb `data`
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(h) => Digest::update(h, data),
            Self::Sha1(h) => Digest::update(h, data),
            Self::Sha224(h) => Digest::update(h, data),
            Self::Sha256(h) => Digest::update(h, data),
            Self::Sha384(h) => Digest::update(h, data),
            Self::Sha512(h) => Digest::update(h, data),
        }
    }

    /// Finish the computation and return the digest bytes
    pub fn finish(self) -> Vec<u8> {
        match self {
            Self::Md5(h) => h.finalize().to_vec(),
            Self::Sha1(h) => h.finalize().to_vec(),
            Self::Sha224(h) => h.finalize().to_vec(),
            Self::Sha256(h) => h.finalize().to_vec(),
            Self::Sha384(h) => h.finalize().to_vec(),
            Self::Sha512(h) => h.finalize().to_vec(),
        }
    }

    /// Convenience method to hash data in a single call
    pub fn digest(kind: DigestKind, data: &[u8]) -> Vec<u8> {
        let mut ctx = Self::new(kind);
        ctx.update(data);
        ctx.finish()
    }
}

impl DigestContext for HashContext {
    fn update(&mut self, data: &[u8]) {
        HashContext::update(self, data)
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        (*self).finish()
    }
}
