//! Trait definitions for the trusted primitive provider
//!
//! The engines never implement cipher or hash math themselves. They hand
//! every transform to a provider through these traits, which keep the shape
//! of CommonCrypto's call contract (`CC_*_Init/Update/Final`, `CCHmac*` and
//! the one-shot `CCCrypt`).

use crate::types::{CipherOptions, CryptStatus, DigestKind, Operation};

/// Incremental digest or HMAC state owned by a single hashing call
pub trait DigestContext {
    /// Feed the next chunk of input
    fn update(&mut self, data: &[u8]);

    /// Consume the context and return the digest
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Provider of plain and keyed digests
pub trait DigestProvider {
    /// Start an unkeyed digest computation
    fn digest_init(&self, kind: DigestKind) -> Box<dyn DigestContext>;

    /// Start an HMAC computation keyed with `key`
    fn hmac_init(
        &self,
        kind: DigestKind,
        key: &[u8],
    ) -> core::result::Result<Box<dyn DigestContext>, CryptStatus>;

    /// One-shot digest of an in-memory buffer
    fn digest(&self, kind: DigestKind, data: &[u8]) -> Vec<u8> {
        let mut ctx = self.digest_init(kind);
        ctx.update(data);
        ctx.finalize()
    }

    /// One-shot HMAC of an in-memory buffer
    fn hmac(
        &self,
        kind: DigestKind,
        key: &[u8],
        data: &[u8],
    ) -> core::result::Result<Vec<u8>, CryptStatus> {
        let mut ctx = self.hmac_init(kind, key)?;
        ctx.update(data);
        Ok(ctx.finalize())
    }
}

/// Arguments of a one-shot cipher transform
#[derive(Clone, Copy)]
pub struct CryptCall<'a> {
    pub operation: Operation,
    /// CommonCrypto algorithm identifier
    pub algorithm: u32,
    pub options: CipherOptions,
    /// Exactly the number of key bytes the algorithm consumes
    pub key: &'a [u8],
    /// Empty when no IV is supplied
    pub iv: &'a [u8],
    pub input: &'a [u8],
}

impl core::fmt::Debug for CryptCall<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CryptCall")
            .field("operation", &self.operation)
            .field("algorithm", &self.algorithm)
            .field("options", &self.options)
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.len())
            .field("input_len", &self.input.len())
            .finish()
    }
}

/// Provider of the one-shot block and stream cipher transform
pub trait CipherProvider {
    /// Transform `call.input` into `output`
    ///
    /// Returns the number of bytes written to `output`. `output` may be
    /// larger than the meaningful result; callers truncate to the returned
    /// length.
    fn crypt(
        &self,
        call: CryptCall<'_>,
        output: &mut [u8],
    ) -> core::result::Result<usize, CryptStatus>;
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn digest_init(&self, kind: DigestKind) -> Box<dyn DigestContext> {
        (**self).digest_init(kind)
    }

    fn hmac_init(
        &self,
        kind: DigestKind,
        key: &[u8],
    ) -> core::result::Result<Box<dyn DigestContext>, CryptStatus> {
        (**self).hmac_init(kind, key)
    }
}

impl<P: CipherProvider + ?Sized> CipherProvider for &P {
    fn crypt(
        &self,
        call: CryptCall<'_>,
        output: &mut [u8],
    ) -> core::result::Result<usize, CryptStatus> {
        (**self).crypt(call, output)
    }
}
