//! Shared fixtures for the cryptkit integration tests and benchmarks

use std::io::{self, Read};

use cryptkit_api::{
    CipherKind, CipherProvider, CryptCall, CryptStatus, DigestContext, DigestKind, DigestProvider,
};
use cryptkit_symmetric::resolve;

/// Data lengths every block cipher round trip is checked at
pub fn length_classes(block_size: usize) -> Vec<usize> {
    vec![1, block_size - 1, block_size, block_size + 1, block_size * 5 + 3]
}

/// A key the provider accepts for `kind` without normalization
pub fn native_key(kind: CipherKind) -> Vec<u8> {
    let len = resolve(kind, 16).key_size;
    (0..len).map(|i| (i as u8).wrapping_mul(13).wrapping_add(1)).collect()
}

/// Reader that hands out at most `chunk` bytes per call
pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        Self { data, chunk }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.len().min(self.chunk).min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Provider whose every cipher call and HMAC init fails with `status`
#[derive(Debug, Clone, Copy)]
pub struct FailingProvider {
    pub status: CryptStatus,
}

impl CipherProvider for FailingProvider {
    fn crypt(&self, _call: CryptCall<'_>, _output: &mut [u8]) -> Result<usize, CryptStatus> {
        Err(self.status)
    }
}

impl DigestProvider for FailingProvider {
    fn digest_init(&self, kind: DigestKind) -> Box<dyn DigestContext> {
        cryptkit_algorithms::RustCryptoProvider.digest_init(kind)
    }

    fn hmac_init(
        &self,
        _kind: DigestKind,
        _key: &[u8],
    ) -> Result<Box<dyn DigestContext>, CryptStatus> {
        Err(self.status)
    }
}
