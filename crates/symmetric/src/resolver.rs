//! Cipher parameter resolution
//!
//! Maps a cipher kind and the length of the caller's key onto the
//! CommonCrypto algorithm id, the block size, and the number of key bytes
//! the algorithm consumes.

use cryptkit_api::CipherKind;
use cryptkit_params::symmetric::*;
use log::debug;

/// Algorithm id, block size and normalized key size for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParameters {
    pub kind: CipherKind,
    /// CommonCrypto algorithm identifier
    pub algorithm: u32,
    pub block_size: usize,
    /// Key bytes handed to the provider
    pub key_size: usize,
}

/// Resolve parameters for `kind` given a key of `supplied_key_len` bytes
///
/// AES picks the smallest of 128/192/256 bits that holds the supplied key
/// and falls back to 256 for anything longer. DES and 3DES are fixed. The
/// variable-key ciphers clamp into their valid range. RC4 has no block, but
/// reports 8 so buffer sizing stays uniform.
pub fn resolve(kind: CipherKind, supplied_key_len: usize) -> CipherParameters {
    let (block_size, key_size) = match kind {
        CipherKind::Aes => (
            AES_BLOCK_SIZE,
            if supplied_key_len <= AES128_KEY_SIZE {
                AES128_KEY_SIZE
            } else if supplied_key_len <= AES192_KEY_SIZE {
                AES192_KEY_SIZE
            } else {
                AES256_KEY_SIZE
            },
        ),
        CipherKind::Des => (DES_BLOCK_SIZE, DES_KEY_SIZE),
        CipherKind::TripleDes => (TRIPLE_DES_BLOCK_SIZE, TRIPLE_DES_KEY_SIZE),
        CipherKind::Cast => (
            CAST_BLOCK_SIZE,
            supplied_key_len.clamp(CAST_MIN_KEY_SIZE, CAST_MAX_KEY_SIZE),
        ),
        CipherKind::Rc4 => (
            RC4_BLOCK_SIZE,
            supplied_key_len.clamp(RC4_MIN_KEY_SIZE, RC4_MAX_KEY_SIZE),
        ),
        CipherKind::Rc2 => (
            RC2_BLOCK_SIZE,
            supplied_key_len.clamp(RC2_MIN_KEY_SIZE, RC2_MAX_KEY_SIZE),
        ),
        CipherKind::Blowfish => (
            BLOWFISH_BLOCK_SIZE,
            supplied_key_len.clamp(BLOWFISH_MIN_KEY_SIZE, BLOWFISH_MAX_KEY_SIZE),
        ),
    };

    let params = CipherParameters {
        kind,
        algorithm: kind.algorithm_id(),
        block_size,
        key_size,
    };
    debug!(
        "{}: {} byte key resolved to {} bytes, block size {}",
        kind, supplied_key_len, key_size, block_size
    );
    params
}
