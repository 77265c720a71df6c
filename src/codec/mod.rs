//! String and byte conveniences
//!
//! Free functions for the common one-liners: hex digests of bytes or UTF-8
//! text, and AES in ECB mode with PKCS#7 padding under a base64 key.
//! Ciphertext produced by [`aes_encrypt`] is base64; [`aes_decrypt`] takes
//! the raw ciphertext bytes and returns raw plaintext.

use cryptkit_algorithms::RustCryptoProvider;
use cryptkit_api::error::ResultExt;
use cryptkit_api::{CipherKind, DigestKind, DigestProvider, Result};
use cryptkit_symmetric::SymmetricCipher;
use cryptkit_utils::encoding::{from_base64, to_base64, to_hex};
use log::debug;
use zeroize::Zeroizing;

/// Lowercase hex digest of `input` under `kind`
///
/// `&str` input is hashed as its UTF-8 bytes.
pub fn hash_hex(input: impl AsRef<[u8]>, kind: DigestKind) -> String {
    to_hex(RustCryptoProvider.digest(kind, input.as_ref()))
}

pub fn md5_hex(input: impl AsRef<[u8]>) -> String {
    hash_hex(input, DigestKind::Md5)
}

pub fn sha1_hex(input: impl AsRef<[u8]>) -> String {
    hash_hex(input, DigestKind::Sha1)
}

pub fn sha224_hex(input: impl AsRef<[u8]>) -> String {
    hash_hex(input, DigestKind::Sha224)
}

pub fn sha256_hex(input: impl AsRef<[u8]>) -> String {
    hash_hex(input, DigestKind::Sha256)
}

pub fn sha384_hex(input: impl AsRef<[u8]>) -> String {
    hash_hex(input, DigestKind::Sha384)
}

pub fn sha512_hex(input: impl AsRef<[u8]>) -> String {
    hash_hex(input, DigestKind::Sha512)
}

fn aes() -> SymmetricCipher {
    SymmetricCipher::for_kind(CipherKind::Aes)
}

fn decode_key(key_b64: &str) -> Result<Zeroizing<Vec<u8>>> {
    from_base64(key_b64).with_context("base64 key").map(Zeroizing::new)
}

/// AES-ECB/PKCS#7 encrypt `data` under a base64 key, returning base64
pub fn aes_encrypt(data: &[u8], key_b64: &str) -> Result<String> {
    let key = decode_key(key_b64)?;
    debug!("AES encrypt, {} byte key", key.len());
    aes().encrypt(data, &key[..], None).map(to_base64)
}

/// AES-ECB/PKCS#7 decrypt raw `ciphertext` under a base64 key
pub fn aes_decrypt(ciphertext: &[u8], key_b64: &str) -> Result<Vec<u8>> {
    let key = decode_key(key_b64)?;
    debug!("AES decrypt, {} byte key", key.len());
    aes().decrypt(ciphertext, &key[..], None)
}

/// AES-encrypt UTF-8 `content`, returning base64 ciphertext
pub fn aes_encrypt_str(content: &str, key_b64: &str) -> Result<String> {
    aes().encrypt_string(content, key_b64, None)
}

/// AES-decrypt base64 `content_b64`, returning the raw plaintext bytes
pub fn aes_decrypt_str(content_b64: &str, key_b64: &str) -> Result<Vec<u8>> {
    aes().decrypt_string(content_b64, key_b64, None)
}
