//! RC4 keystream
//!
//! The RC4 key schedule reads `key[i % key.len()]` for `i` in `0..256`, so
//! any key is equivalent to itself repeated out to 256 bytes. Expanding the
//! key that way lets a single `Rc4<U256>` instance serve every key length
//! from 1 to 512 bytes; bytes past the 256th are never read.

use cipher::consts::U256;
use cipher::{KeyInit, StreamCipher};
use cryptkit_api::CryptStatus;
use cryptkit_params::symmetric::{RC4_MAX_KEY_SIZE, RC4_MIN_KEY_SIZE, RC4_SCHEDULE_KEY_SIZE};
use rc4::Rc4;
use zeroize::Zeroizing;

fn schedule_key(key: &[u8]) -> Zeroizing<[u8; RC4_SCHEDULE_KEY_SIZE]> {
    let mut expanded = Zeroizing::new([0u8; RC4_SCHEDULE_KEY_SIZE]);
    for (dst, src) in expanded.iter_mut().zip(key.iter().cycle()) {
        *dst = *src;
    }
    expanded
}

/// XOR the RC4 keystream for `key` over `input`, writing into `output`
///
/// Encryption and decryption are the same operation.
pub fn apply(key: &[u8], input: &[u8], output: &mut [u8]) -> Result<usize, CryptStatus> {
    if !(RC4_MIN_KEY_SIZE..=RC4_MAX_KEY_SIZE).contains(&key.len()) {
        return Err(CryptStatus::KeySizeError);
    }
    if output.len() < input.len() {
        return Err(CryptStatus::BufferTooSmall);
    }

    let expanded = schedule_key(key);
    let mut rc4 = Rc4::<U256>::new_from_slice(&expanded[..]).map_err(|_| CryptStatus::KeySizeError)?;

    let out = &mut output[..input.len()];
    out.copy_from_slice(input);
    rc4.apply_keystream(out);
    Ok(input.len())
}
