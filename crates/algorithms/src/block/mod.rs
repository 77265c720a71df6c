//! Block cipher modes and padding
//!
//! Drives any RustCrypto block cipher through ECB or CBC with optional
//! PKCS#7 padding, the two mode choices `CCCrypt` exposes. Length checks
//! happen up front so every failure maps onto a CommonCrypto status:
//!
//! * unpadded encryption of a partial block, or decryption of a partial
//!   block, is an `AlignmentError`
//! * an output buffer smaller than the transform needs is `BufferTooSmall`
//! * a final block whose PKCS#7 padding does not verify is a `DecodeError`

use cipher::block_padding::{NoPadding, Pkcs7};
use cipher::crypto_common::{InnerInit, InnerIvInit};
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut};
use cryptkit_api::CryptStatus;

/// Largest block size of the supported ciphers, in bytes
pub const MAX_BLOCK_SIZE: usize = 16;

/// Chaining mode of a block transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Electronic codebook: every block enciphered independently
    Ecb,
    /// Cipher block chaining with the given IV
    ///
    /// An empty IV stands for an all-zero one.
    Cbc(&'a [u8]),
}

/// Bytes of output an encryption of `input_len` bytes produces
pub fn encrypted_len(input_len: usize, block_size: usize, padding: bool) -> usize {
    if padding {
        (input_len / block_size + 1) * block_size
    } else {
        input_len
    }
}

fn zero_iv<'a>(iv: &'a [u8], zeros: &'a [u8; MAX_BLOCK_SIZE], block_size: usize) -> &'a [u8] {
    if iv.is_empty() {
        &zeros[..block_size]
    } else {
        iv
    }
}

/// Encrypt `input` into `output`, returning the ciphertext length
pub fn encrypt<C>(
    cipher: C,
    mode: Mode<'_>,
    padding: bool,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, CryptStatus>
where
    C: BlockCipher + BlockEncryptMut,
{
    let block_size = C::block_size();
    if !padding && input.len() % block_size != 0 {
        return Err(CryptStatus::AlignmentError);
    }
    if output.len() < encrypted_len(input.len(), block_size, padding) {
        return Err(CryptStatus::BufferTooSmall);
    }

    let written = match mode {
        Mode::Ecb => {
            let enc = ecb::Encryptor::<C>::inner_init(cipher);
            if padding {
                enc.encrypt_padded_b2b_mut::<Pkcs7>(input, output)
            } else {
                enc.encrypt_padded_b2b_mut::<NoPadding>(input, output)
            }
            .map_err(|_| CryptStatus::BufferTooSmall)?
            .len()
        }
        Mode::Cbc(iv) => {
            let zeros = [0u8; MAX_BLOCK_SIZE];
            let iv = zero_iv(iv, &zeros, block_size);
            let enc = cbc::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| CryptStatus::ParamError)?;
            if padding {
                enc.encrypt_padded_b2b_mut::<Pkcs7>(input, output)
            } else {
                enc.encrypt_padded_b2b_mut::<NoPadding>(input, output)
            }
            .map_err(|_| CryptStatus::BufferTooSmall)?
            .len()
        }
    };
    Ok(written)
}

/// Decrypt `input` into `output`, returning the plaintext length
pub fn decrypt<C>(
    cipher: C,
    mode: Mode<'_>,
    padding: bool,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, CryptStatus>
where
    C: BlockCipher + BlockDecryptMut,
{
    let block_size = C::block_size();
    if input.len() % block_size != 0 {
        return Err(CryptStatus::AlignmentError);
    }
    if output.len() < input.len() {
        return Err(CryptStatus::BufferTooSmall);
    }

    let written = match mode {
        Mode::Ecb => {
            let dec = ecb::Decryptor::<C>::inner_init(cipher);
            if padding {
                dec.decrypt_padded_b2b_mut::<Pkcs7>(input, output)
            } else {
                dec.decrypt_padded_b2b_mut::<NoPadding>(input, output)
            }
            .map_err(|_| CryptStatus::DecodeError)?
            .len()
        }
        Mode::Cbc(iv) => {
            let zeros = [0u8; MAX_BLOCK_SIZE];
            let iv = zero_iv(iv, &zeros, block_size);
            let dec = cbc::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| CryptStatus::ParamError)?;
            if padding {
                dec.decrypt_padded_b2b_mut::<Pkcs7>(input, output)
            } else {
                dec.decrypt_padded_b2b_mut::<NoPadding>(input, output)
            }
            .map_err(|_| CryptStatus::DecodeError)?
            .len()
        }
    };
    Ok(written)
}
