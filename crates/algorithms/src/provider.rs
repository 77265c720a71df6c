//! The default primitive provider
//!
//! [`RustCryptoProvider`] implements the API provider traits on top of the
//! RustCrypto crates. It is stateless; every call builds its cipher or
//! digest state from scratch and drops it before returning.

use aes::{Aes128, Aes192, Aes256};
use blowfish::Blowfish;
use cast5::Cast5;
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit};
use cryptkit_api::{
    CipherKind, CipherProvider, CryptCall, CryptStatus, DigestContext, DigestKind, DigestProvider,
    Operation,
};
use cryptkit_params::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, BLOWFISH_MAX_KEY_SIZE,
    BLOWFISH_MIN_KEY_SIZE, CAST_MAX_KEY_SIZE, CAST_MIN_KEY_SIZE, RC2_MAX_KEY_SIZE,
    RC2_MIN_KEY_SIZE,
};
use des::{Des, TdesEde3};
use log::trace;
use rc2::Rc2;

use crate::block::{self, Mode};
use crate::hash::HashContext;
use crate::mac::HmacContext;
use crate::stream::rc4;

/// Provider backed by the RustCrypto cipher and digest crates
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    /// Create a provider
    pub const fn new() -> Self {
        Self
    }
}

fn keyed<C: KeyInit>(key: &[u8]) -> Result<C, CryptStatus> {
    C::new_from_slice(key).map_err(|_| CryptStatus::KeySizeError)
}

fn check_key_range(key: &[u8], min: usize, max: usize) -> Result<(), CryptStatus> {
    if (min..=max).contains(&key.len()) {
        Ok(())
    } else {
        Err(CryptStatus::KeySizeError)
    }
}

fn run_block<C>(cipher: C, call: &CryptCall<'_>, output: &mut [u8]) -> Result<usize, CryptStatus>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut,
{
    let mode = if call.options.ecb_mode() {
        Mode::Ecb
    } else {
        Mode::Cbc(call.iv)
    };
    let padding = call.options.pkcs7_padding();

    match call.operation {
        Operation::Encrypt => block::encrypt(cipher, mode, padding, call.input, output),
        Operation::Decrypt => block::decrypt(cipher, mode, padding, call.input, output),
    }
}

impl CipherProvider for RustCryptoProvider {
    fn crypt(&self, call: CryptCall<'_>, output: &mut [u8]) -> Result<usize, CryptStatus> {
        let kind = CipherKind::from_algorithm_id(call.algorithm).ok_or(CryptStatus::ParamError)?;
        trace!("{} {:?}", kind, call);

        let key = call.key;
        match kind {
            CipherKind::Aes => match key.len() {
                AES128_KEY_SIZE => run_block(keyed::<Aes128>(key)?, &call, output),
                AES192_KEY_SIZE => run_block(keyed::<Aes192>(key)?, &call, output),
                AES256_KEY_SIZE => run_block(keyed::<Aes256>(key)?, &call, output),
                _ => Err(CryptStatus::KeySizeError),
            },
            CipherKind::Des => run_block(keyed::<Des>(key)?, &call, output),
            CipherKind::TripleDes => run_block(keyed::<TdesEde3>(key)?, &call, output),
            CipherKind::Cast => {
                check_key_range(key, CAST_MIN_KEY_SIZE, CAST_MAX_KEY_SIZE)?;
                run_block(keyed::<Cast5>(key)?, &call, output)
            }
            CipherKind::Rc2 => {
                check_key_range(key, RC2_MIN_KEY_SIZE, RC2_MAX_KEY_SIZE)?;
                // Effective key bits follow the supplied key length
                run_block(Rc2::new_with_eff_key_len(key, key.len() * 8), &call, output)
            }
            CipherKind::Blowfish => {
                check_key_range(key, BLOWFISH_MIN_KEY_SIZE, BLOWFISH_MAX_KEY_SIZE)?;
                run_block(keyed::<Blowfish>(key)?, &call, output)
            }
            CipherKind::Rc4 => rc4::apply(key, call.input, output),
        }
    }
}

impl DigestProvider for RustCryptoProvider {
    fn digest_init(&self, kind: DigestKind) -> Box<dyn DigestContext> {
        trace!("{} digest init", kind);
        Box::new(HashContext::new(kind))
    }

    fn hmac_init(
        &self,
        kind: DigestKind,
        key: &[u8],
    ) -> Result<Box<dyn DigestContext>, CryptStatus> {
        trace!("HMAC-{} init, {} byte key", kind, key.len());
        Ok(Box::new(HmacContext::new(kind, key)?))
    }
}
