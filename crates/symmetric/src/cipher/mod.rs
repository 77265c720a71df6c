//! The symmetric cipher engine
//!
//! [`SymmetricCipher`] turns a [`CipherRequest`] into a single call of the
//! provider's one-shot transform:
//!
//! 1. empty data or key is rejected
//! 2. parameters are resolved from the key length
//! 3. padding follows the request and the mode follows the IV: ECB when no
//!    IV is given, CBC with the IV otherwise
//! 4. the key is zero-extended or truncated to the resolved size
//! 5. the provider writes into a buffer of `data.len() + block_size` bytes
//!    and the result is truncated to the length it reports

use cryptkit_algorithms::RustCryptoProvider;
use cryptkit_api::{
    CipherKind, CipherOptions, CipherOutput, CipherProvider, CryptCall, CryptStatus, Operation,
};
use cryptkit_api::error::{validate, Error, Result, ResultExt};
use cryptkit_utils::encoding::{from_base64, to_base64};
use log::{debug, warn};
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{operation_context, StatusResultExt};
use crate::resolver::resolve;

/// Per-engine cipher settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CipherConfig {
    pub kind: CipherKind,
    /// Disable PKCS#7 padding; data must then be block aligned
    pub no_padding: bool,
}

impl CipherConfig {
    pub fn new(kind: CipherKind) -> Self {
        Self {
            kind,
            no_padding: false,
        }
    }

    /// Same cipher with padding switched off
    pub fn without_padding(mut self) -> Self {
        self.no_padding = true;
        self
    }
}

/// A single encrypt or decrypt call
#[derive(Clone, Copy)]
pub struct CipherRequest<'a> {
    pub operation: Operation,
    pub data: &'a [u8],
    pub key: &'a [u8],
    /// Selects CBC when present, ECB when absent
    pub iv: Option<&'a [u8]>,
    pub padding: bool,
}

impl core::fmt::Debug for CipherRequest<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CipherRequest")
            .field("operation", &self.operation)
            .field("data_len", &self.data.len())
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.map(<[u8]>::len))
            .field("padding", &self.padding)
            .finish()
    }
}

/// Symmetric encryption engine over a primitive provider
#[derive(Debug, Clone, Default)]
pub struct SymmetricCipher<P = RustCryptoProvider> {
    config: CipherConfig,
    provider: P,
}

impl SymmetricCipher<RustCryptoProvider> {
    /// Engine for `config` backed by the RustCrypto provider
    pub fn new(config: CipherConfig) -> Self {
        Self::with_provider(config, RustCryptoProvider)
    }

    /// Engine for `kind` with padding enabled
    pub fn for_kind(kind: CipherKind) -> Self {
        Self::new(CipherConfig::new(kind))
    }
}

impl<P: CipherProvider> SymmetricCipher<P> {
    /// Engine for `config` backed by `provider`
    pub fn with_provider(config: CipherConfig, provider: P) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    pub fn kind(&self) -> CipherKind {
        self.config.kind
    }

    /// Build a request using this engine's padding setting
    pub fn request<'a>(
        &self,
        operation: Operation,
        data: &'a [u8],
        key: &'a [u8],
        iv: Option<&'a [u8]>,
    ) -> CipherRequest<'a> {
        CipherRequest {
            operation,
            data,
            key,
            iv,
            padding: !self.config.no_padding,
        }
    }

    /// Run one transform
    pub fn transform(&self, request: CipherRequest<'_>) -> Result<CipherOutput> {
        let context = operation_context(request.operation);
        if let Err(e) = validate::non_empty("cipher data", request.data)
            .and_then(|_| validate::non_empty("cipher key", request.key))
        {
            warn!("{} rejected: {}", context, e);
            return Err(e);
        }

        let kind = self.config.kind;
        let params = resolve(kind, request.key.len());

        let mut options = CipherOptions::NONE;
        if request.padding {
            options |= CipherOptions::PKCS7_PADDING;
        }
        let iv: &[u8] = match request.iv {
            Some(iv) => {
                validate::length("initialization vector", iv.len(), params.block_size)?;
                iv
            }
            None => {
                options |= CipherOptions::ECB_MODE;
                &[]
            }
        };

        let mut key = Zeroizing::new(vec![0u8; params.key_size]);
        let copied = request.key.len().min(params.key_size);
        key[..copied].copy_from_slice(&request.key[..copied]);

        let mut output = vec![0u8; request.data.len() + params.block_size];
        debug!(
            "{} {}: {} bytes in, options {:#06x}, output capacity {}",
            kind,
            context,
            request.data.len(),
            options.bits(),
            output.len()
        );

        let call = CryptCall {
            operation: request.operation,
            algorithm: params.algorithm,
            options,
            key: &key[..],
            iv,
            input: request.data,
        };
        let produced = self
            .provider
            .crypt(call, &mut output)
            .map_status(request.operation)
            .map_err(|e| {
                warn!("{} {} failed: {}", kind, context, e);
                e
            })?;

        if produced > output.len() {
            return Err(Error::CipherOperationFailed {
                context,
                status: CryptStatus::BufferTooSmall,
            });
        }
        Ok(CipherOutput::from_buffer(output, produced))
    }

    /// Encrypt `data`, in CBC mode when `iv` is given
    pub fn encrypt(&self, data: &[u8], key: &[u8], iv: Option<&[u8]>) -> Result<Vec<u8>> {
        self.transform(self.request(Operation::Encrypt, data, key, iv))
            .map(CipherOutput::into_vec)
    }

    /// Decrypt `data`, in CBC mode when `iv` is given
    pub fn decrypt(&self, data: &[u8], key: &[u8], iv: Option<&[u8]>) -> Result<Vec<u8>> {
        self.transform(self.request(Operation::Decrypt, data, key, iv))
            .map(CipherOutput::into_vec)
    }

    /// Encrypt UTF-8 `content` under a base64 key, returning base64 ciphertext
    ///
    /// A malformed key fails with `Error::Decoding`. Match on
    /// [`Error::is_invalid_input`] to catch it alongside empty input.
    pub fn encrypt_string(&self, content: &str, key_b64: &str, iv: Option<&[u8]>) -> Result<String> {
        let key = Zeroizing::new(from_base64(key_b64).with_context("base64 key")?);
        let ciphertext = self.encrypt(content.as_bytes(), &key[..], iv)?;
        Ok(to_base64(ciphertext))
    }

    /// Decrypt base64 `content` under a base64 key
    ///
    /// The plaintext comes back as raw bytes, not re-encoded. Malformed base64
    /// in either argument fails with `Error::Decoding`, which
    /// [`Error::is_invalid_input`] reports as invalid input.
    pub fn decrypt_string(&self, content_b64: &str, key_b64: &str, iv: Option<&[u8]>) -> Result<Vec<u8>> {
        let ciphertext = from_base64(content_b64).with_context("base64 content")?;
        let key = Zeroizing::new(from_base64(key_b64).with_context("base64 key")?);
        self.decrypt(&ciphertext, &key[..], iv)
    }
}
