//! The hash engine
//!
//! Buffers are hashed in one provider call. Files and readers go through
//! [`HashEngine::digest_reader`], which pulls `chunk_size` bytes at a time
//! into one digest or HMAC context and finalizes it at end of stream. A
//! failed read aborts the loop with [`Error::Io`]; only `Ok(0)` counts as
//! end of stream.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use cryptkit_algorithms::RustCryptoProvider;
use cryptkit_api::error::validate;
use cryptkit_api::{DigestContext, DigestKind, DigestProvider, Error, Result};
use cryptkit_params::hash::DEFAULT_CHUNK_SIZE;
use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::request::{HashRequest, HashSource};

/// Per-engine hashing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HashConfig {
    /// Algorithm used by [`HashEngine::request`]
    pub kind: DigestKind,
    /// Bytes read per update when hashing a stream
    pub chunk_size: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            kind: DigestKind::Md5,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl HashConfig {
    pub fn new(kind: DigestKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        validate::parameter(self.chunk_size > 0, "chunk size", "must be at least one byte")
    }
}

/// Digest and HMAC engine over a primitive provider
#[derive(Debug, Clone)]
pub struct HashEngine<P = RustCryptoProvider> {
    config: HashConfig,
    provider: P,
}

impl Default for HashEngine<RustCryptoProvider> {
    fn default() -> Self {
        Self {
            config: HashConfig::default(),
            provider: RustCryptoProvider,
        }
    }
}

impl HashEngine<RustCryptoProvider> {
    /// Engine for `config` backed by the RustCrypto provider
    pub fn new(config: HashConfig) -> Result<Self> {
        Self::with_provider(config, RustCryptoProvider)
    }
}

impl<P: DigestProvider> HashEngine<P> {
    /// Engine for `config` backed by `provider`
    pub fn with_provider(config: HashConfig, provider: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, provider })
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// An empty request using the configured algorithm
    pub fn request<'a>(&self) -> HashRequest<'a> {
        HashRequest::new(self.config.kind)
    }

    /// Digest bytes for `request`
    pub fn digest(&self, request: &HashRequest<'_>) -> Result<Vec<u8>> {
        match request.source() {
            Some(HashSource::Data(data)) => self.digest_bytes(data, request.kind, request.hmac_key),
            Some(HashSource::File(path)) => self.digest_file(path, request.kind, request.hmac_key),
            None => {
                warn!("hash request without a source: {:?}", request);
                Err(Error::UnknownHashSource)
            }
        }
    }

    /// Lowercase hex digest for `request`
    pub fn hex_digest(&self, request: &HashRequest<'_>) -> Result<String> {
        self.digest(request).map(hex::encode)
    }

    /// Digest an in-memory buffer in a single call
    pub fn digest_bytes(&self, data: &[u8], kind: DigestKind, hmac_key: Option<&[u8]>) -> Result<Vec<u8>> {
        trace!("{} over {} bytes, keyed: {}", kind, data.len(), hmac_key.is_some());
        match hmac_key {
            Some(key) => self
                .provider
                .hmac(kind, key, data)
                .map_err(|status| Error::CipherOperationFailed {
                    context: "HMAC",
                    status,
                }),
            None => Ok(self.provider.digest(kind, data)),
        }
    }

    /// Digest the file at `path` chunk by chunk
    ///
    /// The file is closed when this returns, whatever the outcome.
    pub fn digest_file(&self, path: &Path, kind: DigestKind, hmac_key: Option<&[u8]>) -> Result<Vec<u8>> {
        let file = File::open(path).map_err(|source| {
            warn!("cannot open {}: {}", path.display(), source);
            Error::FileOpenFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("{} over {}", kind, path.display());
        self.digest_reader(file, kind, hmac_key)
    }

    /// Digest everything `reader` yields, `chunk_size` bytes at a time
    pub fn digest_reader<R: Read>(
        &self,
        mut reader: R,
        kind: DigestKind,
        hmac_key: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let mut ctx = self.context(kind, hmac_key)?;
        let mut buf = vec![0u8; self.config.chunk_size];
        let mut chunks = 0usize;
        let mut total = 0u64;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    warn!("read failed after {} bytes: {}", total, source);
                    return Err(Error::Io {
                        context: "reading hash input",
                        source,
                    });
                }
            };
            trace!("chunk {}: {} bytes", chunks, n);
            ctx.update(&buf[..n]);
            chunks += 1;
            total += n as u64;
        }

        debug!("{}: {} bytes in {} chunks", kind, total, chunks);
        Ok(ctx.finalize())
    }

    fn context(&self, kind: DigestKind, hmac_key: Option<&[u8]>) -> Result<Box<dyn DigestContext>> {
        match hmac_key {
            Some(key) => self
                .provider
                .hmac_init(kind, key)
                .map_err(|status| Error::CipherOperationFailed {
                    context: "HMAC initialisation",
                    status,
                }),
            None => Ok(self.provider.digest_init(kind)),
        }
    }
}
