//! Hash requests
//!
//! A request names one data source and an optional HMAC key. Setting a
//! source replaces the previous one, so a request never carries both a
//! buffer and a path. A request with no source is refused by the engine
//! with [`Error::UnknownHashSource`](cryptkit_api::Error::UnknownHashSource).

use std::path::Path;

use cryptkit_api::DigestKind;

/// Where the bytes to hash come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashSource<'a> {
    Data(&'a [u8]),
    File(&'a Path),
}

/// One hashing call
#[derive(Clone, Copy, Default)]
pub struct HashRequest<'a> {
    pub kind: DigestKind,
    /// Selects HMAC when present; an empty key is still a key
    pub hmac_key: Option<&'a [u8]>,
    source: Option<HashSource<'a>>,
}

impl<'a> HashRequest<'a> {
    /// A request for `kind` with no source yet
    pub fn new(kind: DigestKind) -> Self {
        Self {
            kind,
            hmac_key: None,
            source: None,
        }
    }

    /// Hash an in-memory buffer
    pub fn from_data(data: &'a [u8], kind: DigestKind, hmac_key: Option<&'a [u8]>) -> Self {
        Self {
            kind,
            hmac_key,
            source: Some(HashSource::Data(data)),
        }
    }

    /// Hash the contents of the file at `path`
    pub fn from_path<P: AsRef<Path> + ?Sized>(
        path: &'a P,
        kind: DigestKind,
        hmac_key: Option<&'a [u8]>,
    ) -> Self {
        Self {
            kind,
            hmac_key,
            source: Some(HashSource::File(path.as_ref())),
        }
    }

    pub fn with_data(mut self, data: &'a [u8]) -> Self {
        self.source = Some(HashSource::Data(data));
        self
    }

    pub fn with_path<P: AsRef<Path> + ?Sized>(mut self, path: &'a P) -> Self {
        self.source = Some(HashSource::File(path.as_ref()));
        self
    }

    pub fn with_hmac_key(mut self, key: &'a [u8]) -> Self {
        self.hmac_key = Some(key);
        self
    }

    pub fn source(&self) -> Option<HashSource<'a>> {
        self.source
    }

    pub fn is_keyed(&self) -> bool {
        self.hmac_key.is_some()
    }
}

impl core::fmt::Debug for HashRequest<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let source = match self.source {
            Some(HashSource::Data(data)) => format!("{} bytes", data.len()),
            Some(HashSource::File(path)) => path.display().to_string(),
            None => "none".to_string(),
        };
        f.debug_struct("HashRequest")
            .field("kind", &self.kind)
            .field("hmac_key_len", &self.hmac_key.map(<[u8]>::len))
            .field("source", &source)
            .finish()
    }
}
