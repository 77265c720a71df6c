//! Error type definitions for cryptkit operations

use std::io;
use std::path::PathBuf;

use crate::types::CryptStatus;

/// Primary error type for digest and cipher operations
///
/// Every failure is a returned value. The engines never substitute an empty
/// or zero-filled buffer for a result they could not compute.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty data or key, or an otherwise unusable argument
    #[error("invalid input: {context}: {message}")]
    InvalidInput {
        context: &'static str,
        message: String,
    },

    /// A buffer whose length does not match what the algorithm requires
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed base64, hex or UTF-8 handed to a string-oriented call
    #[error("decoding error: {context}: {message}")]
    Decoding {
        context: &'static str,
        message: String,
    },

    /// A hash request that names neither an in-memory buffer nor a file
    #[error("hash request has neither data nor a file path")]
    UnknownHashSource,

    /// The file to hash could not be opened for reading
    #[error("cannot open {} for reading: {source}", .path.display())]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed part-way through a stream
    #[error("I/O error: {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    /// The primitive provider returned a non-success status
    #[error("{context}: cipher operation failed with status {status}")]
    CipherOperationFailed {
        context: &'static str,
        status: CryptStatus,
    },

    /// The platform CSPRNG could not produce bytes
    #[error("random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptkit operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidInput` error
    pub fn invalid_input(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `Decoding` error
    pub fn decoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::Decoding {
            context,
            message: message.into(),
        }
    }

    /// Whether this error belongs to the invalid-input family
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::InvalidLength { .. } | Self::Decoding { .. }
        )
    }

    /// The provider status carried by a `CipherOperationFailed` error
    pub fn status(&self) -> Option<CryptStatus> {
        match self {
            Self::CipherOperationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Replace the context of an existing error
    ///
    /// Variants without a context field are returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Decoding { message, .. } => Self::Decoding { context, message },
            Self::Io { source, .. } => Self::Io { context, source },
            Self::CipherOperationFailed { status, .. } => {
                Self::CipherOperationFailed { context, status }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            other @ (Self::UnknownHashSource | Self::FileOpenFailed { .. }) => other,
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Self::Io {
            context: "I/O operation",
            source,
        }
    }
}
