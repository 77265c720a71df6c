//! Error handling for symmetric cipher operations
//!
//! The engine reports through the API error system; this module adds the
//! conversion from a provider status.

pub use cryptkit_api::error::{validate, Error, Result, ResultExt};

use cryptkit_api::{CryptStatus, Operation};

/// Context string attached to failures of `operation`
pub const fn operation_context(operation: Operation) -> &'static str {
    match operation {
        Operation::Encrypt => "encryption",
        Operation::Decrypt => "decryption",
    }
}

/// Convert a provider status into an API error
pub fn from_status(operation: Operation, status: CryptStatus) -> Error {
    Error::CipherOperationFailed {
        context: operation_context(operation),
        status,
    }
}

/// Extension trait mapping provider results into API results
pub trait StatusResultExt<T> {
    /// Convert a `CryptStatus` failure for `operation` into an API error
    fn map_status(self, operation: Operation) -> Result<T>;
}

impl<T> StatusResultExt<T> for core::result::Result<T, CryptStatus> {
    fn map_status(self, operation: Operation) -> Result<T> {
        self.map_err(|status| from_status(operation, status))
    }
}
