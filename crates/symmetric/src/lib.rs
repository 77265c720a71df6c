//! Symmetric encryption for the cryptkit library
//!
//! This crate selects cipher parameters for a caller-supplied key, sizes
//! the output buffer, and drives the one-shot transform of a
//! [`CipherProvider`](cryptkit_api::CipherProvider). It uses the unified API
//! error system.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod error;
pub mod resolver;

// Re-export main types for convenience
pub use cipher::{CipherConfig, CipherRequest, SymmetricCipher};
pub use resolver::{resolve, CipherParameters};

// Re-export the API error system instead of custom error types
pub use cryptkit_api::error::{Error, Result};

// Re-export commonly used validation and error handling utilities
pub use cryptkit_api::error::{validate, ResultExt};
