//! Hashing for the cryptkit library
//!
//! [`HashEngine`] computes MD5, SHA-1 and SHA-2 digests, plain or HMAC
//! keyed, over an in-memory buffer or a file. Files are read in fixed-size
//! chunks through a single update loop, so their size is never bounded by
//! memory.

#![forbid(unsafe_code)]

pub mod engine;
pub mod request;

pub use engine::{HashConfig, HashEngine};
pub use request::{HashRequest, HashSource};

// Re-export the API error system
pub use cryptkit_api::error::{Error, Result};
