//! # cryptkit
//!
//! Hashing and symmetric encryption over trusted primitives, with
//! CommonCrypto-compatible parameters.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cryptkit = "0.3"
//! ```
//!
//! ```
//! use cryptkit::prelude::*;
//!
//! let engine = HashEngine::new(HashConfig::new(DigestKind::Sha256)).unwrap();
//! let request = HashRequest::from_data(b"abc", DigestKind::Sha256, None);
//! assert_eq!(engine.hex_digest(&request).unwrap().len(), 64);
//!
//! let key = generate_random_key(KeyKind::Aes256).unwrap();
//! let sealed = cryptkit::codec::aes_encrypt_str("hello, world!", &key).unwrap();
//! let opened = cryptkit::codec::aes_decrypt_str(&sealed, &key).unwrap();
//! assert_eq!(opened, b"hello, world!");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the kinds and configuration structs
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`cryptkit-api`]: error type, value types and provider traits
//! - [`cryptkit-params`]: algorithm constants
//! - [`cryptkit-algorithms`]: the default RustCrypto-backed provider
//! - [`cryptkit-symmetric`]: parameter resolution and the cipher engine
//! - [`cryptkit-hash`]: buffer and file hashing
//! - [`cryptkit-utils`]: encodings and random keys

#![forbid(unsafe_code)]

pub use cryptkit_algorithms as algorithms;
pub use cryptkit_api as api;
pub use cryptkit_hash as hash;
pub use cryptkit_params as params;
pub use cryptkit_symmetric as symmetric;
pub use cryptkit_utils as utils;

pub mod codec;

/// Common imports for cryptkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Value types
    pub use crate::api::{CipherKind, CipherOptions, CipherOutput, CryptStatus, DigestKind, Operation};

    // Provider seam
    pub use crate::algorithms::RustCryptoProvider;
    pub use crate::api::{CipherProvider, DigestContext, DigestProvider};

    // Engines
    pub use crate::hash::{HashConfig, HashEngine, HashRequest, HashSource};
    pub use crate::symmetric::{CipherConfig, CipherRequest, SymmetricCipher};

    // Keys
    pub use crate::utils::{generate_random_key, random_data, random_key, KeyKind};
}

pub use prelude::*;
