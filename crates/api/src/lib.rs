//! Public API traits and types for the cryptkit library
//!
//! This crate provides the public API surface shared by every cryptkit
//! component: the unified error type, the value types that describe a
//! digest or cipher call, and the traits through which the engines reach
//! the trusted primitive provider.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{CipherProvider, CryptCall, DigestContext, DigestProvider};

// Re-export trait modules for direct access
pub use traits::provider;
