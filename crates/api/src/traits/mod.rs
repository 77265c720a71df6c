//! Traits at the seam between the engines and the primitive provider

pub mod provider;

pub use provider::{CipherProvider, CryptCall, DigestContext, DigestProvider};
