//! Trusted primitive provider for cryptkit
//!
//! This crate supplies the primitives the cryptkit engines treat as a black
//! box: MD5, SHA-1 and SHA-2 digest contexts, HMAC contexts, and a one-shot
//! block/stream cipher transform with CommonCrypto option semantics. The
//! cipher and hash math comes from the RustCrypto crates; this crate only
//! selects algorithms, modes and padding and maps failures to
//! [`CryptStatus`](cryptkit_api::CryptStatus) codes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Block cipher dispatch (ECB/CBC, PKCS#7 or no padding)
pub mod block;

// Digest contexts
pub mod hash;
pub use hash::HashContext;

// MAC contexts
pub mod mac;
pub use mac::HmacContext;

// Stream cipher dispatch
pub mod stream;

// Provider tying the above to the API traits
pub mod provider;
pub use provider::RustCryptoProvider;
