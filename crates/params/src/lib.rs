//! Constant values for cryptkit cryptographic operations
//!
//! Algorithm identifiers, option bits, status codes and key sizes use the
//! numeric values of Apple's CommonCrypto so that parameters chosen here
//! interoperate with data produced by `CCCrypt`/`CCHmac` callers.

#![no_std]

pub mod hash;
pub mod status;
pub mod symmetric;
