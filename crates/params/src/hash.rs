//! Constants for hash functions and HMAC

/// Output size of MD5 in bytes
pub const MD5_OUTPUT_SIZE: usize = 16;

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Default size of each sequential read when hashing a file
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// `kCCHmacAlgSHA1`
pub const HMAC_ALG_SHA1: u32 = 0;

/// `kCCHmacAlgMD5`
pub const HMAC_ALG_MD5: u32 = 1;

/// `kCCHmacAlgSHA256`
pub const HMAC_ALG_SHA256: u32 = 2;

/// `kCCHmacAlgSHA384`
pub const HMAC_ALG_SHA384: u32 = 3;

/// `kCCHmacAlgSHA512`
pub const HMAC_ALG_SHA512: u32 = 4;

/// `kCCHmacAlgSHA224`
pub const HMAC_ALG_SHA224: u32 = 5;
