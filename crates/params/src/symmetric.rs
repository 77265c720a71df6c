//! Constants for symmetric encryption algorithms

/* Operation */

/// `kCCEncrypt`
pub const OP_ENCRYPT: u32 = 0;

/// `kCCDecrypt`
pub const OP_DECRYPT: u32 = 1;

/* Algorithm identifiers */

/// `kCCAlgorithmAES128` (also used for AES-192 and AES-256)
pub const ALG_AES: u32 = 0;

/// `kCCAlgorithmDES`
pub const ALG_DES: u32 = 1;

/// `kCCAlgorithm3DES`
pub const ALG_3DES: u32 = 2;

/// `kCCAlgorithmCAST`
pub const ALG_CAST: u32 = 3;

/// `kCCAlgorithmRC4`
pub const ALG_RC4: u32 = 4;

/// `kCCAlgorithmRC2`
pub const ALG_RC2: u32 = 5;

/// `kCCAlgorithmBlowfish`
pub const ALG_BLOWFISH: u32 = 6;

/* Option bits */

/// `kCCOptionPKCS7Padding`
pub const OPTION_PKCS7_PADDING: u32 = 0x0001;

/// `kCCOptionECBMode`
pub const OPTION_ECB_MODE: u32 = 0x0002;

/* Block sizes */

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// Triple-DES block size in bytes
pub const TRIPLE_DES_BLOCK_SIZE: usize = 8;

/// CAST-128 block size in bytes
pub const CAST_BLOCK_SIZE: usize = 8;

/// Nominal RC4 block size used for buffer sizing (RC4 is a stream cipher)
pub const RC4_BLOCK_SIZE: usize = 8;

/// RC2 block size in bytes
pub const RC2_BLOCK_SIZE: usize = 8;

/// Blowfish block size in bytes
pub const BLOWFISH_BLOCK_SIZE: usize = 8;

/* Key sizes */

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

/// Triple-DES (EDE3) key size in bytes
pub const TRIPLE_DES_KEY_SIZE: usize = 24;

/// Minimum CAST-128 key size in bytes
pub const CAST_MIN_KEY_SIZE: usize = 5;

/// Maximum CAST-128 key size in bytes
pub const CAST_MAX_KEY_SIZE: usize = 16;

/// Minimum RC4 key size in bytes
pub const RC4_MIN_KEY_SIZE: usize = 1;

/// Maximum RC4 key size in bytes
pub const RC4_MAX_KEY_SIZE: usize = 512;

/// Number of RC4 key bytes the key schedule actually reads
pub const RC4_SCHEDULE_KEY_SIZE: usize = 256;

/// Minimum RC2 key size in bytes
pub const RC2_MIN_KEY_SIZE: usize = 1;

/// Maximum RC2 key size in bytes
pub const RC2_MAX_KEY_SIZE: usize = 128;

/// Minimum Blowfish key size in bytes
pub const BLOWFISH_MIN_KEY_SIZE: usize = 8;

/// Maximum Blowfish key size in bytes
pub const BLOWFISH_MAX_KEY_SIZE: usize = 56;
