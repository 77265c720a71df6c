//! Value types describing digest and cipher calls
//!
//! All types here are plain values constructed per call; none of them carries
//! state from one operation to the next.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use cryptkit_params::{hash, status, symmetric};
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digest algorithm selected for a hashing call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DigestKind {
    #[default]
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestKind {
    /// Every supported digest algorithm
    pub const ALL: [DigestKind; 6] = [
        DigestKind::Md5,
        DigestKind::Sha1,
        DigestKind::Sha224,
        DigestKind::Sha256,
        DigestKind::Sha384,
        DigestKind::Sha512,
    ];

    /// Digest length in bytes
    pub const fn output_size(self) -> usize {
        match self {
            Self::Md5 => hash::MD5_OUTPUT_SIZE,
            Self::Sha1 => hash::SHA1_OUTPUT_SIZE,
            Self::Sha224 => hash::SHA224_OUTPUT_SIZE,
            Self::Sha256 => hash::SHA256_OUTPUT_SIZE,
            Self::Sha384 => hash::SHA384_OUTPUT_SIZE,
            Self::Sha512 => hash::SHA512_OUTPUT_SIZE,
        }
    }

    /// CommonCrypto HMAC algorithm identifier for this digest
    pub const fn hmac_algorithm(self) -> u32 {
        match self {
            Self::Md5 => hash::HMAC_ALG_MD5,
            Self::Sha1 => hash::HMAC_ALG_SHA1,
            Self::Sha224 => hash::HMAC_ALG_SHA224,
            Self::Sha256 => hash::HMAC_ALG_SHA256,
            Self::Sha384 => hash::HMAC_ALG_SHA384,
            Self::Sha512 => hash::HMAC_ALG_SHA512,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symmetric cipher selected for an encrypt or decrypt call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherKind {
    #[default]
    Aes,
    Des,
    TripleDes,
    Cast,
    Rc4,
    Rc2,
    Blowfish,
}

impl CipherKind {
    /// Every supported cipher
    pub const ALL: [CipherKind; 7] = [
        CipherKind::Aes,
        CipherKind::Des,
        CipherKind::TripleDes,
        CipherKind::Cast,
        CipherKind::Rc4,
        CipherKind::Rc2,
        CipherKind::Blowfish,
    ];

    /// CommonCrypto algorithm identifier
    pub const fn algorithm_id(self) -> u32 {
        match self {
            Self::Aes => symmetric::ALG_AES,
            Self::Des => symmetric::ALG_DES,
            Self::TripleDes => symmetric::ALG_3DES,
            Self::Cast => symmetric::ALG_CAST,
            Self::Rc4 => symmetric::ALG_RC4,
            Self::Rc2 => symmetric::ALG_RC2,
            Self::Blowfish => symmetric::ALG_BLOWFISH,
        }
    }

    /// Map a CommonCrypto algorithm identifier back to a cipher kind
    pub const fn from_algorithm_id(id: u32) -> Option<Self> {
        match id {
            symmetric::ALG_AES => Some(Self::Aes),
            symmetric::ALG_DES => Some(Self::Des),
            symmetric::ALG_3DES => Some(Self::TripleDes),
            symmetric::ALG_CAST => Some(Self::Cast),
            symmetric::ALG_RC4 => Some(Self::Rc4),
            symmetric::ALG_RC2 => Some(Self::Rc2),
            symmetric::ALG_BLOWFISH => Some(Self::Blowfish),
            _ => None,
        }
    }

    /// Whether the algorithm is a stream cipher (padding and mode do not apply)
    pub const fn is_stream(self) -> bool {
        matches!(self, Self::Rc4)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes => "AES",
            Self::Des => "DES",
            Self::TripleDes => "3DES",
            Self::Cast => "CAST",
            Self::Rc4 => "RC4",
            Self::Rc2 => "RC2",
            Self::Blowfish => "Blowfish",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a cipher call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    /// CommonCrypto operation code
    pub const fn code(self) -> u32 {
        match self {
            Self::Encrypt => symmetric::OP_ENCRYPT,
            Self::Decrypt => symmetric::OP_DECRYPT,
        }
    }
}

/// Option bitmask handed to the one-shot transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CipherOptions(u32);

impl CipherOptions {
    /// No padding, chained mode
    pub const NONE: Self = Self(0);
    /// `kCCOptionPKCS7Padding`
    pub const PKCS7_PADDING: Self = Self(symmetric::OPTION_PKCS7_PADDING);
    /// `kCCOptionECBMode`
    pub const ECB_MODE: Self = Self(symmetric::OPTION_ECB_MODE);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn pkcs7_padding(self) -> bool {
        self.contains(Self::PKCS7_PADDING)
    }

    pub const fn ecb_mode(self) -> bool {
        self.contains(Self::ECB_MODE)
    }
}

impl BitOr for CipherOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CipherOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Bytes produced by a cipher transform
///
/// Built from the over-allocated scratch buffer and the length the provider
/// reported; only the produced prefix is kept.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct CipherOutput {
    data: Vec<u8>,
}

impl CipherOutput {
    /// Keep the first `produced` bytes of `buffer`
    pub fn from_buffer(mut buffer: Vec<u8>, produced: usize) -> Self {
        buffer.truncate(produced);
        Self { data: buffer }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Exact number of meaningful bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for CipherOutput {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<CipherOutput> for Vec<u8> {
    fn from(output: CipherOutput) -> Self {
        output.data
    }
}

impl fmt::Debug for CipherOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherOutput").field("len", &self.data.len()).finish()
    }
}

/// Non-success status reported by a primitive provider
///
/// Success is not a variant: a provider that succeeds returns the number of
/// bytes it produced instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptStatus {
    ParamError,
    BufferTooSmall,
    MemoryFailure,
    AlignmentError,
    DecodeError,
    Unimplemented,
    Overflow,
    RngFailure,
    UnspecifiedError,
    CallSequenceError,
    KeySizeError,
    InvalidKey,
}

impl CryptStatus {
    /// Numeric status code as returned by `CCCrypt`
    pub const fn code(self) -> i32 {
        match self {
            Self::ParamError => status::PARAM_ERROR,
            Self::BufferTooSmall => status::BUFFER_TOO_SMALL,
            Self::MemoryFailure => status::MEMORY_FAILURE,
            Self::AlignmentError => status::ALIGNMENT_ERROR,
            Self::DecodeError => status::DECODE_ERROR,
            Self::Unimplemented => status::UNIMPLEMENTED,
            Self::Overflow => status::OVERFLOW,
            Self::RngFailure => status::RNG_FAILURE,
            Self::UnspecifiedError => status::UNSPECIFIED_ERROR,
            Self::CallSequenceError => status::CALL_SEQUENCE_ERROR,
            Self::KeySizeError => status::KEY_SIZE_ERROR,
            Self::InvalidKey => status::INVALID_KEY,
        }
    }

    /// Interpret a raw status code; `0` (success) yields `None`
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            status::PARAM_ERROR => Some(Self::ParamError),
            status::BUFFER_TOO_SMALL => Some(Self::BufferTooSmall),
            status::MEMORY_FAILURE => Some(Self::MemoryFailure),
            status::ALIGNMENT_ERROR => Some(Self::AlignmentError),
            status::DECODE_ERROR => Some(Self::DecodeError),
            status::UNIMPLEMENTED => Some(Self::Unimplemented),
            status::OVERFLOW => Some(Self::Overflow),
            status::RNG_FAILURE => Some(Self::RngFailure),
            status::CALL_SEQUENCE_ERROR => Some(Self::CallSequenceError),
            status::KEY_SIZE_ERROR => Some(Self::KeySizeError),
            status::INVALID_KEY => Some(Self::InvalidKey),
            status::SUCCESS => None,
            _ => Some(Self::UnspecifiedError),
        }
    }
}

impl fmt::Display for CryptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
