//! Status codes returned by the one-shot cipher transform

/// `kCCSuccess`
pub const SUCCESS: i32 = 0;

/// `kCCParamError`
pub const PARAM_ERROR: i32 = -4300;

/// `kCCBufferTooSmall`
pub const BUFFER_TOO_SMALL: i32 = -4301;

/// `kCCMemoryFailure`
pub const MEMORY_FAILURE: i32 = -4302;

/// `kCCAlignmentError`
pub const ALIGNMENT_ERROR: i32 = -4303;

/// `kCCDecodeError`
pub const DECODE_ERROR: i32 = -4304;

/// `kCCUnimplemented`
pub const UNIMPLEMENTED: i32 = -4305;

/// `kCCOverflow`
pub const OVERFLOW: i32 = -4306;

/// `kCCRNGFailure`
pub const RNG_FAILURE: i32 = -4307;

/// `kCCUnspecifiedError`
pub const UNSPECIFIED_ERROR: i32 = -4308;

/// `kCCCallSequenceError`
pub const CALL_SEQUENCE_ERROR: i32 = -4309;

/// `kCCKeySizeError`
pub const KEY_SIZE_ERROR: i32 = -4310;

/// `kCCInvalidKey`
pub const INVALID_KEY: i32 = -4311;
