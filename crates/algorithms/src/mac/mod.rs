//! Message authentication codes

pub mod hmac;

pub use self::hmac::HmacContext;
