//! Validation utilities for cryptkit operations

use super::types::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_input(context, reason));
    }
    Ok(())
}

/// Reject an empty buffer
#[inline(always)]
pub fn non_empty(context: &'static str, bytes: &[u8]) -> Result<()> {
    parameter(!bytes.is_empty(), context, "must not be empty")
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
