//! Random alphanumeric string generator
//!
//! Draws each character independently and uniformly from a fixed
//! 62-symbol alphabet. Two entry points:
//! - [`random_string_with`] takes an explicit [`SeededRng`] handle
//!   (deterministic under a caller-chosen seed)
//! - [`random_string`] draws from the process-wide source
//!
//! Length is signed so a negative value can be rejected explicitly
//! instead of surfacing as an allocation failure.

use thiserror::Error;

use crate::rng::{with_process_rng, SeededRng};

/// The fixed 62-character alphabet: lowercase, uppercase, digits, in that
/// order (index 0 = 'a', index 61 = '9')
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Errors that can occur during random string generation
#[derive(Debug, Error, PartialEq)]
pub enum RandomStringError {
    #[error("string length must be non-negative, got {0}")]
    NegativeLength(i64),
}

/// Generate a random alphanumeric string using an explicit RNG handle
///
/// Output length equals `length` exactly; every character comes from
/// [`ALPHANUMERIC`]. Not cryptographically secure.
///
/// # Example
/// ```
/// use utility_core_rs::{random_string_with, SeededRng};
///
/// let mut rng = SeededRng::new(12345);
/// let token = random_string_with(&mut rng, 16).unwrap();
/// assert_eq!(token.len(), 16);
/// ```
pub fn random_string_with(
    rng: &mut SeededRng,
    length: i64,
) -> Result<String, RandomStringError> {
    if length < 0 {
        return Err(RandomStringError::NegativeLength(length));
    }

    let alphabet = ALPHANUMERIC.as_bytes();
    let mut out = String::with_capacity(length as usize);
    for _ in 0..length {
        out.push(alphabet[rng.index(alphabet.len())] as char);
    }
    Ok(out)
}

/// Generate a random alphanumeric string from the process-wide source
///
/// Convenience form of [`random_string_with`]; draws are serialized on
/// the process-wide generator's mutex.
///
/// # Example
/// ```
/// use utility_core_rs::random_string;
///
/// let token = random_string(8).unwrap();
/// assert_eq!(token.len(), 8);
/// ```
pub fn random_string(length: i64) -> Result<String, RandomStringError> {
    with_process_rng(|rng| random_string_with(rng, length))
}
