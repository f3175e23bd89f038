//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! All randomness in this crate goes through this module, either via an
//! explicitly passed `SeededRng` handle or via the mutex-guarded
//! process-wide source.

mod source;
mod xorshift;

pub(crate) use source::with_process_rng;
pub use xorshift::SeededRng;
