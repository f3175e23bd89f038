//! Utility Core - Rust Engine
//!
//! Small deterministic utility library with two independent components.
//!
//! # Architecture
//!
//! - **multiset**: Order-independent sequence comparison (multiset equality)
//! - **rng**: Deterministic random number generation
//! - **strings**: Random alphanumeric string generation
//!
//! # Critical Invariants
//!
//! 1. `multiset_eq` is pure: no shared state, no allocation escapes the call
//! 2. All randomness goes through `SeededRng` (seeded, reproducible)
//! 3. The process-wide random source is mutex-guarded; concurrent draws
//!    never race on generator state

// Module declarations
pub mod multiset;
pub mod rng;
pub mod strings;

// Re-exports for convenience
pub use multiset::multiset_eq;
pub use rng::SeededRng;
pub use strings::{random_string, random_string_with, RandomStringError, ALPHANUMERIC};
