//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG suitable for non-cryptographic uses such as
//! random string generation. Not a cryptographic source.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. This matters for:
//! - Testing (assert exact outputs)
//! - Reproducing a run (capture `state()`, resume with `new(state)`)

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// Callers hold and pass the handle explicitly; there is no hidden global
/// except the crate's mutex-guarded process-wide source.
///
/// # Example
/// ```
/// use utility_core_rs::SeededRng;
///
/// let mut rng = SeededRng::new(12345);
/// let raw = rng.next_u64();
/// let slot = rng.index(62); // [0, 62)
/// assert!(slot < 62);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRng {
    /// Internal state (64-bit)
    state: u64,
}

impl SeededRng {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use utility_core_rs::SeededRng;
    ///
    /// let rng = SeededRng::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from ambient entropy
    ///
    /// Mixes the system clock with the process id. Not reproducible; used
    /// for the process-wide source. Seed with [`SeededRng::new`] when
    /// determinism matters.
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(1);
        let pid = u64::from(std::process::id());
        Self::new(nanos ^ pid.rotate_left(32))
    }

    /// Generate next random u64 value
    ///
    /// Advances the internal state and returns a random value.
    ///
    /// # Example
    /// ```
    /// use utility_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(12345);
    /// let value = rng.next_u64();
    /// ```
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Draw a uniform index in range [0, bound)
    ///
    /// The modulo reduction of a 64-bit draw is uniform to within 2^-57
    /// for any bound that fits in a u8; exact enough for sampling
    /// alphabet positions.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    ///
    /// # Example
    /// ```
    /// use utility_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(12345);
    /// let slot = rng.index(62);
    /// assert!(slot < 62);
    /// ```
    pub fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        (self.next_u64() % bound as u64) as usize
    }

    /// Get current RNG state (for snapshot/resume)
    ///
    /// # Example
    /// ```
    /// use utility_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(12345);
    /// rng.next_u64();
    ///
    /// let snapshot = rng.state();
    /// let mut resumed = SeededRng::new(snapshot);
    /// assert_eq!(resumed.next_u64(), rng.next_u64());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}
