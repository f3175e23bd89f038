//! Process-wide random source
//!
//! One `SeededRng` for the whole process: created lazily on first use,
//! seeded from ambient entropy, never torn down. A mutex serializes
//! concurrent callers so no two draws advance the same state unsynchronized.

use std::sync::{Mutex, OnceLock};

use super::SeededRng;

static PROCESS_RNG: OnceLock<Mutex<SeededRng>> = OnceLock::new();

/// Run `f` with exclusive access to the process-wide generator
pub(crate) fn with_process_rng<R>(f: impl FnOnce(&mut SeededRng) -> R) -> R {
    let lock = PROCESS_RNG.get_or_init(|| Mutex::new(SeededRng::from_entropy()));
    // Generator state is a single u64 and stays valid even if a previous
    // holder panicked, so a poisoned lock is safe to reclaim.
    let mut rng = match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut rng)
}
