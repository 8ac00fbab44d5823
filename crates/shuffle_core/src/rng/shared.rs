//! Process-wide shared random source.
//!
//! One [`ShuffleRng`] is seeded from entropy the first time it is needed and
//! reused for the lifetime of the process, so independent permutation
//! requests never restart from correlated seeds.
//!
//! # Lock Discipline
//!
//! Access goes through [`with_shared_rng`], which holds a mutex for the
//! duration of the closure. The closure must not call `with_shared_rng`
//! again (the mutex is not re-entrant and would deadlock). Callers that
//! need many draws without contention should construct their own
//! [`ShuffleRng`] and use the `*_with` entry points instead.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::ShuffleRng;

static SHARED_RNG: OnceLock<Mutex<ShuffleRng>> = OnceLock::new();

fn shared() -> &'static Mutex<ShuffleRng> {
    SHARED_RNG.get_or_init(|| {
        debug!("Initialising shared shuffle RNG from entropy");
        Mutex::new(ShuffleRng::from_entropy())
    })
}

/// Runs `f` with exclusive access to the process-wide random source.
///
/// A panic inside an earlier closure leaves the generator in a valid state,
/// so a poisoned lock is recovered rather than propagated.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::rng::{with_shared_rng, RandomRange};
///
/// let j = with_shared_rng(|rng| rng.next_int(0, 6)).unwrap();
/// assert!(j < 6);
/// ```
pub fn with_shared_rng<F, T>(f: F) -> T
where
    F: FnOnce(&mut ShuffleRng) -> T,
{
    let mut guard = shared().lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}
