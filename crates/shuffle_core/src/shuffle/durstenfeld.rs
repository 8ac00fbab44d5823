//! Generator-driven Durstenfeld shuffle.

use tracing::debug;

use crate::error::{Result, ShuffleError};
use crate::rng::RandomRange;

/// Builds a sequence of `count` values from `producer`, shuffling while it
/// fills.
///
/// Slot 0 takes the first produced value. For each later index `i`, an index
/// `j` is drawn from `[0, i]`, the value at `j` moves to `i`, and the next
/// produced value lands at `j`. The result is a uniform random permutation
/// of the first `count` values the producer yields, in a single pass with
/// no separate initialisation loop.
///
/// The producer is advanced exactly `count` times; `count == 0` returns an
/// empty vector without touching it.
///
/// # Errors
///
/// - [`ShuffleError::ProducerExhausted`] if the producer ends early
/// - [`ShuffleError::ResourceExhausted`] if the output cannot be allocated
///
/// # Examples
///
/// ```rust
/// use shuffle_core::producer::linear_sequence;
/// use shuffle_core::rng::ShuffleRng;
/// use shuffle_core::shuffle::construct_shuffled;
///
/// let mut rng = ShuffleRng::from_seed(42);
/// let mut values = construct_shuffled(10, linear_sequence(), &mut rng).unwrap();
///
/// values.sort_unstable();
/// assert_eq!(values, (1..=10).collect::<Vec<i32>>());
/// ```
pub fn construct_shuffled<T, I, R>(count: usize, producer: I, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    R: RandomRange + ?Sized,
{
    let mut out: Vec<T> = Vec::new();
    if count == 0 {
        return Ok(out);
    }
    out.try_reserve_exact(count)
        .map_err(|_| ShuffleError::ResourceExhausted { requested: count })?;

    let mut producer = producer.into_iter();
    let mut advance = |produced: usize| {
        producer.next().ok_or(ShuffleError::ProducerExhausted {
            requested: count,
            produced,
        })
    };

    out.push(advance(0)?);
    for i in 1..count {
        let j = rng.next_int(0, i + 1)?;
        // i == out.len(), so the push fills slot i
        let displaced = out[j].clone();
        out.push(displaced);
        out[j] = advance(i)?;
    }

    debug!(count, "Durstenfeld shuffle complete");
    Ok(out)
}
