//! Thread-local random source.
//!
//! Each thread owns one `ChaCha8Rng`, seeded from OS entropy the first time
//! it is used and reused afterwards. Threads never share a sequence. Tests can
//! pin the calling thread to a fixed seed with [`seed_thread`].

use std::cell::RefCell;

use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

thread_local! {
    static ENGINE: RefCell<Option<ChaCha8Rng>> = const { RefCell::new(None) };
}

/// Runs `f` with exclusive access to the calling thread's engine.
///
/// The engine is seeded lazily. `f` must not call back into any generator:
/// the engine is borrowed for the duration of the closure.
pub(crate) fn with_engine<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    ENGINE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let engine = slot.get_or_insert_with(ChaCha8Rng::from_os_rng);
        f(engine)
    })
}

/// Replaces the calling thread's engine with one seeded from `seed`.
///
/// Subsequent generator calls on this thread produce a reproducible
/// sequence. Other threads are unaffected.
///
/// # Example
///
/// ```
/// use locale_faker::{seed_thread, uniform_in_range};
///
/// seed_thread(7);
/// let first = uniform_in_range(0_u32, 1_000_000);
/// seed_thread(7);
/// assert_eq!(uniform_in_range(0_u32, 1_000_000), first);
/// ```
pub fn seed_thread(seed: u64) {
    ENGINE.with(|cell| {
        *cell.borrow_mut() = Some(ChaCha8Rng::seed_from_u64(seed));
    });
}

/// Drops any seeded engine so the next draw reseeds from OS entropy.
pub fn reseed_from_entropy() {
    ENGINE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Draws a value uniformly from `[low, high]`, inclusive on both ends.
///
/// # Panics
///
/// Panics if `low > high`. Public generators validate their ranges before
/// calling this.
///
/// # Example
///
/// ```
/// use locale_faker::uniform_in_range;
///
/// let roll = uniform_in_range(1_u8, 6);
/// assert!((1..=6).contains(&roll));
/// ```
pub fn uniform_in_range<T>(low: T, high: T) -> T
where
    T: SampleUniform + PartialOrd,
{
    with_engine(|engine| engine.random_range(low..=high))
}

/// Draws an index into a collection of `len` elements.
///
/// # Panics
///
/// Panics if `len` is zero.
pub(crate) fn index_below(len: usize) -> usize {
    with_engine(|engine| engine.random_range(0..len))
}

/// Fills `bytes` from the calling thread's engine.
pub(crate) fn fill_bytes(bytes: &mut [u8]) {
    with_engine(|engine| engine.fill(bytes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0_i64, 0_i64)]
    #[case(-5_i64, 5_i64)]
    #[case(i64::MIN, i64::MAX)]
    fn uniform_in_range_is_inclusive(#[case] low: i64, #[case] high: i64) {
        for _ in 0..200 {
            let value = uniform_in_range(low, high);
            assert!((low..=high).contains(&value));
        }
    }

    #[test]
    fn seeding_reproduces_sequence() {
        seed_thread(2026);
        let first: Vec<u32> = (0..8).map(|_| uniform_in_range(0, 1_000)).collect();
        seed_thread(2026);
        let second: Vec<u32> = (0..8).map(|_| uniform_in_range(0, 1_000)).collect();
        assert_eq!(first, second);
        reseed_from_entropy();
    }

    #[test]
    fn threads_do_not_share_seeded_state() {
        seed_thread(11);
        let here: Vec<u64> = (0..4).map(|_| uniform_in_range(0, u64::MAX)).collect();

        let there = std::thread::spawn(|| {
            seed_thread(11);
            (0..4).map(|_| uniform_in_range(0, u64::MAX)).collect::<Vec<u64>>()
        })
        .join()
        .expect("worker thread completes");

        assert_eq!(here, there);
        reseed_from_entropy();
    }

    #[test]
    fn index_below_stays_in_bounds() {
        for len in 1..20 {
            assert!(index_below(len) < len);
        }
    }
}
