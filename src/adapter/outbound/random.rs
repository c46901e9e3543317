//! `rand`-backed random sources.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::port::RandomSource;

/// Draws from the thread-local generator seeded by the OS.
///
/// Every report built with this source differs from the last.
#[derive(Debug, Default, Clone)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    #[must_use]
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..high)
    }
}

/// Deterministic generator: equal seeds yield equal reports.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..high)
    }
}

/// Pick the source for a request: seeded when a seed is given.
#[must_use]
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let xs: Vec<u32> = (0..32).map(|_| a.next_in_range(0, 1000)).collect();
        let ys: Vec<u32> = (0..32).map(|_| b.next_in_range(0, 1000)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn draws_stay_in_half_open_range() {
        let mut rng = ThreadRandom::new();
        for _ in 0..500 {
            let value = rng.next_in_range(20, 70);
            assert!((20..70).contains(&value));
        }
    }

    #[test]
    fn single_value_range_is_constant() {
        let mut rng = SeededRandom::new(7);
        assert_eq!(rng.next_in_range(5, 6), 5);
    }

    #[test]
    fn boxed_source_dispatches() {
        let mut rng = random_source(Some(3));
        let value = rng.next_in_range(0, 10);
        assert!(value < 10);
    }
}
