//! Seeded randomness for case generation.
//!
//! Uses a seeded PRNG (Xoshiro256**) so that a case is fully determined by
//! its configuration and seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Random source injected into the generator.
///
/// # Example
///
/// ```rust
/// use alibi_generator::CaseRng;
///
/// let mut rng = CaseRng::new(12345);
/// let a = rng.gen_range(0..10);
///
/// let mut again = CaseRng::new(12345);
/// assert_eq!(again.gen_range(0..10), a);
/// ```
#[derive(Debug, Clone)]
pub struct CaseRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

impl CaseRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            calls_count: 0,
        }
    }

    /// Seeded from OS entropy. The seed is still recorded for replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of random draws so far.
    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    /// Uniform value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.calls_count += 1;
        self.rng.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        self.calls_count += 1;
        slice.shuffle(&mut self.rng);
    }

    /// `amount` distinct elements drawn without replacement, in random order.
    pub fn sample<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        debug_assert!(amount <= slice.len(), "cannot sample more than the slice holds");
        self.calls_count += 1;
        slice.choose_multiple(&mut self.rng, amount).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = CaseRng::new(42);
        let mut rng2 = CaseRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000u32), rng2.gen_range(0..1000u32));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = CaseRng::new(42);
        let mut rng2 = CaseRng::new(43);

        let seq1: Vec<u64> = (0..10).map(|_| rng1.gen_range(0..u64::MAX)).collect();
        let seq2: Vec<u64> = (0..10).map(|_| rng2.gen_range(0..u64::MAX)).collect();
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_sample_is_distinct_and_bounded() {
        let mut rng = CaseRng::new(7);
        let pool: Vec<u8> = (1..=7).collect();

        for amount in 0..=pool.len() {
            let mut picked = rng.sample(&pool, amount);
            assert_eq!(picked.len(), amount);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), amount);
            assert!(picked.iter().all(|p| pool.contains(p)));
        }
    }

    #[test]
    fn test_shuffle_is_permutation_and_seeded() {
        let original = vec![1, 2, 3, 4, 5, 6, 7];

        let mut data = original.clone();
        CaseRng::new(12345).shuffle(&mut data);
        let mut again = original.clone();
        CaseRng::new(12345).shuffle(&mut again);
        assert_eq!(data, again);

        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_calls_count() {
        let mut rng = CaseRng::new(12345);
        assert_eq!(rng.calls_count(), 0);

        let _ = rng.gen_range(0..10);
        assert_eq!(rng.calls_count(), 1);

        rng.shuffle(&mut [1, 2, 3]);
        assert_eq!(rng.calls_count(), 2);

        let _ = rng.sample(&[1, 2, 3], 2);
        assert_eq!(rng.calls_count(), 3);
    }
}
