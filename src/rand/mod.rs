//! Secure random integers and shuffling.
//!
//! All randomness used by the generators flows through [`SecureRandom`],
//! which draws from a single [`EntropySource`]. A failing source is an error,
//! there is no fallback to a weaker generator.

mod os;

pub use os::{OsEntropy, source_name};

use zeroize::Zeroize;

use crate::error::{GenError, Result};

// =============================================================================
// Entropy
// =============================================================================

/// A source of unpredictable bytes.
pub trait EntropySource {
    /// Fill `dest` completely or fail.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

// =============================================================================
// RNG
// =============================================================================

pub struct SecureRandom<S = OsEntropy> {
    source: S,
}

impl SecureRandom<OsEntropy> {
    pub fn new() -> Self {
        Self { source: OsEntropy }
    }
}

impl Default for SecureRandom<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> SecureRandom<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    #[inline]
    pub fn next_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.source.fill(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        buf.zeroize();
        Ok(value)
    }

    /// Uniform integer in `[0, n)`.
    ///
    /// Rejection sampling: draws at or above the largest multiple of `n`
    /// that fits in a `u64` are discarded, so every residue is equally likely.
    pub fn uniform(&mut self, n: usize) -> Result<usize> {
        match n {
            0 => return Err(GenError::EmptyRange),
            1 => return Ok(0),
            _ => {}
        }

        let n = n as u64;
        let zone = (u64::MAX / n) * n;
        loop {
            let value = self.next_u64()?;
            if value < zone {
                return Ok((value % n) as usize);
            }
        }
    }

    /// Pick one element uniformly.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let idx = self.uniform(items.len())?;
        Ok(&items[idx])
    }

    /// In-place Fisher-Yates shuffle.
    ///
    /// On error the slice holds a partial permutation of its original
    /// elements and must not be used.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.uniform(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays fixed `u64` values, then fails.
    pub(crate) struct Script(pub VecDeque<u64>);

    impl Script {
        pub(crate) fn new(values: &[u64]) -> Self {
            Script(values.iter().copied().collect())
        }
    }

    impl EntropySource for Script {
        fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
            let value = self
                .0
                .pop_front()
                .ok_or_else(|| GenError::entropy("script exhausted"))?;
            dest.copy_from_slice(&value.to_le_bytes()[..dest.len()]);
            Ok(())
        }
    }

    /// Succeeds `remaining` times, then fails forever.
    pub(crate) struct FailAfter {
        pub remaining: usize,
    }

    impl EntropySource for FailAfter {
        fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
            if self.remaining == 0 {
                return Err(GenError::entropy("device gone"));
            }
            self.remaining -= 1;
            OsEntropy.fill(dest)
        }
    }

    fn chi_square(n: usize, samples: usize) -> f64 {
        let mut rng = SecureRandom::new();
        let mut counts = vec![0usize; n];
        for _ in 0..samples {
            counts[rng.uniform(n).unwrap()] += 1;
        }
        let expected = samples as f64 / n as f64;
        counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = SecureRandom::new();
        for n in [2, 3, 10, 26, 94, 1000] {
            for _ in 0..2_000 {
                assert!(rng.uniform(n).unwrap() < n);
            }
        }
    }

    #[test]
    fn uniform_passes_chi_square() {
        // df = 9 and df = 6; both thresholds sit far beyond p = 1e-6.
        assert!(chi_square(10, 100_000) < 50.0);
        assert!(chi_square(7, 70_000) < 45.0);
    }

    #[test]
    fn uniform_of_one_skips_the_source() {
        let mut rng = SecureRandom::with_source(FailAfter { remaining: 0 });
        assert_eq!(rng.uniform(1), Ok(0));
    }

    #[test]
    fn uniform_of_zero_is_an_error() {
        let mut rng = SecureRandom::new();
        assert_eq!(rng.uniform(0), Err(GenError::EmptyRange));
    }

    #[test]
    fn uniform_rejects_the_biased_tail() {
        let mut rng = SecureRandom::with_source(Script::new(&[u64::MAX, 7]));
        assert_eq!(rng.uniform(10), Ok(7));
    }

    #[test]
    fn entropy_failure_propagates() {
        let mut rng = SecureRandom::with_source(FailAfter { remaining: 0 });
        assert!(matches!(
            rng.uniform(10),
            Err(GenError::EntropyUnavailable { .. })
        ));
    }

    #[test]
    fn shuffle_follows_fisher_yates() {
        // i = 2 draws j = 0, i = 1 draws j = 0
        let mut rng = SecureRandom::with_source(Script::new(&[0, 0]));
        let mut items = ['a', 'b', 'c'];
        rng.shuffle(&mut items).unwrap();
        assert_eq!(items, ['b', 'c', 'a']);
    }

    #[test]
    fn shuffle_keeps_elements_on_failure() {
        let mut rng = SecureRandom::with_source(FailAfter { remaining: 3 });
        let mut items: Vec<u8> = (0..32).collect();
        assert!(rng.shuffle(&mut items).is_err());
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<u8>>());
    }

    #[test]
    fn shuffle_of_short_slices_draws_nothing() {
        let mut rng = SecureRandom::with_source(FailAfter { remaining: 0 });
        let mut empty: [u8; 0] = [];
        let mut one = [9u8];
        rng.shuffle(&mut empty).unwrap();
        rng.shuffle(&mut one).unwrap();
        assert_eq!(one, [9]);
    }

    #[test]
    fn choose_returns_an_element() {
        let mut rng = SecureRandom::new();
        let items = ["moon", "tiger"];
        for _ in 0..100 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
        assert_eq!(rng.choose::<u8>(&[]), Err(GenError::EmptyRange));
    }
}
