//! Pseudo-random number generator wrapper.
//!
//! This module provides [`SeededRng`], a seeded PRNG wrapper that offers
//! reproducible random draws for synthesis, sampling and shuffling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Odd 64-bit constant (2^64 / golden ratio) spreading stream numbers apart.
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded random number generator.
///
/// The same seed always produces the same sequence of draws for a fixed
/// `rand` version, which is what makes synthetic datasets and model fits
/// bit-reproducible.
///
/// # Examples
///
/// ```rust
/// use trade_core::rng::SeededRng;
///
/// let mut rng1 = SeededRng::from_seed(12345);
/// let mut rng2 = SeededRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// assert_eq!(rng1.seed(), 12345);
/// ```
#[derive(Debug, Clone)]
pub struct SeededRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl SeededRng {
    /// Creates a new RNG instance initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG for one numbered stream of `seed`.
    ///
    /// Stream 0 is the same sequence as [`from_seed`](Self::from_seed); other
    /// stream numbers give sequences that do not overlap it, so one seed can
    /// drive several independent draws.
    ///
    /// ```rust
    /// use trade_core::rng::SeededRng;
    ///
    /// let mut base = SeededRng::from_seed(7);
    /// let mut same = SeededRng::from_stream(7, 0);
    /// assert_eq!(base.gen_uniform(), same.gen_uniform());
    /// ```
    #[inline]
    pub fn from_stream(seed: u64, stream: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed ^ stream.wrapping_mul(STREAM_MIX)),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a uniform value in the half-open interval `[low, high)`.
    ///
    /// Returns `low` when the interval is empty, rather than panicking.
    #[inline]
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.inner.gen_range(low..high)
        } else {
            low
        }
    }

    /// Generates a uniform index in `0..n`.
    ///
    /// Returns 0 when `n` is 0.
    #[inline]
    pub fn gen_index(&mut self, n: usize) -> usize {
        if n == 0 {
            0
        } else {
            self.inner.gen_range(0..n)
        }
    }

    /// Generates a uniform integer in `0..=max`.
    #[inline]
    pub fn gen_index_inclusive(&mut self, max: u32) -> u32 {
        self.inner.gen_range(0..=max)
    }

    /// Generates a normal variate with the given mean and standard deviation.
    ///
    /// Draws a standard normal via `rand_distr::StandardNormal` (Ziggurat)
    /// and scales it, so no fallible distribution construction is needed.
    #[inline]
    pub fn gen_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.inner);
        mean + std_dev * z
    }

    /// Shuffles a slice in place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.inner);
    }

    /// Draws `n` indices uniformly with replacement from `0..n`.
    ///
    /// This is the bootstrap resample used by tree ensembles.
    pub fn bootstrap_indices(&mut self, n: usize) -> Vec<usize> {
        (0..n).map(|_| self.gen_index(n)).collect()
    }
}
