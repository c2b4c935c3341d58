//! Pseudo-random number generator wrapper for path simulation.
//!
//! This module provides [`PathRng`], a seeded PRNG owned by exactly one
//! path simulator. There is no shared or global generator state: two
//! simulators hold two generators, which is what makes concurrently
//! generated paths statistically independent.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Per-simulator random variate source.
///
/// Wraps a seeded [`StdRng`] with a standard-normal distribution view.
/// The seed is stored so that reproducibility issues can be traced back
/// to the exact generator state a simulator started from.
///
/// State advances monotonically with every draw and is never reset
/// implicitly; use [`PathRng::reseed`] to return to a known state.
///
/// # Examples
///
/// ```rust
/// use pathsim_engine::rng::PathRng;
///
/// let mut rng1 = PathRng::from_seed(12345);
/// let mut rng2 = PathRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
pub struct PathRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed the generator was last initialised with.
    seed: u64,
}

impl PathRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of variates,
    /// enabling bit-identical reproduction of simulated paths.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from ambient entropy.
    ///
    /// The freshly drawn seed is retained and can be read back via
    /// [`PathRng::seed`] to reproduce a run after the fact.
    #[inline]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed the generator was last initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Resets the generator to the state implied by `seed`.
    ///
    /// After reseeding, the draw sequence restarts exactly as if the
    /// generator had been constructed with [`PathRng::from_seed`].
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.inner = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Generates a single standard normal variate (mean 0, std 1).
    ///
    /// Uses the Ziggurat algorithm via [`rand_distr::StandardNormal`].
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation: the buffer must be pre-allocated by the caller.
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
