//! Sources of randomness for password generation.
//!
//! Every random decision made while building a password is drawn
//! from a [`RandomSource`] passed in by the caller so that tests can
//! substitute a deterministic sequence.
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::csprng;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Draw an index uniformly from `0..upper`.
    ///
    /// Callers never pass a zero bound.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Whether this source is suitable for generating secrets.
    fn is_secure(&self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }

    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }
}

/// Cryptographically secure source backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        csprng().gen_range(0..upper)
    }

    fn is_secure(&self) -> bool {
        true
    }
}

/// Deterministic pseudo-random source.
///
/// The same seed always yields the same passwords which makes
/// this source unsuitable for real secrets; use it for previews
/// and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn is_secure(&self) -> bool {
        false
    }
}
