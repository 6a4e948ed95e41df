//! Offering pickers: the tie-break among eligible offerings.
//!
//! The assigner never draws randomness itself; it asks a picker. Tests
//! and reproducible runs inject [`FirstEligible`] or a seeded
//! [`RandomPicker`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Offering;

/// Chooses one offering among the eligible candidates.
pub trait OfferingPicker {
    /// Returns an index into `eligible`, which is never empty.
    fn pick(&mut self, eligible: &[&Offering]) -> usize;
}

/// Uniform random choice; every call is independent.
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    /// Wraps a caller-provided random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Seeded picker for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }
}

impl<R: Rng> OfferingPicker for RandomPicker<R> {
    fn pick(&mut self, eligible: &[&Offering]) -> usize {
        self.rng.random_range(0..eligible.len())
    }
}

/// Always takes the first eligible offering (catalog order).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEligible;

impl OfferingPicker for FirstEligible {
    fn pick(&mut self, _eligible: &[&Offering]) -> usize {
        0
    }
}
