//! # Displacement Sources
//!
//! The random error added to every midpoint during subdivision.
//!
//! Generation takes the source as a parameter instead of reaching for a
//! process-wide generator. Production code passes a seeded
//! [`RandomDisplacement`]; tests pass a [`ConstantDisplacement`] to get
//! exactly predictable heights.

use rand::{Rng, RngCore};
use rand_chacha::ChaCha8Rng;

use crate::seed::WorldSeed;

/// Supplies the midpoint error for one subdivision step.
pub trait DisplacementSource {
    /// Returns an error in `[-variance, variance]`.
    fn displacement(&mut self, variance: f32) -> f32;
}

impl<S: DisplacementSource + ?Sized> DisplacementSource for &mut S {
    #[inline]
    fn displacement(&mut self, variance: f32) -> f32 {
        (**self).displacement(variance)
    }
}

/// Uniformly distributed error drawn from any random number generator.
#[derive(Clone, Debug)]
pub struct RandomDisplacement<R> {
    rng: R,
}

impl<R: RngCore> RandomDisplacement<R> {
    /// Wraps a random number generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomDisplacement<ChaCha8Rng> {
    /// Deterministic source derived from a world seed.
    #[must_use]
    pub fn from_seed(seed: WorldSeed) -> Self {
        Self::new(seed.rng())
    }
}

impl<R: RngCore> DisplacementSource for RandomDisplacement<R> {
    #[inline]
    fn displacement(&mut self, variance: f32) -> f32 {
        let unit: f32 = self.rng.gen();
        (unit - 0.5) * 2.0 * variance
    }
}

/// Always returns the same fraction of the variance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstantDisplacement(pub f32);

impl ConstantDisplacement {
    /// No displacement at all: the terrain stays flat.
    pub const ZERO: Self = Self(0.0);
}

impl DisplacementSource for ConstantDisplacement {
    #[inline]
    fn displacement(&mut self, variance: f32) -> f32 {
        self.0.clamp(-1.0, 1.0) * variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_displacement_range() {
        let mut source = RandomDisplacement::from_seed(WorldSeed::new(42));
        for _ in 0..10_000 {
            let error = source.displacement(0.25);
            assert!((-0.25..=0.25).contains(&error), "Error {error} out of range");
        }
    }

    #[test]
    fn test_random_displacement_is_deterministic() {
        let mut a = RandomDisplacement::from_seed(WorldSeed::new(9));
        let mut b = RandomDisplacement::from_seed(WorldSeed::new(9));
        for _ in 0..100 {
            assert_eq!(a.displacement(1.0), b.displacement(1.0));
        }
    }

    #[test]
    fn test_constant_displacement() {
        assert_eq!(ConstantDisplacement::ZERO.displacement(3.0), 0.0);
        assert_eq!(ConstantDisplacement(0.5).displacement(2.0), 1.0);
        assert_eq!(ConstantDisplacement(4.0).displacement(2.0), 2.0);
    }

    #[test]
    fn test_forwarding_through_mutable_reference() {
        fn draw(mut source: impl DisplacementSource) -> f32 {
            source.displacement(1.0)
        }

        let mut source = ConstantDisplacement(-1.0);
        assert_eq!(draw(&mut source), -1.0);
    }
}
