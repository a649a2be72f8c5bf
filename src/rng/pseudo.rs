//! Pseudo-random source for local generation and testing
//!
//! Uses the `rand` crate's thread-local RNG. This is NOT quantum random,
//! but provides a fast, deterministic-when-seeded source for development
//! and testing.

use crate::error::Result;
use crate::rng::RandomSource;
use rand::Rng;
use std::sync::Mutex;

/// Pseudo-random source
///
/// Stateless wrapper around rand's thread-local RNG.
pub struct PseudoSource {
    _phantom: std::marker::PhantomData<()>,
}

impl PseudoSource {
    /// Create a new pseudo-random source
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl Default for PseudoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for PseudoSource {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    fn description(&self) -> &'static str {
        "Pseudo-random number generator (for testing)"
    }

    fn floats(&self, n: usize) -> Result<Vec<f64>> {
        let mut rng = rand::thread_rng();
        Ok((0..n).map(|_| rng.gen::<f64>()).collect())
    }
}

/// Seeded pseudo-random source for deterministic testing
pub struct SeededSource {
    rng: Mutex<rand::rngs::StdRng>,
}

impl SeededSource {
    /// Create a new seeded pseudo-random source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn name(&self) -> &'static str {
        "pseudo-seeded"
    }

    fn description(&self) -> &'static str {
        "Seeded pseudo-random number generator (for reproducible runs)"
    }

    fn floats(&self, n: usize) -> Result<Vec<f64>> {
        let mut rng = self.rng.lock().unwrap();
        Ok((0..n).map(|_| rng.gen::<f64>()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_source_floats() {
        let source = PseudoSource::new();
        let floats = source.floats(100).unwrap();
        assert_eq!(floats.len(), 100);
        for f in &floats {
            assert!(*f >= 0.0 && *f < 1.0);
        }
    }

    #[test]
    fn test_seeded_source_reproducible() {
        let source1 = SeededSource::new(42);
        let source2 = SeededSource::new(42);

        let floats1 = source1.floats(100).unwrap();
        let floats2 = source2.floats(100).unwrap();

        assert_eq!(floats1, floats2);
    }

    #[test]
    fn test_seeded_source_floats_in_range() {
        let source = SeededSource::new(12345);
        let floats = source.floats(1000).unwrap();

        for f in &floats {
            assert!(*f >= 0.0 && *f < 1.0, "Float {} out of range [0, 1)", f);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let source1 = SeededSource::new(1);
        let source2 = SeededSource::new(2);

        assert_ne!(source1.floats(16).unwrap(), source2.floats(16).unwrap());
    }
}
