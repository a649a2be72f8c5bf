//! Born-rule measurement sampling
//!
//! Draws shot outcomes from a final state's probability distribution. Each
//! shot is an independent draw from the same fixed distribution (one uniform
//! float in [0, 1) per shot from the `RandomSource`); there is no collapse
//! carried across shots.

use crate::error::Result;
use crate::rng::RandomSource;
use crate::sim::state::StateVector;
use std::collections::HashMap;

/// The outcome of sampling a state: counts plus the per-shot outcome list
#[derive(Debug, Clone)]
pub struct Sample {
    /// Outcome string -> number of shots that produced it
    pub counts: HashMap<String, u64>,
    /// One outcome string per shot, in draw order
    pub outcomes: Vec<String>,
}

impl Sample {
    /// Total number of shots recorded
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Draw `shots` independent outcomes from the state's Born-rule distribution
///
/// Outcome strings cover the `measured` qubits (ascending indices), with the
/// highest-index qubit as the most significant character. `shots == 0`
/// yields an empty sample rather than an error.
pub fn sample(
    state: &StateVector,
    measured: &[usize],
    shots: usize,
    source: &dyn RandomSource,
) -> Result<Sample> {
    if shots == 0 {
        return Ok(Sample {
            counts: HashMap::new(),
            outcomes: Vec::new(),
        });
    }

    // Cumulative distribution over all basis outcomes
    let probabilities = state.probabilities();
    let mut cumulative = Vec::with_capacity(probabilities.len());
    let mut acc = 0.0;
    for p in &probabilities {
        acc += p;
        cumulative.push(acc);
    }

    let draws = source.floats(shots)?;

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut outcomes = Vec::with_capacity(shots);

    for u in draws {
        // First index whose cumulative probability exceeds the draw;
        // clamp guards against accumulated floating-point shortfall
        let index = cumulative
            .partition_point(|&c| c <= u)
            .min(probabilities.len() - 1);

        let outcome = format_outcome(index, measured);
        *counts.entry(outcome.clone()).or_insert(0) += 1;
        outcomes.push(outcome);
    }

    Ok(Sample { counts, outcomes })
}

/// Format a basis-state index as a fixed-width outcome string over the
/// measured qubits, most significant qubit first
fn format_outcome(index: usize, measured: &[usize]) -> String {
    measured
        .iter()
        .rev()
        .map(|&q| if (index >> q) & 1 == 1 { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::pseudo::SeededSource;
    use crate::sim::circuit::Circuit;

    #[test]
    fn test_counts_sum_to_shots() {
        let state = Circuit::hadamard(3).unwrap().run().unwrap();
        let source = SeededSource::new(42);

        let sample = sample(&state, &[0, 1, 2], 1000, &source).unwrap();

        assert_eq!(sample.total_shots(), 1000);
        assert_eq!(sample.outcomes.len(), 1000);
        for outcome in sample.counts.keys() {
            assert_eq!(outcome.len(), 3);
        }
    }

    #[test]
    fn test_zero_shots_yields_empty_sample() {
        let state = Circuit::bell().run().unwrap();
        let source = SeededSource::new(42);

        let sample = sample(&state, &[0, 1], 0, &source).unwrap();

        assert!(sample.counts.is_empty());
        assert!(sample.outcomes.is_empty());
    }

    #[test]
    fn test_bell_outcomes_are_correlated() {
        let state = Circuit::bell().run().unwrap();
        let source = SeededSource::new(7);

        let sample = sample(&state, &[0, 1], 2000, &source).unwrap();

        for outcome in sample.counts.keys() {
            assert!(
                outcome == "00" || outcome == "11",
                "Bell circuit produced impossible outcome {:?}",
                outcome
            );
        }
        // Both branches should show up over 2000 shots
        assert_eq!(sample.counts.len(), 2);
    }

    #[test]
    fn test_ghz_outcomes_are_all_or_nothing() {
        let state = Circuit::ghz(4).unwrap().run().unwrap();
        let source = SeededSource::new(13);

        let sample = sample(&state, &[0, 1, 2, 3], 2000, &source).unwrap();

        for outcome in sample.counts.keys() {
            assert!(
                outcome == "0000" || outcome == "1111",
                "GHZ circuit produced impossible outcome {:?}",
                outcome
            );
        }
    }

    #[test]
    fn test_hadamard_outcomes_are_roughly_balanced() {
        let state = Circuit::hadamard(1).unwrap().run().unwrap();
        let source = SeededSource::new(99);

        let sample = sample(&state, &[0], 10_000, &source).unwrap();

        let zeros = *sample.counts.get("0").unwrap_or(&0);
        let ones = *sample.counts.get("1").unwrap_or(&0);
        assert_eq!(zeros + ones, 10_000);
        // ~50/50 with generous slack (sigma is 50 here)
        assert!(zeros > 4500 && zeros < 5500, "zeros = {}", zeros);
        assert!(ones > 4500 && ones < 5500, "ones = {}", ones);
    }

    #[test]
    fn test_sampling_is_reproducible_with_seed() {
        let state = Circuit::hadamard(2).unwrap().run().unwrap();

        let a = sample(&state, &[0, 1], 500, &SeededSource::new(5)).unwrap();
        let b = sample(&state, &[0, 1], 500, &SeededSource::new(5)).unwrap();

        assert_eq!(a.outcomes, b.outcomes);
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn test_format_outcome_orders_bits() {
        // Index 0b01 over qubits [0, 1]: qubit 1 is MSB
        assert_eq!(format_outcome(0b01, &[0, 1]), "01");
        assert_eq!(format_outcome(0b10, &[0, 1]), "10");
        assert_eq!(format_outcome(0b101, &[0, 1, 2]), "101");
    }
}
