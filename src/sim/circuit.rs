//! Circuit construction
//!
//! A `Circuit` is an immutable ordered gate sequence with a declared qubit
//! count and the set of qubits to measure. Only the four fixed families are
//! built here; one circuit is built per generation call and never reused.

use crate::constants::sim::MAX_QUBITS;
use crate::error::{Error, Result};
use crate::sim::gate::Gate;
use crate::sim::state::StateVector;
use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

/// An ordered gate sequence over a fixed number of qubits
#[derive(Debug, Clone)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<Gate>,
    measured: Vec<usize>,
}

impl Circuit {
    /// Internal constructor for qubit counts known to be valid
    fn build(num_qubits: usize, gates: Vec<Gate>) -> Self {
        Self {
            num_qubits,
            gates,
            // All families measure every qubit, lowest index first
            measured: (0..num_qubits).collect(),
        }
    }

    /// Validate a caller-supplied qubit count
    fn validate_qubits(num_qubits: usize) -> Result<()> {
        if num_qubits < 1 {
            return Err(Error::InvalidQubits(
                "qubit count must be at least 1".to_string(),
            ));
        }
        if num_qubits > MAX_QUBITS {
            return Err(Error::InvalidQubits(format!(
                "qubit count {} exceeds the maximum of {}",
                num_qubits, MAX_QUBITS
            )));
        }
        Ok(())
    }

    /// Hadamard on every qubit independently
    pub fn hadamard(num_qubits: usize) -> Result<Self> {
        Self::validate_qubits(num_qubits)?;

        let gates = (0..num_qubits)
            .map(|q| Gate::Hadamard { target: q })
            .collect();
        Ok(Self::build(num_qubits, gates))
    }

    /// Bell pair: H(0) then CNOT(0, 1) over 2 qubits
    pub fn bell() -> Self {
        let gates = vec![
            Gate::Hadamard { target: 0 },
            Gate::ControlledNot { control: 0, target: 1 },
        ];
        Self::build(2, gates)
    }

    /// GHZ state: H(0) then CNOT(0, i) for i = 1..n
    pub fn ghz(num_qubits: usize) -> Result<Self> {
        Self::validate_qubits(num_qubits)?;

        let mut gates = vec![Gate::Hadamard { target: 0 }];
        for i in 1..num_qubits {
            gates.push(Gate::ControlledNot { control: 0, target: i });
        }
        Ok(Self::build(num_qubits, gates))
    }

    /// One 2-qubit sub-circuit of the NIST-inspired method: Hadamard on both
    /// qubits, then Z-rotations by pi/4 and pi/3 for source diversity
    pub fn multi_source() -> Self {
        let gates = vec![
            Gate::Hadamard { target: 0 },
            Gate::Hadamard { target: 1 },
            Gate::RotateZ { target: 0, theta: FRAC_PI_4 },
            Gate::RotateZ { target: 1, theta: FRAC_PI_3 },
        ];
        Self::build(2, gates)
    }

    /// Declared qubit count
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The ordered gate sequence
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Qubits to measure, ascending
    pub fn measured(&self) -> &[usize] {
        &self.measured
    }

    /// Evolve |0...0> through the full gate sequence
    ///
    /// Verifies the normalization invariant on the final state.
    pub fn run(&self) -> Result<StateVector> {
        let mut state = StateVector::new(self.num_qubits);
        for gate in &self.gates {
            state.apply(gate)?;
        }
        state.check_normalized()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_hadamard_circuit_shape() {
        let circuit = Circuit::hadamard(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.gates().len(), 3);
        assert_eq!(circuit.measured(), &[0, 1, 2]);
    }

    #[test]
    fn test_hadamard_rejects_zero_qubits() {
        assert!(matches!(
            Circuit::hadamard(0),
            Err(Error::InvalidQubits(_))
        ));
    }

    #[test]
    fn test_hadamard_rejects_excessive_qubits() {
        assert!(matches!(
            Circuit::hadamard(MAX_QUBITS + 1),
            Err(Error::InvalidQubits(_))
        ));
    }

    #[test]
    fn test_bell_circuit_state() {
        let state = Circuit::bell().run().unwrap();
        let amps = state.amplitudes();

        assert_relative_eq!(amps[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(amps[3].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(amps[1].norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(amps[2].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ghz_circuit_state() {
        let state = Circuit::ghz(4).unwrap().run().unwrap();
        let amps = state.amplitudes();

        // Amplitude only on |0000> and |1111>
        assert_relative_eq!(amps[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(amps[15].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        for i in 1..15 {
            assert_relative_eq!(amps[i].norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ghz_single_qubit_degenerates_to_hadamard() {
        let state = Circuit::ghz(1).unwrap().run().unwrap();
        let probs = state.probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_multi_source_distribution_is_uniform() {
        let state = Circuit::multi_source().run().unwrap();
        for p in state.probabilities() {
            assert_relative_eq!(p, 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_all_families_stay_normalized() {
        let circuits = vec![
            Circuit::hadamard(5).unwrap(),
            Circuit::bell(),
            Circuit::ghz(5).unwrap(),
            Circuit::multi_source(),
        ];

        for circuit in circuits {
            let state = circuit.run().unwrap();
            assert!(
                state.is_normalized(1e-9),
                "Circuit over {} qubits lost normalization",
                circuit.num_qubits()
            );
        }
    }
}
