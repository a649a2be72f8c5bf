//! Dense state-vector representation
//!
//! An n-qubit state is a vector of 2^n complex amplitudes, indexed by the
//! binary representation of each basis outcome (bit i of the index = qubit
//! i). Gates are applied in place by iterating amplitude pairs selected with
//! bit masks, so untouched qubits keep their amplitudes.

use crate::constants::sim::NORM_TOLERANCE;
use crate::error::{Error, Result};
use crate::sim::gate::Gate;
use num_complex::Complex64;

/// An n-qubit quantum state as a dense complex vector
#[derive(Debug, Clone)]
pub struct StateVector {
    num_qubits: usize,
    amps: Vec<Complex64>,
}

impl StateVector {
    /// Create the all-zero basis state |0...0>: amplitude 1 at index 0
    pub fn new(num_qubits: usize) -> Self {
        let mut amps = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amps[0] = Complex64::new(1.0, 0.0);
        Self { num_qubits, amps }
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2^num_qubits)
    pub fn dimension(&self) -> usize {
        self.amps.len()
    }

    /// The raw amplitudes
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Apply a gate in place
    ///
    /// Unitary gates preserve the norm; `check_normalized` verifies the
    /// invariant after a full gate sequence.
    pub fn apply(&mut self, gate: &Gate) -> Result<()> {
        for qubit in gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(Error::Simulation(format!(
                    "Gate {} targets qubit {} but the state has {} qubits",
                    gate.name(),
                    qubit,
                    self.num_qubits
                )));
            }
        }

        match gate {
            Gate::Hadamard { target } | Gate::RotateZ { target, .. } => {
                // qubits() already validated; single_qubit_matrix is Some
                // for both variants
                let matrix = gate
                    .single_qubit_matrix()
                    .ok_or_else(|| Error::Simulation("Missing single-qubit matrix".to_string()))?;
                self.apply_single(&matrix, *target);
            }
            Gate::ControlledNot { control, target } => {
                if control == target {
                    return Err(Error::Simulation(format!(
                        "CNOT control and target are both qubit {}",
                        control
                    )));
                }
                self.apply_cnot(*control, *target);
            }
        }

        Ok(())
    }

    /// Apply a 2x2 unitary to one qubit
    ///
    /// Visits each amplitude pair (index with target bit 0, same index with
    /// target bit 1) exactly once.
    fn apply_single(&mut self, matrix: &[[Complex64; 2]; 2], target: usize) {
        let mask = 1usize << target;

        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a0 = self.amps[i];
                let a1 = self.amps[j];
                self.amps[i] = matrix[0][0] * a0 + matrix[0][1] * a1;
                self.amps[j] = matrix[1][0] * a0 + matrix[1][1] * a1;
            }
        }
    }

    /// Swap the target-bit amplitude pair wherever the control bit is 1
    fn apply_cnot(&mut self, control: usize, target: usize) {
        let cmask = 1usize << control;
        let tmask = 1usize << target;

        for i in 0..self.amps.len() {
            if i & cmask != 0 && i & tmask == 0 {
                self.amps.swap(i, i | tmask);
            }
        }
    }

    /// Born-rule probabilities: |amplitude|^2 per basis outcome
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Check |norm_sqr - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() < epsilon
    }

    /// Enforce the normalization invariant after a gate sequence
    ///
    /// A violation means the simulation itself is inconsistent, which is a
    /// fatal internal error.
    pub fn check_normalized(&self) -> Result<()> {
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() >= NORM_TOLERANCE {
            return Err(Error::Simulation(format!(
                "State normalization violated: |amplitudes|^2 sums to {}",
                norm_sqr
            )));
        }
        Ok(())
    }
}
