//! Gate definitions
//!
//! The three gates the circuit families need: Hadamard, Z-rotation with an
//! explicit angle, and controlled-NOT. Single-qubit gates expose their 2x2
//! unitary; CNOT is applied as an amplitude-pair swap in the state vector.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// A named gate with its target qubit(s)
///
/// Gates are immutable; application happens in `StateVector::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Equal-superposition mixing with a sign flip on the |1> component
    Hadamard { target: usize },

    /// Phase-multiply the |1>-component amplitude by e^{i*theta}
    RotateZ { target: usize, theta: f64 },

    /// Flip the target qubit where the control qubit is 1
    ControlledNot { control: usize, target: usize },
}

impl Gate {
    /// Short mnemonic used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Hadamard { .. } => "h",
            Gate::RotateZ { .. } => "rz",
            Gate::ControlledNot { .. } => "cx",
        }
    }

    /// All qubit indices this gate touches
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Gate::Hadamard { target } => vec![*target],
            Gate::RotateZ { target, .. } => vec![*target],
            Gate::ControlledNot { control, target } => vec![*control, *target],
        }
    }

    /// 2x2 unitary matrix for single-qubit gates, row-major; None for CNOT
    pub fn single_qubit_matrix(&self) -> Option<[[Complex64; 2]; 2]> {
        match self {
            Gate::Hadamard { .. } => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                Some([[h, h], [h, -h]])
            }
            Gate::RotateZ { theta, .. } => {
                let one = Complex64::new(1.0, 0.0);
                let zero = Complex64::new(0.0, 0.0);
                let phase = Complex64::from_polar(1.0, *theta);
                Some([[one, zero], [zero, phase]])
            }
            Gate::ControlledNot { .. } => None,
        }
    }
}
