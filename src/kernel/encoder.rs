//! Encoder: feature vectors to parameterized circuits.
//!
//! Each component of the input becomes a rotation angle on its own qubit.
//! A layer of CNOTs then pairs qubit `i` with qubit `i + n/2`, and the
//! target picks up a phase proportional to the product of both angles, so the
//! resulting state depends on joint structure in the input and not only on
//! each feature separately.
//!
//! ```text
//! q_i        : H ─ Rz(θ_i) ─●─────────────────── Ry(θ_i)
//! q_{i+n/2}  : H ─ Rz(θ_j) ─X─ Rz(θ_i·θ_j / π) ─ Ry(θ_j)
//! ```

use super::circuit::{Circuit, Gate};
use super::frame::{ErrorKind, PauliFrame};
use crate::error::{KernelError, Result};
use std::f64::consts::{PI, TAU};

/// Wrap an angle into [-π, π).
pub fn wrap_angle(theta: f64) -> f64 {
    (theta + PI).rem_euclid(TAU) - PI
}

/// Encoder for converting feature vectors to circuits.
#[derive(Clone, Copy, Debug)]
pub struct StateEncoder {
    n_qubits: usize,
}

impl StateEncoder {
    /// Create an encoder for a register of `n_qubits` qubits.
    pub fn new(n_qubits: usize) -> Self {
        Self { n_qubits }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Encode one feature vector.
    ///
    /// Out-of-range components are wrapped, never rejected. Fails with
    /// `DimensionMismatch` if `features.len()` differs from the qubit count,
    /// and with `InvalidInput` if any component is NaN or infinite.
    pub fn encode(&self, features: &[f64]) -> Result<EncodedState> {
        if features.len() != self.n_qubits {
            return Err(KernelError::DimensionMismatch {
                expected: self.n_qubits,
                got: features.len(),
            });
        }
        if let Some((index, value)) = features.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(KernelError::InvalidInput(format!(
                "feature {} is {}, expected a finite angle",
                index, value
            )));
        }

        let n = self.n_qubits;
        let half = n / 2;
        let angles: Vec<f64> = features.iter().map(|&v| wrap_angle(v)).collect();
        let mut circuit = Circuit::new(n);

        for (q, &theta) in angles.iter().enumerate() {
            circuit.push(Gate::H(q));
            circuit.push(Gate::Rz(q, theta));
        }

        for i in 0..half {
            let j = i + half;
            circuit.push(Gate::Cnot(i, j));
            circuit.push(Gate::Rz(j, angles[i] * angles[j] / PI));
        }

        for (q, &theta) in angles.iter().enumerate() {
            circuit.push(Gate::Ry(q, theta));
        }

        Ok(EncodedState {
            circuit,
            frame: PauliFrame::identity(n),
        })
    }
}

/// A register's full gate history plus the Pauli frame it carries.
///
/// Noise and correction never edit an existing state; they produce a new one
/// with extra gates appended.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedState {
    circuit: Circuit,
    frame: PauliFrame,
}

impl EncodedState {
    pub fn n_qubits(&self) -> usize {
        self.circuit.n_qubits()
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn frame(&self) -> &PauliFrame {
        &self.frame
    }

    /// A new state with the Pauli `kind` applied to `qubit`.
    pub fn with_pauli(&self, qubit: usize, kind: ErrorKind) -> Self {
        let mut next = self.clone();
        next.apply_pauli(qubit, kind);
        next
    }

    pub(crate) fn apply_pauli(&mut self, qubit: usize, kind: ErrorKind) {
        if kind.has_bit_flip() {
            self.circuit.push(Gate::X(qubit));
        }
        if kind.has_phase_flip() {
            self.circuit.push(Gate::Z(qubit));
        }
        self.frame.toggle(qubit, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::backend::{Simulator, StateVectorSimulator};

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_angle(PI + 0.25) - (-PI + 0.25)).abs() < 1e-12);
        assert!((wrap_angle(-3.0 * PI - 0.1) - (PI - 0.1)).abs() < 1e-9);
        let w = wrap_angle(1e6);
        assert!((-PI..PI).contains(&w));
    }

    #[test]
    fn test_dimension_mismatch() {
        let enc = StateEncoder::new(4);
        let err = enc.encode(&[0.1, 0.2, 0.3]).unwrap_err();
        assert!(matches!(
            err,
            KernelError::DimensionMismatch {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn test_non_finite_feature_rejected() {
        let enc = StateEncoder::new(4);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = enc.encode(&[0.1, bad, 0.3, 0.4]).unwrap_err();
            match err {
                KernelError::InvalidInput(msg) => assert!(msg.contains("feature 1")),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_circuit_shape() {
        let enc = StateEncoder::new(6);
        let state = enc.encode(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
        // H + Rz per qubit, CNOT + Rz per pair, Ry per qubit
        assert_eq!(state.circuit().len(), 6 * 2 + 3 * 2 + 6);
        assert_eq!(state.circuit().entangling_count(), 3);
        assert!(state.circuit().gates().contains(&Gate::Cnot(0, 3)));
        assert!(state.frame().is_identity());
    }

    #[test]
    fn test_wrapped_inputs_encode_identically() {
        let enc = StateEncoder::new(2);
        let a = enc.encode(&[0.3, -1.2]).unwrap();
        let b = enc.encode(&[0.3 + TAU, -1.2 - 2.0 * TAU]).unwrap();
        let sim = StateVectorSimulator::new();
        let sa = sim.run(a.circuit()).unwrap();
        let sb = sim.run(b.circuit()).unwrap();
        assert!((sa.inner(&sb).unwrap().norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_inputs_distinct_states() {
        let enc = StateEncoder::new(4);
        let sim = StateVectorSimulator::new();
        let a = sim.run(enc.encode(&[1.0, 2.0, 2.0, 1.0]).unwrap().circuit()).unwrap();
        let b = sim.run(enc.encode(&[1.0, 2.0, 1.0, 2.0]).unwrap().circuit()).unwrap();
        assert!(a.inner(&b).unwrap().norm() < 1.0 - 1e-6);
    }

    #[test]
    fn test_with_pauli_leaves_original_untouched() {
        let enc = StateEncoder::new(2);
        let clean = enc.encode(&[0.4, 0.8]).unwrap();
        let noisy = clean.with_pauli(1, ErrorKind::Both);
        assert!(clean.frame().is_identity());
        assert_eq!(noisy.circuit().len(), clean.circuit().len() + 2);
        assert!(noisy.frame().x(1) && noisy.frame().z(1));
    }
}
