//! Pauli frame bookkeeping.
//!
//! The frame records, per qubit, whether the register currently carries an
//! X and/or a Z relative to its noiseless reference. Stabilizer outcomes are
//! read against the frame the way frame-propagation simulators read
//! detector outcomes: the reference outcome of every check is +1, and a check
//! flips exactly when the frame anticommutes with it.

use serde::{Deserialize, Serialize};

/// The two elementary error types and their combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// X error
    BitFlip,
    /// Z error
    PhaseFlip,
    /// X and Z on the same qubit (Y up to phase)
    Both,
}

impl ErrorKind {
    pub fn has_bit_flip(self) -> bool {
        matches!(self, ErrorKind::BitFlip | ErrorKind::Both)
    }

    pub fn has_phase_flip(self) -> bool {
        matches!(self, ErrorKind::PhaseFlip | ErrorKind::Both)
    }
}

/// A single-qubit Pauli error at a known location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauliError {
    pub qubit: usize,
    pub kind: ErrorKind,
}

/// Per-qubit X/Z bits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauliFrame {
    x: Vec<bool>,
    z: Vec<bool>,
}

impl PauliFrame {
    /// Identity frame on `n_qubits` qubits.
    pub fn identity(n_qubits: usize) -> Self {
        Self {
            x: vec![false; n_qubits],
            z: vec![false; n_qubits],
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.x.len()
    }

    pub fn x(&self, qubit: usize) -> bool {
        self.x[qubit]
    }

    pub fn z(&self, qubit: usize) -> bool {
        self.z[qubit]
    }

    /// Multiply the frame by the Pauli `kind` on `qubit`.
    pub fn toggle(&mut self, qubit: usize, kind: ErrorKind) {
        if kind.has_bit_flip() {
            self.x[qubit] ^= true;
        }
        if kind.has_phase_flip() {
            self.z[qubit] ^= true;
        }
    }

    pub fn is_identity(&self) -> bool {
        !self.x.iter().chain(self.z.iter()).any(|&b| b)
    }

    /// Number of qubits carrying a non-identity Pauli.
    pub fn weight(&self) -> usize {
        self.x
            .iter()
            .zip(self.z.iter())
            .filter(|(&x, &z)| x || z)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut f = PauliFrame::identity(4);
        f.toggle(2, ErrorKind::Both);
        assert_eq!(f.weight(), 1);
        assert!(f.x(2) && f.z(2));
        f.toggle(2, ErrorKind::BitFlip);
        assert!(!f.x(2) && f.z(2));
        f.toggle(2, ErrorKind::PhaseFlip);
        assert!(f.is_identity());
    }
}
