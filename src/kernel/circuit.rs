//! Circuit description handed to a [`Simulator`](super::backend::Simulator).
//!
//! A circuit is nothing more than a qubit count and an ordered gate list.
//! Encoding, noise and correction all append to the same list, so the
//! circuit a backend receives is the full history of one register.

use serde::{Deserialize, Serialize};

/// A single gate operation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard
    H(usize),
    /// Pauli X (bit flip)
    X(usize),
    /// Pauli Z (phase flip)
    Z(usize),
    /// Rotation about X by the given angle
    Rx(usize, f64),
    /// Rotation about Y by the given angle
    Ry(usize, f64),
    /// Rotation about Z by the given angle
    Rz(usize, f64),
    /// Controlled NOT: (control, target)
    Cnot(usize, usize),
    /// Controlled Z (symmetric)
    Cz(usize, usize),
}

impl Gate {
    /// Qubits this gate acts on.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::H(q) | Gate::X(q) | Gate::Z(q) => vec![q],
            Gate::Rx(q, _) | Gate::Ry(q, _) | Gate::Rz(q, _) => vec![q],
            Gate::Cnot(a, b) | Gate::Cz(a, b) => vec![a, b],
        }
    }
}

/// An ordered gate sequence over a fixed register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    n_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit over `n_qubits` qubits.
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            gates: Vec::new(),
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a gate.
    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Number of two-qubit gates.
    pub fn entangling_count(&self) -> usize {
        self.gates
            .iter()
            .filter(|g| matches!(g, Gate::Cnot(..) | Gate::Cz(..)))
            .count()
    }
}
