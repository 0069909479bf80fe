//! Simulator backends.
//!
//! The kernel only needs one thing from a simulator: run a [`Circuit`] and
//! hand back the final amplitudes. [`StateVectorSimulator`] is the bundled
//! dense implementation; anything else (a remote service, a tableau
//! simulator that can produce amplitudes) plugs in through [`Simulator`].

use super::circuit::{Circuit, Gate};
use super::state::{gates, StateVector};
use crate::error::{KernelError, Result};

/// Largest register the dense backend will allocate (2^20 amplitudes).
pub const MAX_QUBITS: usize = 20;

/// Executes a circuit and returns the resulting state.
///
/// Backends are shared across matrix workers, hence `Send + Sync`.
pub trait Simulator: Send + Sync {
    /// Run `circuit` from |0...0⟩.
    ///
    /// Implementations report backend problems as
    /// [`KernelError::SimulationFailure`].
    fn run(&self, circuit: &Circuit) -> Result<StateVector>;
}

/// Dense complex state-vector simulator.
#[derive(Clone, Copy, Debug)]
pub struct StateVectorSimulator {
    max_qubits: usize,
}

impl StateVectorSimulator {
    pub fn new() -> Self {
        Self {
            max_qubits: MAX_QUBITS,
        }
    }

    /// Simulator refusing registers larger than `max_qubits`.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self {
            max_qubits: max_qubits.min(MAX_QUBITS),
        }
    }

    pub fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    fn check_circuit(&self, circuit: &Circuit) -> Result<()> {
        let n = circuit.n_qubits();
        if n == 0 || n > self.max_qubits {
            return Err(KernelError::SimulationFailure(format!(
                "register of {} qubits outside supported range 1..={}",
                n, self.max_qubits
            )));
        }
        for (index, gate) in circuit.gates().iter().enumerate() {
            let qubits = gate.qubits();
            if let Some(&q) = qubits.iter().find(|&&q| q >= n) {
                return Err(KernelError::SimulationFailure(format!(
                    "gate {} ({:?}) targets qubit {} on a {}-qubit register",
                    index, gate, q, n
                )));
            }
            if qubits.len() == 2 && qubits[0] == qubits[1] {
                return Err(KernelError::SimulationFailure(format!(
                    "gate {} ({:?}) uses the same qubit twice",
                    index, gate
                )));
            }
        }
        Ok(())
    }
}

impl Default for StateVectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator for StateVectorSimulator {
    fn run(&self, circuit: &Circuit) -> Result<StateVector> {
        self.check_circuit(circuit)?;

        let mut state = StateVector::zero(circuit.n_qubits());
        for gate in circuit.gates() {
            match *gate {
                Gate::H(q) => state.apply_single(q, &gates::hadamard()),
                Gate::X(q) => state.apply_single(q, &gates::pauli_x()),
                Gate::Z(q) => state.apply_single(q, &gates::pauli_z()),
                Gate::Rx(q, theta) => state.apply_single(q, &gates::rx(theta)),
                Gate::Ry(q, theta) => state.apply_single(q, &gates::ry(theta)),
                Gate::Rz(q, theta) => state.apply_single(q, &gates::rz(theta)),
                Gate::Cnot(c, t) => state.apply_cnot(c, t),
                Gate::Cz(a, b) => state.apply_cz(a, b),
            }
        }
        Ok(state)
    }
}
