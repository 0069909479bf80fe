//! Dense state vector over `n` qubits.
//!
//! Basis index bit `q` holds the value of qubit `q` (little-endian), so the
//! amplitude of |q_{n-1} ... q_1 q_0⟩ lives at index `Σ q_k 2^k`.

use crate::error::{KernelError, Result};
use num_complex::Complex64;

/// Tolerance used when checking that a state is normalized.
pub const NORM_TOLERANCE: f64 = 1e-6;

/// A 2x2 complex matrix in row-major order.
pub type Matrix2 = [[Complex64; 2]; 2];

/// Pure quantum state as 2^n complex amplitudes.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    n_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// |0...0⟩ on `n_qubits` qubits.
    pub fn zero(n_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << n_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            n_qubits,
            amplitudes,
        }
    }

    /// Wrap amplitudes produced elsewhere, checking shape and normalization.
    ///
    /// Fails with `SimulationFailure` if the amplitude count is not 2^n, any
    /// amplitude is non-finite, or the norm is off by more than
    /// [`NORM_TOLERANCE`].
    pub fn from_amplitudes(n_qubits: usize, amplitudes: Vec<Complex64>) -> Result<Self> {
        let state = Self {
            n_qubits,
            amplitudes,
        };
        state.check()?;
        Ok(state)
    }

    /// Validate shape, finiteness and normalization.
    pub fn check(&self) -> Result<()> {
        if self.n_qubits >= usize::BITS as usize {
            return Err(KernelError::SimulationFailure(format!(
                "{} qubits exceed the addressable state size",
                self.n_qubits
            )));
        }
        let expected = 1usize << self.n_qubits;
        if self.amplitudes.len() != expected {
            return Err(KernelError::SimulationFailure(format!(
                "expected {} amplitudes for {} qubits, got {}",
                expected,
                self.n_qubits,
                self.amplitudes.len()
            )));
        }
        if self.amplitudes.iter().any(|a| !a.re.is_finite() || !a.im.is_finite()) {
            return Err(KernelError::SimulationFailure(
                "state contains non-finite amplitudes".to_string(),
            ));
        }
        let norm = self.norm();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(KernelError::SimulationFailure(format!(
                "state is not normalized (norm = {})",
                norm
            )));
        }
        Ok(())
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// L2 norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Inner product ⟨self|other⟩.
    pub fn inner(&self, other: &StateVector) -> Result<Complex64> {
        if self.n_qubits != other.n_qubits {
            return Err(KernelError::DimensionMismatch {
                expected: self.n_qubits,
                got: other.n_qubits,
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Apply a single-qubit unitary to `qubit`.
    pub fn apply_single(&mut self, qubit: usize, m: &Matrix2) {
        let mask = 1usize << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                continue;
            }
            let j = i | mask;
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
            self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
        }
    }

    /// Flip `target` on every basis state where `control` is 1.
    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        let c = 1usize << control;
        let t = 1usize << target;
        for i in 0..self.amplitudes.len() {
            if i & c != 0 && i & t == 0 {
                self.amplitudes.swap(i, i | t);
            }
        }
    }

    /// Negate every basis state where both qubits are 1.
    pub fn apply_cz(&mut self, a: usize, b: usize) {
        let mask = (1usize << a) | (1usize << b);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp = -*amp;
            }
        }
    }
}

/// Standard single-qubit gate matrices.
pub mod gates {
    use super::Matrix2;
    use num_complex::Complex64;
    use std::f64::consts::FRAC_1_SQRT_2;

    const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    pub fn hadamard() -> Matrix2 {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        [[h, h], [h, -h]]
    }

    pub fn pauli_x() -> Matrix2 {
        [[ZERO, ONE], [ONE, ZERO]]
    }

    pub fn pauli_z() -> Matrix2 {
        [[ONE, ZERO], [ZERO, -ONE]]
    }

    pub fn rx(theta: f64) -> Matrix2 {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(theta / 2.0).sin());
        [[c, s], [s, c]]
    }

    pub fn ry(theta: f64) -> Matrix2 {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new((theta / 2.0).sin(), 0.0);
        [[c, -s], [s, c]]
    }

    pub fn rz(theta: f64) -> Matrix2 {
        [
            [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
            [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
        ]
    }
}
