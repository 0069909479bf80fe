//! Pairwise stabilizer code: syndrome extraction and decoding.
//!
//! The register is covered by two interleaved pairings:
//!
//! - **Bit-flip checks** `B_k = Z_{2k} Z_{2k+1}` fire when an odd number of
//!   X errors sit on the pair.
//! - **Phase-flip checks** `P_k = X_{2k+1} X_{(2k+2) mod n}` fire when an odd
//!   number of Z errors sit on the pair.
//!
//! Every qubit is touched by exactly one check of each type, and for `n >= 4`
//! a `B` and a `P` check share at most one qubit. A syndrome where both checks
//! touching a qubit fire therefore pins down a single site. A lone firing
//! check leaves two equally likely qubits; the decoder picks the
//! lower-indexed one.
//!
//! The syndrome layout is `[B_0, .., B_{n/2-1}, P_0, .., P_{n/2-1}]`.
//!
//! # Example
//!
//! ```rust
//! use qec_kernel::kernel::{ErrorKind, StabilizerCode, StateEncoder};
//!
//! let code = StabilizerCode::new(6).unwrap();
//! let state = StateEncoder::new(6).encode(&[0.1; 6]).unwrap();
//!
//! // X on qubit 3 trips B_1 = Z_2 Z_3 only.
//! let noisy = state.with_pauli(3, ErrorKind::BitFlip);
//! let syndrome = code.measure_syndrome(&noisy).unwrap();
//! assert_eq!(syndrome.fired(), vec![1]);
//!
//! // Both qubits of the pair are equally likely: lowest index wins.
//! let hypothesis = code.decode(&syndrome).unwrap();
//! assert_eq!(hypothesis.error().unwrap().qubit, 2);
//! ```

use super::encoder::EncodedState;
use super::frame::{ErrorKind, PauliError, PauliFrame};
use crate::error::{KernelError, Result};
use serde::{Deserialize, Serialize};

/// Which error type a generator detects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    /// Z-type parity check, detects X errors
    BitFlip,
    /// X-type parity check, detects Z errors
    PhaseFlip,
}

/// A two-qubit parity-check operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilizerGenerator {
    pub kind: CheckKind,
    pub qubits: [usize; 2],
}

impl StabilizerGenerator {
    /// Whether the check anticommutes with the given frame.
    pub fn is_violated(&self, frame: &PauliFrame) -> bool {
        let [a, b] = self.qubits;
        match self.kind {
            CheckKind::BitFlip => frame.x(a) ^ frame.x(b),
            CheckKind::PhaseFlip => frame.z(a) ^ frame.z(b),
        }
    }

    pub fn touches(&self, qubit: usize) -> bool {
        self.qubits.contains(&qubit)
    }
}

/// Generator outcomes, `true` = violated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syndrome {
    bits: Vec<bool>,
}

impl Syndrome {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of violated generators.
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// All-zero syndrome: nothing detected.
    pub fn is_clean(&self) -> bool {
        self.weight() == 0
    }

    /// Indices of violated generators, ascending.
    pub fn fired(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Decoder output: the single most likely error, if any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorHypothesis {
    error: Option<PauliError>,
    /// Fraction of the syndrome explained, divided by the number of equally
    /// likely sites. In [0, 1].
    confidence: f64,
    /// Qubits that would explain the same syndrome bits equally well.
    candidates: Vec<usize>,
}

impl ErrorHypothesis {
    /// No detected error, no action.
    pub fn empty() -> Self {
        Self {
            error: None,
            confidence: 0.0,
            candidates: Vec::new(),
        }
    }

    /// Build a hypothesis directly, e.g. for testing a corrector policy.
    pub fn new(error: PauliError, confidence: f64, candidates: Vec<usize>) -> Self {
        Self {
            error: Some(error),
            confidence: confidence.clamp(0.0, 1.0),
            candidates,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<PauliError> {
        self.error
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }
}

/// The pairwise code over a fixed register.
#[derive(Clone, Debug)]
pub struct StabilizerCode {
    n_qubits: usize,
    generators: Vec<StabilizerGenerator>,
}

impl StabilizerCode {
    /// Build the code for `n_qubits` qubits.
    ///
    /// Fails with `InvalidConfiguration` unless `n_qubits` is positive and even.
    pub fn new(n_qubits: usize) -> Result<Self> {
        if n_qubits == 0 || n_qubits % 2 != 0 {
            return Err(KernelError::InvalidConfiguration(format!(
                "stabilizer code needs a positive even qubit count, got {}",
                n_qubits
            )));
        }

        let half = n_qubits / 2;
        let bit_flip = (0..half).map(|k| StabilizerGenerator {
            kind: CheckKind::BitFlip,
            qubits: [2 * k, 2 * k + 1],
        });
        let phase_flip = (0..half).map(|k| StabilizerGenerator {
            kind: CheckKind::PhaseFlip,
            qubits: [2 * k + 1, (2 * k + 2) % n_qubits],
        });
        let generators = bit_flip.chain(phase_flip).collect();

        Ok(Self {
            n_qubits,
            generators,
        })
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn generators(&self) -> &[StabilizerGenerator] {
        &self.generators
    }

    /// Index of the bit-flip check touching `qubit`.
    pub fn bit_check_of(&self, qubit: usize) -> usize {
        qubit / 2
    }

    /// Index (within the syndrome) of the phase-flip check touching `qubit`.
    pub fn phase_check_of(&self, qubit: usize) -> usize {
        let half = self.n_qubits / 2;
        let k = if qubit % 2 == 1 {
            (qubit - 1) / 2
        } else {
            (qubit / 2 + half - 1) % half
        };
        half + k
    }

    /// Measure every generator against the state's frame.
    pub fn measure_syndrome(&self, state: &EncodedState) -> Result<Syndrome> {
        self.measure_frame(state.frame())
    }

    /// Measure every generator against a bare frame.
    pub fn measure_frame(&self, frame: &PauliFrame) -> Result<Syndrome> {
        if frame.n_qubits() != self.n_qubits {
            return Err(KernelError::DimensionMismatch {
                expected: self.n_qubits,
                got: frame.n_qubits(),
            });
        }
        Ok(Syndrome {
            bits: self.generators.iter().map(|g| g.is_violated(frame)).collect(),
        })
    }

    /// Map a syndrome to the most likely single-qubit error.
    ///
    /// A qubit whose bit-flip and phase-flip checks both fire explains two
    /// syndrome bits with one error and is preferred. Otherwise the lowest
    /// qubit touched by any fired check is chosen. Ties always go to the
    /// lowest qubit index.
    pub fn decode(&self, syndrome: &Syndrome) -> Result<ErrorHypothesis> {
        if syndrome.len() != self.generators.len() {
            return Err(KernelError::DimensionMismatch {
                expected: self.generators.len(),
                got: syndrome.len(),
            });
        }

        let weight = syndrome.weight();
        if weight == 0 {
            return Ok(ErrorHypothesis::empty());
        }

        let bits = syndrome.bits();
        let bit_hit = |q: usize| bits[self.bit_check_of(q)];
        let phase_hit = |q: usize| bits[self.phase_check_of(q)];

        let doubles: Vec<usize> = (0..self.n_qubits)
            .filter(|&q| bit_hit(q) && phase_hit(q))
            .collect();

        if let Some(&qubit) = doubles.first() {
            let checks = (self.bit_check_of(qubit), self.phase_check_of(qubit));
            let candidates: Vec<usize> = doubles
                .iter()
                .copied()
                .filter(|&q| (self.bit_check_of(q), self.phase_check_of(q)) == checks)
                .collect();
            let confidence = confidence(2, weight, candidates.len());
            return Ok(ErrorHypothesis::new(
                PauliError {
                    qubit,
                    kind: ErrorKind::Both,
                },
                confidence,
                candidates,
            ));
        }

        let Some(qubit) = (0..self.n_qubits).find(|&q| bit_hit(q) || phase_hit(q)) else {
            return Ok(ErrorHypothesis::empty());
        };
        let (kind, check) = if bit_hit(qubit) {
            (ErrorKind::BitFlip, self.bit_check_of(qubit))
        } else {
            (ErrorKind::PhaseFlip, self.phase_check_of(qubit))
        };
        let mut candidates = self.generators[check].qubits.to_vec();
        candidates.sort_unstable();

        Ok(ErrorHypothesis::new(
            PauliError { qubit, kind },
            confidence(1, weight, candidates.len()),
            candidates,
        ))
    }
}

fn confidence(explained: usize, weight: usize, ambiguity: usize) -> f64 {
    (explained as f64 / weight as f64) / ambiguity.max(1) as f64
}
