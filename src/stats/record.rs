//! Correction log entries.

use crate::kernel::Syndrome;
use serde::{Deserialize, Serialize};

/// What happened to one state between noise and overlap.
///
/// Produced by the evaluator and turned into a [`CorrectionRecord`] when the
/// tracker appends it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrectionOutcome {
    /// Syndrome measured before correction.
    pub syndrome: Syndrome,
    pub attempted: bool,
    pub succeeded: bool,
    pub qubits_affected: Vec<usize>,
    /// Decoder confidence (0 when the syndrome was clean).
    pub confidence: f64,
}

impl CorrectionOutcome {
    pub fn error_detected(&self) -> bool {
        !self.syndrome.is_clean()
    }
}

/// A logged [`CorrectionOutcome`] with its position in the log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    /// Zero-based append order since construction or the last reset.
    pub sequence: u64,
    pub attempted: bool,
    pub succeeded: bool,
    pub syndrome: Syndrome,
    pub qubits_affected: Vec<usize>,
    pub confidence: f64,
}

impl CorrectionRecord {
    pub(crate) fn from_outcome(sequence: u64, outcome: CorrectionOutcome) -> Self {
        Self {
            sequence,
            attempted: outcome.attempted,
            succeeded: outcome.succeeded,
            syndrome: outcome.syndrome,
            qubits_affected: outcome.qubits_affected,
            confidence: outcome.confidence,
        }
    }

    pub fn error_detected(&self) -> bool {
        !self.syndrome.is_clean()
    }
}
