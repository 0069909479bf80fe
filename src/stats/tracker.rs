//! Running error-correction statistics.

use super::record::{CorrectionOutcome, CorrectionRecord};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Aggregate view of the correction log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorCorrectionStats {
    /// Completed kernel evaluations (pairs).
    pub evaluations: u64,
    /// States that went through syndrome extraction (two per evaluation).
    pub states_processed: u64,
    /// States whose syndrome was non-zero.
    pub errors_detected: u64,
    pub corrections_attempted: u64,
    pub corrections_succeeded: u64,
    /// `corrections_succeeded / corrections_attempted`, 0 when nothing was attempted.
    pub success_rate: f64,
    /// `errors_detected / states_processed`, 0 when nothing was processed.
    pub detection_rate: f64,
    /// Mean number of violated generators per processed state.
    pub mean_syndrome_weight: f64,
    /// Attempted corrections per qubit index.
    pub corrections_per_qubit: Vec<u64>,
}

impl ErrorCorrectionStats {
    /// Serialize for an external reporting tool.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Append-only correction log with counters.
///
/// One tracker belongs to one kernel instance. Counters are only touched
/// by [`record`](Self::record), [`record_evaluation`](Self::record_evaluation)
/// and [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct StatsTracker {
    records: Vec<CorrectionRecord>,
    evaluations: u64,
    errors_detected: u64,
    attempted: u64,
    succeeded: u64,
    syndrome_weight_total: u64,
    corrections_per_qubit: Vec<u64>,
    next_sequence: u64,
}

impl StatsTracker {
    /// Create an empty tracker for a register of `n_qubits` qubits.
    pub fn new(n_qubits: usize) -> Self {
        Self {
            records: Vec::new(),
            evaluations: 0,
            errors_detected: 0,
            attempted: 0,
            succeeded: 0,
            syndrome_weight_total: 0,
            corrections_per_qubit: vec![0; n_qubits],
            next_sequence: 0,
        }
    }

    /// Append one state outcome to the log.
    pub fn record(&mut self, outcome: CorrectionOutcome) {
        if outcome.error_detected() {
            self.errors_detected += 1;
        }
        if outcome.attempted {
            self.attempted += 1;
            for &q in &outcome.qubits_affected {
                if let Some(count) = self.corrections_per_qubit.get_mut(q) {
                    *count += 1;
                }
            }
        }
        if outcome.succeeded {
            self.succeeded += 1;
        }
        self.syndrome_weight_total += outcome.syndrome.weight() as u64;

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.records.push(CorrectionRecord::from_outcome(sequence, outcome));
    }

    /// Append all outcomes of one completed evaluation.
    pub fn record_evaluation<I>(&mut self, outcomes: I)
    where
        I: IntoIterator<Item = CorrectionOutcome>,
    {
        for outcome in outcomes {
            self.record(outcome);
        }
        self.evaluations += 1;
    }

    /// The full log, in append order.
    pub fn history(&self) -> &[CorrectionRecord] {
        &self.records
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Aggregate the log.
    pub fn summary(&self) -> ErrorCorrectionStats {
        let states = self.records.len() as u64;
        ErrorCorrectionStats {
            evaluations: self.evaluations,
            states_processed: states,
            errors_detected: self.errors_detected,
            corrections_attempted: self.attempted,
            corrections_succeeded: self.succeeded,
            success_rate: ratio(self.succeeded, self.attempted),
            detection_rate: ratio(self.errors_detected, states),
            mean_syndrome_weight: ratio(self.syndrome_weight_total, states),
            corrections_per_qubit: self.corrections_per_qubit.clone(),
        }
    }

    /// Clear the log and all counters.
    pub fn reset(&mut self) {
        let n_qubits = self.corrections_per_qubit.len();
        *self = Self::new(n_qubits);
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
