//! Threshold-gated correction.
//!
//! A decoded hypothesis is applied only when its confidence is strictly
//! above the threshold. Below it the syndrome is treated as too ambiguous to
//! act on, and the state passes through untouched. After applying the inverse
//! Pauli the syndrome is measured again; the correction counts as successful
//! only if that second syndrome is all zero.

use super::encoder::EncodedState;
use super::stabilizer::{ErrorHypothesis, StabilizerCode, Syndrome};
use crate::error::Result;
use tracing::debug;

/// Source of the correction threshold.
///
/// The shipped policy is [`FixedThreshold`]. A policy that tracks the rolling
/// success rate would implement this trait and be swapped in by the caller.
pub trait ThresholdPolicy {
    /// Minimum confidence (exclusive) for a correction to be attempted.
    fn threshold(&self) -> f64;
}

/// A threshold fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedThreshold(pub f64);

impl ThresholdPolicy for FixedThreshold {
    fn threshold(&self) -> f64 {
        self.0
    }
}

/// Result of one correction pass.
#[derive(Clone, Debug)]
pub struct Correction {
    /// The state after correction (identical to the input when not attempted).
    pub state: EncodedState,
    pub attempted: bool,
    /// `true` only if attempted and the re-measured syndrome is clean.
    pub succeeded: bool,
    pub qubits_affected: Vec<usize>,
    /// Syndrome measured after the correction pass.
    pub residual: Syndrome,
}

/// Applies decoded corrections gated by a [`ThresholdPolicy`].
#[derive(Clone, Debug)]
pub struct Corrector<P: ThresholdPolicy = FixedThreshold> {
    policy: P,
}

impl Corrector<FixedThreshold> {
    pub fn new(threshold: f64) -> Self {
        Self {
            policy: FixedThreshold(threshold),
        }
    }
}

impl<P: ThresholdPolicy> Corrector<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn threshold(&self) -> f64 {
        self.policy.threshold()
    }

    /// Whether `hypothesis` clears the threshold.
    pub fn should_attempt(&self, hypothesis: &ErrorHypothesis) -> bool {
        !hypothesis.is_empty() && hypothesis.confidence() > self.threshold()
    }

    /// Apply `hypothesis` to `state` if it clears the threshold.
    pub fn correct(
        &self,
        code: &StabilizerCode,
        state: &EncodedState,
        hypothesis: &ErrorHypothesis,
    ) -> Result<Correction> {
        let error = match hypothesis.error() {
            Some(error) if self.should_attempt(hypothesis) => error,
            _ => {
                if !hypothesis.is_empty() {
                    debug!(
                        confidence = hypothesis.confidence(),
                        threshold = self.threshold(),
                        "correction skipped below threshold"
                    );
                }
                return Ok(Correction {
                    state: state.clone(),
                    attempted: false,
                    succeeded: false,
                    qubits_affected: Vec::new(),
                    residual: code.measure_syndrome(state)?,
                });
            }
        };

        // Paulis are self-inverse.
        let corrected = state.with_pauli(error.qubit, error.kind);
        let residual = code.measure_syndrome(&corrected)?;
        let succeeded = residual.is_clean();

        debug!(
            qubit = error.qubit,
            kind = ?error.kind,
            confidence = hypothesis.confidence(),
            succeeded,
            "correction applied"
        );

        Ok(Correction {
            state: corrected,
            attempted: true,
            succeeded,
            qubits_affected: vec![error.qubit],
            residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::encoder::StateEncoder;
    use crate::kernel::frame::{ErrorKind, PauliError};
    use crate::stats::{CorrectionOutcome, StatsTracker};

    fn setup(n: usize) -> (StabilizerCode, EncodedState) {
        let code = StabilizerCode::new(n).unwrap();
        let state = StateEncoder::new(n).encode(&vec![0.7; n]).unwrap();
        (code, state)
    }

    #[test]
    fn test_single_error_corrected() {
        let (code, clean) = setup(6);
        let noisy = clean.with_pauli(3, ErrorKind::Both);
        let h = code.decode(&code.measure_syndrome(&noisy).unwrap()).unwrap();
        let c = Corrector::new(0.15).correct(&code, &noisy, &h).unwrap();
        assert!(c.attempted);
        assert!(c.succeeded);
        assert_eq!(c.qubits_affected, vec![3]);
        assert!(c.state.frame().is_identity());
    }

    #[test]
    fn test_misidentified_partner_still_clears_syndrome() {
        let (code, clean) = setup(6);
        let noisy = clean.with_pauli(1, ErrorKind::BitFlip);
        let h = code.decode(&code.measure_syndrome(&noisy).unwrap()).unwrap();
        let c = Corrector::new(0.15).correct(&code, &noisy, &h).unwrap();
        assert_eq!(c.qubits_affected, vec![0]);
        assert!(c.succeeded);
        // X_0 X_1 remains: invisible to the checks.
        assert_eq!(c.state.frame().weight(), 2);
    }

    #[test]
    fn test_two_separate_errors_fail() {
        let (code, clean) = setup(6);
        let noisy = clean
            .with_pauli(0, ErrorKind::BitFlip)
            .with_pauli(4, ErrorKind::BitFlip);
        let h = code.decode(&code.measure_syndrome(&noisy).unwrap()).unwrap();
        let c = Corrector::new(0.15).correct(&code, &noisy, &h).unwrap();
        assert!(c.attempted);
        assert!(!c.succeeded);
        assert_eq!(c.residual.weight(), 1);
    }

    #[test]
    fn test_confidence_at_threshold_not_attempted() {
        let (code, clean) = setup(6);
        let noisy = clean.with_pauli(2, ErrorKind::PhaseFlip);
        let h = code.decode(&code.measure_syndrome(&noisy).unwrap()).unwrap();
        assert!((h.confidence() - 0.5).abs() < 1e-12);
        let c = Corrector::new(0.5).correct(&code, &noisy, &h).unwrap();
        assert!(!c.attempted);
        assert!(!c.succeeded);
        assert_eq!(c.state, noisy);
        assert_eq!(c.residual.weight(), 1);
    }

    #[test]
    fn test_ambiguous_syndrome_leaves_attempt_count_unchanged() {
        let (code, clean) = setup(8);
        let noisy = [0, 2, 4, 6]
            .iter()
            .fold(clean, |s, &q| s.with_pauli(q, ErrorKind::BitFlip));
        let syndrome = code.measure_syndrome(&noisy).unwrap();
        assert_eq!(syndrome.weight(), 4);
        let h = code.decode(&syndrome).unwrap();
        assert!((h.confidence() - 0.125).abs() < 1e-12);

        let c = Corrector::new(0.15).correct(&code, &noisy, &h).unwrap();
        let mut tracker = StatsTracker::new(8);
        tracker.record(CorrectionOutcome {
            syndrome,
            attempted: c.attempted,
            succeeded: c.succeeded,
            qubits_affected: c.qubits_affected,
            confidence: h.confidence(),
        });
        let stats = tracker.summary();
        assert_eq!(stats.errors_detected, 1);
        assert_eq!(stats.corrections_attempted, 0);
        assert_eq!(stats.corrections_per_qubit, vec![0; 8]);
    }

    #[test]
    fn test_contrived_low_confidence_hypothesis() {
        let (code, clean) = setup(4);
        let h = ErrorHypothesis::new(
            PauliError {
                qubit: 1,
                kind: ErrorKind::BitFlip,
            },
            0.05,
            vec![0, 1],
        );
        let c = Corrector::new(0.15).correct(&code, &clean, &h).unwrap();
        assert!(!c.attempted);
        assert_eq!(c.state, clean);
    }

    #[test]
    fn test_empty_hypothesis_is_noop() {
        let (code, clean) = setup(4);
        let c = Corrector::new(0.0)
            .correct(&code, &clean, &ErrorHypothesis::empty())
            .unwrap();
        assert!(!c.attempted);
        assert!(c.residual.is_clean());
    }

    #[test]
    fn test_custom_policy() {
        struct Never;
        impl ThresholdPolicy for Never {
            fn threshold(&self) -> f64 {
                1.0
            }
        }
        let (code, clean) = setup(6);
        let noisy = clean.with_pauli(3, ErrorKind::Both);
        let h = code.decode(&code.measure_syndrome(&noisy).unwrap()).unwrap();
        let c = Corrector::with_policy(Never).correct(&code, &noisy, &h).unwrap();
        assert!(!c.attempted);
    }
}
