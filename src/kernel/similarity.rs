//! Overlap metrics for state comparison.
//!
//! All metrics start from the inner product ⟨a|b⟩ of two normalized states
//! and project it to a real scalar. Results are clamped to the metric's range
//! so floating-point drift never leaks out of it.

use super::state::StateVector;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Available kernel metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KernelMetric {
    /// State fidelity |⟨a|b⟩|², in [0, 1]
    Fidelity,
    /// Fidelity rescaled to 2|⟨a|b⟩|² - 1, in [-1, 1]
    #[default]
    Rescaled,
    /// Real part of the overlap Re⟨a|b⟩, in [-1, 1]
    RealOverlap,
}

impl KernelMetric {
    /// Smallest value the metric can produce.
    pub fn lower_bound(self) -> f64 {
        match self {
            KernelMetric::Fidelity => 0.0,
            KernelMetric::Rescaled | KernelMetric::RealOverlap => -1.0,
        }
    }
}

/// Similarity computation for states.
pub struct Similarity;

impl Similarity {
    /// Compute similarity using the specified metric.
    ///
    /// The result always lies in `[metric.lower_bound(), 1]`.
    pub fn compute(a: &StateVector, b: &StateVector, metric: KernelMetric) -> Result<f64> {
        let value = match metric {
            KernelMetric::Fidelity => Self::fidelity(a, b)?,
            KernelMetric::Rescaled => Self::rescaled(a, b)?,
            KernelMetric::RealOverlap => Self::real_overlap(a, b)?,
        };
        Ok(value.clamp(metric.lower_bound(), 1.0))
    }

    /// |⟨a|b⟩|²
    pub fn fidelity(a: &StateVector, b: &StateVector) -> Result<f64> {
        Ok(a.inner(b)?.norm_sqr().clamp(0.0, 1.0))
    }

    /// 2|⟨a|b⟩|² - 1
    ///
    /// Orthogonal states map to -1, identical states (up to global phase) to 1.
    pub fn rescaled(a: &StateVector, b: &StateVector) -> Result<f64> {
        Ok((2.0 * Self::fidelity(a, b)? - 1.0).clamp(-1.0, 1.0))
    }

    /// Re⟨a|b⟩
    ///
    /// Sensitive to relative phase, so a Z error that flips the sign of a
    /// state shows up as anti-correlation.
    pub fn real_overlap(a: &StateVector, b: &StateVector) -> Result<f64> {
        Ok(a.inner(b)?.re.clamp(-1.0, 1.0))
    }
}
