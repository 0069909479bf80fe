//! Construction parameters for [`QuantumKernel`](crate::highlevel::QuantumKernel).
//!
//! A [`KernelConfig`] can be built in code or parsed from JSON. Every field
//! has a default, so a partial document such as `{"n_qubits": 4}` is valid.
//!
//! ```rust
//! use qec_kernel::KernelConfig;
//!
//! let config = KernelConfig::from_json(r#"{"n_qubits": 4, "seed": 7}"#).unwrap();
//! assert_eq!(config.n_qubits, 4);
//! assert_eq!(config.seed, Some(7));
//! ```

use crate::error::{KernelError, Result};
use crate::kernel::KernelMetric;
use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of one kernel instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Register size. Must be positive and even.
    pub n_qubits: usize,
    /// Per-qubit probability of each of bit-flip and phase-flip, in [0, 1].
    pub error_rate: f64,
    /// Minimum confidence (exclusive) before a correction is applied, in [0, 1].
    pub correction_threshold: f64,
    /// Noise seed. `None` draws a fresh seed from OS entropy on every call.
    pub seed: Option<u64>,
    /// Overlap-to-scalar projection.
    pub metric: KernelMetric,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            n_qubits: 6,
            error_rate: 0.02,
            correction_threshold: 0.15,
            seed: None,
            metric: KernelMetric::Rescaled,
        }
    }
}

impl KernelConfig {
    /// Create a config with the given core parameters and no seed.
    pub fn new(n_qubits: usize, error_rate: f64, correction_threshold: f64) -> Self {
        Self {
            n_qubits,
            error_rate,
            correction_threshold,
            ..Self::default()
        }
    }

    /// Parse a config from a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }

    pub fn with_correction_threshold(mut self, threshold: f64) -> Self {
        self.correction_threshold = threshold;
        self
    }

    pub fn with_metric(mut self, metric: KernelMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.n_qubits == 0 || self.n_qubits % 2 != 0 {
            return Err(KernelError::InvalidConfiguration(format!(
                "n_qubits must be a positive even integer, got {}",
                self.n_qubits
            )));
        }
        check_unit_interval("error_rate", self.error_rate)?;
        check_unit_interval("correction_threshold", self.correction_threshold)?;
        Ok(())
    }
}

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(KernelError::InvalidConfiguration(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(KernelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_odd_qubits_rejected() {
        for n in [0, 1, 3, 5, 7] {
            let err = KernelConfig::new(n, 0.0, 0.1).validate().unwrap_err();
            assert!(matches!(err, KernelError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_rates_out_of_range_rejected() {
        assert!(KernelConfig::new(4, -0.1, 0.1).validate().is_err());
        assert!(KernelConfig::new(4, 1.5, 0.1).validate().is_err());
        assert!(KernelConfig::new(4, 0.1, 2.0).validate().is_err());
        assert!(KernelConfig::new(4, f64::NAN, 0.1).validate().is_err());
        assert!(KernelConfig::new(4, 1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = KernelConfig::from_json(r#"{"n_qubits": 8, "metric": "Fidelity"}"#)
            .expect("valid config");
        assert_eq!(config.n_qubits, 8);
        assert_eq!(config.metric, KernelMetric::Fidelity);
        assert_eq!(config.correction_threshold, 0.15);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = KernelConfig::from_json(r#"{"n_qubits": 5}"#).unwrap_err();
        assert!(matches!(err, KernelError::InvalidConfiguration(_)));

        let err = KernelConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, KernelError::ConfigParse(_)));
    }
}
