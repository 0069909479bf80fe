//! Convenience wrapper that owns a [`KernelEvaluator`] and a
//! [`StatsTracker`] and delegates to the kernel and stats layers.
//!
//! For full control, import from [`kernel`](crate::kernel) and
//! [`stats`](crate::stats) directly.

use crate::config::KernelConfig;
use crate::error::Result;
use crate::kernel::{
    KernelEvaluator, KernelMatrix, KernelMatrixBuilder, Simulator, StateVectorSimulator,
};
use crate::stats::{CorrectionRecord, ErrorCorrectionStats, StatsTracker};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Error-corrected quantum kernel.
///
/// `QuantumKernel` owns one evaluator and one statistics tracker. Statistics
/// aggregate across every call on the same instance until
/// [`reset_statistics`](Self::reset_statistics); two instances never share
/// counters.
///
/// # When to use `QuantumKernel` vs direct imports
///
/// | Use case | Recommendation |
/// |----------|---------------|
/// | Scripts, model training loops | `QuantumKernel` (less boilerplate) |
/// | Custom RNG handling, several trackers | [`KernelEvaluator`] + [`StatsTracker`] |
///
/// # Example
///
/// ```rust
/// use qec_kernel::{KernelConfig, QuantumKernel};
///
/// let config = KernelConfig::new(4, 0.0, 0.15).with_seed(7);
/// let mut kernel = QuantumKernel::new(config).unwrap();
///
/// let x = [0.4, -1.2, 2.0, 0.7];
/// let k = kernel.apply_quantum_kernel(&x, &x).unwrap();
/// assert!((k - 1.0).abs() < 1e-9);
///
/// let stats = kernel.analyze_error_correction();
/// assert_eq!(stats.corrections_attempted, 0);
/// ```
pub struct QuantumKernel<S: Simulator = StateVectorSimulator> {
    config: KernelConfig,
    evaluator: KernelEvaluator<S>,
    stats: StatsTracker,
}

impl QuantumKernel<StateVectorSimulator> {
    /// Create a kernel backed by the dense state-vector simulator.
    ///
    /// Fails with `InvalidConfiguration` before anything else happens if the
    /// config is out of range.
    pub fn new(config: KernelConfig) -> Result<Self> {
        Self::with_simulator(config, StateVectorSimulator::new())
    }
}

impl<S: Simulator> QuantumKernel<S> {
    /// Create a kernel backed by a custom simulator.
    pub fn with_simulator(config: KernelConfig, simulator: S) -> Result<Self> {
        let evaluator = KernelEvaluator::with_simulator(&config, simulator)?;
        let stats = StatsTracker::new(config.n_qubits);
        Ok(Self {
            config,
            evaluator,
            stats,
        })
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &KernelEvaluator<S> {
        &self.evaluator
    }

    // =========================================================================
    // Kernel evaluation
    // =========================================================================

    /// Error-corrected kernel value for one pair of inputs.
    ///
    /// With a configured seed the result is identical on every call.
    pub fn apply_quantum_kernel(&mut self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        let seed = self.base_seed();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.evaluator.evaluate(x1, x2, &mut rng, &mut self.stats)
    }

    /// Symmetric Gram matrix over the rows of `data`.
    ///
    /// Every row must have `n_qubits` entries; a bad row fails the whole call
    /// and records nothing.
    pub fn compute_kernel_matrix<V>(&mut self, data: &[V]) -> Result<KernelMatrix>
    where
        V: AsRef<[f64]> + Sync,
    {
        let seed = self.base_seed();
        KernelMatrixBuilder::new(&self.evaluator).build(data, seed, &mut self.stats)
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Aggregate correction statistics since construction or the last reset.
    pub fn analyze_error_correction(&self) -> ErrorCorrectionStats {
        self.stats.summary()
    }

    /// The per-state correction log.
    pub fn history(&self) -> &[CorrectionRecord] {
        self.stats.history()
    }

    /// Clear the correction log and all counters.
    pub fn reset_statistics(&mut self) {
        debug!(records = self.stats.history().len(), "statistics reset");
        self.stats.reset();
    }

    fn base_seed(&self) -> u64 {
        match self.config.seed {
            Some(seed) => seed,
            None => rand::thread_rng().gen(),
        }
    }
}
