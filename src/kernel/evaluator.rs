//! Error-corrected kernel evaluation for one pair of inputs.
//!
//! The pipeline, in order:
//!
//! 1. encode both inputs (dimension errors surface here, before any
//!    randomness is consumed),
//! 2. inject noise into each state,
//! 3. measure the syndrome, decode, and attempt a correction for each,
//! 4. run both circuits on the simulator and project their overlap to a scalar.
//!
//! Statistics are committed only after step 4 succeeds, so a failing backend
//! never leaves a half-recorded evaluation behind.

use super::backend::{Simulator, StateVectorSimulator};
use super::corrector::Corrector;
use super::encoder::{EncodedState, StateEncoder};
use super::frame::PauliError;
use super::noise::NoiseInjector;
use super::similarity::{KernelMetric, Similarity};
use super::stabilizer::StabilizerCode;
use super::state::StateVector;
use crate::config::KernelConfig;
use crate::error::{KernelError, Result};
use crate::stats::{CorrectionOutcome, StatsTracker};
use rand::Rng;
use tracing::debug;

/// A state after noise and one correction pass.
#[derive(Clone, Debug)]
pub struct CorrectedState {
    pub state: EncodedState,
    /// Ground-truth errors introduced by the noise step.
    pub injected: Vec<PauliError>,
    pub outcome: CorrectionOutcome,
}

/// Kernel value plus the per-state outcomes that produced it.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub value: f64,
    pub outcomes: [CorrectionOutcome; 2],
}

/// Runs encode → noise → correct → overlap for pairs of inputs.
#[derive(Clone, Debug)]
pub struct KernelEvaluator<S: Simulator = StateVectorSimulator> {
    encoder: StateEncoder,
    noise: NoiseInjector,
    code: StabilizerCode,
    corrector: Corrector,
    metric: KernelMetric,
    simulator: S,
}

impl KernelEvaluator<StateVectorSimulator> {
    /// Evaluator backed by the dense state-vector simulator.
    pub fn new(config: &KernelConfig) -> Result<Self> {
        Self::with_simulator(config, StateVectorSimulator::new())
    }
}

impl<S: Simulator> KernelEvaluator<S> {
    /// Evaluator backed by a custom simulator.
    pub fn with_simulator(config: &KernelConfig, simulator: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            encoder: StateEncoder::new(config.n_qubits),
            noise: NoiseInjector::new(config.error_rate),
            code: StabilizerCode::new(config.n_qubits)?,
            corrector: Corrector::new(config.correction_threshold),
            metric: config.metric,
            simulator,
        })
    }

    pub fn n_qubits(&self) -> usize {
        self.encoder.n_qubits()
    }

    pub fn metric(&self) -> KernelMetric {
        self.metric
    }

    pub fn code(&self) -> &StabilizerCode {
        &self.code
    }

    pub fn encoder(&self) -> &StateEncoder {
        &self.encoder
    }

    /// Noise, syndrome extraction and correction for an encoded state.
    pub fn protect<R: Rng>(&self, encoded: &EncodedState, rng: &mut R) -> Result<CorrectedState> {
        let (noisy, injected) = self.noise.inject(encoded, rng);
        let syndrome = self.code.measure_syndrome(&noisy)?;
        let hypothesis = self.code.decode(&syndrome)?;
        let correction = self.corrector.correct(&self.code, &noisy, &hypothesis)?;

        if !syndrome.is_clean() {
            debug!(
                weight = syndrome.weight(),
                injected = injected.len(),
                attempted = correction.attempted,
                succeeded = correction.succeeded,
                "syndrome detected"
            );
        }

        Ok(CorrectedState {
            state: correction.state,
            injected,
            outcome: CorrectionOutcome {
                syndrome,
                attempted: correction.attempted,
                succeeded: correction.succeeded,
                qubits_affected: correction.qubits_affected,
                confidence: hypothesis.confidence(),
            },
        })
    }

    /// Evaluate one pair without touching any statistics.
    pub fn evaluate_detached<R: Rng>(&self, x1: &[f64], x2: &[f64], rng: &mut R) -> Result<Evaluation> {
        let e1 = self.encoder.encode(x1)?;
        let e2 = self.encoder.encode(x2)?;

        let c1 = self.protect(&e1, rng)?;
        let c2 = self.protect(&e2, rng)?;

        let s1 = self.simulate(&c1.state)?;
        let s2 = self.simulate(&c2.state)?;
        let value = Similarity::compute(&s1, &s2, self.metric)?;

        Ok(Evaluation {
            value,
            outcomes: [c1.outcome, c2.outcome],
        })
    }

    /// Evaluate one pair and commit its outcomes to `stats`.
    pub fn evaluate<R: Rng>(
        &self,
        x1: &[f64],
        x2: &[f64],
        rng: &mut R,
        stats: &mut StatsTracker,
    ) -> Result<f64> {
        let evaluation = self.evaluate_detached(x1, x2, rng)?;
        stats.record_evaluation(evaluation.outcomes);
        Ok(evaluation.value)
    }

    /// Run a state's circuit and check the backend's answer.
    pub fn simulate(&self, state: &EncodedState) -> Result<StateVector> {
        let result = self.simulator.run(state.circuit())?;
        if result.n_qubits() != state.n_qubits() {
            return Err(KernelError::SimulationFailure(format!(
                "backend returned a {}-qubit state for a {}-qubit circuit",
                result.n_qubits(),
                state.n_qubits()
            )));
        }
        result.check()?;
        Ok(result)
    }
}
