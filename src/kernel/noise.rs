//! Decoherence model: independent bit-flip and phase-flip channels.
//!
//! Every qubit draws twice from the RNG, once for each channel, in qubit
//! order. A qubit may therefore end up with no error, one of the two, or
//! both. The draw pattern does not depend on the outcome, so two states
//! injected from the same RNG position always consume the same amount of
//! randomness.

use super::encoder::EncodedState;
use super::frame::{ErrorKind, PauliError};
use rand::Rng;
use tracing::trace;

/// Applies random Pauli errors at a fixed per-channel rate.
#[derive(Clone, Copy, Debug)]
pub struct NoiseInjector {
    error_rate: f64,
}

impl NoiseInjector {
    /// `error_rate` is the probability of each channel firing on each qubit.
    ///
    /// Callers validate the range; see [`KernelConfig::validate`](crate::KernelConfig::validate).
    pub fn new(error_rate: f64) -> Self {
        Self { error_rate }
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Produce a perturbed copy of `state` and the list of errors applied.
    ///
    /// The returned list is ground truth for self-consistency checks only;
    /// decoding and correction work from the syndrome alone.
    pub fn inject<R: Rng>(
        &self,
        state: &EncodedState,
        rng: &mut R,
    ) -> (EncodedState, Vec<PauliError>) {
        let mut noisy = state.clone();
        let mut introduced = Vec::new();

        for qubit in 0..state.n_qubits() {
            let bit_flip = rng.gen::<f64>() < self.error_rate;
            let phase_flip = rng.gen::<f64>() < self.error_rate;

            let kind = match (bit_flip, phase_flip) {
                (true, true) => ErrorKind::Both,
                (true, false) => ErrorKind::BitFlip,
                (false, true) => ErrorKind::PhaseFlip,
                (false, false) => continue,
            };

            trace!(qubit, ?kind, "injecting error");
            noisy.apply_pauli(qubit, kind);
            introduced.push(PauliError { qubit, kind });
        }

        (noisy, introduced)
    }
}
