//! Kernel layer: encoding, noise, stabilizer correction and overlaps.
//!
//! The pieces, bottom-up:
//! - Circuits and gates ([`Circuit`], [`Gate`])
//! - Dense amplitudes and the simulator seam ([`StateVector`], [`Simulator`])
//! - Angle encoding of feature vectors ([`StateEncoder`])
//! - Stochastic Pauli noise ([`NoiseInjector`])
//! - Syndrome extraction and decoding ([`StabilizerCode`])
//! - Threshold-gated correction ([`Corrector`])
//! - Overlap metrics ([`Similarity`])
//! - Pair evaluation and matrix assembly ([`KernelEvaluator`], [`KernelMatrixBuilder`])
//!
//! This layer depends on [`stats`](crate::stats) only for the outcome types it
//! hands back. It has no dependency on [`highlevel`](crate::highlevel).
//!
//! # Example
//!
//! ```rust
//! use qec_kernel::kernel::{KernelEvaluator, KernelMatrixBuilder};
//! use qec_kernel::stats::StatsTracker;
//! use qec_kernel::KernelConfig;
//!
//! let config = KernelConfig::new(4, 0.0, 0.15);
//! let evaluator = KernelEvaluator::new(&config).unwrap();
//! let mut stats = StatsTracker::new(4);
//!
//! let data = vec![vec![0.1, 0.2, 0.3, 0.4], vec![1.0, -1.0, 0.5, 2.0]];
//! let matrix = KernelMatrixBuilder::new(&evaluator)
//!     .build(&data, 42, &mut stats)
//!     .unwrap();
//!
//! assert!((matrix[(0, 0)] - 1.0).abs() < 1e-9);
//! assert_eq!(matrix[(0, 1)], matrix[(1, 0)]);
//! ```

pub mod backend;
pub mod circuit;
pub mod corrector;
pub mod encoder;
pub mod evaluator;
pub mod frame;
pub mod matrix;
pub mod noise;
pub mod similarity;
pub mod stabilizer;
pub mod state;

pub use backend::{Simulator, StateVectorSimulator, MAX_QUBITS};
pub use circuit::{Circuit, Gate};
pub use corrector::{Correction, Corrector, FixedThreshold, ThresholdPolicy};
pub use encoder::{wrap_angle, EncodedState, StateEncoder};
pub use evaluator::{CorrectedState, Evaluation, KernelEvaluator};
pub use frame::{ErrorKind, PauliError, PauliFrame};
pub use matrix::{pair_seed, KernelMatrix, KernelMatrixBuilder};
pub use noise::NoiseInjector;
pub use similarity::{KernelMetric, Similarity};
pub use stabilizer::{CheckKind, ErrorHypothesis, StabilizerCode, StabilizerGenerator, Syndrome};
pub use state::StateVector;
