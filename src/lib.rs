//! # qec-kernel: error-corrected quantum kernels
//!
//! Computes kernel (similarity) values between classical feature vectors by
//! angle-encoding them into simulated qubit registers, subjecting each
//! register to stochastic Pauli noise, detecting and repairing errors with a
//! pairwise stabilizer code, and projecting the overlap of the two corrected
//! states to a scalar.
//!
//! ## Quick Start
//!
//! ```rust
//! use qec_kernel::{KernelConfig, QuantumKernel};
//!
//! let config = KernelConfig::new(6, 0.02, 0.15).with_seed(42);
//! let mut kernel = QuantumKernel::new(config)?;
//!
//! let data = vec![
//!     vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
//!     vec![-1.0, 0.5, 2.2, -0.3, 1.7, 0.0],
//! ];
//! let matrix = kernel.compute_kernel_matrix(&data)?;
//! assert_eq!(matrix.size(), 2);
//! assert_eq!(matrix[(0, 1)], matrix[(1, 0)]);
//!
//! let stats = kernel.analyze_error_correction();
//! println!("success rate: {:.3}", stats.success_rate);
//! # Ok::<(), qec_kernel::KernelError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Encoding**: each feature becomes a rotation angle on one qubit
//! - **Noise**: independent bit-flips and phase-flips at a fixed rate
//! - **Syndrome**: parities of pairwise stabilizer checks, read without
//!   looking at the injected errors
//! - **Correction**: the decoded Pauli is undone only above a confidence threshold
//! - **Kernel value**: a scalar derived from the overlap of two corrected states
//!
//! ## Layers
//!
//! - [`kernel`]: the building blocks
//! - [`stats`]: the correction log and its summary
//! - [`highlevel`]: the [`QuantumKernel`] facade

pub mod config;
pub mod error;
pub mod highlevel;
pub mod kernel;
pub mod stats;

// Re-exports for convenience
pub use config::KernelConfig;
pub use error::{KernelError, Result};
pub use highlevel::QuantumKernel;
pub use kernel::{KernelMatrix, KernelMetric};
pub use stats::{CorrectionRecord, ErrorCorrectionStats, StatsTracker};
