//! Statistics layer: correction log and aggregate counters.
//!
//! This module provides:
//!
//! - [`CorrectionRecord`]: one immutable log entry per processed state,
//!   holding the syndrome seen and the fate of the correction attempt.
//!
//! - [`StatsTracker`]: an append-only log plus running counters, owned by
//!   one kernel instance. Nothing resets it implicitly; counts aggregate
//!   across calls until [`StatsTracker::reset`].
//!
//! - [`ErrorCorrectionStats`]: the serializable summary handed to reporting
//!   and visualization code.
//!
//! # Usage
//!
//! ```rust
//! use qec_kernel::stats::{CorrectionOutcome, StatsTracker};
//! use qec_kernel::kernel::Syndrome;
//!
//! let mut tracker = StatsTracker::new(4);
//! tracker.record(CorrectionOutcome {
//!     syndrome: Syndrome::from_bits(vec![true, false, false, false]),
//!     attempted: true,
//!     succeeded: true,
//!     qubits_affected: vec![0],
//!     confidence: 0.5,
//! });
//!
//! let stats = tracker.summary();
//! assert_eq!(stats.errors_detected, 1);
//! assert_eq!(stats.success_rate, 1.0);
//! ```

pub mod record;
pub mod tracker;

pub use record::{CorrectionOutcome, CorrectionRecord};
pub use tracker::{ErrorCorrectionStats, StatsTracker};
