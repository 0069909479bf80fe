//! High-level convenience API.
//!
//! This layer provides [`QuantumKernel`], an ergonomic wrapper that owns a
//! [`KernelEvaluator`](crate::kernel::KernelEvaluator) and a
//! [`StatsTracker`](crate::stats::StatsTracker) and delegates to the
//! [`kernel`](crate::kernel) and [`stats`](crate::stats) layers.

pub mod client;

pub use client::QuantumKernel;
