//! Error types for the quantum kernel.

use thiserror::Error;

/// Quantum kernel error types.
#[derive(Error, Debug)]
pub enum KernelError {
    /// Constructor parameters rejected before any computation starts
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input vector length differs from the qubit count
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A feature value the encoder cannot turn into an angle
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The simulator backend failed or returned malformed output
    #[error("Simulation failure: {0}")]
    SimulationFailure(String),

    /// JSON configuration parsing error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for quantum kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
