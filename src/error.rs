//! Error types for the cost engine.

use thiserror::Error;

/// Main error type for entropy and cost operations.
///
/// Errors are only produced by the `*_checked` surface; the plain
/// functions evaluate the formula unconditionally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    /// Distribution contains a negative probability, or (in strict
    /// normalization mode) its sum deviates too far from 1.0
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    /// The two distributions don't have the same length
    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Temperature must be strictly positive for the energy-cost
    /// interpretation to be physically meaningful
    #[error("Non-positive temperature: {0} K")]
    NonPositiveTemperature(f64),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for cost-engine operations.
pub type Result<T> = std::result::Result<T, CostError>;
