//! Opt-in input validation.
//!
//! The reference computation accepts any input; validation is a strict
//! mode layered on top, disabled by default so the unchecked functions
//! stay bit-for-bit faithful.

use crate::error::{CostError, Result};
use serde::{Deserialize, Serialize};

/// Validation configuration for the `*_checked` functions.
///
/// Negative-probability and length checks are always performed on the
/// checked surface; the normalization check is gated here because a
/// slightly off-sum distribution is still numerically well-defined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Reject distributions whose sum deviates from 1.0
    pub check_normalization: bool,

    /// Allowed |sum - 1.0| when normalization checking is on
    pub sum_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_normalization: false,
            sum_tolerance: 1e-9,
        }
    }
}

impl ValidationConfig {
    /// Config with normalization checking enabled
    pub fn strict() -> Self {
        Self {
            check_normalization: true,
            ..Self::default()
        }
    }
}

/// Validate a single probability distribution.
///
/// Rejects negative entries unconditionally; rejects off-sum
/// distributions only when `config.check_normalization` is set.
pub fn validate_distribution(p: &[f64], config: &ValidationConfig) -> Result<()> {
    for (i, &x) in p.iter().enumerate() {
        if x < 0.0 || x.is_nan() {
            return Err(CostError::InvalidDistribution(format!(
                "probability at index {} is {}",
                i, x
            )));
        }
    }

    if config.check_normalization {
        let sum: f64 = p.iter().sum();
        if (sum - 1.0).abs() > config.sum_tolerance {
            return Err(CostError::InvalidDistribution(format!(
                "sum is {} (tolerance {})",
                sum, config.sum_tolerance
            )));
        }
    }

    Ok(())
}
