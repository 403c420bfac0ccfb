//! Determinism cost - the energy price of reducing uncertainty.
//!
//! Core equation (Landauer-style):
//!
//! ```text
//! E = T * (S_stochastic - S_deterministic)
//! ```
//!
//! where both entropies come from [`entropy`](crate::entropy::entropy).
//! Positive cost means the "deterministic" distribution really is the
//! lower-entropy one; the sign flips if the arguments are swapped.

use crate::constants::{DEFAULT_EPSILON, T_MACRO, T_QUANTUM};
use crate::entropy::{entropy, entropy_with_epsilon};
use crate::error::{CostError, Result};
use crate::validate::{validate_distribution, ValidationConfig};
use serde::{Deserialize, Serialize};

/// Energy cost (J) of moving from a stochastic to a deterministic
/// distribution at temperature `temperature` (K).
///
/// Pure function: two independent entropy evaluations and a product.
/// Equal inputs give exactly 0.0 (identical floating-point
/// evaluations). No validation on this path; see
/// [`determinism_cost_checked`].
#[inline]
pub fn determinism_cost(
    prob_stochastic: &[f64],
    prob_deterministic: &[f64],
    temperature: f64,
) -> f64 {
    let s_stochastic = entropy(prob_stochastic);
    let s_deterministic = entropy(prob_deterministic);
    let delta_s = s_stochastic - s_deterministic;
    temperature * delta_s
}

/// Validating variant of [`determinism_cost`].
///
/// Checks distribution lengths, temperature positivity, and both
/// distributions per `config`, then delegates to the unchecked path so
/// well-formed inputs produce identical results.
pub fn determinism_cost_checked(
    prob_stochastic: &[f64],
    prob_deterministic: &[f64],
    temperature: f64,
    config: &ValidationConfig,
) -> Result<f64> {
    if prob_stochastic.len() != prob_deterministic.len() {
        return Err(CostError::LengthMismatch {
            expected: prob_stochastic.len(),
            got: prob_deterministic.len(),
        });
    }
    if temperature <= 0.0 {
        return Err(CostError::NonPositiveTemperature(temperature));
    }
    validate_distribution(prob_stochastic, config)?;
    validate_distribution(prob_deterministic, config)?;

    Ok(determinism_cost(
        prob_stochastic,
        prob_deterministic,
        temperature,
    ))
}

/// Temperature regime for the example scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// Effective quantum-scale temperature (1e12 K)
    Quantum,
    /// Macro-scale temperature (1e3 K)
    Macro,
}

impl Regime {
    /// Effective temperature of this regime (K)
    #[inline]
    pub fn temperature(&self) -> f64 {
        match self {
            Regime::Quantum => T_QUANTUM,
            Regime::Macro => T_MACRO,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Quantum => "Quantum",
            Regime::Macro => "Macro",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full breakdown of one cost evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    /// Temperature regime
    pub regime: Regime,

    /// Effective temperature used (K)
    pub temperature: f64,

    /// Entropy of the stochastic distribution (J/K)
    pub entropy_stochastic: f64,

    /// Entropy of the deterministic distribution (J/K)
    pub entropy_deterministic: f64,

    /// Entropy difference S_stochastic - S_deterministic (J/K)
    pub delta_entropy: f64,

    /// Energy cost T * delta_S (J)
    pub energy_cost: f64,
}

impl CostReport {
    /// Compute a full report for one regime
    pub fn compute(prob_stochastic: &[f64], prob_deterministic: &[f64], regime: Regime) -> Self {
        let entropy_stochastic = entropy_with_epsilon(prob_stochastic, DEFAULT_EPSILON);
        let entropy_deterministic = entropy_with_epsilon(prob_deterministic, DEFAULT_EPSILON);
        let delta_entropy = entropy_stochastic - entropy_deterministic;
        let temperature = regime.temperature();

        Self {
            regime,
            temperature,
            entropy_stochastic,
            entropy_deterministic,
            delta_entropy,
            energy_cost: temperature * delta_entropy,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CostError::SerializationError(e.to_string()))
    }
}
