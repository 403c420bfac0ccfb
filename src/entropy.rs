//! Physical Shannon entropy.
//!
//! Computes S = -k_B * Σ (p_i + ε) * ln(p_i + ε) over a probability
//! distribution, giving entropy in J/K. Epsilon is added to EVERY term,
//! not only zero ones: it keeps ln defined at p_i = 0 and shifts every
//! element by the same deliberate bias. Adding it selectively would
//! change the computed values.

use crate::constants::{BOLTZMANN, DEFAULT_EPSILON};
use crate::error::Result;
use crate::validate::{validate_distribution, ValidationConfig};

/// Shannon entropy in physical units (J/K), default epsilon.
///
/// Higher entropy = more diffuse distribution
/// Lower entropy = more concentrated distribution
///
/// The input slice is borrowed immutably; callers keep their
/// distribution untouched.
#[inline]
pub fn entropy(probabilities: &[f64]) -> f64 {
    entropy_with_epsilon(probabilities, DEFAULT_EPSILON)
}

/// Shannon entropy in physical units (J/K) with an explicit epsilon.
///
/// No validation happens on this path: negative or non-normalized
/// inputs yield a well-defined but physically meaningless number. Use
/// [`entropy_checked`] for the strict surface.
#[inline]
pub fn entropy_with_epsilon(probabilities: &[f64], epsilon: f64) -> f64 {
    let sum: f64 = probabilities
        .iter()
        .map(|&p| {
            let q = p + epsilon;
            q * q.ln()
        })
        .sum();

    -BOLTZMANN * sum
}

/// Validating variant of [`entropy_with_epsilon`].
///
/// Identical result for well-formed input.
pub fn entropy_checked(
    probabilities: &[f64],
    epsilon: f64,
    config: &ValidationConfig,
) -> Result<f64> {
    validate_distribution(probabilities, config)?;
    Ok(entropy_with_epsilon(probabilities, epsilon))
}

/// Maximum physical entropy for `n` outcomes: k_B * ln(n).
///
/// Attained (up to the epsilon bias) by the uniform distribution.
#[inline]
pub fn max_entropy(n: usize) -> f64 {
    BOLTZMANN * (n as f64).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CostError;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_uniform_entropy_is_maximal() {
        // Uniform over 4 outcomes: S = k_B * ln(4), plus the tiny
        // epsilon bias
        let uniform = vec![0.25, 0.25, 0.25, 0.25];
        let s = entropy(&uniform);
        assert!(approx_eq(s, max_entropy(4), 1e-28));

        // Any other 4-outcome distribution sits strictly below
        let skewed = vec![0.7, 0.1, 0.1, 0.1];
        assert!(entropy(&skewed) < s);
    }

    #[test]
    fn test_point_mass_entropy_near_zero() {
        let point = vec![1.0, 0.0, 0.0, 0.0];
        let s = entropy(&point);

        // Bounded below by the epsilon-induced floor:
        // -k_B*(1+ε)ln(1+ε) - k_B*(N-1)*ε*ln(ε), about 9.4e-32 J/K here
        let eps = crate::constants::DEFAULT_EPSILON;
        let floor = -crate::constants::BOLTZMANN
            * ((1.0 + eps) * (1.0 + eps).ln() + 3.0 * eps * eps.ln());
        assert!(s > 0.0);
        assert!(approx_eq(s, floor, 1e-36));
        assert!(s < 1e-30);
    }

    #[test]
    fn test_epsilon_added_to_every_term() {
        // With nonzero probabilities the epsilon still shifts the
        // result, so zero epsilon and default epsilon differ
        let p = vec![0.5, 0.5];
        let biased = entropy_with_epsilon(&p, 1e-4);
        let exact = entropy_with_epsilon(&p, 0.0);
        assert!(biased != exact);
    }

    #[test]
    fn test_input_not_mutated() {
        let p = vec![0.9, 0.1, 0.0, 0.0];
        let copy = p.clone();
        let _ = entropy(&p);
        assert_eq!(p, copy);
    }

    #[test]
    fn test_reference_entropies() {
        // Closed forms for the reference scenario, ignoring the
        // O(ε ln ε) bias which is below the asserted tolerance
        let k_b = crate::constants::BOLTZMANN;

        let stochastic = vec![0.25, 0.25, 0.25, 0.25];
        let s_stoch = entropy(&stochastic);
        assert!(approx_eq(s_stoch, k_b * 4.0_f64.ln(), 1e-27));

        let deterministic = vec![0.9, 0.1, 0.0, 0.0];
        let s_det = entropy(&deterministic);
        let expected = -k_b * (0.9 * 0.9_f64.ln() + 0.1 * 0.1_f64.ln());
        assert!(approx_eq(s_det, expected, 1e-27));
    }

    #[test]
    fn test_entropy_checked() {
        let config = ValidationConfig::default();
        let p = vec![0.25, 0.25, 0.25, 0.25];

        // Checked path equals the unchecked path for valid input
        let s = entropy_checked(&p, crate::constants::DEFAULT_EPSILON, &config).unwrap();
        assert_eq!(s, entropy(&p));

        let bad = vec![0.5, -0.5, 1.0];
        let err = entropy_checked(&bad, 1e-10, &config).unwrap_err();
        assert!(matches!(err, CostError::InvalidDistribution(_)));
    }
}
