//! # Landauer Engine
//!
//! Thermodynamic cost of reducing uncertainty in a probability
//! distribution.
//!
//! ## Theory
//!
//! Forcing a system from a higher-entropy (stochastic) state into a
//! lower-entropy (deterministic) one costs energy proportional to the
//! entropy drop, scaled by the effective temperature:
//!
//! ```text
//! E = T * (S_stochastic - S_deterministic)
//! S(p) = -k_B * Σ (p_i + ε) * ln(p_i + ε)
//! ```
//!
//! The epsilon term keeps ln defined at zero probabilities; it is
//! added to every element, introducing the same small bias in each
//! term rather than perturbing only the zeros.
//!
//! ## Example
//!
//! ```rust
//! use landauer_engine::{determinism_cost, T_QUANTUM};
//!
//! let stochastic = [0.25, 0.25, 0.25, 0.25];
//! let deterministic = [0.9, 0.1, 0.0, 0.0];
//!
//! let cost = determinism_cost(&stochastic, &deterministic, T_QUANTUM);
//! assert!(cost > 0.0);
//! ```

pub mod constants;
pub mod cost;
pub mod entropy;
pub mod error;
pub mod report;
pub mod validate;

// Re-exports
pub use constants::*;
pub use cost::*;
pub use entropy::*;
pub use error::*;
pub use report::*;
pub use validate::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
