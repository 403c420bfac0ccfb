//! Physical constants and regime temperatures.
//!
//! All values are process-wide read-only scalars fixed at compile time;
//! the calculators never recompute or shadow them.

/// Boltzmann constant (J/K), 2019 SI exact value
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Effective temperature for the quantum regime (K)
pub const T_QUANTUM: f64 = 1e12;

/// Effective temperature for the macro regime (K)
pub const T_MACRO: f64 = 1e3;

/// Default epsilon for numerical stability (avoids ln(0))
pub const DEFAULT_EPSILON: f64 = 1e-10;
