//! Fixed example computation: cost of forcing a uniform 4-outcome
//! distribution into a concentrated one, at quantum-scale and
//! macro-scale temperatures.

use landauer_engine::{report_line, CostReport, Regime};

fn main() {
    // Equal probabilities (high entropy)
    let prob_stochastic = [0.25, 0.25, 0.25, 0.25];
    // Concentrated probabilities (low entropy)
    let prob_deterministic = [0.9, 0.1, 0.0, 0.0];

    for regime in [Regime::Quantum, Regime::Macro] {
        let report = CostReport::compute(&prob_stochastic, &prob_deterministic, regime);
        println!("{}", report_line(&report));
    }
}
