//! Textual report formatting.
//!
//! Rust's `{:e}` prints `1.465e-11` with a bare, unpadded exponent;
//! the report format wants C-style `%.3e` (`1.465e-11` stays the same
//! but `14.65` becomes `1.465e+01`, with a signed two-digit exponent).

use crate::cost::CostReport;

/// Format a value like C's `%.3e`: 3 fractional digits, signed
/// exponent padded to at least two digits.
pub fn format_sci(value: f64) -> String {
    let rendered = format!("{:.3e}", value);
    // LowerExp output is always "<mantissa>e<exponent>"
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => rendered,
    }
}

/// One line of the fixed report:
/// `Determinism Cost (<Regime> Scale): <value> J`
pub fn report_line(report: &CostReport) -> String {
    format!(
        "Determinism Cost ({} Scale): {} J",
        report.regime,
        format_sci(report.energy_cost)
    )
}
