//! Shortest-form float printing in the style of C's %g.

use std::fmt::{Display, Formatter, Result};

/// Wrap this type around an `f64` in order to print it nicely.
pub struct PrettyFloat(pub f64);

/// How many digits after the decimal point a plain rendering needs in
/// order to carry `digits` significant figures.
fn decimals_for(value: f64, digits: usize) -> usize {
    let exponent = value.abs().log10().floor();
    if !exponent.is_finite() || exponent >= digits as f64 {
        0
    } else if exponent < 0.0 {
        digits + (-exponent) as usize
    } else {
        digits - exponent as usize
    }
}

impl Display for PrettyFloat {
    fn fmt(&self, f: &mut Formatter) -> Result {
        // The unrestricted renderings are already shortest-roundtrip,
        // so they stay in the running even when a precision is given.
        let mut best = format!("{}", self.0);
        let exact_scientific = format!("{:e}", self.0);
        if exact_scientific.len() < best.len() {
            best = exact_scientific;
        }
        if let Some(digits) = f.precision() {
            let rounded = format!("{:.*}", decimals_for(self.0, digits), self.0);
            if rounded.len() < best.len() {
                best = rounded;
            }
            let rounded_scientific = format!("{:.*e}", digits, self.0);
            if rounded_scientific.len() < best.len() {
                best = rounded_scientific;
            }
        }
        f.write_str(&best)
    }
}
