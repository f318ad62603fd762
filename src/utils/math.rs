//! Mathematical utility functions

use rust_decimal::prelude::*;

/// Round a derived metric to 2 decimal places and convert it for JSON
/// output. Filtering always happens on the unrounded value.
pub fn round2(value: Decimal) -> f64 {
    value.round_dp(2).to_f64().unwrap_or_default()
}
