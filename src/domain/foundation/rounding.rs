//! Rounding shared by every displayed number.

/// Banker's rounding, so `2.5` gives `2` like printf's `%.0f`.
pub fn round_half_even(x: f64) -> f64 {
    if (x - x.trunc()).abs() == 0.5 {
        2.0 * (x / 2.0).round()
    } else {
        x.round()
    }
}

/// Ratio as a whole percent, halves to even.
pub fn whole_percent(ratio: f64) -> f64 {
    round_half_even(ratio * 100.0)
}
