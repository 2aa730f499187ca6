//! Abbreviated magnitudes for currency amounts (`406597.5` -> `407K`).

use crate::domain::foundation::round_half_even;

/// Unit suffixes, one per power of 1000.
const UNITS: [&str; 6] = ["", "K", "M", "G", "T", "P"];
const BASE: f64 = 1000.0;

/// Formats a magnitude with zero decimals and the largest fitting unit.
///
/// Zero renders as `"0"`, negative values as the formatted magnitude with a
/// leading `-`, and non-finite input as `"N/A"`. Values past the peta range
/// stay in `P`.
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_magnitude(-value));
    }

    let top = UNITS.len() - 1;
    let mut magnitude = if value < 1.0 {
        0
    } else {
        (value.log(BASE).floor() as usize).min(top)
    };

    // log() can land a hair either side of an exact power of the base.
    while magnitude < top && value >= BASE.powi(magnitude as i32 + 1) {
        magnitude += 1;
    }
    while magnitude > 0 && value < BASE.powi(magnitude as i32) {
        magnitude -= 1;
    }

    let mut rounded = round_half_even(value / BASE.powi(magnitude as i32));
    if rounded >= BASE && magnitude < top {
        magnitude += 1;
        rounded = round_half_even(value / BASE.powi(magnitude as i32));
    }

    format!("{:.0}{}", rounded, UNITS[magnitude])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_documented_examples() {
        assert_eq!(format_magnitude(1_234_567.0), "1M");
        assert_eq!(format_magnitude(950.0), "950");
        assert_eq!(format_magnitude(2_500_000_000.0), "2G");
    }

    #[test]
    fn formats_exact_powers() {
        assert_eq!(format_magnitude(1.0), "1");
        assert_eq!(format_magnitude(1_000.0), "1K");
        assert_eq!(format_magnitude(1_000_000.0), "1M");
        assert_eq!(format_magnitude(1e15), "1P");
    }

    #[test]
    fn typical_loan_amounts() {
        assert_eq!(format_magnitude(406_597.5), "407K");
        assert_eq!(format_magnitude(24_700.5), "25K");
        assert_eq!(format_magnitude(202_500.0), "202K");
    }

    #[test]
    fn promotes_when_rounding_reaches_next_unit() {
        assert_eq!(format_magnitude(999_999.6), "1M");
        assert_eq!(format_magnitude(999.7), "1K");
    }

    #[test]
    fn guards_zero_negative_and_non_finite() {
        assert_eq!(format_magnitude(0.0), "0");
        assert_eq!(format_magnitude(-1_500.0), "-2K");
        assert_eq!(format_magnitude(f64::NAN), "N/A");
        assert_eq!(format_magnitude(f64::INFINITY), "N/A");
    }

    #[test]
    fn sub_unit_values_use_empty_suffix() {
        assert_eq!(format_magnitude(0.4), "0");
        assert_eq!(format_magnitude(0.6), "1");
    }

    #[test]
    fn beyond_peta_stays_in_peta() {
        assert_eq!(format_magnitude(3e18), "3000P");
    }

    fn bucket_of(x: f64) -> &'static str {
        UNITS[UNITS
            .iter()
            .enumerate()
            .rev()
            .find(|(i, _)| x >= BASE.powi(*i as i32))
            .map(|(i, _)| i)
            .unwrap_or(0)]
    }

    proptest! {
        #[test]
        fn prefix_is_below_one_thousand(x in 1e-3f64..1e17) {
            let formatted = format_magnitude(x);
            let digits: String = formatted.chars().take_while(|c| c.is_ascii_digit()).collect();
            let suffix = &formatted[digits.len()..];
            let prefix: u64 = digits.parse().unwrap();

            prop_assert!(prefix < 1000, "{} -> {}", x, formatted);
            prop_assert!(UNITS.contains(&suffix), "{} -> {}", x, formatted);
        }

        #[test]
        fn suffix_matches_bucket_when_not_promoted(x in 1.0f64..1e17) {
            let formatted = format_magnitude(x);
            let expected = bucket_of(x);
            let scaled = x / BASE.powi(UNITS.iter().position(|u| *u == expected).unwrap() as i32);
            prop_assume!(scaled < 999.5);
            prop_assert!(formatted.ends_with(expected) || expected.is_empty(), "{} -> {}", x, formatted);
            if expected.is_empty() {
                prop_assert!(formatted.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
