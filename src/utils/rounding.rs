//! Decimal Rounding Utilities
//! 
//! Readings and factors are reported with a fixed number of decimals.
//! Ties round to even so reported values match banker's rounding.

/// Round `value` to `places` decimal digits.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round_ties_even() / scale
}

/// Round to the nearest integer, ties to even.
pub fn round_whole(value: f64) -> i64 {
    value.round_ties_even() as i64
}
