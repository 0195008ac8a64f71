/// Truncates an `f64` toward zero into an `i64`.
///
/// Values outside the `i64` range saturate at its bounds and `NaN` maps to
/// `0`.
///
/// ## Example
/// ```
/// use bantam::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(5.7), 5);
/// assert_eq!(truncate_to_i64(-5.7), -5);
/// assert_eq!(truncate_to_i64(f64::NAN), 0);
/// assert_eq!(truncate_to_i64(f64::INFINITY), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}

/// Truncates an `f64` toward zero into a `u64`.
///
/// Negative values and `NaN` map to `0`; values above the `u64` range
/// saturate.
///
/// ## Example
/// ```
/// use bantam::util::num::truncate_to_u64;
///
/// assert_eq!(truncate_to_u64(4.9), 4);
/// assert_eq!(truncate_to_u64(-3.0), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn truncate_to_u64(value: f64) -> u64 {
    value as u64
}

/// Converts an `i64` to the nearest `f64`.
///
/// Exact when the magnitude is at most `2^53`.
///
/// ## Example
/// ```
/// use bantam::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-6), -6.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a `u64` to the nearest `f64`.
///
/// Exact when the value is at most `2^53`.
///
/// ## Example
/// ```
/// use bantam::util::num::u64_to_f64;
///
/// assert_eq!(u64_to_f64(24), 24.0);
/// assert_eq!(u64_to_f64(1 << 53), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

