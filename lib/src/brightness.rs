//! Conversions between raw brightness units and percentages.
//!
//! All functions take `max > 0` as a precondition. Intermediate products are
//! computed in `i128`, and division truncates toward zero.

fn percent_of(max: i64, percent: i64) -> i128 {
    i128::from(max) * i128::from(percent) / 100
}

fn clamp_raw(value: i128, max: i64) -> i64 {
    // the clamped value lies in [0, max], so it always fits back into an i64
    value.clamp(0, i128::from(max)) as i64
}

/// Current brightness as a percentage of `max`, rounded down.
pub fn report(current: i64, max: i64) -> i64 {
    (i128::from(current) * 100 / i128::from(max)) as i64
}

/// Raise `current` by `percent` percent of the raw range.
pub fn add(current: i64, max: i64, percent: i64) -> i64 {
    clamp_raw(i128::from(current) + percent_of(max, percent), max)
}

/// Lower `current` by `percent` percent of the raw range.
pub fn subtract(current: i64, max: i64, percent: i64) -> i64 {
    clamp_raw(i128::from(current) - percent_of(max, percent), max)
}

/// Absolute brightness at `percent` percent of the raw range.
pub fn set(max: i64, percent: i64) -> i64 {
    clamp_raw(percent_of(max, percent), max)
}
