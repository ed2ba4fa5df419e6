//! Numeric bounds

/// Returns `true` if `input >= min`.
///
/// Incomparable values (NaN) fail.
#[inline]
#[must_use]
pub fn min_value<T: PartialOrd>(input: &T, min: &T) -> bool {
    input >= min
}

/// Returns `true` if `input <= max`.
///
/// Incomparable values (NaN) fail.
#[inline]
#[must_use]
pub fn max_value<T: PartialOrd>(input: &T, max: &T) -> bool {
    input <= max
}
