//! Decimal number format

use std::sync::LazyLock;

use regex::Regex;

/// Optional sign, optional integer digits, optional fraction.
///
/// Matches `".5"` and `"-3"`. It also matches a lone `-`, which
/// [`decimal`] rejects separately.
static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*(\.\d+)?$").expect("decimal regex is valid"));

/// Returns `true` if `input` is a lone hyphen.
#[inline]
#[must_use]
pub fn hyphen(input: &str) -> bool {
    input == "-"
}

/// Returns `true` if `input` is a decimal number.
///
/// # Examples
///
/// ```
/// use sinter_validator::validators::decimal;
///
/// assert!(decimal("-3.5"));
/// assert!(decimal(".25"));
/// assert!(!decimal("-"));
/// assert!(!decimal("abc"));
/// ```
#[must_use]
pub fn decimal(input: &str) -> bool {
    !hyphen(input) && DECIMAL_REGEX.is_match(input)
}
