//! String length bounds
//!
//! Length is measured in Unicode scalar values, so `"日本"` has length 2.
//! Both bounds are inclusive and an empty string only fails a positive
//! minimum; emptiness on its own is the `required` rule's business.

/// Measures a string the way the length bounds do.
#[inline]
#[must_use]
pub fn measure(input: &str) -> usize {
    input.chars().count()
}

/// Returns `true` if `input` has at least `min` characters.
#[inline]
#[must_use]
pub fn min_length(input: &str, min: usize) -> bool {
    measure(input) >= min
}

/// Returns `true` if `input` has at most `max` characters.
#[inline]
#[must_use]
pub fn max_length(input: &str, max: usize) -> bool {
    measure(input) <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_inclusive() {
        assert!(min_length("hello", 5));
        assert!(min_length("hello world", 5));
        assert!(!min_length("hi", 5));
        assert!(min_length("", 0));
    }

    #[test]
    fn test_max_length_inclusive() {
        assert!(max_length("hello", 5));
        assert!(!max_length("hello!", 5));
        assert!(max_length("", 0));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(measure("日本語"), 3);
        assert!(max_length("日本語", 3));
        assert!(min_length("Tiếng", 5));
    }
}
