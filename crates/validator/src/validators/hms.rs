//! Time component validity

use crate::support::{Hms, HmsPart};

/// Returns `true` if every requested component of `value` is in range.
///
/// Hours run `0..=23`, minutes and seconds `0..=59`. `None` components are
/// not checked.
#[must_use]
pub fn hms(value: &Hms, parts: &[HmsPart]) -> bool {
    HmsPart::ALL
        .into_iter()
        .filter(|part| parts.contains(part))
        .all(|part| {
            value
                .get(part)
                .is_none_or(|component| (0..=part.max()).contains(&component))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(hms(&Hms::full(0, 0, 0), &HmsPart::ALL));
        assert!(hms(&Hms::full(23, 59, 59), &HmsPart::ALL));
        assert!(!hms(&Hms::full(24, 0, 0), &HmsPart::ALL));
        assert!(!hms(&Hms::full(12, 60, 0), &HmsPart::ALL));
        assert!(!hms(&Hms::full(12, 0, 60), &HmsPart::ALL));
        assert!(!hms(&Hms::full(-1, 0, 0), &HmsPart::ALL));
    }

    #[test]
    fn test_partial() {
        assert!(hms(&Hms::default(), &HmsPart::ALL));
        assert!(hms(&Hms::new(Some(9), None, Some(30)), &HmsPart::ALL));
        assert!(hms(&Hms::full(9, 75, 0), &[HmsPart::Hour, HmsPart::Second]));
    }
}
