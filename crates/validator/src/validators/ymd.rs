//! Date component validity

use crate::support::{Ymd, YmdPart};

/// Checks a single component. `None` components are not checked.
fn part_is_valid(value: &Ymd, part: YmdPart) -> bool {
    let Some(component) = value.get(part) else {
        return true;
    };

    match part {
        YmdPart::Year => (1..=9999).contains(&component),
        YmdPart::Month => (1..=12).contains(&component),
        YmdPart::Day => value.day_in_month(component).is_some(),
    }
}

/// Returns `true` if every requested component of `value` is valid.
///
/// Components are checked as year, then month, then day, regardless of the
/// order in `parts`, and the first invalid one stops the check. A day is
/// checked against the supplied month (January when absent) in the leap
/// [`REFERENCE_YEAR`](crate::support::REFERENCE_YEAR), so `31` fails for
/// April while 29 February passes in any year.
///
/// # Examples
///
/// ```
/// use sinter_validator::support::{Ymd, YmdPart};
/// use sinter_validator::validators::ymd;
///
/// assert!(!ymd(&Ymd::full(2021, 2, 30), &YmdPart::ALL));
/// assert!(ymd(&Ymd::full(2020, 2, 29), &YmdPart::ALL));
/// assert!(ymd(&Ymd::full(2021, 2, 29), &YmdPart::ALL));
/// assert!(ymd(&Ymd::new(Some(2021), None, Some(15)), &[YmdPart::Year, YmdPart::Day]));
/// ```
#[must_use]
pub fn ymd(value: &Ymd, parts: &[YmdPart]) -> bool {
    YmdPart::ALL
        .into_iter()
        .filter(|part| parts.contains(part))
        .all(|part| part_is_valid(value, part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ymd::full(2020, 2, 29), true)]
    #[case(Ymd::full(2021, 2, 28), true)]
    #[case(Ymd::full(2021, 2, 29), true)]
    #[case(Ymd::full(2021, 2, 30), false)]
    #[case(Ymd::full(2021, 4, 31), false)]
    #[case(Ymd::full(2021, 12, 31), true)]
    #[case(Ymd::full(0, 1, 1), false)]
    #[case(Ymd::full(10_000, 1, 1), false)]
    #[case(Ymd::full(2021, 13, 1), false)]
    #[case(Ymd::full(2021, 0, 1), false)]
    #[case(Ymd::full(2021, 1, 0), false)]
    fn full_dates(#[case] value: Ymd, #[case] expected: bool) {
        assert_eq!(ymd(&value, &YmdPart::ALL), expected, "{value:?}");
    }

    #[test]
    fn none_components_are_skipped() {
        assert!(ymd(&Ymd::default(), &YmdPart::ALL));
        assert!(ymd(&Ymd::new(None, Some(6), None), &YmdPart::ALL));
    }

    #[test]
    fn unrequested_components_are_ignored() {
        // the day still needs a real month to land in
        let value = Ymd::new(Some(2021), Some(99), Some(15));
        assert!(!ymd(&value, &[YmdPart::Year, YmdPart::Day]));

        let value = Ymd::new(Some(2021), None, Some(15));
        assert!(ymd(&value, &[YmdPart::Year, YmdPart::Day]));

        let value = Ymd::new(Some(-5), Some(3), Some(3));
        assert!(ymd(&value, &[YmdPart::Month, YmdPart::Day]));
    }

    #[test]
    fn day_without_month_uses_january() {
        assert!(ymd(&Ymd::new(None, None, Some(31)), &[YmdPart::Day]));
        assert!(!ymd(&Ymd::new(None, None, Some(32)), &[YmdPart::Day]));
    }
}
