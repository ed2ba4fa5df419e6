//! Requiredness
//!
//! [`required`] is the single definition of "supplied" in this crate:
//! optional rules skip exactly the values it rejects.

use crate::condition::Condition;
use crate::foundation::{Presence, Verdict};
use crate::support::{Hms, HmsPart, Ymd, YmdPart};

/// Returns `true` unless `value` is `None`, an empty string, or an empty
/// sequence.
///
/// Whitespace counts as supplied, and so do `0` and `false`.
#[inline]
#[must_use]
pub fn required<T: Presence + ?Sized>(value: &T) -> bool {
    !value.is_empty_value()
}

/// Returns `true` if at least one of the requested date components is set.
#[must_use]
pub fn required_ymd(value: &Ymd, parts: &[YmdPart]) -> bool {
    parts.iter().any(|part| value.get(*part).is_some())
}

/// Returns `true` if at least one of the requested time components is set.
#[must_use]
pub fn required_hms(value: &Hms, parts: &[HmsPart]) -> bool {
    parts.iter().any(|part| value.get(*part).is_some())
}

/// Applies [`required`] only when `condition` holds.
///
/// The answer is ready immediately unless the condition is deferred, in
/// which case the verdict stays deferred until the condition resolves. The
/// value's presence is measured now, so the future does not borrow it.
pub fn required_if<T: Presence + ?Sized>(value: &T, condition: &Condition) -> Verdict {
    let present = required(value);
    condition.evaluate().map(move |needed| !needed || present)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_required() {
        assert!(!required(""));
        assert!(!required(&None::<String>));
        assert!(!required(&Vec::<i32>::new()));
        assert!(required(" "));
        assert!(required(&0));
        assert!(required(&false));
        assert!(required(&Some("x")));
    }

    #[test]
    fn test_required_ymd_any_requested_part() {
        let only_month = Ymd::new(None, Some(4), None);
        assert!(required_ymd(&only_month, &YmdPart::ALL));
        assert!(!required_ymd(&only_month, &[YmdPart::Year, YmdPart::Day]));
        assert!(!required_ymd(&Ymd::default(), &YmdPart::ALL));
    }

    #[test]
    fn test_required_hms_any_requested_part() {
        let only_second = Hms::new(None, None, Some(0));
        assert!(required_hms(&only_second, &HmsPart::ALL));
        assert!(!required_hms(&only_second, &[HmsPart::Hour]));
    }

    #[test]
    fn test_required_if_fixed() {
        assert_eq!(required_if("", &Condition::Fixed(false)).ready(), Some(true));
        assert_eq!(required_if("", &Condition::Fixed(true)).ready(), Some(false));
        assert_eq!(required_if("a", &Condition::Fixed(true)).ready(), Some(true));
    }

    #[test]
    fn test_required_if_deferred() {
        let condition = Condition::deferred(|| async { Ok(true) });
        let verdict = required_if("", &condition);
        assert!(verdict.is_deferred());
        assert!(!block_on(verdict.resolve()).unwrap());

        let condition = Condition::deferred(|| async { Ok(false) });
        assert!(block_on(required_if("", &condition).resolve()).unwrap());
    }
}
