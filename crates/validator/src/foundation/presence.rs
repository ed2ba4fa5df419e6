//! Emptiness, shared by `required` and by optional rules
//!
//! A value is empty only when it is absent (`None`), an empty string, or an
//! empty sequence. Numbers, booleans (including `false`) and structured
//! date/time records are always present; structured records have their own
//! `required_ymd` / `required_hms` rules.

use std::borrow::Cow;

use crate::support::{FileMeta, Hms, Ymd};

/// Types whose values can be "empty" in the form-field sense.
pub trait Presence {
    /// Returns `true` when the value counts as not supplied.
    fn is_empty_value(&self) -> bool;
}

impl Presence for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for Cow<'_, str> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for [T] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Presence::is_empty_value)
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

macro_rules! always_present {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Presence for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )+
    };
}

always_present!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Ymd, Hms,
    FileMeta,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_and_sequences() {
        assert!("".is_empty_value());
        assert!(!" ".is_empty_value());
        assert!(String::new().is_empty_value());
        assert!(Vec::<u8>::new().is_empty_value());
        assert!(!vec![0u8].is_empty_value());
    }

    #[test]
    fn option_looks_through() {
        assert!(None::<String>.is_empty_value());
        assert!(Some(String::new()).is_empty_value());
        assert!(!Some("x".to_string()).is_empty_value());
        assert!(!Some(0i32).is_empty_value());
    }

    #[test]
    fn scalars_and_records_are_present() {
        assert!(!false.is_empty_value());
        assert!(!0.0f64.is_empty_value());
        assert!(!Ymd::default().is_empty_value());
        assert!(!Hms::default().is_empty_value());
    }
}
