//! Field value conversion
//!
//! Rule constructors are generic over the field type, so one `min_length`
//! rule serves `str`, `String` and `Option<String>` fields alike. A field
//! type opts in by saying how to borrow the value a predicate reads.

use std::borrow::Cow;

use crate::foundation::Presence;
use crate::support::{FileMeta, Hms, Ymd};

// ============================================================================
// CORE TRAIT
// ============================================================================

/// Types a rule over `T` can read.
///
/// [`as_input`](AsInput::as_input) returns `None` for an absent value. An
/// absent value is also empty, so optional rules never see it; non-optional
/// rules treat it as failing.
///
/// # Examples
///
/// ```
/// use sinter_validator::foundation::AsInput;
///
/// let name: Option<String> = Some("Aiko".into());
/// assert_eq!(AsInput::<str>::as_input(&name), Some("Aiko"));
/// assert_eq!(AsInput::<str>::as_input(&None::<String>), None);
/// ```
pub trait AsInput<T: ?Sized>: Presence {
    /// Borrows the value the predicate reads.
    fn as_input(&self) -> Option<&T>;
}

macro_rules! reflexive_input {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsInput<$ty> for $ty {
                #[inline]
                fn as_input(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )+
    };
}

reflexive_input!(
    str, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Ymd,
    Hms, FileMeta,
);

// ============================================================================
// COMMON CONVERSIONS
// ============================================================================

impl AsInput<str> for String {
    #[inline]
    fn as_input(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsInput<str> for Cow<'_, str> {
    #[inline]
    fn as_input(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl AsInput<[FileMeta]> for [FileMeta] {
    #[inline]
    fn as_input(&self) -> Option<&[FileMeta]> {
        Some(self)
    }
}

impl AsInput<[FileMeta]> for Vec<FileMeta> {
    #[inline]
    fn as_input(&self) -> Option<&[FileMeta]> {
        Some(self.as_slice())
    }
}

impl<T: ?Sized, U: AsInput<T>> AsInput<T> for Option<U> {
    #[inline]
    fn as_input(&self) -> Option<&T> {
        self.as_ref().and_then(AsInput::as_input)
    }
}

impl<T: ?Sized, U: AsInput<T> + ?Sized> AsInput<T> for &U {
    #[inline]
    fn as_input(&self) -> Option<&T> {
        (**self).as_input()
    }
}
