//! Ready-made rules
//!
//! Each constructor wraps a [primitive validator](crate::validators) with a
//! message catalog in every supported language. The catalogs are public
//! constants, one per rule, so applications can show or test the exact
//! texts.
//!
//! Rules are generic over the field type through
//! [`AsInput`](crate::foundation::AsInput): `min_length` works on `str`,
//! `String`, `Cow<str>` and any `Option` of those.
//!
//! Format and bound rules are optional: they let empty values through, so
//! combine them with [`required`] when a value is mandatory. The
//! requiredness rules, [`checked`] and [`rule`] are not optional.
//!
//! Constructors whose parameters can be malformed (size strings, component
//! lists, extension lists, NaN bounds) return
//! [`ConfigError`](crate::foundation::ConfigError) instead of a rule.
//!
//! # Examples
//!
//! ```
//! use sinter_validator::foundation::Lang;
//! use sinter_validator::rule::Rule;
//! use sinter_validator::rules::{max_length, required};
//!
//! let name: Rule<Option<String>> = required().and(max_length(20));
//!
//! let error = name.validate(&None, Lang::Ja).into_ready().unwrap().unwrap_err();
//! assert_eq!(error.message, "この項目は必須です。");
//!
//! let long = Some("x".repeat(21));
//! let error = name.validate(&long, Lang::En).into_ready().unwrap().unwrap_err();
//! assert_eq!(error.message, "The value must be less than or equal to 20 characters.");
//! ```

pub mod custom;
pub mod date;
pub mod decimal;
pub mod file;
pub mod format;
pub mod length;
pub mod range;
pub mod required;

pub use custom::rule;
pub use date::{hms, ymd};
pub use decimal::decimal;
pub use file::{file_extension, max_total_file_size};
pub use format::{checked, email, month, url};
pub use length::{max_length, min_length};
pub use range::{max_value, min_value};
pub use required::{required, required_hms, required_if, required_ymd};

use crate::foundation::{AsInput, ConfigError, Message};
use crate::rule::{Rule, RuleSpec, create_rule};

/// Builds a rule that reads a `T` out of the field and checks it.
///
/// Absent values fail; optional rules never see them.
fn field_rule<V, T, F>(message: Message, optional: bool, check: F) -> Rule<V>
where
    V: AsInput<T> + ?Sized + 'static,
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    create_rule(
        RuleSpec::new(message, move |value: &V| {
            AsInput::<T>::as_input(value).is_some_and(&check)
        })
        .with_optional(optional),
    )
}

/// Collects a component list, sorted and deduplicated. Empty lists are a
/// configuration error.
fn component_list<P: Ord>(
    rule: &'static str,
    parts: impl IntoIterator<Item = P>,
) -> Result<Vec<P>, ConfigError> {
    let mut parts: Vec<P> = parts.into_iter().collect();
    if parts.is_empty() {
        return Err(ConfigError::EmptyComponents { rule });
    }
    parts.sort_unstable();
    parts.dedup();
    Ok(parts)
}
