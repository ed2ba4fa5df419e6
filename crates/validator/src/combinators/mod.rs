//! Rule combinators
//!
//! Build larger rules from smaller ones:
//!
//! - [`and`] - all rules must pass; reports the first failure
//! - [`or`] - at least one rule must pass; reports the first declared failure
//! - [`not`] - inverts a rule and supplies its own message
//! - [`with_message`] - replaces the failure text
//! - [`optional`] - lets empty values through
//!
//! A composite is optional only when every child is, and `not` inherits its
//! child's optionality. Optionality is checked before anything else at every
//! level, so an optional composite never looks at its children for an empty
//! value.
//!
//! # Examples
//!
//! ```
//! use sinter_validator::combinators::{and, or};
//! use sinter_validator::rule::Rule;
//! use sinter_validator::rules::{decimal, max_length, month, required};
//!
//! let amount: Rule<str> = and([required(), decimal(), max_length(12)]);
//! assert_eq!(amount.passes(""), Some(false));
//! assert_eq!(amount.passes("19.99"), Some(true));
//!
//! let period: Rule<str> = or([month(), decimal()]);
//! assert_eq!(period.passes("2024-05"), Some(true));
//! ```

pub mod and;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;

pub use and::and;
pub use message::with_message;
pub use not::not;
pub use optional::optional;
pub use or::or;

use crate::rule::Rule;

/// Optionality of a composite: set only when there are children and all of
/// them are optional.
pub(crate) fn all_optional<T: ?Sized>(rules: &[Rule<T>]) -> bool {
    !rules.is_empty() && rules.iter().all(Rule::is_optional)
}
