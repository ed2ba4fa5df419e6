//! # sinter-validator
//!
//! Composable field validation rules with lazily localized messages.
//!
//! ## Quick Start
//!
//! ```
//! use sinter_validator::prelude::*;
//!
//! // Format rules are optional; pair them with `required()` to demand a value.
//! let username: Rule<str> = required().and(min_length(3)).and(max_length(20));
//!
//! assert!(username.validate("aiko", Lang::En).into_ready().unwrap().is_ok());
//!
//! let error = username.validate("ai", Lang::Ja).into_ready().unwrap().unwrap_err();
//! assert_eq!(error.code, "min_length");
//! assert_eq!(error.message, "この値は最小3文字です。");
//! ```
//!
//! ## Concepts
//!
//! - A [`Rule`](rule::Rule) is a predicate, a failure [`Message`](foundation::Message)
//!   and an optional flag. Optional rules pass empty values.
//! - Messages are resolved only after a failure, and only for the requested
//!   [`Lang`](foundation::Lang). Every catalog covers every language.
//! - [`and`](combinators::and), [`or`](combinators::or) and
//!   [`not`](combinators::not) compose rules.
//! - [`required_if`](rules::required_if) may depend on a deferred condition.
//!   Its evaluation is then [`Pending`](foundation::Pending) and must be
//!   awaited; it is never coerced to pass or fail.
//! - A [`RuleSet`](set::RuleSet) runs all rules of one field under a
//!   [`ValidatorConfig`](config::ValidatorConfig).
//!
//! ## Built-in Rules
//!
//! - **Text**: [`min_length`](rules::min_length), [`max_length`](rules::max_length),
//!   [`decimal`](rules::decimal), [`email`](rules::email), [`url`](rules::url),
//!   [`month`](rules::month)
//! - **Numeric**: [`min_value`](rules::min_value), [`max_value`](rules::max_value)
//! - **Date/time**: [`ymd`](rules::ymd), [`hms`](rules::hms),
//!   [`required_ymd`](rules::required_ymd), [`required_hms`](rules::required_hms)
//! - **Files**: [`max_total_file_size`](rules::max_total_file_size),
//!   [`file_extension`](rules::file_extension)
//! - **Presence**: [`required`](rules::required), [`required_if`](rules::required_if),
//!   [`checked`](rules::checked)
//! - **Custom**: [`rule`](rules::rule), [`create_rule`](rule::create_rule)

// ValidationError is the outcome type of every evaluation; boxing it would
// add an allocation to every failure.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod condition;
pub mod config;
pub mod foundation;
pub mod prelude;
pub mod rule;
pub mod rules;
pub mod set;
pub mod support;
pub mod validators;
