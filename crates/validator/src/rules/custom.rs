//! `rule` - application-defined checks

use std::borrow::Cow;

use crate::foundation::{Message, Presence, Verdict};
use crate::rule::{Rule, RuleSpec, create_rule};

/// A rule from a caller-supplied predicate and message.
///
/// The message is used for every language. The rule is not optional; call
/// [`Rule::with_optional`] to let empty values through. The predicate may
/// return a [`Verdict`] to answer later.
///
/// # Examples
///
/// ```
/// use sinter_validator::foundation::Lang;
/// use sinter_validator::rule::Rule;
/// use sinter_validator::rules::rule;
///
/// let no_spaces: Rule<str> = rule("Spaces are not allowed.", |s: &str| !s.contains(' '));
/// assert_eq!(no_spaces.passes("aiko"), Some(true));
///
/// let error = no_spaces.validate("a b", Lang::Vi).into_ready().unwrap().unwrap_err();
/// assert_eq!(error.code, "rule");
/// assert_eq!(error.message, "Spaces are not allowed.");
/// ```
pub fn rule<V, F, R>(message: impl Into<Cow<'static, str>>, predicate: F) -> Rule<V>
where
    V: Presence + ?Sized + 'static,
    F: Fn(&V) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
{
    create_rule(RuleSpec::new(Message::text("rule", message), predicate))
}
