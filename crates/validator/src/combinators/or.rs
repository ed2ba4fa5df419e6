//! OR combinator - at least one rule must pass
//!
//! Children run in declaration order until one passes. When none does, the
//! failure carries the message of the first child in declaration order.
//! Override it with [`Rule::with_message`] when that message would confuse
//! users.
//!
//! Pending children are awaited one at a time; a deferred condition behind
//! a passing child is never requested.

use futures::FutureExt;

use crate::combinators::all_optional;
use crate::foundation::{ConditionError, Message, Presence, Translations};
use crate::rule::{Failure, Node, Rule, Step};

/// Message for an `or` with no children, which can never pass.
pub const EMPTY_MESSAGES: Translations<&str> = Translations {
    en: "The value does not satisfy any of the allowed rules.",
    ja: "この値はいずれの条件も満たしていません。",
    vi: "Giá trị không thỏa mãn bất kỳ quy tắc nào.",
};

fn empty_message() -> Message {
    Message::catalog("or", EMPTY_MESSAGES)
}

/// Combines rules so that at least one of them must pass.
///
/// `or([])` always fails. The composite is optional iff every child is.
///
/// # Examples
///
/// ```
/// use sinter_validator::combinators::or;
/// use sinter_validator::foundation::Lang;
/// use sinter_validator::rule::Rule;
/// use sinter_validator::rules::{email, url};
///
/// let contact: Rule<str> = or([email(), url()]);
/// assert_eq!(contact.passes("aiko@example.com"), Some(true));
/// assert_eq!(contact.passes("https://example.com"), Some(true));
///
/// let error = contact.validate("nope", Lang::En).into_ready().unwrap().unwrap_err();
/// assert_eq!(error.code, "email");
/// ```
pub fn or<T: ?Sized>(rules: impl IntoIterator<Item = Rule<T>>) -> Rule<T> {
    let rules: Vec<Rule<T>> = rules.into_iter().collect();
    let optional = all_optional(&rules);
    Rule::from_node(Node::Any(rules), optional)
}

impl<T: ?Sized> Rule<T> {
    /// Chains another rule with OR logic.
    #[must_use = "combinators must be used"]
    pub fn or(self, other: Rule<T>) -> Rule<T> {
        or([self, other])
    }
}

pub(crate) fn run_any<T: Presence + ?Sized>(rules: &[Rule<T>], value: &T) -> Step {
    let mut first_failure: Option<Message> = None;
    let mut children = rules.iter();

    while let Some(child) = children.next() {
        match child.run(value) {
            Step::Done(Ok(())) => return Step::Done(Ok(())),
            Step::Done(Err(message)) => {
                first_failure.get_or_insert(message);
            }
            deferred @ Step::Deferred(_) => {
                let steps: Vec<Step> = std::iter::once(deferred)
                    .chain(children.map(|child| child.run(value)))
                    .collect();
                return Step::Deferred(any_in_order(first_failure, steps).boxed());
            }
        }
    }

    Step::Done(Err(first_failure.unwrap_or_else(empty_message)))
}

async fn any_in_order(
    mut first_failure: Option<Message>,
    steps: Vec<Step>,
) -> Result<Failure, ConditionError> {
    for step in steps {
        match step.resolve().await? {
            Ok(()) => return Ok(Ok(())),
            Err(message) => {
                first_failure.get_or_insert(message);
            }
        }
    }
    Ok(Err(first_failure.unwrap_or_else(empty_message)))
}
