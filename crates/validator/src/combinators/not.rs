//! NOT combinator - inverts a rule

use crate::foundation::{Message, Presence};
use crate::rule::{Node, Rule, Step};

/// Passes exactly when `rule` fails.
///
/// The inner rule's message would describe the opposite condition, so the
/// inverted rule takes its own `message`. It inherits the inner rule's
/// optionality: an optional inner rule makes the inverted rule skip empty
/// values too.
///
/// # Examples
///
/// ```
/// use sinter_validator::combinators::not;
/// use sinter_validator::foundation::{Lang, Message};
/// use sinter_validator::rule::Rule;
/// use sinter_validator::rules::email;
///
/// let handle: Rule<str> = not(email(), Message::text("not_email", "Use a handle, not an email."));
/// assert_eq!(handle.passes("aiko"), Some(true));
/// assert_eq!(handle.passes("aiko@example.com"), Some(false));
/// assert_eq!(handle.passes(""), Some(true));
/// ```
pub fn not<T: ?Sized>(rule: Rule<T>, message: Message) -> Rule<T> {
    let optional = rule.is_optional();
    Rule::from_node(Node::Not { rule, message }, optional)
}

impl<T: ?Sized> Rule<T> {
    /// Inverts this rule. See [`not`].
    #[must_use = "combinators must be used"]
    pub fn negate(self, message: Message) -> Rule<T> {
        not(self, message)
    }
}

pub(crate) fn run_not<T: Presence + ?Sized>(rule: &Rule<T>, value: &T, message: &Message) -> Step {
    let message = message.clone();
    rule.run(value).map(move |inner| match inner {
        Ok(()) => Err(message),
        Err(_) => Ok(()),
    })
}
