//! AND combinator - every rule must pass
//!
//! Children run in declaration order and the first failure is reported.
//! Once a child is pending, the remaining children are prepared without
//! waiting and their futures are only polled if every earlier child
//! passed. A deferred condition is requested on its first poll, so children
//! after the deciding one never request theirs.
//!
//! # Examples
//!
//! ```
//! use sinter_validator::combinators::and;
//! use sinter_validator::foundation::Lang;
//! use sinter_validator::rule::Rule;
//! use sinter_validator::rules::{max_length, min_length};
//!
//! let username: Rule<str> = and([min_length(3), max_length(12)]);
//!
//! assert_eq!(username.passes("aiko"), Some(true));
//! assert_eq!(username.passes("ai"), Some(false));
//! assert_eq!(username.passes(""), Some(true)); // both children are optional
//! ```

use futures::FutureExt;

use crate::combinators::all_optional;
use crate::foundation::{ConditionError, Presence};
use crate::rule::{Failure, Node, Rule, Step};

/// Combines rules so that all of them must pass.
///
/// `and([])` always passes. The composite is optional iff every child is.
pub fn and<T: ?Sized>(rules: impl IntoIterator<Item = Rule<T>>) -> Rule<T> {
    let rules: Vec<Rule<T>> = rules.into_iter().collect();
    let optional = all_optional(&rules);
    Rule::from_node(Node::All(rules), optional)
}

impl<T: ?Sized> Rule<T> {
    /// Chains another rule with AND logic.
    ///
    /// ```
    /// use sinter_validator::rule::Rule;
    /// use sinter_validator::rules::{decimal, max_length, required};
    ///
    /// let price: Rule<str> = required().and(decimal()).and(max_length(10));
    /// assert_eq!(price.passes(""), Some(false));
    /// assert_eq!(price.passes("12.50"), Some(true));
    /// ```
    #[must_use = "combinators must be used"]
    pub fn and(self, other: Rule<T>) -> Rule<T> {
        and([self, other])
    }
}

pub(crate) fn run_all<T: Presence + ?Sized>(rules: &[Rule<T>], value: &T) -> Step {
    let mut children = rules.iter();
    while let Some(child) = children.next() {
        match child.run(value) {
            Step::Done(Ok(())) => {}
            Step::Done(Err(message)) => return Step::Done(Err(message)),
            deferred @ Step::Deferred(_) => {
                let steps: Vec<Step> = std::iter::once(deferred)
                    .chain(children.map(|child| child.run(value)))
                    .collect();
                return Step::Deferred(all_in_order(steps).boxed());
            }
        }
    }
    Step::Done(Ok(()))
}

async fn all_in_order(steps: Vec<Step>) -> Result<Failure, ConditionError> {
    for step in steps {
        if let Err(message) = step.resolve().await? {
            return Ok(Err(message));
        }
    }
    Ok(Ok(()))
}
