//! Rules and the rule factory
//!
//! A [`Rule`] pairs a predicate with a failure [`Message`] and an
//! optionality flag. Rules are immutable and cheap to clone; build them once
//! and evaluate them as often as needed, from any thread.
//!
//! # Evaluation
//!
//! 1. An optional rule passes an empty value (see
//!    [`Presence`](crate::foundation::Presence)) without running its
//!    predicate.
//! 2. Otherwise the predicate runs. On failure the message is resolved for
//!    the requested language; on success nothing is resolved.
//!
//! Composite rules built with [`and`](crate::combinators::and),
//! [`or`](crate::combinators::or) and [`not`](crate::combinators::not) follow
//! the same two steps at every level.
//!
//! # Examples
//!
//! ```
//! use sinter_validator::foundation::{Lang, Message};
//! use sinter_validator::rule::{RuleSpec, create_rule};
//!
//! let even = create_rule(RuleSpec::new(
//!     Message::text("even", "Must be even."),
//!     |n: &i64| n % 2 == 0,
//! ));
//!
//! assert_eq!(even.passes(&4), Some(true));
//! let error = even.validate(&3, Lang::En).into_ready().unwrap().unwrap_err();
//! assert_eq!(error.message, "Must be even.");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, trace, warn};

use crate::combinators::{and, not, or};
use crate::foundation::{
    ConditionError, Evaluation, Lang, Message, Outcome, Pending, Presence, Verdict,
};

// ============================================================================
// RULE
// ============================================================================

pub(crate) type Predicate<T> = Arc<dyn Fn(&T) -> Verdict + Send + Sync>;

/// What a rule does when it runs.
pub(crate) enum Node<T: ?Sized> {
    /// A single predicate.
    Check {
        predicate: Predicate<T>,
        message: Message,
    },
    /// Every child must pass.
    All(Vec<Rule<T>>),
    /// At least one child must pass.
    Any(Vec<Rule<T>>),
    /// The child must fail.
    Not { rule: Rule<T>, message: Message },
}

impl<T: ?Sized> Clone for Node<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Check { predicate, message } => Self::Check {
                predicate: Arc::clone(predicate),
                message: message.clone(),
            },
            Self::All(rules) => Self::All(rules.clone()),
            Self::Any(rules) => Self::Any(rules.clone()),
            Self::Not { rule, message } => Self::Not {
                rule: rule.clone(),
                message: message.clone(),
            },
        }
    }
}

struct RuleInner<T: ?Sized> {
    node: Node<T>,
    optional: bool,
    message: Option<Cow<'static, str>>,
}

impl<T: ?Sized> Clone for RuleInner<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            optional: self.optional,
            message: self.message.clone(),
        }
    }
}

/// A validation rule over values of type `T`.
///
/// Build rules with [`create_rule`], the constructors in
/// [`rules`](crate::rules), or the combinators.
pub struct Rule<T: ?Sized> {
    inner: Arc<RuleInner<T>>,
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Rule<T> {
    pub(crate) fn from_node(node: Node<T>, optional: bool) -> Self {
        Self {
            inner: Arc::new(RuleInner {
                node,
                optional,
                message: None,
            }),
        }
    }

    /// Returns a copy of this rule with `optional` replaced.
    pub(crate) fn set_optional(self, optional: bool) -> Self {
        let mut inner = Arc::unwrap_or_clone(self.inner);
        inner.optional = optional;
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns a copy of this rule whose failures read `text`.
    pub(crate) fn set_message(self, text: Cow<'static, str>) -> Self {
        let mut inner = Arc::unwrap_or_clone(self.inner);
        inner.message = Some(text);
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns `true` if empty values pass without running the predicate.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.inner.optional
    }

    /// Returns the rule's name: its message code, or `and` / `or` for
    /// composites.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.inner.node {
            Node::Check { message, .. } | Node::Not { message, .. } => message.code(),
            Node::All(_) => "and",
            Node::Any(_) => "or",
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Rule");
        s.field("name", &self.name())
            .field("optional", &self.inner.optional);
        if let Node::All(rules) | Node::Any(rules) = &self.inner.node {
            s.field("rules", rules);
        }
        if let Some(message) = &self.inner.message {
            s.field("message", message);
        }
        s.finish()
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// A failing rule's unresolved message.
pub(crate) type Failure = Result<(), Message>;

/// One rule's result before messages are resolved.
pub(crate) enum Step {
    Done(Failure),
    Deferred(BoxFuture<'static, Result<Failure, ConditionError>>),
}

impl Step {
    pub(crate) async fn resolve(self) -> Result<Failure, ConditionError> {
        match self {
            Self::Done(result) => Ok(result),
            Self::Deferred(future) => future.await,
        }
    }

    pub(crate) fn map(self, f: impl FnOnce(Failure) -> Failure + Send + 'static) -> Self {
        match self {
            Self::Done(result) => Self::Done(f(result)),
            Self::Deferred(future) => Self::Deferred(future.map(|r| r.map(f)).boxed()),
        }
    }

    /// Turns a predicate's verdict into a step failing with `message`.
    pub(crate) fn from_verdict(verdict: Verdict, message: &Message) -> Self {
        match verdict {
            Verdict::Ready(true) => Self::Done(Ok(())),
            Verdict::Ready(false) => Self::Done(Err(message.clone())),
            Verdict::Deferred(future) => {
                let message = message.clone();
                let settle = move |passed: bool| if passed { Ok(()) } else { Err(message) };
                Self::Deferred(future.map(move |answer| answer.map(settle)).boxed())
            }
        }
    }
}

fn report(result: Failure, lang: Lang) -> Outcome {
    result.map_err(|message| {
        debug!(code = message.code(), %lang, "rule failed");
        message.to_error(lang)
    })
}

impl<T: Presence + ?Sized> Rule<T> {
    pub(crate) fn run(&self, value: &T) -> Step {
        if self.inner.optional && value.is_empty_value() {
            trace!(rule = self.name(), "optional rule skipped for empty value");
            return Step::Done(Ok(()));
        }

        let step = match &self.inner.node {
            Node::Check { predicate, message } => Step::from_verdict(predicate(value), message),
            Node::All(rules) => and::run_all(rules, value),
            Node::Any(rules) => or::run_any(rules, value),
            Node::Not { rule, message } => not::run_not(rule, value, message),
        };

        match &self.inner.message {
            Some(text) => {
                let text = text.clone();
                step.map(move |result| result.map_err(|message| message.overridden_by(text)))
            }
            None => step,
        }
    }

    /// Evaluates the rule against `value`, resolving any failure message in
    /// `lang`.
    ///
    /// Returns [`Evaluation::Ready`] unless the rule depends on a deferred
    /// condition. Either way the result can be awaited.
    pub fn validate(&self, value: &T, lang: Lang) -> Evaluation {
        match self.run(value) {
            Step::Done(result) => Evaluation::Ready(report(result, lang)),
            Step::Deferred(future) => {
                let name = self.name().to_owned();
                Evaluation::Pending(Pending::new(
                    async move {
                        future
                            .await
                            .map(|result| report(result, lang))
                            .inspect_err(|error| {
                                warn!(rule = %name, %error, "deferred condition failed");
                            })
                    }
                    .boxed(),
                ))
            }
        }
    }

    /// Returns whether `value` passes, or `None` if the answer depends on a
    /// deferred condition. No message is resolved.
    #[must_use]
    pub fn passes(&self, value: &T) -> Option<bool> {
        match self.run(value) {
            Step::Done(result) => Some(result.is_ok()),
            Step::Deferred(_) => None,
        }
    }
}

// ============================================================================
// RULE FACTORY
// ============================================================================

/// Everything [`create_rule`] needs: a message, a predicate, and whether
/// the rule is optional.
pub struct RuleSpec<T: ?Sized> {
    message: Message,
    validation: Predicate<T>,
    optional: bool,
}

impl<T: ?Sized + 'static> RuleSpec<T> {
    /// Describes a non-optional rule.
    ///
    /// The predicate may return `bool` or a [`Verdict`].
    pub fn new<F, V>(message: Message, validation: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        Self {
            message,
            validation: Arc::new(move |value: &T| validation(value).into()),
            optional: false,
        }
    }
}

impl<T: ?Sized> RuleSpec<T> {
    /// Marks the rule optional: empty values pass.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets whether the rule is optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

impl<T: ?Sized> fmt::Debug for RuleSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSpec")
            .field("message", &self.message)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Rule`] from a [`RuleSpec`].
pub fn create_rule<T: ?Sized>(spec: RuleSpec<T>) -> Rule<T> {
    Rule::from_node(
        Node::Check {
            predicate: spec.validation,
            message: spec.message,
        },
        spec.optional,
    )
}

// ============================================================================
// TESTS
// ============================================================================
