//! Ready-or-deferred results
//!
//! Almost every predicate answers immediately. The exception is
//! `required_if` with a deferred condition, whose answer arrives later. Both
//! cases share one type so callers can tell them apart instead of having a
//! pending answer coerced to pass or fail.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, BoxFuture};

use crate::foundation::{ConditionError, ValidationError};

/// The result of evaluating a rule once its answer is known.
pub type Outcome = Result<(), ValidationError>;

// ============================================================================
// VERDICT
// ============================================================================

/// A predicate's pass/fail answer, possibly still pending.
pub enum Verdict {
    /// Answered synchronously.
    Ready(bool),
    /// Will answer once the future resolves.
    Deferred(BoxFuture<'static, Result<bool, ConditionError>>),
}

impl Verdict {
    /// Wraps a future producing the answer.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<bool, ConditionError>> + Send + 'static,
    {
        Self::Deferred(future.boxed())
    }

    /// Returns `true` if the answer is still pending.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Returns the answer if it is already known.
    #[must_use]
    pub fn ready(&self) -> Option<bool> {
        match self {
            Self::Ready(passed) => Some(*passed),
            Self::Deferred(_) => None,
        }
    }

    /// Waits for the answer.
    pub async fn resolve(self) -> Result<bool, ConditionError> {
        match self {
            Self::Ready(passed) => Ok(passed),
            Self::Deferred(future) => future.await,
        }
    }

    /// Transforms the answer, keeping it deferred if it was.
    #[must_use]
    pub fn map(self, f: impl FnOnce(bool) -> bool + Send + 'static) -> Self {
        match self {
            Self::Ready(passed) => Self::Ready(f(passed)),
            Self::Deferred(future) => Self::Deferred(future.map(|r| r.map(f)).boxed()),
        }
    }
}

impl From<bool> for Verdict {
    #[inline]
    fn from(passed: bool) -> Self {
        Self::Ready(passed)
    }
}

impl fmt::Debug for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(passed) => f.debug_tuple("Ready").field(passed).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// The result of [`Rule::validate`](crate::rule::Rule::validate) and
/// [`RuleSet::validate`](crate::set::RuleSet::validate).
///
/// Synchronous rules produce [`Evaluation::Ready`]. A rule that depends on
/// a deferred condition produces [`Evaluation::Pending`], which must be
/// awaited. `Evaluation` implements [`IntoFuture`], so `.await` works on
/// either variant.
#[derive(Debug)]
pub enum Evaluation<O = Outcome> {
    /// The outcome is known.
    Ready(O),
    /// The outcome depends on a deferred condition.
    Pending(Pending<O>),
}

impl<O: Send + 'static> Evaluation<O> {
    /// Returns `true` if the outcome is still pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns the outcome if known, or gives back the pending evaluation.
    pub fn into_ready(self) -> Result<O, Pending<O>> {
        match self {
            Self::Ready(outcome) => Ok(outcome),
            Self::Pending(pending) => Err(pending),
        }
    }

    /// Waits for the outcome.
    pub async fn resolve(self) -> Result<O, ConditionError> {
        self.await
    }
}

impl<O: Send + 'static> IntoFuture for Evaluation<O> {
    type Output = Result<O, ConditionError>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(outcome) => future::ready(Ok(outcome)).boxed(),
            Self::Pending(pending) => pending.future,
        }
    }
}

/// An outcome waiting on a deferred condition.
pub struct Pending<O = Outcome> {
    future: BoxFuture<'static, Result<O, ConditionError>>,
}

impl<O> Pending<O> {
    pub(crate) fn new(future: BoxFuture<'static, Result<O, ConditionError>>) -> Self {
        Self { future }
    }
}

impl<O> Future for Pending<O> {
    type Output = Result<O, ConditionError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(cx)
    }
}

impl<O> fmt::Debug for Pending<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pending(..)")
    }
}
