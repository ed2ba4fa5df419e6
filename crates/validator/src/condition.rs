//! Requiredness conditions for `required_if`
//!
//! A [`Condition`] decides, at evaluation time, whether a value is
//! mandatory. It is one of:
//!
//! - a fixed boolean,
//! - a key looked up in shared state ([`ConditionState`]),
//! - a function answering synchronously, or
//! - a function returning a future (a deferred condition).
//!
//! Conditions read state but never change it.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;

use crate::foundation::{ConditionError, Verdict};

// ============================================================================
// CONDITION STATE
// ============================================================================

/// External state that conditions can reference by key.
pub trait ConditionState: Send + Sync {
    /// Returns whether the entry at `key` is set. Missing keys are unset.
    fn is_truthy(&self, key: &str) -> bool;
}

impl ConditionState for HashMap<String, bool> {
    fn is_truthy(&self, key: &str) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

/// JSON values use the usual form-state truthiness: `null`, `false`, `0`
/// and `""` are unset; arrays and objects are set.
fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ConditionState for serde_json::Map<String, Value> {
    fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(json_truthy)
    }
}

impl ConditionState for Value {
    fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(json_truthy)
    }
}

impl<S: ConditionState> ConditionState for parking_lot::RwLock<S> {
    fn is_truthy(&self, key: &str) -> bool {
        self.read().is_truthy(key)
    }
}

impl<S: ConditionState + ?Sized> ConditionState for Arc<S> {
    fn is_truthy(&self, key: &str) -> bool {
        (**self).is_truthy(key)
    }
}

// ============================================================================
// CONDITION
// ============================================================================

/// Whether a `required_if` rule applies right now.
#[derive(Clone)]
pub enum Condition {
    /// Always (`true`) or never (`false`) required.
    Fixed(bool),
    /// Required when `key` is set in `state`.
    Key {
        /// The state key.
        key: Cow<'static, str>,
        /// The state it is read from.
        state: Arc<dyn ConditionState>,
    },
    /// Required when the function says so; may answer later.
    Check(Arc<dyn Fn() -> Verdict + Send + Sync>),
}

impl Condition {
    /// A condition read from `state` at `key`.
    pub fn key<S>(key: impl Into<Cow<'static, str>>, state: Arc<S>) -> Self
    where
        S: ConditionState + 'static,
    {
        Self::Key {
            key: key.into(),
            state,
        }
    }

    /// A synchronous condition function.
    pub fn check<F>(f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self::Check(Arc::new(move || Verdict::Ready(f())))
    }

    /// A condition function that answers through a future.
    ///
    /// `f` is called when the evaluation is first polled, not when it is
    /// created. A verdict dropped before being awaited never calls `f`, and
    /// a call that was made is always awaited to completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use sinter_validator::condition::Condition;
    ///
    /// let condition = Condition::deferred(|| async { Ok(true) });
    /// assert!(condition.evaluate().is_deferred());
    /// ```
    pub fn deferred<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, ConditionError>> + Send + 'static,
    {
        let f = Arc::new(f);
        Self::Check(Arc::new(move || {
            let f = Arc::clone(&f);
            Verdict::Deferred(async move { f().await }.boxed())
        }))
    }

    /// Evaluates the condition.
    pub fn evaluate(&self) -> Verdict {
        match self {
            Self::Fixed(required) => Verdict::Ready(*required),
            Self::Key { key, state } => Verdict::Ready(state.is_truthy(key)),
            Self::Check(f) => f(),
        }
    }
}

impl From<bool> for Condition {
    fn from(required: bool) -> Self {
        Self::Fixed(required)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(required) => f.debug_tuple("Fixed").field(required).finish(),
            Self::Key { key, .. } => f.debug_struct("Key").field("key", key).finish_non_exhaustive(),
            Self::Check(_) => f.write_str("Check(..)"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
