//! Error types
//!
//! Three kinds of failure are kept apart:
//!
//! - [`ValidationError`]: a rule rejected a value. This is an ordinary
//!   outcome and carries the resolved, localized message.
//! - [`ConfigError`]: a rule was built with bad parameters (a malformed size
//!   string, an empty component list, an unparsable config file).
//! - [`ConditionError`]: a deferred `required_if` condition failed to
//!   produce an answer. It is never folded into "not required".
//!
//! String fields use `Cow<'static, str>` so static codes and catalog
//! messages never allocate.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::Lang;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rejected value, with its message already resolved for one language.
///
/// # Examples
///
/// ```
/// use sinter_validator::foundation::{Lang, ValidationError};
///
/// let error = ValidationError::new("min_length", "The value must be greater than or equal to 3 characters.")
///     .with_lang(Lang::En)
///     .with_param("min", "3");
///
/// assert_eq!(error.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable code for programmatic handling (`"required"`, `"max_length"`).
    pub code: Cow<'static, str>,

    /// Human-readable message in [`ValidationError::lang`].
    pub message: Cow<'static, str>,

    /// Language the message was resolved for.
    pub lang: Lang,

    /// Field name, set when the error comes out of a [`RuleSet`](crate::set::RuleSet).
    pub field: Option<Cow<'static, str>>,

    /// Construction-time parameters of the failing rule.
    ///
    /// Example: `[("max", "20")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// The language defaults to [`Lang::En`]; rules always set it explicitly.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            lang: Lang::En,
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the language the message was resolved for.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first error, which is what a single-message UI shows.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Iterates over the resolved messages.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_ref())
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// A rule or configuration was built with invalid parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A human-readable size such as `"5MB"` could not be parsed.
    #[error("invalid size '{input}': {reason}")]
    InvalidSize {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A structured rule was given an empty component list.
    #[error("rule '{rule}' needs at least one component")]
    EmptyComponents {
        /// The rule being constructed.
        rule: &'static str,
    },

    /// A file extension rule was given no extensions, or a blank one.
    #[error("invalid extension list: {0}")]
    InvalidExtensions(&'static str),

    /// A numeric bound is not a finite number.
    #[error("invalid bound for '{rule}': {value}")]
    InvalidBound {
        /// The rule being constructed.
        rule: &'static str,
        /// The rejected bound, formatted.
        value: String,
    },

    /// A language tag is not one of the supported tags.
    #[error("unsupported language tag '{0}'")]
    UnknownLang(String),

    /// A configuration document could not be parsed.
    #[error("failed to parse validator config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

// ============================================================================
// CONDITION ERROR
// ============================================================================

/// A deferred requiredness condition failed to resolve.
///
/// The wrapped source comes from the caller's condition supplier; this crate
/// never retries.
#[derive(Debug, thiserror::Error)]
#[error("required-if condition failed: {message}")]
pub struct ConditionError {
    message: Cow<'static, str>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConditionError {
    /// Creates an error from a message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error from the condition supplier.
    pub fn from_source(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: Cow::Owned(source.to_string()),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// TESTS
// ============================================================================
