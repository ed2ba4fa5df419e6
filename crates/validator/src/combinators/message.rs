//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::rule::Rule;

impl<T: ?Sized> Rule<T> {
    /// Replaces the failure message with `text` for every language.
    ///
    /// The failing rule's code and parameters are kept, so callers can still
    /// tell failures apart. On a composite the override applies to whichever
    /// child failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sinter_validator::foundation::Lang;
    /// use sinter_validator::rule::Rule;
    /// use sinter_validator::rules::min_length;
    ///
    /// let password: Rule<str> = min_length(8).with_message("Password too short");
    /// let error = password.validate("short", Lang::Ja).into_ready().unwrap().unwrap_err();
    ///
    /// assert_eq!(error.message, "Password too short");
    /// assert_eq!(error.code, "min_length");
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.set_message(text.into())
    }
}

/// Free-function form of [`Rule::with_message`].
pub fn with_message<T: ?Sized>(rule: Rule<T>, text: impl Into<Cow<'static, str>>) -> Rule<T> {
    rule.with_message(text)
}
