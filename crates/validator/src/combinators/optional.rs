//! OPTIONAL combinator - lets empty values through

use crate::rule::Rule;

impl<T: ?Sized> Rule<T> {
    /// Sets whether empty values pass without running the rule.
    ///
    /// Format rules are optional out of the box; pair them with
    /// [`required`](crate::rules::required) to demand a value. Use this to
    /// make a custom rule optional, or to make a built-in one strict.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_optional(self, optional: bool) -> Self {
        self.set_optional(optional)
    }
}

/// Makes `rule` optional.
pub fn optional<T: ?Sized>(rule: Rule<T>) -> Rule<T> {
    rule.with_optional(true)
}
