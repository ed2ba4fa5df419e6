//! String content validators
//!
//! Fixed-pattern format checks: email, URL, and `YYYY-MM` months.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).expect("email regex is valid")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url regex is valid")
});

static MONTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("month regex is valid"));

/// Returns `true` if `input` looks like an email address.
#[must_use]
pub fn email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Returns `true` if `input` is an `http` or `https` URL.
#[must_use]
pub fn url(input: &str) -> bool {
    URL_REGEX.is_match(input)
}

/// Returns `true` if `input` is a `YYYY-MM` month with a month of `01..=12`
/// and a year other than `0000`.
#[must_use]
pub fn month(input: &str) -> bool {
    MONTH_REGEX.is_match(input) && !input.starts_with("0000")
}
