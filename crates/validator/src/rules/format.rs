//! `checked`, `email`, `url`, `month`

use crate::foundation::{AsInput, Message, Translations};
use crate::rule::Rule;
use crate::rules::field_rule;
use crate::validators;

pub const CHECKED_MESSAGES: Translations<&str> = Translations {
    en: "The field must be checked.",
    ja: "この項目にチェックを入れてください。",
    vi: "Trường này phải được chọn.",
};

pub const EMAIL_MESSAGES: Translations<&str> = Translations {
    en: "The email format is invalid.",
    ja: "メールアドレスの形式が正しくありません。",
    vi: "Định dạng email không hợp lệ.",
};

pub const URL_MESSAGES: Translations<&str> = Translations {
    en: "The URL format is invalid.",
    ja: "URLの形式が正しくありません。",
    vi: "Định dạng URL không hợp lệ.",
};

pub const MONTH_MESSAGES: Translations<&str> = Translations {
    en: "The month must be in YYYY-MM format.",
    ja: "年月はYYYY-MM形式で入力してください。",
    vi: "Tháng phải có định dạng YYYY-MM.",
};

/// The box must be ticked. Not optional, and an absent `Option<bool>`
/// fails.
pub fn checked<V>() -> Rule<V>
where
    V: AsInput<bool> + ?Sized + 'static,
{
    field_rule(Message::catalog("checked", CHECKED_MESSAGES), false, |b: &bool| {
        validators::checked(*b)
    })
}

/// An email address. Optional.
pub fn email<V>() -> Rule<V>
where
    V: AsInput<str> + ?Sized + 'static,
{
    field_rule::<V, str, _>(Message::catalog("email", EMAIL_MESSAGES), true, validators::email)
}

/// An `http` or `https` URL. Optional.
pub fn url<V>() -> Rule<V>
where
    V: AsInput<str> + ?Sized + 'static,
{
    field_rule::<V, str, _>(Message::catalog("url", URL_MESSAGES), true, validators::url)
}

/// A `YYYY-MM` month. Optional.
pub fn month<V>() -> Rule<V>
where
    V: AsInput<str> + ?Sized + 'static,
{
    field_rule::<V, str, _>(Message::catalog("month", MONTH_MESSAGES), true, validators::month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Lang;

    #[test]
    fn checked_is_strict() {
        let rule: Rule<bool> = checked();
        assert!(!rule.is_optional());
        assert_eq!(rule.passes(&true), Some(true));
        assert_eq!(rule.passes(&false), Some(false));

        let rule: Rule<Option<bool>> = checked();
        assert_eq!(rule.passes(&None), Some(false));
    }

    #[test]
    fn formats_skip_empty() {
        let email: Rule<str> = email();
        let url: Rule<str> = url();
        let month: Rule<str> = month();
        for rule in [&email, &url, &month] {
            assert_eq!(rule.passes(""), Some(true));
            assert_eq!(rule.passes("nope"), Some(false));
        }
    }

    #[test]
    fn format_messages() {
        let rule: Rule<String> = month();
        let error = rule
            .validate(&"2024-13".to_string(), Lang::Vi)
            .into_ready()
            .unwrap()
            .unwrap_err();
        assert_eq!(error.code, "month");
        assert_eq!(error.message, MONTH_MESSAGES.vi);
    }
}
