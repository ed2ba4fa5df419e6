//! `min_length` / `max_length`

use crate::foundation::{AsInput, Message, Translations};
use crate::rule::Rule;
use crate::rules::field_rule;
use crate::validators;

/// Messages for [`min_length`], rendered with the minimum.
pub const MIN_LENGTH_MESSAGES: Translations<fn(&usize) -> String> = Translations {
    en: |min| format!("The value must be greater than or equal to {min} characters."),
    ja: |min| format!("この値は最小{min}文字です。"),
    vi: |min| format!("Giá trị phải lớn hơn hoặc bằng {min} ký tự."),
};

/// Messages for [`max_length`], rendered with the maximum.
pub const MAX_LENGTH_MESSAGES: Translations<fn(&usize) -> String> = Translations {
    en: |length| format!("The value must be less than or equal to {length} characters."),
    ja: |length| format!("この値は、最大{length}文字までです。"),
    vi: |length| format!("Giá trị phải ít hơn hoặc bằng {length} ký tự."),
};

/// At least `min` characters. Optional.
pub fn min_length<V>(min: usize) -> Rule<V>
where
    V: AsInput<str> + ?Sized + 'static,
{
    let message = Message::template("min_length", MIN_LENGTH_MESSAGES, min)
        .with_param("min", min.to_string());
    field_rule(message, true, move |s: &str| validators::min_length(s, min))
}

/// At most `max` characters. Optional.
pub fn max_length<V>(max: usize) -> Rule<V>
where
    V: AsInput<str> + ?Sized + 'static,
{
    let message = Message::template("max_length", MAX_LENGTH_MESSAGES, max)
        .with_param("max", max.to_string());
    field_rule(message, true, move |s: &str| validators::max_length(s, max))
}
