//! `decimal`

use crate::foundation::{AsInput, Message, Translations};
use crate::rule::Rule;
use crate::rules::field_rule;
use crate::validators;

pub const MESSAGES: Translations<&str> = Translations {
    en: "The value must be valid decimal numbers.",
    ja: "この値は小数または10進数である必要があります。",
    vi: "Giá trị phải là số thập phân hợp lệ.",
};

/// A decimal number such as `-3.5` or `.25`; a lone `-` fails. Optional.
pub fn decimal<V>() -> Rule<V>
where
    V: AsInput<str> + ?Sized + 'static,
{
    field_rule::<V, str, _>(Message::catalog("decimal", MESSAGES), true, validators::decimal)
}
