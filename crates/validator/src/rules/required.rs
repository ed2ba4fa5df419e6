//! `required`, `required_if`, `required_ymd`, `required_hms`
//!
//! All four share one catalog. None of them are optional.

use crate::condition::Condition;
use crate::foundation::{AsInput, ConfigError, Message, Presence, Translations};
use crate::rule::{Rule, RuleSpec, create_rule};
use crate::rules::{component_list, field_rule};
use crate::support::{Hms, HmsPart, Ymd, YmdPart};
use crate::validators;

pub const MESSAGES: Translations<&str> = Translations {
    en: "The field is required.",
    ja: "この項目は必須です。",
    vi: "Trường này là bắt buộc.",
};

fn message(code: &'static str) -> Message {
    Message::catalog(code, MESSAGES)
}

/// Fails on `None`, an empty string, or an empty sequence.
pub fn required<V>() -> Rule<V>
where
    V: Presence + ?Sized + 'static,
{
    create_rule(RuleSpec::new(message("required"), |value: &V| {
        validators::required(value)
    }))
}

/// Same as [`required`] while `condition` holds; passes otherwise.
///
/// A deferred condition makes every evaluation of this rule pending until
/// the condition answers. If the condition fails, the evaluation fails
/// with its [`ConditionError`](crate::foundation::ConditionError).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// use parking_lot::RwLock;
/// use sinter_validator::condition::Condition;
/// use sinter_validator::rule::Rule;
/// use sinter_validator::rules::required_if;
///
/// let form = Arc::new(RwLock::new(HashMap::from([("has_phone".to_string(), false)])));
/// let phone: Rule<str> = required_if(Condition::key("has_phone", Arc::clone(&form)));
///
/// assert_eq!(phone.passes(""), Some(true));
/// form.write().insert("has_phone".to_string(), true);
/// assert_eq!(phone.passes(""), Some(false));
/// ```
pub fn required_if<V>(condition: impl Into<Condition>) -> Rule<V>
where
    V: Presence + ?Sized + 'static,
{
    let condition = condition.into();
    create_rule(RuleSpec::new(message("required_if"), move |value: &V| {
        validators::required_if(value, &condition)
    }))
}

/// At least one of `parts` must be set.
///
/// Pass [`YmdPart::ALL`] to accept any component.
pub fn required_ymd<V>(parts: impl IntoIterator<Item = YmdPart>) -> Result<Rule<V>, ConfigError>
where
    V: AsInput<Ymd> + ?Sized + 'static,
{
    let parts = component_list("required_ymd", parts)?;
    Ok(field_rule(message("required_ymd"), false, move |value: &Ymd| {
        validators::required_ymd(value, &parts)
    }))
}

/// At least one of `parts` must be set.
pub fn required_hms<V>(parts: impl IntoIterator<Item = HmsPart>) -> Result<Rule<V>, ConfigError>
where
    V: AsInput<Hms> + ?Sized + 'static,
{
    let parts = component_list("required_hms", parts)?;
    Ok(field_rule(message("required_hms"), false, move |value: &Hms| {
        validators::required_hms(value, &parts)
    }))
}
