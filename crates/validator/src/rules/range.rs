//! `min_value` / `max_value`

use std::fmt::Display;

use crate::foundation::{AsInput, ConfigError, Message, Translations};
use crate::rule::Rule;
use crate::rules::field_rule;
use crate::validators;

/// Messages for [`min_value`], rendered with the formatted minimum.
pub const MIN_VALUE_MESSAGES: Translations<fn(&String) -> String> = Translations {
    en: |min| format!("The value must be greater than or equal to {min}."),
    ja: |min| format!("この値は{min}以上である必要があります。"),
    vi: |min| format!("Giá trị phải lớn hơn hoặc bằng {min}."),
};

/// Messages for [`max_value`], rendered with the formatted maximum.
pub const MAX_VALUE_MESSAGES: Translations<fn(&String) -> String> = Translations {
    en: |max| format!("The value must be less than or equal to {max}."),
    ja: |max| format!("この値は{max}以下である必要があります。"),
    vi: |max| format!("Giá trị phải nhỏ hơn hoặc bằng {max}."),
};

/// A bound must compare with itself; rules out NaN.
fn checked_bound<N>(rule: &'static str, bound: &N) -> Result<(), ConfigError>
where
    N: PartialOrd + Display,
{
    if bound.partial_cmp(bound).is_none() {
        return Err(ConfigError::InvalidBound {
            rule,
            value: bound.to_string(),
        });
    }
    Ok(())
}

/// At least `min` (inclusive). Optional.
///
/// # Examples
///
/// ```
/// use sinter_validator::rule::Rule;
/// use sinter_validator::rules::min_value;
///
/// let age: Rule<Option<u32>> = min_value(18_u32)?;
/// assert_eq!(age.passes(&Some(18)), Some(true));
/// assert_eq!(age.passes(&Some(17)), Some(false));
/// assert_eq!(age.passes(&None), Some(true));
///
/// assert!(min_value::<f64, f64>(f64::NAN).is_err());
/// # Ok::<(), sinter_validator::foundation::ConfigError>(())
/// ```
pub fn min_value<N, V>(min: N) -> Result<Rule<V>, ConfigError>
where
    N: PartialOrd + Display + Send + Sync + 'static,
    V: AsInput<N> + ?Sized + 'static,
{
    checked_bound("min_value", &min)?;
    let shown = min.to_string();
    let message = Message::template("min_value", MIN_VALUE_MESSAGES, shown.clone())
        .with_param("min", shown);
    Ok(field_rule(message, true, move |n: &N| {
        validators::min_value(n, &min)
    }))
}

/// At most `max` (inclusive). Optional.
pub fn max_value<N, V>(max: N) -> Result<Rule<V>, ConfigError>
where
    N: PartialOrd + Display + Send + Sync + 'static,
    V: AsInput<N> + ?Sized + 'static,
{
    checked_bound("max_value", &max)?;
    let shown = max.to_string();
    let message = Message::template("max_value", MAX_VALUE_MESSAGES, shown.clone())
        .with_param("max", shown);
    Ok(field_rule(message, true, move |n: &N| {
        validators::max_value(n, &max)
    }))
}
