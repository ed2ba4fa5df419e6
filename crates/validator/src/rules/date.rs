//! `ymd` / `hms`

use crate::foundation::{AsInput, ConfigError, Message, Translations};
use crate::rule::Rule;
use crate::rules::{component_list, field_rule};
use crate::support::{Hms, HmsPart, Ymd, YmdPart};
use crate::validators;

pub const YMD_MESSAGES: Translations<&str> = Translations {
    en: "The date is invalid.",
    ja: "日付が正しくありません。",
    vi: "Ngày không hợp lệ.",
};

pub const HMS_MESSAGES: Translations<&str> = Translations {
    en: "The time is invalid.",
    ja: "時刻が正しくありません。",
    vi: "Thời gian không hợp lệ.",
};

fn part_names<P: ToString>(parts: &[P]) -> String {
    parts.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Every supplied component in `parts` must be in range, and the day must
/// exist in its month. Unset components are not checked. Optional.
///
/// # Examples
///
/// ```
/// use sinter_validator::rule::Rule;
/// use sinter_validator::rules::ymd;
/// use sinter_validator::support::{Ymd, YmdPart};
///
/// let birthday: Rule<Ymd> = ymd(YmdPart::ALL)?;
/// assert_eq!(birthday.passes(&Ymd::full(2021, 2, 30)), Some(false));
/// assert_eq!(birthday.passes(&Ymd::full(2020, 2, 29)), Some(true));
/// # Ok::<(), sinter_validator::foundation::ConfigError>(())
/// ```
pub fn ymd<V>(parts: impl IntoIterator<Item = YmdPart>) -> Result<Rule<V>, ConfigError>
where
    V: AsInput<Ymd> + ?Sized + 'static,
{
    let parts = component_list("ymd", parts)?;
    let message = Message::catalog("ymd", YMD_MESSAGES).with_param("parts", part_names(&parts));
    Ok(field_rule(message, true, move |value: &Ymd| {
        validators::ymd(value, &parts)
    }))
}

/// Every supplied component in `parts` must be in range. Optional.
pub fn hms<V>(parts: impl IntoIterator<Item = HmsPart>) -> Result<Rule<V>, ConfigError>
where
    V: AsInput<Hms> + ?Sized + 'static,
{
    let parts = component_list("hms", parts)?;
    let message = Message::catalog("hms", HMS_MESSAGES).with_param("parts", part_names(&parts));
    Ok(field_rule(message, true, move |value: &Hms| {
        validators::hms(value, &parts)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Lang;

    #[test]
    fn ymd_reports_catalog_message() {
        let rule: Rule<Ymd> = ymd(YmdPart::ALL).unwrap();
        let error = rule
            .validate(&Ymd::full(2021, 4, 31), Lang::Ja)
            .into_ready()
            .unwrap()
            .unwrap_err();
        assert_eq!(error.code, "ymd");
        assert_eq!(error.message, "日付が正しくありません。");
        assert_eq!(error.param("parts"), Some("y,m,d"));
    }

    #[test]
    fn ymd_on_optional_field() {
        let rule: Rule<Option<Ymd>> = ymd([YmdPart::Day, YmdPart::Year]).unwrap();
        assert_eq!(rule.passes(&None), Some(true));
        assert_eq!(
            rule.passes(&Some(Ymd::new(Some(2021), None, Some(15)))),
            Some(true)
        );
    }

    #[test]
    fn hms_bounds() {
        let rule: Rule<Hms> = hms(HmsPart::ALL).unwrap();
        assert_eq!(rule.passes(&Hms::full(23, 59, 59)), Some(true));
        assert_eq!(rule.passes(&Hms::full(24, 0, 0)), Some(false));
        assert!(hms::<Hms>([]).is_err());
    }
}
