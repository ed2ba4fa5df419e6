//! Language tags and per-language translation tables.
//!
//! [`Lang`] is a closed set. [`Translations`] carries one field per
//! language, so a catalog missing a language does not compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

// ============================================================================
// LANG
// ============================================================================

/// A supported message language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    En,
    /// Japanese.
    Ja,
    /// Vietnamese.
    Vi,
}

/// Every supported language, in catalog order.
pub const SUPPORTED_LANGS: &[Lang] = &[Lang::En, Lang::Ja, Lang::Vi];

impl Lang {
    /// Returns the canonical tag (`"en"`, `"ja"`, `"vi"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
            Self::Vi => "vi",
        }
    }

    /// Parses a tag case-insensitively, ignoring any region suffix
    /// (`ja-JP`, `vi_VN`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            "vi" => Some(Self::Vi),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::UnknownLang(s.to_owned()))
    }
}

// ============================================================================
// TRANSLATIONS
// ============================================================================

/// One entry per supported language.
///
/// Entries are either plain strings (`Translations<&'static str>`) or
/// renderers of construction-time parameters
/// (`Translations<fn(&P) -> String>`).
///
/// # Examples
///
/// ```
/// use sinter_validator::foundation::{Lang, Translations};
///
/// const REQUIRED: Translations<&str> = Translations {
///     en: "The field is required.",
///     ja: "この項目は必須です。",
///     vi: "Trường này là bắt buộc.",
/// };
///
/// assert_eq!(*REQUIRED.get(Lang::Vi), "Trường này là bắt buộc.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations<T> {
    /// English entry.
    pub en: T,
    /// Japanese entry.
    pub ja: T,
    /// Vietnamese entry.
    pub vi: T,
}

impl<T> Translations<T> {
    /// Returns the entry for `lang`.
    #[inline]
    pub const fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::En => &self.en,
            Lang::Ja => &self.ja,
            Lang::Vi => &self.vi,
        }
    }

    /// Applies `f` to every entry.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Translations<U> {
        Translations {
            en: f(self.en),
            ja: f(self.ja),
            vi: f(self.vi),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
