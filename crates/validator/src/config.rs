//! Validator configuration
//!
//! The language is explicit configuration: nothing in this crate reads a
//! global or thread-local locale. Applications usually load a
//! [`ValidatorConfig`] once and hand it to [`RuleSet::validate`](crate::set::RuleSet::validate).
//!
//! # Examples
//!
//! ```
//! use sinter_validator::config::ValidatorConfig;
//! use sinter_validator::foundation::Lang;
//!
//! let config = ValidatorConfig::from_json(r#"{ "lang": "ja-JP", "fail_fast": false }"#)?;
//! assert_eq!(config.lang, Lang::Ja);
//! assert!(!config.fail_fast);
//!
//! // Missing fields fall back to the defaults.
//! let config = ValidatorConfig::from_json("{}")?;
//! assert_eq!(config, ValidatorConfig::default());
//! # Ok::<(), sinter_validator::foundation::ConfigError>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::foundation::{ConfigError, Lang};

/// How rule sets are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Language messages are resolved in. Accepts region-tagged values
    /// such as `"vi-VN"`.
    #[serde(deserialize_with = "lenient_lang")]
    pub lang: Lang,

    /// Stop at the first failing rule of a field.
    pub fail_fast: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            lang: Lang::En,
            fail_fast: true,
        }
    }
}

impl ValidatorConfig {
    /// Creates the default configuration: English, fail fast.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message language.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Sets whether a field stops at its first failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn lenient_lang<'de, D>(deserializer: D) -> Result<Lang, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    tag.parse().map_err(serde::de::Error::custom)
}
