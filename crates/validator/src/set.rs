//! Rule sets: every rule of one field
//!
//! A [`RuleSet`] is the list of rules attached to a single form field. It
//! runs them in order and collects failures into [`ValidationErrors`],
//! tagging each error with the field name. With
//! [`fail_fast`](ValidatorConfig::fail_fast) it stops at the first failure;
//! otherwise it reports every failing rule.
//!
//! # Examples
//!
//! ```
//! use sinter_validator::config::ValidatorConfig;
//! use sinter_validator::foundation::Lang;
//! use sinter_validator::rules::{decimal, max_length, required};
//! use sinter_validator::set::RuleSet;
//!
//! let price = RuleSet::<str>::new("price")
//!     .rule(required())
//!     .rule(decimal())
//!     .rule(max_length(4));
//!
//! let config = ValidatorConfig::new().with_lang(Lang::En).with_fail_fast(false);
//! let errors = price.validate("abcde", &config).into_ready().unwrap().unwrap_err();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.first().unwrap().field.as_deref(), Some("price"));
//! ```

use std::borrow::Cow;

use futures::FutureExt;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::foundation::{ConditionError, Evaluation, Lang, Pending, Presence, ValidationErrors};
use crate::rule::{Failure, Rule, Step};

/// The collected result of a [`RuleSet`].
pub type SetOutcome = Result<(), ValidationErrors>;

/// The rules of one field, evaluated in order.
#[derive(Debug)]
pub struct RuleSet<T: ?Sized> {
    field: Cow<'static, str>,
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized> Clone for RuleSet<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized> RuleSet<T> {
    /// Creates an empty set for `field`.
    pub fn new(field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a rule in place.
    pub fn push(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    /// Returns the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Extend<Rule<T>> for RuleSet<T> {
    fn extend<I: IntoIterator<Item = Rule<T>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<T: Presence + ?Sized> RuleSet<T> {
    /// Runs every rule against `value`.
    ///
    /// The evaluation is ready unless a rule depends on a deferred
    /// condition. Rules after the first failure are skipped when
    /// `config.fail_fast` is set.
    pub fn validate(&self, value: &T, config: &ValidatorConfig) -> Evaluation<SetOutcome> {
        let mut steps = Vec::with_capacity(self.rules.len());
        let mut deferred = false;

        for rule in &self.rules {
            let step = rule.run(value);
            let failed = matches!(step, Step::Done(Err(_)));
            deferred |= matches!(step, Step::Deferred(_));
            steps.push(step);
            if failed && config.fail_fast {
                break;
            }
        }

        let collector = Collector {
            field: self.field.clone(),
            lang: config.lang,
            fail_fast: config.fail_fast,
        };

        if !deferred {
            let results = steps.into_iter().filter_map(|step| match step {
                Step::Done(result) => Some(result),
                Step::Deferred(_) => None,
            });
            return Evaluation::Ready(collector.collect(results));
        }

        Evaluation::Pending(Pending::new(collector.collect_deferred(steps).boxed()))
    }
}

struct Collector {
    field: Cow<'static, str>,
    lang: Lang,
    fail_fast: bool,
}

impl Collector {
    fn collect(&self, results: impl IntoIterator<Item = Failure>) -> SetOutcome {
        let mut errors = ValidationErrors::new();
        for result in results {
            if let Err(message) = result {
                errors.add(message.to_error(self.lang).with_field(self.field.clone()));
                if self.fail_fast {
                    break;
                }
            }
        }
        self.finish(errors)
    }

    async fn collect_deferred(self, steps: Vec<Step>) -> Result<SetOutcome, ConditionError> {
        let mut results = Vec::with_capacity(steps.len());
        for step in steps {
            let result = step.resolve().await?;
            let failed = result.is_err();
            results.push(result);
            if failed && self.fail_fast {
                break;
            }
        }
        Ok(self.collect(results))
    }

    fn finish(&self, errors: ValidationErrors) -> SetOutcome {
        if errors.has_errors() {
            debug!(
                field = %self.field,
                errors = errors.len(),
                lang = %self.lang,
                "field failed validation"
            );
        }
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::rules::{max_length, min_length, required, required_if};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn username() -> RuleSet<str> {
        RuleSet::new("username")
            .rule(required())
            .rule(min_length(3))
            .rule(max_length(5))
    }

    #[test]
    fn passes_valid_value() {
        let outcome = username()
            .validate("aiko", &ValidatorConfig::default())
            .into_ready()
            .unwrap();
        assert!(outcome.is_ok());
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let errors = username()
            .validate("", &ValidatorConfig::default())
            .into_ready()
            .unwrap()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].code, "required");
        assert_eq!(errors.errors()[0].field.as_deref(), Some("username"));
    }

    #[test]
    fn collect_all_reports_every_failure() {
        let set = RuleSet::<str>::new("code")
            .rule(min_length(10))
            .rule(max_length(2));
        let config = ValidatorConfig::new().with_fail_fast(false).with_lang(Lang::Ja);
        let errors = set.validate("abc", &config).into_ready().unwrap().unwrap_err();

        let codes: Vec<&str> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, vec!["min_length", "max_length"]);
        assert!(errors.errors().iter().all(|e| e.lang == Lang::Ja));
    }

    #[test]
    fn deferred_rule_makes_set_pending() {
        let set = RuleSet::<str>::new("phone")
            .rule(required_if(Condition::deferred(|| async { Ok(true) })))
            .rule(max_length(3));
        let config = ValidatorConfig::new().with_fail_fast(false);

        let evaluation = set.validate("", &config);
        assert!(evaluation.is_pending());
        let errors = block_on(evaluation.resolve()).unwrap().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].code, "required_if");
    }

    #[test]
    fn deferred_failure_before_sync_failure_wins_under_fail_fast() {
        let set = RuleSet::<str>::new("phone")
            .rule(required_if(Condition::deferred(|| async { Ok(true) })))
            .rule(required());
        let errors = block_on(set.validate("", &ValidatorConfig::default()).resolve())
            .unwrap()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].code, "required_if");
    }

    #[test]
    fn condition_error_is_surfaced() {
        let set = RuleSet::<str>::new("phone").rule(required_if(Condition::deferred(|| async {
            Err(ConditionError::new("timeout"))
        })));
        let err = block_on(set.validate("", &ValidatorConfig::default()).resolve()).unwrap_err();
        assert_eq!(err.message(), "timeout");
    }

    #[test]
    fn empty_set_passes() {
        let set = RuleSet::<str>::new("anything");
        assert!(set.is_empty());
        assert!(
            set.validate("", &ValidatorConfig::default())
                .into_ready()
                .unwrap()
                .is_ok()
        );
    }
}
