//! Rules whose requiredness is decided by deferred conditions.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use pretty_assertions::assert_eq;
use sinter_validator::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("sinter_validator=trace"))
        .with_test_writer()
        .try_init();
}

/// A condition backed by a lookup that answers after a short delay.
fn remote_flag(answer: bool, calls: Arc<AtomicUsize>) -> Condition {
    Condition::deferred(move || {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(answer)
        }
    })
}

// ============================================================================
// REQUIRED_IF
// ============================================================================

#[tokio::test]
async fn deferred_condition_stays_pending_until_awaited() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let rule: Rule<Option<String>> = required_if(remote_flag(true, Arc::clone(&calls)));

    let evaluation = rule.validate(&None, Lang::Vi);
    assert!(evaluation.is_pending());

    let error = evaluation.await.unwrap().unwrap_err();
    assert_eq!(error.code, "required_if");
    assert_eq!(error.message, "Trường này là bắt buộc.");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn deferred_false_condition_passes_empty_value() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let rule: Rule<str> = required_if(remote_flag(false, Arc::clone(&calls)));

    assert!(rule.validate("", Lang::En).await.unwrap().is_ok());
}

#[tokio::test]
async fn present_value_still_awaits_its_condition() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule: Rule<str> = required_if(remote_flag(true, Arc::clone(&calls)));

    let evaluation = rule.validate("filled", Lang::En);
    assert!(evaluation.is_pending());
    assert!(evaluation.await.unwrap().is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn condition_error_is_not_coerced() {
    init_tracing();
    let rule: Rule<str> = required_if(Condition::deferred(|| async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Err(ConditionError::new("feature flag service unavailable"))
    }));

    let err = rule.validate("", Lang::En).await.unwrap_err();
    assert_eq!(err.message(), "feature flag service unavailable");
}

#[tokio::test]
async fn keyed_condition_reads_current_state() {
    let state = Arc::new(RwLock::new(HashMap::from([(
        "has_phone".to_owned(),
        false,
    )])));
    let rule: Rule<str> = required_if(Condition::key("has_phone", Arc::clone(&state)));

    assert!(rule.validate("", Lang::En).await.unwrap().is_ok());

    state.write().insert("has_phone".to_owned(), true);
    let error = rule.validate("", Lang::Ja).await.unwrap().unwrap_err();
    assert_eq!(error.message, "この項目は必須です。");
}

// ============================================================================
// COMPOSITES WITH DEFERRED CHILDREN
// ============================================================================

#[tokio::test]
async fn and_reports_deferred_failure_before_later_sync_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule: Rule<str> = and([
        required_if(remote_flag(true, Arc::clone(&calls))),
        required(),
    ]);

    let error = rule.validate("", Lang::En).await.unwrap().unwrap_err();
    assert_eq!(error.code, "required_if");
}

#[tokio::test]
async fn and_with_sync_failure_first_never_waits() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule: Rule<str> = and([
        max_length(2),
        required_if(remote_flag(true, Arc::clone(&calls))),
    ]);

    let evaluation = rule.validate("abc", Lang::En);
    assert!(!evaluation.is_pending());
    let error = evaluation.into_ready().unwrap().unwrap_err();
    assert_eq!(error.code, "max_length");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn or_passes_when_deferred_branch_passes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule: Rule<str> = required_if(remote_flag(false, Arc::clone(&calls))).or(required());

    assert!(rule.validate("", Lang::En).await.unwrap().is_ok());
}

#[tokio::test]
async fn rule_set_awaits_deferred_rules_in_order() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let phone = RuleSet::<Option<String>>::new("phone")
        .rule(required_if(remote_flag(true, Arc::clone(&calls))))
        .rule(max_length(11));
    let config = ValidatorConfig::new().with_fail_fast(false);

    let errors = phone.validate(&None, &config).await.unwrap().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].field.as_deref(), Some("phone"));

    let outcome = phone
        .validate(&Some("0901234567".into()), &config)
        .await
        .unwrap();
    assert!(outcome.is_ok());
}

/// Counts how often the condition is asked for and how often an answer is
/// awaited to completion.
#[derive(Default)]
struct Requests {
    asked: AtomicUsize,
    answered: AtomicUsize,
}

impl Requests {
    fn condition(self: &Arc<Self>, answer: bool) -> Condition {
        let requests = Arc::clone(self);
        Condition::deferred(move || {
            requests.asked.fetch_add(1, Ordering::SeqCst);
            let requests = Arc::clone(&requests);
            async move {
                tokio::time::sleep(Duration::from_millis(2)).await;
                requests.answered.fetch_add(1, Ordering::SeqCst);
                Ok(answer)
            }
        })
    }

    fn counts(&self) -> (usize, usize) {
        (
            self.asked.load(Ordering::SeqCst),
            self.answered.load(Ordering::SeqCst),
        )
    }
}

#[tokio::test]
async fn and_answers_every_condition_it_asks() {
    let requests = Arc::new(Requests::default());
    let rule: Rule<str> = and([
        required_if(requests.condition(true)),
        required_if(requests.condition(true)),
    ]);

    let error = rule.validate("", Lang::En).await.unwrap().unwrap_err();
    assert_eq!(error.code, "required_if");
    assert_eq!(requests.counts(), (1, 1));

    assert!(rule.validate("filled", Lang::En).await.unwrap().is_ok());
    assert_eq!(requests.counts(), (3, 3));
}

#[tokio::test]
async fn or_answers_every_condition_it_asks() {
    let requests = Arc::new(Requests::default());
    let rule: Rule<str> = or([
        required_if(requests.condition(false)),
        required_if(requests.condition(true)),
    ]);

    assert!(rule.validate("", Lang::En).await.unwrap().is_ok());
    assert_eq!(requests.counts(), (1, 1));
}

#[tokio::test]
async fn fail_fast_rule_set_answers_every_condition_it_asks() {
    let requests = Arc::new(Requests::default());
    let field = RuleSet::<str>::new("contact")
        .rule(required_if(requests.condition(true)))
        .rule(required_if(requests.condition(true)))
        .rule(required_if(requests.condition(true)));

    let errors = field
        .validate("", &ValidatorConfig::new())
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(requests.counts(), (1, 1));
}

#[tokio::test]
async fn unawaited_evaluation_asks_nothing() {
    let requests = Arc::new(Requests::default());
    let rule: Rule<str> = required_if(requests.condition(true)).and(required());

    assert_eq!(rule.passes(""), None);
    drop(rule.validate("", Lang::En));
    assert_eq!(requests.counts(), (0, 0));
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rules_are_shared_across_tasks() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule: Rule<Option<String>> =
        required_if(remote_flag(true, Arc::clone(&calls))).and(min_length(3));

    let handles: Vec<_> = ["", "ab", "abcd"]
        .into_iter()
        .map(|input| {
            let rule = rule.clone();
            let value = Some(input.to_owned()).filter(|s| !s.is_empty());
            tokio::spawn(async move { rule.validate(&value, Lang::En).await })
        })
        .collect();

    let mut codes = Vec::new();
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        codes.push(outcome.err().map(|e| e.code.into_owned()));
    }

    assert_eq!(
        codes,
        vec![
            Some("required_if".to_owned()),
            Some("min_length".to_owned()),
            None
        ]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
