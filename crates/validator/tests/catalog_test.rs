//! Message catalogs: every rule answers in every supported language.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sinter_validator::foundation::SUPPORTED_LANGS;
use sinter_validator::prelude::*;

fn failure<T: Presence + ?Sized>(rule: &Rule<T>, value: &T, lang: Lang) -> ValidationError {
    rule.validate(value, lang)
        .into_ready()
        .expect("synchronous rule")
        .expect_err("value should fail")
}

// ============================================================================
// TEXT RULES
// ============================================================================

#[rstest]
#[case(Lang::En, "The value must be greater than or equal to 3 characters.")]
#[case(Lang::Ja, "この値は最小3文字です。")]
#[case(Lang::Vi, "Giá trị phải lớn hơn hoặc bằng 3 ký tự.")]
fn min_length_messages(#[case] lang: Lang, #[case] expected: &str) {
    let rule: Rule<str> = min_length(3);
    let error = failure(&rule, "ab", lang);
    assert_eq!(error.message, expected);
    assert_eq!(error.param("min"), Some("3"));
}

#[rstest]
#[case(Lang::En, "The value must be less than or equal to 5 characters.")]
#[case(Lang::Ja, "この値は、最大5文字までです。")]
#[case(Lang::Vi, "Giá trị phải ít hơn hoặc bằng 5 ký tự.")]
fn max_length_messages(#[case] lang: Lang, #[case] expected: &str) {
    let rule: Rule<str> = max_length(5);
    assert_eq!(failure(&rule, "abcdef", lang).message, expected);
}

#[rstest]
#[case(Lang::En, "The field is required.")]
#[case(Lang::Ja, "この項目は必須です。")]
#[case(Lang::Vi, "Trường này là bắt buộc.")]
fn required_messages(#[case] lang: Lang, #[case] expected: &str) {
    let rule: Rule<Option<String>> = required();
    let error = failure(&rule, &None, lang);
    assert_eq!(error.message, expected);
    assert_eq!(error.lang, lang);
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("1.2.3")]
#[case("-")]
fn decimal_cases(#[case] input: &str) {
    let rule: Rule<str> = decimal();
    let passes = rule.passes(input);
    if input.is_empty() {
        assert_eq!(passes, Some(true));
    } else {
        assert_eq!(passes, Some(false));
    }
}

// ============================================================================
// EVERY RULE, EVERY LANGUAGE
// ============================================================================

#[rstest]
fn text_rules_resolve_in_every_language(
    #[values(Lang::En, Lang::Ja, Lang::Vi)] lang: Lang,
) {
    let cases: Vec<(Rule<str>, &str)> = vec![
        (required(), ""),
        (min_length(4), "abc"),
        (max_length(1), "abc"),
        (decimal(), "1,5"),
        (email(), "no-at-sign"),
        (url(), "not a url"),
        (month(), "2024-13"),
        (required_if(true), ""),
    ];

    for (rule, input) in cases {
        let error = failure(&rule, input, lang);
        assert_eq!(error.lang, lang);
        assert_eq!(error.code, rule.name());
        assert!(!error.message.is_empty(), "{} has an empty message", rule.name());
    }
}

#[rstest]
fn structured_rules_resolve_in_every_language(
    #[values(Lang::En, Lang::Ja, Lang::Vi)] lang: Lang,
) {
    let date: Rule<Ymd> = ymd(YmdPart::ALL).unwrap();
    assert!(!failure(&date, &Ymd::full(2021, 2, 30), lang).message.is_empty());

    let time: Rule<Hms> = hms(HmsPart::ALL).unwrap();
    assert!(!failure(&time, &Hms::full(24, 0, 0), lang).message.is_empty());

    let agree: Rule<bool> = checked();
    assert!(!failure(&agree, &false, lang).message.is_empty());

    let files: Rule<Vec<FileMeta>> = file_extension(["pdf"]).unwrap();
    let error = failure(&files, &vec![FileMeta::new("photo.png", 10)], lang);
    assert!(error.message.contains("pdf"));
}

#[test]
fn supported_langs_parse_from_region_tags() {
    for lang in SUPPORTED_LANGS {
        let tagged = format!("{}-XX", lang.as_str());
        assert_eq!(Lang::parse(&tagged), Some(*lang));
    }
    assert_eq!(Lang::parse("fr"), None);
}

// ============================================================================
// OVERRIDES
// ============================================================================

#[rstest]
#[case(Lang::En)]
#[case(Lang::Ja)]
#[case(Lang::Vi)]
fn overridden_message_is_language_independent(#[case] lang: Lang) {
    let rule: Rule<str> = min_length(8).with_message("Password is too short.");
    let error = failure(&rule, "pass", lang);
    assert_eq!(error.message, "Password is too short.");
    assert_eq!(error.code, "min_length");
    assert_eq!(error.param("min"), Some("8"));
}

#[test]
fn empty_or_uses_its_own_catalog() {
    let rule: Rule<str> = or(Vec::new());
    let error = failure(&rule, "anything", Lang::En);
    assert_eq!(error.code, "or");
    assert!(!rule.is_optional());
}

// ============================================================================
// SNAPSHOTS
// ============================================================================

#[test]
fn rule_set_report_snapshot() {
    let code = RuleSet::<str>::new("code")
        .rule(required())
        .rule(min_length(10))
        .rule(max_length(2));
    let config = ValidatorConfig::new().with_fail_fast(false);

    let errors = code
        .validate("abc", &config)
        .into_ready()
        .unwrap()
        .unwrap_err();

    let report = errors.to_string();
    insta::assert_snapshot!(report.trim_end(), @r"
    Validation failed with 2 error(s):
      1. [code] min_length: The value must be greater than or equal to 10 characters.
      2. [code] max_length: The value must be less than or equal to 2 characters.
    ");
}

#[test]
fn japanese_error_snapshot() {
    let size: Rule<Vec<FileMeta>> = max_total_file_size("1MB").unwrap();
    let files = vec![
        FileMeta::new("a.jpg", 700_000),
        FileMeta::new("b.jpg", 700_000),
    ];
    let error = failure(&size, &files, Lang::Ja).with_field("attachments");

    insta::assert_snapshot!(
        error.to_string(),
        @"[attachments] max_total_file_size: 合計ファイルサイズは最大1MBまでです。"
    );
    assert_eq!(error.param("bytes"), Some("1048576"));
}
