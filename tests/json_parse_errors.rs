//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by document parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[path = "../src/json/parse.rs"]
#[allow(dead_code)]
mod parse;

use parse::ParseFailureCategory;
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_and_eof() {
    let syntax_err = parse::from_str::<Value>(r#"{"a":}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let eof_err = parse::from_str::<Value>(r#"{"text": "unterminated"#).unwrap_err();
    assert_eq!(parse::categorize_error(&eof_err), ParseFailureCategory::Eof);
}

#[test]
fn category_mapping_handles_data_errors() {
    let data_err = parse::from_str::<Vec<String>>(r#"{"text": "x"}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&data_err),
        ParseFailureCategory::Data
    );
}

#[test]
fn hint_contains_category_position_and_context() {
    let err = parse::from_str::<Value>("{\n  \"text\": tru\n}").unwrap_err();
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: syntax"));
    assert!(hint.contains("line 2"));
    assert!(hint.contains("context: test.context"));
}

#[test]
fn labels_are_stable() {
    let cases = [
        (ParseFailureCategory::Syntax, "syntax"),
        (ParseFailureCategory::Eof, "eof"),
        (ParseFailureCategory::Data, "data"),
        (ParseFailureCategory::Io, "io"),
    ];
    for (category, label) in cases {
        assert_eq!(category.label(), label);
    }
}
