#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const OHLCV_ENUM: &str = "package io.hbar.fx.data.series.types;\n\
\n\
public enum OHLCV {\n\
\tOpen,\n\
\tHigh,\n\
\tLow,\n\
\tClose,\n\
\tVolume;\n\
}\n";

// PatternExtractor type name tests

#[test_case("class Trade { long timestamp; }", Some("Trade") ; "inline class")]
#[test_case("public class Trade {\n}", Some("Trade") ; "modifier before class")]
#[test_case("public enum OHLCV\n{\n}", Some("OHLCV") ; "brace on next line")]
#[test_case("class Trade{ }", Some("Trade") ; "brace without space")]
#[test_case("no braces here", None ; "no brace")]
#[test_case("", None ; "empty input")]
fn PatternExtractor___extract_type_name___takes_first_match(source: &str, expected: Option<&str>) {
    let extractor = PatternExtractor::new();

    assert_eq!(
        extractor.extract_type_name(source).as_deref(),
        expected
    );
}

#[test]
fn PatternExtractor___extract_type_name___word_at_start_matches_empty() {
    let extractor = PatternExtractor::new();

    // The word must be preceded by whitespace, so only the gap before `{` matches
    assert_eq!(extractor.extract_type_name("Trade {").as_deref(), Some(""));
}

// PatternExtractor field tests

#[test]
fn PatternExtractor___extract_field_names___reads_enum_constants() {
    let extractor = PatternExtractor::new();

    let fields = extractor.extract_field_names(OHLCV_ENUM);

    assert_eq!(fields, vec!["Open", "High", "Low", "Close", "Volume"]);
}

#[test]
fn PatternExtractor___extract_field_names___misses_unterminated_last_constant() {
    let extractor = PatternExtractor::new();

    let fields = extractor.extract_field_names("enum Side {\n\tBid,\n\tAsk\n}");

    assert_eq!(fields, vec!["Bid"]);
}

#[test]
fn PatternExtractor___extract_field_names___keeps_timestamp_declaration() {
    let extractor = PatternExtractor::new();

    let fields = extractor
        .extract_field_names("class Trade { long timestamp; double price; double volume; }");

    assert_eq!(fields, vec!["timestamp", "price", "volume"]);
}

#[test]
fn PatternExtractor___extract_field_names___preserves_case_and_duplicates() {
    let extractor = PatternExtractor::new();

    let fields = extractor.extract_field_names("enum E {\n A,\n a,\n A;\n}");

    assert_eq!(fields, vec!["A", "a", "A"]);
}

#[test]
fn PatternExtractor___extract_field_names___captures_empty_word_before_separator() {
    let extractor = PatternExtractor::new();

    let fields = extractor.extract_field_names("double a ;");

    assert_eq!(fields, vec![""]);
}

#[test]
fn PatternExtractor___extract_field_names___no_separators___returns_empty() {
    let extractor = PatternExtractor::new();

    assert!(extractor.extract_field_names("class Empty { }").is_empty());
}

// extract_definition tests

#[test]
fn extract_definition___valid_source___builds_definition() {
    let extractor = PatternExtractor::new();

    let def = extract_definition(&extractor, Path::new("OHLCV.java"), OHLCV_ENUM).unwrap();

    assert_eq!(def.name, "OHLCV");
    assert_eq!(def.fields.len(), 5);
}

#[test]
fn extract_definition___no_type_name___returns_extraction_error() {
    let extractor = PatternExtractor::new();

    let result = extract_definition(&extractor, Path::new("Broken.java"), "nothing to see");

    match result {
        Err(GeneratorError::Extraction { path }) => assert_eq!(path, Path::new("Broken.java")),
        other => panic!("expected extraction error, got {other:?}"),
    }
}

#[test]
fn PatternExtractor___extract___combines_name_and_fields() {
    let extractor = PatternExtractor;

    let def = extractor.extract("enum Side { Bid, Ask; }").unwrap();

    assert_eq!(def.name, "Side");
    assert_eq!(def.fields, vec!["Bid", "Ask"]);
}

#[test]
fn PatternExtractor___extract___no_type_name___returns_none() {
    assert!(PatternExtractor::new().extract("nothing to see").is_none());
}
