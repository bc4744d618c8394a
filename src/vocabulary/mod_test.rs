// Tests for VocabularyItem construction

use super::*;

#[test]
fn test_strips_lang_prefix() {
    let item = VocabularyItem::new("en:running", Some("en:run"), Vec::<String>::new()).unwrap();
    assert_eq!(item.surface(), "running");
    assert_eq!(item.hinted_stem(), Some("run"));
}

#[test]
fn test_numeric_prefix_is_kept() {
    assert_eq!(strip_lang_prefix("10:30"), "10:30");
    assert_eq!(strip_lang_prefix("en-GB:colour"), "colour");
    assert_eq!(strip_lang_prefix(":odd"), ":odd");
}

#[test]
fn test_empty_surface_rejected() {
    let result = VocabularyItem::new("en:", None, Vec::<String>::new());
    assert_eq!(result, Err(VocabularyError::EmptySurface));
    assert!(VocabularyItem::new("   ", None, Vec::<String>::new()).is_err());
}

#[test]
fn test_blank_stem_is_none() {
    let item = VocabularyItem::new("word", Some("  "), Vec::<String>::new()).unwrap();
    assert!(item.hinted_stem().is_none());
    assert_eq!(item.query_term(), "word");
}

#[test]
fn test_usages_capped_and_cleaned() {
    let item = VocabularyItem::new(
        "word",
        None,
        vec!["  first ", "", "second", "   ", "third", "fourth"],
    )
    .unwrap();
    assert_eq!(item.usages(), ["first", "second", "third"]);
    assert_eq!(item.first_usage(), Some("first"));
}

#[test]
fn test_query_term_prefers_stem() {
    let item = VocabularyItem::new("ran", Some("run"), vec!["He ran."]).unwrap();
    assert_eq!(item.query_term(), "run");
}

#[test]
fn test_no_usages() {
    let item = VocabularyItem::new("word", None, Vec::<&str>::new()).unwrap();
    assert!(item.first_usage().is_none());
}
