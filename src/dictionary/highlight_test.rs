// Tests for the excerpt highlighter

use super::*;

#[test]
fn test_highlights_inflected_form_case_insensitively() {
    let h = Highlighter::new(["running", "run"]);
    let excerpt = h.highlight("He was Running fast, then ran home.");
    assert_eq!(excerpt.highlighted(), vec!["Running"]);
}

#[test]
fn test_whole_word_only() {
    let h = Highlighter::new(["cat"]);
    let excerpt = h.highlight("The cat scattered the cats.");
    assert_eq!(excerpt.highlighted(), vec!["cat", "cats"]);
}

#[test]
fn test_stem_variants_are_included() {
    let h = Highlighter::new(["walked", "walk"]);
    let excerpt = h.highlight("I walk, she walks, we walked.");
    assert_eq!(excerpt.highlighted(), vec!["walk", "walks", "walked"]);
}

#[test]
fn test_regex_metacharacters_are_escaped() {
    let h = Highlighter::new(["c++"]);
    let excerpt = h.highlight("ccc and c++");
    assert!(excerpt.highlighted().iter().all(|s| !s.is_empty()));
    assert!(!excerpt.highlighted().contains(&"ccc"));
}

#[test]
fn test_empty_closure_highlights_nothing() {
    let h = Highlighter::new(std::iter::empty());
    let excerpt = h.highlight("nothing to see");
    assert!(excerpt.spans.is_empty());
    assert_eq!(excerpt.text, "nothing to see");
}

#[test]
fn test_segments_cover_text() {
    let h = Highlighter::new(["run"]);
    let excerpt = h.highlight("I run daily");
    let segments = excerpt.segments();
    assert_eq!(segments, vec![("I ", false), ("run", true), (" daily", false)]);
    let joined: String = segments.iter().map(|(s, _)| *s).collect();
    assert_eq!(joined, "I run daily");
}

#[test]
fn test_plain_excerpt() {
    let excerpt = HighlightedExcerpt::plain("text");
    assert_eq!(excerpt.segments(), vec![("text", false)]);
}
