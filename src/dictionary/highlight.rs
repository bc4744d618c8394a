// Excerpt highlighter - marks every variant of a word inside a usage sentence
// Uses case-insensitive, whole-word matching with regex

use std::ops::Range;

use regex::Regex;
use serde::Serialize;

use super::{expand, VariantClosure};

/// A usage sentence plus the byte ranges that matched the word's variants.
///
/// The engine only records where the matches are; turning spans into markup
/// is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedExcerpt {
    pub text: String,
    pub spans: Vec<Range<usize>>,
}

impl HighlightedExcerpt {
    /// Excerpt with nothing highlighted
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// The highlighted substrings, in order
    pub fn highlighted(&self) -> Vec<&str> {
        self.spans.iter().map(|r| &self.text[r.clone()]).collect()
    }

    /// Split the text into `(segment, is_highlighted)` pieces covering it fully.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut cursor = 0;
        for span in &self.spans {
            if span.start > cursor {
                out.push((&self.text[cursor..span.start], false));
            }
            out.push((&self.text[span.clone()], true));
            cursor = span.end;
        }
        if cursor < self.text.len() {
            out.push((&self.text[cursor..], false));
        }
        out
    }
}

/// Compiled whole-word pattern over a variant closure
pub struct Highlighter {
    regex: Option<Regex>,
}

impl Highlighter {
    /// Build a highlighter for the forward expansion of every word in `words`.
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut closure = VariantClosure::new();
        for word in words {
            closure.absorb(expand(word));
        }
        Self::from_closure(&closure)
    }

    /// Build a highlighter matching exactly the forms in `closure`.
    pub fn from_closure(closure: &VariantClosure) -> Self {
        if closure.is_empty() {
            return Self { regex: None };
        }

        // Longest alternatives first so the widest form wins at a position
        let mut alternatives: Vec<&str> = closure.iter().collect();
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let body = alternatives
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?i)\b(?:{})\b", body);

        let regex = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                crate::warn!("Failed to compile highlight pattern for {:?}: {}", alternatives, e);
                None
            }
        };
        Self { regex }
    }

    pub fn highlight(&self, text: &str) -> HighlightedExcerpt {
        let spans = match &self.regex {
            Some(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        };
        HighlightedExcerpt {
            text: text.to_string(),
            spans,
        }
    }
}

#[cfg(test)]
#[path = "highlight_test.rs"]
mod tests;
