// Variant expander - suffix-rule heuristic over English inflections
//
// Over-generates on purpose (non-words are fine): the output only feeds
// membership tests and highlighting, never display.

use std::collections::BTreeSet;

/// Set of surface forms treated as "the same word".
///
/// Every form is stored lowercased and membership tests lowercase the probe,
/// so all comparisons are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantClosure {
    forms: BTreeSet<String>,
}

impl VariantClosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a form; blank forms are ignored.
    pub fn insert(&mut self, form: &str) {
        let form = form.trim().to_lowercase();
        if !form.is_empty() {
            self.forms.insert(form);
        }
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(&form.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Forms in lexical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }

    /// Merge another closure into this one
    pub fn absorb(&mut self, other: VariantClosure) {
        self.forms.extend(other.forms);
    }
}

impl<'a> Extend<&'a str> for VariantClosure {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for form in iter {
            self.insert(form);
        }
    }
}

impl<'a> FromIterator<&'a str> for VariantClosure {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut closure = Self::new();
        closure.extend(iter);
        closure
    }
}

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Forward expansion: the plausible inflected forms of `word`.
///
/// From the lowercased word: itself, `+s`, `+es`, `+ed`, `+d`, `+ing`;
/// `e`-dropped `+ing` when it ends in `e`; final letter doubled `+ing` when
/// the last character is a vowel and the word is longer than one character.
pub fn expand(word: &str) -> VariantClosure {
    let word = word.trim().to_lowercase();
    let mut closure = VariantClosure::new();
    if word.is_empty() {
        return closure;
    }

    closure.insert(&word);
    for suffix in ["s", "es", "ed", "d", "ing"] {
        closure.insert(&format!("{word}{suffix}"));
    }

    if let Some(stem) = word.strip_suffix('e') {
        // "e" alone would give a bare "ing"; that is still a candidate
        closure.insert(&format!("{stem}ing"));
    }

    let mut chars = word.chars();
    if let Some(last) = chars.next_back() {
        if VOWELS.contains(&last) && chars.next().is_some() {
            closure.insert(&format!("{word}{last}ing"));
        }
    }

    closure
}

/// Inverse expansion: probable roots of an already-inflected `form`.
///
/// Strips `s` (len > 2), `es` (len > 3), `ed` (len > 3, also undoubling a
/// doubled final consonant as in "stopped" -> "stop") and `ing` (len > 4,
/// also re-appending `e` as in "writing" -> "write"). The original form is
/// always kept.
pub fn expand_inverse(form: &str) -> VariantClosure {
    let word = form.trim().to_lowercase();
    let mut closure = VariantClosure::new();
    if word.is_empty() {
        return closure;
    }
    closure.insert(&word);

    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    if len > 2 {
        if let Some(stem) = word.strip_suffix('s') {
            closure.insert(stem);
        }
    }
    if len > 3 {
        if let Some(stem) = word.strip_suffix("es") {
            closure.insert(stem);
        }
    }
    if len > 3 {
        if let Some(stem) = word.strip_suffix("ed") {
            closure.insert(stem);
            if len > 4 && chars[len - 3] == chars[len - 4] {
                let undoubled: String = chars[..len - 3].iter().collect();
                closure.insert(&undoubled);
            }
        }
    }
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ing") {
            closure.insert(stem);
            closure.insert(&format!("{stem}e"));
        }
    }

    closure
}

#[cfg(test)]
#[path = "expander_test.rs"]
mod tests;
