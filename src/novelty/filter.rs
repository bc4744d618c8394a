// Novelty filter - decides whether a vocabulary item was already recorded
//
// A candidate is a duplicate iff its variant closure shares at least one form
// with the prior-output set. Any overlap counts, so an unrelated word that
// happens to share an inflected surface (noun "bore" vs. "bore" as past of
// "bear") is also treated as recorded.

use std::collections::HashSet;

use crate::dictionary::{
    expand, expand_inverse, DictionaryBackend, DictionaryError, LemmaResolver, VariantClosure,
};
use crate::vocabulary::VocabularyItem;

/// Lowercased display forms from a previous run, widened with the inverse
/// suffix heuristic so "stopped" recorded before also covers "stop".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoveltySet {
    forms: HashSet<String>,
}

impl NoveltySet {
    /// Build from already-extracted display forms.
    pub fn from_display_forms<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for form in forms {
            for variant in expand_inverse(form.as_ref()).iter() {
                set.insert(variant.to_string());
            }
        }
        Self { forms: set }
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(&form.trim().to_lowercase())
    }

    /// True when no form of `closure` appears in this set
    pub fn is_disjoint(&self, closure: &VariantClosure) -> bool {
        !closure.iter().any(|form| self.forms.contains(form))
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }
}

/// Full variant closure of `item`:
/// `{surface, stem} ∪ expand(surface) ∪ expand(stem) ∪` every inflection
/// form of the record the stem resolves to (all tags, not only root).
pub async fn variant_closure<B: DictionaryBackend>(
    item: &VocabularyItem,
    resolver: &mut LemmaResolver<B>,
) -> Result<VariantClosure, DictionaryError> {
    let mut closure = VariantClosure::new();
    closure.insert(item.surface());
    closure.absorb(expand(item.surface()));

    if let Some(stem) = item.hinted_stem() {
        closure.insert(stem);
        closure.absorb(expand(stem));
    }

    // Dictionary-confirmed forms; the heuristic above covers the no-entry case
    if let Some(record) = resolver.resolve(item.query_term()).await? {
        closure.extend(record.inflections.all_forms());
    }

    Ok(closure)
}

/// Whether `item` is new relative to `prior`.
///
/// Storage errors from the resolver propagate; they are fatal for the run.
pub async fn is_novel<B: DictionaryBackend>(
    item: &VocabularyItem,
    prior: &NoveltySet,
    resolver: &mut LemmaResolver<B>,
) -> Result<bool, DictionaryError> {
    let closure = variant_closure(item, resolver).await?;
    let novel = prior.is_disjoint(&closure);
    if !novel {
        crate::debug!("'{}' already recorded, skipping", item.surface());
    }
    Ok(novel)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
