// ResolutionPipeline - one run over an ordered list of vocabulary items
//
// Per item, in input order: novelty filter (incremental mode only), resolve
// the stem (or surface), pick the display form, highlight the first usage and
// optionally fetch a gloss. Items are never reordered.

use serde::Serialize;

use crate::dictionary::{
    derive_canonical_form, DictionaryBackend, DictionaryError, DictionaryRecord,
    HighlightedExcerpt, Highlighter, LemmaResolver,
};
use crate::novelty::{is_novel, NoveltySet};
use crate::translation::GlossProvider;
use crate::vocabulary::VocabularyItem;

/// Outcome for one surviving vocabulary item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRecord {
    /// Form to show the learner: the root form when the dictionary has one
    pub display_form: String,
    /// The surface form as looked up on the device
    pub surface: String,
    /// `None` means no definition was found; presentation must say so
    pub matched_record: Option<DictionaryRecord>,
    /// First non-empty usage; the others are dropped
    pub first_usage: Option<String>,
    /// `first_usage` with the word's variants marked
    pub excerpt: Option<HighlightedExcerpt>,
    /// Free-text gloss of the word in `first_usage`, when available
    pub gloss: Option<String>,
}

/// Records produced by a run plus how many items were filtered as duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub records: Vec<ResolvedRecord>,
    pub duplicates: usize,
}

/// Owns the per-run resolver (and its cache) and the optional gloss provider.
pub struct ResolutionPipeline<B: DictionaryBackend> {
    resolver: LemmaResolver<B>,
    gloss_provider: Option<Box<dyn GlossProvider>>,
}

impl<B: DictionaryBackend> ResolutionPipeline<B> {
    pub fn new(backend: B) -> Self {
        Self {
            resolver: LemmaResolver::new(backend),
            gloss_provider: None,
        }
    }

    /// Add a gloss provider (builder pattern)
    pub fn with_gloss_provider(mut self, provider: Box<dyn GlossProvider>) -> Self {
        self.gloss_provider = Some(provider);
        self
    }

    pub fn resolver(&self) -> &LemmaResolver<B> {
        &self.resolver
    }

    /// Process `items` in order.
    ///
    /// With a non-empty `prior`, items already recorded are skipped. An empty
    /// `prior` means a full run and the novelty filter is never consulted.
    /// A dictionary storage error aborts the whole run.
    pub async fn process(
        &mut self,
        items: &[VocabularyItem],
        prior: &NoveltySet,
    ) -> Result<PipelineOutcome, DictionaryError> {
        let incremental = !prior.is_empty();
        let mut outcome = PipelineOutcome::default();

        for (n, item) in items.iter().enumerate() {
            if incremental && !is_novel(item, prior, &mut self.resolver).await? {
                outcome.duplicates += 1;
                continue;
            }

            crate::debug!("[{}/{}] Resolving '{}'", n + 1, items.len(), item.surface());
            let record = self.resolve_item(item).await?;
            outcome.records.push(record);
        }

        if incremental {
            crate::info!(
                "{} of {} items already recorded, {} new",
                outcome.duplicates,
                items.len(),
                outcome.records.len()
            );
        }
        Ok(outcome)
    }

    async fn resolve_item(
        &mut self,
        item: &VocabularyItem,
    ) -> Result<ResolvedRecord, DictionaryError> {
        let matched_record = self.resolver.resolve(item.query_term()).await?;
        let display_form = derive_canonical_form(matched_record.as_ref(), item.surface());

        let first_usage = item.first_usage().map(str::to_string);
        let excerpt = first_usage.as_deref().map(|usage| {
            let mut words = vec![item.surface()];
            if let Some(stem) = item.hinted_stem() {
                if !stem.eq_ignore_ascii_case(item.surface()) {
                    words.push(stem);
                }
            }
            Highlighter::new(words).highlight(usage)
        });

        let gloss = match (&self.gloss_provider, first_usage.as_deref()) {
            (Some(provider), Some(usage)) => match provider.gloss(item.surface(), usage).await {
                Ok(text) => Some(text),
                Err(e) => {
                    crate::warn!("No gloss for '{}': {}", item.surface(), e);
                    None
                }
            },
            _ => None,
        };

        Ok(ResolvedRecord {
            display_form,
            surface: item.surface().to_string(),
            matched_record,
            first_usage,
            excerpt,
            gloss,
        })
    }
}

#[cfg(test)]
#[path = "resolution_test.rs"]
mod tests;
