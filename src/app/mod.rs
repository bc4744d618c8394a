// Application layer - wires the storage, pipeline and output together for one run

mod cli;

use std::path::{Path, PathBuf};

pub use cli::Cli;

use crate::dictionary::DictionaryError;
use crate::novelty::NoveltySet;
use crate::output::{read_prior_forms, render_card, write_cards, OutputError, WriteMode};
use crate::pipeline::ResolutionPipeline;
use crate::translation::ChatGlossClient;
use crate::turso::{KindleVocabulary, StardictDictionary, TursoError};
use crate::util::{Settings, SettingsError};
use crate::vocabulary::{VocabularyError, VocabularySource};

/// Everything a run needs, independent of how it was parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub kindle_db: PathBuf,
    pub dict_db: PathBuf,
    pub output: Option<PathBuf>,
    pub limit: Option<usize>,
    pub use_ai: bool,
    pub full: bool,
    pub config: Option<PathBuf>,
}

/// What a finished run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub items_read: usize,
    pub duplicates: usize,
    pub records_written: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Storage(#[from] TursoError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// `<kindle db stem>_processed.csv`, placed in `output_dir` when given and
/// in the working directory otherwise.
pub fn default_output_path(kindle_db: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = kindle_db
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "vocab".to_string());
    let name = format!("{}_processed.csv", stem);
    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

pub async fn run(options: RunOptions) -> Result<RunSummary, AppError> {
    let settings = Settings::load(options.config.as_deref())?;
    let output_path = options.output.clone().unwrap_or_else(|| {
        default_output_path(&options.kindle_db, settings.output_dir.as_deref())
    });

    let vocabulary = KindleVocabulary::open(&options.kindle_db).await?;
    let items = vocabulary.fetch_items(options.limit).await?;
    crate::info!("Read {} vocabulary items", items.len());

    let prior = if options.full {
        NoveltySet::default()
    } else {
        NoveltySet::from_display_forms(read_prior_forms(&output_path).await?)
    };

    let dictionary = StardictDictionary::open(&options.dict_db).await?;
    let mut pipeline = ResolutionPipeline::new(dictionary);
    if options.use_ai {
        match ChatGlossClient::from_settings(&settings.translation) {
            Ok(client) => pipeline = pipeline.with_gloss_provider(Box::new(client)),
            Err(e) => crate::warn!("Contextual explanations disabled: {}", e),
        }
    }

    let outcome = pipeline.process(&items, &prior).await?;
    let cards: Vec<_> = outcome.records.iter().map(render_card).collect();
    let mode = if options.full {
        WriteMode::Full
    } else {
        WriteMode::Incremental
    };
    let records_written = write_cards(&output_path, &cards, mode).await?;

    Ok(RunSummary {
        items_read: items.len(),
        duplicates: outcome.duplicates,
        records_written,
        output_path,
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
