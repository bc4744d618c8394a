use std::path::PathBuf;

use clap::Parser;

use super::RunOptions;

#[derive(Debug, Parser)]
#[command(
    name = "wordhoard",
    version,
    about = "Turn Kindle vocabulary lookups into deduplicated, dictionary-annotated cards"
)]
pub struct Cli {
    /// Kindle vocabulary database.
    #[arg(default_value = "vocab.db")]
    pub kindle_db: PathBuf,

    /// ECDICT stardict database.
    #[arg(default_value = "stardict.db")]
    pub dict_db: PathBuf,

    /// Output CSV. Defaults to `<kindle db stem>_processed.csv`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only read the N most recently looked-up words.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Skip the contextual explanation request.
    #[arg(long)]
    pub no_ai: bool,

    /// Regenerate the whole deck instead of appending new words.
    #[arg(short, long)]
    pub full: bool,

    /// Settings file to use instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            kindle_db: self.kindle_db,
            dict_db: self.dict_db,
            output: self.output,
            limit: self.limit,
            use_ai: !self.no_ai,
            full: self.full,
            config: self.config,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
