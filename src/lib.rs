// wordhoard - turns Kindle vocabulary lookups into deduplicated, dictionary-annotated cards

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod app;
pub mod dictionary;
pub mod novelty;
pub mod output;
pub mod pipeline;
pub mod translation;
pub mod turso;
pub mod util;
pub mod vocabulary;

#[cfg(test)]
mod test_support;

use clap::Parser;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

/// Binary entry point - parses the command line, runs to completion and
/// returns the process exit code.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> i32 {
    let cli = app::Cli::parse();
    util::logging::init(cli.verbose);

    let result = util::block_on(app::run(cli.into_options()));
    match result {
        Ok(Ok(summary)) => {
            info!(
                "Finished: {} read, {} already recorded, {} written to {}",
                summary.items_read,
                summary.duplicates,
                summary.records_written,
                summary.output_path.display()
            );
            0
        }
        Ok(Err(e)) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            1
        }
        Err(e) => {
            eprintln!("error: failed to start async runtime: {}", e);
            1
        }
    }
}
