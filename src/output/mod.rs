// Output module - HTML cards and the two-column CSV deck
//
// Everything here is presentation: the pipeline hands over ResolvedRecords
// and this module decides how they look and where they are written.

mod deck;
mod html;
mod prior;

pub use deck::{write_cards, WriteMode};
pub use html::{escape_html, render_card, Card};
pub use prior::{extract_display_form, read_prior_forms};

/// Error types for reading and writing the deck
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error on {path:?}: {source}")]
    Csv {
        path: std::path::PathBuf,
        #[source]
        source: csv_async::Error,
    },
}
