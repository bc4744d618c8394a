// Writing cards to the two-column CSV deck

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use tokio::fs::File;

use super::{Card, OutputError};

/// How new cards relate to an existing deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the deck with the new cards.
    Full,
    /// Keep existing rows and append the new cards after them.
    Incremental,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> OutputError + '_ {
    move |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path) -> impl FnOnce(csv_async::Error) -> OutputError + '_ {
    move |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

async fn read_existing_rows(path: &Path) -> Result<Vec<csv_async::StringRecord>, OutputError> {
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error(path)(e)),
    };
    let mut reader = csv_async::AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_reader(file);
    let mut records = reader.records();
    let mut rows = Vec::new();
    while let Some(record) = records.next().await {
        rows.push(record.map_err(csv_error(path))?);
    }
    Ok(rows)
}

async fn write_rows(
    tmp: &Path,
    existing: &[csv_async::StringRecord],
    cards: &[Card],
) -> Result<(), OutputError> {
    let file = File::create(tmp).await.map_err(io_error(tmp))?;
    let mut writer = csv_async::AsyncWriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_writer(file);

    for row in existing {
        writer.write_record(row).await.map_err(csv_error(tmp))?;
    }
    for card in cards {
        writer
            .write_record(&[card.front.as_str(), card.back.as_str()])
            .await
            .map_err(csv_error(tmp))?;
    }
    writer.flush().await.map_err(io_error(tmp))?;
    Ok(())
}

/// Write `cards` to `path`, returning how many new rows were written.
///
/// Output goes to a sibling `.tmp` file that is renamed over `path`, so a
/// failed run leaves the previous deck intact. Nothing is touched when
/// `cards` is empty.
pub async fn write_cards(path: &Path, cards: &[Card], mode: WriteMode) -> Result<usize, OutputError> {
    if cards.is_empty() {
        crate::info!("No new cards, leaving {:?} untouched", path);
        return Ok(0);
    }

    let existing = match mode {
        WriteMode::Full => Vec::new(),
        WriteMode::Incremental => read_existing_rows(path).await?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(io_error(parent))?;
    }

    let tmp = temp_path(path);
    let replaced = match write_rows(&tmp, &existing, cards).await {
        Ok(()) => tokio::fs::rename(&tmp, path).await.map_err(io_error(path)),
        Err(e) => Err(e),
    };
    if let Err(e) = replaced {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            crate::debug!("Could not remove {:?}: {}", tmp, cleanup);
        }
        return Err(e);
    }

    crate::info!(
        "Wrote {} cards to {:?} ({} kept from before)",
        cards.len(),
        path,
        existing.len()
    );
    Ok(cards.len())
}

#[cfg(test)]
#[path = "deck_test.rs"]
mod tests;
