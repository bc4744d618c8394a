// Reading back the display forms of an existing deck

use std::path::Path;
use std::sync::LazyLock;

use futures_util::StreamExt;
use regex::Regex;

use super::OutputError;
use crate::util::compile_pattern;

// First match wins, in this order.
static FORM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"<div class="word-display">(.*?)</div>"#,
        r#"word-title">(.*?)</div>"#,
        r"<strong>(.*?)</strong>",
    ]
    .into_iter()
    .filter_map(compile_pattern)
    .collect()
});

static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| compile_pattern(r"<[^>]+>"));
static LETTERS: LazyLock<Option<Regex>> = LazyLock::new(|| compile_pattern(r"[A-Za-z]+"));

const SHORT_TEXT: usize = 30;

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Pull the display form out of a first-column cell.
///
/// Recognized card markup is tried first. Otherwise tags are stripped and
/// short leftovers yield their first run of letters. The result is
/// lowercased; `None` means nothing usable was found.
pub fn extract_display_form(cell: &str) -> Option<String> {
    for pattern in FORM_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(cell) {
            let form = unescape_html(caps[1].trim());
            if !form.is_empty() {
                return Some(form.to_lowercase());
            }
        }
    }

    let stripped = match TAG.as_ref() {
        Some(tag) => tag.replace_all(cell, "").into_owned(),
        None => cell.to_string(),
    };
    let stripped = unescape_html(stripped.trim());
    if stripped.chars().count() < SHORT_TEXT {
        LETTERS
            .as_ref()
            .and_then(|re| re.find(&stripped))
            .map(|m| m.as_str().to_lowercase())
    } else {
        None
    }
}

/// Collect the display forms already present in the deck at `path`.
///
/// A missing file is an empty deck.
pub async fn read_prior_forms(path: &Path) -> Result<Vec<String>, OutputError> {
    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            crate::debug!("No existing deck at {:?}", path);
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(OutputError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut reader = csv_async::AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_reader(file);
    let mut records = reader.records();

    let mut forms = Vec::new();
    while let Some(record) = records.next().await {
        let record = record.map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(form) = record.get(0).and_then(extract_display_form) {
            forms.push(form);
        }
    }

    crate::info!("Found {} existing cards in {:?}", forms.len(), path);
    Ok(forms)
}

#[cfg(test)]
#[path = "prior_test.rs"]
mod tests;
