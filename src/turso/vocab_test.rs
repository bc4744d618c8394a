// Tests for Kindle vocabulary extraction
// Test cases:
// - Items come back most recent first with their usages grouped
// - lang prefix stripped, blank usages dropped, at most three kept
// - Words without lookups still appear
// - limit caps the number of items
// - Missing file / wrong schema are fatal

use super::*;
use crate::test_support::{vocab_fixture, LookupRow, WordRow};
use tempfile::TempDir;

async fn setup() -> (KindleVocabulary, TempDir) {
    let (path, temp) = vocab_fixture(
        &[
            WordRow { id: "en:running", word: "running", stem: Some("run"), timestamp: 300 },
            WordRow { id: "en:serendipity", word: "serendipity", stem: None, timestamp: 200 },
            WordRow { id: "en:ephemeral", word: "en:ephemeral", stem: Some("ephemeral"), timestamp: 100 },
        ],
        &[
            LookupRow { word_key: "en:running", usage: "He was running fast.", timestamp: 30 },
            LookupRow { word_key: "en:running", usage: "Running late again.", timestamp: 20 },
            LookupRow { word_key: "en:running", usage: "   ", timestamp: 15 },
            LookupRow { word_key: "en:running", usage: "Third one.", timestamp: 10 },
            LookupRow { word_key: "en:running", usage: "Fourth one.", timestamp: 5 },
            LookupRow { word_key: "en:ephemeral", usage: "Fame is ephemeral.", timestamp: 1 },
        ],
    )
    .await;
    let source = KindleVocabulary::open(&path).await.unwrap();
    (source, temp)
}

#[tokio::test]
async fn test_fetch_items_orders_and_groups() {
    let (source, _temp) = setup().await;
    let items = source.fetch_items(None).await.unwrap();

    let surfaces: Vec<&str> = items.iter().map(|i| i.surface()).collect();
    assert_eq!(surfaces, vec!["running", "serendipity", "ephemeral"]);

    let running = &items[0];
    assert_eq!(running.hinted_stem(), Some("run"));
    assert_eq!(
        running.usages(),
        ["He was running fast.", "Running late again.", "Third one."]
    );
}

#[tokio::test]
async fn test_word_without_lookups_has_no_usages() {
    let (source, _temp) = setup().await;
    let items = source.fetch_items(None).await.unwrap();
    assert!(items[1].usages().is_empty());
    assert!(items[1].hinted_stem().is_none());
}

#[tokio::test]
async fn test_lang_prefix_stripped_from_word() {
    let (source, _temp) = setup().await;
    let items = source.fetch_items(None).await.unwrap();
    assert_eq!(items[2].surface(), "ephemeral");
    assert_eq!(items[2].first_usage(), Some("Fame is ephemeral."));
}

#[tokio::test]
async fn test_limit_caps_items() {
    let (source, _temp) = setup().await;
    let items = source.fetch_items(Some(2)).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].surface(), "serendipity");
}

#[tokio::test]
async fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = KindleVocabulary::open(temp.path().join("vocab.db")).await;
    assert!(matches!(result, Err(TursoError::MissingSource(_))));
}

#[tokio::test]
async fn test_open_wrong_schema() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vocab.db");
    TursoClient::create(&path)
        .await
        .unwrap()
        .execute("CREATE TABLE WORDS (id TEXT)", ())
        .await
        .unwrap();
    let result = KindleVocabulary::open(&path).await;
    assert!(matches!(result, Err(TursoError::Schema(_))));
}
