// Tests for the stardict dictionary backend

use super::*;
use crate::dictionary::{InflectionKind, LemmaResolver};
use crate::test_support::{stardict_fixture, StardictRow};
use tempfile::TempDir;

async fn setup() -> (StardictDictionary, TempDir) {
    let (path, temp) = stardict_fixture(&[
        StardictRow {
            word: "run",
            phonetic: Some("rʌn"),
            translation: Some("v. 跑"),
            definition: Some("v. move fast by using one's feet"),
            pos: Some("v:70/n:30"),
            collins: 5,
            oxford: 1,
            tag: Some("zk gk"),
            bnc: 85,
            frq: 0,
            exchange: Some("p:ran/d:run/i:running/3:runs/s:runs"),
            detail: None,
        },
        StardictRow::bare("running", Some("0:run/1:i")),
        StardictRow::bare("e-mail", None),
    ])
    .await;
    let dict = StardictDictionary::open(&path).await.unwrap();
    (dict, temp)
}

#[tokio::test]
async fn test_find_exact_maps_all_columns() {
    let (dict, _temp) = setup().await;
    let record = dict.find_exact("RUN").await.unwrap().unwrap();

    assert_eq!(record.headword, "run");
    assert_eq!(record.phonetic.as_deref(), Some("rʌn"));
    assert_eq!(record.translation.as_deref(), Some("v. 跑"));
    assert_eq!(record.part_of_speech.as_deref(), Some("v:70/n:30"));
    assert_eq!(record.frequency_tags.collins_stars, Some(5));
    assert!(record.frequency_tags.is_oxford_core);
    assert_eq!(record.frequency_tags.bnc_rank, Some(85));
    assert_eq!(record.frequency_tags.freq_rank, None);
    assert_eq!(record.frequency_tags.tag.as_deref(), Some("zk gk"));
    assert_eq!(record.inflections.get(InflectionKind::Past), ["ran"]);
    assert!(record.note.is_none());
}

#[tokio::test]
async fn test_find_exact_miss() {
    let (dict, _temp) = setup().await;
    assert!(dict.find_exact("xyzzyq").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_normalized_uses_sw_column() {
    let (dict, _temp) = setup().await;
    let record = dict.find_normalized("email").await.unwrap().unwrap();
    assert_eq!(record.headword, "e-mail");
}

#[tokio::test]
async fn test_resolver_over_stardict() {
    let (dict, _temp) = setup().await;
    let mut resolver = LemmaResolver::new(dict);

    let record = resolver.resolve("Running").await.unwrap().unwrap();
    assert_eq!(record.inflections.root(), Some("run"));

    let record = resolver.resolve("E mail").await.unwrap().unwrap();
    assert_eq!(record.headword, "e-mail");
}

#[tokio::test]
async fn test_open_rejects_non_dictionary() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vocab.db");
    let client = TursoClient::create(&path).await.unwrap();
    client.execute("CREATE TABLE WORDS (id TEXT)", ()).await.unwrap();
    drop(client);

    let result = StardictDictionary::open(&path).await;
    assert!(matches!(result, Err(TursoError::Schema(_))));
}

#[tokio::test]
async fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = StardictDictionary::open(temp.path().join("stardict.db")).await;
    assert!(matches!(result, Err(TursoError::MissingSource(_))));
}

#[test]
fn test_positive_and_text_helpers() {
    assert_eq!(positive(Value::Integer(0)), None);
    assert_eq!(positive(Value::Null), None);
    assert_eq!(positive(Value::Text(" 3 ".into())), Some(3));
    assert_eq!(positive(Value::Text("n/a".into())), None);
    assert_eq!(text(Value::Text("  ".into())), None);
    assert_eq!(text(Value::Null), None);
}
