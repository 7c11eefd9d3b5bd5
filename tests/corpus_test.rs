//! Corpus reading and assembly tests

use polarity::{
    config::Config,
    corpus::{self, Record},
    progress::ProgressReport,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Materialize a minimal corpus tree under `base`
fn write_corpus(base: &Path, neg: &[&str], pos: &[&str]) {
    for (category, texts) in [("neg", neg), ("pos", pos)] {
        let dir = base
            .join("review_polarity")
            .join("txt_sentoken")
            .join(category);
        fs::create_dir_all(&dir).expect("Failed to create category dir");
        for (idx, text) in texts.iter().enumerate() {
            fs::write(dir.join(format!("cv{idx:03}.txt")), text).expect("Failed to write review");
        }
    }
}

#[tokio::test]
async fn reader_returns_one_string_per_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let contents = ["first review", "second review", "third review"];
    for (idx, text) in contents.iter().enumerate() {
        fs::write(dir.path().join(format!("{idx}.txt")), text).expect("Failed to write file");
    }

    let mut texts = corpus::read_text_files(dir.path())
        .await
        .expect("Failed to read text files");

    // Listing order is unconstrained, content is not
    texts.sort();
    assert_eq!(texts, contents);
}

#[tokio::test]
async fn reader_fails_on_a_subdirectory() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("nested")).expect("Failed to create subdirectory");

    assert!(corpus::read_text_files(dir.path()).await.is_err());
}

#[tokio::test]
async fn dataset_keeps_raw_text_and_maps_labels() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_corpus(dir.path(), &["bad movie"], &["great film"]);
    let config = Config::new(dir.path().to_path_buf(), true);

    let dataset = corpus::prepare_dataset(&config)
        .await
        .expect("Failed to prepare dataset");

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.texts(), ["bad movie", "great film"]);
    assert_eq!(dataset.labels(), [0, 1]);
}

#[tokio::test]
async fn corpus_labels_follow_the_category_not_the_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_corpus(
        dir.path(),
        &["a dull mess .", "so bad"],
        &["a great film !"],
    );
    let config = Config::new(dir.path().to_path_buf(), false);
    let report = ProgressReport::new();

    let corpus = corpus::prepare_corpus(&config, &report)
        .await
        .expect("Failed to prepare corpus");

    assert_eq!(corpus.len(), 3);
    assert_eq!(
        corpus.iter().map(|(label, _)| *label).collect::<Vec<_>>(),
        [0, 0, 1]
    );
    // Punctuation never survives cleaning, even with stopwords kept
    for (_, tokens) in &corpus {
        assert!(tokens.iter().all(|token| &**token != "." && &**token != "!"));
    }
}

#[tokio::test]
async fn stopword_removal_honors_the_configuration() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_corpus(dir.path(), &["the movie was dull"], &[]);

    let report = ProgressReport::new();
    let keep = Config::new(dir.path().to_path_buf(), false);
    let kept = corpus::prepare_corpus(&keep, &report)
        .await
        .expect("Failed to prepare corpus");
    assert_eq!(kept[0].1.len(), 4);

    let strip = Config::new(dir.path().to_path_buf(), true);
    let stripped = corpus::prepare_corpus(&strip, &report)
        .await
        .expect("Failed to prepare corpus");
    let words = stripped[0].1.iter().map(|t| &**t).collect::<Vec<_>>();
    assert_eq!(words, ["movie", "dull"]);
}

#[tokio::test]
async fn saved_dataset_round_trips_through_json_lines() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_corpus(dir.path(), &["bad movie"], &["great film"]);
    let config = Config::new(dir.path().to_path_buf(), true);
    let dataset = corpus::prepare_dataset(&config)
        .await
        .expect("Failed to prepare dataset");

    let out = dir.path().join("dataset.jsonl");
    dataset.save(&out).await.expect("Failed to save dataset");

    let saved = fs::read_to_string(&out).expect("Failed to read saved dataset");
    let records = saved
        .lines()
        .map(|line| serde_json::from_str::<Record>(line).expect("Failed to parse a record"))
        .collect::<Vec<_>>();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text, "bad movie");
    assert_eq!(records[0].label, 0);
    assert_eq!(records[1].text, "great film");
    assert_eq!(records[1].label, 1);
}
