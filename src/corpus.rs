//! Reading and assembly of the labeled review corpus
//!
//! One file contains one text instance in the corpus. Every text file under a
//! category directory becomes exactly one record, in filesystem listing order.

use crate::{
    config::{Config, CATEGORIES},
    progress::ProgressReport,
    tokens, Label, Result, Token,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Read the content of every file in a directory, one string per file
///
/// No extension filtering and no encoding negotiation happen: a subdirectory
/// or a file that is not valid UTF-8 is an error, not a skip.
pub async fn read_text_files(path: &Path) -> Result<Vec<String>> {
    let mut dir = fs::read_dir(path)
        .await
        .with_context(|| format!("listing corpus files in {}", path.display()))?;
    let mut texts = Vec::new();
    while let Some(entry) = dir
        .next_entry()
        .await
        .context("walking a corpus directory")?
    {
        let fpath = entry.path();
        let text = fs::read_to_string(&fpath)
            .await
            .with_context(|| format!("reading corpus file {}", fpath.display()))?;
        texts.push(text);
    }
    Ok(texts)
}

/// Assemble the corpus as (label, cleaned tokens) pairs
///
/// Categories are processed in the fixed order of
/// [`CATEGORIES`](crate::config::CATEGORIES), i.e. negative reviews first.
/// Every text is tokenized and cleaned according to the configuration.
pub async fn prepare_corpus(
    config: &Config,
    report: &ProgressReport,
) -> Result<Vec<(Label, Vec<Token>)>> {
    let mut corpus = Vec::new();
    for (category, label) in CATEGORIES {
        let texts = read_text_files(&config.category_dir(category))
            .await
            .with_context(|| format!("collecting {category} reviews"))?;
        let steps = report.add_steps(format!("Tokenizing {category} reviews"), texts.len());
        for text in texts {
            let tokens = tokens::clean(tokens::tokenize(&text), config.remove_stopwords);
            corpus.push((label, tokens));
            steps.make_progress(1);
        }
        steps.finish();
    }
    Ok(corpus)
}

/// Single record of a [`Dataset`]
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Record {
    /// Raw review text
    pub text: String,

    /// Polarity label, 0 = negative, 1 = positive
    pub label: Label,
}

/// Tabular view of the corpus: parallel text and label columns, raw text kept
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Dataset {
    texts: Vec<String>,
    labels: Vec<Label>,
}
//
impl Dataset {
    /// Number of records
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Truth that the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Text column
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Label column
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Iterate over records, pairing up the two columns
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.texts
            .iter()
            .zip(&self.labels)
            .map(|(text, &label)| Record {
                text: text.clone(),
                label,
            })
    }

    /// Append all texts of one category with a uniform label
    fn extend(&mut self, texts: Vec<String>, label: Label) {
        self.labels.resize(self.labels.len() + texts.len(), label);
        self.texts.extend(texts);
    }

    /// Save the dataset as JSON lines, one record per line
    pub async fn save(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        for record in self.records() {
            let line =
                serde_json::to_string(&record).context("converting a dataset record to JSON")?;
            out.push_str(&line);
            out.push('\n');
        }
        fs::write(path, out)
            .await
            .with_context(|| format!("saving the dataset to {}", path.display()))?;
        Ok(())
    }
}

/// Collect the raw text files and build a tabular dataset from them
///
/// Unlike [`prepare_corpus`], texts are kept verbatim: no tokenization or
/// cleaning happens. The label mapping is the same, neg = 0 and pos = 1.
pub async fn prepare_dataset(config: &Config) -> Result<Dataset> {
    let mut dataset = Dataset::default();
    for (category, label) in CATEGORIES {
        log::info!("Processing {category} reviews");
        let texts = read_text_files(&config.category_dir(category))
            .await
            .with_context(|| format!("collecting {category} reviews"))?;
        dataset.extend(texts, label);
    }
    Ok(dataset)
}
