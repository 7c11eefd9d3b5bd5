//! Processing pipeline configuration
//!
//! The original corpus scripts kept their URL, paths and category list as
//! ambient module globals. Here they are digested into an explicit [`Config`]
//! that is built once from CLI arguments and handed to every pipeline stage.

use crate::Label;
use std::{path::PathBuf, sync::Arc};

/// Where the corpus archive is downloaded from
pub const CORPUS_URL: &str =
    "http://www.cs.cornell.edu/people/pabo/movie-review-data/review_polarity.tar.gz";

/// Top-level directory created by extracting the archive
///
/// Its presence on disk doubles as the "already downloaded" marker: if it
/// exists, the content is trusted and no network access happens.
pub const MARKER_DIR: &str = "review_polarity";

/// Directory inside the extracted tree that holds one subdirectory per category
pub const SENTOKEN_DIR: &str = "txt_sentoken";

/// Corpus categories and their labels, in processing order
pub const CATEGORIES: [(&str, Label); 2] = [("neg", 0), ("pos", 1)];

/// Final process configuration
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// URL of the corpus archive
    pub corpus_url: Box<str>,

    /// Base directory under which the corpus tree is materialized
    pub base_dir: PathBuf,

    /// Truth that stopwords should be removed during token cleaning
    pub remove_stopwords: bool,
}
//
impl Config {
    /// Determine process configuration from digested CLI arguments
    pub fn new(base_dir: PathBuf, remove_stopwords: bool) -> Arc<Self> {
        Arc::new(Self {
            corpus_url: CORPUS_URL.into(),
            base_dir,
            remove_stopwords,
        })
    }

    /// Directory whose presence marks the corpus as downloaded and extracted
    pub fn marker_dir(&self) -> PathBuf {
        self.base_dir.join(MARKER_DIR)
    }

    /// Root of the per-category text file tree
    pub fn corpus_root(&self) -> PathBuf {
        self.marker_dir().join(SENTOKEN_DIR)
    }

    /// Text file directory of one corpus category
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.corpus_root().join(category)
    }

    /// Last path segment of the corpus URL, e.g. "review_polarity.tar.gz"
    pub fn archive_name(&self) -> &str {
        self.corpus_url
            .rsplit('/')
            .next()
            .expect("rsplit always yields at least one segment")
    }
}
