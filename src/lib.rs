//! Acquisition and preparation of the sentence-polarity movie review corpus
//! (Pang/Lee, ACL 2004), whose general documentation you can find at
//! <http://www.cs.cornell.edu/people/pabo/movie-review-data/>, along with a
//! small availability check for the numerical runtime backend.

pub mod config;
pub mod corpus;
pub mod device;
pub mod fetch;
pub mod progress;
pub mod tokens;

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Polarity label of a review
///
/// Only two values occur in the corpus: 0 for negative reviews, 1 for
/// positive ones. The mapping is fixed by [`config::CATEGORIES`].
pub type Label = u8;

/// Single token extracted from a review text
pub type Token = Box<str>;
