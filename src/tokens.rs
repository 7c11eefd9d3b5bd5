//! Tokenization and light cleaning of review texts

use crate::Token;
use std::{collections::HashSet, sync::OnceLock};
use unicode_segmentation::UnicodeSegmentation;

/// Split a review text into tokens
///
/// Tokens are unicode word bounds with whitespace dropped, so punctuation
/// marks come out as standalone tokens and can be stripped by [`clean`].
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bounds()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Token::from)
        .collect()
}

/// Remove tokens that belong to the fixed English stopword list
pub fn remove_stopwords(tokens: Vec<Token>) -> Vec<Token> {
    let ignore = english_stopwords();
    tokens
        .into_iter()
        .filter(|token| !ignore.contains(&**token))
        .collect()
}

/// Remove tokens that are exactly one ASCII punctuation character
pub fn remove_punctuation(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| {
            let mut chars = token.chars();
            !matches!(
                (chars.next(), chars.next()),
                (Some(c), None) if c.is_ascii_punctuation()
            )
        })
        .collect()
}

/// Clean a token sequence
///
/// Stopword removal (if requested) happens before punctuation removal;
/// surviving tokens keep their original relative order.
pub fn clean(tokens: Vec<Token>, remove_sw: bool) -> Vec<Token> {
    let tokens = if remove_sw {
        remove_stopwords(tokens)
    } else {
        tokens
    };
    remove_punctuation(tokens)
}

/// Fixed English stopword set
fn english_stopwords() -> &'static HashSet<String> {
    static LAZY: OnceLock<HashSet<String>> = OnceLock::new();
    LAZY.get_or_init(|| {
        stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect()
    })
}
