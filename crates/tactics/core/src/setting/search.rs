//! Case- and width-insensitive free-text search.
//!
//! Text is NFKC-normalized (folding full-width letters and digits to their
//! ASCII forms) and lowercased before substring matching.

use unicode_normalization::UnicodeNormalization;

/// Normalizes text for search comparison.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// A normalized search query.
///
/// Whitespace separates terms; every term must occur in at least one of the
/// searched fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        let terms = normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Matches against fields that were already passed through [`normalize`].
    pub fn matches<'a>(&self, fields: impl IntoIterator<Item = &'a str> + Clone) -> bool {
        self.terms.iter().all(|term| {
            fields
                .clone()
                .into_iter()
                .any(|field| field.contains(term.as_str()))
        })
    }
}
