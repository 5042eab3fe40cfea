use indexmap::IndexSet;
use rust_stemmers::{Algorithm, Stemmer};

/// Minimum stem length for a token to count as a significant keyword.
const MIN_KEYWORD_LEN: usize = 4;

/// Turns free text into a deduplicated set of significant keyword stems.
///
/// Wraps a Snowball English stemmer; construct once and reuse.
pub struct KeywordExtractor {
    stemmer: Stemmer,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Extracts lowercase keyword stems longer than 3 characters from `text`.
    ///
    /// The result is a set, deduplicated on the stem, but it preserves the
    /// order of first appearance in `text`. That order is what makes the
    /// semantic scorer's bounded keyword subset deterministic, so it is part
    /// of this function's contract.
    ///
    /// Empty or whitespace-only input yields an empty set; never fails.
    pub fn extract(&self, text: &str) -> IndexSet<String> {
        let mut keywords = IndexSet::new();
        for token in text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            let stem = self.stemmer.stem(&word).into_owned();
            if stem.len() >= MIN_KEYWORD_LEN {
                keywords.insert(stem);
            }
        }
        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
