//! Semantic content scoring: how closely the resume's own wording aligns
//! with the reference vocabulary of professional terms.

use serde::{Deserialize, Serialize};

use crate::embedding::EmbeddingService;
use crate::keywords::KeywordExtractor;
use crate::vocabulary::REFERENCE_VOCABULARY;

/// Tunable knobs of the semantic scorer. Part of the score rubric so they
/// can be retuned from configuration without touching the algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    /// A keyword counts as a match when its best similarity against the
    /// vocabulary exceeds this.
    pub match_threshold: f32,
    /// Score contributed per matched keyword before capping at 1.0.
    pub per_match_weight: f32,
    /// Upper bound on keywords compared per call, taken in order of first
    /// appearance in the text.
    pub max_keywords: usize,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.4,
            per_match_weight: 0.06,
            max_keywords: 50,
        }
    }
}

/// Scores `text` in [0.0, 1.0] by counting keywords whose best vocabulary
/// similarity clears the match threshold.
///
/// Similarity is `1.0 - distance`. Per-match magnitudes are accumulated for
/// diagnostics only; the score depends on the match count alone. Total:
/// returns 0.0 for empty text and when no embedding service is available.
pub fn semantic_score(
    embedding: Option<&dyn EmbeddingService>,
    extractor: &KeywordExtractor,
    cfg: &SemanticConfig,
    text: &str,
) -> f32 {
    let Some(embedding) = embedding else {
        return 0.0;
    };

    let keywords = extractor.extract(text);
    if keywords.is_empty() {
        return 0.0;
    }

    let mut match_count = 0usize;
    let mut matched_weight = 0.0f32;

    for word in keywords.iter().take(cfg.max_keywords) {
        let max_similarity = REFERENCE_VOCABULARY
            .iter()
            .map(|term| 1.0 - embedding.distance(word, term))
            .fold(0.0, f32::max);

        if max_similarity > cfg.match_threshold {
            match_count += 1;
            matched_weight += max_similarity;
        }
    }

    tracing::debug!(
        keywords = keywords.len(),
        match_count,
        matched_weight,
        "semantic keyword matches"
    );

    (match_count as f32 * cfg.per_match_weight).min(1.0)
}
