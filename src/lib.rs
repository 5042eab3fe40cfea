//! Resume quality scoring and feedback engine.
//!
//! Combines a fixed checklist of structural completeness rules with a
//! semantic measurement of how closely the resume's bullet text aligns with
//! a curated professional vocabulary, producing a 0-100 "ATS" score and an
//! ordered list of human-readable suggestions.
//!
//! The engine is a pure library: it performs no I/O during scoring, never
//! mutates the record it is given, and is safe to share across threads. The
//! only external capability is an [`EmbeddingService`] supplied at
//! construction; without one the semantic contribution degrades to zero
//! rather than failing.
//!
//! ```
//! use resume_insight::{ResumeInsight, ResumeRecord};
//!
//! let engine = ResumeInsight::without_embeddings();
//! let record = ResumeRecord::default();
//! let feedback = engine.analyze(&record);
//! assert!(!feedback.is_empty());
//! assert_eq!(engine.ats_score(&record), 0);
//! ```

mod embedding;
mod error;
mod feedback;
mod keywords;
mod model;
mod rules;
mod scoring;
mod semantic;
mod vocabulary;

use std::sync::Arc;

use indexmap::IndexSet;

pub use embedding::{compute_cosine_similarity, EmbeddingService, WordVectorEmbedding};
pub use error::EngineError;
pub use keywords::KeywordExtractor;
pub use model::{
    Certification, CountryCode, Education, Experience, Project, ResumeRecord, SkillCategory,
};
pub use rules::ACTION_VERBS;
pub use scoring::{BulletLengthBlend, ContactWeights, ScoreRubric, SkillTiers};
pub use semantic::SemanticConfig;
pub use vocabulary::REFERENCE_VOCABULARY;

/// The scoring and feedback engine.
///
/// Construct once per process, share by reference; every operation takes
/// `&self` and is safe to call concurrently on different records.
pub struct ResumeInsight {
    embedding: Option<Arc<dyn EmbeddingService>>,
    extractor: KeywordExtractor,
    rubric: ScoreRubric,
}

impl ResumeInsight {
    /// An engine backed by the given embedding service.
    pub fn new(embedding: Arc<dyn EmbeddingService>) -> Self {
        Self {
            embedding: Some(embedding),
            extractor: KeywordExtractor::new(),
            rubric: ScoreRubric::default(),
        }
    }

    /// An engine with no embedding service; the semantic score is always
    /// 0.0 and the content-depth bucket contributes nothing.
    pub fn without_embeddings() -> Self {
        Self {
            embedding: None,
            extractor: KeywordExtractor::new(),
            rubric: ScoreRubric::default(),
        }
    }

    /// Replaces the reference rubric with a tuned one.
    pub fn with_rubric(mut self, rubric: ScoreRubric) -> Self {
        self.rubric = rubric;
        self
    }

    pub fn rubric(&self) -> &ScoreRubric {
        &self.rubric
    }

    /// Evaluates the record and returns ordered, human-readable feedback.
    /// The result is never empty.
    pub fn analyze(&self, resume: &ResumeRecord) -> Vec<String> {
        let fragments = rules::evaluate(resume);
        let score = self.ats_score(resume);
        feedback::compose(fragments, score)
    }

    /// The composite 0-100 quality score.
    pub fn ats_score(&self, resume: &ResumeRecord) -> u32 {
        let bullet_text = resume.all_bullets().collect::<Vec<_>>().join(" ");
        let semantic = self.semantic_score(&bullet_text);
        scoring::ats_score(resume, &self.rubric, semantic)
    }

    /// Semantic alignment of `text` with the professional vocabulary, in
    /// [0.0, 1.0]. Exposed for tuning; [`ats_score`](Self::ats_score) uses
    /// it over the concatenated bullet text.
    pub fn semantic_score(&self, text: &str) -> f32 {
        semantic::semantic_score(
            self.embedding.as_deref(),
            &self.extractor,
            &self.rubric.semantic,
            text,
        )
    }

    /// Significant keyword stems of `text`, deduplicated, in order of first
    /// appearance.
    pub fn extract_keywords(&self, text: &str) -> IndexSet<String> {
        self.extractor.extract(text)
    }
}
