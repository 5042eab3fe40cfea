//! Word-embedding boundary.
//!
//! The engine does not own an embedding model; it is handed a distance
//! oracle at construction time and treats it as an opaque capability. The
//! shipped [`WordVectorEmbedding`] backs that oracle with a plain word →
//! vector table so the hosting application can load any pretrained
//! word-vector dump it likes.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::EngineError;

/// Distance between words where two vectors point in opposite directions.
/// Also returned for out-of-vocabulary words, which can never match.
pub const MAX_DISTANCE: f32 = 2.0;

/// A semantic distance oracle over single words.
///
/// `distance` is non-negative and smaller means more related; the expected
/// range is 0.0 (identical) to about 2.0 (unrelated), matching
/// `1 - cosine_similarity` over unit vectors.
pub trait EmbeddingService: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> f32;
}

/// An [`EmbeddingService`] backed by an in-memory word-vector table.
pub struct WordVectorEmbedding {
    vectors: HashMap<String, Vec<f32>>,
}

impl WordVectorEmbedding {
    pub fn new(vectors: HashMap<String, Vec<f32>>) -> Self {
        Self { vectors }
    }

    /// Loads a `{"word": [f32, ...], ...}` JSON table. Keys are lowercased
    /// to match the lowercased keywords the extractor produces.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| EngineError::read(path, e))?;
        let table: HashMap<String, Vec<f32>> = serde_json::from_str(&raw)
            .map_err(|e| EngineError::json(path.display().to_string(), e))?;
        let vectors = table
            .into_iter()
            .map(|(word, vector)| (word.to_lowercase(), vector))
            .collect();
        Ok(Self::new(vectors))
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl EmbeddingService for WordVectorEmbedding {
    fn distance(&self, a: &str, b: &str) -> f32 {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(va), Some(vb)) => 1.0 - compute_cosine_similarity(va, vb),
            _ => MAX_DISTANCE,
        }
    }
}

pub fn compute_cosine_similarity(vec1: &[f32], vec2: &[f32]) -> f32 {
    let dot: f32 = vec1.iter().zip(vec2).map(|(a, b)| a * b).sum();
    let norm1: f32 = (vec1.iter().map(|x| x * x).sum::<f32>()).sqrt();
    let norm2: f32 = (vec2.iter().map(|x| x * x).sum::<f32>()).sqrt();
    dot / (norm1 * norm2).max(1e-10)
}
