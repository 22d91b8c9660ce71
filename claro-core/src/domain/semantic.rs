//! Optional semantic tie-break: embedding similarity between the text before
//! a candidate boundary and the words after it.
//!
//! The scorer is an external collaborator behind a trait; the engine computes
//! cosine similarity itself and treats any scorer failure as "no split".

use thiserror::Error;
use tracing::warn;

/// Failure reported by an embedding backend.
#[derive(Debug, Error)]
#[error("semantic scorer failed: {0}")]
pub struct ScorerError(pub String);

/// An external sentence-embedding model.
///
/// Implementations must be pure and synchronous from the engine's point of
/// view; timeouts and cancellation belong to the caller.
pub trait SemanticScorer: Send + Sync {
    /// Embed each text into a fixed-dimension vector.
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, ScorerError>;
}

/// Cosine similarity of two embedding vectors.
pub(crate) fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Similarity of two texts, or `None` when the scorer fails or returns an
/// unexpected shape.
pub(crate) fn similarity(scorer: &dyn SemanticScorer, left: &str, right: &str) -> Option<f32> {
    match scorer.embed(&[left, right]) {
        Ok(vectors) if vectors.len() == 2 => Some(cosine(&vectors[0], &vectors[1])),
        Ok(vectors) => {
            warn!(count = vectors.len(), "scorer returned unexpected embedding count");
            None
        }
        Err(err) => {
            warn!(%err, "semantic scorer failed; treating as no split");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(Vec<Vec<f32>>);

    impl SemanticScorer for FixedScorer {
        fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, ScorerError> {
            if self.0.len() != texts.len() {
                return Err(ScorerError("shape mismatch".into()));
            }
            Ok(self.0.clone())
        }
    }

    struct FailingScorer;

    impl SemanticScorer for FailingScorer {
        fn embed(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, ScorerError> {
            Err(ScorerError("backend unavailable".into()))
        }
    }

    #[test]
    fn cosine_basics() {
        assert!((cosine(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn failures_answer_none() {
        assert!(similarity(&FailingScorer, "a", "b").is_none());
        let short = FixedScorer(vec![vec![1.0]]);
        assert!(similarity(&short, "a", "b").is_none());
    }

    #[test]
    fn similarity_uses_both_vectors() {
        let scorer = FixedScorer(vec![vec![1.0, 0.0], vec![0.6, 0.8]]);
        let sim = similarity(&scorer, "a", "b").unwrap();
        assert!((sim - 0.6).abs() < 1e-6);
    }
}
