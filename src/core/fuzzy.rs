//! Fuzzy Candidate Matching
//!
//! Scores a token against an ordered candidate set and returns the
//! best-scoring candidate. The similarity metric is a pluggable capability
//! so the concrete algorithm can be swapped without touching callers.

/// Similarity capability: score two strings in [0, 100], higher is closer.
///
/// Implementations must be deterministic for a fixed input pair.
#[cfg_attr(test, mockall::automock)]
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Default scorer: normalized Levenshtein similarity scaled to [0, 100].
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8
    }
}

/// Best-scoring candidate for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Canonical candidate key.
    pub key: String,
    /// Similarity score in [0, 100].
    pub score: u8,
}

/// Matcher over an injected similarity scorer.
pub struct FuzzyMatcher {
    scorer: Box<dyn SimilarityScorer>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(Box::new(LevenshteinScorer))
    }
}

impl FuzzyMatcher {
    pub fn new(scorer: Box<dyn SimilarityScorer>) -> Self {
        Self { scorer }
    }

    /// Return the highest-scoring candidate, or `None` for an empty set.
    ///
    /// Ties break to the candidate earliest in the supplied ordering.
    pub fn best_match(&self, token: &str, candidates: &[String]) -> Option<MatchResult> {
        let mut best: Option<MatchResult> = None;

        for candidate in candidates {
            let score = self.scorer.score(token, candidate);
            match &best {
                Some(current) if score <= current.score => {}
                _ => {
                    best = Some(MatchResult {
                        key: candidate.clone(),
                        score,
                    });
                }
            }
        }

        best
    }
}
