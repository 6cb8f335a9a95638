//! Query Parameter Extraction
//!
//! Walks the token stream of a query and builds a structured filter over the
//! three taxonomies. Per token: stopwords are skipped, an exact match on an
//! "expert"-level alias sets the level directly, and otherwise the token is
//! fuzzy-matched independently against each taxonomy's canonical keys with a
//! per-domain acceptance threshold.
//!
//! Accepted matches overwrite the field's previous value, so the last
//! mention in token order wins, independently per field.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use super::fuzzy::FuzzyMatcher;
use super::taxonomy::{Domain, TaxonomyRegistry};

/// Minimum score to accept a level match.
pub const SCORE_THRESHOLD_LEVEL: u8 = 85;
/// Minimum score to accept an equipment match.
pub const SCORE_THRESHOLD_EQUIPMENT: u8 = 85;
/// Minimum score to accept a muscle match.
pub const SCORE_THRESHOLD_MUSCLE: u8 = 90;

/// Tokens excluded from matching consideration.
const STOP_WORDS: &[&str] = &["for", "and", "the", "in", "on", "to", "of"];

/// Structured filter extracted from a query: one optional canonical key per
/// taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    pub level: Option<String>,
    pub equipment: Option<String>,
    pub muscle: Option<String>,
}

impl ParameterSet {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.equipment.is_none() && self.muscle.is_none()
    }
}

/// Extracts a [`ParameterSet`] from a token stream.
pub struct ParameterExtractor {
    registry: Arc<TaxonomyRegistry>,
    matcher: FuzzyMatcher,
    stop_words: HashSet<String>,
    expert_aliases: HashSet<String>,
    max_tokens: usize,
}

impl ParameterExtractor {
    pub fn new(
        registry: Arc<TaxonomyRegistry>,
        matcher: FuzzyMatcher,
        max_tokens: usize,
    ) -> Self {
        let stop_words = STOP_WORDS.iter().map(|s| s.to_string()).collect();
        let expert_aliases = registry
            .aliases(Domain::Level, "expert")
            .unwrap_or_default()
            .iter()
            .cloned()
            .collect();

        Self {
            registry,
            matcher,
            stop_words,
            expert_aliases,
            max_tokens,
        }
    }

    /// Run extraction over the tokens of one query.
    ///
    /// Never fails: tokens without an accepted match leave the fields at
    /// their prior values. At most `max_tokens` tokens are examined.
    pub fn extract<I>(&self, tokens: I) -> ParameterSet
    where
        I: IntoIterator<Item = String>,
    {
        let mut params = ParameterSet::default();

        for token in tokens.into_iter().take(self.max_tokens) {
            if self.stop_words.contains(&token) {
                continue;
            }

            // Exact expert alias bypasses fuzzy scoring entirely
            if self.expert_aliases.contains(&token) {
                params.level = Some("expert".to_string());
                continue;
            }

            self.match_domain(&token, Domain::Level, SCORE_THRESHOLD_LEVEL, &mut params.level);
            self.match_domain(
                &token,
                Domain::Equipment,
                SCORE_THRESHOLD_EQUIPMENT,
                &mut params.equipment,
            );
            self.match_domain(
                &token,
                Domain::Muscle,
                SCORE_THRESHOLD_MUSCLE,
                &mut params.muscle,
            );
        }

        params
    }

    fn match_domain(
        &self,
        token: &str,
        domain: Domain,
        threshold: u8,
        field: &mut Option<String>,
    ) {
        let candidates = self.registry.alias_keys(domain);
        if let Some(result) = self.matcher.best_match(token, candidates) {
            if result.score >= threshold {
                *field = Some(result.key);
            }
        }
    }
}
