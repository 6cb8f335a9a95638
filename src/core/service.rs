//! Search Request Orchestration
//!
//! The explicit per-process context for search: bundles the storage handle,
//! taxonomy registry and pipeline stages, and exposes the entry point that
//! runs one request end-to-end from extraction through pagination.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::extract::{ParameterExtractor, ParameterSet};
use super::format::{AssetResolver, DisplayRecord, ResultFormatter, StaticAssetResolver};
use super::fuzzy::FuzzyMatcher;
use super::paginate::paginate;
use super::taxonomy::TaxonomyRegistry;
use super::tokenize::Tokenizer;
use crate::config::SearchConfig;
use crate::database::query::build_filter_query;
use crate::database::ExerciseStore;

/// User-visible indicator rendered when storage is unreachable.
const STORAGE_ERROR_MESSAGE: &str =
    "Exercise search is temporarily unavailable. Please try again.";

/// Result of one search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    /// The requested page of formatted records.
    pub exercises: Vec<DisplayRecord>,
    /// Total result count before pagination.
    pub total: usize,
    /// 1-indexed page number after clamping.
    pub page: u32,
    /// Extracted filter, echoed for display.
    pub filter: ParameterSet,
    /// Set when storage failed; the result set is empty in that case.
    pub error: Option<String>,
}

impl SearchResponse {
    fn empty(page: u32) -> Self {
        Self {
            exercises: Vec::new(),
            total: 0,
            page,
            filter: ParameterSet::default(),
            error: None,
        }
    }

    fn unavailable(page: u32, filter: ParameterSet) -> Self {
        Self {
            exercises: Vec::new(),
            total: 0,
            page,
            filter,
            error: Some(STORAGE_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Search context shared across requests.
pub struct SearchService {
    store: Arc<dyn ExerciseStore>,
    tokenizer: Tokenizer,
    extractor: ParameterExtractor,
    formatter: ResultFormatter,
    table: String,
    results_per_page: usize,
}

impl SearchService {
    /// Create a service with the default scorer and static asset resolver.
    pub fn new(
        store: Arc<dyn ExerciseStore>,
        registry: Arc<TaxonomyRegistry>,
        config: &SearchConfig,
        table: impl Into<String>,
    ) -> Self {
        let assets = Box::new(StaticAssetResolver::new(config.asset_base.clone()));
        Self::from_components(store, registry, FuzzyMatcher::default(), assets, config, table)
    }

    /// Create a service with explicit matcher and asset resolver.
    pub fn from_components(
        store: Arc<dyn ExerciseStore>,
        registry: Arc<TaxonomyRegistry>,
        matcher: FuzzyMatcher,
        assets: Box<dyn AssetResolver>,
        config: &SearchConfig,
        table: impl Into<String>,
    ) -> Self {
        Self {
            store,
            tokenizer: Tokenizer::new(),
            extractor: ParameterExtractor::new(registry, matcher, config.max_query_tokens),
            formatter: ResultFormatter::new(assets),
            table: table.into(),
            results_per_page: config.results_per_page,
        }
    }

    /// Run one search request.
    ///
    /// An absent or blank query yields an empty result set with no filter
    /// fields set, without touching storage. A storage failure yields an
    /// empty page carrying a user-visible error indicator, never an error.
    pub async fn search(&self, raw_query: Option<&str>, page: u32) -> SearchResponse {
        let page = page.max(1);

        let Some(query) = raw_query.map(str::trim).filter(|q| !q.is_empty()) else {
            return SearchResponse::empty(page);
        };

        let filter = self.extractor.extract(self.tokenizer.tokenize(query));
        debug!(?filter, "Extracted query filter");

        let filter_query = build_filter_query(&self.table, &filter);
        let rows = match self.store.fetch_exercises(&filter_query).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Exercise search failed");
                return SearchResponse::unavailable(page, filter);
            }
        };

        let formatted = self.formatter.format_rows(&rows);
        let result_page = paginate(formatted, page, self.results_per_page);

        SearchResponse {
            exercises: result_page.items,
            total: result_page.total,
            page: result_page.number,
            filter,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::ExerciseRow;
    use crate::database::query::FilterQuery;
    use crate::database::{StoreError, StoreResult};
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl ExerciseStore for FailingStore {
        async fn fetch_exercises(&self, _: &FilterQuery) -> StoreResult<Vec<ExerciseRow>> {
            Err(StoreError::unavailable("connection refused"))
        }
    }

    struct PanickingStore;

    #[async_trait]
    impl ExerciseStore for PanickingStore {
        async fn fetch_exercises(&self, _: &FilterQuery) -> StoreResult<Vec<ExerciseRow>> {
            panic!("storage must not be consulted for a blank query");
        }
    }

    fn service(store: Arc<dyn ExerciseStore>) -> SearchService {
        SearchService::new(
            store,
            Arc::new(TaxonomyRegistry::new()),
            &SearchConfig::default(),
            "exercises",
        )
    }

    #[tokio::test]
    async fn test_blank_query_skips_storage() {
        let service = service(Arc::new(PanickingStore));
        for query in [None, Some(""), Some("   ")] {
            let response = service.search(query, 1).await;
            assert!(response.exercises.is_empty());
            assert_eq!(response.total, 0);
            assert!(response.filter.is_empty());
            assert!(response.error.is_none());
        }
    }

    #[tokio::test]
    async fn test_storage_failure_renders_error_indicator() {
        let service = service(Arc::new(FailingStore));
        let response = service.search(Some("dumbbell chest"), 1).await;

        assert!(response.exercises.is_empty());
        assert_eq!(response.total, 0);
        assert!(response.error.is_some());
        // The extracted filter still echoes back for display
        assert_eq!(response.filter.equipment.as_deref(), Some("dumbbell"));
    }

    #[tokio::test]
    async fn test_page_clamped_to_minimum() {
        let service = service(Arc::new(PanickingStore));
        let response = service.search(None, 0).await;
        assert_eq!(response.page, 1);
    }
}
