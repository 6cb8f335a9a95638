//! End-to-end pipeline tests over an in-memory storage collaborator.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::SearchConfig;
use crate::core::service::SearchService;
use crate::core::taxonomy::TaxonomyRegistry;
use crate::database::models::ExerciseRow;
use crate::database::query::FilterQuery;
use crate::database::{ExerciseStore, StoreResult};

/// In-memory store that records the queries it receives.
struct RecordingStore {
    rows: Vec<ExerciseRow>,
    queries: Mutex<Vec<FilterQuery>>,
}

impl RecordingStore {
    fn with_rows(rows: Vec<ExerciseRow>) -> Arc<Self> {
        Arc::new(Self {
            rows,
            queries: Mutex::new(Vec::new()),
        })
    }

    fn last_query(&self) -> FilterQuery {
        self.queries.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ExerciseStore for RecordingStore {
    async fn fetch_exercises(&self, query: &FilterQuery) -> StoreResult<Vec<ExerciseRow>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.rows.clone())
    }
}

fn exercise_row(name: &str) -> ExerciseRow {
    ExerciseRow::new(vec![
        Some("strength".to_string()),
        Some("beginner".to_string()),
        Some("dumbbell".to_string()),
        Some("[\"chest\"]".to_string()),
        Some(format!("[\"{name}/0.jpg\"]")),
        Some("[\"Set up.\", \"Lift.\"]".to_string()),
        Some("push".to_string()),
        Some("compound".to_string()),
        Some(name.to_string()),
    ])
}

fn service(store: Arc<RecordingStore>) -> SearchService {
    SearchService::new(
        store,
        Arc::new(TaxonomyRegistry::new()),
        &SearchConfig::default(),
        "exercises",
    )
}

#[tokio::test]
async fn query_flows_into_wildcard_bound_parameters() {
    let store = RecordingStore::with_rows(vec![exercise_row("incline press")]);
    let response = service(store.clone())
        .search(Some("dumbbell exercises for chest"), 1)
        .await;

    let query = store.last_query();
    assert_eq!(
        query.sql,
        "SELECT * FROM exercises WHERE equipment ILIKE $1 AND primary_muscles ILIKE $2"
    );
    assert_eq!(query.params, vec!["%dumbbell%", "%chest%"]);

    assert_eq!(response.total, 1);
    assert_eq!(response.exercises[0].name, "Incline Press");
    assert_eq!(response.exercises[0].instructions, "1. Set up.\n2. Lift.");
    assert_eq!(
        response.exercises[0].images,
        vec!["/static/images/incline press/0.jpg"]
    );
}

#[tokio::test]
async fn unfiltered_query_binds_nothing() {
    let store = RecordingStore::with_rows(Vec::new());
    let response = service(store.clone()).search(Some("anything zzz"), 1).await;

    let query = store.last_query();
    assert_eq!(query.sql, "SELECT * FROM exercises WHERE 1=1");
    assert!(query.params.is_empty());
    assert_eq!(response.total, 0);
}

#[tokio::test]
async fn results_paginate_after_formatting() {
    let rows: Vec<ExerciseRow> = (0..25).map(|i| exercise_row(&format!("ex {i}"))).collect();
    let store = RecordingStore::with_rows(rows);

    let response = service(store).search(Some("chest"), 3).await;

    assert_eq!(response.total, 25);
    assert_eq!(response.page, 3);
    assert_eq!(response.exercises.len(), 5);
    assert_eq!(response.exercises[0].name, "Ex 20");
}

#[tokio::test]
async fn filter_echoes_last_mention() {
    let store = RecordingStore::with_rows(Vec::new());
    let response = service(store)
        .search(Some("beginner expert barbell"), 1)
        .await;

    assert_eq!(response.filter.level.as_deref(), Some("expert"));
    assert_eq!(response.filter.equipment.as_deref(), Some("barbell"));
    assert!(response.filter.muscle.is_none());
}

#[tokio::test]
async fn malformed_row_fields_do_not_poison_the_page() {
    let mut columns = vec![None; 9];
    columns[0] = Some("strength".to_string());
    columns[4] = Some("[\"ok/0.jpg\"]".to_string());
    columns[5] = Some("not json at all".to_string());
    columns[8] = Some("broken row".to_string());
    let store = RecordingStore::with_rows(vec![ExerciseRow::new(columns)]);

    let response = service(store).search(Some("chest"), 1).await;

    assert_eq!(response.total, 1);
    assert_eq!(response.exercises[0].instructions, "");
    assert_eq!(response.exercises[0].images, vec!["/static/images/ok/0.jpg"]);
}
