//! Exercise Search Execution
//!
//! Binds a [`FilterQuery`] against the pooled connection and materializes
//! the result set into positional [`ExerciseRow`]s.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;
use tokio::time::timeout;
use tracing::debug;

use super::models::ExerciseRow;
use super::query::FilterQuery;
use super::{Database, ExerciseStore, StoreError, StoreResult};

#[async_trait]
impl ExerciseStore for Database {
    async fn fetch_exercises(&self, query: &FilterQuery) -> StoreResult<Vec<ExerciseRow>> {
        let mut prepared = sqlx::query(&query.sql);
        for param in &query.params {
            prepared = prepared.bind(param);
        }

        let rows = timeout(self.query_timeout(), prepared.fetch_all(self.pool()))
            .await
            .map_err(|_| StoreError::Timeout(self.query_timeout()))??;

        debug!(rows = rows.len(), "Fetched exercise rows");
        Ok(rows.iter().map(row_to_exercise).collect())
    }
}

/// Read every column as optional text, preserving storage order. Columns
/// that do not decode as text are treated as absent.
fn row_to_exercise(row: &PgRow) -> ExerciseRow {
    let columns = (0..row.len())
        .map(|i| row.try_get::<Option<String>, _>(i).unwrap_or(None))
        .collect();
    ExerciseRow::new(columns)
}
