//! Storage Access Layer
//!
//! The exercise catalog lives in an external Postgres table consumed through
//! a single query-execution primitive ([`ExerciseStore`]). The concrete
//! [`Database`] implementation wraps a sqlx connection pool so concurrent
//! requests never share a single connection, and applies a per-query
//! timeout.

pub mod exercises;
pub mod models;
pub mod query;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::StorageConfig;
use self::models::ExerciseRow;
use self::query::FilterQuery;

// ============================================================================
// Error Types
// ============================================================================

/// Unified error type for storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection or query failure.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Query deadline exceeded.
    #[error("Storage query timed out after {0:?}")]
    Timeout(Duration),

    /// Missing or invalid connection parameters.
    #[error("Storage configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Create an unavailable error with the given message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Storage Collaborator
// ============================================================================

/// Query-execution primitive over the exercise catalog.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Execute a filter query and return the matching rows in storage order.
    async fn fetch_exercises(&self, query: &FilterQuery) -> StoreResult<Vec<ExerciseRow>>;
}

/// Pooled Postgres handle.
///
/// Cheap to clone; safe for concurrent use across simultaneous requests.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
    query_timeout: Duration,
}

impl Database {
    /// Connect a pool using the configured connection parameters.
    ///
    /// `role` and `schema` are applied to every pooled connection;
    /// `warehouse` has no Postgres counterpart and is not consumed.
    pub async fn connect(config: &StorageConfig) -> StoreResult<Self> {
        let user = required(&config.user, "user")?;
        let account = required(&config.account, "account")?;
        let database = required(&config.database, "database")?;

        let (host, port) = split_endpoint(account)?;
        let mut options = PgConnectOptions::new()
            .host(host)
            .username(user)
            .database(database);
        if let Some(port) = port {
            options = options.port(port);
        }
        if let Some(password) = config.password.as_deref() {
            options = options.password(password);
        }

        let role = config.role.clone();
        let schema = config.schema.clone();
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .after_connect(move |conn, _meta| {
                let role = role.clone();
                let schema = schema.clone();
                Box::pin(async move {
                    if let Some(role) = role {
                        sqlx::query(&format!("SET ROLE {}", quote_ident(&role)))
                            .execute(&mut *conn)
                            .await?;
                    }
                    if let Some(schema) = schema {
                        sqlx::query(&format!("SET search_path TO {}", quote_ident(&schema)))
                            .execute(&mut *conn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .connect_with(options)
            .await?;

        if config.warehouse.is_some() {
            debug!("warehouse parameter is not used by the Postgres backend");
        }
        info!(
            max_connections = config.max_connections,
            "Connected storage pool"
        );

        Ok(Self {
            pool,
            query_timeout: config.query_timeout(),
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> StoreResult<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| StoreError::config(format!("missing connection parameter: {name}")))
}

fn split_endpoint(account: &str) -> StoreResult<(&str, Option<u16>)> {
    match account.split_once(':') {
        None => Ok((account, None)),
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|_| {
                StoreError::config(format!("invalid endpoint port in {account:?}"))
            })?;
            Ok((host, Some(port)))
        }
    }
}

/// Quote an identifier for interpolation into SET statements, which cannot
/// take bind parameters.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
