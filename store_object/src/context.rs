//! Request-scoped database context
//!
//! A `DbContext` pairs the connection pool with a change tracker. Repositories
//! read through the pool directly and stage their writes on the tracker;
//! `save_changes` flushes everything staged so far in one transaction.

use crate::errors::StoreError;
use crate::{DbPool, EntityId, SqlValue};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Bind an owned [`SqlValue`] onto any sqlx query builder.
macro_rules! bind_sql_value {
    ($query:expr, $value:expr) => {
        match $value {
            $crate::SqlValue::Integer(i) => $query.bind(i),
            $crate::SqlValue::Real(f) => $query.bind(f),
            $crate::SqlValue::Text(s) => $query.bind(s),
            $crate::SqlValue::Boolean(b) => $query.bind(b),
            $crate::SqlValue::Json(v) => $query.bind(v.to_string()),
            $crate::SqlValue::Null => $query.bind(Option::<String>::None),
        }
    };
}

pub(crate) use bind_sql_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// Insert with a caller-supplied identifier
    Insert,
    /// Insert letting the database assign the identifier
    InsertGeneratedKey,
    Update,
}

impl WriteKind {
    pub fn operation(&self) -> &'static str {
        match self {
            WriteKind::Insert | WriteKind::InsertGeneratedKey => "insert",
            WriteKind::Update => "update",
        }
    }
}

/// One pending statement with its owned parameters
#[derive(Debug, Clone, PartialEq)]
pub struct StagedWrite {
    pub table: &'static str,
    pub kind: WriteKind,
    pub sql: &'static str,
    pub params: Vec<SqlValue>,
}

/// Identifier assigned by the database to a staged insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedKey {
    pub table: &'static str,
    pub id: EntityId,
}

#[derive(Debug, Default)]
struct ChangeTracker {
    pending: Vec<StagedWrite>,
    generated: Vec<GeneratedKey>,
}

/// Connection pool handle plus change tracker for one request-scoped operation.
///
/// Clones share the tracker, so every repository built on the same context
/// takes part in the same unit of work.
#[derive(Clone)]
pub struct DbContext {
    pool: DbPool,
    tracker: Arc<Mutex<ChangeTracker>>,
}

impl std::fmt::Debug for DbContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbContext")
            .field("pool_size", &self.pool.size())
            .finish_non_exhaustive()
    }
}

impl DbContext {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            tracker: Arc::new(Mutex::new(ChangeTracker::default())),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn stage(&self, write: StagedWrite) {
        debug!(
            table = write.table,
            operation = write.kind.operation(),
            "Staging write"
        );
        crate::trace_log!("Staged SQL: {} with {} params", write.sql, write.params.len());
        self.tracker.lock().await.pending.push(write);
    }

    /// Number of writes waiting for `save_changes`
    pub async fn pending_changes(&self) -> usize {
        self.tracker.lock().await.pending.len()
    }

    pub async fn staged_writes(&self) -> Vec<StagedWrite> {
        self.tracker.lock().await.pending.clone()
    }

    pub async fn discard_changes(&self) {
        let mut tracker = self.tracker.lock().await;
        if !tracker.pending.is_empty() {
            debug!(count = tracker.pending.len(), "Discarding staged writes");
        }
        tracker.pending.clear();
    }

    /// Keys assigned by the database during successful flushes, in staging order
    pub async fn generated_keys(&self) -> Vec<GeneratedKey> {
        self.tracker.lock().await.generated.clone()
    }

    /// The most recent key assigned for `table`
    pub async fn last_generated_key(&self, table: &str) -> Option<EntityId> {
        self.tracker
            .lock()
            .await
            .generated
            .iter()
            .rev()
            .find(|key| key.table == table)
            .map(|key| key.id)
    }

    /// Flush every staged write in one transaction.
    ///
    /// Returns whether at least one row was affected. With nothing staged the
    /// database is not touched. On failure the transaction is rolled back and
    /// the staged writes are kept.
    pub async fn save_changes(&self) -> Result<bool, StoreError> {
        let mut tracker = self.tracker.lock().await;
        if tracker.pending.is_empty() {
            return Ok(false);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::database_operation("transaction", "begin", e))?;

        let mut rows_affected = 0u64;
        let mut generated = Vec::new();

        for write in &tracker.pending {
            crate::debug_log!("Executing {} on {}: {}", write.kind.operation(), write.table, write.sql);

            let mut query = sqlx::query(write.sql);
            for param in write.params.iter().cloned() {
                query = bind_sql_value!(query, param);
            }

            match query.execute(&mut *tx).await {
                Ok(result) => {
                    rows_affected += result.rows_affected();
                    if write.kind == WriteKind::InsertGeneratedKey {
                        generated.push(GeneratedKey {
                            table: write.table,
                            id: result.last_insert_rowid(),
                        });
                    }
                }
                Err(e) => {
                    warn!(
                        table = write.table,
                        operation = write.kind.operation(),
                        error = %e,
                        "Staged write failed, rolling back unit of work"
                    );
                    if let Err(rollback_err) = tx.rollback().await {
                        warn!(error = %rollback_err, "Rollback failed");
                    }
                    return Err(StoreError::database_operation(
                        write.table,
                        write.kind.operation(),
                        e,
                    ));
                }
            }
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::database_operation("transaction", "commit", e))?;

        info!(
            writes = tracker.pending.len(),
            rows_affected, "Committed unit of work"
        );
        tracker.pending.clear();
        tracker.generated.extend(generated);

        Ok(rows_affected > 0)
    }
}
