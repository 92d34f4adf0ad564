//! SQLite repository adapter.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use cotacao_types::{Bid, QuoteRepository, StoreError};

/// Hard deadline on the insert statement.
pub const INSERT_DEADLINE: Duration = Duration::from_millis(10);

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Quote Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite store implementation.
///
/// The connection is opened and closed inside every `save` call rather than
/// pooled: each request owns its handle for exactly as long as it needs it,
/// and a failure in one request cannot poison another. Concurrent writers are
/// serialized by SQLite's own file locking.
pub struct SqliteQuoteStore {
    url: String,
}

impl SqliteQuoteStore {
    /// Creates a store against the given database URL
    /// (e.g. `sqlite://cotacoes.db?mode=rwc`).
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            url: database_url.into(),
        }
    }

    /// Opens a fresh connection, creating the database file if absent.
    async fn open(&self) -> Result<SqliteConnection, StoreError> {
        // Ensure the on-disk target directory exists (no-op for in-memory).
        if let Some(path) = self.url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent)
                            .await
                            .map_err(|e| StoreError::Open(e.to_string()))?;
                    }
                }
            }
        }

        SqliteConnectOptions::from_str(&self.url)
            .map_err(|e| StoreError::Open(e.to_string()))?
            .create_if_missing(true)
            .connect()
            .await
            .map_err(|e| StoreError::Open(e.to_string()))
    }

    /// Idempotent schema setup, safe to run on every request.
    async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), StoreError> {
        let ddl = include_str!("../migrations/0001_create_exchange_rates.sql");
        sqlx::query(ddl)
            .execute(conn)
            .await
            .map_err(|e| StoreError::Schema(e.to_string()))?;
        Ok(())
    }

    /// Inserts one row, bounded by [`INSERT_DEADLINE`]. The primary key is
    /// assigned by SQLite.
    async fn insert(conn: &mut SqliteConnection, bid: &Bid) -> Result<(), StoreError> {
        let query = sqlx::query("INSERT INTO exchange_rates (exchange_rate) VALUES (?)")
            .bind(bid.as_str())
            .execute(conn);

        match tokio::time::timeout(INSERT_DEADLINE, query).await {
            Err(_) => Err(StoreError::Timeout),
            Ok(Err(e)) => Err(StoreError::Insert(e.to_string())),
            Ok(Ok(_)) => Ok(()),
        }
    }
}

#[async_trait]
impl QuoteRepository for SqliteQuoteStore {
    async fn save(&self, bid: &Bid) -> Result<(), StoreError> {
        let mut conn = self.open().await?;

        let result = async {
            Self::ensure_schema(&mut conn).await?;
            Self::insert(&mut conn, bid).await
        }
        .await;

        // Scoped acquisition: release the handle whether or not the write
        // landed. A close failure at this point cannot un-commit the row.
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "store connection close failed");
        }

        if result.is_ok() {
            tracing::debug!(bid = %bid, "quote observation persisted");
        }
        result
    }
}
