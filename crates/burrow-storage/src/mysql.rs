use async_trait::async_trait;
use burrow_core::error::{Result, StorageError};
use burrow_core::{InsertOutcome, MappingReader, MappingStore, ShortCode, UrlMapping};
use jiff::Timestamp;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySqlPool, Row};
use tracing::{debug, trace};

/// Schema for the `short_urls` table.
pub const SHORT_URLS_DDL: &str = include_str!("../ddl/mysql/short_urls.sql");

/// MySQL implementation of the mapping store.
///
/// `short_url` carries a unique key, which is what makes
/// `insert_if_absent` atomic: the loser of a race gets a duplicate-key
/// error instead of a second row. Timestamps are stored as microseconds
/// since the Unix epoch.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Round-trips a trivial query to verify the backend is reachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Creates the `short_urls` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SHORT_URLS_DDL)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("short_urls schema ensured");
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn parse_timestamp(column: &str, micros: i64) -> Result<Timestamp> {
    Timestamp::from_microsecond(micros).map_err(|e| {
        StorageError::InvalidData(format!("invalid {column} timestamp '{micros}': {e}"))
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

const INSERT_SQL: &str = r#"
    INSERT INTO short_urls (short_url, original_url, created_at, updated_at)
    VALUES (?, ?, ?, ?)
"#;

impl MySqlStore {
    async fn execute_insert(&self, mapping: &UrlMapping) -> std::result::Result<(), sqlx::Error> {
        sqlx::query(INSERT_SQL)
            .bind(mapping.short_code.as_str())
            .bind(mapping.original_url.as_str())
            .bind(mapping.created_at.as_microsecond())
            .bind(mapping.updated_at.as_microsecond())
            .execute(&self.pool)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl MappingReader for MySqlStore {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
        trace!(code = %code, "querying short_urls");

        let row = sqlx::query(
            r#"
            SELECT original_url, created_at, updated_at
            FROM short_urls
            WHERE short_url = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let original_url: String = row.try_get("original_url").map_err(map_sqlx_error)?;
        let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;
        let updated_at: i64 = row.try_get("updated_at").map_err(map_sqlx_error)?;

        Ok(Some(UrlMapping {
            short_code: code.clone(),
            original_url,
            created_at: parse_timestamp("created_at", created_at)?,
            updated_at: parse_timestamp("updated_at", updated_at)?,
        }))
    }
}

#[async_trait]
impl MappingStore for MySqlStore {
    async fn insert(&self, mapping: UrlMapping) -> Result<()> {
        match self.execute_insert(&mapping).await {
            Ok(()) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(mapping.short_code.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome> {
        match self.execute_insert(&mapping).await {
            Ok(()) => Ok(InsertOutcome::Inserted),
            Err(err) if is_unique_violation(&err) => {
                trace!(code = %mapping.short_code, "unique key rejected insert");
                Ok(InsertOutcome::Occupied)
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_map_to_availability() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StorageError::Timeout(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StorageError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StorageError::InvalidData(_)
        ));
    }

    #[test]
    fn timestamps_round_trip_through_microseconds() {
        let now = Timestamp::now();
        let micros = now.as_microsecond();
        let parsed = parse_timestamp("created_at", micros).unwrap();
        assert_eq!(parsed.as_microsecond(), now.as_microsecond());
    }

    #[test]
    fn ddl_declares_unique_short_url() {
        assert!(SHORT_URLS_DDL.contains("UNIQUE KEY"));
        assert!(SHORT_URLS_DDL.contains("short_url"));
    }
}
