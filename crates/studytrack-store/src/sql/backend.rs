//! SQL mark store backend.

use async_trait::async_trait;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};

use studytrack_core::Marks;
use studytrack_core::db::{DatabaseType, SqlStoreConfig};

use crate::StoreError;
use crate::record::MarkEntry;
use crate::traits::MarkStore;

use super::queries;

/// SQL-backed mark store.
///
/// Supports PostgreSQL, MySQL, and SQLite through SQLx. The marks mapping is
/// persisted as a JSON text column; each row is one submission event.
pub struct SqlMarks {
    pool: AnyPool,
    db_type: DatabaseType,
}

impl SqlMarks {
    /// Connect to the database.
    pub async fn connect(config: SqlStoreConfig) -> Result<Self, StoreError> {
        // Install database drivers for the "any" pool
        sqlx::any::install_default_drivers();

        let db_type = DatabaseType::from_url(&config.database_url)
            .ok_or_else(|| StoreError::backend("unsupported database URL scheme"))?;

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool, db_type })
    }

    /// Wrap an existing pool (shared with other stores on the same database).
    pub fn from_pool(pool: AnyPool, db_type: DatabaseType) -> Self {
        Self { pool, db_type }
    }

    /// Create the marks table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let query = match self.db_type {
            DatabaseType::PostgreSQL => queries::CREATE_MARKS_TABLE_PG,
            DatabaseType::MySQL => queries::CREATE_MARKS_TABLE_MYSQL,
            DatabaseType::SQLite => queries::CREATE_MARKS_TABLE_SQLITE,
        };
        sqlx::query(query).execute(&self.pool).await?;
        Ok(())
    }

    /// Get the connection pool (for advanced usage).
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Get database type.
    pub fn database_type(&self) -> DatabaseType {
        self.db_type
    }

    fn parse_entry_row(row: &AnyRow) -> Result<MarkEntry, StoreError> {
        let marks_json: String = row.try_get("marks")?;
        Ok(MarkEntry {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            marks: serde_json::from_str(&marks_json)?,
        })
    }
}

#[async_trait]
impl MarkStore for SqlMarks {
    async fn insert(&self, username: &str, marks: &Marks) -> Result<MarkEntry, StoreError> {
        let entry = MarkEntry {
            id: uuid::Uuid::new_v4().simple().to_string(),
            username: username.to_owned(),
            marks: marks.clone(),
        };

        let query = match self.db_type {
            DatabaseType::PostgreSQL => queries::INSERT_MARKS_PG,
            DatabaseType::MySQL | DatabaseType::SQLite => queries::INSERT_MARKS_MYSQL,
        };

        sqlx::query(query)
            .bind(&entry.id)
            .bind(&entry.username)
            .bind(serde_json::to_string(&entry.marks)?)
            .execute(&self.pool)
            .await?;

        Ok(entry)
    }

    async fn update(&self, id: &str, username: &str, marks: &Marks) -> Result<(), StoreError> {
        let query = match self.db_type {
            DatabaseType::PostgreSQL => queries::UPDATE_MARKS_PG,
            DatabaseType::MySQL | DatabaseType::SQLite => queries::UPDATE_MARKS_MYSQL,
        };

        // A zero-row update is the silent no-op contract, not an error.
        sqlx::query(query)
            .bind(serde_json::to_string(marks)?)
            .bind(id)
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &str, username: &str) -> Result<bool, StoreError> {
        let query = match self.db_type {
            DatabaseType::PostgreSQL => queries::DELETE_MARKS_PG,
            DatabaseType::MySQL | DatabaseType::SQLite => queries::DELETE_MARKS_MYSQL,
        };

        let result = sqlx::query(query)
            .bind(id)
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, username: &str) -> Result<Vec<MarkEntry>, StoreError> {
        let query = match self.db_type {
            DatabaseType::PostgreSQL => queries::LIST_MARKS_PG,
            DatabaseType::MySQL | DatabaseType::SQLite => queries::LIST_MARKS_MYSQL,
        };

        let rows = sqlx::query(query)
            .bind(username)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::parse_entry_row).collect()
    }

    async fn latest(&self, username: &str) -> Result<Option<MarkEntry>, StoreError> {
        let query = match self.db_type {
            DatabaseType::PostgreSQL => queries::LATEST_MARKS_PG,
            DatabaseType::MySQL | DatabaseType::SQLite => queries::LATEST_MARKS_MYSQL,
        };

        let row = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(Self::parse_entry_row).transpose()
    }
}

// Debug implementation (don't leak connection details)
impl std::fmt::Debug for SqlMarks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlMarks")
            .field("db_type", &self.db_type)
            .finish_non_exhaustive()
    }
}
