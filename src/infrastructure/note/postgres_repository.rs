//! PostgreSQL note repository implementation

use std::time::Duration;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Postgres, Row};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::domain::note::{ListParams, Note, NoteInput, NoteRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of NoteRepository
///
/// Every operation checks a connection out of the pool for its own
/// duration. The connection goes back to the pool when the guard drops,
/// whether the operation succeeded or not.
#[derive(Debug, Clone)]
pub struct PostgresNoteRepository {
    pool: PgPool,
}

impl PostgresNoteRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool sized from configuration
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(url)
            .await
            .map_err(|e| {
                DomainError::unavailable(format!("Failed to connect to PostgreSQL: {}", e))
            })?;

        info!(
            max_connections = config.max_connections,
            "PostgreSQL connection pool established"
        );

        Ok(Self::new(pool))
    }

    /// Create the notes table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                done BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create notes table: {}", e)))?;

        Ok(())
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>, DomainError> {
        self.pool.acquire().await.map_err(|e| {
            DomainError::unavailable(format!("Failed to acquire database connection: {}", e))
        })
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn list(&self, params: ListParams) -> Result<Vec<Note>, DomainError> {
        let mut conn = self.acquire().await?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, description, done
            FROM notes
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.skip())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list notes: {}", e)))?;

        let mut notes = Vec::with_capacity(rows.len());

        for row in rows {
            notes.push(row_to_note(&row)?);
        }

        Ok(notes)
    }

    async fn create(&self, input: NoteInput) -> Result<Note, DomainError> {
        let mut conn = self.acquire().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO notes (name, description, done)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, done
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.done)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create note: {}", e)))?;

        let note = row_to_note(&row)?;
        debug!(id = note.id(), "Inserted note");

        Ok(note)
    }

    async fn get(&self, id: i64) -> Result<Option<Note>, DomainError> {
        let mut conn = self.acquire().await?;

        let row = sqlx::query(
            r#"
            SELECT id, name, description, done
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get note: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_note(&row)?)),
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        let mut conn = self.acquire().await?;

        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| DomainError::unavailable(format!("Health query failed: {}", e)))?;

        check_health_result(value)
    }
}

fn check_health_result(value: i32) -> Result<(), DomainError> {
    if value != 1 {
        return Err(DomainError::unavailable(format!(
            "Health query returned unexpected value {}",
            value
        )));
    }

    Ok(())
}

fn row_to_note(row: &PgRow) -> Result<Note, DomainError> {
    let read_err = |e: sqlx::Error| DomainError::storage(format!("Invalid note row: {}", e));

    let id: i64 = row.try_get("id").map_err(read_err)?;
    let name: String = row.try_get("name").map_err(read_err)?;
    let description: String = row.try_get("description").map_err(read_err)?;
    let done: bool = row.try_get("done").map_err(read_err)?;

    Ok(Note::new(id, NoteInput::new(name, description, done)))
}
