//! Item repository
//!
//! Works on a borrowed [`Session`], never on a pool, so every statement
//! of a request runs on the same connection:
//! - ensure_table: `CREATE TABLE IF NOT EXISTS`, auto-committed by MySQL
//! - create: INSERT in its own transaction, then `LAST_INSERT_ID()`
//! - list: ordered by id, decoded into [`Item`]

use sqlx::FromRow;

use crate::db::Session;
use crate::models::ItemName;

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The INSERT went through but the connection reported no generated id
    #[error("insert failed: no generated id returned")]
    MissingInsertId,
}

/// Item repository
pub struct ItemRepo<'s> {
    session: &'s mut Session,
}

impl<'s> ItemRepo<'s> {
    pub fn new(session: &'s mut Session) -> Self {
        Self { session }
    }

    /// Create the `items` table if it is missing.
    ///
    /// MySQL commits DDL implicitly, so this is durable before any insert.
    pub async fn ensure_table(&mut self) -> Result<(), DbError> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&mut **self.session)
            .await?;
        Ok(())
    }

    /// Insert one item and return it with its generated id.
    ///
    /// The id comes from `LAST_INSERT_ID()` on the same connection,
    /// which is per-connection state and unaffected by concurrent writers.
    pub async fn create(&mut self, name: &ItemName) -> Result<Item, DbError> {
        let mut tx = self.session.begin().await?;
        sqlx::query("INSERT INTO items (name) VALUES (?)")
            .bind(name.as_str())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        let id: Option<u64> = sqlx::query_scalar("SELECT LAST_INSERT_ID() AS id")
            .fetch_optional(&mut **self.session)
            .await?;

        let id = id
            .filter(|id| *id > 0)
            .and_then(|id| i64::try_from(id).ok())
            .ok_or(DbError::MissingInsertId)?;

        tracing::debug!(id, "Item inserted");

        Ok(Item {
            id,
            name: name.as_str().to_owned(),
        })
    }

    /// All items, ascending by id. Unbounded.
    pub async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name FROM items ORDER BY id ASC")
            .fetch_all(&mut **self.session)
            .await?;
        Ok(items)
    }
}
