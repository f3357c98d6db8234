use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod error;
pub mod models;
pub mod repository;

use error::Result;

const CREATE_REGISTRANTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS registrants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        sport TEXT NOT NULL
    )
"#;

/// Handle to the single long-lived SQLite connection.
///
/// The pool is capped at one connection that is opened eagerly and never
/// expires, so every clone of this handle talks to the same connection for
/// the lifetime of the process. Callers borrow it for one statement at a time
/// and it returns to the pool when the borrow is dropped.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

impl Database {
    /// Open the database at `database_url`, creating the file if it does not
    /// exist yet. Accepts sqlx URLs such as `sqlite:registrants.db` or
    /// `sqlite::memory:`.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the `registrants` table if it is missing. Safe to call any
    /// number of times.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_REGISTRANTS_TABLE)
            .execute(&self.pool)
            .await?;

        tracing::debug!("registrants table ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection. Only meant for process shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::registrant::RegistrantRepository;
    use tempfile::tempdir;

    async fn table_count(db: &Database) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'registrants'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        db.ensure_schema().await.unwrap();
        RegistrantRepository::new(db.pool())
            .create("Alice", "Tennis")
            .await
            .unwrap();
        db.ensure_schema().await.unwrap();

        assert_eq!(table_count(&db).await, 1);
        let registrants = RegistrantRepository::new(db.pool()).list().await.unwrap();
        assert_eq!(registrants.len(), 1);
    }

    #[tokio::test]
    async fn test_creates_file_and_survives_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("registrants.db");
        let url = format!("sqlite:{}", db_path.display());

        let db = Database::new(&url).await.unwrap();
        db.ensure_schema().await.unwrap();
        RegistrantRepository::new(db.pool())
            .create("Bob", "Dodgeball")
            .await
            .unwrap();
        db.close().await;
        assert!(db_path.exists());

        let reopened = Database::new(&url).await.unwrap();
        reopened.ensure_schema().await.unwrap();

        assert_eq!(table_count(&reopened).await, 1);
        let registrants = RegistrantRepository::new(reopened.pool())
            .list()
            .await
            .unwrap();
        assert_eq!(registrants.len(), 1);
        assert_eq!(registrants[0].name, "Bob");
    }

    #[tokio::test]
    async fn test_clones_share_one_connection() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.ensure_schema().await.unwrap();

        let clone = db.clone();
        RegistrantRepository::new(clone.pool())
            .create("Alice", "Tennis")
            .await
            .unwrap();

        let registrants = RegistrantRepository::new(db.pool()).list().await.unwrap();
        assert_eq!(registrants.len(), 1);
        assert_eq!(db.pool().size(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_path_fails() {
        let dir = tempdir().unwrap();
        let url = format!(
            "sqlite:{}",
            dir.path().join("missing").join("registrants.db").display()
        );

        assert!(Database::new(&url).await.is_err());
    }
}
