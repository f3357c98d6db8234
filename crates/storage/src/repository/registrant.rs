use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Registrant;

pub struct RegistrantRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RegistrantRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a registrant and return its generated id.
    ///
    /// The insert runs inside its own transaction. If the statement fails the
    /// transaction is dropped before `commit`, which rolls it back and hands
    /// the connection back to the pool.
    ///
    /// Sport membership is not checked here; callers are expected to have
    /// validated the form already.
    pub async fn create(&self, name: &str, sport: &str) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO registrants (name, sport)
            VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(sport)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.last_insert_rowid())
    }

    /// List every registrant in storage order
    pub async fn list(&self) -> Result<Vec<Registrant>> {
        let registrants = sqlx::query_as::<_, Registrant>(
            r#"
            SELECT id, name, sport
            FROM registrants
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(registrants)
    }
}
