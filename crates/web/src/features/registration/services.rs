use sqlx::SqlitePool;
use storage::{error::Result, models::Registrant, repository::registrant::RegistrantRepository};

/// Persist a registrant and return its id
pub async fn create_registrant(pool: &SqlitePool, name: &str, sport: &str) -> Result<i64> {
    let repo = RegistrantRepository::new(pool);
    repo.create(name, sport).await
}

/// List all registrants
pub async fn list_registrants(pool: &SqlitePool) -> Result<Vec<Registrant>> {
    let repo = RegistrantRepository::new(pool);
    repo.list().await
}
