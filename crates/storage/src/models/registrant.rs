use sqlx::FromRow;

/// One person signed up for one sport.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Registrant {
    pub id: i64,
    pub name: String,
    pub sport: String,
}
