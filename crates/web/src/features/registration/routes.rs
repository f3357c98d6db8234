use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{index, list_registrants, register};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(index))
        .route("/register", post(register))
        .route("/registrants", get(list_registrants))
}
