use axum::Router;
use storage::Database;
use tower_http::trace::TraceLayer;

use crate::features::registration;

pub fn create_router(db: Database) -> Router {
    registration::routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
