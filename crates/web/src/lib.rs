pub mod config;
pub mod error;
pub mod features;
pub mod routes;
mod templates;

pub use routes::create_router;
