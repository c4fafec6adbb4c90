use axum::{routing::get, Router};

pub mod folders;
pub mod notes;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/folders", folders::router())
        .nest("/notes", notes::router())
}
