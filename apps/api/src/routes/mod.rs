pub mod health;
pub mod upload;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(upload::form_handler).post(upload::upload_handler),
        )
        .with_state(state)
}
