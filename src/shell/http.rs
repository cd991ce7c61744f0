use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::appointments::use_cases::book_appointment::inbound::http as book_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(book_http::show).post(book_http::submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
