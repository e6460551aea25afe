use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/persons", post(handlers::add_person))
        .route("/api/weights", post(handlers::log_weight))
        .route("/api/month/next", post(handlers::month_next))
        .route("/api/month/prev", post(handlers::month_prev))
        .with_state(state)
}
