use crate::model::HealthResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use tracing::info;

pub async fn index_handler(State(state): State<AppState>) -> Json<&'static str> {
    info!(worker = %state.context(), "request handled");
    Json("Your URL Shortener is running!")
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
