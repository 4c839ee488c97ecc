use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Redirect;
use axum::Json;
use burrow_core::ShortCode;
use tracing::{debug, info};

pub async fn shorten_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let base = match state.public_base_url() {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::MissingHost)?
            .to_string(),
    };

    let code = state.shortener().shorten(&request.url).await?;
    info!(worker = %state.context(), code = %code, "shortened url");

    let short_url = code.to_url(&format!("{base}/r"));
    Ok((StatusCode::CREATED, Json(ShortenResponse { short_url })))
}

pub async fn resolve_url_handler(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> Result<Redirect> {
    info!(worker = %state.context(), "request handled");

    let code = ShortCode::new(short_url.as_str()).map_err(|e| {
        debug!(worker = %state.context(), error = %e, "malformed short code");
        AppError::NotFound(short_url.clone())
    })?;

    let url = state.redirector().resolve(&code).await?;
    Ok(Redirect::temporary(&url))
}
