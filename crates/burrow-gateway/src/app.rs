use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, index_handler, resolve_url_handler, shorten_url_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/url/shorten", post(shorten_url_handler))
            .route("/r/{short_url}", get(resolve_url_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors(allowed_origins))
    }

    /// Cross-origin reads only, from an explicit origin list.
    fn cors(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed_origins))
            .allow_methods([Method::GET])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}
