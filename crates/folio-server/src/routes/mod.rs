//! HTTP routes for the Folio server.
//!
//! - `POST /verify` — public login, trades the admin password for a token.
//! - `GET /data` — token-guarded read of the portfolio document.
//! - `POST /update` — token-guarded replace of the portfolio document.

pub mod auth;
pub mod portfolio;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header;
use axum::middleware as axum_mw;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::require_token;
use crate::state::AppState;

/// Build the full application router with middleware and state attached.
pub fn app(state: Arc<AppState>) -> Router {
    let guarded = portfolio::router().route_layer(axum_mw::from_fn_with_state(
        Arc::clone(&state),
        require_token,
    ));

    // Any origin, any method, any header: the admin UI is served from elsewhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(auth::router())
        .merge(guarded)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}
