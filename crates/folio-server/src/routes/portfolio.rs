//! Portfolio routes: `GET /data` and `POST /update`.
//!
//! Both sit behind [`require_token`](crate::middleware::require_token),
//! applied by the caller with `route_layer`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Build the portfolio router (unguarded; see [`super::app`]).
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/data", get(get_data))
        .route("/update", post(update_data))
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Return the whole portfolio document.
async fn get_data(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    info!("portfolio data requested");

    let document = state.portfolio.read().await;
    let body = serde_json::to_vec(&document).map_err(|e| AppError::FetchFailed(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Replace the whole portfolio document with the request body.
///
/// An empty or unparseable body is treated as no data.
async fn update_data(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<UpdateResponse>, AppError> {
    let candidate = serde_json::from_slice(&body).ok();

    if let Err(err) = state.portfolio.replace(candidate).await {
        warn!(reason = %err, "portfolio update rejected");
        return Err(err.into());
    }

    Ok(Json(UpdateResponse {
        success: true,
        message: "Portfolio updated successfully",
    }))
}
