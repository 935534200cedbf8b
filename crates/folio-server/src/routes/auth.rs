//! Login route: `POST /verify`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Build the public login router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/verify", post(verify))
}

// ── Request / Response types ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub token: String,
    pub message: &'static str,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Trade the admin password for a one-hour session token.
///
/// The body is read raw so that a missing or malformed body is answered
/// like a missing password instead of with a framework rejection.
async fn verify(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<VerifyResponse>, AppError> {
    let password = serde_json::from_slice::<VerifyRequest>(&body)
        .ok()
        .and_then(|req| req.password)
        .filter(|p| !p.is_empty());

    let Some(password) = password else {
        warn!("password missing in request");
        return Err(AppError::BadRequest("Password required".to_owned()));
    };

    if !state.credentials.verify(&password) {
        return Err(AppError::Unauthorized("Invalid password".to_owned()));
    }

    let token = state.tokens.issue()?;

    Ok(Json(VerifyResponse {
        success: true,
        token,
        message: "Authentication successful",
    }))
}
