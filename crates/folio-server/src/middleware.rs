//! Bearer token guard for the Folio admin routes.
//!
//! Extracts `Authorization: Bearer <token>`, validates it with the token
//! issuer, and only then runs the inner handler. Any failure short-circuits
//! with a 401 and the handler is never invoked.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use folio_core::error::AuthError;

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that requires a valid session token.
///
/// # Errors
///
/// Returns [`AppError::Auth`] if the token is missing, expired, or invalid.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        warn!("missing token in request");
        return Err(AuthError::MissingToken.into());
    };

    if let Err(err) = state.tokens.validate(token) {
        match err {
            AuthError::ExpiredToken => warn!("expired token used"),
            AuthError::InvalidToken | AuthError::MissingToken => warn!("invalid token used"),
        }
        return Err(err.into());
    }

    Ok(next.run(req).await)
}

/// The token from an `Authorization: Bearer <token>` header.
///
/// Only the first space-separated word after the scheme is taken. Any other
/// scheme, or an empty token, counts as no token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|rest| rest.split(' ').next())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn takes_first_word_after_scheme() {
        assert_eq!(bearer_token(&headers("Bearer abc extra")), Some("abc"));
    }

    #[test]
    fn missing_header_or_other_scheme_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("bearer abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bearer  abc")), None);
    }
}
