//! Error types for `folio-core`.
//!
//! The `Display` text of each auth and validation variant is the exact
//! message returned to HTTP clients, so changing it changes the API.

/// Reasons a protected request is refused before its handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No bearer token was present on the request.
    #[error("Token is missing")]
    MissingToken,

    /// The signature checked out but the `exp` claim has passed.
    #[error("Token has expired")]
    ExpiredToken,

    /// Bad signature, malformed token, or missing claims.
    #[error("Invalid token")]
    InvalidToken,
}

/// Reasons a candidate portfolio document is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The request body was absent, unparseable, or an empty JSON value.
    #[error("No data provided")]
    NoDataProvided,

    /// The body is not an object carrying every required top-level key.
    #[error("Invalid data structure")]
    InvalidStructure,
}

/// Errors from issuing tokens.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Encoding or signing the claims failed.
    #[error("token signing failed: {reason}")]
    Signing { reason: String },
}
