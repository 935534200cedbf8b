//! Session tokens for the admin API.
//!
//! A token is an HS256 JWT whose only claim is `exp`. It proves that someone
//! presented the admin password within the last hour and nothing more: there
//! is no subject, no scope, and no server-side record of issued tokens, so a
//! token cannot be revoked before it expires.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, TokenError};

/// Lifetime of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// The claim set carried by every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and validates signed session tokens.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    /// Create an issuer signing with the given symmetric key.
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock-skew allowance.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token expiring [`TOKEN_TTL_SECS`] from now.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the claims cannot be encoded.
    pub fn issue(&self) -> Result<String, TokenError> {
        self.issue_at(Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the claims cannot be encoded.
    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(
            |e| TokenError::Signing {
                reason: e.to_string(),
            },
        )
    }

    /// Verify the signature and expiry of `token`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::ExpiredToken`] if the signature is valid but `exp` has passed.
    /// - [`AuthError::InvalidToken`] for any other decoding or signature failure.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl_secs", &TOKEN_TTL_SECS)
            .finish_non_exhaustive()
    }
}
