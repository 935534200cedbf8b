//! Shared application state for the Folio server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`.

use folio_core::credential::CredentialVerifier;
use folio_core::portfolio::{PortfolioDocument, PortfolioStore};
use folio_core::token::TokenIssuer;

use crate::config::ServerConfig;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Admin password check.
    pub credentials: CredentialVerifier,
    /// Session token signing and validation.
    pub tokens: TokenIssuer,
    /// The portfolio document.
    pub portfolio: PortfolioStore,
}

impl AppState {
    /// Build state from configuration, seeding the store with the default document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the seed document cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, serde_json::Error> {
        Ok(Self {
            credentials: CredentialVerifier::new(config.admin_password.expose()),
            tokens: TokenIssuer::new(config.secret_key.expose().as_bytes()),
            portfolio: PortfolioStore::from_document(&PortfolioDocument::seed())?,
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
