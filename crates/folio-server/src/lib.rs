//! Folio HTTP server.
//!
//! Wires the credential check, token issuer, and portfolio store from
//! `folio-core` into an Axum router: a public `/verify` login route and the
//! token-guarded `/data` and `/update` routes.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
