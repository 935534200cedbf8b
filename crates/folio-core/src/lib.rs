//! Core library for Folio.
//!
//! Contains the admin credential check, the signed session token issuer, and
//! the in-memory portfolio document store. This crate knows nothing about
//! HTTP; `folio-server` wires it into routes.

pub mod credential;
pub mod error;
pub mod portfolio;
pub mod secret;
pub mod token;
