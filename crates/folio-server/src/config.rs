//! Server configuration for Folio.
//!
//! Loads configuration from environment variables. `SECRET_KEY` and
//! `ADMIN_PASSWORD` fall back to well-known placeholders when unset; the
//! server still starts, but logs a warning for each placeholder in use.

use std::net::SocketAddr;

use folio_core::secret::Secret;

/// Placeholder signing key used when `SECRET_KEY` is unset.
pub const DEFAULT_SECRET_KEY: &str = "your_strong_secret_key_here";

/// Placeholder admin password used when `ADMIN_PASSWORD` is unset.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin_password";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// HS256 signing key for session tokens.
    pub secret_key: Secret,
    /// Plaintext admin password; hashed once when state is built.
    pub admin_password: Secret,
    /// `true` if `secret_key` is the placeholder.
    pub default_secret_key: bool,
    /// `true` if `admin_password` is the placeholder.
    pub default_admin_password: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `SECRET_KEY` — token signing key (default: placeholder)
    /// - `ADMIN_PASSWORD` — admin password (default: placeholder)
    /// - `FOLIO_BIND_ADDR` — bind address (default: `0.0.0.0:5000`)
    /// - `FOLIO_LOG_LEVEL` — log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("FOLIO_BIND_ADDR")
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));

        let log_level = lookup("FOLIO_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let (secret_key, default_secret_key) = match lookup("SECRET_KEY") {
            Some(key) => (Secret::new(key), false),
            None => (Secret::new(DEFAULT_SECRET_KEY), true),
        };

        let (admin_password, default_admin_password) = match lookup("ADMIN_PASSWORD") {
            Some(password) => (Secret::new(password), false),
            None => (Secret::new(DEFAULT_ADMIN_PASSWORD), true),
        };

        Self {
            bind_addr,
            log_level,
            secret_key,
            admin_password,
            default_secret_key,
            default_admin_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.bind_addr, SocketAddr::from(([0, 0, 0, 0], 5000)));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.secret_key.expose(), DEFAULT_SECRET_KEY);
        assert_eq!(cfg.admin_password.expose(), DEFAULT_ADMIN_PASSWORD);
        assert!(cfg.default_secret_key);
        assert!(cfg.default_admin_password);
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = config(&[
            ("SECRET_KEY", "k"),
            ("ADMIN_PASSWORD", "p"),
            ("FOLIO_BIND_ADDR", "127.0.0.1:8080"),
            ("FOLIO_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(cfg.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.secret_key.expose(), "k");
        assert_eq!(cfg.admin_password.expose(), "p");
        assert!(!cfg.default_secret_key);
        assert!(!cfg.default_admin_password);
    }

    #[test]
    fn unparseable_bind_addr_falls_back() {
        let cfg = config(&[("FOLIO_BIND_ADDR", "not-an-addr")]);
        assert_eq!(cfg.bind_addr.port(), 5000);
    }

    #[test]
    fn debug_redacts_secrets() {
        let cfg = config(&[("SECRET_KEY", "sekrit"), ("ADMIN_PASSWORD", "pa55")]);
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("sekrit"));
        assert!(!rendered.contains("pa55"));
    }
}
