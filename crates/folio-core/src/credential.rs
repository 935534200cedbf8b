//! Admin credential verification.
//!
//! The configured admin password is hashed once at startup with SHA-256 and
//! only the hex digest is kept. Submitted passwords are hashed the same way
//! and the digests compared with `subtle::ConstantTimeEq`.
//!
//! The digest is fast and unsalted. That is acceptable for a single shared
//! credential held in memory, but it is not a password-storage scheme.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::{info, warn};

/// Hex-encoded SHA-256 of a password.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Checks submitted passwords against the single admin credential.
pub struct CredentialVerifier {
    digest: String,
}

impl CredentialVerifier {
    /// Build a verifier for the given admin password.
    #[must_use]
    pub fn new(admin_password: &str) -> Self {
        Self {
            digest: hash_password(admin_password),
        }
    }

    /// Return `true` if `password` is the admin password.
    ///
    /// Logs the outcome, never the password.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = hash_password(password);
        let matched: bool = candidate.as_bytes().ct_eq(self.digest.as_bytes()).into();

        if matched {
            info!("admin login successful");
        } else {
            warn!("invalid password attempt");
        }

        matched
    }
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_password("admin_password"),
            hex::encode(Sha256::digest(b"admin_password"))
        );
        assert_eq!(hash_password("").len(), 64);
    }

    #[test]
    fn accepts_configured_password() {
        let verifier = CredentialVerifier::new("correct horse");
        assert!(verifier.verify("correct horse"));
    }

    #[test]
    fn rejects_other_passwords() {
        let verifier = CredentialVerifier::new("correct horse");
        for attempt in ["", "correct", "correct horse ", "CORRECT HORSE", "battery staple"] {
            assert!(!verifier.verify(attempt), "accepted {attempt:?}");
        }
    }

    #[test]
    fn debug_does_not_leak_digest() {
        let verifier = CredentialVerifier::new("pw");
        let rendered = format!("{verifier:?}");
        assert!(!rendered.contains(&hash_password("pw")));
    }
}
