//! The portfolio document store.
//!
//! Holds exactly one JSON document in memory. Reads return a snapshot of the
//! whole document, and an accepted write replaces the whole document. Only the
//! presence of the four required top-level keys is checked on write. Field
//! types, project shape and `id` uniqueness are the client's business.
//!
//! The document sits behind a `tokio::sync::RwLock`, so a reader sees either
//! the previous document or the new one, never a mix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ValidationError;

/// Top-level keys every accepted document must contain.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "title", "sections", "projects"];

/// Typed shape of the portfolio document, used to build the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    /// Display name of the portfolio owner.
    pub name: String,
    /// Headline shown under the name.
    pub title: String,
    /// Feature flags toggling page sections on or off.
    pub sections: BTreeMap<String, bool>,
    /// Projects in display order.
    pub projects: Vec<Project>,
}

/// One entry in [`PortfolioDocument::projects`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl PortfolioDocument {
    /// The document served after a restart.
    #[must_use]
    pub fn seed() -> Self {
        let sections = ["hero", "about", "projects", "skills", "contact"]
            .into_iter()
            .map(|name| (name.to_owned(), true))
            .collect();

        Self {
            name: "Anshuman Singh".to_owned(),
            title: "Python Backend Developer & Aspiring Software Engineer".to_owned(),
            sections,
            projects: vec![
                project(
                    1,
                    "Telegram JSON DB Manager",
                    "A Flask-based Telegram bot that manages a JSON database allowing users to store and retrieve data via Telegram commands.",
                    &["Flask", "Telegram Bot", "JSON"],
                ),
                project(
                    2,
                    "E-commerce Store",
                    "A full-fledged e-commerce platform built with Flask and SQLite, hosted on Render with product listings, cart, and user authentication.",
                    &["Flask", "SQLite", "Render"],
                ),
                project(
                    3,
                    "AI-powered Exam Result Bot",
                    "A bot that scrapes university websites and uses AI to detect result updates, then notifies students via Telegram.",
                    &["Python", "Web Scraping", "AI", "Telegram"],
                ),
                project(
                    4,
                    "Dream & Soul Journal",
                    "An audio-guided journaling tool that helps users reflect on their dreams and daily experiences with calming background sounds.",
                    &["Flask", "Audio Processing", "Journaling"],
                ),
            ],
        }
    }
}

fn project(id: u64, title: &str, description: &str, tags: &[&str]) -> Project {
    Project {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
    }
}

/// Single-document in-memory store.
pub struct PortfolioStore {
    document: RwLock<Value>,
}

impl PortfolioStore {
    /// Create a store holding `document` as-is.
    #[must_use]
    pub fn new(document: Value) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    /// Create a store seeded from a typed document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document cannot be converted to JSON.
    pub fn from_document(document: &PortfolioDocument) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::to_value(document)?))
    }

    /// Snapshot of the current document.
    pub async fn read(&self) -> Value {
        self.document.read().await.clone()
    }

    /// Replace the whole document with `candidate`.
    ///
    /// `None` means the request carried no readable body. On error the stored
    /// document is left untouched.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NoDataProvided`] if `candidate` is absent or empty.
    /// - [`ValidationError::InvalidStructure`] if it is not an object with every
    ///   key in [`REQUIRED_FIELDS`].
    pub async fn replace(&self, candidate: Option<Value>) -> Result<(), ValidationError> {
        let candidate = candidate
            .filter(|v| !is_empty(v))
            .ok_or(ValidationError::NoDataProvided)?;

        check_structure(&candidate)?;

        *self.document.write().await = candidate;
        info!("portfolio document replaced");
        Ok(())
    }
}

impl std::fmt::Debug for PortfolioStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioStore").finish_non_exhaustive()
    }
}

/// Whether a JSON value counts as "nothing submitted".
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn check_structure(candidate: &Value) -> Result<(), ValidationError> {
    let object = candidate
        .as_object()
        .ok_or(ValidationError::InvalidStructure)?;

    if REQUIRED_FIELDS.iter().all(|field| object.contains_key(*field)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStructure)
    }
}
