use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Which shelf of the library a document lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A solicitation being responded to
    Rfx,
    /// Company material used as references
    Company,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Rfx => "rfx",
            DocumentKind::Company => "company",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rfx" => Ok(DocumentKind::Rfx),
            "company" => Ok(DocumentKind::Company),
            other => Err(AppError::Validation(format!("Unknown document type: {}", other))),
        }
    }
}

/// An uploaded or pasted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// `"<type>-<uuid>"`
    pub id: String,
    pub name: String,
    /// Plain text content, stored without validation.
    pub content: String,
    /// Unix timestamp (milliseconds) of when the document was added.
    pub created_at: i64,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
}

impl Document {
    /// Build a new document with a fresh id and the current time.
    pub fn new(kind: DocumentKind, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: format!("{}-{}", kind, Uuid::new_v4()),
            name: name.into(),
            content: content.into(),
            created_at: Utc::now().timestamp_millis(),
            kind,
        }
    }
}

/// Partial update applied by [`crate::database::update_document`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DocumentUpdate {
    /// New display name; must not be empty when present.
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub content: Option<String>,
}

impl DocumentUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: None,
        }
    }
}

/// An immutable snapshot of the response draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DraftVersion {
    /// `"<rfx id or 'draft'>-<uuid>"`
    pub id: String,
    pub label: String,
    pub content: String,
    /// Unix timestamp (milliseconds) of when the version was saved.
    pub created_at: i64,
}
