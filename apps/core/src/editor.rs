//! Response Editor - the draft being written.
//!
//! The draft buffer lives in workspace state so it survives between runs;
//! versions are explicit snapshots of it.

use sqlx::sqlite::SqlitePool;
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::clipboard::{self, Clipboard};
use crate::database::{self, CURRENT_DRAFT_KEY};
use crate::draft::snippet;
use crate::error::AppError;
use crate::models::{Document, DraftVersion};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseEditor {
    content: String,
}

impl ResponseEditor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Load the persisted draft, or start empty.
    pub async fn load(pool: &SqlitePool) -> Result<Self, AppError> {
        let content = database::get_state(pool, CURRENT_DRAFT_KEY)
            .await?
            .unwrap_or_default();
        Ok(Self { content })
    }

    pub async fn persist(&self, pool: &SqlitePool) -> Result<(), AppError> {
        database::set_state(pool, CURRENT_DRAFT_KEY, &self.content).await
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Append `text` after a blank line (no separator on an empty draft).
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push_str("\n\n");
        }
        self.content.push_str(text);
    }

    /// Append a generated snippet; unknown kinds add nothing.
    pub fn insert_snippet(
        &mut self,
        kind: &str,
        analysis: Option<&AnalysisResult>,
        company_docs: &[Document],
    ) {
        let text = snippet(kind, analysis, company_docs);
        self.insert(&text);
    }

    /// Append clipboard text. Returns `false` when nothing could be read.
    pub async fn paste(&mut self, clipboard: &dyn Clipboard) -> bool {
        match clipboard::read_or_ignore(clipboard).await {
            Some(text) => {
                self.insert(&text);
                true
            }
            None => false,
        }
    }

    /// Snapshot the current content as a new version.
    pub async fn save_version(
        &self,
        pool: &SqlitePool,
        rfx_id: Option<&str>,
        label: Option<&str>,
    ) -> Result<DraftVersion, AppError> {
        database::save_version(pool, rfx_id, label, &self.content).await
    }

    /// Replace the content with a saved version's. Returns `false` for an unknown id.
    pub async fn restore_version(&mut self, pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
        match database::get_version(pool, id).await? {
            Some(version) => {
                info!("Restoring version {} ({})", version.id, version.label);
                self.set_content(version.content);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
