//! Workspace actions that combine the store with the analysis and draft layers.
//!
//! The analysis and draft functions stay pure; this module fetches their
//! inputs from the store and writes their outputs back.

use chrono::Local;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use std::path::Path;
use tracing::info;

use crate::analysis::{analyze, AnalysisResult};
use crate::clipboard::{self, Clipboard};
use crate::database::{self, SELECTED_RFX_KEY};
use crate::draft::compose;
use crate::editor::ResponseEditor;
use crate::error::AppError;
use crate::models::{Document, DocumentKind};
use crate::text_extract;

/// Keywords shown in the context card
const CONTEXT_KEYWORDS: usize = 8;

/// Add a file from disk to the library.
pub async fn upload_document(
    pool: &SqlitePool,
    kind: DocumentKind,
    path: &Path,
    name: Option<&str>,
) -> Result<Document, AppError> {
    let upload = text_extract::read_upload(path).await?;
    let name = name.map(str::to_string).unwrap_or(upload.name);
    database::add_document(pool, kind, &name, &upload.content).await
}

/// Add clipboard text to the library as `Pasted <timestamp>`.
///
/// An empty or unreadable clipboard adds nothing.
pub async fn paste_document(
    pool: &SqlitePool,
    clipboard: &dyn Clipboard,
    kind: DocumentKind,
) -> Result<Option<Document>, AppError> {
    let Some(text) = clipboard::read_or_ignore(clipboard).await else {
        return Ok(None);
    };
    let name = format!("Pasted {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    database::add_document(pool, kind, &name, &text).await.map(Some)
}

/// Make `id` the RFx that analyze, draft and version commands default to.
pub async fn select_rfx(pool: &SqlitePool, id: &str) -> Result<Document, AppError> {
    let doc = database::get_document(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("document {}", id)))?;
    if doc.kind != DocumentKind::Rfx {
        return Err(AppError::Validation(format!(
            "{} is a {} document, only RFx documents can be selected",
            id, doc.kind
        )));
    }
    database::set_state(pool, SELECTED_RFX_KEY, &doc.id).await?;
    info!("Selected RFx {} ({})", doc.id, doc.name);
    Ok(doc)
}

pub async fn selected_rfx(pool: &SqlitePool) -> Result<Option<Document>, AppError> {
    match database::get_state(pool, SELECTED_RFX_KEY).await? {
        Some(id) => database::get_document(pool, &id).await,
        None => Ok(None),
    }
}

/// Analyze an RFx against the current company documents and store the result.
pub async fn analyze_rfx(pool: &SqlitePool, rfx: &Document) -> Result<AnalysisResult, AppError> {
    let company_docs = database::list_documents(pool, DocumentKind::Company).await?;
    let analysis = analyze(&rfx.content, &company_docs);
    database::put_analysis(pool, &rfx.id, &analysis).await?;
    Ok(analysis)
}

/// Stored analysis for an RFx, analyzing it first if there is none.
pub async fn analysis_for(pool: &SqlitePool, rfx: &Document) -> Result<AnalysisResult, AppError> {
    match database::get_analysis(pool, &rfx.id).await? {
        Some(analysis) => Ok(analysis),
        None => analyze_rfx(pool, rfx).await,
    }
}

/// Replace the current draft with a freshly composed one.
pub async fn generate_draft(pool: &SqlitePool, rfx: &Document) -> Result<ResponseEditor, AppError> {
    let analysis = analysis_for(pool, rfx).await?;
    let company_docs = database::list_documents(pool, DocumentKind::Company).await?;

    let editor = ResponseEditor::new(compose(Some(&analysis), &company_docs));
    editor.persist(pool).await?;
    info!("Generated draft for {} ({} chars)", rfx.id, editor.content().len());
    Ok(editor)
}

/// Append a snippet built from the selected RFx's stored analysis.
pub async fn insert_snippet(pool: &SqlitePool, kind: &str) -> Result<ResponseEditor, AppError> {
    let analysis = match selected_rfx(pool).await? {
        Some(rfx) => database::get_analysis(pool, &rfx.id).await?,
        None => None,
    };
    let company_docs = database::list_documents(pool, DocumentKind::Company).await?;

    let mut editor = ResponseEditor::load(pool).await?;
    editor.insert_snippet(kind, analysis.as_ref(), &company_docs);
    editor.persist(pool).await?;
    Ok(editor)
}

/// What the editor shows next to the draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextCard {
    pub rfx_name: Option<String>,
    pub top_keywords: Vec<String>,
    pub suggested_references: Vec<String>,
}

pub async fn context_card(pool: &SqlitePool) -> Result<ContextCard, AppError> {
    let Some(rfx) = selected_rfx(pool).await? else {
        return Ok(ContextCard::default());
    };
    let analysis = database::get_analysis(pool, &rfx.id).await?.unwrap_or_default();
    let company_docs = database::list_documents(pool, DocumentKind::Company).await?;

    Ok(ContextCard {
        rfx_name: Some(rfx.name),
        top_keywords: analysis
            .keywords
            .into_iter()
            .take(CONTEXT_KEYWORDS)
            .collect(),
        suggested_references: analysis
            .suggested_company_references
            .iter()
            .map(|r| {
                company_docs
                    .iter()
                    .find(|d| d.id == r.document_id)
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| r.document_name.clone())
            })
            .collect(),
    })
}
