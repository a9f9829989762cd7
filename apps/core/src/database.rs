//! SQLite-backed Document/Version store.
//!
//! Every write replaces a single keyed row in one statement; there are no
//! partial updates and nothing is ever deleted.

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use std::path::Path;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::analysis::AnalysisResult;
use crate::error::AppError;
use crate::models::{Document, DocumentKind, DocumentUpdate, DraftVersion};

/// Workspace state key for the selected RFx id
pub const SELECTED_RFX_KEY: &str = "selected_rfx";
/// Workspace state key for the draft being edited
pub const CURRENT_DRAFT_KEY: &str = "current_draft";

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS documents (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        kind TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS analyses (
        document_id TEXT PRIMARY KEY,
        result TEXT NOT NULL,
        analyzed_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS versions (
        id TEXT PRIMARY KEY,
        label TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS workspace_state (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
];

pub async fn init_db(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    info!("Initializing database at: {}", db_path.display());

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await?;
    }

    info!("Database initialized and schema applied.");

    Ok(pool)
}

// --- Documents ---

pub async fn add_document(
    pool: &SqlitePool,
    kind: DocumentKind,
    name: &str,
    content: &str,
) -> Result<Document, AppError> {
    let doc = Document::new(kind, name, content);

    let stored = sqlx::query_as::<_, Document>(
        r#"
        INSERT INTO documents (id, name, content, created_at, kind)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, content, created_at, kind
        "#,
    )
    .bind(&doc.id)
    .bind(&doc.name)
    .bind(&doc.content)
    .bind(doc.created_at)
    .bind(doc.kind)
    .fetch_one(pool)
    .await?;

    info!("Added {} document {} ({})", stored.kind, stored.id, stored.name);
    Ok(stored)
}

pub async fn get_document(pool: &SqlitePool, id: &str) -> Result<Option<Document>, AppError> {
    let doc = sqlx::query_as::<_, Document>(
        r#"
        SELECT id, name, content, created_at, kind
        FROM documents
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(doc)
}

/// Documents of one kind, newest first.
pub async fn list_documents(
    pool: &SqlitePool,
    kind: DocumentKind,
) -> Result<Vec<Document>, AppError> {
    let docs = sqlx::query_as::<_, Document>(
        r#"
        SELECT id, name, content, created_at, kind
        FROM documents
        WHERE kind = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(kind)
    .fetch_all(pool)
    .await?;
    Ok(docs)
}

/// Documents of one kind whose name or content contains `query`, ignoring case.
pub async fn search_documents(
    pool: &SqlitePool,
    kind: DocumentKind,
    query: &str,
) -> Result<Vec<Document>, AppError> {
    let needle = query.to_lowercase();
    let docs = list_documents(pool, kind).await?;
    Ok(docs
        .into_iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&needle) || d.content.to_lowercase().contains(&needle)
        })
        .collect())
}

pub async fn update_document(
    pool: &SqlitePool,
    id: &str,
    update: DocumentUpdate,
) -> Result<Document, AppError> {
    update.validate()?;

    let current = get_document(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("document {}", id)))?;

    let name = update.name.unwrap_or(current.name);
    let content = update.content.unwrap_or(current.content);

    let updated = sqlx::query_as::<_, Document>(
        r#"
        UPDATE documents
        SET name = ?, content = ?
        WHERE id = ?
        RETURNING id, name, content, created_at, kind
        "#,
    )
    .bind(&name)
    .bind(&content)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::Internal(format!("document {} vanished during update", id)))?;

    info!("Updated document {}", id);
    Ok(updated)
}

// --- Analyses ---

/// Store the analysis for a document, replacing any earlier one.
pub async fn put_analysis(
    pool: &SqlitePool,
    document_id: &str,
    analysis: &AnalysisResult,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO analyses (document_id, result, analyzed_at)
        VALUES (?, ?, ?)
        ON CONFLICT(document_id) DO UPDATE
        SET result = excluded.result, analyzed_at = excluded.analyzed_at
        "#,
    )
    .bind(document_id)
    .bind(Json(analysis))
    .bind(Utc::now().timestamp_millis())
    .execute(pool)
    .await?;

    info!("Stored analysis for {}: {}", document_id, analysis.summary());
    Ok(())
}

pub async fn get_analysis(
    pool: &SqlitePool,
    document_id: &str,
) -> Result<Option<AnalysisResult>, AppError> {
    let row = sqlx::query_scalar::<_, Json<AnalysisResult>>(
        r#"
        SELECT result
        FROM analyses
        WHERE document_id = ?
        "#,
    )
    .bind(document_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|json| json.0))
}

// --- Versions ---

/// Snapshot `content` as a new version.
///
/// A blank or missing label becomes `Version <n>`, counting this one.
pub async fn save_version(
    pool: &SqlitePool,
    rfx_id: Option<&str>,
    label: Option<&str>,
    content: &str,
) -> Result<DraftVersion, AppError> {
    let label = match label.map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => label.to_string(),
        None => {
            let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM versions")
                .fetch_one(pool)
                .await?;
            format!("Version {}", existing + 1)
        }
    };
    let id = format!("{}-{}", rfx_id.unwrap_or("draft"), Uuid::new_v4());

    let version = sqlx::query_as::<_, DraftVersion>(
        r#"
        INSERT INTO versions (id, label, content, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, label, content, created_at
        "#,
    )
    .bind(&id)
    .bind(&label)
    .bind(content)
    .bind(Utc::now().timestamp_millis())
    .fetch_one(pool)
    .await?;

    info!("Saved version {} ({})", version.id, version.label);
    Ok(version)
}

/// All versions, newest first.
pub async fn list_versions(pool: &SqlitePool) -> Result<Vec<DraftVersion>, AppError> {
    let versions = sqlx::query_as::<_, DraftVersion>(
        r#"
        SELECT id, label, content, created_at
        FROM versions
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(versions)
}

pub async fn get_version(pool: &SqlitePool, id: &str) -> Result<Option<DraftVersion>, AppError> {
    let version = sqlx::query_as::<_, DraftVersion>(
        r#"
        SELECT id, label, content, created_at
        FROM versions
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(version)
}

// --- Workspace state ---

pub async fn get_state(pool: &SqlitePool, key: &str) -> Result<Option<String>, AppError> {
    let value = sqlx::query_scalar::<_, String>("SELECT value FROM workspace_state WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(value)
}

pub async fn set_state(pool: &SqlitePool, key: &str, value: &str) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO workspace_state (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}
