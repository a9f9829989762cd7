//! File input collaborator.
//!
//! Plain text only: bytes are decoded as UTF-8 and anything undecodable is
//! replaced rather than rejected, so unsupported formats pass through as raw text.

use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// A file read for the library: display name plus text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content: String,
}

/// Decode file bytes as text without validating the format
pub fn extract_text_from_bytes(file_name: &str, file_data: &[u8]) -> String {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    info!("Extracting text from file: {} (type: {})", file_name, extension);

    let text = String::from_utf8_lossy(file_data);
    if let std::borrow::Cow::Owned(_) = text {
        warn!("{} is not valid UTF-8, invalid bytes were replaced", file_name);
    }
    text.into_owned()
}

/// Library name for an uploaded file: the file name without its last extension
pub fn document_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

/// Read a user-selected file in full
pub async fn read_upload(path: &Path) -> Result<UploadedFile, AppError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Validation(format!("Not a file path: {}", path.display())))?;

    let data = tokio::fs::read(path).await?;

    Ok(UploadedFile {
        name: document_name(file_name),
        content: extract_text_from_bytes(file_name, &data),
    })
}
