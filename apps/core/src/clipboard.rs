//! Clipboard collaborator.
//!
//! Reads may fail (no clipboard, permission denied, nothing piped in); callers
//! go through [`read_or_ignore`] so a failed read simply inserts nothing.

use async_trait::async_trait;
use std::io::{self, IsTerminal};
#[cfg(test)]
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::warn;

use crate::error::AppError;

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn read_text(&self) -> Result<String, AppError>;

    async fn write_text(&self, text: &str) -> Result<(), AppError>;
}

/// Clipboard over the process's standard streams: reads piped stdin, writes stdout.
pub struct StdioClipboard;

#[async_trait]
impl Clipboard for StdioClipboard {
    async fn read_text(&self) -> Result<String, AppError> {
        if io::stdin().is_terminal() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::Unsupported,
                "nothing piped on stdin",
            )));
        }
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        Ok(text)
    }

    async fn write_text(&self, text: &str) -> Result<(), AppError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// In-process clipboard for tests; `None` behaves like a denied read.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
        }
    }

    pub fn denied() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.text.lock().ok().and_then(|guard| guard.clone())
    }
}

#[cfg(test)]
#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> Result<String, AppError> {
        let guard = self
            .text
            .lock()
            .map_err(|e| AppError::Internal(format!("Clipboard lock poisoned: {}", e)))?;
        guard.clone().ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "clipboard read denied",
            ))
        })
    }

    async fn write_text(&self, text: &str) -> Result<(), AppError> {
        let mut guard = self
            .text
            .lock()
            .map_err(|e| AppError::Internal(format!("Clipboard lock poisoned: {}", e)))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// Read the clipboard, treating failures and empty text as "nothing to paste".
pub async fn read_or_ignore(clipboard: &dyn Clipboard) -> Option<String> {
    match clipboard.read_text().await {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            warn!("Clipboard read failed, nothing pasted: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_clipboard_round_trip() {
        let clipboard = MemoryClipboard::denied();
        assert!(clipboard.read_text().await.is_err());

        clipboard.write_text("copied").await.unwrap();
        assert_eq!(clipboard.read_text().await.unwrap(), "copied");
        assert_eq!(clipboard.contents().as_deref(), Some("copied"));
    }

    #[tokio::test]
    async fn test_read_or_ignore() {
        assert_eq!(
            read_or_ignore(&MemoryClipboard::with_text("hello")).await.as_deref(),
            Some("hello")
        );
        assert_eq!(read_or_ignore(&MemoryClipboard::with_text("")).await, None);
        assert_eq!(read_or_ignore(&MemoryClipboard::denied()).await, None);
    }
}
