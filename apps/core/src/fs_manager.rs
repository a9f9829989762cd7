use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const DB_DIR: &str = "db";
const DB_FILENAME: &str = "rfx-studio.sqlite";

/// Layout of the local data directory.
pub struct DataDirs {
    root: PathBuf,
}

impl DataDirs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory root (`<data_dir>`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Database directory (`<data_dir>/db`).
    pub fn db_dir(&self) -> PathBuf {
        self.root.join(DB_DIR)
    }

    /// SQLite file holding documents, analyses, versions and workspace state.
    pub fn db_path(&self) -> PathBuf {
        self.db_dir().join(DB_FILENAME)
    }

    /// Create the directory tree if it does not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        let db_dir = self.db_dir();
        if !db_dir.exists() {
            info!("Creating db directory: {:?}", db_dir);
            fs::create_dir_all(&db_dir)?;
        }
        Ok(())
    }
}
