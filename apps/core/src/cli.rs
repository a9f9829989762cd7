use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::DocumentKind;

/// Top-level CLI parser for the `rfx-studio` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rfx-studio",
    version,
    about = "RFx Studio - analyze solicitations and draft proposal responses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the document library (overrides RFX_STUDIO_DATA_DIR)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the document library
    Doc {
        #[command(subcommand)]
        action: DocCommands,
    },
    /// Select the RFx that analyze, draft and version commands work on
    Select { id: String },
    /// Analyze an RFx and store the result
    Analyze {
        /// RFx document id (defaults to the selected RFx)
        id: Option<String>,
    },
    /// Replace the draft with one generated from an RFx
    Draft {
        /// RFx document id (defaults to the selected RFx)
        id: Option<String>,
    },
    /// Append a snippet to the draft: executive, compliance or qualifications
    Insert { kind: String },
    /// Append piped stdin to the draft
    Paste,
    /// Print the current draft
    Show,
    /// Show the selected RFx's keywords and suggested references
    Context,
    /// Save, list and restore draft versions
    Version {
        #[command(subcommand)]
        action: VersionCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum DocCommands {
    /// Add a text file to the library
    Add {
        file: PathBuf,
        /// Document type: rfx or company
        #[arg(short, long, default_value = "rfx")]
        kind: DocumentKind,
        /// Name to use instead of the file name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Add piped stdin to the library
    Paste {
        #[arg(short, long, default_value = "rfx")]
        kind: DocumentKind,
    },
    /// List documents, newest first
    List {
        #[arg(short, long, default_value = "rfx")]
        kind: DocumentKind,
        /// Only documents whose name or content contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print a document's content
    Show { id: String },
    /// Rename a document
    Rename { id: String, name: String },
    /// Write a document's content to stdout
    Copy { id: String },
}

#[derive(Debug, Subcommand)]
pub enum VersionCommands {
    /// Snapshot the current draft
    Save {
        #[arg(short, long)]
        label: Option<String>,
    },
    /// List saved versions, newest first
    List,
    /// Replace the draft with a saved version
    Restore { id: String },
    /// Write a version's content to stdout
    Copy { id: String },
}
