use anyhow::{bail, Context};
use chrono::{DateTime, Local};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use tracing::info;

use crate::cli::{Commands, DocCommands, VersionCommands};
use crate::clipboard::Clipboard;
use crate::database;
use crate::editor::ResponseEditor;
use crate::models::{Document, DocumentKind, DocumentUpdate};
use crate::workspace;

/// Handles shared by every command.
pub struct AppContext {
    pub pool: SqlitePool,
    pub clipboard: Box<dyn Clipboard>,
    pub json: bool,
}

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Doc { action } => handle_doc(action, ctx).await,
        Commands::Select { id } => {
            let rfx = workspace::select_rfx(&ctx.pool, &id).await?;
            println!("Selected {} ({})", rfx.id, rfx.name);
            Ok(())
        }
        Commands::Analyze { id } => {
            let rfx = resolve_rfx(&ctx.pool, id.as_deref()).await?;
            let analysis = workspace::analyze_rfx(&ctx.pool, &rfx)
                .await
                .with_context(|| format!("failed to analyze {}", rfx.id))?;
            if ctx.json {
                print_json(&analysis)
            } else {
                println!("{}: {}", rfx.name, analysis.summary());
                Ok(())
            }
        }
        Commands::Draft { id } => {
            let rfx = resolve_rfx(&ctx.pool, id.as_deref()).await?;
            let editor = workspace::generate_draft(&ctx.pool, &rfx)
                .await
                .with_context(|| format!("failed to generate a draft for {}", rfx.id))?;
            println!("{}", editor.content());
            Ok(())
        }
        Commands::Insert { kind } => {
            let editor = workspace::insert_snippet(&ctx.pool, &kind).await?;
            println!("{}", editor.content());
            Ok(())
        }
        Commands::Paste => {
            let mut editor = ResponseEditor::load(&ctx.pool).await?;
            if editor.paste(ctx.clipboard.as_ref()).await {
                editor.persist(&ctx.pool).await?;
                info!("Pasted into draft ({} chars)", editor.content().len());
            }
            Ok(())
        }
        Commands::Show => {
            let editor = ResponseEditor::load(&ctx.pool).await?;
            println!("{}", editor.content());
            Ok(())
        }
        Commands::Context => {
            let card = workspace::context_card(&ctx.pool).await?;
            if ctx.json {
                return print_json(&card);
            }
            match &card.rfx_name {
                Some(name) => println!("RFx: {}", name),
                None => println!("No RFx selected"),
            }
            println!("Keywords: {}", card.top_keywords.join(", "));
            println!("References: {}", card.suggested_references.join(", "));
            Ok(())
        }
        Commands::Version { action } => handle_version(action, ctx).await,
    }
}

async fn handle_doc(action: DocCommands, ctx: &AppContext) -> anyhow::Result<()> {
    match action {
        DocCommands::Add { file, kind, name } => {
            let doc = workspace::upload_document(&ctx.pool, kind, &file, name.as_deref())
                .await
                .with_context(|| format!("failed to add {}", file.display()))?;
            print_document_added(&doc, ctx.json)
        }
        DocCommands::Paste { kind } => {
            match workspace::paste_document(&ctx.pool, ctx.clipboard.as_ref(), kind).await? {
                Some(doc) => print_document_added(&doc, ctx.json),
                None => {
                    println!("Nothing to paste");
                    Ok(())
                }
            }
        }
        DocCommands::List { kind, search } => {
            let docs = match search.as_deref() {
                Some(query) => database::search_documents(&ctx.pool, kind, query).await?,
                None => database::list_documents(&ctx.pool, kind).await?,
            };
            if ctx.json {
                return print_json(&docs);
            }
            for doc in &docs {
                println!("{}\t{}\t{}", doc.id, doc.name, format_timestamp(doc.created_at));
            }
            Ok(())
        }
        DocCommands::Show { id } => {
            let doc = require_document(&ctx.pool, &id).await?;
            if ctx.json {
                print_json(&doc)
            } else {
                println!("{}", doc.content);
                Ok(())
            }
        }
        DocCommands::Rename { id, name } => {
            let doc = database::update_document(&ctx.pool, &id, DocumentUpdate::rename(name))
                .await
                .with_context(|| format!("failed to rename {}", id))?;
            println!("Renamed {} to {}", doc.id, doc.name);
            Ok(())
        }
        DocCommands::Copy { id } => {
            let doc = require_document(&ctx.pool, &id).await?;
            ctx.clipboard.write_text(&doc.content).await?;
            Ok(())
        }
    }
}

async fn handle_version(action: VersionCommands, ctx: &AppContext) -> anyhow::Result<()> {
    match action {
        VersionCommands::Save { label } => {
            let rfx = workspace::selected_rfx(&ctx.pool).await?;
            let editor = ResponseEditor::load(&ctx.pool).await?;
            let version = editor
                .save_version(
                    &ctx.pool,
                    rfx.as_ref().map(|d| d.id.as_str()),
                    label.as_deref(),
                )
                .await?;
            if ctx.json {
                print_json(&version)
            } else {
                println!("Saved {} ({})", version.id, version.label);
                Ok(())
            }
        }
        VersionCommands::List => {
            let versions = database::list_versions(&ctx.pool).await?;
            if ctx.json {
                return print_json(&versions);
            }
            for version in &versions {
                println!(
                    "{}\t{}\t{}",
                    version.id,
                    version.label,
                    format_timestamp(version.created_at)
                );
            }
            Ok(())
        }
        VersionCommands::Restore { id } => {
            let mut editor = ResponseEditor::load(&ctx.pool).await?;
            if !editor.restore_version(&ctx.pool, &id).await? {
                bail!("no saved version with id '{}'", id);
            }
            editor.persist(&ctx.pool).await?;
            println!("{}", editor.content());
            Ok(())
        }
        VersionCommands::Copy { id } => {
            let version = database::get_version(&ctx.pool, &id)
                .await?
                .with_context(|| format!("no saved version with id '{}'", id))?;
            ctx.clipboard.write_text(&version.content).await?;
            Ok(())
        }
    }
}

/// The RFx named on the command line, else the selected one.
async fn resolve_rfx(pool: &SqlitePool, id: Option<&str>) -> anyhow::Result<Document> {
    let rfx = match id {
        Some(id) => require_document(pool, id).await?,
        None => workspace::selected_rfx(pool)
            .await?
            .context("no RFx selected. Run 'rfx-studio select <id>' first.")?,
    };
    if rfx.kind != DocumentKind::Rfx {
        bail!("{} is a {} document, not an RFx", rfx.id, rfx.kind);
    }
    Ok(rfx)
}

async fn require_document(pool: &SqlitePool, id: &str) -> anyhow::Result<Document> {
    database::get_document(pool, id)
        .await?
        .with_context(|| format!("no document with id '{}'", id))
}

fn print_document_added(doc: &Document, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(doc)
    } else {
        println!("Added {} ({})", doc.id, doc.name);
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
