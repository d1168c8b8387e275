use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::domain::EmojiAsset;
use crate::fs::{clean_destination, prepare_destination};
use crate::index::{copy_and_index, list_source_entries};
use crate::manifest::Manifest;

pub use crate::error::{Error, Result};
pub use crate::index::SourceOrder;
pub use crate::paths::ProjectPaths;

pub mod check;
pub mod domain;
pub mod error;
pub mod fs;
pub mod index;
pub mod manifest;
pub mod paths;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sync emoji images into the iOS and Android bundles", long_about = None)]
pub struct Args {
    /// Project root; defaults to the directory above this tool
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Process source files sorted by name instead of directory order
    #[arg(short, long)]
    pub sorted: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Copy the emoji images into both bundles and rewrite the manifest
    #[default]
    Sync,
    /// Print the emojis recorded in the manifest
    List {
        /// Only emojis listed under this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only emojis whose name or description contains this text
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    /// Report inconsistencies between the manifest and the bundles
    Check,
}

impl Args {
    pub fn project_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(paths::default_root)
    }

    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            order: if self.sorted {
                SourceOrder::ByName
            } else {
                SourceOrder::Filesystem
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub order: SourceOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub emojis: Vec<String>,
    pub failed_deletes: Vec<PathBuf>,
}

/// Logs to stdout next to the progress lines, one bare message per line so
/// cleanup warnings read `could not delete <path>: <reason>`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", log_line(record)))
        .init();
}

pub fn log_line(record: &log::Record<'_>) -> String {
    record.args().to_string()
}

/// Wipes both bundles, copies every non-hidden source image into them and
/// rewrites the manifest's `emojis` and `categories`.
///
/// Failing to delete an old bundle entry only logs a warning. Everything else
/// aborts the run, possibly leaving the bundles half-populated.
pub fn sync_emojis(paths: &ProjectPaths, options: SyncOptions) -> Result<SyncSummary> {
    println!("Updating emoji assets...");

    for dest in paths.destinations() {
        prepare_destination(dest)?;
    }

    let mut manifest = Manifest::load(&paths.manifest)?;

    let mut failed_deletes = Vec::new();
    for dest in paths.destinations() {
        let report = clean_destination(dest)?;
        log::debug!("Removed {} entries from {}", report.removed, dest.display());
        failed_deletes.extend(report.failed);
    }

    let entries = list_source_entries(&paths.source_dir, options.order)?;
    let index = copy_and_index(&entries, &paths.destinations())?;

    manifest.replace_emojis(&index)?;
    manifest.save(&paths.manifest)?;

    println!("Emoji assets updated: {} emojis.", index.len());
    Ok(SyncSummary {
        emojis: index.names(),
        failed_deletes,
    })
}

/// Emojis from the manifest at `manifest_path`, narrowed by category and/or
/// search text.
pub fn list_emojis(
    manifest_path: &Path,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<EmojiAsset>> {
    let manifest = Manifest::load(manifest_path)?;
    // A category keeps its own listing order.
    let mut emojis = match category {
        Some(category) => manifest.emojis_in_category(category),
        None => manifest.emojis(),
    };
    if let Some(query) = search {
        let hits: Vec<String> = manifest.search(query).into_iter().map(|e| e.name).collect();
        emojis.retain(|e| hits.contains(&e.name));
    }
    Ok(emojis)
}
