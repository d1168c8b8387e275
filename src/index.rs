use std::collections::HashMap;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::{EmojiAsset, SourceEntry};
use crate::error::{Error, Result};
use crate::fs::copy_asset;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceOrder {
    /// Whatever order the filesystem hands entries back in.
    #[default]
    Filesystem,
    ByName,
}

/// Emojis in the order they were first seen. Re-inserting a name replaces the
/// asset but keeps its original position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmojiIndex {
    assets: Vec<EmojiAsset>,
    positions: HashMap<String, usize>,
}

impl EmojiIndex {
    pub fn insert(&mut self, asset: EmojiAsset) {
        match self.positions.get(&asset.name) {
            Some(&i) => self.assets[i] = asset,
            None => {
                self.positions.insert(asset.name.clone(), self.assets.len());
                self.assets.push(asset);
            }
        }
    }

    pub fn assets(&self) -> &[EmojiAsset] {
        &self.assets
    }

    pub fn names(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

pub fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}

/// File name minus its last extension: `smile.png` -> `smile`,
/// `a.tar.gz` -> `a.tar`, `noext` -> `noext`.
pub fn emoji_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

pub fn list_source_entries(source_dir: &Path, order: SourceOrder) -> Result<Vec<SourceEntry>> {
    let mut walker = WalkDir::new(source_dir).min_depth(1).max_depth(1);
    if order == SourceOrder::ByName {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| Error::SourceList {
            path: source_dir.to_path_buf(),
            source,
        })?;
        if is_hidden(&entry.file_name().to_string_lossy()) {
            log::debug!("Skipping hidden file {}", entry.path().display());
            continue;
        }
        let file_name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| Error::FileName(entry.path().to_path_buf()))?;
        entries.push(SourceEntry {
            name: emoji_name(file_name).to_string(),
            file_name: file_name.to_string(),
            path: entry.path().to_path_buf(),
        });
    }
    Ok(entries)
}

/// Copies every entry into each destination and records it in the index.
/// The first failed copy aborts.
pub fn copy_and_index(entries: &[SourceEntry], destinations: &[&Path]) -> Result<EmojiIndex> {
    let mut index = EmojiIndex::default();
    for entry in entries {
        for dest in destinations {
            copy_asset(&entry.path, &entry.file_name, dest)?;
        }
        index.insert(EmojiAsset::from_file_name(&entry.name, &entry.file_name));
    }
    Ok(index)
}
