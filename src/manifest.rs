//! The emoji manifest (`emoji-config.json`).
//!
//! The document is kept as a generic JSON object so that fields this tool
//! does not own (`version`, `settings`, ...) survive a rewrite untouched and
//! in their original position. Only `emojis` and `categories` are replaced.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::{ALL_CATEGORY, EmojiAsset};
use crate::error::{Error, Result};
use crate::index::EmojiIndex;

pub const EMOJIS_KEY: &str = "emojis";
pub const CATEGORIES_KEY: &str = "categories";

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|source| Error::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(document) => Ok(Manifest { document }),
            _ => Err(Error::ManifestShape(path.to_path_buf())),
        }
    }

    /// Swaps in the freshly indexed emojis and a single `all` category
    /// listing them in index order.
    pub fn replace_emojis(&mut self, index: &EmojiIndex) -> Result<()> {
        let mut emojis = Map::new();
        for asset in index.assets() {
            emojis.insert(asset.name.clone(), serde_json::to_value(asset)?);
        }

        let names = index.names().into_iter().map(Value::String).collect();
        let mut categories = Map::new();
        categories.insert(ALL_CATEGORY.to_string(), Value::Array(names));

        self.document.insert(EMOJIS_KEY.to_string(), Value::Object(emojis));
        self.document
            .insert(CATEGORIES_KEY.to_string(), Value::Object(categories));
        Ok(())
    }

    /// Two-space indented, non-ASCII kept literal, no trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Writes next to `path` first and renames over it, so a crash mid-write
    /// leaves the previous manifest intact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_pretty_string()?;
        let tmp = tmp_path(path);
        let write_err = |source: std::io::Error| Error::ManifestWrite {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp, contents).map_err(write_err)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }
        Ok(())
    }

    /// Raw `emojis` entries, including ones that do not parse as an asset.
    pub fn emoji_entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.document
            .get(EMOJIS_KEY)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|emojis| emojis.iter())
    }

    pub fn emoji(&self, name: &str) -> Option<EmojiAsset> {
        self.document
            .get(EMOJIS_KEY)?
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.emoji(name).is_some()
    }

    /// Every well-formed emoji, in manifest order.
    pub fn emojis(&self) -> Vec<EmojiAsset> {
        self.emoji_entries()
            .filter_map(|(_, v)| serde_json::from_value(v.clone()).ok())
            .collect()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories()
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Names listed under `category`, as written in the manifest.
    pub fn category_members(&self, category: &str) -> Vec<String> {
        self.categories()
            .and_then(|c| c.get(category))
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|n| n.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Emojis of `category`; names with no matching emoji are dropped.
    pub fn emojis_in_category(&self, category: &str) -> Vec<EmojiAsset> {
        self.category_members(category)
            .iter()
            .filter_map(|name| self.emoji(name))
            .collect()
    }

    /// Case-insensitive substring match on name and description.
    pub fn search(&self, query: &str) -> Vec<EmojiAsset> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.emojis()
            .into_iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&term)
                    || e
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            })
            .collect()
    }

    fn categories(&self) -> Option<&Map<String, Value>> {
        self.document.get(CATEGORIES_KEY).and_then(Value::as_object)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
