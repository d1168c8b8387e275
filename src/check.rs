use std::fmt;
use std::path::PathBuf;

use crate::domain::EmojiAsset;
use crate::manifest::Manifest;
use crate::paths::ProjectPaths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MalformedEmoji { key: String },
    NameMismatch { key: String, name: String },
    UnknownCategoryMember { category: String, name: String },
    MissingImage { name: String, path: PathBuf },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MalformedEmoji { key } => write!(f, "emoji `{}` is not a valid entry", key),
            Issue::NameMismatch { key, name } => {
                write!(f, "emoji `{}` declares name `{}`", key, name)
            }
            Issue::UnknownCategoryMember { category, name } => {
                write!(f, "category `{}` lists unknown emoji `{}`", category, name)
            }
            Issue::MissingImage { name, path } => {
                write!(f, "emoji `{}` has no image at {}", name, path.display())
            }
        }
    }
}

/// Compares the manifest with itself and with both bundles. Read-only.
pub fn check_manifest(manifest: &Manifest, paths: &ProjectPaths) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (key, value) in manifest.emoji_entries() {
        let asset: EmojiAsset = match serde_json::from_value(value.clone()) {
            Ok(asset) => asset,
            Err(_) => {
                issues.push(Issue::MalformedEmoji { key: key.clone() });
                continue;
            }
        };
        if &asset.name != key {
            issues.push(Issue::NameMismatch {
                key: key.clone(),
                name: asset.name.clone(),
            });
        }
        for dest in paths.destinations() {
            let image = dest.join(&asset.image);
            if !image.is_file() {
                issues.push(Issue::MissingImage {
                    name: key.clone(),
                    path: image,
                });
            }
        }
    }

    for category in manifest.category_names() {
        for name in manifest.category_members(&category) {
            if !manifest.contains(&name) {
                issues.push(Issue::UnknownCategoryMember {
                    category: category.clone(),
                    name,
                });
            }
        }
    }

    issues
}
