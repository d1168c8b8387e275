use serde::{Deserialize, Serialize};

pub const DEFAULT_EMOJI_SIZE: u32 = 24;

/// Name of the single category the sync regenerates.
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiAsset {
    pub name: String,
    pub image: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EmojiAsset {
    pub fn from_file_name(name: &str, image: &str) -> Self {
        EmojiAsset {
            name: name.to_string(),
            image: image.to_string(),
            width: DEFAULT_EMOJI_SIZE,
            height: DEFAULT_EMOJI_SIZE,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub file_name: String,
    pub path: std::path::PathBuf,
}
