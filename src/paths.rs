use std::path::{Path, PathBuf};

/// Filesystem locations the sync reads from and writes to, all relative to
/// the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub source_dir: PathBuf,
    pub manifest: PathBuf,
    pub ios_bundle: PathBuf,
    pub android_bundle: PathBuf,
}

impl ProjectPaths {
    pub fn from_root(root: &Path) -> Self {
        let emojis = root.join("assets").join("emojis");
        ProjectPaths {
            source_dir: emojis.join("emoji"),
            manifest: emojis.join("emoji-config.json"),
            ios_bundle: root
                .join("ios")
                .join("RNEmojiChatInput")
                .join("Assets")
                .join("emoji.bundle"),
            android_bundle: root
                .join("android")
                .join("src")
                .join("main")
                .join("assets")
                .join("emoji"),
        }
    }

    /// iOS first, then Android.
    pub fn destinations(&self) -> [&Path; 2] {
        [self.ios_bundle.as_path(), self.android_bundle.as_path()]
    }
}

/// The project root when none is given: the directory above this tool's crate.
/// The location is fixed at build time, so a binary installed or moved
/// elsewhere needs `--root`.
pub fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".."))
}
