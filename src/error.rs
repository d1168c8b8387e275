//! Error types for emoji-sync

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read manifest {}: {}", .path.display(), .source)]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse manifest {}: {}", .path.display(), .source)]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("manifest {} is not a JSON object", .0.display())]
    ManifestShape(PathBuf),

    #[error("could not write manifest {}: {}", .path.display(), .source)]
    ManifestWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not list source directory {}: {}", .path.display(), .source)]
    SourceList {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("could not list destination directory {}: {}", .path.display(), .source)]
    CleanList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file name of {} is not valid UTF-8", .0.display())]
    FileName(PathBuf),

    #[error("could not copy {} to {}: {}", .from.display(), .to.display(), .source)]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("could not create directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
