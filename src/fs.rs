use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Outcome of emptying one destination directory.
#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: usize,
    pub failed: Vec<PathBuf>,
}

pub fn prepare_destination(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Removes every direct child of `dir`. Entries that cannot be removed are
/// logged and skipped; only failing to list `dir` itself is an error.
pub fn clean_destination(dir: &Path) -> Result<CleanReport> {
    clean_destination_with(dir, remove_entry)
}

fn clean_destination_with(
    dir: &Path,
    remove: fn(&Path) -> std::io::Result<()>,
) -> Result<CleanReport> {
    let entries = fs::read_dir(dir).map_err(|source| Error::CleanList {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut report = CleanReport::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("could not delete entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        match remove(&path) {
            Ok(()) => {
                log::debug!("Removed {}", path.display());
                report.removed += 1;
            }
            Err(e) => {
                log::warn!("could not delete {}: {}", path.display(), e);
                report.failed.push(path);
            }
        }
    }
    Ok(report)
}

// Symlinks are unlinked, never followed.
fn remove_entry(path: &Path) -> std::io::Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

pub fn copy_asset(source: &Path, file_name: &str, dest_dir: &Path) -> Result<PathBuf> {
    let output_path = dest_dir.join(file_name);
    log::debug!("Copying asset: {} -> {}", source.display(), output_path.display());
    fs::copy(source, &output_path).map_err(|e| Error::Copy {
        from: source.to_path_buf(),
        to: output_path.clone(),
        source: e,
    })?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn prepare_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");
        prepare_destination(&dir).unwrap();
        prepare_destination(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn clean_removes_files_and_nested_dirs() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("old.png"), b"x").unwrap();
        fs::write(dir.join(".hidden"), b"x").unwrap();
        fs::create_dir_all(dir.join("nested").join("deeper")).unwrap();
        fs::write(dir.join("nested").join("deeper").join("f"), b"x").unwrap();

        let report = clean_destination(dir).unwrap();

        assert_eq!(report.removed, 3);
        assert!(report.failed.is_empty());
        assert_eq!(fs::read_dir(dir).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn clean_unlinks_symlink_without_touching_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.png"), b"keep").unwrap();
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();
        std::os::unix::fs::symlink(&target, dest.join("link")).unwrap();

        clean_destination(&dest).unwrap();

        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
        assert!(target.join("keep.png").exists());
    }

    fn refuse_locked(path: &Path) -> std::io::Result<()> {
        if path.file_name().is_some_and(|n| n == "locked.png") {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "locked",
            ));
        }
        remove_entry(path)
    }

    #[test]
    fn clean_skips_entries_it_cannot_remove() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("bundle");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.png"), b"x").unwrap();
        fs::write(dir.join("locked.png"), b"x").unwrap();
        fs::create_dir(dir.join("sub")).unwrap();
        fs::write(dir.join("z.gif"), b"x").unwrap();

        let report = clean_destination_with(&dir, refuse_locked).unwrap();

        assert_eq!(report.removed, 3);
        assert_eq!(report.failed, vec![dir.join("locked.png")]);
        let left: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(left, vec![std::ffi::OsString::from("locked.png")]);

        // Copying still works into the partially cleaned directory.
        let source = tmp.path().join("new.png");
        fs::write(&source, b"new").unwrap();
        copy_asset(&source, "new.png", &dir).unwrap();
        assert_eq!(fs::read(dir.join("new.png")).unwrap(), b"new");
    }

    #[test]
    fn clean_of_missing_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = clean_destination(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::CleanList { .. }));
    }

    #[test]
    fn copy_keeps_name_and_bytes() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("wink.PNG");
        fs::write(&src, [0u8, 159, 146, 150]).unwrap();
        let dest = tmp.path().join("out");
        fs::create_dir(&dest).unwrap();

        let written = copy_asset(&src, "wink.PNG", &dest).unwrap();

        assert_eq!(written, dest.join("wink.PNG"));
        assert_eq!(fs::read(written).unwrap(), vec![0u8, 159, 146, 150]);
    }

    #[test]
    fn copy_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("smile.png");
        fs::write(&src, b"x").unwrap();
        let err = copy_asset(&src, "smile.png", &tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::Copy { .. }));
    }
}
