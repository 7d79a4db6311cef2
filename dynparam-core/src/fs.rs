//! Filesystem helpers for writing into a package tree.
//!
//! Several generator processes may run in parallel against overlapping
//! directory trees (one per build target), so directory creation has to
//! tolerate another process winning the race.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Ensure `root/relative` exists as a directory, creating every missing
/// segment.
pub fn ensure_dir(root: &Path, relative: impl AsRef<Path>) -> Result<PathBuf> {
    let path = root.join(relative);
    ensure_dir_abs(&path)?;
    Ok(path)
}

/// Ensure `path` exists as a directory, creating every missing segment.
///
/// Succeeds silently when the directory already exists. Fails when a
/// segment exists as something other than a directory. A failed
/// `create_dir` is re-checked once, in case a concurrent generator
/// created the directory in between.
pub fn ensure_dir_abs(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            ensure_dir_abs(parent)?;
        }
    }

    create_dir_with(path, |p| std::fs::create_dir(p))
}

fn create_dir_with(path: &Path, create: impl FnOnce(&Path) -> std::io::Result<()>) -> Result<()> {
    match create(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(_) if path.is_dir() => {
            tracing::debug!(path = %path.display(), "directory created concurrently");
            Ok(())
        }
        Err(_) if path.exists() => Err(Error::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Error::io(path, source)),
    }
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Remove a file, treating "not found" as success.
///
/// Returns whether a file was actually removed.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed file");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs, io,
        sync::{Arc, Barrier},
        thread,
    };

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = TempDir::new().unwrap();

        let path = ensure_dir(temp.path(), Path::new("cfg").join("cpp").join("pkg")).unwrap();

        assert!(path.is_dir());
        assert_eq!(path, temp.path().join("cfg").join("cpp").join("pkg"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();

        ensure_dir(temp.path(), "dox").unwrap();
        ensure_dir(temp.path(), "dox").unwrap();

        assert!(temp.path().join("dox").is_dir());
    }

    #[test]
    fn test_ensure_dir_empty_relative_is_root() {
        let temp = TempDir::new().unwrap();
        ensure_dir(temp.path(), "").unwrap();
        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_ensure_dir_rejects_file_in_the_way() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dox"), "not a dir").unwrap();

        let err = ensure_dir(temp.path(), "dox").unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_ensure_dir_rejects_file_as_intermediate_segment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cfg"), "not a dir").unwrap();

        let err = ensure_dir(temp.path(), Path::new("cfg").join("cpp")).unwrap_err();
        match err {
            Error::NotADirectory { path } => assert_eq!(path, temp.path().join("cfg")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failed_create_rechecks_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dox");

        let result = create_dir_with(&path, |p| {
            fs::create_dir(p)?;
            Err(io::Error::from(io::ErrorKind::AlreadyExists))
        });

        assert!(result.is_ok());
        assert!(path.is_dir());
    }

    #[test]
    fn test_failed_create_without_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dox");

        let err = create_dir_with(&path, |_| Err(io::Error::from(io::ErrorKind::PermissionDenied)))
            .unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_concurrent_ensure_dir() {
        let temp = TempDir::new().unwrap();
        let root = Arc::new(temp.path().to_path_buf());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let root = Arc::clone(&root);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    ensure_dir(&root, Path::new("a").join("b").join("c").join("d"))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert!(temp.path().join("a/b/c/d").is_dir());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_missing_parent_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("test.txt");

        let err = write_file(&path, "x").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_remove_if_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("old.msg");
        fs::write(&path, "").unwrap();

        assert!(remove_if_exists(&path).unwrap());
        assert!(!path.exists());
        assert!(!remove_if_exists(&path).unwrap());
    }

    #[test]
    fn test_remove_if_exists_propagates_other_errors() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("msg");
        fs::create_dir(&dir).unwrap();

        // Removing a directory with remove_file is never "not found".
        assert!(remove_if_exists(&dir).is_err());
    }
}
