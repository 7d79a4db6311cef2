//! Removal of files left behind by the message/service based scheme.

use std::path::{Path, PathBuf};

use dynparam_core::fs;

use crate::{Result, Target, paths};

/// Delete every obsolete artifact of `target` under `root`.
///
/// Missing files are skipped; any other failure aborts. Returns the paths
/// that were actually removed.
pub fn delete_obsolete(root: &Path, target: &Target) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for relative in paths::obsolete(target) {
        let path = root.join(&relative);
        if fs::remove_if_exists(&path)? {
            removed.push(relative);
        }
    }
    Ok(removed)
}
