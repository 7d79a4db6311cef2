//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from removing obsolete files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Package root.
    pub root: PathBuf,
    /// Deleted files, relative to the root.
    pub deleted: Vec<PathBuf>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.deleted.is_empty() {
            out.preformatted("No obsolete files found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.deleted {
            out.removed_item(&self.root.join(path).display().to_string());
        }
    }
}
