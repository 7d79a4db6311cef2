//! Clean operation - remove files of the message based scheme.

use std::path::Path;

use dynparam_codegen::{Target, delete_obsolete, paths};
use dynparam_manifest::Manifest;
use eyre::{Context, Result};

use super::locator;
use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Explicit package root.
    pub package_dir: Option<&'a Path>,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
pub fn clean(manifest: &Manifest, opts: CleanOptions) -> Result<CleanReport> {
    let target = Target::from(&manifest.generator);
    let root = locator(opts.package_dir)
        .resolve(&target.package)
        .wrap_err("Failed to locate package")?;

    let deleted = if opts.dry_run {
        paths::obsolete(&target)
            .into_iter()
            .filter(|path| root.join(path).is_file())
            .collect()
    } else {
        delete_obsolete(&root, &target).wrap_err("Failed to remove obsolete files")?
    };

    Ok(CleanReport {
        dry_run: opts.dry_run,
        root,
        deleted,
    })
}
