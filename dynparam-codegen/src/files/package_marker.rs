//! `__init__.py` next to the configuration module.

use std::path::PathBuf;

use dynparam_core::{FileRules, GeneratedFile, Overwrite, Result};

use crate::{Target, paths};

/// Empty Python package marker. An existing marker is never touched.
pub struct PackageMarker<'a> {
    target: &'a Target,
}

impl<'a> PackageMarker<'a> {
    pub fn new(target: &'a Target) -> Self {
        Self { target }
    }
}

impl GeneratedFile for PackageMarker<'_> {
    fn relative_path(&self) -> PathBuf {
        paths::package_marker(self.target)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> Result<String> {
        Ok(String::new())
    }
}
