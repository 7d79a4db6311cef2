use std::path::{Path, PathBuf};

use crate::{Result, fs};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the package root
    fn relative_path(&self) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file under `root`, creating its directory first
    fn write(&self, root: &Path) -> Result<WriteResult> {
        let relative = self.relative_path();
        if let Some(dir) = relative.parent() {
            fs::ensure_dir(root, dir)?;
        }
        let path = root.join(&relative);

        match self.rules().overwrite {
            Overwrite::Always => {
                fs::write_file(&path, &self.render()?)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    fs::write_file(&path, &self.render()?)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (package markers)
    IfMissing,
}
