//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Lint findings.
    pub warnings: Vec<String>,

    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Package root.
    pub root: PathBuf,
    /// Files written, relative to the root.
    pub written: Vec<PathBuf>,
    /// Existing files left untouched.
    pub skipped: Vec<PathBuf>,
    /// Obsolete files deleted.
    pub removed: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => Self::render_written(out, written),
            GenerationResult::Preview(files) => Self::render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Package", &written.root.display().to_string());
        out.section("Generated");
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }

        if !written.skipped.is_empty() {
            out.section("Kept");
            for path in &written.skipped {
                out.list_item(&path.display().to_string());
            }
        }

        if !written.removed.is_empty() {
            out.newline();
            out.section("Removed obsolete");
            for path in &written.removed {
                out.removed_item(&path.display().to_string());
            }
        }
    }

    fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
