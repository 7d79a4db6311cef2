//! Generate operation - write every artifact for a manifest.

use std::path::Path;

use dynparam_codegen::{ParameterGenerator, TemplateSet, Target};
use dynparam_manifest::Manifest;
use eyre::{Context, Result};

use super::{locator, progress_line};
use crate::reports::{GenerateReport, GenerationResult, Output, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Path the manifest was read from; relative template paths resolve
    /// against its directory.
    pub config_path: &'a Path,
    /// Explicit package root.
    pub package_dir: Option<&'a Path>,
    /// Template override directory; takes precedence over the manifest.
    pub templates: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The progress line goes to `out` before any file is written, so a failed
/// run still names the target it was working on.
pub fn generate(
    manifest: &Manifest,
    opts: GenerateOptions,
    out: &mut dyn Output,
) -> Result<GenerateReport> {
    let generator = ParameterGenerator::from_manifest(manifest)
        .wrap_err_with(|| format!("Invalid parameter in {}", manifest.source_file))?;
    let target = Target::from(&manifest.generator);
    let templates = templates(manifest, &opts)?;

    let warnings = generator.lint().iter().map(ToString::to_string).collect();

    let result = if opts.dry_run {
        let files = generator
            .preview(&target, &templates)
            .wrap_err("Failed to render files")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        out.preformatted(&progress_line(&target));
        out.newline();
        let result = generator
            .generate(&target, &locator(opts.package_dir), &templates)
            .wrap_err("Failed to generate files")?;
        GenerationResult::Written(WrittenResult {
            root: result.root,
            written: result.written,
            skipped: result.skipped,
            removed: result.removed,
        })
    };

    Ok(GenerateReport {
        warnings,
        result,
    })
}

fn templates(manifest: &Manifest, opts: &GenerateOptions) -> Result<TemplateSet> {
    let dir = match (opts.templates, &manifest.generator.templates) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) => opts
            .config_path
            .parent()
            .map(|base| base.join(dir))
            .unwrap_or_else(|| dir.clone()),
        (None, None) => return Ok(TemplateSet::builtin()),
    };

    tracing::debug!(dir = %dir.display(), "loading templates");
    TemplateSet::from_dir(&dir)
        .wrap_err_with(|| format!("Failed to load templates from {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use tempfile::TempDir;

    use super::*;
    use crate::reports::RecordingOutput;

    const MANIFEST: &str = r#"
[generator]
package = "nav_tuning"
node = "planner"
name = "Planner"

[[param]]
name = "rate"
type = "double"
description = ""
default = 10.0
"#;

    fn options(root: &Path, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            config_path: Path::new("params.toml"),
            package_dir: Some(root),
            templates: None,
            dry_run,
        }
    }

    #[test]
    fn test_generate_writes_and_reports() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let mut out = RecordingOutput::default();
        let report = generate(&manifest, options(dir.path(), false), &mut out).unwrap();

        assert_eq!(
            out.stdout,
            vec!["Generating reconfiguration files for Planner in nav_tuning", ""]
        );
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("empty-description"));
        match report.result {
            GenerationResult::Written(written) => assert_eq!(written.written.len(), 5),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(dir.path().join("dox/PlannerConfig.dox").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let mut out = RecordingOutput::default();
        let report = generate(&manifest, options(dir.path(), true), &mut out).unwrap();

        assert!(out.stdout.is_empty());

        match report.result {
            GenerationResult::Preview(files) => assert_eq!(files.len(), 5),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_template_flag_overrides_builtin() {
        let dir = TempDir::new().unwrap();
        let templates = TempDir::new().unwrap();
        fs::write(
            templates.path().join("ConfigType.py"),
            "# ${name} ${pkgname}\n${pycfgdata}\n",
        )
        .unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        generate(
            &manifest,
            GenerateOptions {
                templates: Some(templates.path()),
                ..options(dir.path(), false)
            },
            &mut RecordingOutput::default(),
        )
        .unwrap();

        let module =
            fs::read_to_string(dir.path().join("src/nav_tuning/cfg/PlannerConfig.py")).unwrap();
        assert!(module.starts_with("# Planner nav_tuning\n[{'name': 'rate'"));
    }

    #[test]
    fn test_progress_precedes_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let mut out = RecordingOutput::default();
        let result = generate(&manifest, options(&missing, false), &mut out);

        assert!(result.is_err());
        assert_eq!(
            out.stdout[0],
            "Generating reconfiguration files for Planner in nav_tuning"
        );
    }
}
