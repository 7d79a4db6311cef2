//! The parameter generator: collects declarations and writes every artifact.

use std::path::{Path, PathBuf};

use dynparam_core::{GeneratedFile, WriteResult};
use dynparam_manifest::Manifest;

use crate::{
    Error, ParamDecl, ParamError, Parameter, Result, SourceLocation, Target,
    files::{ConfigHeader, ConfigModule, PackageMarker, ParamsDox, UsageDox},
    lint::{Diagnostic, Linter},
    obsolete::delete_obsolete,
    package::PackageLocator,
    templates::TemplateSet,
};

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Package root the files were written under
    pub root: PathBuf,
    /// Files that were written, relative to `root`
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed
    pub skipped: Vec<PathBuf>,
    /// Obsolete files that were deleted
    pub removed: Vec<PathBuf>,
}

/// A rendered file that has not been written
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the package root
    pub path: String,
    /// File content
    pub content: String,
}

/// Collects parameter declarations in order and generates the
/// configuration artifacts for them.
#[derive(Debug, Default)]
pub struct ParameterGenerator {
    params: Vec<Parameter>,
}

impl ParameterGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a generator from every `[[param]]` entry of a manifest, each
    /// attributed to its line in the manifest file.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let mut generator = Self::new();
        for spec in &manifest.params {
            let source = SourceLocation::new(&manifest.source_file, spec.line);
            generator.add_at(ParamDecl::from(spec), source)?;
        }
        Ok(generator)
    }

    /// Validate and append a parameter, recording the caller as its
    /// declaration site.
    #[track_caller]
    pub fn add(&mut self, decl: ParamDecl) -> std::result::Result<&Parameter, ParamError> {
        self.add_at(decl, SourceLocation::caller())
    }

    /// Validate and append a parameter declared at `source`.
    pub fn add_at(
        &mut self,
        decl: ParamDecl,
        source: SourceLocation,
    ) -> std::result::Result<&Parameter, ParamError> {
        let param = Parameter::new(decl, source)?;
        tracing::trace!(name = param.name(), ty = %param.param_type(), "added parameter");
        self.params.push(param);
        Ok(&self.params[self.params.len() - 1])
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Run the built-in lints.
    pub fn lint(&self) -> Vec<Diagnostic> {
        Linter::new().run(&self.params)
    }

    /// Render every artifact in memory.
    pub fn preview(&self, target: &Target, templates: &TemplateSet) -> Result<Vec<PreviewFile>> {
        self.files(target, templates)
            .iter()
            .map(|file| -> Result<PreviewFile> {
                Ok(PreviewFile {
                    path: file.relative_path().display().to_string(),
                    content: file.render()?,
                })
            })
            .collect()
    }

    /// Generate into the package root found by `locator`.
    ///
    /// Any failure is reported as [`Error::Generate`]. Files written before
    /// the failure are left in place.
    pub fn generate(
        &self,
        target: &Target,
        locator: &PackageLocator,
        templates: &TemplateSet,
    ) -> Result<GenerateResult> {
        locator
            .resolve(&target.package)
            .and_then(|root| self.write_all(target, &root, templates))
            .map_err(|source| Error::Generate {
                name: target.name.clone(),
                source: Box::new(source),
            })
    }

    /// Generate into an explicit package root.
    pub fn generate_into(
        &self,
        target: &Target,
        root: &Path,
        templates: &TemplateSet,
    ) -> Result<GenerateResult> {
        self.write_all(target, root, templates)
            .map_err(|source| Error::Generate {
                name: target.name.clone(),
                source: Box::new(source),
            })
    }

    fn write_all(
        &self,
        target: &Target,
        root: &Path,
        templates: &TemplateSet,
    ) -> Result<GenerateResult> {
        tracing::info!(
            name = %target.name,
            package = %target.package,
            root = %root.display(),
            params = self.params.len(),
            "generating reconfiguration files"
        );

        let mut result = GenerateResult {
            root: root.to_path_buf(),
            ..Default::default()
        };

        for file in self.files(target, templates) {
            let path = file.relative_path();
            match file.write(root)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => {
                    tracing::debug!(path = %path.display(), "kept existing file");
                    result.skipped.push(path);
                }
            }
        }

        result.removed = delete_obsolete(root, target)?;
        Ok(result)
    }

    /// Artifacts in the order they are written.
    fn files<'a>(
        &'a self,
        target: &'a Target,
        templates: &'a TemplateSet,
    ) -> Vec<Box<dyn GeneratedFile + 'a>> {
        vec![
            Box::new(ConfigHeader::new(target, &self.params, templates.header())),
            Box::new(ParamsDox::new(target, &self.params)),
            Box::new(UsageDox::new(target, &self.params)),
            Box::new(ConfigModule::new(target, &self.params, templates.module())),
            Box::new(PackageMarker::new(target)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use dynparam_core::ParamType;

    use super::*;

    #[test]
    fn test_add_records_caller() {
        let mut generator = ParameterGenerator::new();
        let line = line!() + 1;
        let param = generator.add(ParamDecl::new("rate", ParamType::Double, 0, "")).unwrap();

        assert!(param.source().file.ends_with("generator.rs"));
        assert_eq!(param.source().line, line);
    }

    #[test]
    fn test_from_manifest_reports_rejected_declaration() {
        let manifest: Manifest = "[generator]\npackage = \"nav\"\nnode = \"planner\"\nname = \"Planner\"\n\
             [[param]]\nname = \"enabled\"\ntype = \"bool\"\ndefault = 2\n"
            .parse()
            .unwrap();
        let err = ParameterGenerator::from_manifest(&manifest).unwrap_err();

        assert!(matches!(
            err,
            Error::Param(ParamError::Type { field: "default", .. })
        ));
        assert_eq!(
            err.to_string(),
            "'enabled' has type bool, but default is the integer 2"
        );
    }

    #[test]
    fn test_failed_add_leaves_list_unchanged() {
        let mut generator = ParameterGenerator::new();
        generator.add(ParamDecl::new("a", ParamType::Int, 0, "")).unwrap();
        let err = generator
            .add(ParamDecl::new("b", ParamType::Str, 0, "").with_max("z"))
            .unwrap_err();

        assert!(matches!(err, ParamError::BoundsOnString { .. }));
        assert_eq!(generator.parameters().len(), 1);
    }

    #[test]
    fn test_preview_order() {
        let mut generator = ParameterGenerator::new();
        generator.add(ParamDecl::new("rate", ParamType::Double, 0, "loop rate")).unwrap();

        let target = Target::new("nav_tuning", "planner", "Planner");
        let paths: Vec<String> = generator
            .preview(&target, &TemplateSet::builtin())
            .unwrap()
            .into_iter()
            .map(|f| f.path.replace('\\', "/"))
            .collect();

        assert_eq!(
            paths,
            vec![
                "cfg/cpp/nav_tuning/PlannerConfig.h",
                "dox/PlannerConfig.dox",
                "dox/PlannerConfig-usage.dox",
                "src/nav_tuning/cfg/PlannerConfig.py",
                "src/nav_tuning/cfg/__init__.py",
            ]
        );
    }
}
