//! Check operation - manifest validation.

use std::path::Path;

use dynparam_codegen::{ParameterGenerator, Target};
use dynparam_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Validates every parameter declaration and runs the lints. A rejected
/// declaration is an error; lint findings are warnings.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let target = Target::from(&manifest.generator);
    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        config_name: target.config_name(),
        package: target.package,
        param_count: manifest.params.len(),
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    match ParameterGenerator::from_manifest(manifest) {
        Ok(generator) => {
            report.warnings = generator.lint().iter().map(ToString::to_string).collect();
        }
        Err(e) => report.errors.push(e.to_string()),
    }

    report
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn manifest(params: &str) -> Manifest {
        let src = format!(
            "[generator]\npackage = \"nav_tuning\"\nnode = \"planner\"\nname = \"Planner\"\n{}",
            params
        );
        Manifest::from_str(&src).unwrap()
    }

    #[test]
    fn test_valid_manifest() {
        let m = manifest(
            "[[param]]\nname = \"rate\"\ntype = \"double\"\ndescription = \"loop rate\"\n",
        );
        let report = check(&m, Path::new("params.toml"));

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.config_name, "PlannerConfig");
        assert_eq!(report.param_count, 1);
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let m = manifest(
            "[[param]]\nname = \"enabled\"\ntype = \"bool\"\ndescription = \"x\"\ndefault = \"yes\"\n",
        );
        let report = check(&m, Path::new("params.toml"));

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec!["'enabled' has type bool, but default is the string \"yes\"".to_string()]
        );
    }

    #[test]
    fn test_duplicates_are_warnings() {
        let m = manifest(
            "[[param]]\nname = \"rate\"\ntype = \"double\"\ndescription = \"a\"\n\
             [[param]]\nname = \"rate\"\ntype = \"int\"\ndescription = \"b\"\n",
        );
        let report = check(&m, Path::new("params.toml"));

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("duplicate parameter 'rate'"));
    }
}
