//! Package root lookup.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Environment variable holding a path list searched for packages.
pub const PACKAGE_PATH_ENV: &str = "DYNPARAM_PACKAGE_PATH";

/// Where to find the directory of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageLocator {
    /// Use this directory regardless of the package name.
    Root(PathBuf),
    /// Look for a directory named after the package in each entry, or an
    /// entry that is itself named after the package.
    Search(Vec<PathBuf>),
}

impl PackageLocator {
    pub fn root(path: impl Into<PathBuf>) -> Self {
        PackageLocator::Root(path.into())
    }

    /// Search the entries of `DYNPARAM_PACKAGE_PATH`, or the current
    /// directory when the variable is unset or empty.
    pub fn from_env() -> Self {
        let entries: Vec<PathBuf> = env::var_os(PACKAGE_PATH_ENV)
            .map(|value| env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default();

        if entries.is_empty() {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            PackageLocator::Search(vec![cwd])
        } else {
            PackageLocator::Search(entries)
        }
    }

    /// Resolve the root directory of `package`.
    pub fn resolve(&self, package: &str) -> Result<PathBuf> {
        match self {
            PackageLocator::Root(root) => {
                if root.is_dir() {
                    Ok(root.clone())
                } else {
                    Err(not_found(package, std::slice::from_ref(root)))
                }
            }
            PackageLocator::Search(entries) => entries
                .iter()
                .find_map(|entry| candidate(entry, package))
                .ok_or_else(|| not_found(package, entries)),
        }
    }
}

fn candidate(entry: &Path, package: &str) -> Option<PathBuf> {
    if entry.file_name().is_some_and(|name| name == package) && entry.is_dir() {
        return Some(entry.to_path_buf());
    }
    let nested = entry.join(package);
    nested.is_dir().then_some(nested)
}

fn not_found(package: &str, searched: &[PathBuf]) -> Error {
    Error::PackageNotFound {
        package: package.to_string(),
        searched: searched.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_root_is_used_as_is() {
        let dir = TempDir::new().unwrap();
        let locator = PackageLocator::root(dir.path());
        assert_eq!(locator.resolve("anything").unwrap(), dir.path());
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let dir = TempDir::new().unwrap();
        let locator = PackageLocator::root(dir.path().join("gone"));
        assert!(matches!(
            locator.resolve("nav_tuning"),
            Err(Error::PackageNotFound { .. })
        ));
    }

    #[test]
    fn test_search_finds_nested_package() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::create_dir(second.path().join("nav_tuning")).unwrap();

        let locator =
            PackageLocator::Search(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(
            locator.resolve("nav_tuning").unwrap(),
            second.path().join("nav_tuning")
        );
    }

    #[test]
    fn test_search_accepts_entry_named_after_package() {
        let dir = TempDir::new().unwrap();
        let pkg = dir.path().join("nav_tuning");
        fs::create_dir(&pkg).unwrap();

        let locator = PackageLocator::Search(vec![pkg.clone()]);
        assert_eq!(locator.resolve("nav_tuning").unwrap(), pkg);
    }

    #[test]
    fn test_search_reports_every_entry() {
        let dir = TempDir::new().unwrap();
        let locator = PackageLocator::Search(vec![dir.path().to_path_buf()]);
        match locator.resolve("nav_tuning") {
            Err(Error::PackageNotFound { package, searched }) => {
                assert_eq!(package, "nav_tuning");
                assert_eq!(searched, vec![dir.path().to_path_buf()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
