//! Host templates for the configuration header and module.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use dynparam_core::{Error as CoreError, Template};

use crate::Result;

/// File name of the configuration header template.
pub const CONFIG_TYPE_H: &str = "ConfigType.h";

/// File name of the configuration module template.
pub const CONFIG_TYPE_PY: &str = "ConfigType.py";

/// Environment variable naming a template override directory.
pub const TEMPLATE_DIR_ENV: &str = "DYNPARAM_TEMPLATE_DIR";

const BUILTIN_H_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/ConfigType.h");
const BUILTIN_PY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/ConfigType.py");

/// A template text together with the path it was loaded from.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    path: String,
    text: Cow<'static, str>,
}

impl TemplateSource {
    pub fn new(path: impl Into<String>, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        Ok(Self::new(path.display().to_string(), text))
    }

    /// Path of the template, as written into `#line` directives.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn template(&self) -> Template<'_> {
        Template::new(&self.path, &self.text)
    }
}

/// The pair of host templates used by a generation run.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    header: TemplateSource,
    module: TemplateSource,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    pub fn new(header: TemplateSource, module: TemplateSource) -> Self {
        Self { header, module }
    }

    /// Templates shipped with this crate.
    pub fn builtin() -> Self {
        Self {
            header: TemplateSource::new(BUILTIN_H_PATH, include_str!("../templates/ConfigType.h")),
            module: TemplateSource::new(
                BUILTIN_PY_PATH,
                include_str!("../templates/ConfigType.py"),
            ),
        }
    }

    /// Load templates from `dir`, falling back to the built-in copy for
    /// any file the directory does not contain.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            let source = std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "template directory does not exist",
            );
            return Err(CoreError::io(dir, source).into());
        }

        let builtin = Self::builtin();
        let header = load_or(dir.join(CONFIG_TYPE_H), builtin.header)?;
        let module = load_or(dir.join(CONFIG_TYPE_PY), builtin.module)?;
        Ok(Self { header, module })
    }

    pub fn header(&self) -> &TemplateSource {
        &self.header
    }

    pub fn module(&self) -> &TemplateSource {
        &self.module
    }
}

fn load_or(path: PathBuf, fallback: TemplateSource) -> Result<TemplateSource> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "using template override");
        TemplateSource::load(&path)
    } else {
        Ok(fallback)
    }
}
