//! Python configuration module: `src/<package>/cfg/<Name>Config.py`.

use std::{borrow::Cow, path::PathBuf};

use dynparam_core::{GeneratedFile, Result, TemplateVars, python_str_literal};

use crate::{Parameter, Target, paths, templates::TemplateSource};

/// The configuration module, rendered from the `ConfigType.py` template.
pub struct ConfigModule<'a> {
    target: &'a Target,
    params: &'a [Parameter],
    template: &'a TemplateSource,
}

impl<'a> ConfigModule<'a> {
    pub fn new(target: &'a Target, params: &'a [Parameter], template: &'a TemplateSource) -> Self {
        Self {
            target,
            params,
            template,
        }
    }
}

struct ModuleVars<'a> {
    name: &'a str,
    pkgname: &'a str,
    pycfgdata: String,
}

impl TemplateVars for ModuleVars<'_> {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name)),
            "pkgname" => Some(Cow::Borrowed(self.pkgname)),
            "pycfgdata" => Some(Cow::Borrowed(&self.pycfgdata)),
            _ => None,
        }
    }
}

impl GeneratedFile for ConfigModule<'_> {
    fn relative_path(&self) -> PathBuf {
        paths::config_module(self.target)
    }

    fn render(&self) -> Result<String> {
        let vars = ModuleVars {
            name: &self.target.name,
            pkgname: &self.target.package,
            pycfgdata: pycfgdata(self.params),
        };
        self.template.template().substitute(&vars)
    }
}

/// The parameter records as a Python list of dicts.
///
/// Keys appear in a fixed order: name, type, default, level, description,
/// min, max, srcline, srcfile, edit_method, ctype.
pub fn pycfgdata(params: &[Parameter]) -> String {
    let entries: Vec<String> = params.iter().map(record).collect();
    format!("[{}]", entries.join(", "))
}

fn record(param: &Parameter) -> String {
    let fields = [
        ("name", python_str_literal(param.name())),
        ("type", python_str_literal(param.param_type().as_str())),
        ("default", param.default().to_python()),
        ("level", param.level().to_string()),
        ("description", python_str_literal(param.description())),
        ("min", param.min().to_python()),
        ("max", param.max().to_python()),
        ("srcline", param.source().line.to_string()),
        ("srcfile", python_str_literal(&param.source().file)),
        ("edit_method", python_str_literal(param.edit_method())),
        ("ctype", python_str_literal(param.ctype())),
    ];

    let body: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("'{}': {}", key, value))
        .collect();
    format!("{{{}}}", body.join(", "))
}
