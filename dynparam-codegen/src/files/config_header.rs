//! C++ configuration type: `cfg/cpp/<package>/<Name>Config.h`.

use std::{borrow::Cow, path::PathBuf};

use dynparam_core::{
    GeneratedFile, Result, Template, TemplateVars, escape_c_string, escape_line_path,
};

use crate::{
    Parameter, Target,
    builder::{CodeBuilder, LINE_DIRECTIVE},
    paths,
    templates::TemplateSource,
};

/// The configuration header, rendered from the `ConfigType.h` template.
pub struct ConfigHeader<'a> {
    target: &'a Target,
    params: &'a [Parameter],
    template: &'a TemplateSource,
}

impl<'a> ConfigHeader<'a> {
    pub fn new(target: &'a Target, params: &'a [Parameter], template: &'a TemplateSource) -> Self {
        Self {
            target,
            params,
            template,
        }
    }

    fn members(&self) -> String {
        let mut builder = CodeBuilder::new();
        for param in self.params {
            builder.push_attributed(
                param.source(),
                &format!("{} {};", param.ctype(), param.name()),
            );
        }
        builder.build_fragment()
    }

    fn param_descriptions(&self) -> String {
        let mut builder = CodeBuilder::new();
        for param in self.params {
            let name = param.name();
            let source = param.source();
            builder
                .push_attributed(source, &format!("__min__.{} = {};", name, param.min().to_cpp()))
                .push_attributed(source, &format!("__max__.{} = {};", name, param.max().to_cpp()))
                .push_attributed(
                    source,
                    &format!("__default__.{} = {};", name, param.default().to_cpp()),
                )
                .push_attributed(source, &self.registration(param));
        }
        builder.build_fragment()
    }

    fn registration(&self, param: &Parameter) -> String {
        format!(
            "__param_descriptions__.push_back({}Config::AbstractParamDescriptionConstPtr(new {}Config::ParamDescription<{}>(\"{}\", \"{}\", {}, \"{}\", \"{}\", &{}Config::{})));",
            self.target.name,
            self.target.name,
            param.ctype(),
            param.name(),
            param.param_type(),
            param.level(),
            escape_c_string(param.description()),
            escape_c_string(param.edit_method()),
            self.target.name,
            param.name(),
        )
    }
}

/// Values shared by every line of the header template.
struct HeaderVars {
    uname: String,
    configname: String,
    pkgname: String,
    members: String,
    paramdescr: String,
}

impl TemplateVars for HeaderVars {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = match key {
            "uname" => &self.uname,
            "configname" => &self.configname,
            "pkgname" => &self.pkgname,
            "members" => &self.members,
            "paramdescr" => &self.paramdescr,
            "doline" => return Some(Cow::Borrowed(LINE_DIRECTIVE)),
            _ => return None,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}

/// Header values plus the position of the template line being filled.
///
/// `linenum` is the number of the line after the current one, so that a
/// `#line` directive written on a template line points the compiler back
/// at the template for the lines that follow.
struct LineVars<'a> {
    header: &'a HeaderVars,
    linenum: usize,
    filename: &'a str,
}

impl TemplateVars for LineVars<'_> {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "linenum" => Some(Cow::Owned(self.linenum.to_string())),
            "filename" => Some(Cow::Borrowed(self.filename)),
            _ => self.header.get(key),
        }
    }
}

impl GeneratedFile for ConfigHeader<'_> {
    fn relative_path(&self) -> PathBuf {
        paths::config_header(self.target)
    }

    fn render(&self) -> Result<String> {
        let vars = HeaderVars {
            uname: self.target.name.to_uppercase(),
            configname: self.target.name.clone(),
            pkgname: self.target.package.clone(),
            members: self.members(),
            paramdescr: self.param_descriptions(),
        };
        let filename = escape_line_path(self.template.path());

        let mut out = String::with_capacity(self.template.text().len());
        for (index, line) in self.template.text().split_inclusive('\n').enumerate() {
            let line_vars = LineVars {
                header: &vars,
                linenum: index + 2,
                filename: &filename,
            };
            let rendered = Template::new(self.template.path(), line)
                .starting_at_line(index + 1)
                .substitute(&line_vars)?;
            out.push_str(&rendered);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use dynparam_core::{Error, ParamType};

    use super::*;
    use crate::{ParamDecl, SourceLocation};

    fn target() -> Target {
        Target::new("nav_tuning", "planner", "Planner")
    }

    fn params() -> Vec<Parameter> {
        vec![
            Parameter::new(
                ParamDecl::new("rate", ParamType::Double, 0, "loop rate").with_default(10.0),
                SourceLocation::new("cfg/Planner.cfg", 7),
            )
            .unwrap(),
            Parameter::new(
                ParamDecl::new("enabled", ParamType::Bool, 1, "say \"hi\"").with_default(true),
                SourceLocation::new("cfg/Planner.cfg", 8),
            )
            .unwrap(),
        ]
    }

    fn render(template: &str) -> Result<String> {
        let target = target();
        let params = params();
        let source = TemplateSource::new(r"C:\tpl\ConfigType.h", template.to_string());
        ConfigHeader::new(&target, &params, &source).render()
    }

    #[test]
    fn test_line_numbers_point_past_the_directive() {
        let out = render("first\n${doline} ${linenum} \"${filename}\"\nthird\n").unwrap();
        assert_eq!(out, "first\n#line 3 \"C:\\\\tpl\\\\ConfigType.h\"\nthird\n");
    }

    #[test]
    fn test_names_and_escaped_dollar() {
        let out = render("${uname} ${configname}Config ${pkgname} $$x").unwrap();
        assert_eq!(out, "PLANNER PlannerConfig nav_tuning $x");
    }

    #[test]
    fn test_members() {
        let out = render("${members}").unwrap();
        assert_eq!(
            out,
            "#line 7 \"cfg/Planner.cfg\"\n      double rate;\n#line 8 \"cfg/Planner.cfg\"\n      bool enabled;"
        );
    }

    #[test]
    fn test_param_descriptions() {
        let out = render("${paramdescr}").unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "#line 7 \"cfg/Planner.cfg\"");
        assert_eq!(
            lines[1],
            "      __min__.rate = -std::numeric_limits<double>::infinity();"
        );
        assert_eq!(
            lines[3],
            "      __max__.rate = std::numeric_limits<double>::infinity();"
        );
        assert_eq!(lines[5], "      __default__.rate = 10.0;");
        assert_eq!(
            lines[7],
            "      __param_descriptions__.push_back(PlannerConfig::AbstractParamDescriptionConstPtr(new PlannerConfig::ParamDescription<double>(\"rate\", \"double\", 0, \"loop rate\", \"\", &PlannerConfig::rate)));"
        );
        assert_eq!(lines[9], "      __min__.enabled = 0;");
        assert_eq!(lines[11], "      __max__.enabled = 1;");
        assert_eq!(lines[13], "      __default__.enabled = 1;");
        assert!(lines[15].contains("\"enabled\", \"bool\", 1, \"say \\\"hi\\\"\""));
    }

    #[test]
    fn test_unknown_placeholder_reports_template_line() {
        let err = render("ok\nok\n${nope}\n").unwrap_err();
        match err {
            Error::MissingPlaceholder {
                placeholder, line, ..
            } => {
                assert_eq!(placeholder, "nope");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builtin_template_renders() {
        let target = target();
        let params = params();
        let set = crate::TemplateSet::builtin();
        let out = ConfigHeader::new(&target, &params, set.header()).render().unwrap();

        assert!(out.contains("namespace nav_tuning"));
        assert!(out.contains("class PlannerConfig\n"));
        assert!(out.contains("#ifndef __nav_tuning__PLANNERCONFIG_H__"));
        assert!(out.contains("      double rate;"));
        assert!(!out.contains("${"));
    }
}
