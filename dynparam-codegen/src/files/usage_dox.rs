//! Launch-file usage snippet: `dox/<Name>Config-usage.dox`.

use std::path::PathBuf;

use dynparam_core::{GeneratedFile, Result, escape_xml_attr};

use crate::{Parameter, Target, builder::CodeBuilder, paths};

pub struct UsageDox<'a> {
    target: &'a Target,
    params: &'a [Parameter],
}

impl<'a> UsageDox<'a> {
    pub fn new(target: &'a Target, params: &'a [Parameter]) -> Self {
        Self { target, params }
    }
}

impl GeneratedFile for UsageDox<'_> {
    fn relative_path(&self) -> PathBuf {
        paths::usage_dox(self.target)
    }

    fn render(&self) -> Result<String> {
        let node = escape_xml_attr(&self.target.node);
        let mut builder = CodeBuilder::new();
        builder
            .push_line("\\subsubsection usage Usage")
            .push_line("\\verbatim")
            .push_line(format!(
                "<node name=\"{}\" pkg=\"{}\" type=\"{}\">",
                node,
                escape_xml_attr(&self.target.package),
                node
            ));

        for param in self.params {
            builder.push_line(format!(
                "  <param name=\"{}\" type=\"{}\" value=\"{}\" />",
                escape_xml_attr(param.name()),
                param.param_type(),
                escape_xml_attr(&param.default().to_doc()),
            ));
        }

        builder
            .push_line("</node>")
            .push_line("\\endverbatim")
            .push_blank();
        Ok(builder.build())
    }
}
