//! Parameter reference: `dox/<Name>Config.dox`.

use std::path::PathBuf;

use dynparam_core::{GeneratedFile, Result};

use crate::{Parameter, Target, builder::CodeBuilder, paths};

pub struct ParamsDox<'a> {
    target: &'a Target,
    params: &'a [Parameter],
}

impl<'a> ParamsDox<'a> {
    pub fn new(target: &'a Target, params: &'a [Parameter]) -> Self {
        Self { target, params }
    }
}

impl GeneratedFile for ParamsDox<'_> {
    fn relative_path(&self) -> PathBuf {
        paths::params_dox(self.target)
    }

    fn render(&self) -> Result<String> {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("\\subsubsection parameters ROS parameters")
            .push_blank()
            .push_line("Reads and maintains the following parameters on the ROS server")
            .push_blank();

        for param in self.params {
            builder.push_line(format!(
                "- \\b \"~{}\" : \\b [{}] {} min: {}, default: {}, max: {}",
                param.name(),
                param.param_type(),
                single_line(param.description()),
                single_line(&param.min().to_doc()),
                single_line(&param.default().to_doc()),
                single_line(&param.max().to_doc()),
            ));
        }

        builder.push_blank();
        Ok(builder.build())
    }
}

/// Each record owns exactly one line of the reference.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
