//! Built-in lints.

use std::collections::HashMap;

use dynparam_manifest::{is_cpp_keyword, validate_identifier};

use super::{Diagnostic, Lint};
use crate::Parameter;

/// Warns when two parameters share a name.
///
/// The generated header would then declare the same member twice, which
/// the C++ compiler rejects at the second declaration.
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn check(&self, params: &[Parameter], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &Parameter> = HashMap::new();
        for param in params {
            if let Some(first) = seen.get(param.name()) {
                diagnostics.push(Diagnostic::new(
                    self.name(),
                    format!(
                        "duplicate parameter '{}' (first declared at {})",
                        param.name(),
                        first.source()
                    ),
                    param.source().clone(),
                ));
            } else {
                seen.insert(param.name(), param);
            }
        }
    }
}

/// Warns about parameters without a description.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn check(&self, params: &[Parameter], diagnostics: &mut Vec<Diagnostic>) {
        for param in params.iter().filter(|p| p.description().trim().is_empty()) {
            diagnostics.push(Diagnostic::new(
                self.name(),
                format!("parameter '{}' has no description", param.name()),
                param.source().clone(),
            ));
        }
    }
}

/// Warns about names that cannot be C++ or Python identifiers.
pub struct InvalidIdentifierLint;

impl Lint for InvalidIdentifierLint {
    fn name(&self) -> &'static str {
        "invalid-identifier"
    }

    fn check(&self, params: &[Parameter], diagnostics: &mut Vec<Diagnostic>) {
        for param in params {
            let reason = if is_cpp_keyword(param.name()) {
                Some("name is a C++ reserved keyword")
            } else {
                validate_identifier(param.name())
            };

            if let Some(reason) = reason {
                diagnostics.push(Diagnostic::new(
                    self.name(),
                    format!("parameter '{}': {}", param.name(), reason),
                    param.source().clone(),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dynparam_core::ParamType;

    use super::*;
    use crate::{ParamDecl, SourceLocation};

    fn param(name: &str, description: &str, line: u32) -> Parameter {
        Parameter::new(
            ParamDecl::new(name, ParamType::Double, 0, description),
            SourceLocation::new("params.toml", line),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_name() {
        let params = [param("rate", "a", 3), param("gain", "b", 9), param("rate", "c", 15)];
        let mut diagnostics = Vec::new();
        DuplicateNameLint.check(&params, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.line, 15);
        assert_eq!(
            diagnostics[0].message,
            "duplicate parameter 'rate' (first declared at params.toml:3)"
        );
    }

    #[test]
    fn test_empty_description() {
        let params = [param("rate", "   ", 3), param("gain", "proportional gain", 9)];
        let mut diagnostics = Vec::new();
        EmptyDescriptionLint.check(&params, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("rate"));
    }

    #[test]
    fn test_invalid_identifier() {
        let params = [
            param("2fast", "x", 1),
            param("__hidden", "x", 2),
            param("double", "x", 3),
            param("max-speed", "x", 4),
            param("max_speed", "x", 5),
        ];
        let mut diagnostics = Vec::new();
        InvalidIdentifierLint.check(&params, &mut diagnostics);

        let lines: Vec<u32> = diagnostics.iter().map(|d| d.location.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
        assert_eq!(
            diagnostics[2].to_string(),
            "params.toml:3: parameter 'double': name is a C++ reserved keyword [invalid-identifier]"
        );
    }
}
