//! Validation context and utilities for manifest parsing.

use dynparam_core::{ParamType, Value};
use miette::SourceSpan;
use toml::Spanned;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// 1-based line containing a byte offset.
    pub fn line_of(&self, offset: usize) -> u32 {
        let src = self.source.src();
        let offset = offset.min(src.len());
        src[..offset].matches('\n').count() as u32 + 1
    }

    /// Validate that a name is a valid C++ identifier.
    pub fn validate_name(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        let span = Some(to_span(name));

        if is_cpp_keyword(name.get_ref()) {
            return Err(self
                .source
                .reserved_keyword_error(name.get_ref(), kind, span));
        }

        if let Some(reason) = validate_identifier(name.get_ref()) {
            return Err(self
                .source
                .invalid_identifier_error(name.get_ref(), kind, reason, span));
        }

        Ok(())
    }

    /// Parse a type tag.
    pub fn param_type(&self, param: &str, ty: &Spanned<String>) -> Result<ParamType> {
        ty.get_ref().parse().map_err(|_| {
            self.source
                .invalid_param_type_error(param, ty.get_ref(), to_span(ty))
        })
    }

    /// Convert a default or bound to a [`Value`], rejecting arrays, tables
    /// and datetimes.
    pub fn value(
        &self,
        param: &str,
        field: &str,
        raw: Option<Spanned<toml::Value>>,
    ) -> Result<Option<Value>> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let span = to_span(&raw);

        match raw.into_inner() {
            toml::Value::String(s) => Ok(Some(Value::Str(s))),
            toml::Value::Integer(i) => Ok(Some(Value::Int(i))),
            toml::Value::Float(f) => Ok(Some(Value::Double(f))),
            toml::Value::Boolean(b) => Ok(Some(Value::Bool(b))),
            other => Err(self.source.validation_error_at(
                format!(
                    "{} of parameter '{}' must be a string, integer, float or boolean, found {}",
                    field,
                    param,
                    other.type_str()
                ),
                span,
            )),
        }
    }
}

fn to_span<T>(spanned: &Spanned<T>) -> SourceSpan {
    let range = spanned.span();
    SourceSpan::from((range.start, range.end - range.start))
}

/// C++ keywords that cannot be used as member or class names
pub(crate) const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "class", "compl", "const", "constexpr", "const_cast", "continue",
    "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit",
    "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long",
    "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or",
    "or_eq", "private", "protected", "public", "register", "reinterpret_cast", "return", "short",
    "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch", "template",
    "this", "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
    "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Check if a name is a C++ reserved keyword
pub fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Validate that a name is usable as a C++ identifier.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    // Double underscores are reserved for the generated helpers
    if name.starts_with("__") {
        return Some("names starting with '__' are reserved");
    }

    None
}
