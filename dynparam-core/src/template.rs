//! Placeholder substitution for the host-owned output templates.
//!
//! Templates use `$name` or `${name}` placeholders, with `$$` standing for
//! a literal dollar sign. Identifiers are ASCII letters, digits and
//! underscores, not starting with a digit.
//!
//! Substitution is strict: an unknown name or a `$` that starts no
//! placeholder is an error carrying its line and column.

use std::borrow::Cow;

use crate::{Error, Result};

/// A source of placeholder values.
///
/// Each artifact kind implements this on its own typed struct so that the
/// set of names it provides is fixed at compile time.
pub trait TemplateVars {
    /// Look up the value for a placeholder name.
    fn get(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl TemplateVars for [(&str, String)] {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| Cow::Borrowed(v.as_str()))
    }
}

/// A named template source.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    name: &'a str,
    source: &'a str,
    first_line: usize,
}

enum Piece<'s> {
    Text(&'s str),
    Dollar,
    Placeholder {
        name: &'s str,
        offset: usize,
    },
    Invalid {
        offset: usize,
    },
}

impl<'a> Template<'a> {
    /// Create a template; `name` is only used in error messages.
    pub fn new(name: &'a str, source: &'a str) -> Self {
        Self {
            name,
            source,
            first_line: 1,
        }
    }

    /// Number reported for the first line of `source` in errors.
    ///
    /// Used when a larger template is substituted one line at a time.
    pub fn starting_at_line(mut self, line: usize) -> Self {
        self.first_line = line;
        self
    }

    /// Replace every placeholder, failing on unknown or malformed ones.
    pub fn substitute<V: TemplateVars + ?Sized>(&self, vars: &V) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        for piece in pieces(self.source) {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Dollar => out.push('$'),
                Piece::Placeholder { name, offset } => match vars.get(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        let (line, _) = position(self.source, offset);
                        return Err(Error::MissingPlaceholder {
                            template: self.name.to_string(),
                            placeholder: name.to_string(),
                            line: line + self.first_line - 1,
                        });
                    }
                },
                Piece::Invalid { offset } => {
                    let (line, column) = position(self.source, offset);
                    return Err(Error::InvalidPlaceholder {
                        template: self.name.to_string(),
                        line: line + self.first_line - 1,
                        column,
                    });
                }
            }
        }
        Ok(out)
    }
}

fn pieces(source: &str) -> Vec<Piece<'_>> {
    let bytes = source.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }
        if start < i {
            pieces.push(Piece::Text(&source[start..i]));
        }

        let rest = &source[i + 1..];
        if rest.starts_with('$') {
            pieces.push(Piece::Dollar);
            i += 2;
        } else if let Some(inner) = rest.strip_prefix('{') {
            let len = ident_len(inner);
            if len > 0 && inner[len..].starts_with('}') {
                pieces.push(Piece::Placeholder {
                    name: &inner[..len],
                    offset: i,
                });
                i += len + 3;
            } else {
                pieces.push(Piece::Invalid { offset: i });
                i += 1;
            }
        } else {
            let len = ident_len(rest);
            if len > 0 {
                pieces.push(Piece::Placeholder {
                    name: &rest[..len],
                    offset: i,
                });
                i += len + 1;
            } else {
                pieces.push(Piece::Invalid { offset: i });
                i += 1;
            }
        }
        start = i;
    }

    if start < bytes.len() {
        pieces.push(Piece::Text(&source[start..]));
    }
    pieces
}

fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

/// 1-based line and column of a byte offset.
fn position(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> Vec<(&'static str, String)> {
        vec![
            ("name", "Planner".to_string()),
            ("pkgname", "nav".to_string()),
        ]
    }

    #[test]
    fn test_substitute_named_and_braced() {
        let t = Template::new("t", "class ${name}Config in $pkgname.");
        assert_eq!(
            t.substitute(vars().as_slice()).unwrap(),
            "class PlannerConfig in nav."
        );
    }

    #[test]
    fn test_substitute_escaped_dollar() {
        let t = Template::new("t", "cost: $$5 for $name");
        assert_eq!(
            t.substitute(vars().as_slice()).unwrap(),
            "cost: $5 for Planner"
        );
    }

    #[test]
    fn test_substitute_missing_placeholder() {
        let t = Template::new("ConfigType.h", "line one\n${members}\n");
        let err = t.substitute(vars().as_slice()).unwrap_err();
        match err {
            Error::MissingPlaceholder {
                template,
                placeholder,
                line,
            } => {
                assert_eq!(template, "ConfigType.h");
                assert_eq!(placeholder, "members");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_substitute_invalid_placeholder() {
        let t = Template::new("t", "ok\n  $ 5");
        let err = t.substitute(vars().as_slice()).unwrap_err();
        match err {
            Error::InvalidPlaceholder { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_substitute_unterminated_brace_is_invalid() {
        let t = Template::new("t", "${name");
        assert!(matches!(
            t.substitute(vars().as_slice()),
            Err(Error::InvalidPlaceholder { .. })
        ));
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let values = vec![("a", "$b".to_string()), ("b", "nope".to_string())];
        let t = Template::new("t", "[$a]");
        assert_eq!(t.substitute(values.as_slice()).unwrap(), "[$b]");
    }

    #[test]
    fn test_starting_at_line_offsets_errors() {
        let t = Template::new("ConfigType.h", "  ${paramdescr}").starting_at_line(41);
        match t.substitute(vars().as_slice()) {
            Err(Error::MissingPlaceholder { line, .. }) => assert_eq!(line, 41),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_identifier_stops_at_non_word() {
        let t = Template::new("t", "$name-$pkgname_x");
        match t.substitute(vars().as_slice()) {
            Err(Error::MissingPlaceholder { placeholder, .. }) => {
                assert_eq!(placeholder, "pkgname_x")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
