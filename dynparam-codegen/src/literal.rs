//! Literal rendering of parameter values for each output language.

use dynparam_core::{escape_c_string, python_str_literal};

const CPP_INFINITY: &str = "std::numeric_limits<double>::infinity()";

/// A normalized default, minimum or maximum, borrowed from a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Str(&'a str),
    Bool(bool),
    Int(i32),
    Double(f64),
}

impl Literal<'_> {
    /// C++ source form, as used in the configuration header.
    ///
    /// The per-type sentinels render as the standard limit expressions
    /// rather than their numeric values.
    pub fn to_cpp(&self) -> String {
        match *self {
            Literal::Str(s) => format!("\"{}\"", escape_c_string(s)),
            Literal::Bool(b) => (if b { "1" } else { "0" }).to_string(),
            Literal::Int(i) => render_int(i),
            Literal::Double(d) => render_double(d),
        }
    }

    /// Plain form for documentation text.
    pub fn to_doc(&self) -> String {
        match *self {
            Literal::Str(s) => s.to_string(),
            Literal::Bool(b) => b.to_string(),
            Literal::Int(i) => render_int(i),
            Literal::Double(d) => render_double(d),
        }
    }

    /// Python source form, as used in the configuration module.
    pub fn to_python(&self) -> String {
        match *self {
            Literal::Str(s) => python_str_literal(s),
            Literal::Bool(b) => (if b { "True" } else { "False" }).to_string(),
            Literal::Int(i) => i.to_string(),
            Literal::Double(d) if d == f64::INFINITY => "float('inf')".to_string(),
            Literal::Double(d) if d == f64::NEG_INFINITY => "-float('inf')".to_string(),
            Literal::Double(d) => format!("{:?}", d),
        }
    }
}

fn render_int(i: i32) -> String {
    match i {
        i32::MIN => "INT_MIN".to_string(),
        i32::MAX => "INT_MAX".to_string(),
        i => i.to_string(),
    }
}

// `{:?}` is the shortest representation that round-trips and always keeps
// a decimal point or exponent, so the literal stays a double.
fn render_double(d: f64) -> String {
    if d == f64::INFINITY {
        CPP_INFINITY.to_string()
    } else if d == f64::NEG_INFINITY {
        format!("-{}", CPP_INFINITY)
    } else {
        format!("{:?}", d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_renders_as_digit_in_cpp() {
        assert_eq!(Literal::Bool(true).to_cpp(), "1");
        assert_eq!(Literal::Bool(false).to_cpp(), "0");
    }

    #[test]
    fn test_str_is_quoted_in_cpp() {
        assert_eq!(Literal::Str("map").to_cpp(), "\"map\"");
        assert_eq!(Literal::Str("").to_cpp(), "\"\"");
        assert_eq!(Literal::Str("a\"b").to_cpp(), "\"a\\\"b\"");
    }

    #[test]
    fn test_numbers_in_cpp() {
        assert_eq!(Literal::Int(42).to_cpp(), "42");
        assert_eq!(Literal::Int(-3).to_cpp(), "-3");
        assert_eq!(Literal::Double(10.0).to_cpp(), "10.0");
        assert_eq!(Literal::Double(0.25).to_cpp(), "0.25");
        assert_eq!(Literal::Double(-1.5).to_cpp(), "-1.5");
    }

    #[test]
    fn test_sentinels_in_cpp() {
        assert_eq!(Literal::Int(i32::MIN).to_cpp(), "INT_MIN");
        assert_eq!(Literal::Int(i32::MAX).to_cpp(), "INT_MAX");
        assert_eq!(
            Literal::Double(f64::NEG_INFINITY).to_cpp(),
            "-std::numeric_limits<double>::infinity()"
        );
        assert_eq!(
            Literal::Double(f64::INFINITY).to_cpp(),
            "std::numeric_limits<double>::infinity()"
        );
    }

    #[test]
    fn test_doc_forms() {
        assert_eq!(Literal::Str("map").to_doc(), "map");
        assert_eq!(Literal::Bool(true).to_doc(), "true");
        assert_eq!(Literal::Double(10.0).to_doc(), "10.0");
        assert_eq!(Literal::Int(i32::MIN).to_doc(), "INT_MIN");
    }

    #[test]
    fn test_python_forms() {
        assert_eq!(Literal::Str("map").to_python(), "'map'");
        assert_eq!(Literal::Bool(true).to_python(), "True");
        assert_eq!(Literal::Bool(false).to_python(), "False");
        assert_eq!(Literal::Int(i32::MIN).to_python(), "-2147483648");
        assert_eq!(Literal::Double(10.0).to_python(), "10.0");
        assert_eq!(Literal::Double(f64::INFINITY).to_python(), "float('inf')");
        assert_eq!(
            Literal::Double(f64::NEG_INFINITY).to_python(),
            "-float('inf')"
        );
    }
}
