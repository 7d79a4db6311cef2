use std::fmt;

use crate::SourceLocation;

/// A warning produced by a lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The lint that produced this diagnostic.
    pub lint: &'static str,
    pub message: String,
    /// Declaration site of the offending parameter.
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(lint: &'static str, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            lint,
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.location, self.message, self.lint)
    }
}
