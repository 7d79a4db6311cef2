//! Non-fatal checks over the declared parameters.
//!
//! Generation never fails on a lint; `dynparam check` reports them.

mod diagnostic;
mod lints;

pub use diagnostic::Diagnostic;
pub use lints::{DuplicateNameLint, EmptyDescriptionLint, InvalidIdentifierLint};

use crate::Parameter;

/// A lint that checks the parameter list for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the parameters and add any diagnostics.
    fn check(&self, params: &[Parameter], diagnostics: &mut Vec<Diagnostic>);
}

/// An ordered collection of lints.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self::empty()
            .with_lint(DuplicateNameLint)
            .with_lint(EmptyDescriptionLint)
            .with_lint(InvalidIdentifierLint)
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Append a lint; lints run in the order they were added.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Run every lint in order.
    pub fn run(&self, params: &[Parameter]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(params, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
