//! Line-oriented builder for the generated artifacts.

use dynparam_core::escape_line_path;

use crate::param::SourceLocation;

/// Preprocessor directive that remaps line numbers in the generated header.
pub const LINE_DIRECTIVE: &str = "#line";

/// Collects output lines.
///
/// # Example
///
/// ```
/// use dynparam_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder.push_line("\\verbatim").push_line("\\endverbatim").push_blank();
/// assert_eq!(builder.build(), "\\verbatim\n\\endverbatim\n\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    lines: Vec<String>,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of text.
    pub fn push_line(&mut self, s: impl Into<String>) -> &mut Self {
        self.lines.push(s.into());
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Add a statement attributed to its declaration site.
    ///
    /// The `#line` directive makes the compiler report the following line
    /// as `source`, so errors in generated statements point at the
    /// parameter declaration.
    pub fn push_attributed(&mut self, source: &SourceLocation, statement: &str) -> &mut Self {
        self.lines.push(format!(
            "{} {} \"{}\"",
            LINE_DIRECTIVE,
            source.line,
            escape_line_path(&source.file)
        ));
        self.lines.push(format!("      {}", statement));
        self
    }

    /// Finish as a file body; every line is newline-terminated.
    pub fn build(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    /// Finish as a fragment for a template slot, without a trailing newline.
    pub fn build_fragment(&self) -> String {
        self.lines.join("\n")
    }
}
