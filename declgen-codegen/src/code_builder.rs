//! Code builder utility for generating properly indented text.

use crate::indent::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use declgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export interface X {")
///     .indent()
///     .line("get(): Promise<string>;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export interface X {\n  get(): Promise<string>;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a builder with the specified indentation style.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a builder with 2-space indentation (TypeScript default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with the current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_line(s);
        self
    }

    /// Add multi-line text, indenting every line. Empty lines stay empty
    /// rather than carrying trailing indentation.
    pub fn lines(mut self, text: &str) -> Self {
        for line in text.split('\n') {
            self.write_line(line);
        }
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or a trailing newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase the indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease the indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_line(&mut self, s: &str) {
        if !s.is_empty() {
            for _ in 0..self.indent_level {
                self.indent.push_to(&mut self.buffer);
            }
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let code = CodeBuilder::typescript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_indent_dedent() {
        let code = CodeBuilder::typescript()
            .line("{")
            .indent()
            .line("a: 1,")
            .dedent()
            .line("}")
            .build();
        assert_eq!(code, "{\n  a: 1,\n}\n");
    }

    #[test]
    fn test_lines_indents_every_line() {
        let code = CodeBuilder::typescript()
            .indent()
            .lines("a: {\n  b: 1,\n}")
            .build();
        assert_eq!(code, "  a: {\n    b: 1,\n  }\n");
    }

    #[test]
    fn test_lines_keeps_empty_lines_empty() {
        let code = CodeBuilder::typescript().indent().lines("a\n\nb").build();
        assert_eq!(code, "  a\n\n  b\n");
    }

    #[test]
    fn test_blank() {
        let code = CodeBuilder::typescript().line("a").blank().line("b").build();
        assert_eq!(code, "a\n\nb\n");
    }

    #[test]
    fn test_raw_appends_verbatim() {
        let code = CodeBuilder::typescript()
            .indent()
            .raw("export interface X {")
            .raw("}")
            .build();
        assert_eq!(code, "export interface X {}");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let code = CodeBuilder::typescript().dedent().line("a").build();
        assert_eq!(code, "a\n");
    }

    #[test]
    fn test_tab_indent() {
        let code = CodeBuilder::new(Indent::Tab).indent().line("a").build();
        assert_eq!(code, "\ta\n");
    }
}
