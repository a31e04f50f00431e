//! Indentation-aware line writer.

/// One indentation unit.
const INDENT: &str = "    ";

/// Accumulates source lines at an explicitly tracked depth.
#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
    depth: usize,
}

impl SourceWriter {
    /// Creates an empty writer at depth 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current depth.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(INDENT);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Increases the depth by one.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases the depth by one.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the current depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the writer and returns the text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut writer = SourceWriter::new();
        writer.line("class A {");
        writer.indent();
        writer.line("int a;");
        writer.indent();
        writer.line("return;");
        writer.dedent();
        writer.dedent();
        writer.line("}");

        assert_eq!(writer.finish(), "class A {\n    int a;\n        return;\n}\n");
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let mut writer = SourceWriter::new();
        writer.indent();
        writer.line("");
        writer.blank();
        assert_eq!(writer.depth(), 1);
        assert_eq!(writer.finish(), "\n\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut writer = SourceWriter::new();
        writer.dedent();
        assert_eq!(writer.depth(), 0);
    }
}
