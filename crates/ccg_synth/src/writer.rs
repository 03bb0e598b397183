//! Indentation-aware line writer.

/// Accumulates source lines at a tracked indentation level.
///
/// Empty lines are written without indentation so the output never carries
/// trailing whitespace. Every line ends in `\n`.
pub struct SourceWriter {
    buf: String,
    unit: String,
    level: usize,
}

impl SourceWriter {
    /// Creates a writer indenting by `width` spaces per level.
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            unit: " ".repeat(width),
            level: 0,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.level {
                self.buf.push_str(&self.unit);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes `{` and indents.
    pub fn open(&mut self) {
        self.line("{");
        self.level += 1;
    }

    /// Dedents and writes `}`.
    pub fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    /// Consumes the writer, returning the text.
    pub fn finish(self) -> String {
        self.buf
    }
}
