//! A declaring source file with line-start indexing.

use std::path::PathBuf;

/// Text of one declaring file, indexed for line lookup.
pub struct SourceFile {
    /// The path this file was registered under.
    pub path: PathBuf,
    /// The full text content.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Creates a source file and precomputes its line starts.
    pub fn new(path: PathBuf, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            path,
            content,
            line_starts,
        }
    }

    /// Number of lines in the file.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text of a 1-indexed line without its line terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |next| next - 1);
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

fn compute_line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
