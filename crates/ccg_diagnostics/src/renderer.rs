//! Human-readable diagnostic rendering.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use crate::severity::Severity;
use ccg_source::SourceDb;

/// Formats diagnostics for an output target.
pub trait DiagnosticRenderer {
    /// Renders one diagnostic.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// ```text
/// error[CCG001]: type 'Sandbox' must be partial to receive generated component caches
///   --> Assets/Sandbox/Sandbox.cs:6:14
///   |
/// 6 | public class Sandbox : MonoBehaviour
///   |              ^^^^^^^ declared here
///   = help: add the `partial` modifier
/// ```
///
/// The source excerpt is only shown when the declaring file is in the
/// [`SourceDb`].
pub struct TerminalRenderer {
    /// Whether to wrap the severity header in ANSI colors.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let head = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return format!("{head}: {}\n", diag.message);
        }
        let color = match diag.severity {
            Severity::Error => "31",
            Severity::Warning => "33",
            Severity::Note => "36",
        };
        format!("\x1b[1;{color}m{head}\x1b[0m\x1b[1m: {}\x1b[0m\n", diag.message)
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = self.header(diag);

        if !diag.location.is_unknown() {
            out.push_str(&format!("  --> {}\n", diag.location));

            if let Some(line_text) = source_db.line_text(&diag.location) {
                let line_num = diag.location.line.to_string();
                let padding = " ".repeat(line_num.len());
                out.push_str(&format!("{padding} |\n"));
                out.push_str(&format!("{line_num} | {line_text}\n"));

                let carets = "^".repeat(diag.location.length.max(1) as usize);
                let col_padding = underline_padding(line_text, diag.location.column);
                let primary_msg = diag
                    .labels
                    .iter()
                    .find(|l| l.style == LabelStyle::Primary)
                    .map(|l| format!(" {}", l.message))
                    .unwrap_or_default();
                out.push_str(&format!("{padding} | {col_padding}{carets}{primary_msg}\n"));
            }
        }

        for label in diag
            .labels
            .iter()
            .filter(|l| l.style == LabelStyle::Secondary)
        {
            out.push_str(&format!("   = note: {} ({})\n", label.message, label.location));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

/// Whitespace that lines the caret up under a 1-indexed column, keeping tabs
/// from the source line so terminals expand them identically.
fn underline_padding(line_text: &str, column: u32) -> String {
    line_text
        .chars()
        .take((column as usize).saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}
