//! The channel generation stages report diagnostics through.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Uniform reporting interface for generation stages.
///
/// Implementations must preserve report order and must not deduplicate:
/// the same diagnostic reported twice surfaces twice. Deduplication, if any,
/// is the host's business.
pub trait DiagnosticChannel: Send + Sync {
    /// Appends a diagnostic.
    fn report(&self, diag: Diagnostic);
}

/// Thread-safe, append-only diagnostic accumulator.
///
/// The error count is tracked atomically so `has_errors` does not lock the
/// diagnostic vector.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    error_count: AtomicUsize,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            error_count: AtomicUsize::new(0),
        }
    }

    /// Appends a diagnostic, counting it if it is an error.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.severity == Severity::Error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        // push/take are the only mutations; a poisoned lock still guards a valid Vec.
        let mut diagnostics = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        diagnostics.push(diag);
    }

    /// Returns `true` if any error-severity diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Number of error-severity diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    ///
    /// The error count is not reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *diagnostics)
    }

    /// Returns a snapshot of the accumulated diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticChannel for DiagnosticSink {
    fn report(&self, diag: Diagnostic) {
        self.emit(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;
    use ccg_source::Location;

    fn make_error(subject: &str) -> Diagnostic {
        Diagnostic::error(
            DiagnosticCode::MUST_BE_PARTIAL,
            subject,
            format!("type '{subject}' must be partial"),
            Location::unknown(),
        )
    }

    fn make_warning() -> Diagnostic {
        Diagnostic::warning(
            DiagnosticCode::DUPLICATE_PROPERTY,
            "Sandbox",
            "duplicate property",
            Location::unknown(),
        )
    }

    #[test]
    fn empty_sink() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert_eq!(sink.error_count(), 0);
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn warning_is_not_counted() {
        let sink = DiagnosticSink::new();
        sink.report(make_warning());
        assert!(!sink.has_errors());
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let sink = DiagnosticSink::new();
        sink.report(make_error("A"));
        sink.report(make_warning());
        sink.report(make_error("B"));
        let subjects: Vec<_> = sink.take_all().into_iter().map(|d| d.subject).collect();
        assert_eq!(subjects, vec!["A", "Sandbox", "B"]);
    }

    #[test]
    fn identical_reports_are_not_deduplicated() {
        let sink = DiagnosticSink::new();
        sink.report(make_error("Sandbox"));
        sink.report(make_error("Sandbox"));
        let all = sink.take_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], all[1]);
        assert_eq!(sink.error_count(), 2);
    }

    #[test]
    fn take_all_drains_but_keeps_count() {
        let sink = DiagnosticSink::new();
        sink.report(make_error("A"));
        assert_eq!(sink.take_all().len(), 1);
        assert!(sink.take_all().is_empty());
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let sink = Arc::new(DiagnosticSink::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let sink = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    sink.report(make_error("T"));
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(sink.error_count(), 400);
        assert_eq!(sink.diagnostics().len(), 400);
    }
}
