//! Diagnostics reported to the host for annotated declarations.
//!
//! Each [`Diagnostic`] carries a stable `CCGnnn` [`DiagnosticCode`] suitable for
//! suppression tooling, a severity, and the location of the offending
//! declaration's identifier. Generation stages report through the
//! [`DiagnosticChannel`] trait; [`DiagnosticSink`] is the thread-safe,
//! order-preserving implementation, and [`TerminalRenderer`] formats
//! diagnostics for humans.

#![warn(missing_docs)]

pub mod channel;
pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;

pub use channel::{DiagnosticChannel, DiagnosticSink};
pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
