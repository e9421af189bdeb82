//! Diagnostic collection.
//!
//! Every stage that can fail (parser, semantic analyzer) reports through a
//! shared [`Handler`] rather than returning early. This lets the driver print
//! every diagnostic found in a pass instead of stopping at the first one, per
//! the "no recovery, no suppression beyond panic mode" error model the
//! compiler uses (see the parser's panic-mode recovery).

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// A single reported problem, already formatted with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn at(span: Span, message: impl Into<String>) -> Self {
        Self::new(span.line, span.column, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, Column {}: Error: {}",
            self.line, self.column, self.message
        )
    }
}

/// Collects diagnostics emitted during parsing and semantic analysis.
///
/// Shared by `&Handler` rather than `&mut Handler` so that a single handler
/// can be threaded through a recursive-descent parser and a recursive tree
/// walker without fighting the borrow checker; the diagnostic list itself
/// uses interior mutability.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error at the given source position.
    pub fn error(&self, line: u32, column: u32, message: impl Into<String>) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(line, column, message));
    }

    /// Record an error anchored to a span.
    pub fn error_at(&self, span: Span, message: impl Into<String>) {
        self.error(span.line, span.column, message);
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Every diagnostic recorded so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Write every diagnostic to `sink`, one per line.
    pub fn emit_to(&self, sink: &mut dyn std::io::Write) -> std::io::Result<()> {
        for diag in self.diagnostics.borrow().iter() {
            writeln!(sink, "{diag}")?;
        }
        Ok(())
    }
}
