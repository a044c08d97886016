//! Compiler diagnostics and the per-invocation collector.

use serde::{Deserialize, Serialize};

/// A structured diagnostic reported by the compiler during one invocation.
///
/// Diagnostics are immutable once created and keep the order in which the
/// compiler emitted them. A diagnostic never outlives the invocation that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Human-readable message text.
    pub message: String,
    /// Start byte offset into the source unit.
    pub start: u32,
    /// Length of the offending span in bytes.
    pub length: u32,
    /// Optional context identifier (the compiler's file/block name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(message: impl Into<String>, start: u32, length: u32) -> Self {
        Self {
            message: message.into(),
            start,
            length,
            block: None,
        }
    }

    /// Attach a context block identifier.
    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    /// Render the single-line human form used for degraded output and
    /// failure messages.
    pub fn render(&self) -> String {
        match &self.block {
            Some(block) if !block.is_empty() => format!(
                "Compilation error: {} (start {}, length {}, block {})",
                self.message, self.start, self.length, block
            ),
            _ => format!(
                "Compilation error: {} (start {}, length {})",
                self.message, self.start, self.length
            ),
        }
    }
}

/// Append-only collector for the diagnostics of a single invocation.
///
/// A fresh sink is created per transform invocation and drained exactly
/// once at the end; `drain` consumes the sink so it cannot be reused.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, preserving insertion order.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Number of diagnostics recorded so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the sink, yielding the diagnostics in collection order.
    pub fn drain(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Extend<Diagnostic> for DiagnosticSink {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_block() {
        let diag = Diagnostic::new("Cannot find name 'foo'", 4, 3).with_block("/bundle.ts");
        assert_eq!(
            diag.render(),
            "Compilation error: Cannot find name 'foo' (start 4, length 3, block /bundle.ts)"
        );
    }

    #[test]
    fn test_render_without_block() {
        let diag = Diagnostic::new("Unexpected token", 0, 1);
        assert_eq!(
            diag.render(),
            "Compilation error: Unexpected token (start 0, length 1)"
        );
    }

    #[test]
    fn test_sink_preserves_order() {
        let mut sink = DiagnosticSink::new();
        sink.record(Diagnostic::new("first", 0, 1));
        sink.record(Diagnostic::new("second", 2, 1));
        sink.record(Diagnostic::new("third", 4, 1));

        let drained = sink.drain();
        let messages: Vec<&str> = drained.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn test_sink_extend() {
        let mut sink = DiagnosticSink::new();
        sink.extend(vec![
            Diagnostic::new("a", 0, 0),
            Diagnostic::new("b", 1, 0),
        ]);
        assert_eq!(sink.len(), 2);
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_diagnostic_json_shape() {
        let diag = Diagnostic::new("boom", 10, 2).with_block("lib.d.ts");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["message"], "boom");
        assert_eq!(json["start"], 10);
        assert_eq!(json["length"], 2);
        assert_eq!(json["block"], "lib.d.ts");
    }
}
