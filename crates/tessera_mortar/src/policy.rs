//! The failure policy: how collected diagnostics affect the outcome.
//!
//! The three-level policy lets the host decide the cost/strictness
//! trade-off once at configuration time. Under `LogOnly`, diagnostics are
//! rendered into the output as `console.error` statements so failures
//! surface even when nobody is watching the host's log sink.

use serde::{Deserialize, Serialize};

use tessera_kiln::Diagnostic;

use crate::error::TransformError;

/// Strictness policy for compiler diagnostics.
///
/// Supplied once when a transform is constructed and invariant for the
/// lifetime of that instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorLevel {
    /// Skip semantic validation entirely; parse and emit only.
    NoTypeChecking,
    /// Validate, surface diagnostics in the output and the log sink, but
    /// always produce output.
    LogOnly,
    /// Validate; any diagnostic aborts the transform.
    FailOnError,
}

impl ErrorLevel {
    /// Whether this level asks the compiler to run semantic validation.
    pub fn runs_type_checking(self) -> bool {
        !matches!(self, Self::NoTypeChecking)
    }
}

/// The policy's decision for one invocation.
#[derive(Debug)]
pub enum Outcome {
    /// No diagnostics (or validation skipped): the emitted text unchanged.
    Pass(String),
    /// Diagnostics existed under `LogOnly`: emitted text prefixed with one
    /// reporting statement per diagnostic.
    Degraded(String),
    /// Diagnostics existed under `FailOnError`: no output.
    Abort(TransformError),
}

/// Decide the outcome for a finished invocation.
///
/// `LogOnly` with diagnostics also forwards each diagnostic to the log
/// sink via `tracing::warn!`.
pub fn resolve(level: ErrorLevel, emitted: String, diagnostics: &[Diagnostic]) -> Outcome {
    if diagnostics.is_empty() || level == ErrorLevel::NoTypeChecking {
        return Outcome::Pass(emitted);
    }
    match level {
        ErrorLevel::NoTypeChecking => unreachable!("handled above"),
        ErrorLevel::LogOnly => {
            let mut output = String::with_capacity(emitted.len() + diagnostics.len() * 64);
            for diagnostic in diagnostics {
                let rendered = diagnostic.render();
                tracing::warn!(
                    start = diagnostic.start,
                    length = diagnostic.length,
                    "{rendered}"
                );
                output.push_str("console.error(\"");
                output.push_str(&escape_js(&rendered));
                output.push_str("\");\n");
            }
            output.push_str(&emitted);
            Outcome::Degraded(output)
        }
        ErrorLevel::FailOnError => Outcome::Abort(TransformError::CompilationFailed {
            diagnostics: diagnostics.to_vec(),
        }),
    }
}

/// Conservatively escape text for embedding in a double-quoted JavaScript
/// string literal. Escapes quotes, backslashes, control characters and the
/// characters that would let a message break out of the statement (or out
/// of a surrounding `<script>` element).
pub fn escape_js(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '`' => escaped.push_str("\\`"),
            '/' => escaped.push_str("\\/"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                escaped.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(message: &str) -> Diagnostic {
        Diagnostic::new(message, 0, 1)
    }

    #[test]
    fn test_no_diagnostics_pass_at_every_level() {
        for level in [
            ErrorLevel::NoTypeChecking,
            ErrorLevel::LogOnly,
            ErrorLevel::FailOnError,
        ] {
            match resolve(level, "var x = 1;".into(), &[]) {
                Outcome::Pass(code) => assert_eq!(code, "var x = 1;"),
                other => panic!("expected Pass at {level:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_no_type_checking_passes_despite_diagnostics() {
        let outcome = resolve(ErrorLevel::NoTypeChecking, "x".into(), &[diag("ignored")]);
        assert!(matches!(outcome, Outcome::Pass(code) if code == "x"));
    }

    #[test]
    fn test_log_only_prefixes_one_statement_per_diagnostic() {
        let diagnostics = vec![diag("first"), diag("second")];
        let outcome = resolve(ErrorLevel::LogOnly, "var x = 1;\n".into(), &diagnostics);
        let Outcome::Degraded(code) = outcome else {
            panic!("expected Degraded");
        };
        let lines: Vec<&str> = code.lines().collect();
        assert!(lines[0].starts_with("console.error(\""));
        assert!(lines[0].contains("first"));
        assert!(lines[1].starts_with("console.error(\""));
        assert!(lines[1].contains("second"));
        assert_eq!(lines[2], "var x = 1;");
        assert_eq!(code.matches("console.error(").count(), 2);
    }

    #[test]
    fn test_fail_on_error_aborts_with_ordered_diagnostics() {
        let diagnostics = vec![diag("a"), diag("b")];
        let outcome = resolve(ErrorLevel::FailOnError, "var x = 1;".into(), &diagnostics);
        let Outcome::Abort(TransformError::CompilationFailed { diagnostics }) = outcome else {
            panic!("expected Abort");
        };
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "a");
        assert_eq!(diagnostics[1].message, "b");
    }

    #[test]
    fn test_hostile_message_stays_a_single_statement() {
        let hostile = "\"); alert('pwned'); //\n</script>";
        let outcome = resolve(ErrorLevel::LogOnly, String::new(), &[diag(hostile)]);
        let Outcome::Degraded(code) = outcome else {
            panic!("expected Degraded");
        };
        // One reporting statement, nothing escapes the literal.
        assert_eq!(code.matches("console.error(").count(), 1);
        assert!(!code.contains("</script>"));
        assert!(!code.contains("alert('pwned')"));
        let statement_line = code.lines().next().unwrap();
        assert!(statement_line.ends_with("\");"));
    }

    #[test]
    fn test_escape_js_control_characters() {
        assert_eq!(escape_js("a\nb"), "a\\nb");
        assert_eq!(escape_js("a\"b"), "a\\\"b");
        assert_eq!(escape_js("a\\b"), "a\\\\b");
        assert_eq!(escape_js("a\u{0007}b"), "a\\u0007b");
        assert_eq!(escape_js("a\u{2028}b"), "a\\u2028b");
    }

    #[test]
    fn test_runs_type_checking() {
        assert!(!ErrorLevel::NoTypeChecking.runs_type_checking());
        assert!(ErrorLevel::LogOnly.runs_type_checking());
        assert!(ErrorLevel::FailOnError.runs_type_checking());
    }
}
