//! Error types for the transform pipeline.

use thiserror::Error;

use tessera_kiln::{Diagnostic, EngineError};

/// Fatal transform failures, surfaced to the host unchanged.
///
/// Degraded success (diagnostics under `LogOnly`) is not an error: it is
/// encoded in the successful result's diagnostics field.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The compiler engine could not run at all. Independent of the
    /// configured error level.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Diagnostics were raised and the error level is `FailOnError`.
    /// Carries the ordered structured list so hosts can render
    /// per-diagnostic detail.
    #[error("compilation failed:\n{}", render_lines(.diagnostics))]
    CompilationFailed {
        /// Diagnostics in collection order.
        diagnostics: Vec<Diagnostic>,
    },
}

fn render_lines(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_failed_display_one_line_per_diagnostic() {
        let err = TransformError::CompilationFailed {
            diagnostics: vec![
                Diagnostic::new("first problem", 0, 1),
                Diagnostic::new("second problem", 8, 2),
            ],
        };
        let text = err.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("first problem"));
        assert!(lines[2].contains("second problem"));
    }

    #[test]
    fn test_engine_error_passes_through() {
        let err: TransformError = EngineError::Unavailable("no runtime".into()).into();
        assert_eq!(err.to_string(), "compiler engine unavailable: no runtime");
    }
}
