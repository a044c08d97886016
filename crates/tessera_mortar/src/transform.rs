//! The transform orchestrator.
//!
//! Sequences one invocation end to end: compiler → diagnostic collection →
//! failure policy → optional minification → result. No step is skipped or
//! reordered; minification runs strictly after policy rendering so injected
//! diagnostic statements are minified too.

use std::sync::Arc;

use serde::Serialize;

use tessera_kiln::{CompilerService, Diagnostic, DiagnosticSink};

use crate::error::TransformError;
use crate::policy::{resolve, ErrorLevel, Outcome};

/// Content-type hint attached to every successful transform.
pub const CONTENT_TYPE: &str = "text/javascript";

/// Per-instance transform configuration. Read-only after construction and
/// safely shared across concurrent invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// How diagnostics affect the outcome.
    pub error_level: ErrorLevel,
    /// Whether to minify the output on the success and degraded paths.
    pub minify: bool,
}

impl Default for TransformOptions {
    /// Strict validation, no minification.
    fn default() -> Self {
        Self {
            error_level: ErrorLevel::FailOnError,
            minify: false,
        }
    }
}

/// Result of one successful transform invocation.
///
/// On the degraded path the diagnostics field carries the full list so the
/// host can render per-diagnostic detail; on the clean path it is empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    /// Final output text.
    pub code: String,
    /// Content-type hint for the host's response plumbing.
    pub content_type: &'static str,
    /// Diagnostics in collection order.
    pub diagnostics: Vec<Diagnostic>,
}

/// A configured transform: one compiler service plus invariant options.
///
/// `transform` takes `&self`; invocations are logically independent, with a
/// fresh collector and a fresh compiler execution context behind every call.
pub struct Transformer {
    options: TransformOptions,
    service: Arc<dyn CompilerService>,
}

impl Transformer {
    /// Create a transform with explicit options.
    pub fn new(options: TransformOptions, service: Arc<dyn CompilerService>) -> Self {
        Self { options, service }
    }

    /// Create a transform with the default options (strict, unminified).
    pub fn with_default_options(service: Arc<dyn CompilerService>) -> Self {
        Self::new(TransformOptions::default(), service)
    }

    /// The invariant configuration of this instance.
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Run one source unit through the pipeline.
    ///
    /// All-or-nothing: fails with [`TransformError::Engine`] if the
    /// compiler could not run, or [`TransformError::CompilationFailed`]
    /// under `FailOnError` with diagnostics; otherwise always succeeds.
    pub fn transform(&self, source: &str) -> Result<TransformResult, TransformError> {
        let type_check = self.options.error_level.runs_type_checking();
        let output = self.service.compile(source, type_check)?;

        let mut sink = DiagnosticSink::new();
        sink.extend(output.diagnostics);
        let diagnostics = sink.drain();

        let code = match resolve(self.options.error_level, output.code, &diagnostics) {
            Outcome::Abort(error) => return Err(error),
            Outcome::Pass(code) | Outcome::Degraded(code) => code,
        };

        let code = if self.options.minify {
            tessera_burnish::minify(&code)
        } else {
            code
        };

        Ok(TransformResult {
            code,
            content_type: CONTENT_TYPE,
            diagnostics,
        })
    }
}
