//! The compiler service boundary.
//!
//! The transform core never talks to a concrete compiler directly; it goes
//! through the [`CompilerService`] capability interface. One implementation
//! is selected at process start by the host's deployment logic, so the core
//! never branches on platform or engine identity itself.

use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// Errors raised by the compiler engine itself, as opposed to diagnostics
/// raised about the source being compiled.
///
/// Both variants are fatal regardless of the configured error level and are
/// never retried by the core.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The compiler execution environment could not be started: packaged
    /// resources are missing, the engine was used before process-start
    /// initialization, or the runtime failed to come up.
    #[error("compiler engine unavailable: {0}")]
    Unavailable(String),

    /// The compiler script itself threw while executing. This is an engine
    /// defect, not a diagnostic about the user source.
    #[error("compiler script evaluation failed: {0}")]
    Evaluation(String),
}

/// Output of one compiler invocation.
#[derive(Debug, Clone, Default)]
pub struct CompileOutput {
    /// The emitted output-language text.
    pub code: String,
    /// Diagnostics raised during parsing/validation/emission, in the order
    /// the compiler reported them.
    pub diagnostics: Vec<Diagnostic>,
}

/// An external compiler exposed as an opaque, synchronous service.
///
/// The contract mirrors the fixed bootstrap sequence: the implementation
/// loads the standard-library declaration unit, then the user source unit,
/// runs semantic validation iff `type_check`, then requests emission.
/// `compile` blocks until the underlying service completes, and no compiler
/// state may leak across invocations: each call gets an isolated execution
/// context. `source` is untrusted text and must only ever be fed to the
/// compiler as input.
pub trait CompilerService: Send + Sync {
    /// Compile one source unit, returning emitted text plus diagnostics.
    fn compile(&self, source: &str, type_check: bool) -> Result<CompileOutput, EngineError>;
}
