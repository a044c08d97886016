//! # tessera_mortar
//!
//! Mortar - The transform pipeline core that binds Tessera together.
//!
//! ## Name Origin
//!
//! **Mortar** is what holds a mosaic's tesserae in place. This crate binds
//! the compiler boundary, the diagnostic collector, the failure policy and
//! the minifier into one ordered pipeline: text in, text out, with a
//! configurable answer to "what happens when the compiler complains?".
//!
//! ## Pipeline
//!
//! ```text
//! source ──► CompilerService::compile ──► DiagnosticSink ──► resolve()
//!                                                               │
//!                             Abort ◄── FailOnError + diags ────┤
//!                                                               │
//!                     Pass / Degraded ──► [minify] ──► TransformResult
//! ```

mod error;
mod policy;
mod transform;

pub use error::TransformError;
pub use policy::{escape_js, resolve, ErrorLevel, Outcome};
pub use transform::{TransformOptions, TransformResult, Transformer, CONTENT_TYPE};

// Re-export the boundary types hosts need alongside the pipeline.
pub use tessera_kiln::{CompileOutput, CompilerService, Diagnostic, EngineError};
