//! # tessera
//!
//! Tessera - TypeScript bundle transform pipeline in Rust.
//!
//! ## Name Origin
//!
//! A **tessera** (/ˈtɛsərə/) is a single tile in a mosaic. A bundling host
//! assembles many source assets into one artifact the way a mosaicist sets
//! tesserae; this toolchain fires each bundle through the TypeScript
//! compiler and polishes the JavaScript that comes out.
//!
//! This crate is the gateway: it re-exports the library crates and ships
//! the `tessera` command-line host.
//!
//! ## Crates
//!
//! - [`kiln`] - the compiler firing chamber: engine boundary, packaged
//!   resources, diagnostics
//! - [`mortar`] - the pipeline core: error level, failure policy,
//!   orchestrator
//! - [`burnish`] - the minifier post-stage

pub use tessera_burnish as burnish;
pub use tessera_kiln as kiln;
pub use tessera_mortar as mortar;

// The common surface, flattened for hosts that embed the pipeline.
pub use tessera_kiln::{
    CompileOutput, CompilerService, Diagnostic, DiagnosticSink, EngineError, EngineResources,
    QuickJsEngine,
};
pub use tessera_mortar::{
    ErrorLevel, TransformError, TransformOptions, TransformResult, Transformer, CONTENT_TYPE,
};
