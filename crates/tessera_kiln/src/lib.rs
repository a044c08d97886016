//! # tessera_kiln
//!
//! Kiln - The compiler firing chamber for Tessera.
//!
//! ## Name Origin
//!
//! **Kiln** (/kɪln/) is the oven in which mosaic tesserae are fired. This
//! crate is where raw bundle text goes through the heat: it owns the
//! boundary to the external TypeScript compiler, the packaged resources the
//! compiler runs from, and the diagnostics it reports back.
//!
//! ## Architecture
//!
//! ```text
//! +----------------------------------------------------------+
//! |                      tessera_kiln                         |
//! +----------------------------------------------------------+
//! |                                                           |
//! |  +-------------------+     +------------------------+     |
//! |  | CompilerService   |     | EngineResources        |     |
//! |  | - compile(src, tc)|<--->| - compiler (ts.js)     |     |
//! |  +-------------------+     | - stdlib (lib.d.ts)    |     |
//! |           ^                | - driver               |     |
//! |           |                +------------------------+     |
//! |  +-------------------+     +------------------------+     |
//! |  | QuickJsEngine     |     | DiagnosticSink         |     |
//! |  | - fresh ctx/call  |---->| - record / drain       |     |
//! |  +-------------------+     +------------------------+     |
//! |                                                           |
//! +----------------------------------------------------------+
//! ```

mod diagnostic;
pub mod quickjs;
pub mod resources;
mod service;

pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use quickjs::QuickJsEngine;
pub use resources::EngineResources;
pub use service::{CompileOutput, CompilerService, EngineError};
