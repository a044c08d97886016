//! Packaged engine resources and the process-wide store.
//!
//! The engine needs three read-only text payloads: the TypeScript compiler
//! implementation (`typescript.js`), the standard-library declarations
//! (`lib.d.ts`), and the bootstrap driver script. The driver ships embedded
//! in this crate; compiler and stdlib are loaded from an engine directory
//! once at process start and shared read-only by every invocation.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::service::EngineError;

/// File name of the compiler payload inside an engine directory.
pub const COMPILER_FILE: &str = "typescript.js";

/// File name of the standard-library declarations inside an engine directory.
pub const STDLIB_FILE: &str = "lib.d.ts";

/// The embedded bootstrap driver (see `resources/driver.js`).
pub const DRIVER: &str = include_str!("../resources/driver.js");

static STORE: OnceCell<Arc<EngineResources>> = OnceCell::new();

/// The three read-only payloads the engine executes.
#[derive(Debug, Clone)]
pub struct EngineResources {
    /// The compiler implementation, itself JavaScript.
    pub compiler: String,
    /// The standard-library declaration unit, loaded before user source so
    /// the compiler recognizes built-in symbols.
    pub stdlib: String,
    /// The bootstrap driver that wires source, stdlib and the diagnostic
    /// callback into the compiler.
    pub driver: String,
}

impl EngineResources {
    /// Load `typescript.js` and `lib.d.ts` from an engine directory, using
    /// the embedded driver.
    ///
    /// A missing or unreadable payload degrades to
    /// [`EngineError::Unavailable`].
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, EngineError> {
        let dir = dir.as_ref();
        let compiler = read_payload(&dir.join(COMPILER_FILE))?;
        let stdlib = read_payload(&dir.join(STDLIB_FILE))?;
        Ok(Self {
            compiler,
            stdlib,
            driver: DRIVER.to_string(),
        })
    }
}

fn read_payload(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|e| {
        EngineError::Unavailable(format!("cannot read resource {}: {}", path.display(), e))
    })
}

/// Populate the process-wide resource store. Must be called exactly once at
/// process start, before any transform is accepted.
pub fn init(resources: EngineResources) -> Result<(), EngineError> {
    STORE
        .set(Arc::new(resources))
        .map_err(|_| EngineError::Unavailable("engine resources already initialized".into()))
}

/// Fetch the process-wide resources.
///
/// Calls made before [`init`] are rejected with [`EngineError::Unavailable`]
/// rather than lazily racing to initialize.
pub fn get() -> Result<Arc<EngineResources>, EngineError> {
    STORE.get().cloned().ok_or_else(|| {
        EngineError::Unavailable("engine resources not initialized at process start".into())
    })
}
