//! The process-wide resource store must reject use before initialization.
//!
//! This lives in its own integration binary so no sibling test can have
//! populated the store before it runs.

use tessera_kiln::{EngineError, QuickJsEngine};

#[test]
fn engine_from_uninitialized_store_is_unavailable() {
    let err = QuickJsEngine::from_global().unwrap_err();
    match err {
        EngineError::Unavailable(msg) => assert!(msg.contains("not initialized"), "got: {msg}"),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}
