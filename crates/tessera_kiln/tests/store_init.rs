//! Process-wide store lifecycle: init once, shared read-only afterward.

use std::fs;

use tessera_kiln::resources::{self, COMPILER_FILE, STDLIB_FILE};
use tessera_kiln::{CompilerService, EngineError, EngineResources, QuickJsEngine};

#[test]
fn init_once_then_engines_share_the_store() {
    let dir = tempfile::tempdir().unwrap();
    // A miniature compiler payload: the driver in this crate expects a `ts`
    // global, but for store plumbing we only need scripts that evaluate.
    fs::write(dir.path().join(COMPILER_FILE), "var ts = null;").unwrap();
    fs::write(dir.path().join(STDLIB_FILE), "declare var undefined: any;").unwrap();

    let mut loaded = EngineResources::load(dir.path()).unwrap();
    loaded.driver = "var result = source + '|' + libSource;".into();
    resources::init(loaded).unwrap();

    // Second init is rejected.
    let again = EngineResources {
        compiler: String::new(),
        stdlib: String::new(),
        driver: String::new(),
    };
    assert!(matches!(
        resources::init(again),
        Err(EngineError::Unavailable(_))
    ));

    // Engines built from the store all see the same payloads.
    let engine = QuickJsEngine::from_global().unwrap();
    let output = engine.compile("let a = 1;", false).unwrap();
    assert_eq!(output.code, "let a = 1;|declare var undefined: any;");

    let second = QuickJsEngine::from_global().unwrap();
    assert!(second.compile("x", false).unwrap().code.starts_with("x|"));
}
