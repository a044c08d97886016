//! Transform command - run bundle text through the compile pipeline.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};

use tessera_kiln::{resources, EngineResources, QuickJsEngine};
use tessera_mortar::{ErrorLevel, TransformError, TransformOptions, Transformer};

/// Environment variable naming the engine directory.
pub const ENGINE_DIR_ENV: &str = "TESSERA_ENGINE_DIR";

#[derive(Args, Default)]
pub struct TransformArgs {
    /// Input TypeScript file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Diagnostic strictness policy
    #[arg(long, value_enum, default_value_t = ErrorLevelArg::Strict)]
    pub error_level: ErrorLevelArg,

    /// Minify the output
    #[arg(long)]
    pub minify: bool,

    /// Directory containing typescript.js and lib.d.ts
    /// (falls back to the TESSERA_ENGINE_DIR environment variable)
    #[arg(long)]
    pub engine_dir: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// CLI spelling of the error level policy.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ErrorLevelArg {
    /// Skip type checking entirely
    NoCheck,
    /// Type check, log diagnostics, always produce output
    Log,
    /// Type check, abort on any diagnostic
    #[default]
    Strict,
}

impl From<ErrorLevelArg> for ErrorLevel {
    fn from(arg: ErrorLevelArg) -> Self {
        match arg {
            ErrorLevelArg::NoCheck => ErrorLevel::NoTypeChecking,
            ErrorLevelArg::Log => ErrorLevel::LogOnly,
            ErrorLevelArg::Strict => ErrorLevel::FailOnError,
        }
    }
}

pub fn run(args: TransformArgs) {
    let source = match read_input(args.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    let engine = match start_engine(args.engine_dir.clone()) {
        Ok(engine) => engine,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let options = TransformOptions {
        error_level: args.error_level.into(),
        minify: args.minify,
    };
    let transformer = Transformer::new(options, Arc::new(engine));

    let result = match transformer.transform(&source) {
        Ok(result) => result,
        Err(TransformError::CompilationFailed { diagnostics }) => {
            eprintln!("Compilation failed with {} error(s):", diagnostics.len());
            for diagnostic in &diagnostics {
                eprintln!("  {}", diagnostic.render());
            }
            std::process::exit(1);
        }
        Err(TransformError::Engine(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let rendered = if args.format == "json" {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        result.code
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, rendered) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", rendered),
    }
}

/// Resolve the engine directory: flag first, then the environment.
pub fn resolve_engine_dir(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| std::env::var_os(ENGINE_DIR_ENV).map(PathBuf::from))
}

fn start_engine(engine_dir: Option<PathBuf>) -> Result<QuickJsEngine, String> {
    let dir = resolve_engine_dir(engine_dir).ok_or_else(|| {
        format!(
            "No engine directory: pass --engine-dir or set {}",
            ENGINE_DIR_ENV
        )
    })?;

    let loaded = EngineResources::load(&dir).map_err(|e| e.to_string())?;
    // Process-start initialization; a second run() in the same process
    // keeps the first store.
    let _ = resources::init(loaded);
    QuickJsEngine::from_global().map_err(|e| e.to_string())
}

fn read_input(path: Option<&std::path::Path>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
