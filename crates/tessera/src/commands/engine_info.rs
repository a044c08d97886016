//! Engine-info command - report the resolved engine directory and payloads.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use tessera_kiln::resources::{COMPILER_FILE, STDLIB_FILE};
use tessera_kiln::EngineResources;

use super::transform::{resolve_engine_dir, ENGINE_DIR_ENV};

#[derive(Args)]
pub struct EngineInfoArgs {
    /// Directory containing typescript.js and lib.d.ts
    /// (falls back to the TESSERA_ENGINE_DIR environment variable)
    #[arg(long)]
    pub engine_dir: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Serialize)]
struct EngineInfo {
    #[serde(rename = "engineDir")]
    engine_dir: String,
    #[serde(rename = "compilerBytes")]
    compiler_bytes: usize,
    #[serde(rename = "stdlibBytes")]
    stdlib_bytes: usize,
    #[serde(rename = "driverBytes")]
    driver_bytes: usize,
}

pub fn run(args: EngineInfoArgs) {
    let Some(dir) = resolve_engine_dir(args.engine_dir) else {
        eprintln!(
            "No engine directory: pass --engine-dir or set {}",
            ENGINE_DIR_ENV
        );
        std::process::exit(1);
    };

    let resources = match EngineResources::load(&dir) {
        Ok(resources) => resources,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let info = EngineInfo {
        engine_dir: dir.display().to_string(),
        compiler_bytes: resources.compiler.len(),
        stdlib_bytes: resources.stdlib.len(),
        driver_bytes: resources.driver.len(),
    };

    if args.format == "json" {
        match serde_json::to_string_pretty(&info) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize info: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("Engine directory: {}", info.engine_dir);
        println!("  {}: {} bytes", COMPILER_FILE, info.compiler_bytes);
        println!("  {}: {} bytes", STDLIB_FILE, info.stdlib_bytes);
        println!("  driver (embedded): {} bytes", info.driver_bytes);
    }
}
