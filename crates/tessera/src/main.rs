//! Tessera - TypeScript bundle transform pipeline in Rust.
//!
//! Command-line host around the transform core: reads bundle text, runs it
//! through the packaged compiler, applies the configured failure policy and
//! writes the JavaScript output.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "TypeScript bundle transform pipeline in Rust", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform TypeScript bundle text into JavaScript (default command)
    Transform(commands::transform::TransformArgs),

    /// Report the resolved engine directory and resource payloads
    EngineInfo(commands::engine_info::EngineInfoArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Transform(args)) => commands::transform::run(args),
        Some(Commands::EngineInfo(args)) => commands::engine_info::run(args),
        None => {
            // Default to transform with default args (stdin to stdout)
            commands::transform::run(commands::transform::TransformArgs::default());
        }
    }
}
