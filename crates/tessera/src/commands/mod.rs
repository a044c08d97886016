//! CLI subcommands.

pub mod engine_info;
pub mod transform;
