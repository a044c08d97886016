//! # tessera_burnish
//!
//! Burnish - The output polishing stage for Tessera.
//!
//! ## Name Origin
//!
//! **Burnishing** is the final polish a mosaic surface receives once the
//! tiles are set. This crate compacts the pipeline's JavaScript output; it
//! is a best-effort optimization, never a correctness gate.

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Minify JavaScript text.
///
/// Pure and best-effort: if the input does not parse as JavaScript it is
/// returned unchanged rather than failing the pipeline. Minifying
/// already-minified text is a fixed point.
pub fn minify(source: &str) -> String {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();

    let parsed = Parser::new(&allocator, source, source_type).parse();
    if !parsed.errors.is_empty() {
        // Malformed-input passthrough.
        return source.to_string();
    }

    let options = CodegenOptions {
        minify: true,
        comments: CommentOptions::disabled(),
        ..Default::default()
    };
    Codegen::new().with_options(options).build(&parsed.program).code
}
