//! Compilation pipeline
//!
//! Glue from source text to generated code and source map.

use crate::backend::emit::emit_program;
use crate::backend::sourcemap::{to_string_with_source_map, Output};
use crate::frontend::ast::Program;
use crate::frontend::parser::Parser;
use crate::utils::Result;

/// Parse a source text into its program AST.
pub fn parse(source: &str) -> Result<Program> {
    Parser::new(source).parse()
}

/// Compile a Gengar source text. `source_file` names the input inside the
/// source map; `out_file` is the generated file name recorded there.
pub fn compile(source: &str, source_file: &str, out_file: &str) -> Result<Output> {
    log::debug!("parsing {source_file}");
    let program = parse(source)?;
    log::debug!("emitting {} top-level declarations", program.body.len());
    let fragment = emit_program(&program)?;
    Ok(to_string_with_source_map(&fragment, source_file, out_file))
}
