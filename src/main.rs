//! gengarc - compiles Gengar (.gengar) sources to JavaScript with a source map

mod backend;
mod compile;
mod frontend;
mod utils;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use crate::utils::{Error, Result};

/// Gengar to JavaScript compiler
#[derive(Parser, Debug)]
#[command(name = "gengarc")]
#[command(version)]
#[command(about = "Compiles Gengar (.gengar) sources to JavaScript with a source map")]
struct Cli {
    /// Input source file (.gengar)
    #[arg(value_name = "FILE", default_value = "demos/hello.gengar")]
    input: PathBuf,

    /// Output file (defaults to the input with a .js extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip writing the .js.map sibling
    #[arg(long)]
    no_source_map: bool,

    /// Print the parsed AST instead of compiling (for debugging)
    #[arg(long)]
    emit_ast: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .map_err(|e| Error::Io(format!("{}: {e}", cli.input.display())))?;

    if cli.emit_ast {
        let program = compile::parse(&source)?;
        println!("{program:#?}");
        return Ok(());
    }

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("js"));
    let map_path = out_path.with_extension("js.map");
    let out_name = file_name(&out_path);
    let map_name = file_name(&map_path);

    let output = compile::compile(&source, &cli.input.to_string_lossy(), &out_name)?;

    let mut code = output.code;
    if !cli.no_source_map {
        code.push_str(&format!("\n//# sourceMappingURL={map_name}"));
        let map = serde_json::to_string(&output.map).map_err(|e| Error::Io(e.to_string()))?;
        fs::write(&map_path, map).map_err(|e| Error::Io(format!("{}: {e}", map_path.display())))?;
        log::info!("wrote {}", map_path.display());
    }
    fs::write(&out_path, code).map_err(|e| Error::Io(format!("{}: {e}", out_path.display())))?;
    log::info!("wrote {}", out_path.display());
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
