//! Turns compiled test cases into Rust test sources.
//!
//! The input holds one `internal\treference[\textensions]\thexbytes` line per case, as written by
//! the reference toolchain step. Output files hold at most 800 tests each.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser};
use opforge::isa::diagnostic::{Diagnostic, report};
use opforge::isa::error::BuildError;
use opforge::testgen::{SourceTarget, parse_compiled_cases, write_sources};

#[derive(Parser, Debug)]
#[command(name = "emit_tests", about = "Emit Rust test sources from compiled test cases")]
struct Cli {
    #[command(flatten)]
    target: Target,
    input: PathBuf,
    output_dir: PathBuf,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Target {
    #[arg(long)]
    rv32: bool,
    #[arg(long)]
    rv64: bool,
    #[arg(long)]
    aarch64: bool,
}

impl Target {
    fn source_target(&self) -> SourceTarget {
        if self.rv32 {
            SourceTarget::Rv32
        } else if self.rv64 {
            SourceTarget::Rv64
        } else {
            SourceTarget::Aarch64
        }
    }
}

fn run(cli: Cli, diagnostics: &mut Vec<Diagnostic>) -> Result<(), BuildError> {
    let text = std::fs::read_to_string(&cli.input)?;
    let cases = parse_compiled_cases(&text, &cli.input, diagnostics);
    let written = write_sources(cli.target.source_target(), &cases, &cli.output_dir)?;
    eprintln!("wrote {} cases into {} files", cases.len(), written.len());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut diagnostics = Vec::new();
    let result = run(cli, &mut diagnostics);
    report(&diagnostics);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
