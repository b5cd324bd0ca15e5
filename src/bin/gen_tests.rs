//! Samples differential test cases from a freshly compiled table.
//!
//! Every compiled row is sampled `<samples>` times; each case is written as the internal syntax,
//! the reference assembler syntax and, for RISC-V, the extension the reference assembler needs.
//! RISC-V case files are prefixed with the target (`rv32_cases.txt`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use opforge::config::BuildConfig;
use opforge::isa::diagnostic::{Diagnostic, report};
use opforge::isa::error::BuildError;
use opforge::loader::riscv::{RiscvTarget, load_archive};
use opforge::pipeline;
use opforge::testgen::{CaseTarget, Sampler, generate, write_cases};

#[derive(Parser, Debug)]
#[command(name = "gen_tests", about = "Generate differential assembler test cases")]
struct Cli {
    #[command(subcommand)]
    arch: Arch,
}

#[derive(Subcommand, Debug)]
enum Arch {
    Aarch64 {
        xml_dir: PathBuf,
        samples: usize,
        output: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    Riscv {
        opcodes_dir: PathBuf,
        arg_lut: PathBuf,
        samples: usize,
        output: PathBuf,
        #[command(flatten)]
        width: Width,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Width {
    #[arg(long)]
    rv32: bool,
    #[arg(long)]
    rv64: bool,
}

/// `dir/cases.txt` becomes `dir/rv32_cases.txt`.
fn prefixed(output: &Path, target: RiscvTarget) -> PathBuf {
    let name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{}_{name}", target.prefix()))
}

fn run(cli: Cli, diagnostics: &mut Vec<Diagnostic>) -> Result<(), BuildError> {
    let config = BuildConfig::default();
    match cli.arch {
        Arch::Aarch64 {
            xml_dir,
            samples,
            output,
            seed,
        } => {
            let groups = pipeline::aarch64_groups(&xml_dir, &config, diagnostics)?;
            let rows: Vec<_> = groups.into_iter().flat_map(|group| group.rows).collect();
            let cases = generate(&rows, CaseTarget::Aarch64, samples, &mut Sampler::seeded(seed), diagnostics);
            write_cases(&output, &cases)?;
            eprintln!("wrote {} cases to {}", cases.len(), output.display());
        }
        Arch::Riscv {
            opcodes_dir,
            arg_lut,
            samples,
            output,
            width,
            seed,
        } => {
            let target = if width.rv32 { RiscvTarget::Rv32 } else { RiscvTarget::Rv64 };
            config.validate()?;
            let archive = load_archive(&opcodes_dir, &arg_lut, diagnostics)?;
            let rows = pipeline::compile_riscv(&archive, target, &config, diagnostics)?;
            let cases = generate(
                &rows,
                CaseTarget::Riscv(target),
                samples,
                &mut Sampler::seeded(seed),
                diagnostics,
            );
            let path = prefixed(&output, target);
            write_cases(&path, &cases)?;
            eprintln!("wrote {} cases to {}", cases.len(), path.display());
        }
    }
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
