//! Builds the `Ops!` encoding table of one architecture.
//!
//! `gen_opmap aarch64 <xml_dir> <output>` reads the AArch64 XML pages and writes the table through
//! the translation catalog. `gen_opmap riscv <opcodes_dir> <arg_lut> <output>` derives the RISC-V
//! table of both base widths from the opcode files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use opforge::config::BuildConfig;
use opforge::isa::diagnostic::{Diagnostic, report};
use opforge::isa::error::BuildError;
use opforge::isa::variant::InstrClass;
use opforge::pipeline;

#[derive(Parser, Debug)]
#[command(name = "gen_opmap", about = "Generate an instruction encoding table")]
struct Cli {
    #[command(subcommand)]
    arch: Arch,
}

#[derive(Subcommand, Debug)]
enum Arch {
    /// Table from a directory of AArch64 XML instruction pages.
    Aarch64 {
        xml_dir: PathBuf,
        output: PathBuf,
        /// Collapse rows that differ only in W/X register width.
        #[arg(long)]
        merge_width_pairs: bool,
        /// Also write catalog entry skeletons for one instruction class.
        #[arg(long, num_args = 2, value_names = ["CLASS", "PATH"])]
        skeleton: Option<Vec<String>>,
    },
    /// Table from a RISC-V opcodes checkout.
    Riscv {
        opcodes_dir: PathBuf,
        arg_lut: PathBuf,
        output: PathBuf,
        /// Read extension files under `unratified/` as well.
        #[arg(long)]
        include_unverified: bool,
    },
}

fn run(cli: Cli, diagnostics: &mut Vec<Diagnostic>) -> Result<(), BuildError> {
    match cli.arch {
        Arch::Aarch64 {
            xml_dir,
            output,
            merge_width_pairs,
            skeleton,
        } => {
            let config = BuildConfig {
                merge_width_pairs,
                ..BuildConfig::default()
            };
            if let Some([class, path]) = skeleton.as_deref() {
                let class: InstrClass = class
                    .parse()
                    .map_err(|_| BuildError::InvalidConfig(format!("unknown instruction class '{class}'")))?;
                let text = pipeline::aarch64_skeleton(&xml_dir, &class, &config, diagnostics)?;
                std::fs::write(path, text)?;
                eprintln!("wrote {} skeleton to {path}", class.as_str());
            }
            let changed = pipeline::build_aarch64(&xml_dir, &output, &config, diagnostics)?;
            eprintln!("{} {}", if changed { "wrote" } else { "unchanged" }, output.display());
        }
        Arch::Riscv {
            opcodes_dir,
            arg_lut,
            output,
            include_unverified,
        } => {
            let config = BuildConfig {
                include_unverified,
                ..BuildConfig::default()
            };
            let changed = pipeline::build_riscv(&opcodes_dir, &arg_lut, &output, &config, diagnostics)?;
            eprintln!("{} {}", if changed { "wrote" } else { "unchanged" }, output.display());
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
