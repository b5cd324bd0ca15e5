//! Line-DSL ingestion: lexer, parser, field bounds, extension archive and the adapter that turns
//! selected records into canonical variants.

pub mod archive;
pub mod arg_lut;
pub mod lexer;
pub mod parser;
pub mod record;

use std::fmt;
use std::path::Path;

pub use archive::{Archive, Record, Selected};
pub use arg_lut::ArgLut;

use crate::config::BuildConfig;
use crate::isa::diagnostic::Diagnostic;
use crate::isa::error::BuildError;
use crate::isa::variant::{ArchTag, CanonicalVariant, InstrClass, IsaFlags};
use crate::loader::source::VariantSource;

/// Base integer width a build targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiscvTarget {
    Rv32,
    Rv64,
}

impl RiscvTarget {
    /// File-name prefix of target-specific extension files.
    pub fn prefix(self) -> &'static str {
        match self {
            RiscvTarget::Rv32 => "rv32",
            RiscvTarget::Rv64 => "rv64",
        }
    }

    pub fn flags(self) -> IsaFlags {
        match self {
            RiscvTarget::Rv32 => IsaFlags::RV32,
            RiscvTarget::Rv64 => IsaFlags::RV64,
        }
    }
}

impl fmt::Display for RiscvTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Loads the field table and the archive under `opcodes_dir` in one go.
pub fn load_archive(
    opcodes_dir: &Path,
    arg_lut: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Archive, BuildError> {
    let lut = ArgLut::load(arg_lut)?;
    Archive::load(opcodes_dir, &lut, diagnostics)
}

/// Adapter producing the variants of one target from a loaded archive.
pub struct RiscvSource<'a> {
    archive: &'a Archive,
    target: RiscvTarget,
    config: &'a BuildConfig,
}

impl<'a> RiscvSource<'a> {
    pub fn new(archive: &'a Archive, target: RiscvTarget, config: &'a BuildConfig) -> Self {
        Self {
            archive,
            target,
            config,
        }
    }

    pub fn target(&self) -> RiscvTarget {
        self.target
    }

    /// Extensions available for the target after the configured exclusions.
    pub fn extensions(&self) -> Vec<String> {
        self.archive
            .available_extensions(self.target.prefix(), self.config.include_unverified)
            .into_iter()
            .filter(|extension| self.config.keeps_riscv_extension(extension))
            .collect()
    }

    fn variant(&self, selected: &Selected<'_>) -> CanonicalVariant {
        let record = selected.record;
        CanonicalVariant {
            mnemonic: record.name.clone(),
            title: record.name.clone(),
            operand_template: record.encoding.order.join(", "),
            fields: record.encoding.fields.clone(),
            bits: record.encoding.template,
            arch: ArchTag::Riscv {
                isa: self.target.flags(),
                extensions: selected.labels.clone(),
                parent: record.parent.clone(),
            },
            class: InstrClass::General,
        }
    }
}

impl VariantSource for RiscvSource<'_> {
    fn name(&self) -> &str {
        self.target.prefix()
    }

    fn variants(&self, _diagnostics: &mut Vec<Diagnostic>) -> Result<Vec<CanonicalVariant>, BuildError> {
        let extensions = self.extensions();
        let selected = self
            .archive
            .select(self.target.prefix(), &extensions, self.config.include_unverified);
        let mut variants = Vec::with_capacity(selected.len());
        for item in &selected {
            let variant = self.variant(item);
            variant.validate_strict()?;
            variants.push(variant);
        }
        Ok(variants)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn archive() -> Archive {
        let lut = ArgLut::parse(
            "rd,11,7\nrs1,19,15\nrs2,24,20\nimm12,31,20\nvd,11,7\n",
            Path::new("arg_lut.csv"),
        )
        .expect("lut");
        let sources = [
            (Path::new("rv_i"), true, "addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3\n"),
            (Path::new("rv64_i"), true, "addiw rd rs1 imm12 14..12=0 6..2=0x06 1..0=3\n"),
            (Path::new("rv_v"), true, "vfoo vd rs1 rs2 31..25=0 14..12=7 6..0=0x57\n"),
        ];
        let mut diagnostics = Vec::new();
        let archive = Archive::from_sources(sources, &lut, &mut diagnostics).expect("archive");
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        archive
    }

    #[test]
    fn builds_tagged_variants_for_target() {
        let archive = archive();
        let config = BuildConfig::default();
        let source = RiscvSource::new(&archive, RiscvTarget::Rv64, &config);
        assert_eq!(source.extensions(), vec!["i"]);

        let mut diagnostics = Vec::new();
        let variants = source.variants(&mut diagnostics).expect("variants");
        let names: Vec<&str> = variants.iter().map(|variant| variant.mnemonic.as_str()).collect();
        assert_eq!(names, vec!["addi", "addiw"]);
        let addi = &variants[0];
        assert_eq!(addi.operand_template, "rd, rs1, imm12");
        assert_eq!(addi.bits.fixed_bits(), 0x13);
        assert_eq!(
            addi.arch,
            ArchTag::Riscv {
                isa: IsaFlags::RV64,
                extensions: vec!["i".to_string()],
                parent: None,
            }
        );
    }

    #[test]
    fn rv32_skips_rv64_files() {
        let archive = archive();
        let config = BuildConfig::default();
        let source = RiscvSource::new(&archive, RiscvTarget::Rv32, &config);
        let variants = source.variants(&mut Vec::new()).expect("variants");
        assert_eq!(variants.len(), 1);
        assert_eq!(source.name(), "rv32");
    }
}
