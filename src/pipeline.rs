//! End-to-end build drivers: ingestion through emission for each architecture.

use std::path::Path;

use crate::config::BuildConfig;
use crate::emit::aarch64::{self as aarch64_table, TableGroup};
use crate::emit::digest::write_if_changed;
use crate::emit::fold::fold_all;
use crate::emit::riscv::{self as riscv_table, RiscvGroup};
use crate::encode::derive::derive_riscv;
use crate::isa::compiled::CompiledEntry;
use crate::isa::diagnostic::Diagnostic;
use crate::isa::error::BuildError;
use crate::isa::expand::expand_riscv;
use crate::isa::group::{group_by_mnemonic, merge_width_pairs};
use crate::isa::variant::{ArchTag, CanonicalVariant, InstrClass};
use crate::loader::aarch64::Aarch64Source;
use crate::loader::riscv::{Archive, RiscvSource, RiscvTarget, load_archive};
use crate::loader::source::VariantSource;
use crate::translate::assign::assign_group;
use crate::translate::map::TranslationMap;
use crate::translate::skeleton::skeleton;

/// Variants of `source` that pass the configured revision and class filters.
pub fn aarch64_variants(
    source: &dyn VariantSource,
    config: &BuildConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<CanonicalVariant>, BuildError> {
    let variants = source.variants(diagnostics)?;
    Ok(variants
        .into_iter()
        .filter(|variant| match &variant.arch {
            ArchTag::Aarch64 { variant: revision } => config.keeps_aarch64_variant(revision.as_deref()),
            ArchTag::Riscv { .. } => false,
        })
        .filter(|variant| config.keeps_aarch64_class(&variant.class))
        .collect())
}

/// Groups, assigns, optionally merges and folds the AArch64 variants into table groups.
pub fn compile_aarch64(
    variants: Vec<CanonicalVariant>,
    map: &TranslationMap,
    config: &BuildConfig,
) -> Result<Vec<TableGroup>, BuildError> {
    let mut groups = Vec::new();
    for group in group_by_mnemonic(variants) {
        let mut rows = assign_group(&group, map)?;
        if config.merge_width_pairs {
            rows = merge_width_pairs(rows);
        }
        fold_all(&mut rows)?;
        if !rows.is_empty() {
            groups.push(TableGroup {
                mnemonic: group.mnemonic,
                rows,
            });
        }
    }
    Ok(groups)
}

/// Loads `xml_dir` and compiles it with the built-in catalog.
pub fn aarch64_groups(
    xml_dir: &Path,
    config: &BuildConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<TableGroup>, BuildError> {
    config.validate()?;
    let source = Aarch64Source::load(xml_dir)?;
    let variants = aarch64_variants(&source, config, diagnostics)?;
    let map = TranslationMap::builtin()?;
    compile_aarch64(variants, &map, config)
}

/// Builds the AArch64 table at `output`. Returns whether the file changed.
pub fn build_aarch64(
    xml_dir: &Path,
    output: &Path,
    config: &BuildConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<bool, BuildError> {
    let groups = aarch64_groups(xml_dir, config, diagnostics)?;
    Ok(write_if_changed(output, &aarch64_table::write_table(&groups))?)
}

/// Catalog skeleton of one instruction class of `xml_dir`.
pub fn aarch64_skeleton(
    xml_dir: &Path,
    class: &InstrClass,
    config: &BuildConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<String, BuildError> {
    let source = Aarch64Source::load(xml_dir)?;
    let variants = aarch64_variants(&source, config, diagnostics)?;
    Ok(skeleton(&variants, class))
}

/// Expands, derives and folds the rows of one RISC-V target.
pub fn compile_riscv(
    archive: &Archive,
    target: RiscvTarget,
    config: &BuildConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<CompiledEntry>, BuildError> {
    let source = RiscvSource::new(archive, target, config);
    let variants = expand_riscv(source.variants(diagnostics)?, target);
    let mut rows = Vec::with_capacity(variants.len());
    for variant in &variants {
        let derived = derive_riscv(variant)?;
        rows.push(CompiledEntry::from_variant(variant, derived.matchers, derived.commands, 0));
    }
    fold_all(&mut rows)?;
    Ok(rows)
}

/// Rows of both targets paired into emission groups.
pub fn riscv_groups(
    opcodes_dir: &Path,
    arg_lut: &Path,
    config: &BuildConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<RiscvGroup>, BuildError> {
    config.validate()?;
    let archive = load_archive(opcodes_dir, arg_lut, diagnostics)?;
    let rv32 = compile_riscv(&archive, RiscvTarget::Rv32, config, diagnostics)?;
    let rv64 = compile_riscv(&archive, RiscvTarget::Rv64, config, diagnostics)?;
    Ok(riscv_table::build_groups(rv32, rv64))
}

/// Builds the RISC-V table at `output`. Returns whether the file changed.
pub fn build_riscv(
    opcodes_dir: &Path,
    arg_lut: &Path,
    output: &Path,
    config: &BuildConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<bool, BuildError> {
    let groups = riscv_groups(opcodes_dir, arg_lut, config, diagnostics)?;
    Ok(write_if_changed(output, &riscv_table::write_table(&groups))?)
}
