//! Test-case generation over a compiled table and the tab-separated case file.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::encode::matcher::{RegFamily, SlotKind};
use crate::isa::compiled::CompiledEntry;
use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase};
use crate::loader::riscv::RiscvTarget;
use crate::testgen::render::{render_internal, render_reference};
use crate::testgen::sample::Sampler;
use crate::testgen::template::{Piece, Syntax, TestTemplate};

const RV32_BLACKLIST: &[&str] = &["lui", "c.lui", "auipc", "li"];

const RV64_BLACKLIST: &[&str] = &[
    "ssamoswap.w",
    "ssamoswap.w.aq",
    "ssamoswap.w.rl",
    "ssamoswap.w.aqrl",
    "lui",
    "c.lui",
    "auipc",
    "li",
    "li.44",
    "li.56",
    "li.64",
];

/// Which assembler a batch of cases is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseTarget {
    Aarch64,
    Riscv(RiscvTarget),
}

impl CaseTarget {
    fn blacklist(self) -> &'static [&'static str] {
        match self {
            CaseTarget::Aarch64 => &[],
            CaseTarget::Riscv(RiscvTarget::Rv32) => RV32_BLACKLIST,
            CaseTarget::Riscv(RiscvTarget::Rv64) => RV64_BLACKLIST,
        }
    }

    fn accepts(self, template: &TestTemplate) -> bool {
        match self {
            CaseTarget::Aarch64 => true,
            CaseTarget::Riscv(target) => template.isa.contains(target.flags()),
        }
    }
}

/// One generated case: the same instruction in both syntaxes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub internal: String,
    pub reference: String,
    /// Extension label the reference assembler needs, RISC-V only.
    pub extensions: Option<String>,
}

impl TestCase {
    pub fn line(&self) -> String {
        match &self.extensions {
            Some(extensions) => format!("{}\t{}\t{extensions}", self.internal, self.reference),
            None => format!("{}\t{}", self.internal, self.reference),
        }
    }
}

/// Rows whose reference syntax cannot express what the table encodes.
fn exemption(template: &TestTemplate) -> Option<&'static str> {
    if template.syntax != Syntax::Riscv {
        return None;
    }
    let mnemonic = template.mnemonic.as_str();
    let has_offset = template.has_slot(SlotKind::Offset);
    let has_text = |needle: &str| {
        template
            .pieces
            .iter()
            .any(|piece| matches!(piece, Piece::Text(text) if text.contains(needle)))
    };
    if mnemonic == "addi" && has_offset {
        return Some("addi with a relocation operand");
    }
    if has_offset && has_text("[") {
        return Some("memory operand with a relocation");
    }
    if mnemonic == "call" && template.has_slot(SlotKind::Register(RegFamily::X)) {
        return Some("call through a register");
    }
    if matches!(mnemonic, "cm.push" | "cm.pop" | "cm.popret" | "cm.popretz") {
        return Some("stack adjustment is written as the raw field");
    }
    if mnemonic.starts_with("fli.") {
        return Some("immediate operand is written as a register field");
    }
    None
}

/// Samples `samples` cases per row. Rows rejected by the target's blacklist or exemptions are
/// skipped; a row whose sample fails to encode is reported once and dropped.
pub fn generate(
    rows: &[CompiledEntry],
    target: CaseTarget,
    samples: usize,
    sampler: &mut Sampler,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<TestCase> {
    let mut cases = Vec::new();
    for row in rows {
        let template = TestTemplate::from_row(row);
        if !target.accepts(&template) || target.blacklist().contains(&template.mnemonic.as_str()) {
            continue;
        }
        if let Some(reason) = exemption(&template) {
            diagnostics.push(Diagnostic::warning(
                DiagnosticPhase::TestGeneration,
                "testgen.skipped",
                format!("skipping '{} {}': {reason}", row.mnemonic, row.matcher_text()),
                None,
            ));
            continue;
        }

        let mut row_cases = Vec::with_capacity(samples);
        for _ in 0..samples {
            let instance = template.sample(sampler);
            if let Err(err) = template.encode(&instance) {
                diagnostics.push(Diagnostic::warning(
                    DiagnosticPhase::TestGeneration,
                    "testgen.unencodable",
                    format!("'{} {}' rejected a sample: {err}", row.mnemonic, row.matcher_text()),
                    None,
                ));
                row_cases.clear();
                break;
            }
            let extensions = match target {
                CaseTarget::Aarch64 => None,
                CaseTarget::Riscv(_) => sampler.pick(&template.extensions).cloned(),
            };
            row_cases.push(TestCase {
                internal: render_internal(&template, &instance, sampler),
                reference: render_reference(&template, &instance),
                extensions,
            });
        }
        cases.extend(row_cases);
    }
    cases
}

/// Writes one case per line.
pub fn write_cases(path: &Path, cases: &[TestCase]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    for case in cases {
        writeln!(out, "{}", case.line())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::variant::IsaFlags;
    use crate::testgen::template::tests::{aarch64_row, riscv_row};

    #[test]
    fn generation_is_reproducible() {
        let rows = vec![
            aarch64_row("ADD", 0x9100_0000, "XSP, XSP, Imm, End, LitMod(LSL)", "R(0), R(5), Ubits(10, 12), Ulist(22, &[0, 12])"),
            aarch64_row("B", 0x5400_0000, "Dot, Cond, Offset", "Cond(0), Offset(BCOND)"),
        ];
        let run = |seed| {
            let mut diagnostics = Vec::new();
            let cases = generate(&rows, CaseTarget::Aarch64, 20, &mut Sampler::seeded(seed), &mut diagnostics);
            assert!(diagnostics.is_empty(), "{diagnostics:?}");
            cases
        };
        let first = run(5);
        assert_eq!(first.len(), 40);
        assert_eq!(first, run(5));
        assert!(first.iter().all(|case| case.extensions.is_none()));
        assert!(first[20..].iter().all(|case| case.reference.starts_with("b.")));
    }

    #[test]
    fn blacklists_and_exemptions() {
        let rows = vec![
            riscv_row("lui", IsaFlags::RV32 | IsaFlags::RV64, &["i"], "X, Imm", "R(7), UImm(20, 0), BitRange(12, 20, 0), Next"),
            riscv_row("cm.push", IsaFlags::RV32, &["zcmp"], "Xlist, Imm", "Rlist(4), UImm(6, 4), BitRange(2, 2, 4), Next"),
            riscv_row("add", IsaFlags::RV32 | IsaFlags::RV64, &["i"], "X, X, X", "R(7), R(15), R(20)"),
            riscv_row("addw", IsaFlags::RV64, &["i"], "X, X, X", "R(7), R(15), R(20)"),
        ];
        let mut diagnostics = Vec::new();
        let cases = generate(
            &rows,
            CaseTarget::Riscv(RiscvTarget::Rv32),
            3,
            &mut Sampler::seeded(1),
            &mut diagnostics,
        );
        assert_eq!(cases.len(), 3);
        assert!(cases.iter().all(|case| case.internal.starts_with("add ")));
        assert!(cases.iter().all(|case| case.extensions.as_deref() == Some("i")));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "testgen.skipped");
    }

    #[test]
    fn unencodable_rows_are_reported_once() {
        // `Sf` needs a general-purpose register among the operands.
        let rows = vec![aarch64_row("BAD", 0, "Imm", "Ubits(0, 4), Sf(31)")];
        let mut diagnostics = Vec::new();
        let cases = generate(&rows, CaseTarget::Aarch64, 8, &mut Sampler::seeded(2), &mut diagnostics);
        assert!(cases.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "testgen.unencodable");
    }

    #[test]
    fn writes_tab_separated_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cases.txt");
        let cases = [
            TestCase {
                internal: "add x1, x2, x3".into(),
                reference: "add x1, x2, x3".into(),
                extensions: Some("i".into()),
            },
            TestCase {
                internal: "nop".into(),
                reference: "nop".into(),
                extensions: None,
            },
        ];
        write_cases(&path, &cases).expect("write");
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "add x1, x2, x3\tadd x1, x2, x3\ti\nnop\tnop\n"
        );
    }
}
