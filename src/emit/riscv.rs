//! RISC-V table writer. Rows of both base widths are paired per name, collapsed when identical,
//! and written in extension sections.

use std::fmt::Write as _;

use crate::isa::compiled::CompiledEntry;
use crate::isa::variant::{ArchTag, IsaFlags};

pub const HEADER: &str = "// The base of this file was generated by gen_opmap\nOps!(\n";
pub const FOOTER: &str = "\n)\n";

/// All rows sharing one instruction name.
#[derive(Clone, Debug, PartialEq)]
pub struct RiscvGroup {
    pub name: String,
    /// Rows valid for both widths.
    pub both: Vec<CompiledEntry>,
    pub rv32: Vec<CompiledEntry>,
    pub rv64: Vec<CompiledEntry>,
}

fn labels(row: &CompiledEntry) -> &[String] {
    row.arch.riscv_extensions()
}

fn same_encoding(a: &CompiledEntry, b: &CompiledEntry) -> bool {
    a.fields == b.fields && a.bits == b.bits && labels(a) == labels(b)
}

fn with_flags(mut row: CompiledEntry, flags: IsaFlags) -> CompiledEntry {
    if let ArchTag::Riscv { isa, .. } = &mut row.arch {
        *isa = flags;
    }
    row
}

impl RiscvGroup {
    fn new(name: String) -> Self {
        Self {
            name,
            both: Vec::new(),
            rv32: Vec::new(),
            rv64: Vec::new(),
        }
    }

    /// Pairs the RV32 and RV64 rows when both lists have the same length; each identical pair
    /// becomes a single row valid for both widths.
    fn deduplicate(&mut self) {
        if self.rv32.len() != self.rv64.len() {
            return;
        }
        let rv32 = std::mem::take(&mut self.rv32);
        let rv64 = std::mem::take(&mut self.rv64);
        for (narrow, wide) in rv32.into_iter().zip(rv64) {
            if same_encoding(&narrow, &wide) {
                self.both.push(with_flags(wide, IsaFlags::RV32 | IsaFlags::RV64));
            } else {
                self.rv32.push(narrow);
                self.rv64.push(wide);
            }
        }
    }

    /// Labels of the first row, used to order groups and to open extension sections.
    pub fn section(&self) -> &[String] {
        self.both
            .first()
            .or_else(|| self.rv32.first())
            .or_else(|| self.rv64.first())
            .map(labels)
            .unwrap_or_default()
    }

    pub fn rows(&self) -> impl Iterator<Item = &CompiledEntry> {
        self.both.iter().chain(&self.rv32).chain(&self.rv64)
    }
}

/// Groups the rows of both targets by name, collapses identical pairs and orders the groups by
/// extension section and then name.
pub fn build_groups(rv32: Vec<CompiledEntry>, rv64: Vec<CompiledEntry>) -> Vec<RiscvGroup> {
    let mut groups: Vec<RiscvGroup> = Vec::new();
    let mut place = |row: CompiledEntry, wide: bool| {
        let index = match groups.iter().position(|group| group.name == row.mnemonic) {
            Some(index) => index,
            None => {
                groups.push(RiscvGroup::new(row.mnemonic.clone()));
                groups.len() - 1
            }
        };
        if wide {
            groups[index].rv64.push(row);
        } else {
            groups[index].rv32.push(row);
        }
    };
    for row in rv32 {
        place(row, false);
    }
    for row in rv64 {
        place(row, true);
    }

    for group in &mut groups {
        group.deduplicate();
    }
    groups.sort_by(|a, b| a.section().cmp(b.section()).then_with(|| a.name.cmp(&b.name)));
    groups
}

/// `c_d` becomes `Ex_C | Ex_D`; alternative labels are separated by commas.
pub fn extension_list(labels: &[String]) -> String {
    let alternatives: Vec<String> = labels
        .iter()
        .map(|label| {
            label
                .split('_')
                .map(|extension| {
                    let mut chars = extension.chars();
                    let first = chars.next().map(|ch| ch.to_ascii_uppercase()).unwrap_or_default();
                    format!("Ex_{first}{}", chars.as_str().to_lowercase())
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();
    format!("[{}]", alternatives.join(", "))
}

fn comment(row: &CompiledEntry) -> String {
    let subformat = match &row.arch {
        ArchTag::Riscv {
            parent: Some((extension, name)),
            ..
        } => format!(" (subformat of {extension}::{name})"),
        _ => String::new(),
    };
    format!(
        "// {} {}{subformat} ({})",
        row.mnemonic,
        row.fields.join(", "),
        labels(row).join(", ")
    )
}

fn write_row(out: &mut String, row: &CompiledEntry, flags: IsaFlags) {
    let kind = if row.bits.width() == 16 { "Compressed" } else { "Single" };
    let _ = writeln!(out, "    {}", comment(row));
    let _ = writeln!(
        out,
        "    {kind}({}), {flags}, [{}] => [{}], {};",
        row.bits.binary_literal(),
        row.matcher_text(),
        row.command_text(),
        extension_list(labels(row))
    );
}

pub fn write_table(groups: &[RiscvGroup]) -> String {
    let mut out = String::from(HEADER);
    let mut section: Option<&[String]> = None;
    for group in groups {
        if section != Some(group.section()) {
            section = Some(group.section());
            let _ = writeln!(out, "\n// Extension(s) {}\n", group.section().join(", "));
        }
        let _ = writeln!(out, "\"{}\" = [", group.name);
        for row in &group.both {
            write_row(&mut out, row, IsaFlags::RV32 | IsaFlags::RV64);
        }
        for row in &group.rv32 {
            write_row(&mut out, row, IsaFlags::RV32);
        }
        for row in &group.rv64 {
            write_row(&mut out, row, IsaFlags::RV64);
        }
        out.push_str("],\n");
    }
    out.push_str(FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::command::Command;
    use crate::encode::matcher::Matcher;
    use crate::isa::field::FieldList;
    use crate::isa::template::BitTemplate;
    use crate::isa::variant::{CanonicalVariant, InstrClass};

    fn row(name: &str, isa: IsaFlags, labels: &[&str], fields: &[&str], bits: u32) -> CompiledEntry {
        let variant = CanonicalVariant {
            mnemonic: name.into(),
            title: name.into(),
            operand_template: fields.join(", "),
            fields: FieldList::new(),
            bits: BitTemplate::from_parts(32, 0x0000_707F, bits),
            arch: ArchTag::Riscv {
                isa,
                extensions: labels.iter().map(|label| label.to_string()).collect(),
                parent: None,
            },
            class: InstrClass::General,
        };
        CompiledEntry::from_variant(
            &variant,
            Matcher::parse_list("X, X, Imm").expect("matchers"),
            Command::parse_list("R(7), R(15), SImm(20, 12)").expect("commands"),
            0,
        )
    }

    #[test]
    fn renders_extension_labels() {
        assert_eq!(extension_list(&["c_d".into()]), "[Ex_C | Ex_D]");
        assert_eq!(extension_list(&["zba".into(), "zbb".into()]), "[Ex_Zba, Ex_Zbb]");
        assert_eq!(extension_list(&[]), "[]");
    }

    #[test]
    fn identical_pairs_collapse() {
        let addi = |isa| row("addi", isa, &["i"], &["rd", "rs1", "imm12"], 0x13);
        let groups = build_groups(vec![addi(IsaFlags::RV32)], vec![addi(IsaFlags::RV64)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].both.len(), 1);
        assert!(groups[0].rv32.is_empty());
        assert_eq!(
            groups[0].both[0].arch,
            ArchTag::Riscv {
                isa: IsaFlags::RV32 | IsaFlags::RV64,
                extensions: vec!["i".into()],
                parent: None,
            }
        );
    }

    #[test]
    fn differing_pairs_and_uneven_lists_stay_apart() {
        let rv32 = vec![row("slli", IsaFlags::RV32, &["i"], &["rd", "rs1", "shamtw"], 0x1013)];
        let rv64 = vec![
            row("slli", IsaFlags::RV64, &["i"], &["rd", "rs1", "shamtd"], 0x1013),
            row("addiw", IsaFlags::RV64, &["i"], &["rd", "rs1", "imm12"], 0x1B),
        ];
        let groups = build_groups(rv32, rv64);
        let names: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["addiw", "slli"]);
        assert_eq!(groups[1].rv32.len(), 1);
        assert_eq!(groups[1].rv64.len(), 1);
        assert!(groups[1].both.is_empty());
    }

    #[test]
    fn writes_sections_and_rows() {
        let groups = build_groups(
            vec![
                row("addi", IsaFlags::RV32, &["i"], &["rd", "rs1", "imm12"], 0x13),
                row("c.fld", IsaFlags::RV32, &["c_d"], &["rd_p", "rs1_p"], 0x2000),
            ],
            vec![row("addi", IsaFlags::RV64, &["i"], &["rd", "rs1", "imm12"], 0x13)],
        );
        let text = write_table(&groups);
        let expected = concat!(
            "// The base of this file was generated by gen_opmap\nOps!(\n",
            "\n// Extension(s) c_d\n\n",
            "\"c.fld\" = [\n",
            "    // c.fld rd_p, rs1_p (c_d)\n",
            "    Single(0b00000000_00000000_00100000_00000000), RV32, [X, X, Imm] => [R(7), R(15), SImm(20, 12)], [Ex_C | Ex_D];\n",
            "],\n",
            "\n// Extension(s) i\n\n",
            "\"addi\" = [\n",
            "    // addi rd, rs1, imm12 (i)\n",
            "    Single(0b00000000_00000000_00000000_00010011), RV32 | RV64, [X, X, Imm] => [R(7), R(15), SImm(20, 12)], [Ex_I];\n",
            "],\n",
            "\n)\n",
        );
        assert_eq!(text, expected);
    }
}
