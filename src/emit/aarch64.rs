//! AArch64 table writer.

use std::fmt::Write as _;

use crate::isa::compiled::CompiledEntry;

pub const HEADER: &str = "// This file was generated by gen_opmap\nOps!(\n\n";
pub const FOOTER: &str = "\n);\n";

/// Compiled rows of one mnemonic in emission order.
#[derive(Clone, Debug, PartialEq)]
pub struct TableGroup {
    pub mnemonic: String,
    pub rows: Vec<CompiledEntry>,
}

fn write_group(out: &mut String, group: &TableGroup) {
    let _ = writeln!(out, "\"{}\" = [", group.mnemonic.to_lowercase());

    let first = group.rows.first().map(|row| row.title.as_str());
    let titled = group.rows.iter().any(|row| Some(row.title.as_str()) != first);
    let mut last_title: Option<&str> = None;
    for row in &group.rows {
        if titled && last_title != Some(row.title.as_str()) {
            last_title = Some(&row.title);
            let _ = writeln!(out, "    // {}", row.title);
        }
        let _ = writeln!(
            out,
            "    {} = [{}] => [{}];",
            row.bits.binary_literal(),
            row.matcher_text(),
            row.command_text()
        );
    }
    out.push_str("]\n");
}

/// Renders the whole table. Groups are written in the order given.
pub fn write_table(groups: &[TableGroup]) -> String {
    let mut out = String::from(HEADER);
    for group in groups {
        write_group(&mut out, group);
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
    use crate::isa::variant::{ArchTag, CanonicalVariant, InstrClass};

    fn row(title: &str, fixed_bits: u32, matchers: &str, commands: &str) -> CompiledEntry {
        let variant = CanonicalVariant {
            mnemonic: "MOV".into(),
            title: title.into(),
            operand_template: String::new(),
            fields: FieldList::new(),
            bits: BitTemplate::from_parts(32, 0xFFE0_0000, fixed_bits),
            arch: ArchTag::Aarch64 { variant: None },
            class: InstrClass::General,
        };
        CompiledEntry::from_variant(
            &variant,
            Matcher::parse_list(matchers).expect("matchers"),
            Command::parse_list(commands).expect("commands"),
            0,
        )
    }

    #[test]
    fn writes_titles_only_when_they_differ() {
        let groups = [
            TableGroup {
                mnemonic: "MOV".into(),
                rows: vec![
                    row("MOV (register)", 0x2A00_0000, "W, W", "R(0), R(16)"),
                    row("MOV (wide immediate)", 0x5280_0000, "W, Imm", "R(0), Special(5, WIDE_IMMEDIATE_W)"),
                ],
            },
            TableGroup {
                mnemonic: "NOP".into(),
                rows: vec![row("NOP", 0xD500_0000, "", "")],
            },
        ];
        let text = write_table(&groups);
        let expected = concat!(
            "// This file was generated by gen_opmap\nOps!(\n\n",
            "\"mov\" = [\n",
            "    // MOV (register)\n",
            "    0b00101010_00000000_00000000_00000000 = [W, W] => [R(0), R(16)];\n",
            "    // MOV (wide immediate)\n",
            "    0b01010010_10000000_00000000_00000000 = [W, Imm] => [R(0), Special(5, WIDE_IMMEDIATE_W)];\n",
            "]\n",
            "\"nop\" = [\n",
            "    0b11010101_00000000_00000000_00000000 = [] => [];\n",
            "]\n",
            "\n);\n",
        );
        assert_eq!(text, expected);
    }
}
