//! Alias grouping and width-pair merging.

use std::collections::BTreeMap;

use crate::encode::command::Command;
use crate::encode::matcher::{Matcher, RegFamily};
use crate::isa::compiled::CompiledEntry;
use crate::isa::template::Trit;
use crate::isa::variant::CanonicalVariant;

/// All variants filed under one mnemonic, in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MnemonicGroup {
    pub mnemonic: String,
    pub variants: Vec<CanonicalVariant>,
}

/// Groups variants by mnemonic. Groups are ordered by mnemonic; a group keeps the order in which
/// its variants were ingested.
pub fn group_by_mnemonic(variants: impl IntoIterator<Item = CanonicalVariant>) -> Vec<MnemonicGroup> {
    let mut groups: BTreeMap<String, Vec<CanonicalVariant>> = BTreeMap::new();
    for variant in variants {
        groups.entry(variant.mnemonic.clone()).or_default().push(variant);
    }
    groups
        .into_iter()
        .map(|(mnemonic, variants)| MnemonicGroup { mnemonic, variants })
        .collect()
}

fn widen(matchers: &[Matcher]) -> Option<Vec<Matcher>> {
    let mut changed = false;
    let widened = matchers
        .iter()
        .map(|matcher| match matcher.widened() {
            Some(wide) => {
                changed = true;
                wide
            }
            None => matcher.clone(),
        })
        .collect();
    changed.then_some(widened)
}

fn dual(matchers: &[Matcher]) -> Vec<Matcher> {
    matchers
        .iter()
        .map(|matcher| match matcher {
            Matcher::Reg(RegFamily::W) => Matcher::Reg(RegFamily::WX),
            Matcher::Reg(RegFamily::WSP) => Matcher::Reg(RegFamily::WXSP),
            other => other.clone(),
        })
        .collect()
}

/// Merges the rows of one mnemonic that differ only in general-purpose register width.
///
/// Rows with a matcher list already seen are dropped first. A narrow row then absorbs the wide
/// row whose matchers are its widened matchers, when both share their commands and fixed-bit
/// positions. Every fixed bit on which they disagree becomes variable and is written by `Sf`
/// (set for the wide form) or `Isf` (set for the narrow form).
///
/// The merged row takes the narrow row's slot and the wide row's slot disappears, so a wide form
/// listed after the narrow one moves ahead of any rows that sat between them.
pub fn merge_width_pairs(rows: Vec<CompiledEntry>) -> Vec<CompiledEntry> {
    let mut unique: Vec<CompiledEntry> = Vec::with_capacity(rows.len());
    for row in rows {
        if !unique.iter().any(|seen| seen.matchers == row.matchers) {
            unique.push(row);
        }
    }

    let mut absorbed = vec![false; unique.len()];
    let mut merged = Vec::with_capacity(unique.len());
    for index in 0..unique.len() {
        let row = &unique[index];
        let partner = widen(&row.matchers).and_then(|wide| {
            unique.iter().position(|other| {
                other.matchers == wide
                    && other.commands == row.commands
                    && other.bits.width() == row.bits.width()
                    && other.bits.fixed_mask() == row.bits.fixed_mask()
            })
        });
        let Some(partner) = partner else {
            merged.push((index, None));
            continue;
        };
        absorbed[partner] = true;
        merged.push((index, Some(partner)));
    }

    merged
        .into_iter()
        .filter(|(index, partner)| partner.is_some() || !absorbed[*index])
        .map(|(index, partner)| {
            let row = &unique[index];
            let Some(partner) = partner else {
                return row.clone();
            };
            let wide = &unique[partner];
            let mut out = row.clone();
            out.matchers = dual(&row.matchers);
            let differing = row.bits.fixed_difference(&wide.bits);
            for bit in (0..row.bits.width()).rev() {
                if differing >> bit & 1 == 0 {
                    continue;
                }
                out.bits.set(bit, Trit::Variable);
                out.commands.push(if wide.bits.get(bit) == Trit::One {
                    Command::Sf(bit)
                } else {
                    Command::Isf(bit)
                });
            }
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::interp::{EncodeOptions, Operand};
    use crate::isa::field::{Field, FieldList};
    use crate::isa::template::BitTemplate;
    use crate::isa::variant::{ArchTag, InstrClass};

    fn variant(mnemonic: &str, sf: u32) -> CanonicalVariant {
        CanonicalVariant {
            mnemonic: mnemonic.into(),
            title: format!("{mnemonic} (register)"),
            operand_template: "<Wd>,<Wn>".into(),
            fields: FieldList::from_fields([Field::new("Rn", 5, 5), Field::new("Rd", 5, 0)]),
            bits: BitTemplate::from_parts(32, !0x3FF, (sf << 31) | 0x5AC0_1000),
            arch: ArchTag::Aarch64 { variant: None },
            class: InstrClass::General,
        }
    }

    fn row(matchers: &str, sf: u32) -> CompiledEntry {
        CompiledEntry::from_variant(
            &variant("CLZ", sf),
            Matcher::parse_list(matchers).expect("matchers"),
            Command::parse_list("R(0), R(5)").expect("commands"),
            0,
        )
    }

    #[test]
    fn groups_sorted_by_mnemonic_in_discovery_order() {
        let groups = group_by_mnemonic([variant("RBIT", 0), variant("CLZ", 0), variant("CLZ", 1)]);
        let names: Vec<&str> = groups.iter().map(|group| group.mnemonic.as_str()).collect();
        assert_eq!(names, vec!["CLZ", "RBIT"]);
        assert_eq!(groups[0].variants.len(), 2);
        assert_eq!(groups[0].variants[1].bits.get(31), Trit::One);
    }

    #[test]
    fn merges_width_pair_without_changing_bytes() {
        let narrow = row("W, W", 0);
        let wide = row("X, X", 1);
        let merged = merge_width_pairs(vec![narrow.clone(), wide.clone()]);
        assert_eq!(merged.len(), 1);
        let dual = &merged[0];
        assert_eq!(dual.matcher_text(), "WX, WX");
        assert_eq!(dual.command_text(), "R(0), R(5), Sf(31)");
        assert_eq!(dual.bits.get(31), Trit::Variable);

        let options = EncodeOptions::default();
        for (original, family) in [(&narrow, RegFamily::W), (&wide, RegFamily::X)] {
            let operands = [Operand::reg(family, 3), Operand::reg(family, 17)];
            assert_eq!(
                dual.encode(&operands, &options),
                original.encode(&operands, &options)
            );
        }
    }

    #[test]
    fn keeps_rows_without_a_partner_and_drops_repeated_matchers() {
        let narrow = row("W, W", 0);
        let mut other = row("X, X", 1);
        other.commands = Command::parse_list("R(0), R(16)").expect("commands");
        let repeat = row("W, W", 1);
        let merged = merge_width_pairs(vec![narrow, repeat, other]);
        let texts: Vec<String> = merged.iter().map(CompiledEntry::matcher_text).collect();
        assert_eq!(texts, vec!["W, W", "X, X"]);
        assert_eq!(merged[0].bits.get(31), Trit::Zero);
    }

    #[test]
    fn merged_row_takes_the_narrow_slot() {
        let merged = merge_width_pairs(vec![row("W, W", 0), row("W, Imm", 0), row("X, X", 1)]);
        let texts: Vec<String> = merged.iter().map(CompiledEntry::matcher_text).collect();
        assert_eq!(texts, vec!["WX, WX", "W, Imm"]);

        let merged = merge_width_pairs(vec![row("X, X", 1), row("W, Imm", 0), row("W, W", 0)]);
        let texts: Vec<String> = merged.iter().map(CompiledEntry::matcher_text).collect();
        assert_eq!(texts, vec!["W, Imm", "WX, WX"]);
    }
}
