//! Expansion passes for line-DSL records. Each pass consumes a variant list and returns a new
//! one; records that need no expansion pass through unchanged.

use crate::encode::derive::operand_names;
use crate::isa::template::Trit;
use crate::isa::variant::CanonicalVariant;
use crate::loader::riscv::RiscvTarget;

const RV32_SUFFIXES: [&str; 2] = ["_rv32", ".rv32"];
const DYNAMIC_ROUNDING: u32 = 0b111;

/// Same variant without `field`, in both the field list and the operand template.
fn without_field(variant: &CanonicalVariant, field: &str) -> CanonicalVariant {
    let mut copy = variant.clone();
    copy.fields.remove(field);
    copy.operand_template = operand_names(variant)
        .filter(|name| *name != field)
        .collect::<Vec<_>>()
        .join(", ");
    copy
}

/// Drops the `_rv32`/`.rv32` suffix that keeps 32-bit-only forms apart from their 64-bit names.
pub fn strip_rv32_suffix(variants: Vec<CanonicalVariant>) -> Vec<CanonicalVariant> {
    variants
        .into_iter()
        .map(|mut variant| {
            if let Some(stem) = RV32_SUFFIXES
                .iter()
                .find_map(|suffix| variant.mnemonic.strip_suffix(suffix))
            {
                variant.mnemonic = stem.to_string();
            }
            variant
        })
        .collect()
}

/// Turns a record with `aq` and `rl` bits into the plain form followed by `.aq`, `.rl` and
/// `.aqrl` forms with those bits set.
pub fn expand_ordering(variants: Vec<CanonicalVariant>) -> Vec<CanonicalVariant> {
    let mut out = Vec::with_capacity(variants.len());
    for variant in variants {
        let (Some(aq), Some(rl)) = (variant.fields.get("aq"), variant.fields.get("rl")) else {
            out.push(variant);
            continue;
        };
        let (aq, rl) = (aq.offset, rl.offset);
        let base = without_field(&without_field(&variant, "aq"), "rl");
        for (suffix, aq_bit, rl_bit) in [
            ("", Trit::Zero, Trit::Zero),
            (".aq", Trit::One, Trit::Zero),
            (".rl", Trit::Zero, Trit::One),
            (".aqrl", Trit::One, Trit::One),
        ] {
            let mut form = base.clone();
            form.mnemonic.push_str(suffix);
            form.bits.set(aq, aq_bit);
            form.bits.set(rl, rl_bit);
            out.push(form);
        }
    }
    out
}

/// Follows every record with a rounding-mode field by a copy that fixes it to dynamic rounding.
pub fn expand_rounding(variants: Vec<CanonicalVariant>) -> Vec<CanonicalVariant> {
    let mut out = Vec::with_capacity(variants.len());
    for variant in variants {
        let dynamic = variant.fields.get("rm").map(|rm| {
            let mut dynamic = without_field(&variant, "rm");
            for bit in 0..rm.width {
                let value = if DYNAMIC_ROUNDING >> bit & 1 == 1 {
                    Trit::One
                } else {
                    Trit::Zero
                };
                dynamic.bits.set(rm.offset + bit, value);
            }
            dynamic
        });
        out.push(variant);
        out.extend(dynamic);
    }
    out
}

/// All passes, in order, for one target.
pub fn expand_riscv(variants: Vec<CanonicalVariant>, target: RiscvTarget) -> Vec<CanonicalVariant> {
    let variants = match target {
        RiscvTarget::Rv32 => strip_rv32_suffix(variants),
        RiscvTarget::Rv64 => variants,
    };
    expand_rounding(expand_ordering(variants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::field::{Field, FieldList};
    use crate::isa::template::BitTemplate;
    use crate::isa::variant::{ArchTag, InstrClass, IsaFlags};

    fn variant(name: &str, fields: &[(&str, u8, u8)], fixed_mask: u32, fixed_bits: u32) -> CanonicalVariant {
        CanonicalVariant {
            mnemonic: name.into(),
            title: name.into(),
            operand_template: fields
                .iter()
                .map(|(name, ..)| *name)
                .collect::<Vec<_>>()
                .join(", "),
            fields: FieldList::from_fields(
                fields
                    .iter()
                    .map(|(name, width, offset)| Field::new(*name, *width, *offset)),
            ),
            bits: BitTemplate::from_parts(32, fixed_mask, fixed_bits),
            arch: ArchTag::Riscv {
                isa: IsaFlags::RV64,
                extensions: vec!["a".into()],
                parent: None,
            },
            class: InstrClass::General,
        }
    }

    fn lr_w() -> CanonicalVariant {
        let fields = [("rd", 5, 7), ("rs1", 5, 15), ("aq", 1, 26), ("rl", 1, 25)];
        variant("lr.w", &fields, 0xF9F0_707F, 0x1000_202F)
    }

    #[test]
    fn ordering_bits_become_four_named_forms() {
        let forms = expand_ordering(vec![lr_w()]);
        let names: Vec<&str> = forms.iter().map(|form| form.mnemonic.as_str()).collect();
        assert_eq!(names, vec!["lr.w", "lr.w.aq", "lr.w.rl", "lr.w.aqrl"]);
        for form in &forms {
            assert_eq!(form.operand_template, "rd, rs1");
            assert!(!form.fields.contains("aq"));
            form.validate_strict().expect("aq and rl are fixed now");
        }
        assert_eq!(forms[0].bits.fixed_bits() & (3 << 25), 0);
        assert_eq!(forms[1].bits.fixed_bits() & (3 << 25), 1 << 26);
        assert_eq!(forms[2].bits.fixed_bits() & (3 << 25), 1 << 25);
        assert_eq!(forms[3].bits.fixed_bits() & (3 << 25), 3 << 25);
    }

    #[test]
    fn rounding_mode_gets_a_dynamic_default() {
        let fields = [("rd", 5, 7), ("rs1", 5, 15), ("rs2", 5, 20), ("rm", 3, 12)];
        let fadd = variant("fadd.s", &fields, 0xFE00_007F, 0x0000_0053);
        let forms = expand_rounding(vec![fadd.clone()]);
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0], fadd);
        assert_eq!(forms[1].operand_template, "rd, rs1, rs2");
        assert_eq!(forms[1].bits.fixed_bits(), 0x0000_7053);
        assert_eq!(forms[1].bits.fixed_mask(), 0xFE00_707F);
    }

    #[test]
    fn rv32_suffix_is_stripped_only_for_rv32() {
        let slli = variant("slli_rv32", &[("rd", 5, 7)], !0xF80, 0x1013);
        let zext = variant("zext.h.rv32", &[("rd", 5, 7)], !0xF80, 0x0800_403B);
        let out = expand_riscv(vec![slli.clone(), zext], RiscvTarget::Rv32);
        assert_eq!(out[0].mnemonic, "slli");
        assert_eq!(out[1].mnemonic, "zext.h");
        let out = expand_riscv(vec![slli], RiscvTarget::Rv64);
        assert_eq!(out[0].mnemonic, "slli_rv32");
    }
}
