//! Field-to-encoder derivation for records that only declare field names.
//!
//! Every declared field is classified by name into a closed set of roles. Registers, name
//! operands and single-field immediates are encoded in declaration order; the parts of a
//! scattered immediate are collected and resolved as one shape after all other operands.

use crate::encode::command::{Command, Relocation};
use crate::encode::matcher::{Matcher, RegFamily};
use crate::encode::scattered;
use crate::isa::error::BuildError;
use crate::isa::field::Field;
use crate::isa::variant::CanonicalVariant;

/// Matchers and commands derived for one variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Derived {
    pub matchers: Vec<Matcher>,
    pub commands: Vec<Command>,
}

/// Register read flavors, by the constraint they put on the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RegisterKind {
    Any,
    NotZero,
    NotZeroOrTwo,
    Popular,
    SavedPair,
}

/// What a field name means to the encoder.
#[derive(Clone, Debug, PartialEq)]
enum FieldRole {
    Register(RegisterKind),
    /// `a=b`: the operand for `b` is written again into `a`.
    Repeat,
    RegisterList,
    /// Ordering or hint bits with no operand.
    Silent,
    RoundingMode,
    Csr,
    Fence,
    Offset(Relocation),
    Immediate(Vec<Command>),
    ScatteredPart,
}

fn classify(field: &Field) -> Option<FieldRole> {
    use RegisterKind::*;
    if field.alias().is_some() {
        return Some(FieldRole::Repeat);
    }
    let width = field.width;
    let at = field.offset;
    let role = match field.name.as_str() {
        "rd" | "rs1" | "rs2" | "rs3" | "c_rs2" => FieldRole::Register(Any),
        "rd_rs1_n0" | "rd_n0" | "rs1_n0" | "c_rs1_n0" | "c_rs2_n0" => FieldRole::Register(NotZero),
        "rd_n2" => FieldRole::Register(NotZeroOrTwo),
        "rd_p" | "rs1_p" | "rs2_p" | "rd_rs1_p" => FieldRole::Register(Popular),
        "c_sreg1" | "c_sreg2" => FieldRole::Register(SavedPair),
        "c_rlist" => FieldRole::RegisterList,
        "aq" | "rl" | "aqrl" | "fm" => FieldRole::Silent,
        "rm" => FieldRole::RoundingMode,
        "csr" => FieldRole::Csr,
        "pred" | "succ" => FieldRole::Fence,
        "jimm20" => FieldRole::Offset(Relocation::RvJump),
        "bs" | "shamtd" | "shamtw" | "zimm" => FieldRole::Immediate(vec![
            Command::UImm(width, 0),
            Command::BitRange(at, width, 0),
        ]),
        "c_index" => FieldRole::Immediate(vec![
            Command::UImmRange(0, 255),
            Command::BitRange(at, width, 0),
        ]),
        "rnum" => FieldRole::Immediate(vec![
            Command::UImmRange(0, 10),
            Command::BitRange(at, width, 0),
        ]),
        "imm20" | "imm12" => FieldRole::Immediate(vec![
            Command::SImm(width, 0),
            Command::BitRange(at, width, 0),
        ]),
        "c_uimm1" => FieldRole::Immediate(vec![Command::UImm(2, 1), Command::BitRange(at, 1, 1)]),
        "c_uimm2" => FieldRole::Immediate(vec![Command::UImm(2, 0), Command::Bits(at, vec![0, 1])]),
        "c_mop_t" => FieldRole::Immediate(vec![Command::UImmOdd(4, 1), Command::BitRange(at, 3, 1)]),
        "c_nzuimm5" => FieldRole::Immediate(vec![Command::UImmNo0(5, 0), Command::BitRange(at, 5, 0)]),
        "c_nzuimm10" => FieldRole::Immediate(vec![
            Command::UImmNo0(10, 2),
            Command::Bits(at, vec![5, 4, 9, 8, 7, 6, 2, 3]),
        ]),
        "c_imm12" => FieldRole::Immediate(vec![
            Command::SImm(12, 1),
            Command::Bits(at, vec![11, 4, 9, 8, 10, 6, 7, 3, 2, 1, 5]),
        ]),
        "c_uimm8sp_s" => FieldRole::Immediate(vec![
            Command::UImm(8, 2),
            Command::Bits(at, vec![5, 4, 3, 2, 7, 6]),
        ]),
        "c_uimm9sp_s" => FieldRole::Immediate(vec![
            Command::UImm(9, 3),
            Command::Bits(at, vec![5, 4, 3, 8, 7, 6]),
        ]),
        "c_spimm" => FieldRole::Immediate(vec![Command::UImm(6, 4), Command::BitRange(at, 2, 4)]),
        name if scattered::is_part(name) => FieldRole::ScatteredPart,
        _ => return None,
    };
    Some(role)
}

/// Source-order field names of a variant, as recorded in its operand template.
pub fn operand_names(variant: &CanonicalVariant) -> impl Iterator<Item = &str> {
    variant
        .operand_template
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Derives the matcher list and encoder commands for a line-DSL variant.
pub fn derive_riscv(variant: &CanonicalVariant) -> Result<Derived, BuildError> {
    let unhandled = |fields: Vec<String>| BuildError::UnhandledFieldCombination {
        mnemonic: variant.mnemonic.clone(),
        fields,
    };
    let family = if variant.mnemonic.starts_with('f') {
        RegFamily::F
    } else {
        RegFamily::X
    };

    let mut matchers = Vec::new();
    let mut commands = Vec::new();
    let mut parts: Vec<&Field> = Vec::new();

    for name in operand_names(variant) {
        let field = variant
            .fields
            .get(name)
            .ok_or_else(|| unhandled(vec![name.to_string()]))?;
        let role = classify(field).ok_or_else(|| unhandled(vec![field.name.clone()]))?;
        let at = field.offset;
        match role {
            FieldRole::Register(kind) => {
                matchers.push(Matcher::Reg(family));
                commands.push(match kind {
                    RegisterKind::Any => Command::R(at),
                    RegisterKind::NotZero => Command::Rno0(at),
                    RegisterKind::NotZeroOrTwo => Command::Rno02(at),
                    RegisterKind::Popular => Command::Rpop(at),
                    RegisterKind::SavedPair => Command::Rpops(at),
                });
            }
            FieldRole::Repeat => commands.extend([Command::Repeat, Command::R(at)]),
            FieldRole::RegisterList => {
                matchers.push(Matcher::Xlist);
                commands.push(Command::Rlist(at));
            }
            FieldRole::Silent => {}
            FieldRole::RoundingMode => {
                matchers.push(Matcher::Ident);
                commands.push(Command::RoundingMode(at));
            }
            FieldRole::Csr => {
                matchers.push(Matcher::Ident);
                commands.push(Command::Csr(at));
            }
            FieldRole::Fence => {
                matchers.push(Matcher::Ident);
                commands.push(Command::FenceSpec(at));
            }
            FieldRole::Offset(relocation) => {
                matchers.push(Matcher::Offset);
                commands.push(Command::Offset(relocation));
            }
            FieldRole::Immediate(steps) => {
                matchers.push(Matcher::Imm);
                commands.extend(steps);
                commands.push(Command::Next);
            }
            FieldRole::ScatteredPart => parts.push(field),
        }
    }

    if !parts.is_empty() {
        let names: Vec<&str> = parts.iter().map(|field| field.name.as_str()).collect();
        let shape = scattered::find_shape(&names)
            .ok_or_else(|| unhandled(names.iter().map(|name| name.to_string()).collect()))?;
        let steps = shape
            .commands(&parts)
            .ok_or_else(|| unhandled(names.iter().map(|name| name.to_string()).collect()))?;
        matchers.push(match shape.encoding {
            scattered::ShapeEncoding::Offset(_) => Matcher::Offset,
            scattered::ShapeEncoding::Immediate { .. } => Matcher::Imm,
        });
        commands.extend(steps);
    }

    Ok(Derived { matchers, commands })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::interp::{EncodeOptions, Operand, encode};
    use crate::encode::matcher::render_matchers;
    use crate::encode::command::render_commands;
    use crate::isa::field::FieldList;
    use crate::isa::template::BitTemplate;
    use crate::isa::variant::{ArchTag, InstrClass, IsaFlags};

    fn variant(mnemonic: &str, fields: &[(&str, u8, u8)], pattern: u32, width: u8) -> CanonicalVariant {
        let list = FieldList::from_fields(
            fields
                .iter()
                .map(|(name, width, offset)| Field::new(*name, *width, *offset)),
        );
        let word = if width == 16 { 0xFFFF } else { u32::MAX };
        CanonicalVariant {
            mnemonic: mnemonic.into(),
            title: mnemonic.into(),
            operand_template: fields
                .iter()
                .map(|(name, ..)| *name)
                .collect::<Vec<_>>()
                .join(", "),
            bits: BitTemplate::from_parts(width, word & !list.mask(), pattern),
            fields: list,
            arch: ArchTag::Riscv {
                isa: IsaFlags::RV32 | IsaFlags::RV64,
                extensions: vec!["i".into()],
                parent: None,
            },
            class: InstrClass::General,
        }
    }

    fn run(variant: &CanonicalVariant, operands: &[Operand]) -> u32 {
        let derived = derive_riscv(variant).expect("derive");
        encode(
            variant.bits.fixed_bits(),
            &derived.commands,
            operands,
            &EncodeOptions::default(),
        )
        .expect("encode")
    }

    fn x(index: u8) -> Operand {
        Operand::reg(RegFamily::X, index)
    }

    #[test]
    fn addi_keeps_declaration_order() {
        let addi = variant("addi", &[("rd", 5, 7), ("rs1", 5, 15), ("imm12", 12, 20)], 0x13, 32);
        let derived = derive_riscv(&addi).expect("derive");
        assert_eq!(render_matchers(&derived.matchers), "X, X, Imm");
        assert_eq!(
            render_commands(&derived.commands),
            "R(7), R(15), SImm(12, 0), BitRange(20, 12, 0), Next"
        );
        // addi x1, x2, -1 => 0xfff10093
        assert_eq!(run(&addi, &[x(1), x(2), Operand::Immediate(-1)]), 0xFFF1_0093);
    }

    #[test]
    fn store_parts_resolve_after_registers() {
        let sw = variant(
            "sw",
            &[("imm12hi", 7, 25), ("rs1", 5, 15), ("rs2", 5, 20), ("imm12lo", 5, 7)],
            0x2023,
            32,
        );
        let derived = derive_riscv(&sw).expect("derive");
        assert_eq!(render_matchers(&derived.matchers), "X, X, Imm");
        // sw x2, 8(x1) => 0x0020a423
        assert_eq!(run(&sw, &[x(1), x(2), Operand::Immediate(8)]), 0x0020_A423);
    }

    #[test]
    fn branch_parts_become_offset() {
        let beq = variant(
            "beq",
            &[("bimm12hi", 7, 25), ("rs1", 5, 15), ("rs2", 5, 20), ("bimm12lo", 5, 7)],
            0x63,
            32,
        );
        let derived = derive_riscv(&beq).expect("derive");
        assert_eq!(render_matchers(&derived.matchers), "X, X, Offset");
        assert_eq!(run(&beq, &[x(1), x(2), Operand::Immediate(-2)]), 0xFE20_8FE3);
    }

    #[test]
    fn float_mnemonics_use_float_registers_and_rounding_names() {
        let fadd = variant(
            "fadd.s",
            &[("rd", 5, 7), ("rs1", 5, 15), ("rs2", 5, 20), ("rm", 3, 12)],
            0x53,
            32,
        );
        let derived = derive_riscv(&fadd).expect("derive");
        assert_eq!(render_matchers(&derived.matchers), "F, F, F, Ident");
        let operands = [
            Operand::reg(RegFamily::F, 1),
            Operand::reg(RegFamily::F, 2),
            Operand::reg(RegFamily::F, 3),
            Operand::name("rtz"),
        ];
        // fadd.s f1, f2, f3, rtz => 0x003110d3
        assert_eq!(run(&fadd, &operands), 0x0031_10D3);
    }

    #[test]
    fn aliased_register_repeats_previous_operand() {
        // c.mv-style repeat: rs2=rs1 takes the value already given for rs1
        let zext = variant("pack.dup", &[("rd", 5, 7), ("rs1", 5, 15), ("rs2=rs1", 5, 20)], 0, 32);
        let derived = derive_riscv(&zext).expect("derive");
        assert_eq!(render_matchers(&derived.matchers), "X, X");
        assert_eq!(run(&zext, &[x(1), x(2)]), (2 << 20) | (2 << 15) | (1 << 7));
    }

    #[test]
    fn compressed_split_immediate() {
        // c.addi x1, -3 => nzimm[5] at 12, nzimm[4:0] at 2
        let addi = variant(
            "c.addi",
            &[("rd_rs1_n0", 5, 7), ("c_nzimm6lo", 5, 2), ("c_nzimm6hi", 1, 12)],
            0x1,
            16,
        );
        assert_eq!(run(&addi, &[x(1), Operand::Immediate(-3)]), 0x1 | (1 << 7) | (29 << 2) | (1 << 12));
    }

    #[test]
    fn ordering_bits_produce_no_operands() {
        let lr = variant("lr.w", &[("rd", 5, 7), ("rs1", 5, 15), ("aq", 1, 26), ("rl", 1, 25)], 0, 32);
        let derived = derive_riscv(&lr).expect("derive");
        assert_eq!(derived.matchers.len(), 2);
        assert_eq!(derived.commands, vec![Command::R(7), Command::R(15)]);
    }

    #[test]
    fn unknown_fields_and_shapes_are_fatal() {
        let odd = variant("odd", &[("rd", 5, 7), ("mystery", 4, 20)], 0, 32);
        let err = derive_riscv(&odd).expect_err("unknown");
        assert!(matches!(
            err,
            BuildError::UnhandledFieldCombination { ref fields, .. } if fields == &vec!["mystery".to_string()]
        ));

        let mixed = variant("mixed", &[("c_imm6lo", 5, 2), ("c_nzimm6hi", 1, 12)], 0, 16);
        let err = derive_riscv(&mixed).expect_err("mismatched parts");
        assert!(matches!(err, BuildError::UnhandledFieldCombination { ref fields, .. } if fields.len() == 2));
    }
}
