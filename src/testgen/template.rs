//! Operand templates: the surface shape of a compiled row, with one placeholder per operand slot.

use crate::encode::command::Command;
use crate::encode::interp::{EncodeError, EncodeOptions, Operand};
use crate::encode::matcher::{Matcher, RegFamily, Size, SlotKind};
use crate::isa::compiled::CompiledEntry;
use crate::isa::variant::{ArchTag, IsaFlags};
use crate::testgen::constraint::{Constraint, slot_constraints};
use crate::testgen::sample::{Sampler, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    Aarch64,
    Riscv,
}

/// How the element arrangement of a vector operand is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrangement {
    /// Lane count follows the sample's register width.
    Sized,
    Lanes(u8),
    /// Element letter only, as in `v1.S[2]`.
    Element,
}

impl Arrangement {
    pub fn lanes(self, size: Size, full_width: bool) -> Option<u8> {
        match self {
            Arrangement::Sized => {
                let bytes = if full_width { 16 } else { 8 };
                Some((bytes / size.bytes()).max(1))
            }
            Arrangement::Lanes(lanes) => Some(lanes),
            Arrangement::Element => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Piece {
    Text(String),
    Slot(usize),
    Vector {
        slot: usize,
        size: Size,
        arrangement: Arrangement,
    },
    VectorList {
        slot: usize,
        count: u8,
        size: Size,
        arrangement: Arrangement,
    },
    /// Dropped as a whole when a sample leaves out optional operands.
    Optional(Vec<Piece>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    pub kind: SlotKind,
    pub constraint: Constraint,
    /// Register width chosen for this slot alone rather than once per instruction.
    pub own_width: bool,
    pub optional: bool,
}

/// One sampled instruction: a value per slot plus the choices shared by all slots.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub values: Vec<Value>,
    pub full_width: bool,
    pub dropped_optionals: bool,
}

impl Instance {
    pub fn operands(&self) -> Vec<Operand> {
        self.values.iter().map(Value::operand).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestTemplate {
    pub syntax: Syntax,
    pub mnemonic: String,
    pub pieces: Vec<Piece>,
    pub slots: Vec<Slot>,
    pub isa: IsaFlags,
    /// Alternative extension labels of a RISC-V row.
    pub extensions: Vec<String>,
    base: u32,
    commands: Vec<Command>,
}

fn text(value: impl Into<String>) -> Piece {
    Piece::Text(value.into())
}

/// Pieces of one matcher. `next` is the index of the first slot it owns.
fn matcher_pieces(matcher: &Matcher, next: usize, syntax: Syntax) -> Vec<Piece> {
    let slot = Piece::Slot(next);
    match matcher {
        Matcher::Dot | Matcher::End => Vec::new(),
        Matcher::Lit(literal) => vec![text(literal.as_str())],
        Matcher::LitInt(value) => vec![text(format!("#{value}"))],
        Matcher::LitFloat(value) => vec![text(format!("#{value:?}"))],
        Matcher::Imm if syntax == Syntax::Aarch64 => vec![text("#"), slot],
        Matcher::Ident | Matcher::Cond | Matcher::Imm | Matcher::Reg(_) | Matcher::Offset | Matcher::Xlist => {
            vec![slot]
        }
        Matcher::V(size) => vec![Piece::Vector {
            slot: next,
            size: *size,
            arrangement: Arrangement::Sized,
        }],
        Matcher::VStatic(size, lanes) => vec![Piece::Vector {
            slot: next,
            size: *size,
            arrangement: Arrangement::Lanes(*lanes),
        }],
        Matcher::VElement(size) => vec![
            Piece::Vector {
                slot: next,
                size: *size,
                arrangement: Arrangement::Element,
            },
            text("["),
            Piece::Slot(next + 1),
            text("]"),
        ],
        Matcher::VElementStatic(size, index) => vec![
            Piece::Vector {
                slot: next,
                size: *size,
                arrangement: Arrangement::Element,
            },
            text(format!("[{index}]")),
        ],
        Matcher::VStaticElement(size, lanes) => vec![
            Piece::Vector {
                slot: next,
                size: *size,
                arrangement: Arrangement::Lanes(*lanes),
            },
            text("["),
            Piece::Slot(next + 1),
            text("]"),
        ],
        Matcher::RegList(count, size) => vec![Piece::VectorList {
            slot: next,
            count: *count,
            size: *size,
            arrangement: Arrangement::Sized,
        }],
        Matcher::RegListStatic(count, size, lanes) => vec![Piece::VectorList {
            slot: next,
            count: *count,
            size: *size,
            arrangement: Arrangement::Lanes(*lanes),
        }],
        Matcher::RegListElement(count, size) => vec![
            Piece::VectorList {
                slot: next,
                count: *count,
                size: *size,
                arrangement: Arrangement::Element,
            },
            text("["),
            Piece::Slot(next + 1),
            text("]"),
        ],
        Matcher::RefBase => vec![text("["), slot, text("]")],
        Matcher::RefOffset => vec![text("["), slot, text(", #"), Piece::Slot(next + 1), text("]")],
        Matcher::RefPre => vec![text("["), slot, text(", #"), Piece::Slot(next + 1), text("]!")],
        Matcher::RefIndex => vec![
            text("["),
            slot,
            text(", "),
            Piece::Slot(next + 1),
            Piece::Optional(vec![
                text(", "),
                Piece::Slot(next + 2),
                text(" #"),
                Piece::Slot(next + 3),
            ]),
            text("]"),
        ],
        Matcher::LitMod(modifier) => vec![text(format!("{} #", modifier.name())), slot],
        Matcher::Mod(_) => vec![slot, text(" #"), Piece::Slot(next + 1)],
    }
}

/// Lays out operands after the mnemonic: `.` glues the next matcher to the mnemonic, operands are
/// separated by commas, and everything after `End` becomes one optional group.
fn layout(matchers: &[Matcher], syntax: Syntax) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut optional: Option<Vec<Piece>> = None;
    let mut operands = 0usize;
    let mut glued = false;
    let mut next = 0usize;

    for matcher in matchers {
        match matcher {
            Matcher::Dot => {
                glued = true;
                pieces.push(text("."));
                continue;
            }
            Matcher::End => {
                optional.get_or_insert_with(Vec::new);
                continue;
            }
            _ => {}
        }
        let target = optional.as_mut().unwrap_or(&mut pieces);
        if glued {
            glued = false;
        } else {
            target.push(text(if operands == 0 { " " } else { ", " }));
            operands += 1;
        }
        target.extend(matcher_pieces(matcher, next, syntax));
        next += matcher.slots().len();
    }
    if let Some(group) = optional.filter(|group| !group.is_empty()) {
        pieces.push(Piece::Optional(group));
    }
    pieces
}

fn mark_optional(pieces: &[Piece], inside: bool, slots: &mut [Slot]) {
    for piece in pieces {
        match piece {
            Piece::Slot(index) | Piece::Vector { slot: index, .. } | Piece::VectorList { slot: index, .. } => {
                if let Some(slot) = slots.get_mut(*index) {
                    slot.optional |= inside;
                }
            }
            Piece::Optional(group) => mark_optional(group, true, slots),
            Piece::Text(_) => {}
        }
    }
}

impl TestTemplate {
    pub fn from_row(row: &CompiledEntry) -> Self {
        let (syntax, isa, extensions) = match &row.arch {
            ArchTag::Aarch64 { .. } => (Syntax::Aarch64, IsaFlags::empty(), Vec::new()),
            ArchTag::Riscv { isa, extensions, .. } => (Syntax::Riscv, *isa, extensions.clone()),
        };
        let constraints = slot_constraints(&row.matchers, &row.commands);
        let mut slots: Vec<Slot> = Vec::with_capacity(constraints.len());
        for matcher in &row.matchers {
            for (position, kind) in matcher.slots().into_iter().enumerate() {
                slots.push(Slot {
                    kind,
                    constraint: constraints.get(slots.len()).cloned().unwrap_or(Constraint::Free),
                    own_width: matches!(matcher, Matcher::RefIndex) && position == 1,
                    optional: false,
                });
            }
        }
        let pieces = layout(&row.matchers, syntax);
        mark_optional(&pieces, false, &mut slots);

        Self {
            syntax,
            mnemonic: row.mnemonic.to_lowercase(),
            pieces,
            slots,
            isa,
            extensions,
            base: row.bits.fixed_bits(),
            commands: row.commands.clone(),
        }
    }

    pub fn has_optionals(&self) -> bool {
        self.slots.iter().any(|slot| slot.optional)
    }

    pub fn has_slot(&self, kind: SlotKind) -> bool {
        self.slots.iter().any(|slot| slot.kind == kind)
    }

    /// Whether a `W` register sits right before an optional group: dropping the group there would
    /// select the shifted-register or `LSL` reading instead.
    fn pins_optionals(&self, values: &[Value]) -> bool {
        fn walk(pieces: &[Piece], values: &[Value], last: &mut Option<usize>) -> bool {
            for piece in pieces {
                match piece {
                    Piece::Slot(index) => *last = Some(*index),
                    Piece::Vector { slot, .. } | Piece::VectorList { slot, .. } => *last = Some(*slot),
                    Piece::Optional(group) => {
                        let narrow = last
                            .and_then(|index| values.get(index))
                            .and_then(Value::register_family)
                            .is_some_and(RegFamily::is_narrow);
                        if narrow || walk(group, values, last) {
                            return true;
                        }
                    }
                    Piece::Text(_) => {}
                }
            }
            false
        }
        walk(&self.pieces, values, &mut None)
    }

    fn family(&self, slot: &Slot, wide: bool) -> Option<RegFamily> {
        match slot.kind {
            SlotKind::Register(RegFamily::WX) => Some(if wide { RegFamily::X } else { RegFamily::W }),
            SlotKind::Register(RegFamily::WXSP) => Some(if wide { RegFamily::XSP } else { RegFamily::WSP }),
            SlotKind::Register(family) => Some(family),
            SlotKind::RegisterList => Some(match self.syntax {
                Syntax::Aarch64 => RegFamily::V,
                Syntax::Riscv => RegFamily::X,
            }),
            _ => None,
        }
    }

    /// Chooses a value for every slot, then possibly drops the optional operands.
    pub fn sample(&self, sampler: &mut Sampler) -> Instance {
        let wide = sampler.coin();
        let full_width = sampler.coin();
        let mut values: Vec<Value> = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let wide = if slot.own_width { sampler.coin() } else { wide };
            let value = sampler.value(&slot.constraint, self.family(slot, wide), &values);
            values.push(value);
        }

        let mut dropped_optionals = false;
        if self.has_optionals() && !self.pins_optionals(&values) && sampler.coin() {
            dropped_optionals = true;
            for (slot, value) in self.slots.iter().zip(values.iter_mut()) {
                if slot.optional {
                    *value = Value::Omitted;
                }
            }
        }
        Instance {
            values,
            full_width,
            dropped_optionals,
        }
    }

    /// Runs the row's encoder on a sample.
    pub fn encode(&self, instance: &Instance) -> Result<u32, EncodeError> {
        let options = EncodeOptions {
            simd_full_width: instance.full_width,
        };
        crate::encode::interp::encode(self.base, &self.commands, &instance.operands(), &options)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::isa::field::FieldList;
    use crate::isa::template::BitTemplate;
    use crate::isa::variant::{CanonicalVariant, InstrClass};

    pub(crate) fn aarch64_row(mnemonic: &str, fixed_bits: u32, matchers: &str, commands: &str) -> CompiledEntry {
        let variant = CanonicalVariant {
            mnemonic: mnemonic.into(),
            title: mnemonic.into(),
            operand_template: String::new(),
            fields: FieldList::new(),
            bits: BitTemplate::from_parts(32, 0, fixed_bits),
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

    pub(crate) fn riscv_row(name: &str, isa: IsaFlags, labels: &[&str], matchers: &str, commands: &str) -> CompiledEntry {
        let variant = CanonicalVariant {
            mnemonic: name.into(),
            title: name.into(),
            operand_template: String::new(),
            fields: FieldList::new(),
            bits: BitTemplate::from_parts(32, 0, 0x13),
            arch: ArchTag::Riscv {
                isa,
                extensions: labels.iter().map(|label| label.to_string()).collect(),
                parent: None,
            },
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
    fn lays_out_optional_suffix() {
        let row = aarch64_row("MOVZ", 0xD280_0000, "X, Imm, End, LitMod(LSL)", "R(0), Ubits(5, 16), Ulist(21, &[0, 16, 32, 48])");
        let template = TestTemplate::from_row(&row);
        assert_eq!(
            template.pieces,
            vec![
                text(" "),
                Piece::Slot(0),
                text(", "),
                text("#"),
                Piece::Slot(1),
                Piece::Optional(vec![text(", "), text("LSL #"), Piece::Slot(2)]),
            ]
        );
        assert!(template.slots[2].optional);
        assert!(!template.slots[1].optional);
    }

    #[test]
    fn dot_glues_to_mnemonic() {
        let row = aarch64_row("B", 0x5400_0000, "Dot, Cond, Offset", "Cond(0), Offset(BCOND)");
        let template = TestTemplate::from_row(&row);
        assert_eq!(
            template.pieces,
            vec![text("."), Piece::Slot(0), text(" "), Piece::Slot(1)]
        );
    }

    #[test]
    fn index_register_width_is_chosen_per_slot() {
        let row = aarch64_row("LDR", 0xF860_0800, "X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 3])");
        let template = TestTemplate::from_row(&row);
        assert!(template.slots[2].own_width);
        assert!(template.slots[3].optional && template.slots[4].optional);
        assert!(!template.slots[2].optional);
    }

    #[test]
    fn narrow_register_before_extend_keeps_the_suffix() {
        let row = aarch64_row(
            "ADD",
            0x0B20_0000,
            "W, WSP, W, End, Mod(EXTENDS)",
            "R(0), R(5), R(16), ExtendsW(13), Urange(10, 0, 4)",
        );
        let template = TestTemplate::from_row(&row);
        let mut sampler = Sampler::seeded(11);
        for _ in 0..32 {
            let instance = template.sample(&mut sampler);
            assert!(!instance.dropped_optionals);
            template.encode(&instance).expect("encodable");
        }
    }

    #[test]
    fn samples_are_encodable() {
        let rows = [
            aarch64_row("ADD", 0x9100_0000, "XSP, XSP, Imm, End, LitMod(LSL)", "R(0), R(5), Ubits(10, 12), Ulist(22, &[0, 12])"),
            aarch64_row("TBZ", 0x3600_0000, "X, Imm, Offset", "R(0), BUbits(6), Uslice(19, 5, 0), Uslice(31, 1, 5), A, Offset(TBZ)"),
            aarch64_row("BFC", 0x3300_03E0, "W, Imm, Imm", "R(0), Unegmod(16, 5), BUsum(5), Urange(10, 1, 32)"),
            aarch64_row("LDR", 0xF860_0800, "X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 3])"),
            aarch64_row("MOV", 0x5280_0000, "W, Imm", "R(0), Special(5, WIDE_IMMEDIATE_W)"),
            aarch64_row("ORR", 0xB200_0000, r#"Dot, Lit("logical"), XSP, Imm"#, "R(0), Special(10, LOGICAL_IMMEDIATE_X)"),
            aarch64_row("ADD", 0x0E20_8400, "V(BYTE), V(BYTE), V(BYTE)", "R(0), R(5), R(16), Rwidth(30)"),
            aarch64_row("DMB", 0xD503_30BF, "Ident", r#"LitList(8, "BARRIER_OPS")"#),
            riscv_row("c.addi4spn", IsaFlags::RV32, &["c"], "X, Imm", "Rpop(2), UImmNo0(10, 2), Bits(5, &[5, 4, 9, 8, 7, 6, 2, 3]), Next"),
            riscv_row("cm.push", IsaFlags::RV32, &["zcmp"], "Xlist, Imm", "Rlist(4), UImm(6, 4), BitRange(2, 2, 4), Next"),
            riscv_row("csrrw", IsaFlags::RV32, &["zicsr"], "X, Ident, X", "R(7), Csr(20), R(15)"),
            riscv_row("fence", IsaFlags::RV32, &["i"], "Ident, Ident", "FenceSpec(24), FenceSpec(20)"),
        ];
        let mut sampler = Sampler::seeded(42);
        for row in &rows {
            let template = TestTemplate::from_row(row);
            for _ in 0..64 {
                let instance = template.sample(&mut sampler);
                if let Err(err) = template.encode(&instance) {
                    panic!("{}: {err} for {:?}", row.mnemonic, instance.values);
                }
            }
        }
    }
}
