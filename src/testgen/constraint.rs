//! Value constraints of operand slots, recovered from a row's command list.
//!
//! The commands are walked with the same cursor rules the encoder uses, so every command lands on
//! the slot it will read at assembly time.

use crate::encode::command::{Command, CursorStep, SpecialComm};
use crate::encode::matcher::{Matcher, Modifier, SlotKind};
use crate::encode::tables::{NameTable, fence_spec_names};
use crate::isa::field::mask_for_width;

const ALL_REGISTERS: u32 = u32::MAX;

#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    /// Register index drawn from a bit mask of allowed indices.
    Register(u32),
    /// The previous register plus one, wrapping at 32.
    NextRegister,
    /// RISC-V `{ra, s0-sN}` list code, `4..=15`.
    SavedList,
    /// Multiples of `step` within `min..=max`.
    Range {
        min: i64,
        max: i64,
        step: i64,
        nonzero: bool,
    },
    List(Vec<i64>),
    /// `1..=limit - previous`.
    SumWithPrevious(i64),
    Names(Vec<String>),
    Modifiers(Vec<Modifier>),
    /// Extend that fits the width of the index register before it.
    IndexExtend,
    Special(SpecialComm),
    /// CSR name or number.
    Csr,
    /// No command reads the slot.
    Free,
}

impl Constraint {
    fn range(min: i64, max: i64, step: i64) -> Self {
        Constraint::Range {
            min,
            max,
            step,
            nonzero: false,
        }
    }

    fn unsigned(bits: u8, scale: u8) -> Self {
        Self::range(0, i64::from(mask_for_width(bits)) << scale, 1 << scale)
    }

    fn signed(bits: u8, scale: u8) -> Self {
        let half = 1i64 << (bits - 1);
        Self::range(-half << scale, (half - 1) << scale, 1 << scale)
    }

    fn names(table: NameTable) -> Self {
        Constraint::Names(table.names().map(String::from).collect())
    }

    fn default_for(matcher: &Matcher, kind: SlotKind) -> Self {
        match (matcher, kind) {
            (Matcher::Mod(set), SlotKind::Modifier) => Constraint::Modifiers(set.members().to_vec()),
            (Matcher::RefIndex, SlotKind::Modifier) => Constraint::IndexExtend,
            (_, SlotKind::Register(_) | SlotKind::RegisterList) => Constraint::Register(ALL_REGISTERS),
            _ => Constraint::Free,
        }
    }

    /// Combines a constraint found later on the same slot with this one.
    fn refine(&mut self, other: Constraint) {
        match (&mut *self, other) {
            (Constraint::Register(mask), Constraint::Register(more)) => *mask &= more,
            (
                Constraint::Range {
                    min,
                    max,
                    step,
                    nonzero,
                },
                Constraint::Range {
                    min: other_min,
                    max: other_max,
                    step: other_step,
                    nonzero: other_nonzero,
                },
            ) => {
                *min = (*min).max(other_min);
                *max = (*max).min(other_max);
                *step = (*step).max(other_step);
                *nonzero |= other_nonzero;
            }
            (Constraint::Free | Constraint::Register(ALL_REGISTERS), other) => *self = other,
            _ => {}
        }
    }
}

/// What a single command says about the slot under the cursor.
fn from_command(command: &Command) -> Option<Constraint> {
    let constraint = match command {
        Command::R(_) => Constraint::Register(ALL_REGISTERS),
        Command::REven(_) => Constraint::Register(0x5555_5555),
        Command::RNoZr(_) => Constraint::Register(0x7FFF_FFFF),
        Command::R4(_) => Constraint::Register(0xFFFF),
        Command::RNext => Constraint::NextRegister,
        Command::Rno0(_) => Constraint::Register(!1),
        Command::Rno02(_) => Constraint::Register(!0b101),
        Command::Rpop(_) => Constraint::Register(0xFF00),
        Command::Rpops(_) => Constraint::Register(0x00FC_0300),
        Command::Rlist(_) => Constraint::SavedList,
        Command::Ubits(_, bits) | Command::BUbits(bits) => Constraint::unsigned(*bits, 0),
        Command::Uscaled(_, bits, scale) => Constraint::unsigned(*bits, *scale),
        Command::Ulist(_, options) => Constraint::List(options.iter().map(|&option| i64::from(option)).collect()),
        Command::Urange(_, min, max) | Command::BUrange(min, max) => {
            Constraint::range(i64::from(*min), i64::from(*max), 1)
        }
        Command::Usub(_, bits, base) => {
            let base = i64::from(*base);
            Constraint::range((base - i64::from(mask_for_width(*bits))).max(0), base, 1)
        }
        Command::Unegmod(_, bits) => Constraint::unsigned(*bits, 0),
        Command::Usumdec(_, bits) | Command::BUsum(bits) => Constraint::SumWithPrevious(1 << bits),
        Command::Ufields(offsets) => Constraint::unsigned(u8::try_from(offsets.len()).unwrap_or(32), 0),
        Command::Sbits(_, bits) => Constraint::signed(*bits, 0),
        Command::Sscaled(_, bits, scale) | Command::BSscaled(bits, scale) => Constraint::signed(*bits, *scale),
        Command::Special(_, special) => Constraint::Special(*special),
        Command::ExtendsW(_) | Command::ExtendsX(_) => Constraint::Modifiers(Vec::new()),
        Command::Cond(_) => Constraint::names(NameTable::Cond),
        Command::CondInv(_) => Constraint::Names(
            NameTable::Cond
                .names()
                .filter(|name| !matches!(*name, "al" | "nv"))
                .map(String::from)
                .collect(),
        ),
        Command::LitList(_, table) => Constraint::names(*table),
        Command::Offset(relocation) => match relocation.range() {
            Some((bits, scale)) => Constraint::signed(bits - scale, scale),
            None => Constraint::List(vec![0]),
        },
        Command::RoundingMode(_) => Constraint::names(NameTable::RoundingMode),
        Command::FenceSpec(_) => Constraint::Names(fence_spec_names()),
        Command::Csr(_) => Constraint::Csr,
        Command::UImm(bits, scale) => Constraint::range(
            0,
            i64::from(mask_for_width(*bits) & !mask_for_width(*scale)),
            1 << scale,
        ),
        Command::UImmNo0(bits, scale) => Constraint::Range {
            min: 0,
            max: i64::from(mask_for_width(*bits) & !mask_for_width(*scale)),
            step: 1 << scale,
            nonzero: true,
        },
        Command::SImm(bits, scale) => {
            let half = 1i64 << (bits - 1);
            Constraint::range(-half, half - (1 << scale), 1 << scale)
        }
        Command::SImmNo0(bits, scale) => {
            let half = 1i64 << (bits - 1);
            Constraint::Range {
                min: -half,
                max: half - (1 << scale),
                step: 1 << scale,
                nonzero: true,
            }
        }
        Command::UImmOdd(bits, scale) => {
            let low = i64::from(mask_for_width(*scale));
            Constraint::List(
                (0..=i64::from(mask_for_width(*bits)))
                    .filter(|value| value & low == low)
                    .collect(),
            )
        }
        Command::UImmRange(min, max) => Constraint::range(i64::from(*min), i64::from(*max), 1),
        _ => return None,
    };
    Some(constraint)
}

/// One constraint per flattened slot of `matchers`.
pub fn slot_constraints(matchers: &[Matcher], commands: &[Command]) -> Vec<Constraint> {
    let mut constraints: Vec<Constraint> = matchers
        .iter()
        .flat_map(|matcher| {
            matcher
                .slots()
                .into_iter()
                .map(move |kind| Constraint::default_for(matcher, kind))
        })
        .collect();

    let mut cursor = 0usize;
    for command in commands {
        let step = command.cursor_step();
        if matches!(step, CursorStep::Consume | CursorStep::Inspect) {
            if let (Some(slot), Some(found)) = (constraints.get_mut(cursor), from_command(command)) {
                match (slot, found) {
                    // Explicit extends exclude the `LSL` spelling, which selects the shifted form.
                    (Constraint::Modifiers(members), Constraint::Modifiers(_)) => {
                        members.retain(|modifier| *modifier != Modifier::Lsl);
                    }
                    (_, Constraint::Modifiers(_)) => {}
                    (slot, found) => slot.refine(found),
                }
            }
        }
        match step {
            CursorStep::Consume => cursor += 1,
            CursorStep::Move(delta) => cursor = cursor.saturating_add_signed(delta),
            CursorStep::Inspect | CursorStep::None => {}
        }
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(matchers: &str, commands: &str) -> Vec<Constraint> {
        slot_constraints(
            &Matcher::parse_list(matchers).expect("matchers"),
            &Command::parse_list(commands).expect("commands"),
        )
    }

    #[test]
    fn checks_and_slices_refine_the_same_slot() {
        let found = constraints(
            "X, Imm, Offset",
            "R(0), BUbits(6), Uslice(19, 5, 0), Uslice(31, 1, 5), A, Offset(TBZ)",
        );
        assert_eq!(found[0], Constraint::Register(ALL_REGISTERS));
        assert_eq!(found[1], Constraint::range(0, 63, 1));
        assert_eq!(found[2], Constraint::range(-(1 << 15), (1 << 15) - 4, 4));
    }

    #[test]
    fn riscv_validators_bound_scattered_immediates() {
        let found = constraints(
            "X, Imm",
            "Rpop(2), UImmNo0(10, 2), Bits(5, &[5, 4, 9, 8, 7, 6, 2, 3]), Next",
        );
        assert_eq!(found[0], Constraint::Register(0xFF00));
        assert_eq!(
            found[1],
            Constraint::Range {
                min: 0,
                max: 1020,
                step: 4,
                nonzero: true
            }
        );
        let odd = constraints("Imm", "UImmOdd(4, 1), BitRange(8, 3, 1), Next");
        assert_eq!(odd[0], Constraint::List(vec![1, 3, 5, 7, 9, 11, 13, 15]));
    }

    #[test]
    fn modifier_slots_follow_their_matcher() {
        let found = constraints(
            "X, XSP, W, End, Mod(EXTENDS_W)",
            "R(0), R(5), R(16), ExtendsX(13), Urange(10, 0, 4)",
        );
        match &found[3] {
            Constraint::Modifiers(members) => {
                assert!(!members.contains(&Modifier::Lsl));
                assert!(members.contains(&Modifier::Sxtw));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(found[4], Constraint::range(0, 4, 1));

        let index = constraints("X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 3])");
        assert_eq!(index[3], Constraint::IndexExtend);
        assert_eq!(index[4], Constraint::List(vec![0, 3]));
    }

    #[test]
    fn repeat_steps_back_onto_the_previous_register() {
        let found = constraints("X, X", "R(7), R(15), Repeat, Rno0(20)");
        assert_eq!(found[0], Constraint::Register(ALL_REGISTERS));
        assert_eq!(found[1], Constraint::Register(!1));
    }

    #[test]
    fn names_come_from_tables() {
        let found = constraints("Cond", "CondInv(12)");
        match &found[0] {
            Constraint::Names(names) => {
                assert!(names.iter().any(|name| name == "eq"));
                assert!(!names.iter().any(|name| name == "al"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(constraints("Ident", "Csr(20)")[0], Constraint::Csr);
    }
}
