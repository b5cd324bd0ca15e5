//! Reference encoder: executes a compiled command list against concrete operands.
//!
//! The generated table is consumed by an assembler elsewhere; this interpreter gives the build
//! its own executable meaning for a row, so that derived encoders, folding and width-pair merging
//! can be checked against known instruction words.

use std::error::Error;
use std::fmt;

use crate::encode::command::{Command, CursorStep, Relocation, SpecialComm};
use crate::encode::immediates::{
    encode_float_immediate, encode_inverted_wide_immediate, encode_logical_immediate,
    encode_stretched_immediate, encode_wide_immediate,
};
use crate::encode::matcher::{Modifier, RegFamily};
use crate::encode::tables::{NameTable, fence_spec};
use crate::isa::field::mask_for_width;

/// One flattened operand slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Register { family: RegFamily, index: u8 },
    /// A register list starting at `first` with `count` members.
    RegisterList { first: u8, count: u8 },
    Immediate(i64),
    Float(f64),
    Name(String),
    Modifier(Modifier),
    /// An omitted optional operand.
    Default,
}

impl Operand {
    pub fn reg(family: RegFamily, index: u8) -> Self {
        Operand::Register { family, index }
    }

    pub fn name(name: &str) -> Self {
        Operand::Name(name.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeErrorKind {
    MissingArgument,
    TrailingArguments,
    WrongOperandKind,
    OutOfRange,
    MisalignedImmediate,
    ExcludedZero,
    RegisterNotAllowed,
    UnknownName(String),
    Unencodable,
}

/// An operand rejected by a row's encoder. `slot` is the flattened operand index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeError {
    pub slot: usize,
    pub kind: EncodeErrorKind,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot;
        match &self.kind {
            EncodeErrorKind::MissingArgument => write!(f, "operand {slot}: missing argument"),
            EncodeErrorKind::TrailingArguments => write!(f, "operand {slot}: unexpected extra arguments"),
            EncodeErrorKind::WrongOperandKind => write!(f, "operand {slot}: wrong operand kind"),
            EncodeErrorKind::OutOfRange => write!(f, "operand {slot}: value out of range"),
            EncodeErrorKind::MisalignedImmediate => write!(f, "operand {slot}: misaligned immediate"),
            EncodeErrorKind::ExcludedZero => write!(f, "operand {slot}: value cannot be zero"),
            EncodeErrorKind::RegisterNotAllowed => write!(f, "operand {slot}: register not allowed here"),
            EncodeErrorKind::UnknownName(name) => write!(f, "operand {slot}: unknown name '{name}'"),
            EncodeErrorKind::Unencodable => write!(f, "operand {slot}: value cannot be encoded"),
        }
    }
}

impl Error for EncodeError {}

#[derive(Clone, Copy, Debug)]
pub struct EncodeOptions {
    /// Value written by `Rwidth`: whether the SIMD arrangement uses all 128 bits.
    pub simd_full_width: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            simd_full_width: true,
        }
    }
}

struct Encoder<'a> {
    operands: &'a [Operand],
    cursor: usize,
    word: u32,
}

impl<'a> Encoder<'a> {
    fn fail<T>(&self, kind: EncodeErrorKind) -> Result<T, EncodeError> {
        Err(EncodeError {
            slot: self.cursor,
            kind,
        })
    }

    fn current(&self) -> Result<&'a Operand, EncodeError> {
        match self.operands.get(self.cursor) {
            Some(operand) => Ok(operand),
            None => self.fail(EncodeErrorKind::MissingArgument),
        }
    }

    fn previous(&self) -> Result<&'a Operand, EncodeError> {
        match self.cursor.checked_sub(1).and_then(|index| self.operands.get(index)) {
            Some(operand) => Ok(operand),
            None => self.fail(EncodeErrorKind::MissingArgument),
        }
    }

    fn put(&mut self, offset: u8, value: u32) {
        self.word |= value.checked_shl(u32::from(offset)).unwrap_or(0);
    }

    /// Index of the register in the current slot, always below 32.
    fn register(&self) -> Result<u8, EncodeError> {
        let index = match self.current()? {
            Operand::Register { index, .. } => *index,
            Operand::RegisterList { first, .. } => *first,
            Operand::Default => 31,
            _ => return self.fail(EncodeErrorKind::WrongOperandKind),
        };
        self.check(index < 32, EncodeErrorKind::RegisterNotAllowed)?;
        Ok(index)
    }

    /// Integer value of the current slot; omitted operands count as zero.
    fn value(&self) -> Result<i64, EncodeError> {
        match self.current()? {
            Operand::Immediate(value) => Ok(*value),
            Operand::Default => Ok(0),
            _ => self.fail(EncodeErrorKind::WrongOperandKind),
        }
    }

    fn previous_value(&self) -> Result<i64, EncodeError> {
        match self.previous()? {
            Operand::Immediate(value) => Ok(*value),
            _ => self.fail(EncodeErrorKind::WrongOperandKind),
        }
    }

    fn name(&self) -> Result<&'a str, EncodeError> {
        match self.current()? {
            Operand::Name(name) => Ok(name),
            _ => self.fail(EncodeErrorKind::WrongOperandKind),
        }
    }

    fn lookup(&self, table: NameTable) -> Result<u32, EncodeError> {
        let name = self.name()?;
        match table.lookup(name) {
            Some(code) => Ok(code),
            None => self.fail(EncodeErrorKind::UnknownName(name.to_string())),
        }
    }

    fn modifier(&self) -> Result<Option<Modifier>, EncodeError> {
        match self.current()? {
            Operand::Modifier(modifier) => Ok(Some(*modifier)),
            Operand::Default => Ok(None),
            _ => self.fail(EncodeErrorKind::WrongOperandKind),
        }
    }

    /// `value >> scale` within `min..=max`, requiring the shifted-out bits to be zero.
    fn scaled(&self, value: i64, min: i64, max: i64, scale: u8) -> Result<i64, EncodeError> {
        let scaled = value >> scale;
        if scaled << scale != value {
            return self.fail(EncodeErrorKind::MisalignedImmediate);
        }
        if scaled < min || scaled > max {
            return self.fail(EncodeErrorKind::OutOfRange);
        }
        Ok(scaled)
    }

    fn signed_scaled(&self, value: i64, bits: u8, scale: u8) -> Result<i64, EncodeError> {
        let half = 1i64 << (bits - 1);
        self.scaled(value, -half, half - 1, scale)
    }

    fn check(&self, ok: bool, kind: EncodeErrorKind) -> Result<(), EncodeError> {
        if ok { Ok(()) } else { self.fail(kind) }
    }

    fn special(&mut self, offset: u8, special: SpecialComm) -> Result<(), EncodeError> {
        let encoded = match special {
            SpecialComm::FloatImmediate | SpecialComm::SplitFloatImmediate => {
                let value = match self.current()? {
                    Operand::Float(value) => *value,
                    Operand::Immediate(value) => *value as f64,
                    _ => return self.fail(EncodeErrorKind::WrongOperandKind),
                };
                encode_float_immediate(value)
            }
            _ => {
                let value = self.value()?;
                let as_width = |width: u32| -> Option<u64> {
                    if width == 32 {
                        i32::try_from(value)
                            .map(|v| u64::from(v as u32))
                            .or_else(|_| u32::try_from(value).map(u64::from))
                            .ok()
                    } else {
                        Some(value as u64)
                    }
                };
                match special {
                    SpecialComm::WideImmediateW => as_width(32).and_then(|v| encode_wide_immediate(v, 32)),
                    SpecialComm::WideImmediateX => as_width(64).and_then(|v| encode_wide_immediate(v, 64)),
                    SpecialComm::InvertedWideImmediateW => {
                        as_width(32).and_then(|v| encode_inverted_wide_immediate(v, 32))
                    }
                    SpecialComm::InvertedWideImmediateX => {
                        as_width(64).and_then(|v| encode_inverted_wide_immediate(v, 64))
                    }
                    SpecialComm::LogicalImmediateW => {
                        as_width(32).and_then(|v| encode_logical_immediate(v, 32))
                    }
                    SpecialComm::LogicalImmediateX => {
                        as_width(64).and_then(|v| encode_logical_immediate(v, 64))
                    }
                    _ => as_width(64).and_then(encode_stretched_immediate),
                }
            }
        };
        let Some(encoded) = encoded else {
            return self.fail(EncodeErrorKind::Unencodable);
        };
        match special {
            SpecialComm::StretchedImmediate | SpecialComm::SplitFloatImmediate => {
                self.put(offset, encoded & 0x1F);
                self.put(offset + 6, encoded & 0xE0);
            }
            _ => self.put(offset, encoded),
        }
        Ok(())
    }

    fn relocation(&mut self, relocation: Relocation) -> Result<(), EncodeError> {
        let Some((bits, scale)) = relocation.range() else {
            return match self.current()? {
                Operand::Immediate(_) => Ok(()),
                _ => self.fail(EncodeErrorKind::WrongOperandKind),
            };
        };
        let value = self.value()?;
        let offset = self.signed_scaled(value, bits - scale, scale)? << scale;
        match relocation {
            Relocation::B => self.put(0, ((offset >> 2) as u32) & 0x3FF_FFFF),
            Relocation::Bcond => self.put(5, ((offset >> 2) as u32) & 0x7_FFFF),
            Relocation::Tbz => self.put(5, ((offset >> 2) as u32) & 0x3FFF),
            Relocation::Adr | Relocation::Adrp => {
                let units = offset >> if relocation == Relocation::Adrp { 12 } else { 0 };
                self.put(5, ((units >> 2) as u32) & 0x7_FFFF);
                self.put(29, (units as u32) & 3);
            }
            _ => {
                for &(at, width, from) in relocation.riscv_ranges() {
                    self.put(at, ((offset >> from) as u32) & mask_for_width(width));
                }
            }
        }
        Ok(())
    }

    fn step(&mut self, command: &Command, options: &EncodeOptions) -> Result<(), EncodeError> {
        match command {
            Command::R(o) => {
                let index = self.register()?;
                self.put(*o, u32::from(index));
            }
            Command::REven(o) => {
                let index = self.register()?;
                self.check(index & 1 == 0, EncodeErrorKind::RegisterNotAllowed)?;
                self.put(*o, u32::from(index));
            }
            Command::RNoZr(o) => {
                let index = self.register()?;
                self.check(index != 31, EncodeErrorKind::RegisterNotAllowed)?;
                self.put(*o, u32::from(index));
            }
            Command::R4(o) => {
                let index = self.register()?;
                self.check(index < 16, EncodeErrorKind::RegisterNotAllowed)?;
                self.put(*o, u32::from(index));
            }
            Command::RNext => {
                let index = self.register()?;
                let previous = match self.previous()? {
                    Operand::Register { index, .. } => *index,
                    _ => return self.fail(EncodeErrorKind::WrongOperandKind),
                };
                let consecutive = previous < 32 && index == (previous + 1) % 32;
                self.check(consecutive, EncodeErrorKind::RegisterNotAllowed)?;
            }
            Command::Rno0(o) => {
                let index = self.register()?;
                self.check(index != 0, EncodeErrorKind::RegisterNotAllowed)?;
                self.put(*o, u32::from(index));
            }
            Command::Rno02(o) => {
                let index = self.register()?;
                self.check(index != 0 && index != 2, EncodeErrorKind::RegisterNotAllowed)?;
                self.put(*o, u32::from(index));
            }
            Command::Rpop(o) => {
                let index = self.register()?;
                self.check((8..=15).contains(&index), EncodeErrorKind::RegisterNotAllowed)?;
                self.put(*o, u32::from(index & 7));
            }
            Command::Rpops(o) => {
                let index = self.register()?;
                let allowed = index < 32 && (1u32 << index) & 0x00FC_0300 != 0;
                self.check(allowed, EncodeErrorKind::RegisterNotAllowed)?;
                self.put(*o, u32::from(index & 7));
            }
            Command::Rlist(o) => {
                let saved = match self.current()? {
                    Operand::RegisterList { count, .. } if *count > 0 => i64::from(*count) - 1,
                    Operand::Immediate(value) => *value,
                    _ => return self.fail(EncodeErrorKind::WrongOperandKind),
                };
                let code = match saved {
                    0..=10 => saved as u32 + 4,
                    12 => 15,
                    _ => return self.fail(EncodeErrorKind::RegisterNotAllowed),
                };
                self.put(*o, code);
            }
            Command::Ubits(o, bits) => {
                let value = self.value()?;
                let value = self.scaled(value, 0, i64::from(mask_for_width(*bits)), 0)?;
                self.put(*o, value as u32);
            }
            Command::Uscaled(o, bits, scale) => {
                let value = self.value()?;
                let value = self.scaled(value, 0, i64::from(mask_for_width(*bits)), *scale)?;
                self.put(*o, value as u32);
            }
            Command::Ulist(o, choices) => {
                let value = self.value()?;
                match choices.iter().rposition(|option| i64::from(*option) == value) {
                    Some(index) => self.put(*o, index as u32),
                    None => return self.fail(EncodeErrorKind::OutOfRange),
                }
            }
            Command::Urange(o, min, max) => {
                let value = self.value()?;
                let value = self.scaled(value, i64::from(*min), i64::from(*max), 0)?;
                self.put(*o, (value - i64::from(*min)) as u32);
            }
            Command::Usub(o, bits, base) => {
                let value = self.value()?;
                let base = i64::from(*base);
                let value = self.scaled(value, (base - i64::from(mask_for_width(*bits))).max(0), base, 0)?;
                self.put(*o, (base - value) as u32);
            }
            Command::Unegmod(o, bits) => {
                let mask = mask_for_width(*bits);
                let value = self.value()?;
                let value = self.scaled(value, 0, i64::from(mask), 0)?;
                self.put(*o, ((1u32 << bits).wrapping_sub(value as u32)) & mask);
            }
            Command::Usumdec(o, bits) => {
                let mask = i64::from(mask_for_width(*bits));
                let sum = self
                    .previous_value()?
                    .checked_add(self.value()?)
                    .and_then(|sum| sum.checked_sub(1));
                match sum {
                    Some(sum) if (0..=mask).contains(&sum) => self.put(*o, sum as u32),
                    _ => return self.fail(EncodeErrorKind::OutOfRange),
                }
            }
            Command::Ufields(offsets) => {
                let value = self.value()?;
                let width = u8::try_from(offsets.len()).unwrap_or(u8::MAX);
                let value = self.scaled(value, 0, i64::from(mask_for_width(width)), 0)?;
                for (bit, offset) in offsets.iter().rev().enumerate() {
                    self.put(*offset, ((value >> bit) & 1) as u32);
                }
            }
            Command::Sbits(o, bits) => {
                let value = self.value()?;
                let value = self.signed_scaled(value, *bits, 0)?;
                self.put(*o, (value as u32) & mask_for_width(*bits));
            }
            Command::Sscaled(o, bits, scale) => {
                let value = self.value()?;
                let value = self.signed_scaled(value, *bits, *scale)?;
                self.put(*o, (value as u32) & mask_for_width(*bits));
            }
            Command::BUbits(bits) => {
                let value = self.value()?;
                self.scaled(value, 0, i64::from(mask_for_width(*bits)), 0)?;
            }
            Command::BUsum(bits) => {
                let Some(max) = (1i64 << bits).checked_sub(self.previous_value()?) else {
                    return self.fail(EncodeErrorKind::OutOfRange);
                };
                let value = self.value()?;
                self.scaled(value, 1, max, 0)?;
            }
            Command::BSscaled(bits, scale) => {
                let value = self.value()?;
                self.signed_scaled(value, *bits, *scale)?;
            }
            Command::BUrange(min, max) => {
                let value = self.value()?;
                self.scaled(value, i64::from(*min), i64::from(*max), 0)?;
            }
            Command::Uslice(o, bits, shift) => {
                let value = self.value()? as u64;
                self.put(*o, ((value >> shift) as u32) & mask_for_width(*bits));
            }
            Command::Sslice(o, bits, shift) => {
                let value = self.value()?;
                self.put(*o, ((value >> shift) as u32) & mask_for_width(*bits));
            }
            Command::Special(o, special) => self.special(*o, *special)?,
            Command::Rwidth(o) => self.put(*o, u32::from(options.simd_full_width)),
            Command::Rotates(o) => {
                let code = match self.modifier()? {
                    None | Some(Modifier::Lsl) => 0b00,
                    Some(Modifier::Lsr) => 0b01,
                    Some(Modifier::Asr) => 0b10,
                    Some(Modifier::Ror) => 0b11,
                    Some(_) => return self.fail(EncodeErrorKind::WrongOperandKind),
                };
                self.put(*o, code);
            }
            Command::ExtendsW(o) | Command::ExtendsX(o) => {
                let lsl = if matches!(command, Command::ExtendsW(_)) { 0b010 } else { 0b011 };
                let code = match self.modifier()? {
                    None | Some(Modifier::Lsl) => lsl,
                    Some(Modifier::Uxtb) => 0b000,
                    Some(Modifier::Uxth) => 0b001,
                    Some(Modifier::Uxtw) => 0b010,
                    Some(Modifier::Uxtx) => 0b011,
                    Some(Modifier::Sxtb) => 0b100,
                    Some(Modifier::Sxth) => 0b101,
                    Some(Modifier::Sxtw) => 0b110,
                    Some(Modifier::Sxtx) => 0b111,
                    Some(_) => return self.fail(EncodeErrorKind::WrongOperandKind),
                };
                self.put(*o, code);
            }
            Command::Cond(o) => {
                let code = self.lookup(NameTable::Cond)?;
                self.put(*o, code);
            }
            Command::CondInv(o) => {
                let code = self.lookup(NameTable::Cond)?;
                self.check(code < 14, EncodeErrorKind::OutOfRange)?;
                self.put(*o, code ^ 1);
            }
            Command::LitList(o, table) => {
                let code = self.lookup(*table)?;
                self.put(*o, code);
            }
            Command::Offset(relocation) => self.relocation(*relocation)?,
            Command::A | Command::C | Command::Next | Command::Repeat => {}
            Command::Static { offset, value, .. } => self.put(*offset, *value),
            Command::Sf(o) | Command::Isf(o) => {
                let wide = self.operands.iter().find_map(|operand| match operand {
                    Operand::Register { family, .. } if family.is_wide() || family.is_narrow() => {
                        Some(family.is_wide())
                    }
                    _ => None,
                });
                let Some(wide) = wide else {
                    return self.fail(EncodeErrorKind::WrongOperandKind);
                };
                if wide == matches!(command, Command::Sf(_)) {
                    self.put(*o, 1);
                }
            }
            Command::RoundingMode(o) => {
                let code = match self.current()? {
                    Operand::Default => 0b111,
                    _ => self.lookup(NameTable::RoundingMode)?,
                };
                self.put(*o, code);
            }
            Command::FenceSpec(o) => {
                let name = self.name()?;
                match fence_spec(name) {
                    Some(code) => self.put(*o, code),
                    None => return self.fail(EncodeErrorKind::UnknownName(name.to_string())),
                }
            }
            Command::Csr(o) => {
                let code = match self.current()? {
                    Operand::Name(_) => self.lookup(NameTable::Csr)?,
                    _ => {
                        let value = self.value()?;
                        self.scaled(value, 0, 0xFFF, 0)? as u32
                    }
                };
                self.put(*o, code);
            }
            Command::UImm(bits, scale) | Command::UImmNo0(bits, scale) => {
                let value = self.value()?;
                self.check(value & i64::from(mask_for_width(*scale)) == 0, EncodeErrorKind::MisalignedImmediate)?;
                self.scaled(value, 0, i64::from(mask_for_width(*bits)), 0)?;
                if matches!(command, Command::UImmNo0(..)) {
                    self.check(value != 0, EncodeErrorKind::ExcludedZero)?;
                }
            }
            Command::SImm(bits, scale) | Command::SImmNo0(bits, scale) => {
                let value = self.value()?;
                self.check(value & i64::from(mask_for_width(*scale)) == 0, EncodeErrorKind::MisalignedImmediate)?;
                self.signed_scaled(value, *bits, 0)?;
                if matches!(command, Command::SImmNo0(..)) {
                    self.check(value != 0, EncodeErrorKind::ExcludedZero)?;
                }
            }
            Command::UImmOdd(bits, scale) => {
                let value = self.value()?;
                self.scaled(value, 0, i64::from(mask_for_width(*bits)), 0)?;
                let low = i64::from(mask_for_width(*scale));
                self.check(value & low == low, EncodeErrorKind::MisalignedImmediate)?;
            }
            Command::UImmRange(min, max) => {
                let value = self.value()?;
                self.scaled(value, i64::from(*min), i64::from(*max), 0)?;
            }
            Command::BitRange(o, width, from) => {
                let value = self.value()?;
                self.put(*o, ((value >> from) as u32) & mask_for_width(*width));
            }
            Command::Bits(o, bits) => {
                let value = self.value()?;
                for (position, bit) in bits.iter().rev().enumerate() {
                    self.put(*o + position as u8, ((value >> bit) & 1) as u32);
                }
            }
        }
        Ok(())
    }
}

/// Packs `operands` into `base` by executing `commands`. Every operand must be consumed.
pub fn encode(
    base: u32,
    commands: &[Command],
    operands: &[Operand],
    options: &EncodeOptions,
) -> Result<u32, EncodeError> {
    let mut encoder = Encoder {
        operands,
        cursor: 0,
        word: 0,
    };
    for command in commands {
        encoder.step(command, options)?;
        match command.cursor_step() {
            CursorStep::Consume => encoder.cursor += 1,
            CursorStep::Move(delta) => {
                encoder.cursor = encoder.cursor.checked_add_signed(delta).ok_or(EncodeError {
                    slot: 0,
                    kind: EncodeErrorKind::MissingArgument,
                })?;
            }
            CursorStep::Inspect | CursorStep::None => {}
        }
    }
    if encoder.cursor < operands.len() {
        return encoder.fail(EncodeErrorKind::TrailingArguments);
    }
    if encoder.cursor > operands.len() {
        return Err(EncodeError {
            slot: operands.len(),
            kind: EncodeErrorKind::MissingArgument,
        });
    }
    Ok(base | encoder.word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(commands: &str, operands: &[Operand]) -> Result<u32, EncodeError> {
        let commands = Command::parse_list(commands).expect("commands");
        encode(0, &commands, operands, &EncodeOptions::default())
    }

    #[test]
    fn packs_split_nonzero_immediate() {
        let commands = "SImmNo0(6, 0), BitRange(2, 5, 0), BitRange(12, 1, 5), Next";
        assert_eq!(run(commands, &[Operand::Immediate(-3)]), Ok((29 << 2) | (1 << 12)));
        let err = run(commands, &[Operand::Immediate(0)]).expect_err("zero");
        assert_eq!(err.kind, EncodeErrorKind::ExcludedZero);
        let err = run(commands, &[Operand::Immediate(32)]).expect_err("range");
        assert_eq!(err.kind, EncodeErrorKind::OutOfRange);
    }

    #[test]
    fn list_selector_writes_index() {
        let commands = "Ulist(21, &[0, 16])";
        assert_eq!(run(commands, &[Operand::Immediate(16)]), Ok(1 << 21));
        assert_eq!(run(commands, &[Operand::Immediate(0)]), Ok(0));
        let err = run(commands, &[Operand::Immediate(8)]).expect_err("not listed");
        assert_eq!(err, EncodeError { slot: 0, kind: EncodeErrorKind::OutOfRange });
    }

    #[test]
    fn encodes_aarch64_add_immediate() {
        // add x1, x2, #0x10 => 0x91004041
        let commands = "R(0), R(5), Ubits(10, 12), Ulist(22, &[0, 12])";
        let operands = [
            Operand::reg(RegFamily::XSP, 1),
            Operand::reg(RegFamily::XSP, 2),
            Operand::Immediate(0x10),
            Operand::Default,
        ];
        let commands = Command::parse_list(commands).expect("commands");
        let word = encode(0x9100_0000, &commands, &operands, &EncodeOptions::default());
        assert_eq!(word, Ok(0x9100_4041));
    }

    #[test]
    fn encodes_tbz_with_split_bit_number() {
        // tbz x3, #33, +8 => b5 = 1, b40 = 1
        let commands = "R(0), BUbits(6), Uslice(19, 5, 0), Uslice(31, 1, 5), A, Offset(TBZ)";
        let operands = [
            Operand::reg(RegFamily::X, 3),
            Operand::Immediate(33),
            Operand::Immediate(8),
        ];
        let word = run(commands, &operands).expect("encode");
        assert_eq!(word, (1 << 31) | (1 << 19) | (2 << 5) | 3);
        let err = run(commands, &[Operand::reg(RegFamily::X, 3), Operand::Immediate(64), Operand::Immediate(8)])
            .expect_err("bit number");
        assert_eq!(err.slot, 1);
    }

    #[test]
    fn bitfield_clear_uses_previous_operand() {
        // bfc w0, #3, #4: immr = -3 % 32, imms = 3
        let commands = "R(0), Unegmod(16, 5), BUsum(5), Urange(10, 1, 32)";
        let operands = [Operand::reg(RegFamily::W, 0), Operand::Immediate(3), Operand::Immediate(4)];
        assert_eq!(run(commands, &operands), Ok((29 << 16) | (3 << 10)));
        let operands = [Operand::reg(RegFamily::W, 0), Operand::Immediate(30), Operand::Immediate(4)];
        assert!(run(commands, &operands).is_err());
    }

    #[test]
    fn riscv_branch_relocation_scatters_bits() {
        let commands = [Command::R(15), Command::R(20), Command::Offset(Relocation::RvBranch)];
        let operands = [
            Operand::reg(RegFamily::X, 1),
            Operand::reg(RegFamily::X, 2),
            Operand::Immediate(-2),
        ];
        let word = encode(0x63, &commands, &operands, &EncodeOptions::default()).expect("encode");
        // beq x1, x2, -2 => 0xfe208fe3
        assert_eq!(word, 0xFE20_8FE3);
        let odd = [
            Operand::reg(RegFamily::X, 1),
            Operand::reg(RegFamily::X, 2),
            Operand::Immediate(3),
        ];
        let err = encode(0x63, &commands, &odd, &EncodeOptions::default()).expect_err("odd");
        assert_eq!(err.kind, EncodeErrorKind::MisalignedImmediate);
    }

    #[test]
    fn compressed_scattered_offsets_place_bits_msb_first() {
        // c.addi4spn x8, sp, 8 => nzuimm[3] lands at bit 5
        let commands = "Rpop(2), UImmNo0(10, 2), Bits(5, &[5, 4, 9, 8, 7, 6, 2, 3]), Next";
        let operands = [Operand::reg(RegFamily::X, 8), Operand::Immediate(8)];
        assert_eq!(run(commands, &operands), Ok(1 << 5));
        let operands = [Operand::reg(RegFamily::X, 8), Operand::Immediate(6)];
        let err = run(commands, &operands).expect_err("misaligned");
        assert_eq!(err.kind, EncodeErrorKind::MisalignedImmediate);
    }

    #[test]
    fn names_and_register_constraints() {
        assert_eq!(run("LitList(8, \"BARRIER_OPS\")", &[Operand::name("ish")]), Ok(0b1011 << 8));
        let err = run("LitList(8, \"BARRIER_OPS\")", &[Operand::name("bogus")]).expect_err("name");
        assert_eq!(err.kind, EncodeErrorKind::UnknownName("bogus".into()));
        let err = run("RNoZr(0)", &[Operand::reg(RegFamily::X, 31)]).expect_err("zr");
        assert_eq!(err.kind, EncodeErrorKind::RegisterNotAllowed);
        assert_eq!(run("CondInv(12)", &[Operand::name("eq")]), Ok(1 << 12));
        assert!(run("CondInv(12)", &[Operand::name("al")]).is_err());
    }

    #[test]
    fn width_selector_follows_first_register() {
        let commands = [Command::R(0), Command::Sf(31), Command::Isf(22)];
        let wide = encode(0, &commands, &[Operand::reg(RegFamily::X, 2)], &EncodeOptions::default());
        assert_eq!(wide, Ok((1 << 31) | 2));
        let narrow = encode(0, &commands, &[Operand::reg(RegFamily::W, 2)], &EncodeOptions::default());
        assert_eq!(narrow, Ok((1 << 22) | 2));
    }

    #[test]
    fn operand_count_must_match() {
        let err = run("R(0)", &[]).expect_err("missing");
        assert_eq!(err.kind, EncodeErrorKind::MissingArgument);
        let operands = [Operand::reg(RegFamily::X, 0), Operand::reg(RegFamily::X, 1)];
        let err = run("R(0)", &operands).expect_err("extra");
        assert_eq!(err, EncodeError { slot: 1, kind: EncodeErrorKind::TrailingArguments });
    }

    #[test]
    fn special_immediates_place_split_bits() {
        // movi v0.2d, #0xff00ff00ff00ff00 => abc at 16..18, defgh at 5..9
        let word = run("Special(5, STRETCHED_IMMEDIATE)", &[Operand::Immediate(0xFF00_FF00_FF00_FF00u64 as i64)]);
        assert_eq!(word, Ok((0b101 << 16) | (0b01010 << 5)));
        assert_eq!(run("Special(10, LOGICAL_IMMEDIATE_W)", &[Operand::Immediate(1)]), Ok(0));
        let err = run("Special(10, LOGICAL_IMMEDIATE_W)", &[Operand::Immediate(0)]).expect_err("zero");
        assert_eq!(err.kind, EncodeErrorKind::Unencodable);
        assert_eq!(run("Special(13, FLOAT_IMMEDIATE)", &[Operand::Float(1.0)]), Ok(0x70 << 13));
    }

    #[test]
    fn consecutive_register_rejects_wild_indices() {
        let pair = [Operand::reg(RegFamily::X, 4), Operand::reg(RegFamily::X, 5)];
        assert_eq!(run("R(0), RNext", &pair), Ok(4));
        let wrapped = [Operand::reg(RegFamily::X, 31), Operand::reg(RegFamily::X, 0)];
        assert_eq!(run("R(0), RNext", &wrapped), Ok(31));
        let wild = [Operand::reg(RegFamily::X, 255), Operand::reg(RegFamily::X, 0)];
        let err = run("R(0), RNext", &wild).expect_err("index 255");
        assert_eq!(err, EncodeError { slot: 0, kind: EncodeErrorKind::RegisterNotAllowed });
        let err = run("RNext", &[Operand::reg(RegFamily::X, 255)]).expect_err("no previous");
        assert_eq!(err.slot, 0);
    }

    #[test]
    fn huge_field_sums_are_out_of_range() {
        // ubfx w0, w0, #3, #width: imms = lsb + width - 1
        let commands = "R(0), Ubits(16, 6), Usumdec(10, 6)";
        let operands = [Operand::reg(RegFamily::X, 0), Operand::Immediate(3), Operand::Immediate(4)];
        assert_eq!(run(commands, &operands), Ok((3 << 16) | (6 << 10)));
        for huge in [i64::MAX, i64::MIN] {
            let operands = [Operand::reg(RegFamily::X, 0), Operand::Immediate(3), Operand::Immediate(huge)];
            let err = run(commands, &operands).expect_err("huge width");
            assert_eq!(err, EncodeError { slot: 2, kind: EncodeErrorKind::OutOfRange });
        }
        let operands = [Operand::Immediate(i64::MIN), Operand::Immediate(4)];
        let err = run("A, BUsum(5)", &operands).expect_err("huge lsb");
        assert_eq!(err, EncodeError { slot: 1, kind: EncodeErrorKind::OutOfRange });
    }
}
