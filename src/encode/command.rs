//! Encoder commands. A row's command list is executed left to right against the flattened
//! operand slots produced by its matchers; each command reads the slot under a cursor, checks it
//! and packs it into the instruction word.

use std::fmt;

use crate::encode::syntax::{Call, parse_calls};
use crate::encode::tables::NameTable;

/// Immediate encodings that need a dedicated algorithm rather than a bit range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialComm {
    InvertedWideImmediateW,
    InvertedWideImmediateX,
    WideImmediateW,
    WideImmediateX,
    StretchedImmediate,
    LogicalImmediateW,
    LogicalImmediateX,
    FloatImmediate,
    SplitFloatImmediate,
}

impl SpecialComm {
    pub const ALL: [SpecialComm; 9] = [
        SpecialComm::InvertedWideImmediateW,
        SpecialComm::InvertedWideImmediateX,
        SpecialComm::WideImmediateW,
        SpecialComm::WideImmediateX,
        SpecialComm::StretchedImmediate,
        SpecialComm::LogicalImmediateW,
        SpecialComm::LogicalImmediateX,
        SpecialComm::FloatImmediate,
        SpecialComm::SplitFloatImmediate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpecialComm::InvertedWideImmediateW => "INVERTED_WIDE_IMMEDIATE_W",
            SpecialComm::InvertedWideImmediateX => "INVERTED_WIDE_IMMEDIATE_X",
            SpecialComm::WideImmediateW => "WIDE_IMMEDIATE_W",
            SpecialComm::WideImmediateX => "WIDE_IMMEDIATE_X",
            SpecialComm::StretchedImmediate => "STRETCHED_IMMEDIATE",
            SpecialComm::LogicalImmediateW => "LOGICAL_IMMEDIATE_W",
            SpecialComm::LogicalImmediateX => "LOGICAL_IMMEDIATE_X",
            SpecialComm::FloatImmediate => "FLOAT_IMMEDIATE",
            SpecialComm::SplitFloatImmediate => "SPLIT_FLOAT_IMMEDIATE",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|special| special.name() == name)
    }
}

/// Relative address encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relocation {
    /// `b`, `bl`: 26 bits, word aligned, at 0.
    B,
    /// `b.cond`, `cbz`, literal loads: 19 bits, word aligned, at 5.
    Bcond,
    /// 21 bits, byte aligned, split between bits 29 and 5.
    Adr,
    /// 21 bits of 4096-byte pages, split like `Adr`.
    Adrp,
    /// `tbz`, `tbnz`: 14 bits, word aligned, at 5.
    Tbz,
    Literal32,
    Literal64,
    /// RISC-V conditional branch: 13 bits, halfword aligned.
    RvBranch,
    /// RISC-V `jal`: 21 bits, halfword aligned.
    RvJump,
    /// RISC-V `c.beqz`/`c.bnez`: 9 bits, halfword aligned.
    RvBranchCompressed,
    /// RISC-V `c.j`/`c.jal`: 12 bits, halfword aligned.
    RvJumpCompressed,
}

impl Relocation {
    pub fn name(self) -> &'static str {
        match self {
            Relocation::B | Relocation::RvBranch => "B",
            Relocation::Bcond => "BCOND",
            Relocation::Adr => "ADR",
            Relocation::Adrp => "ADRP",
            Relocation::Tbz => "TBZ",
            Relocation::Literal32 => "LITERAL32",
            Relocation::Literal64 => "LITERAL64",
            Relocation::RvJump => "J",
            Relocation::RvBranchCompressed => "BC",
            Relocation::RvJumpCompressed => "JC",
        }
    }

    /// Catalog spellings, which are always AArch64 relocations.
    pub fn parse_aarch64(name: &str) -> Option<Self> {
        Some(match name {
            "B" => Relocation::B,
            "BCOND" => Relocation::Bcond,
            "ADR" => Relocation::Adr,
            "ADRP" => Relocation::Adrp,
            "TBZ" => Relocation::Tbz,
            "LITERAL32" => Relocation::Literal32,
            "LITERAL64" => Relocation::Literal64,
            _ => return None,
        })
    }

    /// `(signed width in bits, alignment shift)` of the byte offset, if the relocation encodes
    /// anything.
    pub fn range(self) -> Option<(u8, u8)> {
        match self {
            Relocation::B => Some((28, 2)),
            Relocation::Bcond => Some((21, 2)),
            Relocation::Tbz => Some((16, 2)),
            Relocation::Adr => Some((21, 0)),
            Relocation::Adrp => Some((33, 12)),
            Relocation::Literal32 | Relocation::Literal64 => None,
            Relocation::RvBranch => Some((13, 1)),
            Relocation::RvJump => Some((21, 1)),
            Relocation::RvBranchCompressed => Some((9, 1)),
            Relocation::RvJumpCompressed => Some((12, 1)),
        }
    }

    /// RISC-V bit placement as `(template offset, width, value bit)` ranges.
    pub fn riscv_ranges(self) -> &'static [(u8, u8, u8)] {
        match self {
            Relocation::RvBranch => &[(31, 1, 12), (25, 6, 5), (8, 4, 1), (7, 1, 11)],
            Relocation::RvJump => &[(31, 1, 20), (21, 10, 1), (20, 1, 11), (12, 8, 12)],
            Relocation::RvBranchCompressed => {
                &[(12, 1, 8), (10, 2, 3), (5, 2, 6), (3, 2, 1), (2, 1, 5)]
            }
            Relocation::RvJumpCompressed => &[
                (12, 1, 11),
                (11, 1, 4),
                (9, 2, 8),
                (8, 1, 10),
                (7, 1, 6),
                (6, 1, 7),
                (3, 3, 1),
                (2, 1, 5),
            ],
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    // registers
    R(u8),
    REven(u8),
    RNoZr(u8),
    R4(u8),
    /// Register must be the previous register plus one.
    RNext,
    Rno0(u8),
    Rno02(u8),
    /// One of `x8`..=`x15`, as a 3-bit index.
    Rpop(u8),
    /// One of `s0`..=`s7`, as a 3-bit index.
    Rpops(u8),
    Rlist(u8),

    // unsigned immediates
    Ubits(u8, u8),
    Uscaled(u8, u8, u8),
    /// Index of the value within the list.
    Ulist(u8, Vec<u16>),
    /// `(offset, min, max)`: encodes `value - min`.
    Urange(u8, u8, u8),
    /// `(offset, bits, base)`: encodes `base - value`.
    Usub(u8, u8, u8),
    Unegmod(u8, u8),
    /// Encodes the previous value plus this one, minus one.
    Usumdec(u8, u8),
    /// One bit per offset, most significant first.
    Ufields(Vec<u8>),

    // signed immediates
    Sbits(u8, u8),
    Sscaled(u8, u8, u8),

    // checks and slices; these keep the cursor in place
    BUbits(u8),
    BUsum(u8),
    BSscaled(u8, u8),
    BUrange(u8, u8),
    Uslice(u8, u8, u8),
    Sslice(u8, u8, u8),

    Special(u8, SpecialComm),
    /// Full-width SIMD indicator bit.
    Rwidth(u8),
    Rotates(u8),
    ExtendsW(u8),
    ExtendsX(u8),
    Cond(u8),
    /// Condition with the low bit inverted; `al`/`nv` are rejected.
    CondInv(u8),
    LitList(u8, NameTable),
    Offset(Relocation),
    /// Skip one slot.
    A,
    /// Step back one slot.
    C,
    /// Constant bits, folded into the template at build time.
    Static { offset: u8, value: u32, width: u8 },
    /// Set when the matched general-purpose register is 64-bit.
    Sf(u8),
    /// Set when the matched general-purpose register is 32-bit.
    Isf(u8),

    // RISC-V
    Repeat,
    Next,
    RoundingMode(u8),
    FenceSpec(u8),
    Csr(u8),
    /// `(bits, scale)`: value fits `bits` unsigned bits and its low `scale` bits are zero.
    UImm(u8, u8),
    SImm(u8, u8),
    UImmNo0(u8, u8),
    SImmNo0(u8, u8),
    /// `(bits, scale)`: the low `scale` bits must all be one.
    UImmOdd(u8, u8),
    /// Inclusive range.
    UImmRange(u32, u32),
    /// `(offset, width, value bit)`.
    BitRange(u8, u8, u8),
    /// Value bits placed at `offset` upwards, the list most significant first.
    Bits(u8, Vec<u8>),
}

/// How a command moves the operand cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStep {
    /// Reads the current slot, then advances.
    Consume,
    /// Reads the current slot and stays.
    Inspect,
    /// Moves without reading.
    Move(isize),
    /// Touches no slot.
    None,
}

impl Command {
    pub fn cursor_step(&self) -> CursorStep {
        match self {
            Command::A | Command::Next => CursorStep::Move(1),
            Command::C | Command::Repeat => CursorStep::Move(-1),
            Command::Rwidth(_) | Command::Static { .. } | Command::Sf(_) | Command::Isf(_) => {
                CursorStep::None
            }
            Command::BUbits(_)
            | Command::BUsum(_)
            | Command::BSscaled(..)
            | Command::BUrange(..)
            | Command::Uslice(..)
            | Command::Sslice(..)
            | Command::UImm(..)
            | Command::SImm(..)
            | Command::UImmNo0(..)
            | Command::SImmNo0(..)
            | Command::UImmOdd(..)
            | Command::UImmRange(..)
            | Command::BitRange(..)
            | Command::Bits(..) => CursorStep::Inspect,
            _ => CursorStep::Consume,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Command::Static { .. })
    }

    pub fn parse_list(text: &str) -> Result<Vec<Command>, String> {
        parse_calls(text)?.iter().map(Command::from_call).collect()
    }

    fn from_call(call: &Call) -> Result<Command, String> {
        let unary = |build: fn(u8) -> Command| -> Result<Command, String> {
            call.arity(1)?;
            Ok(build(call.small(0)?))
        };
        let binary = |build: fn(u8, u8) -> Command| -> Result<Command, String> {
            call.arity(2)?;
            Ok(build(call.small(0)?, call.small(1)?))
        };
        let ternary = |build: fn(u8, u8, u8) -> Command| -> Result<Command, String> {
            call.arity(3)?;
            Ok(build(call.small(0)?, call.small(1)?, call.small(2)?))
        };
        let nullary = |command: Command| -> Result<Command, String> {
            call.arity(0)?;
            Ok(command)
        };
        let small_list = |index: usize| -> Result<Vec<u8>, String> {
            call.list(index)?
                .iter()
                .map(|value| u8::try_from(*value).map_err(|_| format!("{}: list value {value} out of range", call.name)))
                .collect()
        };

        match call.name.as_str() {
            "R" => unary(Command::R),
            "REven" | "Reven" => unary(Command::REven),
            "RNoZr" => unary(Command::RNoZr),
            "R4" => unary(Command::R4),
            "RNext" => nullary(Command::RNext),
            "Rno0" => unary(Command::Rno0),
            "Rno02" => unary(Command::Rno02),
            "Rpop" => unary(Command::Rpop),
            "Rpops" => unary(Command::Rpops),
            "Rlist" => unary(Command::Rlist),
            "Ubits" => binary(Command::Ubits),
            "Uscaled" => ternary(Command::Uscaled),
            "Ulist" => {
                call.arity(2)?;
                let options = call
                    .list(1)?
                    .iter()
                    .map(|value| u16::try_from(*value).map_err(|_| format!("Ulist: option {value} out of range")))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Command::Ulist(call.small(0)?, options))
            }
            "Urange" => ternary(Command::Urange),
            "Usub" => ternary(Command::Usub),
            "Unegmod" => binary(Command::Unegmod),
            "Usumdec" => binary(Command::Usumdec),
            "Ufields" => {
                call.arity(1)?;
                Ok(Command::Ufields(small_list(0)?))
            }
            "Sbits" => binary(Command::Sbits),
            "Sscaled" => ternary(Command::Sscaled),
            "BUbits" => unary(Command::BUbits),
            "BUsum" => unary(Command::BUsum),
            "BSscaled" => binary(Command::BSscaled),
            "BUrange" => binary(Command::BUrange),
            "Uslice" => ternary(Command::Uslice),
            "Sslice" => ternary(Command::Sslice),
            "Special" => {
                call.arity(2)?;
                let name = call.word(1)?;
                let special =
                    SpecialComm::parse(name).ok_or_else(|| format!("Special: unknown encoding '{name}'"))?;
                Ok(Command::Special(call.small(0)?, special))
            }
            "Rwidth" => unary(Command::Rwidth),
            "Rotates" => unary(Command::Rotates),
            "ExtendsW" => unary(Command::ExtendsW),
            "ExtendsX" => unary(Command::ExtendsX),
            "Cond" => unary(Command::Cond),
            "CondInv" => unary(Command::CondInv),
            "LitList" => {
                call.arity(2)?;
                let name = call.word(1)?;
                let table =
                    NameTable::from_catalog_name(name).ok_or_else(|| format!("LitList: unknown table '{name}'"))?;
                Ok(Command::LitList(call.small(0)?, table))
            }
            "Offset" => {
                call.arity(1)?;
                let name = call.word(0)?;
                let relocation =
                    Relocation::parse_aarch64(name).ok_or_else(|| format!("Offset: unknown relocation '{name}'"))?;
                Ok(Command::Offset(relocation))
            }
            "A" => nullary(Command::A),
            "C" => nullary(Command::C),
            "Static" => {
                call.arity(2)?;
                let (value, width) = call.binary(1)?;
                let value = u32::try_from(value).map_err(|_| format!("Static: value {value} out of range"))?;
                Ok(Command::Static {
                    offset: call.small(0)?,
                    value,
                    width,
                })
            }
            "Sf" => unary(Command::Sf),
            "Isf" => unary(Command::Isf),
            "Repeat" => nullary(Command::Repeat),
            "Next" => nullary(Command::Next),
            "RoundingMode" => unary(Command::RoundingMode),
            "FenceSpec" => unary(Command::FenceSpec),
            "Csr" => unary(Command::Csr),
            "UImm" => binary(Command::UImm),
            "SImm" => binary(Command::SImm),
            "UImmNo0" => binary(Command::UImmNo0),
            "SImmNo0" => binary(Command::SImmNo0),
            "UImmOdd" => binary(Command::UImmOdd),
            "UImmRange" => {
                call.arity(2)?;
                let bound = |index: usize| -> Result<u32, String> {
                    let value = call.int(index)?;
                    u32::try_from(value).map_err(|_| format!("UImmRange: bound {value} out of range"))
                };
                Ok(Command::UImmRange(bound(0)?, bound(1)?))
            }
            "BitRange" => ternary(Command::BitRange),
            "Bits" => {
                call.arity(2)?;
                Ok(Command::Bits(call.small(0)?, small_list(1)?))
            }
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::R(o) => write!(f, "R({o})"),
            Command::REven(o) => write!(f, "REven({o})"),
            Command::RNoZr(o) => write!(f, "RNoZr({o})"),
            Command::R4(o) => write!(f, "R4({o})"),
            Command::RNext => f.write_str("RNext"),
            Command::Rno0(o) => write!(f, "Rno0({o})"),
            Command::Rno02(o) => write!(f, "Rno02({o})"),
            Command::Rpop(o) => write!(f, "Rpop({o})"),
            Command::Rpops(o) => write!(f, "Rpops({o})"),
            Command::Rlist(o) => write!(f, "Rlist({o})"),
            Command::Ubits(o, b) => write!(f, "Ubits({o}, {b})"),
            Command::Uscaled(o, b, s) => write!(f, "Uscaled({o}, {b}, {s})"),
            Command::Ulist(o, options) => write!(f, "Ulist({o}, &[{}])", join(options)),
            Command::Urange(o, min, max) => write!(f, "Urange({o}, {min}, {max})"),
            Command::Usub(o, b, base) => write!(f, "Usub({o}, {b}, {base})"),
            Command::Unegmod(o, b) => write!(f, "Unegmod({o}, {b})"),
            Command::Usumdec(o, b) => write!(f, "Usumdec({o}, {b})"),
            Command::Ufields(offsets) => write!(f, "Ufields(&[{}])", join(offsets)),
            Command::Sbits(o, b) => write!(f, "Sbits({o}, {b})"),
            Command::Sscaled(o, b, s) => write!(f, "Sscaled({o}, {b}, {s})"),
            Command::BUbits(b) => write!(f, "BUbits({b})"),
            Command::BUsum(b) => write!(f, "BUsum({b})"),
            Command::BSscaled(b, s) => write!(f, "BSscaled({b}, {s})"),
            Command::BUrange(min, max) => write!(f, "BUrange({min}, {max})"),
            Command::Uslice(o, b, s) => write!(f, "Uslice({o}, {b}, {s})"),
            Command::Sslice(o, b, s) => write!(f, "Sslice({o}, {b}, {s})"),
            Command::Special(o, special) => write!(f, "Special({o}, {})", special.name()),
            Command::Rwidth(o) => write!(f, "Rwidth({o})"),
            Command::Rotates(o) => write!(f, "Rotates({o})"),
            Command::ExtendsW(o) => write!(f, "ExtendsW({o})"),
            Command::ExtendsX(o) => write!(f, "ExtendsX({o})"),
            Command::Cond(o) => write!(f, "Cond({o})"),
            Command::CondInv(o) => write!(f, "CondInv({o})"),
            Command::LitList(o, table) => write!(f, "LitList({o}, \"{table}\")"),
            Command::Offset(relocation) => write!(f, "Offset({})", relocation.name()),
            Command::A => f.write_str("A"),
            Command::C => f.write_str("C"),
            Command::Static { offset, value, width } => {
                write!(f, "Static({offset}, 0b{value:0width$b})", width = usize::from(*width))
            }
            Command::Sf(o) => write!(f, "Sf({o})"),
            Command::Isf(o) => write!(f, "Isf({o})"),
            Command::Repeat => f.write_str("Repeat"),
            Command::Next => f.write_str("Next"),
            Command::RoundingMode(o) => write!(f, "RoundingMode({o})"),
            Command::FenceSpec(o) => write!(f, "FenceSpec({o})"),
            Command::Csr(o) => write!(f, "Csr({o})"),
            Command::UImm(b, s) => write!(f, "UImm({b}, {s})"),
            Command::SImm(b, s) => write!(f, "SImm({b}, {s})"),
            Command::UImmNo0(b, s) => write!(f, "UImmNo0({b}, {s})"),
            Command::SImmNo0(b, s) => write!(f, "SImmNo0({b}, {s})"),
            Command::UImmOdd(b, s) => write!(f, "UImmOdd({b}, {s})"),
            Command::UImmRange(min, max) => write!(f, "UImmRange({min}, {max})"),
            Command::BitRange(o, b, s) => write!(f, "BitRange({o}, {b}, {s})"),
            Command::Bits(o, bits) => write!(f, "Bits({o}, &[{}])", join(bits)),
        }
    }
}

/// Joins a command list with `, ` the way rows are emitted.
pub fn render_commands(commands: &[Command]) -> String {
    join(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_processors() {
        let commands =
            Command::parse_list(r#"R(0), Ubits(5, 16), Ulist(21, &[0, 16]), LitList(8, "BARRIER_OPS")"#)
                .expect("parse");
        assert_eq!(commands[2], Command::Ulist(21, vec![0, 16]));
        assert_eq!(commands[3], Command::LitList(8, NameTable::BarrierOps));
        assert_eq!(
            render_commands(&commands),
            r#"R(0), Ubits(5, 16), Ulist(21, &[0, 16]), LitList(8, "BARRIER_OPS")"#
        );
    }

    #[test]
    fn static_keeps_literal_width() {
        let commands = Command::parse_list("Static(22, 0b00), Static(30, 0b1)").expect("parse");
        assert_eq!(
            commands[0],
            Command::Static {
                offset: 22,
                value: 0,
                width: 2
            }
        );
        assert_eq!(commands[0].to_string(), "Static(22, 0b00)");
        assert!(Command::parse_list("Static(22, 3)").is_err());
    }

    #[test]
    fn specials_and_relocations_resolve_by_name() {
        let commands =
            Command::parse_list("Special(10, LOGICAL_IMMEDIATE_W), Offset(BCOND), Ufields(&[30, 23, 22])")
                .expect("parse");
        assert_eq!(commands[0], Command::Special(10, SpecialComm::LogicalImmediateW));
        assert_eq!(commands[1], Command::Offset(Relocation::Bcond));
        assert_eq!(commands[2].to_string(), "Ufields(&[30, 23, 22])");
        assert!(Command::parse_list("Offset(J)").is_err());
        assert!(Command::parse_list("Special(5, HUGE)").is_err());
        assert!(Command::parse_list("R(0, 1)").is_err());
    }

    #[test]
    fn cursor_classification() {
        assert_eq!(Command::R(0).cursor_step(), CursorStep::Consume);
        assert_eq!(Command::Uslice(19, 5, 0).cursor_step(), CursorStep::Inspect);
        assert_eq!(Command::SImm(6, 0).cursor_step(), CursorStep::Inspect);
        assert_eq!(Command::Repeat.cursor_step(), CursorStep::Move(-1));
        assert_eq!(Command::Rwidth(30).cursor_step(), CursorStep::None);
    }
}
