//! Operand-shape matchers. A row's matcher list selects which textual operand lists it accepts;
//! each matcher flattens into zero or more argument slots consumed by the row's commands.

use std::fmt;

use crate::encode::syntax::{Call, parse_calls};

/// Shift and extend modifiers accepted after a register or immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Lsl,
    Lsr,
    Asr,
    Ror,
    Uxtb,
    Uxth,
    Uxtw,
    Uxtx,
    Sxtb,
    Sxth,
    Sxtw,
    Sxtx,
    Msl,
}

impl Modifier {
    pub const ALL: [Modifier; 13] = [
        Modifier::Lsl,
        Modifier::Lsr,
        Modifier::Asr,
        Modifier::Ror,
        Modifier::Uxtb,
        Modifier::Uxth,
        Modifier::Uxtw,
        Modifier::Uxtx,
        Modifier::Sxtb,
        Modifier::Sxth,
        Modifier::Sxtw,
        Modifier::Sxtx,
        Modifier::Msl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Modifier::Lsl => "LSL",
            Modifier::Lsr => "LSR",
            Modifier::Asr => "ASR",
            Modifier::Ror => "ROR",
            Modifier::Uxtb => "UXTB",
            Modifier::Uxth => "UXTH",
            Modifier::Uxtw => "UXTW",
            Modifier::Uxtx => "UXTX",
            Modifier::Sxtb => "SXTB",
            Modifier::Sxth => "SXTH",
            Modifier::Sxtw => "SXTW",
            Modifier::Sxtx => "SXTX",
            Modifier::Msl => "MSL",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|modifier| modifier.name().eq_ignore_ascii_case(name))
    }
}

/// Named modifier sets usable in `Mod(...)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierSet {
    Shifts,
    Rotates,
    Extends,
    ExtendsW,
    ExtendsX,
}

impl ModifierSet {
    pub fn members(self) -> &'static [Modifier] {
        use Modifier::*;
        match self {
            ModifierSet::Shifts => &[Lsl, Lsr, Asr],
            ModifierSet::Rotates => &[Lsl, Lsr, Asr, Ror],
            ModifierSet::Extends => &[Uxtb, Uxth, Uxtw, Uxtx, Sxtb, Sxth, Sxtw, Sxtx, Lsl],
            ModifierSet::ExtendsW => &[Uxtb, Uxth, Uxtw, Sxtb, Sxth, Sxtw],
            ModifierSet::ExtendsX => &[Uxtx, Sxtx, Lsl],
        }
    }

    fn name(self) -> &'static str {
        match self {
            ModifierSet::Shifts => "SHIFTS",
            ModifierSet::Rotates => "ROTATES",
            ModifierSet::Extends => "EXTENDS",
            ModifierSet::ExtendsW => "EXTENDS_W",
            ModifierSet::ExtendsX => "EXTENDS_X",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        [
            ModifierSet::Shifts,
            ModifierSet::Rotates,
            ModifierSet::Extends,
            ModifierSet::ExtendsW,
            ModifierSet::ExtendsX,
        ]
        .into_iter()
        .find(|set| set.name() == name)
    }
}

/// SIMD element size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    Byte,
    Word,
    Dword,
    Qword,
    Oword,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::Byte, Size::Word, Size::Dword, Size::Qword, Size::Oword];

    fn name(self) -> &'static str {
        match self {
            Size::Byte => "BYTE",
            Size::Word => "WORD",
            Size::Dword => "DWORD",
            Size::Qword => "QWORD",
            Size::Oword => "OWORD",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        Size::ALL.into_iter().find(|size| size.name() == name)
    }

    pub fn bytes(self) -> u8 {
        match self {
            Size::Byte => 1,
            Size::Word => 2,
            Size::Dword => 4,
            Size::Qword => 8,
            Size::Oword => 16,
        }
    }

    /// Element letter used in arrangement specifiers and scalar register names.
    pub fn letter(self) -> char {
        match self {
            Size::Byte => 'B',
            Size::Word => 'H',
            Size::Dword => 'S',
            Size::Qword => 'D',
            Size::Oword => 'Q',
        }
    }
}

/// Register family of one argument slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegFamily {
    W,
    X,
    /// `W` or `X` chosen by the operand; produced by width-pair merging.
    WX,
    WSP,
    XSP,
    WXSP,
    B,
    H,
    S,
    D,
    Q,
    V,
    /// RISC-V floating point register.
    F,
}

impl RegFamily {
    pub fn is_wide(self) -> bool {
        matches!(self, RegFamily::X | RegFamily::XSP)
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, RegFamily::W | RegFamily::WSP)
    }
}

/// Kind of one flattened argument slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Register(RegFamily),
    RegisterList,
    Immediate,
    Offset,
    Ident,
    Modifier,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Matcher {
    /// `.` joining the mnemonic and a literal suffix.
    Dot,
    Lit(String),
    LitInt(u32),
    LitFloat(f32),
    Ident,
    Cond,
    Imm,
    Reg(RegFamily),
    V(Size),
    VStatic(Size, u8),
    VElement(Size),
    VElementStatic(Size, u8),
    VStaticElement(Size, u8),
    RegList(u8, Size),
    RegListStatic(u8, Size, u8),
    RegListElement(u8, Size),
    Offset,
    RefBase,
    RefOffset,
    RefPre,
    RefIndex,
    LitMod(Modifier),
    Mod(ModifierSet),
    /// Everything after this point is optional.
    End,
    /// RISC-V register list (`{ra, s0-s2}`).
    Xlist,
}

impl Matcher {
    /// Argument slots this matcher contributes, in order.
    pub fn slots(&self) -> Vec<SlotKind> {
        use SlotKind::*;
        match self {
            Matcher::Dot | Matcher::Lit(_) | Matcher::LitInt(_) | Matcher::LitFloat(_) | Matcher::End => {
                Vec::new()
            }
            Matcher::Ident | Matcher::Cond => vec![Ident],
            Matcher::Imm => vec![Immediate],
            Matcher::Reg(family) => vec![Register(*family)],
            Matcher::V(_)
            | Matcher::VStatic(..)
            | Matcher::VElementStatic(..)
            | Matcher::VStaticElement(..) => vec![Register(RegFamily::V)],
            Matcher::VElement(_) => vec![Register(RegFamily::V), Immediate],
            Matcher::RegList(..) | Matcher::RegListStatic(..) | Matcher::Xlist => vec![RegisterList],
            Matcher::RegListElement(..) => vec![RegisterList, Immediate],
            Matcher::Offset => vec![Offset],
            Matcher::RefBase => vec![Register(RegFamily::XSP)],
            Matcher::RefOffset | Matcher::RefPre => vec![Register(RegFamily::XSP), Immediate],
            Matcher::RefIndex => vec![
                Register(RegFamily::XSP),
                Register(RegFamily::WX),
                Modifier,
                Immediate,
            ],
            Matcher::LitMod(_) => vec![Immediate],
            Matcher::Mod(_) => vec![Modifier, Immediate],
        }
    }

    /// Same matcher with the narrow general-purpose family swapped for the wide one, if it has one.
    pub fn widened(&self) -> Option<Matcher> {
        match self {
            Matcher::Reg(RegFamily::W) => Some(Matcher::Reg(RegFamily::X)),
            Matcher::Reg(RegFamily::WSP) => Some(Matcher::Reg(RegFamily::XSP)),
            _ => None,
        }
    }

    pub fn parse_list(text: &str) -> Result<Vec<Matcher>, String> {
        parse_calls(text)?.iter().map(Matcher::from_call).collect()
    }

    fn from_call(call: &Call) -> Result<Matcher, String> {
        let size = |index: usize| -> Result<Size, String> {
            let name = call.word(index)?;
            Size::parse(name).ok_or_else(|| format!("{}: unknown size '{name}'", call.name))
        };
        let family = |family: RegFamily| -> Result<Matcher, String> {
            call.arity(0)?;
            Ok(Matcher::Reg(family))
        };
        let matcher = match call.name.as_str() {
            "Dot" => Matcher::Dot,
            "Lit" => Matcher::Lit(call.word(0)?.to_string()),
            "LitInt" => Matcher::LitInt(
                u32::try_from(call.int(0)?).map_err(|_| "LitInt: negative literal".to_string())?,
            ),
            "LitFloat" => match call.args.first() {
                Some(crate::encode::syntax::Arg::Float(value)) => Matcher::LitFloat(*value),
                _ => return Err("LitFloat takes a float literal".into()),
            },
            "Ident" => Matcher::Ident,
            "Cond" => Matcher::Cond,
            "Imm" => Matcher::Imm,
            "W" => family(RegFamily::W)?,
            "X" => family(RegFamily::X)?,
            "WX" => family(RegFamily::WX)?,
            "WSP" => family(RegFamily::WSP)?,
            "XSP" => family(RegFamily::XSP)?,
            "WXSP" => family(RegFamily::WXSP)?,
            "B" => family(RegFamily::B)?,
            "H" => family(RegFamily::H)?,
            "S" => family(RegFamily::S)?,
            "D" => family(RegFamily::D)?,
            "Q" => family(RegFamily::Q)?,
            "F" => family(RegFamily::F)?,
            "V" => Matcher::V(size(0)?),
            "VStatic" => Matcher::VStatic(size(0)?, call.small(1)?),
            "VElement" => Matcher::VElement(size(0)?),
            "VElementStatic" => Matcher::VElementStatic(size(0)?, call.small(1)?),
            "VStaticElement" => Matcher::VStaticElement(size(0)?, call.small(1)?),
            "RegList" => Matcher::RegList(call.small(0)?, size(1)?),
            "RegListStatic" => Matcher::RegListStatic(call.small(0)?, size(1)?, call.small(2)?),
            "RegListElement" => Matcher::RegListElement(call.small(0)?, size(1)?),
            "Offset" => Matcher::Offset,
            "RefBase" => Matcher::RefBase,
            "RefOffset" => Matcher::RefOffset,
            "RefPre" => Matcher::RefPre,
            "RefIndex" => Matcher::RefIndex,
            "LitMod" => {
                let name = call.word(0)?;
                Matcher::LitMod(
                    Modifier::parse(name).ok_or_else(|| format!("LitMod: unknown modifier '{name}'"))?,
                )
            }
            "Mod" => {
                let name = call.word(0)?;
                Matcher::Mod(
                    ModifierSet::parse(name).ok_or_else(|| format!("Mod: unknown modifier set '{name}'"))?,
                )
            }
            "End" => Matcher::End,
            "Xlist" => Matcher::Xlist,
            other => return Err(format!("unknown matcher '{other}'")),
        };
        Ok(matcher)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Dot => f.write_str("Dot"),
            Matcher::Lit(text) => write!(f, "Lit(\"{text}\")"),
            Matcher::LitInt(value) => write!(f, "LitInt({value})"),
            Matcher::LitFloat(value) => write!(f, "LitFloat({value:?})"),
            Matcher::Ident => f.write_str("Ident"),
            Matcher::Cond => f.write_str("Cond"),
            Matcher::Imm => f.write_str("Imm"),
            Matcher::Reg(family) => write!(f, "{family:?}"),
            Matcher::V(size) => write!(f, "V({})", size.name()),
            Matcher::VStatic(size, lanes) => write!(f, "VStatic({}, {lanes})", size.name()),
            Matcher::VElement(size) => write!(f, "VElement({})", size.name()),
            Matcher::VElementStatic(size, index) => {
                write!(f, "VElementStatic({}, {index})", size.name())
            }
            Matcher::VStaticElement(size, lanes) => {
                write!(f, "VStaticElement({}, {lanes})", size.name())
            }
            Matcher::RegList(count, size) => write!(f, "RegList({count}, {})", size.name()),
            Matcher::RegListStatic(count, size, lanes) => {
                write!(f, "RegListStatic({count}, {}, {lanes})", size.name())
            }
            Matcher::RegListElement(count, size) => {
                write!(f, "RegListElement({count}, {})", size.name())
            }
            Matcher::Offset => f.write_str("Offset"),
            Matcher::RefBase => f.write_str("RefBase"),
            Matcher::RefOffset => f.write_str("RefOffset"),
            Matcher::RefPre => f.write_str("RefPre"),
            Matcher::RefIndex => f.write_str("RefIndex"),
            Matcher::LitMod(modifier) => write!(f, "LitMod({})", modifier.name()),
            Matcher::Mod(set) => write!(f, "Mod({})", set.name()),
            Matcher::End => f.write_str("End"),
            Matcher::Xlist => f.write_str("Xlist"),
        }
    }
}

/// Joins a matcher list with `, ` the way rows are emitted.
pub fn render_matchers(matchers: &[Matcher]) -> String {
    matchers
        .iter()
        .map(|matcher| matcher.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
