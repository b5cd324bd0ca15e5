//! Translation entries: the hand-authored rules that give an operand shape its matchers and
//! commands.
//!
//! Catalog sources declare entries as `static` data through [`entry`] and the builder methods on
//! [`EntryDef`]; [`TranslationEntry::from_def`] parses and checks one at load time.

use std::fmt;

use crate::encode::command::Command;
use crate::encode::matcher::Matcher;
use crate::isa::error::BuildError;
use crate::isa::field::{Field, FieldList};
use crate::isa::template::BitTemplate;

/// Declarative form of one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryDef {
    pub mnemonics: &'static [&'static str],
    pub template: &'static str,
    /// `(name, width, offset)` of every field the shape declares.
    pub fields: &'static [(&'static str, u8, u8)],
    /// `(matchers, commands)` pairs in their textual form.
    pub alternatives: &'static [(&'static str, &'static str)],
    pub priority: i32,
    pub forget: bool,
    pub names: &'static [&'static str],
    pub bits: &'static [&'static str],
}

/// Starts an entry for the given mnemonics, operand template and fields.
pub const fn entry(
    mnemonics: &'static [&'static str],
    template: &'static str,
    fields: &'static [(&'static str, u8, u8)],
) -> EntryDef {
    EntryDef {
        mnemonics,
        template,
        fields,
        alternatives: &[],
        priority: 0,
        forget: false,
        names: &[],
        bits: &[],
    }
}

impl EntryDef {
    pub const fn encodes(self, alternatives: &'static [(&'static str, &'static str)]) -> Self {
        EntryDef { alternatives, ..self }
    }

    pub const fn priority(self, priority: i32) -> Self {
        EntryDef { priority, ..self }
    }

    /// Drops every variant with this shape.
    pub const fn forget(self) -> Self {
        EntryDef { forget: true, ..self }
    }

    /// Selects the alternative whose position matches the variant's title.
    pub const fn names(self, names: &'static [&'static str]) -> Self {
        EntryDef { names, ..self }
    }

    /// Selects the alternatives whose bit pattern equals the variant's bit template.
    pub const fn bits(self, bits: &'static [&'static str]) -> Self {
        EntryDef { bits, ..self }
    }
}

/// One parsed `(matchers, commands)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Alternative {
    pub matchers: Vec<Matcher>,
    pub commands: Vec<Command>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Disambiguation {
    None,
    /// One title per alternative.
    ByName(Vec<String>),
    /// One bit pattern per alternative.
    ByBits(Vec<BitTemplate>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranslationEntry {
    pub mnemonics: Vec<String>,
    pub template: String,
    pub fields: FieldList,
    pub alternatives: Vec<Alternative>,
    pub priority: i32,
    pub forget: bool,
    pub disambiguation: Disambiguation,
    /// Catalog source the entry came from.
    pub source: &'static str,
}

impl TranslationEntry {
    pub fn from_def(def: &EntryDef, source: &'static str) -> Result<Self, BuildError> {
        let invalid = |message: String| BuildError::InvalidCatalogEntry {
            source,
            mnemonics: def.mnemonics.join(", "),
            template: def.template.to_string(),
            message,
        };

        if !def.names.is_empty() && !def.bits.is_empty() {
            return Err(invalid("names and bits are both set".into()));
        }
        if !def.forget && def.alternatives.is_empty() {
            return Err(invalid("entry has no alternatives".into()));
        }
        for (kind, len) in [("names", def.names.len()), ("bits", def.bits.len())] {
            if len != 0 && len != def.alternatives.len() {
                return Err(invalid(format!(
                    "{kind} has {len} item(s) for {} alternative(s)",
                    def.alternatives.len()
                )));
            }
        }

        let alternatives = def
            .alternatives
            .iter()
            .map(|(matchers, commands)| {
                Ok(Alternative {
                    matchers: Matcher::parse_list(matchers).map_err(&invalid)?,
                    commands: Command::parse_list(commands).map_err(&invalid)?,
                })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        let disambiguation = if !def.names.is_empty() {
            Disambiguation::ByName(def.names.iter().map(|name| name.to_string()).collect())
        } else if !def.bits.is_empty() {
            let bits = def
                .bits
                .iter()
                .map(|pattern| {
                    BitTemplate::parse(pattern).ok_or_else(|| invalid(format!("bad bit pattern '{pattern}'")))
                })
                .collect::<Result<Vec<_>, BuildError>>()?;
            Disambiguation::ByBits(bits)
        } else {
            Disambiguation::None
        };

        Ok(Self {
            mnemonics: def.mnemonics.iter().map(|name| name.to_string()).collect(),
            template: def.template.to_string(),
            fields: FieldList::from_fields(
                def.fields
                    .iter()
                    .map(|(name, width, offset)| Field::new(*name, *width, *offset)),
            ),
            alternatives,
            priority: def.priority,
            forget: def.forget,
            disambiguation,
            source,
        })
    }
}

impl fmt::Display for TranslationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' {}",
            self.mnemonics.join("/"),
            self.template,
            self.fields
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOV: EntryDef = entry(&["MOV"], "<Wd>,#<imm>", &[("hw", 2, 21), ("imm16", 16, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("W, Imm", "R(0), Special(5, WIDE_IMMEDIATE_W)"),
            (r#"Dot, Lit("inverted"), W, Imm"#, "R(0), Special(5, INVERTED_WIDE_IMMEDIATE_W)"),
        ])
        .names(&["MOV (wide immediate)", "MOV (inverted wide immediate)"]);

    #[test]
    fn parses_named_alternatives() {
        let parsed = TranslationEntry::from_def(&MOV, "general").expect("valid entry");
        assert_eq!(parsed.alternatives.len(), 2);
        assert_eq!(parsed.alternatives[1].matchers.len(), 4);
        assert_eq!(parsed.fields.names(), vec!["hw", "imm16", "Rd"]);
        match &parsed.disambiguation {
            Disambiguation::ByName(names) => assert_eq!(names[0], "MOV (wide immediate)"),
            other => panic!("unexpected disambiguation {other:?}"),
        }
        assert_eq!(parsed.to_string(), "MOV '<Wd>,#<imm>' (('hw', 2, 21), ('imm16', 16, 5), ('Rd', 5, 0))");
    }

    #[test]
    fn empty_shape_with_empty_lists_is_valid() {
        let def = entry(&["ERET"], "", &[]).encodes(&[("", "")]);
        let parsed = TranslationEntry::from_def(&def, "general").expect("valid entry");
        assert!(parsed.alternatives[0].matchers.is_empty());
        assert!(parsed.alternatives[0].commands.is_empty());
    }

    #[test]
    fn rejects_inconsistent_entries() {
        let both = MOV.bits(&["x", "x"]);
        let missing = entry(&["NOP"], "", &[]);
        let short = MOV.names(&["only one"]);
        let unknown = entry(&["NOP"], "", &[]).encodes(&[("Frob", "")]);
        for def in [both, missing, short, unknown] {
            assert!(matches!(
                TranslationEntry::from_def(&def, "general"),
                Err(BuildError::InvalidCatalogEntry { source: "general", .. })
            ));
        }
        assert!(TranslationEntry::from_def(&entry(&["NOP"], "", &[]).forget(), "general").is_ok());
    }

    #[test]
    fn parses_bit_patterns() {
        let def = entry(&["MOVI"], "<Vd>.<T>,#<imm8>", &[("Q", 1, 30)])
            .encodes(&[("V(WORD), Imm", "R(0)"), ("V(DWORD), Imm", "R(0)")])
            .bits(&["0x10111100000xxx10x001xxxxxxxxxx", "0x10111100000xxx0xx001xxxxxxxxxx"]);
        let parsed = TranslationEntry::from_def(&def, "advsimd").expect("valid entry");
        let Disambiguation::ByBits(bits) = parsed.disambiguation else {
            panic!("expected bits");
        };
        assert_eq!(bits[0].pattern(), "0x10111100000xxx10x001xxxxxxxxxx");

        let bad = def.bits(&["01", "10"]);
        assert!(TranslationEntry::from_def(&bad, "advsimd").is_err());
    }
}
