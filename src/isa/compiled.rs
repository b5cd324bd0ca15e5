//! Compiled table rows: a bit template paired with the matcher list that selects it and the
//! commands that pack its operands.

use crate::encode::command::{Command, render_commands};
use crate::encode::derive::operand_names;
use crate::encode::interp::{EncodeError, EncodeOptions, Operand, encode};
use crate::encode::matcher::{Matcher, render_matchers};
use crate::isa::template::BitTemplate;
use crate::isa::variant::{ArchTag, CanonicalVariant, InstrClass};

#[derive(Clone, Debug, PartialEq)]
pub struct CompiledEntry {
    pub mnemonic: String,
    /// Instruction name shown when a mnemonic groups several documented forms.
    pub title: String,
    pub bits: BitTemplate,
    pub matchers: Vec<Matcher>,
    pub commands: Vec<Command>,
    pub priority: i32,
    pub arch: ArchTag,
    pub class: InstrClass,
    /// Declared field names, kept for table comments. Line-DSL rows keep source order.
    pub fields: Vec<String>,
}

impl CompiledEntry {
    /// Row for `variant` with the given matcher list and commands.
    pub fn from_variant(
        variant: &CanonicalVariant,
        matchers: Vec<Matcher>,
        commands: Vec<Command>,
        priority: i32,
    ) -> Self {
        Self {
            mnemonic: variant.mnemonic.clone(),
            title: variant.title.clone(),
            bits: variant.bits,
            matchers,
            commands,
            priority,
            arch: variant.arch.clone(),
            class: variant.class.clone(),
            fields: match variant.arch {
                ArchTag::Riscv { .. } => operand_names(variant).map(str::to_string).collect(),
                ArchTag::Aarch64 { .. } => variant.fields.names(),
            },
        }
    }

    pub fn matcher_text(&self) -> String {
        render_matchers(&self.matchers)
    }

    pub fn command_text(&self) -> String {
        render_commands(&self.commands)
    }

    /// Runs the row's commands against `operands` on top of its fixed bits.
    pub fn encode(&self, operands: &[Operand], options: &EncodeOptions) -> Result<u32, EncodeError> {
        encode(self.bits.fixed_bits(), &self.commands, operands, options)
    }
}

/// Stable sort by descending priority; rows of equal priority keep discovery order.
pub fn sort_by_priority(rows: &mut [CompiledEntry]) {
    rows.sort_by(|a, b| b.priority.cmp(&a.priority));
}
