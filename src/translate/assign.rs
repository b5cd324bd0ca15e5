//! Matcher and command assignment: resolves each variant of a mnemonic group against the
//! translation map and produces its compiled rows.

use crate::isa::compiled::{CompiledEntry, sort_by_priority};
use crate::isa::error::BuildError;
use crate::isa::group::MnemonicGroup;
use crate::isa::variant::CanonicalVariant;
use crate::translate::entry::{Alternative, Disambiguation, TranslationEntry};
use crate::translate::map::TranslationMap;

fn row(variant: &CanonicalVariant, alternative: &Alternative, priority: i32) -> CompiledEntry {
    CompiledEntry::from_variant(
        variant,
        alternative.matchers.clone(),
        alternative.commands.clone(),
        priority,
    )
}

/// Rows for one variant under `entry`. Commands still carry their `Static` pins.
pub fn assign_variant(variant: &CanonicalVariant, entry: &TranslationEntry) -> Result<Vec<CompiledEntry>, BuildError> {
    if entry.forget {
        return Ok(Vec::new());
    }
    let priority = entry.priority;
    if let [alternative] = entry.alternatives.as_slice() {
        return Ok(vec![row(variant, alternative, priority)]);
    }

    let rows: Vec<CompiledEntry> = match &entry.disambiguation {
        Disambiguation::None => entry
            .alternatives
            .iter()
            .map(|alternative| row(variant, alternative, priority))
            .collect(),
        Disambiguation::ByName(names) => entry
            .alternatives
            .iter()
            .zip(names)
            .filter(|(_, name)| **name == variant.title)
            .map(|(alternative, _)| row(variant, alternative, priority))
            .collect(),
        Disambiguation::ByBits(patterns) => entry
            .alternatives
            .iter()
            .zip(patterns)
            .filter(|(_, bits)| **bits == variant.bits)
            .map(|(alternative, _)| row(variant, alternative, priority))
            .collect(),
    };

    if rows.is_empty() {
        let wanted = match entry.disambiguation {
            Disambiguation::ByBits(_) => format!("bits {}", variant.bits),
            _ => format!("name '{}'", variant.title),
        };
        return Err(BuildError::DisambiguationFailed {
            mnemonic: variant.mnemonic.clone(),
            template: variant.operand_template.clone(),
            wanted,
        });
    }
    Ok(rows)
}

/// Rows for every variant of `group`, ordered by descending priority and otherwise in discovery
/// order.
pub fn assign_group(group: &MnemonicGroup, map: &TranslationMap) -> Result<Vec<CompiledEntry>, BuildError> {
    let mut rows = Vec::new();
    for variant in &group.variants {
        let entry = map
            .lookup(&variant.mnemonic, &variant.operand_template, &variant.fields)
            .ok_or_else(|| BuildError::UnresolvedVariant {
                mnemonic: variant.mnemonic.clone(),
                template: variant.operand_template.clone(),
                fields: variant.fields.to_string(),
            })?;
        rows.extend(assign_variant(variant, entry)?);
    }
    sort_by_priority(&mut rows);
    Ok(rows)
}
