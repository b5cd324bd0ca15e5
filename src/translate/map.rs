//! Translation map: every catalog entry indexed by mnemonic and operand shape.

use ahash::AHashMap;

use crate::isa::error::BuildError;
use crate::isa::field::FieldList;
use crate::translate::catalog;
use crate::translate::entry::{EntryDef, TranslationEntry};

/// Operand template plus field set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ShapeKey {
    template: String,
    fields: FieldList,
}

#[derive(Debug, Default)]
pub struct TranslationMap {
    entries: Vec<TranslationEntry>,
    table: AHashMap<String, AHashMap<ShapeKey, usize>>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The map built from the catalog compiled into this crate.
    pub fn builtin() -> Result<Self, BuildError> {
        Self::load(catalog::SOURCES)
    }

    /// Loads every source in order. Fails on the first invalid entry or repeated key.
    pub fn load(sources: &[(&'static str, &'static [EntryDef])]) -> Result<Self, BuildError> {
        let mut map = Self::new();
        for (source, defs) in sources {
            for def in defs.iter() {
                map.insert(TranslationEntry::from_def(def, source)?)?;
            }
        }
        Ok(map)
    }

    /// Adds `entry` under each of its mnemonics.
    pub fn insert(&mut self, entry: TranslationEntry) -> Result<(), BuildError> {
        let index = self.entries.len();
        let key = ShapeKey {
            template: entry.template.clone(),
            fields: entry.fields.clone(),
        };
        for mnemonic in &entry.mnemonics {
            let shapes = self.table.entry(mnemonic.clone()).or_default();
            if shapes.contains_key(&key) {
                return Err(BuildError::DuplicateTranslationEntry {
                    mnemonic: mnemonic.clone(),
                    template: entry.template.clone(),
                    fields: entry.fields.to_string(),
                });
            }
            shapes.insert(key.clone(), index);
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn lookup(&self, mnemonic: &str, template: &str, fields: &FieldList) -> Option<&TranslationEntry> {
        let key = ShapeKey {
            template: template.to_string(),
            fields: fields.clone(),
        };
        let index = *self.table.get(mnemonic)?.get(&key)?;
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::field::Field;
    use crate::translate::entry::entry;

    static FIRST: &[EntryDef] = &[
        entry(&["CLZ", "RBIT"], "<Wd>,<Wn>", &[("Rn", 5, 5), ("Rd", 5, 0)]).encodes(&[("W, W", "R(0), R(5)")]),
        entry(&["CLZ"], "<Xd>,<Xn>", &[("Rn", 5, 5), ("Rd", 5, 0)]).encodes(&[("X, X", "R(0), R(5)")]),
    ];
    static REPEAT: &[EntryDef] =
        &[entry(&["RBIT"], "<Wd>,<Wn>", &[("Rd", 5, 0), ("Rn", 5, 5)]).encodes(&[("W, W", "R(0), R(5)")])];

    fn fields() -> FieldList {
        FieldList::from_fields([Field::new("Rd", 5, 0), Field::new("Rn", 5, 5)])
    }

    #[test]
    fn looks_up_by_mnemonic_and_shape() {
        let map = TranslationMap::load(&[("general", FIRST)]).expect("map");
        assert_eq!(map.len(), 2);
        let found = map.lookup("RBIT", "<Wd>,<Wn>", &fields()).expect("entry");
        assert_eq!(found.mnemonics, vec!["CLZ", "RBIT"]);
        assert_eq!(map.lookup("CLZ", "<Xd>,<Xn>", &fields()).map(|e| e.source), Some("general"));
        assert!(map.lookup("RBIT", "<Xd>,<Xn>", &fields()).is_none());
        assert!(map.lookup("REV", "<Wd>,<Wn>", &fields()).is_none());
    }

    #[test]
    fn repeated_key_in_another_source_fails() {
        let err = TranslationMap::load(&[("general", FIRST), ("system", REPEAT)]).expect_err("duplicate");
        match err {
            BuildError::DuplicateTranslationEntry { mnemonic, template, .. } => {
                assert_eq!(mnemonic, "RBIT");
                assert_eq!(template, "<Wd>,<Wn>");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn builtin_catalog_loads() {
        let map = TranslationMap::builtin().expect("builtin catalog is valid");
        assert!(map.len() > 400);
        let mov = map
            .lookup(
                "MOV",
                "<Wd>,#<imm>",
                &FieldList::from_fields([
                    Field::new("hw", 2, 21),
                    Field::new("imm16", 16, 5),
                    Field::new("Rd", 5, 0),
                ]),
            )
            .expect("MOV wide immediate");
        assert_eq!(mov.alternatives.len(), 2);
    }
}
