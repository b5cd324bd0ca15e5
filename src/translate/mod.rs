//! Translation catalog and matcher/command assignment.

pub mod assign;
pub mod catalog;
pub mod entry;
pub mod map;
pub mod skeleton;

pub use assign::{assign_group, assign_variant};
pub use entry::{Alternative, Disambiguation, EntryDef, TranslationEntry, entry};
pub use map::TranslationMap;
pub use skeleton::skeleton;
