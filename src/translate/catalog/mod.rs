//! Built-in translation catalog, one source per AArch64 instruction class.

use crate::translate::entry::EntryDef;

pub mod advsimd;
pub mod float;
pub mod fpsimd;
pub mod general;
pub mod system;

/// `(source name, entries)` in load order.
pub static SOURCES: &[(&str, &[EntryDef])] = &[
    ("general", general::ENTRIES),
    ("system", system::ENTRIES),
    ("float", float::ENTRIES),
    ("fpsimd", fpsimd::ENTRIES),
    ("advsimd", advsimd::ENTRIES),
];

