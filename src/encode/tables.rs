//! Fixed name-to-code tables used by identifier operands.

use std::fmt;
use std::sync::LazyLock;

use ahash::AHashMap;

const CONDITIONS: &[(&str, u32)] = &[
    ("eq", 0),
    ("ne", 1),
    ("cs", 2),
    ("hs", 2),
    ("cc", 3),
    ("lo", 3),
    ("mi", 4),
    ("pl", 5),
    ("vs", 6),
    ("vc", 7),
    ("hi", 8),
    ("ls", 9),
    ("ge", 10),
    ("lt", 11),
    ("gt", 12),
    ("le", 13),
    ("al", 14),
    ("nv", 15),
];

const AT_OPS: &[(&str, u32)] = &[
    ("s1e1r", 0b00001111000000),
    ("s1e1w", 0b00001111000001),
    ("s1e0r", 0b00001111000010),
    ("s1e0w", 0b00001111000011),
    ("s1e2r", 0b10001111000000),
    ("s1e2w", 0b10001111000001),
    ("s12e1r", 0b10001111000100),
    ("s12e1w", 0b10001111000101),
    ("s12e0r", 0b10001111000110),
    ("s12e0w", 0b10001111000111),
    ("s1e3r", 0b11001111000000),
    ("s1e3w", 0b11001111000001),
    ("s1e1rp", 0b00001111001000),
    ("s1e1wp", 0b00001111001001),
];

const IC_OPS: &[(&str, u32)] = &[("ialluis", 0b00001110001000), ("iallu", 0b00001110101000)];

const DC_OPS: &[(&str, u32)] = &[
    ("ivac", 0b00001110110001),
    ("isw", 0b00001110110010),
    ("csw", 0b00001111010010),
    ("cisw", 0b00001111110010),
    ("zva", 0b01101110100001),
    ("cvac", 0b01101111010001),
    ("cvau", 0b01101111011001),
    ("civac", 0b01101111110001),
    ("cvap", 0b01101111100001),
];

const BARRIER_OPS: &[(&str, u32)] = &[
    ("sy", 0b1111),
    ("st", 0b1110),
    ("ld", 0b1101),
    ("ish", 0b1011),
    ("ishst", 0b1010),
    ("ishld", 0b1001),
    ("nsh", 0b0111),
    ("nshst", 0b0110),
    ("nshld", 0b0101),
    ("osh", 0b0011),
    ("oshst", 0b0010),
    ("oshld", 0b0001),
];

const MSR_IMM_OPS: &[(&str, u32)] = &[
    ("spsel", 0b00001000000101),
    ("daifset", 0b01101000000110),
    ("daifclr", 0b01101000000111),
    ("uao", 0b00001000000011),
    ("pan", 0b00001000000100),
    ("dit", 0b01101000000010),
];

const CONTROL_REGS: &[(&str, u32)] = &[
    ("c0", 0),
    ("c1", 1),
    ("c2", 2),
    ("c3", 3),
    ("c4", 4),
    ("c5", 5),
    ("c6", 6),
    ("c7", 7),
    ("c8", 8),
    ("c9", 9),
    ("c10", 10),
    ("c11", 11),
    ("c12", 12),
    ("c13", 13),
    ("c14", 14),
    ("c15", 15),
];

const TLBI_OPS: &[(&str, u32)] = &[
    ("vmalle1is", 0b00010000011000),
    ("vae1is", 0b00010000011001),
    ("aside1is", 0b00010000011010),
    ("vaae1is", 0b00010000011011),
    ("vale1is", 0b00010000011101),
    ("vaale1is", 0b00010000011111),
    ("vmalle1", 0b00010000111000),
    ("vae1", 0b00010000111001),
    ("aside1", 0b00010000111010),
    ("vaae1", 0b00010000111011),
    ("vale1", 0b00010000111101),
    ("vaale1", 0b00010000111111),
    ("ipas2e1is", 0b10010000000001),
    ("ipas2le1is", 0b10010000000101),
    ("alle2is", 0b10010000011000),
    ("vae2is", 0b10010000011001),
    ("alle1is", 0b10010000011100),
    ("vale2is", 0b10010000011101),
    ("vmalls12e1is", 0b10010000011110),
    ("ipas2e1", 0b10010000100001),
    ("ipas2le1", 0b10010000100101),
    ("alle2", 0b10010000111000),
    ("vae2", 0b10010000111001),
    ("alle1", 0b10010000111100),
    ("vale2", 0b10010000111101),
    ("vmalls12e1", 0b10010000111110),
    ("alle3is", 0b11010000011000),
    ("vae3is", 0b11010000011001),
    ("vale3is", 0b11010000011101),
    ("alle3", 0b11010000111000),
    ("vae3", 0b11010000111001),
    ("vale3", 0b11010000111101),
];

const ROUNDING_MODES: &[(&str, u32)] = &[
    ("rne", 0),
    ("rtz", 1),
    ("rdn", 2),
    ("rup", 3),
    ("rmm", 4),
    ("dyn", 7),
];

const CSRS: &[(&str, u32)] = &[
    ("fflags", 0x001),
    ("frm", 0x002),
    ("fcsr", 0x003),
    ("seed", 0x015),
    ("cycle", 0xC00),
    ("time", 0xC01),
    ("instret", 0xC02),
    ("cycleh", 0xC80),
    ("timeh", 0xC81),
    ("instreth", 0xC82),
    ("sstatus", 0x100),
    ("sie", 0x104),
    ("stvec", 0x105),
    ("scounteren", 0x106),
    ("sscratch", 0x140),
    ("sepc", 0x141),
    ("scause", 0x142),
    ("stval", 0x143),
    ("sip", 0x144),
    ("satp", 0x180),
    ("mstatus", 0x300),
    ("misa", 0x301),
    ("medeleg", 0x302),
    ("mideleg", 0x303),
    ("mie", 0x304),
    ("mtvec", 0x305),
    ("mcounteren", 0x306),
    ("mscratch", 0x340),
    ("mepc", 0x341),
    ("mcause", 0x342),
    ("mtval", 0x343),
    ("mip", 0x344),
    ("mcycle", 0xB00),
    ("minstret", 0xB02),
    ("mvendorid", 0xF11),
    ("marchid", 0xF12),
    ("mimpid", 0xF13),
    ("mhartid", 0xF14),
];

/// Identifier tables an operand name can be resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameTable {
    Cond,
    AtOps,
    IcOps,
    DcOps,
    BarrierOps,
    MsrImmOps,
    ControlRegs,
    TlbiOps,
    RoundingMode,
    Csr,
}

static INDEX: LazyLock<AHashMap<NameTable, AHashMap<&'static str, u32>>> = LazyLock::new(|| {
    NameTable::ALL
        .into_iter()
        .map(|table| (table, table.entries().iter().copied().collect()))
        .collect()
});

impl NameTable {
    pub const ALL: [NameTable; 10] = [
        NameTable::Cond,
        NameTable::AtOps,
        NameTable::IcOps,
        NameTable::DcOps,
        NameTable::BarrierOps,
        NameTable::MsrImmOps,
        NameTable::ControlRegs,
        NameTable::TlbiOps,
        NameTable::RoundingMode,
        NameTable::Csr,
    ];

    pub fn entries(self) -> &'static [(&'static str, u32)] {
        match self {
            NameTable::Cond => CONDITIONS,
            NameTable::AtOps => AT_OPS,
            NameTable::IcOps => IC_OPS,
            NameTable::DcOps => DC_OPS,
            NameTable::BarrierOps => BARRIER_OPS,
            NameTable::MsrImmOps => MSR_IMM_OPS,
            NameTable::ControlRegs => CONTROL_REGS,
            NameTable::TlbiOps => TLBI_OPS,
            NameTable::RoundingMode => ROUNDING_MODES,
            NameTable::Csr => CSRS,
        }
    }

    /// Case-insensitive lookup.
    pub fn lookup(self, name: &str) -> Option<u32> {
        let table = INDEX.get(&self)?;
        table
            .get(name)
            .or_else(|| table.get(name.to_ascii_lowercase().as_str()))
            .copied()
    }

    pub fn names(self) -> impl Iterator<Item = &'static str> {
        self.entries().iter().map(|(name, _)| *name)
    }

    /// Catalog spelling, as used by `LitList(offset, "NAME")`.
    pub fn catalog_name(self) -> &'static str {
        match self {
            NameTable::Cond => "COND",
            NameTable::AtOps => "AT_OPS",
            NameTable::IcOps => "IC_OPS",
            NameTable::DcOps => "DC_OPS",
            NameTable::BarrierOps => "BARRIER_OPS",
            NameTable::MsrImmOps => "MSR_IMM_OPS",
            NameTable::ControlRegs => "CONTROL_REGS",
            NameTable::TlbiOps => "TLBI_OPS",
            NameTable::RoundingMode => "ROUNDING_MODE",
            NameTable::Csr => "CSR",
        }
    }

    pub fn from_catalog_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|table| table.catalog_name() == name)
    }
}

impl fmt::Display for NameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}

/// Encodes a RISC-V fence set such as `iorw` or `rw` into its 4-bit `i o r w` mask.
pub fn fence_spec(name: &str) -> Option<u32> {
    if name.is_empty() || name.len() > 4 {
        return None;
    }
    let mut bits = 0u32;
    let mut last_rank = None;
    for ch in name.chars() {
        let (rank, bit) = match ch.to_ascii_lowercase() {
            'i' => (0, 8),
            'o' => (1, 4),
            'r' => (2, 2),
            'w' => (3, 1),
            _ => return None,
        };
        if last_rank.is_some_and(|last| rank <= last) {
            return None;
        }
        last_rank = Some(rank);
        bits |= bit;
    }
    Some(bits)
}

/// Every valid fence set spelling, in mask order.
pub fn fence_spec_names() -> Vec<String> {
    (1u32..16)
        .map(|mask| {
            [(8, 'i'), (4, 'o'), (2, 'r'), (1, 'w')]
                .iter()
                .filter(|(bit, _)| mask & bit != 0)
                .map(|(_, ch)| *ch)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_condition_aliases() {
        assert_eq!(NameTable::Cond.lookup("hs"), Some(2));
        assert_eq!(NameTable::Cond.lookup("LO"), Some(3));
        assert_eq!(NameTable::Cond.lookup("xx"), None);
    }

    #[test]
    fn resolves_barrier_and_csr_names() {
        assert_eq!(NameTable::BarrierOps.lookup("ishld"), Some(0b1001));
        assert_eq!(NameTable::Csr.lookup("mstatus"), Some(0x300));
        assert_eq!(NameTable::RoundingMode.lookup("dyn"), Some(7));
    }

    #[test]
    fn encodes_fence_sets_in_canonical_order_only() {
        assert_eq!(fence_spec("iorw"), Some(15));
        assert_eq!(fence_spec("rw"), Some(3));
        assert_eq!(fence_spec("wr"), None);
        assert_eq!(fence_spec("x"), None);
        let names = fence_spec_names();
        assert_eq!(names.len(), 15);
        for name in &names {
            assert!(fence_spec(name).is_some(), "{name}");
        }
    }

    #[test]
    fn catalog_names_resolve() {
        for table in NameTable::ALL {
            assert_eq!(NameTable::from_catalog_name(table.catalog_name()), Some(table));
        }
    }
}
