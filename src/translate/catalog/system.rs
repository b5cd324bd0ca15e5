//! System, barrier and hint instructions.

use crate::translate::entry::{EntryDef, entry};

pub static ENTRIES: &[EntryDef] = &[
    entry(&["AUTIA1716", "AUTIASP", "AUTIAZ", "AUTIB1716", "AUTIBSP", "AUTIBZ", "CFINV", "CSDB", "DRPS", "ERET", "ESB", "NOP", "PACIA1716", "PACIASP", "PACIAZ", "PACIB1716", "PACIBSP", "PACIBZ", "PSSBB", "SB", "SEV", "SEVL", "SSBB", "WFE", "WFI", "XPACLRI", "YIELD"], "", &[])
        .encodes(&[("", "")]),
    entry(&["HINT"], "#<imm>", &[("CRm", 4, 8), ("op2", 3, 5)])
        .encodes(&[("Imm", "Ubits(5, 7)")]),
    entry(&["BRK", "HLT", "HVC", "SMC", "SVC"], "#<imm>", &[("imm16", 16, 5)])
        .encodes(&[("Imm", "Ubits(5, 16)")]),
    entry(&["SYS"], "#<op1>,<Cn>,<Cm>,#<op2>{,<Xt>}", &[("op1", 3, 16), ("CRn", 4, 12), ("CRm", 4, 8), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[("Imm, Ident, Ident, Imm, End, X", r#"Ubits(16, 3), LitList(12, "CONTROL_REGS"), LitList(8, "CONTROL_REGS"), Ubits(5, 3), R(0)"#)]),
    entry(&["MSR"], "(<systemreg>|S<op0>_<op1>_<Cn>_<Cm>_<op2>),<Xt>", &[("o0", 1, 19), ("op1", 3, 16), ("CRn", 4, 12), ("CRm", 4, 8), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[("Imm, X", "Ubits(5, 15), R(0)")]),
    entry(&["SYSL"], "<Xt>,#<op1>,<Cn>,<Cm>,#<op2>", &[("op1", 3, 16), ("CRn", 4, 12), ("CRm", 4, 8), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[("X, Imm, Ident, Ident, Imm", r#"R(0), Ubits(16, 3), LitList(12, "CONTROL_REGS"), LitList(8, "CONTROL_REGS"), Ubits(5, 3)"#)]),
    entry(&["MRS"], "<Xt>,(<systemreg>|S<op0>_<op1>_<Cn>_<Cm>_<op2>)", &[("o0", 1, 19), ("op1", 3, 16), ("CRn", 4, 12), ("CRm", 4, 8), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[("X, Imm", "R(0), Ubits(5, 15)")]),
    entry(&["AT"], "<at_op>,<Xt>", &[("op1", 3, 16), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[("Ident, X", r#"LitList(5, "AT_OPS"), R(0)"#)]),
    entry(&["DC"], "<dc_op>,<Xt>", &[("op1", 3, 16), ("CRm", 4, 8), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[("Ident, X", r#"LitList(5, "DC_OPS"), R(0)"#)]),
    entry(&["IC"], "<ic_op>{,<Xt>}", &[("op1", 3, 16), ("CRm", 4, 8), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[
            (r#"Lit("ivau"), X"#, "R(0), Static(5, 0b01101110101001)"),
            ("Ident", r#"LitList(5, "IC_OPS"), Static(0, 0b11111)"#),
        ]),
    entry(&["DMB", "DSB"], "<option>|#<imm>", &[("CRm", 4, 8)])
        .encodes(&[
            ("Ident", r#"LitList(8, "BARRIER_OPS")"#),
            ("Imm", "Ubits(8, 4)"),
        ]),
    entry(&["MSR"], "<pstatefield>,#<imm>", &[("op1", 3, 16), ("CRm", 4, 8), ("op2", 3, 5)])
        .encodes(&[("Ident, Imm", r#"LitList(5, "MSR_IMM_OPS"), Ubits(8, 4)"#)]),
    entry(&["TLBI"], "<tlbi_op>{,<Xt>}", &[("op1", 3, 16), ("CRm", 4, 8), ("op2", 3, 5), ("Rt", 5, 0)])
        .encodes(&[("Ident, End, X", r#"LitList(5, "TLBI_OPS"), R(0)"#)]),
    entry(&["PSB", "TSB"], "CSYNC", &[])
        .encodes(&[(r#"Lit("csync")"#, "")]),
    entry(&["CFP", "CPP", "DVP"], "RCTX,<Xt>", &[("Rt", 5, 0)])
        .encodes(&[(r#"Lit("rctx"), X"#, "R(0)")]),
    entry(&["CLREX"], "{#<imm>}", &[("CRm", 4, 8)])
        .encodes(&[
            ("Imm", "Ubits(8, 4)"),
            ("", "Static(8, 0b1111)"),
        ]),
    entry(&["DCPS1", "DCPS2", "DCPS3"], "{#<imm>}", &[("imm16", 16, 5)])
        .encodes(&[("End, Imm", "Ubits(5, 16)")]),
    entry(&["ISB"], "{<option>|#<imm>}", &[("CRm", 4, 8)])
        .encodes(&[
            (r#"Lit("sy")"#, "Static(8, 0b1111)"),
            ("Imm", "Ubits(8, 4)"),
            ("", "Static(8, 0b1111)"),
        ]),
];
