//! General-purpose integer, load/store and branch instructions.

use crate::translate::entry::{EntryDef, entry};

pub static ENTRIES: &[EntryDef] = &[
    entry(&["ERETAA", "ERETAB", "RETAA", "RETAB"], "", &[])
        .encodes(&[("", "")]),
    entry(&["UDF"], "#<imm>", &[("imm16", 16, 0)])
        .encodes(&[("Imm", "Ubits(0, 16)")]),
    entry(&["PRFM"], "(<prfop>|#<imm5>),<label>", &[("imm19", 19, 5), ("Rt", 5, 0)])
        .encodes(&[("Imm, Offset", "Ubits(0, 5), Offset(BCOND)")]),
    entry(&["PRFM"], "(<prfop>|#<imm5>),[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Imm, RefIndex", "Ubits(0, 5), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 3])")]),
    entry(&["PRFUM"], "(<prfop>|#<imm5>),[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Imm, RefOffset", "Ubits(0, 5), R(5), Sbits(12, 9)")]),
    entry(&["B"], ".<cond><label>", &[("imm19", 19, 5), ("cond", 4, 0)])
        .encodes(&[("Dot, Cond, Offset", "Cond(0), Offset(BCOND)")]),
    entry(&["TBNZ", "TBZ"], "<R><t>,#<imm>,<label>", &[("b5", 1, 31), ("b40", 5, 19), ("imm14", 14, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("W, Imm, Offset", "R(0), Ubits(19, 5), Offset(TBZ)"),
            ("X, Imm, Offset", "R(0), BUbits(6), Uslice(19, 5, 0), Uslice(31, 1, 5), A, Offset(TBZ)"),
        ]),
    entry(&["MOV"], "<Wd>,#<imm>", &[("hw", 2, 21), ("imm16", 16, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("W, Imm", "R(0), Special(5, WIDE_IMMEDIATE_W)"),
            (r#"Dot, Lit("inverted"), W, Imm"#, "R(0), Special(5, INVERTED_WIDE_IMMEDIATE_W)"),
        ])
        .names(&["MOV (wide immediate)", "MOV (inverted wide immediate)"]),
    entry(&["MOVK", "MOVN", "MOVZ"], "<Wd>,#<imm>{,LSL#<shift>}", &[("hw", 2, 21), ("imm16", 16, 5), ("Rd", 5, 0)])
        .encodes(&[("W, Imm, End, LitMod(LSL)", "R(0), Ubits(5, 16), Ulist(21, &[0, 16])")]),
    entry(&["BFC"], "<Wd>,#<lsb>,#<width>", &[("immr", 6, 16), ("imms", 6, 10), ("Rd", 5, 0)])
        .encodes(&[("W, Imm, Imm", "R(0), Unegmod(16, 5), BUsum(5), Urange(10, 1, 32)")]),
    entry(&["MOV", "NGC", "NGCS"], "<Wd>,<Wm>", &[("Rm", 5, 16), ("Rd", 5, 0)])
        .encodes(&[("W, W", "R(0), R(16)")])
        .priority(1),
    entry(&["MVN", "NEG", "NEGS"], "<Wd>,<Wm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rd", 5, 0)])
        .encodes(&[("W, W, End, Mod(SHIFTS)", "R(0), R(16), Rotates(22), Ubits(10, 5)")])
        .priority(1),
    entry(&["CLS", "CLZ", "RBIT", "REV", "REV16", "SXTB", "SXTH", "UXTB", "UXTH"], "<Wd>,<Wn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W", "R(0), R(5)")]),
    entry(&["ANDS"], "<Wd>,<Wn>,#<imm>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Imm", "R(0), R(5), Special(10, LOGICAL_IMMEDIATE_W)")]),
    entry(&["BFM", "SBFM", "UBFM"], "<Wd>,<Wn>,#<immr>,#<imms>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Imm, Imm", "R(0), R(5), Ubits(16, 5), Ubits(10, 5)")]),
    entry(&["BFI", "SBFIZ", "UBFIZ"], "<Wd>,<Wn>,#<lsb>,#<width>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Imm, Imm", "R(0), R(5), Unegmod(16, 5), BUsum(5), Urange(10, 1, 32)")]),
    entry(&["BFXIL", "SBFX", "UBFX"], "<Wd>,<Wn>,#<lsb>,#<width>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Imm, Imm", "R(0), R(5), Ubits(16, 5), BUsum(5), Usumdec(10, 5)")]),
    entry(&["ASR", "LSR"], "<Wd>,<Wn>,#<shift>", &[("immr", 6, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Imm", "R(0), R(5), Ubits(16, 5)")]),
    entry(&["LSL"], "<Wd>,<Wn>,#<shift>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Imm", "R(0), R(5), Unegmod(16, 5), C, Usub(10, 5, 31)")]),
    entry(&["ADC", "ADCS", "ASR", "ASRV", "CRC32B", "CRC32CB", "CRC32CH", "CRC32CW", "CRC32H", "CRC32W", "LSL", "LSLV", "LSR", "LSRV", "MNEG", "MUL", "ROR", "RORV", "SBC", "SBCS", "SDIV", "UDIV"], "<Wd>,<Wn>,<Wm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, W", "R(0), R(5), R(16)")]),
    entry(&["EXTR"], "<Wd>,<Wn>,<Wm>,#<lsb>", &[("Rm", 5, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, W, Imm", "R(0), R(5), R(16), Ubits(10, 5)")]),
    entry(&["MADD", "MSUB"], "<Wd>,<Wn>,<Wm>,<Wa>", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, W, W", "R(0), R(5), R(16), R(10)")]),
    entry(&["CSEL", "CSINC", "CSINV", "CSNEG"], "<Wd>,<Wn>,<Wm>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, W, Cond", "R(0), R(5), R(16), Cond(12)")]),
    entry(&["ADD", "ADDS", "SUB", "SUBS"], "<Wd>,<Wn>,<Wm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, W, End, Mod(SHIFTS)", "R(0), R(5), R(16), Rotates(22), Ubits(10, 5)")])
        .priority(1),
    entry(&["AND", "ANDS", "BIC", "BICS", "EON", "EOR", "ORN", "ORR"], "<Wd>,<Wn>,<Wm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, W, End, Mod(ROTATES)", "R(0), R(5), R(16), Rotates(22), Ubits(10, 5)")]),
    entry(&["CRC32CX", "CRC32X"], "<Wd>,<Wn>,<Xm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, X", "R(0), R(5), R(16)")]),
    entry(&["CINC", "CINV", "CNEG"], "<Wd>,<Wn>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Cond", "R(0), R(5), C, R(16), CondInv(12)")]),
    entry(&["ADDS", "SUBS"], "<Wd>,<Wn|WSP>,#<imm>{,<shift>}", &[("sh", 1, 22), ("imm12", 12, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, WSP, Imm, End, LitMod(LSL)", "R(0), R(5), Ubits(10, 12), Ulist(22, &[0, 12])")]),
    entry(&["ADDS", "SUBS"], "<Wd>,<Wn|WSP>,<Wm>{,<extend>{#<amount>}}", &[("Rm", 5, 16), ("option", 3, 13), ("imm3", 3, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, WSP, W, End, Mod(EXTENDS)", "R(0), R(5), R(16), ExtendsW(13), Urange(10, 0, 4)")]),
    entry(&["ROR"], "<Wd>,<Ws>,#<shift>", &[("Rm", 5, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, W, Imm", "R(0), R(5), C, R(16), Ubits(10, 5)")]),
    entry(&["CSET", "CSETM"], "<Wd>,<cond>", &[("cond", 4, 12), ("Rd", 5, 0)])
        .encodes(&[("W, Cond", "R(0), CondInv(12)")]),
    entry(&["MOV"], "<Wd|WSP>,#<imm>", &[("immr", 6, 16), ("imms", 6, 10), ("Rd", 5, 0)])
        .encodes(&[(r#"Dot, Lit("logical"), WSP, Imm"#, "R(0), Special(10, LOGICAL_IMMEDIATE_W)")]),
    entry(&["AND", "EOR", "ORR"], "<Wd|WSP>,<Wn>,#<imm>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("WSP, W, Imm", "R(0), R(5), Special(10, LOGICAL_IMMEDIATE_W)")]),
    entry(&["MOV"], "<Wd|WSP>,<Wn|WSP>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("WSP, WSP", "R(0), R(5)")]),
    entry(&["ADD", "SUB"], "<Wd|WSP>,<Wn|WSP>,#<imm>{,<shift>}", &[("sh", 1, 22), ("imm12", 12, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("WSP, WSP, Imm, End, LitMod(LSL)", "R(0), R(5), Ubits(10, 12), Ulist(22, &[0, 12])")]),
    entry(&["ADD", "SUB"], "<Wd|WSP>,<Wn|WSP>,<Wm>{,<extend>{#<amount>}}", &[("Rm", 5, 16), ("option", 3, 13), ("imm3", 3, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("WSP, WSP, W, End, Mod(EXTENDS)", "R(0), R(5), R(16), ExtendsW(13), Urange(10, 0, 4)")]),
    entry(&["SETF16", "SETF8"], "<Wn>", &[("Rn", 5, 5)])
        .encodes(&[("W", "R(5)")]),
    entry(&["TST"], "<Wn>,#<imm>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5)])
        .encodes(&[("W, Imm", "R(5), Special(10, LOGICAL_IMMEDIATE_W)")]),
    entry(&["CCMN", "CCMP"], "<Wn>,#<imm>,#<nzcv>,<cond>", &[("imm5", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("nzcv", 4, 0)])
        .encodes(&[("W, Imm, Imm, Cond", "R(5), Ubits(16, 5), Ubits(0, 4), Cond(12)")]),
    entry(&["CCMN", "CCMP"], "<Wn>,<Wm>,#<nzcv>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("nzcv", 4, 0)])
        .encodes(&[("W, W, Imm, Cond", "R(5), R(16), Ubits(0, 4), Cond(12)")]),
    entry(&["CMN", "CMP"], "<Wn>,<Wm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5)])
        .encodes(&[("W, W, End, Mod(SHIFTS)", "R(5), R(16), Rotates(22), Ubits(10, 5)")])
        .priority(1),
    entry(&["TST"], "<Wn>,<Wm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5)])
        .encodes(&[("W, W, End, Mod(ROTATES)", "R(5), R(16), Rotates(22), Ubits(10, 5)")]),
    entry(&["CMN", "CMP"], "<Wn|WSP>,#<imm>{,<shift>}", &[("sh", 1, 22), ("imm12", 12, 10), ("Rn", 5, 5)])
        .encodes(&[("WSP, Imm, End, LitMod(LSL)", "R(5), Ubits(10, 12), Ulist(22, &[0, 12])")]),
    entry(&["CMN", "CMP"], "<Wn|WSP>,<Wm>{,<extend>{#<amount>}}", &[("Rm", 5, 16), ("option", 3, 13), ("imm3", 3, 10), ("Rn", 5, 5)])
        .encodes(&[("WSP, W, End, Mod(EXTENDS)", "R(5), R(16), ExtendsW(13), Urange(10, 0, 4)")]),
    entry(&["CASP", "CASPA", "CASPAL", "CASPL"], "<Ws>,<W(s+1)>,<Wt>,<W(t+1)>,[<Xn|SP>{,#0}]", &[("Rs", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, W, W, RefBase", "REven(16), RNext, REven(0), RNext, R(5)")]),
    entry(&["STLXP", "STXP"], "<Ws>,<Wt1>,<Wt2>,[<Xn|SP>{,#0}]", &[("Rs", 5, 16), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, W, RefBase", "R(16), R(0), R(10), R(5)")]),
    entry(&["LDADD", "LDADDA", "LDADDAB", "LDADDAH", "LDADDAL", "LDADDALB", "LDADDALH", "LDADDB", "LDADDH", "LDADDL", "LDADDLB", "LDADDLH", "LDCLR", "LDCLRA", "LDCLRAB", "LDCLRAH", "LDCLRAL", "LDCLRALB", "LDCLRALH", "LDCLRB", "LDCLRH", "LDCLRL", "LDCLRLB", "LDCLRLH", "LDEOR", "LDEORA", "LDEORAB", "LDEORAH", "LDEORAL", "LDEORALB", "LDEORALH", "LDEORB", "LDEORH", "LDEORL", "LDEORLB", "LDEORLH", "LDSET", "LDSETA", "LDSETAB", "LDSETAH", "LDSETAL", "LDSETALB", "LDSETALH", "LDSETB", "LDSETH", "LDSETL", "LDSETLB", "LDSETLH", "LDSMAX", "LDSMAXA", "LDSMAXAB", "LDSMAXAH", "LDSMAXAL", "LDSMAXALB", "LDSMAXALH", "LDSMAXB", "LDSMAXH", "LDSMAXL", "LDSMAXLB", "LDSMAXLH", "LDSMIN", "LDSMINA", "LDSMINAB", "LDSMINAH", "LDSMINAL", "LDSMINALB", "LDSMINALH", "LDSMINB", "LDSMINH", "LDSMINL", "LDSMINLB", "LDSMINLH", "LDUMAX", "LDUMAXA", "LDUMAXAB", "LDUMAXAH", "LDUMAXAL", "LDUMAXALB", "LDUMAXALH", "LDUMAXB", "LDUMAXH", "LDUMAXL", "LDUMAXLB", "LDUMAXLH", "LDUMIN", "LDUMINA", "LDUMINAB", "LDUMINAH", "LDUMINAL", "LDUMINALB", "LDUMINALH", "LDUMINB", "LDUMINH", "LDUMINL", "LDUMINLB", "LDUMINLH", "SWP", "SWPA", "SWPAB", "SWPAH", "SWPAL", "SWPALB", "SWPALH", "SWPB", "SWPH", "SWPL", "SWPLB", "SWPLH"], "<Ws>,<Wt>,[<Xn|SP>]", &[("Rs", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, RefBase", "R(16), R(0), R(5)")]),
    entry(&["CAS", "CASA", "CASAB", "CASAH", "CASAL", "CASALB", "CASALH", "CASB", "CASH", "CASL", "CASLB", "CASLH", "STLXR", "STLXRB", "STLXRH", "STXR", "STXRB", "STXRH"], "<Ws>,<Wt>,[<Xn|SP>{,#0}]", &[("Rs", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, RefBase", "R(16), R(0), R(5)")]),
    entry(&["STLXP", "STXP"], "<Ws>,<Xt1>,<Xt2>,[<Xn|SP>{,#0}]", &[("Rs", 5, 16), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, X, X, RefBase", "R(16), R(0), R(10), R(5)")]),
    entry(&["STLXR", "STXR"], "<Ws>,<Xt>,[<Xn|SP>{,#0}]", &[("Rs", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, X, RefBase", "R(16), R(0), R(5)")]),
    entry(&["STADD", "STADDB", "STADDH", "STADDL", "STADDLB", "STADDLH", "STCLR", "STCLRB", "STCLRH", "STCLRL", "STCLRLB", "STCLRLH", "STEOR", "STEORB", "STEORH", "STEORL", "STEORLB", "STEORLH", "STSET", "STSETB", "STSETH", "STSETL", "STSETLB", "STSETLH", "STSMAX", "STSMAXB", "STSMAXH", "STSMAXL", "STSMAXLB", "STSMAXLH", "STSMIN", "STSMINB", "STSMINH", "STSMINL", "STSMINLB", "STSMINLH", "STUMAX", "STUMAXB", "STUMAXH", "STUMAXL", "STUMAXLB", "STUMAXLH", "STUMIN", "STUMINB", "STUMINH", "STUMINL", "STUMINLB", "STUMINLH"], "<Ws>,[<Xn|SP>]", &[("Rs", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("W, RefBase", "R(16), R(5)")]),
    entry(&["LDP", "STP"], "<Wt1>,<Wt2>,[<Xn|SP>,#<imm>]!", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, RefPre", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["LDP", "STP"], "<Wt1>,<Wt2>,[<Xn|SP>],#<imm>", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, RefBase, Imm", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["LDAXP", "LDXP"], "<Wt1>,<Wt2>,[<Xn|SP>{,#0}]", &[("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, RefBase", "R(0), R(10), R(5)")]),
    entry(&["LDNP", "LDP", "STNP", "STP"], "<Wt1>,<Wt2>,[<Xn|SP>{,#<imm>}]", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, W, RefOffset", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["CBNZ", "CBZ", "LDR"], "<Wt>,<label>", &[("imm19", 19, 5), ("Rt", 5, 0)])
        .encodes(&[("W, Offset", "R(0), Offset(BCOND)")]),
    entry(&["LDR", "STR"], "<Wt>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDRH", "LDRSH", "STRH"], "<Wt>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDRB", "LDRSB", "STRB"], "<Wt>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDRB", "LDRSB", "STRB"], "<Wt>,[<Xn|SP>,(<Wm>|<Xm>),<extend>{<amount>}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 0])")]),
    entry(&["LDR", "STR"], "<Wt>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 2])")]),
    entry(&["LDRH", "LDRSH", "STRH"], "<Wt>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 1])")]),
    entry(&["LDRB", "LDRSB", "STRB"], "<Wt>,[<Xn|SP>,<Xm>{,LSL<amount>}]", &[("Rm", 5, 16), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .forget(),
    entry(&["LDR", "LDRH", "LDRB", "LDRSB", "LDRSH", "LDRSW", "STR", "STRH", "STRB"], "<Wt>,[<Xn|SP>],#<simm>", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefBase, Imm", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDAPR", "LDAPRB", "LDAPRH", "LDAR", "LDARB", "LDARH", "LDAXR", "LDAXRB", "LDAXRH", "LDLAR", "LDLARB", "LDLARH", "LDXR", "LDXRB", "LDXRH", "STLLR", "STLLRB", "STLLRH", "STLR", "STLRB", "STLRH"], "<Wt>,[<Xn|SP>{,#0}]", &[("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefBase", "R(0), R(5)")]),
    entry(&["LDR", "STR"], "<Wt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefOffset", "R(0), R(5), Uscaled(10, 12, 2)")]),
    entry(&["LDRH", "LDRSH", "STRH"], "<Wt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefOffset", "R(0), R(5), Uscaled(10, 12, 1)")]),
    entry(&["LDRB", "LDRSB", "STRB"], "<Wt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefOffset", "R(0), R(5), Ubits(10, 12)")]),
    entry(&["LDAPUR", "LDAPURB", "LDAPURH", "LDAPURSB", "LDAPURSH", "LDTR", "LDTRB", "LDTRH", "LDTRSB", "LDTRSH", "LDUR", "LDURB", "LDURH", "LDURSB", "LDURSH", "STLUR", "STLURB", "STLURH", "STTR", "STTRB", "STTRH", "STUR", "STURB", "STURH"], "<Wt>,[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("W, RefOffset", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["AUTDZA", "AUTDZB", "AUTIZA", "AUTIZB", "PACDZA", "PACDZB", "PACIZA", "PACIZB", "XPACD", "XPACI"], "<Xd>", &[("Rd", 5, 0)])
        .encodes(&[("X", "R(0)")]),
    entry(&["MOV"], "<Xd>,#<imm>", &[("hw", 2, 21), ("imm16", 16, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("X, Imm", "R(0), Special(5, WIDE_IMMEDIATE_X)"),
            (r#"Dot, Lit("inverted"), X, Imm"#, "R(0), Special(5, INVERTED_WIDE_IMMEDIATE_X)"),
        ])
        .names(&["MOV (wide immediate)", "MOV (inverted wide immediate)"]),
    entry(&["MOVK", "MOVN", "MOVZ"], "<Xd>,#<imm>{,LSL#<shift>}", &[("hw", 2, 21), ("imm16", 16, 5), ("Rd", 5, 0)])
        .encodes(&[("X, Imm, End, LitMod(LSL)", "R(0), Ubits(5, 16), Ulist(21, &[0, 16, 32, 48])")]),
    entry(&["BFC"], "<Xd>,#<lsb>,#<width>", &[("immr", 6, 16), ("imms", 6, 10), ("Rd", 5, 0)])
        .encodes(&[("X, Imm, Imm", "R(0), Unegmod(16, 6), BUsum(6), Urange(10, 1, 64)")]),
    entry(&["SXTB", "SXTH", "SXTW"], "<Xd>,<Wn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, W", "R(0), R(5)")]),
    entry(&["SMNEGL", "SMULL", "UMNEGL", "UMULL"], "<Xd>,<Wn>,<Wm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, W, W", "R(0), R(5), R(16)")]),
    entry(&["SMADDL", "SMSUBL", "UMADDL", "UMSUBL"], "<Xd>,<Wn>,<Wm>,<Xa>", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, W, W, X", "R(0), R(5), R(16), R(10)")]),
    entry(&["MOV", "NGC", "NGCS"], "<Xd>,<Xm>", &[("Rm", 5, 16), ("Rd", 5, 0)])
        .encodes(&[("X, X", "R(0), R(16)")])
        .priority(1),
    entry(&["MVN", "NEG", "NEGS"], "<Xd>,<Xm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rd", 5, 0)])
        .encodes(&[("X, X, End, Mod(SHIFTS)", "R(0), R(16), Rotates(22), Ubits(10, 6)")])
        .priority(1),
    entry(&["CLS", "CLZ", "RBIT", "REV", "REV16", "REV32", "REV64"], "<Xd>,<Xn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X", "R(0), R(5)")]),
    entry(&["ANDS"], "<Xd>,<Xn>,#<imm>", &[("N", 1, 22), ("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Imm", "R(0), R(5), Special(10, LOGICAL_IMMEDIATE_X)")]),
    entry(&["BFM", "SBFM", "UBFM"], "<Xd>,<Xn>,#<immr>,#<imms>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Imm, Imm", "R(0), R(5), Ubits(16, 6), BUsum(6), Ubits(10, 6)")]),
    entry(&["BFI", "SBFIZ", "UBFIZ"], "<Xd>,<Xn>,#<lsb>,#<width>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Imm, Imm", "R(0), R(5), Unegmod(16, 6), BUsum(6), Urange(10, 1, 64)")]),
    entry(&["BFXIL", "SBFX", "UBFX"], "<Xd>,<Xn>,#<lsb>,#<width>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Imm, Imm", "R(0), R(5), Ubits(16, 6), BUsum(6), Usumdec(10, 6)")]),
    entry(&["ASR", "LSR"], "<Xd>,<Xn>,#<shift>", &[("immr", 6, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Imm", "R(0), R(5), Ubits(16, 6)")]),
    entry(&["LSL"], "<Xd>,<Xn>,#<shift>", &[("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Imm", "R(0), R(5), Unegmod(16, 6), C, Usub(10, 6, 63)")]),
    entry(&["ADC", "ADCS", "ASR", "ASRV", "LSL", "LSLV", "LSR", "LSRV", "MNEG", "MUL", "ROR", "RORV", "SBC", "SBCS", "SDIV", "SMULH", "UDIV", "UMULH"], "<Xd>,<Xn>,<Xm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, X", "R(0), R(5), R(16)")]),
    entry(&["EXTR"], "<Xd>,<Xn>,<Xm>,#<lsb>", &[("Rm", 5, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, X, Imm", "R(0), R(5), R(16), Ubits(10, 6)")]),
    entry(&["MADD", "MSUB"], "<Xd>,<Xn>,<Xm>,<Xa>", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, X, X", "R(0), R(5), R(16), R(10)")]),
    entry(&["CSEL", "CSINC", "CSINV", "CSNEG"], "<Xd>,<Xn>,<Xm>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, X, Cond", "R(0), R(5), R(16), Cond(12)")]),
    entry(&["ADD", "ADDS", "SUB", "SUBS"], "<Xd>,<Xn>,<Xm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, X, End, Mod(SHIFTS)", "R(0), R(5), R(16), Rotates(22), Ubits(10, 6)")])
        .priority(1),
    entry(&["AND", "ANDS", "BIC", "BICS", "EON", "EOR", "ORN", "ORR"], "<Xd>,<Xn>,<Xm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, X, End, Mod(ROTATES)", "R(0), R(5), R(16), Rotates(22), Ubits(10, 6)")]),
    entry(&["PACGA"], "<Xd>,<Xn>,<Xm|SP>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, XSP", "R(0), R(5), R(16)")]),
    entry(&["CINC", "CINV", "CNEG"], "<Xd>,<Xn>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Cond", "R(0), R(5), C, R(16), CondInv(12)")]),
    entry(&["AUTDA", "AUTDB", "AUTIA", "AUTIB", "PACDA", "PACDB", "PACIA", "PACIB"], "<Xd>,<Xn|SP>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, XSP", "R(0), R(5)")]),
    entry(&["ADDS", "SUBS"], "<Xd>,<Xn|SP>,#<imm>{,<shift>}", &[("sh", 1, 22), ("imm12", 12, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, XSP, Imm, End, LitMod(LSL)", "R(0), R(5), Ubits(10, 12), Ulist(22, &[0, 12])")]),
    entry(&["ADDS", "SUBS"], "<Xd>,<Xn|SP>,<R><m>{,<extend>{#<amount>}}", &[("Rm", 5, 16), ("option", 3, 13), ("imm3", 3, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("X, XSP, W, End, Mod(EXTENDS_W)", "R(0), R(5), R(16), ExtendsX(13), Urange(10, 0, 4)"),
            ("X, XSP, X, End, Mod(EXTENDS_X)", "R(0), R(5), R(16), ExtendsX(13), Urange(10, 0, 4)"),
        ]),
    entry(&["ROR"], "<Xd>,<Xs>,#<shift>", &[("Rm", 5, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, X, Imm", "R(0), R(5), C, R(16), Ubits(10, 6)")]),
    entry(&["CSET", "CSETM"], "<Xd>,<cond>", &[("cond", 4, 12), ("Rd", 5, 0)])
        .encodes(&[("X, Cond", "R(0), CondInv(12)")]),
    entry(&["ADR"], "<Xd>,<label>", &[("immlo", 2, 29), ("immhi", 19, 5), ("Rd", 5, 0)])
        .encodes(&[("X, Offset", "R(0), Offset(ADR)")]),
    entry(&["ADRP"], "<Xd>,<label>", &[("immlo", 2, 29), ("immhi", 19, 5), ("Rd", 5, 0)])
        .encodes(&[("X, Offset", "R(0), Offset(ADRP)")]),
    entry(&["MOV"], "<Xd|SP>,#<imm>", &[("N", 1, 22), ("immr", 6, 16), ("imms", 6, 10), ("Rd", 5, 0)])
        .encodes(&[(r#"Dot, Lit("logical"), XSP, Imm"#, "R(0), Special(10, LOGICAL_IMMEDIATE_X)")]),
    entry(&["AND", "EOR", "ORR"], "<Xd|SP>,<Xn>,#<imm>", &[("N", 1, 22), ("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("XSP, X, Imm", "R(0), R(5), Special(10, LOGICAL_IMMEDIATE_X)")]),
    entry(&["MOV"], "<Xd|SP>,<Xn|SP>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("XSP, XSP", "R(0), R(5)")]),
    entry(&["ADD", "SUB"], "<Xd|SP>,<Xn|SP>,#<imm>{,<shift>}", &[("sh", 1, 22), ("imm12", 12, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("XSP, XSP, Imm, End, LitMod(LSL)", "R(0), R(5), Ubits(10, 12), Ulist(22, &[0, 12])")]),
    entry(&["ADD", "SUB"], "<Xd|SP>,<Xn|SP>,<R><m>{,<extend>{#<amount>}}", &[("Rm", 5, 16), ("option", 3, 13), ("imm3", 3, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("XSP, XSP, W, End, Mod(EXTENDS_W)", "R(0), R(5), R(16), ExtendsX(13), Urange(10, 0, 4)"),
            ("XSP, XSP, X, End, Mod(EXTENDS_X)", "R(0), R(5), R(16), ExtendsX(13), Urange(10, 0, 4)"),
        ]),
    entry(&["BLR", "BLRAAZ", "BLRABZ", "BR", "BRAAZ", "BRABZ"], "<Xn>", &[("Rn", 5, 5)])
        .encodes(&[("X", "R(5)")]),
    entry(&["TST"], "<Xn>,#<imm>", &[("N", 1, 22), ("immr", 6, 16), ("imms", 6, 10), ("Rn", 5, 5)])
        .encodes(&[("X, Imm", "R(5), Special(10, LOGICAL_IMMEDIATE_X)")]),
    entry(&["CCMN", "CCMP"], "<Xn>,#<imm>,#<nzcv>,<cond>", &[("imm5", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("nzcv", 4, 0)])
        .encodes(&[("X, Imm, Imm, Cond", "R(5), Ubits(16, 5), Ubits(0, 4), Cond(12)")]),
    entry(&["RMIF"], "<Xn>,#<shift>,#<mask>", &[("imm6", 6, 15), ("Rn", 5, 5), ("mask", 4, 0)])
        .encodes(&[("X, Imm, Imm", "R(5), Ubits(15, 6), Ubits(0, 4)")]),
    entry(&["CCMN", "CCMP"], "<Xn>,<Xm>,#<nzcv>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("nzcv", 4, 0)])
        .encodes(&[("X, X, Imm, Cond", "R(5), R(16), Ubits(0, 4), Cond(12)")]),
    entry(&["CMN", "CMP"], "<Xn>,<Xm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5)])
        .encodes(&[("X, X, End, Mod(SHIFTS)", "R(5), R(16), Rotates(22), Ubits(10, 6)")])
        .priority(1),
    entry(&["TST"], "<Xn>,<Xm>{,<shift>#<amount>}", &[("shift", 2, 22), ("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5)])
        .encodes(&[("X, X, End, Mod(ROTATES)", "R(5), R(16), Rotates(22), Ubits(10, 6)")]),
    entry(&["BLRAA", "BLRAB", "BRAA", "BRAB"], "<Xn>,<Xm|SP>", &[("Rn", 5, 5), ("Rm", 5, 0)])
        .encodes(&[("X, XSP", "R(5), R(0)")]),
    entry(&["CMN", "CMP"], "<Xn|SP>,#<imm>{,<shift>}", &[("sh", 1, 22), ("imm12", 12, 10), ("Rn", 5, 5)])
        .encodes(&[("XSP, Imm, End, LitMod(LSL)", "R(5), Ubits(10, 12), Ulist(22, &[0, 12])")]),
    entry(&["CMN", "CMP"], "<Xn|SP>,<R><m>{,<extend>{#<amount>}}", &[("Rm", 5, 16), ("option", 3, 13), ("imm3", 3, 10), ("Rn", 5, 5)])
        .encodes(&[
            ("XSP, W, Mod(EXTENDS_W)", "R(5), R(16), ExtendsX(13), Urange(10, 0, 4)"),
            ("XSP, X, End, Mod(EXTENDS_X)", "R(5), R(16), ExtendsX(13), Urange(10, 0, 4)"),
        ]),
    entry(&["CASP", "CASPA", "CASPAL", "CASPL"], "<Xs>,<X(s+1)>,<Xt>,<X(t+1)>,[<Xn|SP>{,#0}]", &[("Rs", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, X, X, RefBase", "REven(16), RNext, REven(0), RNext, R(5)")]),
    entry(&["LDADD", "LDADDA", "LDADDAL", "LDADDL", "LDCLR", "LDCLRA", "LDCLRAL", "LDCLRL", "LDEOR", "LDEORA", "LDEORAL", "LDEORL", "LDSET", "LDSETA", "LDSETAL", "LDSETL", "LDSMAX", "LDSMAXA", "LDSMAXAL", "LDSMAXL", "LDSMIN", "LDSMINA", "LDSMINAL", "LDSMINL", "LDUMAX", "LDUMAXA", "LDUMAXAL", "LDUMAXL", "LDUMIN", "LDUMINA", "LDUMINAL", "LDUMINL", "SWP", "SWPA", "SWPAL", "SWPL"], "<Xs>,<Xt>,[<Xn|SP>]", &[("Rs", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefBase", "R(16), R(0), R(5)")]),
    entry(&["CAS", "CASA", "CASAL", "CASL"], "<Xs>,<Xt>,[<Xn|SP>{,#0}]", &[("Rs", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefBase", "R(16), R(0), R(5)")]),
    entry(&["STADD", "STADDL", "STCLR", "STCLRL", "STEOR", "STEORL", "STSET", "STSETL", "STSMAX", "STSMAXL", "STSMIN", "STSMINL", "STUMAX", "STUMAXL", "STUMIN", "STUMINL"], "<Xs>,[<Xn|SP>]", &[("Rs", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("X, RefBase", "R(16), R(5)")]),
    entry(&["LDP", "STP"], "<Xt1>,<Xt2>,[<Xn|SP>,#<imm>]!", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefPre", "R(0), R(10), R(5), Sscaled(15, 7, 3)")]),
    entry(&["LDPSW"], "<Xt1>,<Xt2>,[<Xn|SP>,#<imm>]!", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefPre", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["LDP", "STP"], "<Xt1>,<Xt2>,[<Xn|SP>],#<imm>", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefBase, Imm", "R(0), R(10), R(5), Sscaled(15, 7, 3)")]),
    entry(&["LDPSW"], "<Xt1>,<Xt2>,[<Xn|SP>],#<imm>", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefBase, Imm", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["LDAXP", "LDXP"], "<Xt1>,<Xt2>,[<Xn|SP>{,#0}]", &[("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefBase", "R(0), R(10), R(5)")]),
    entry(&["LDNP", "LDP", "STNP", "STP"], "<Xt1>,<Xt2>,[<Xn|SP>{,#<imm>}]", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefOffset", "R(0), R(10), R(5), Sscaled(15, 7, 3)")]),
    entry(&["LDPSW"], "<Xt1>,<Xt2>,[<Xn|SP>{,#<imm>}]", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, X, RefOffset", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["CBNZ", "CBZ", "LDR", "LDRSW"], "<Xt>,<label>", &[("imm19", 19, 5), ("Rt", 5, 0)])
        .encodes(&[("X, Offset", "R(0), Offset(BCOND)")]),
    entry(&["LDR", "LDRSB", "LDRSH", "LDRSW", "STR"], "<Xt>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDRSB"], "<Xt>,[<Xn|SP>,(<Wm>|<Xm>),<extend>{<amount>}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 0])")]),
    entry(&["LDRSH"], "<Xt>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 1])")]),
    entry(&["LDRSW"], "<Xt>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 2])")]),
    entry(&["LDR", "STR"], "<Xt>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 3])")]),
    entry(&["LDRSB"], "<Xt>,[<Xn|SP>,<Xm>{,LSL<amount>}]", &[("Rm", 5, 16), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .forget(),
    entry(&["LDR", "LDRSB", "LDRSH", "LDRSW", "STR"], "<Xt>,[<Xn|SP>],#<simm>", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefBase, Imm", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDAPR", "LDAR", "LDAXR", "LDLAR", "LDXR", "STLLR", "STLR"], "<Xt>,[<Xn|SP>{,#0}]", &[("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefBase", "R(0), R(5)")]),
    entry(&["LDR", "STR"], "<Xt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefOffset", "R(0), R(5), Uscaled(10, 12, 3)")]),
    entry(&["LDRSW"], "<Xt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefOffset", "R(0), R(5), Uscaled(10, 12, 2)")]),
    entry(&["LDRSH"], "<Xt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefOffset", "R(0), R(5), Uscaled(10, 12, 1)")]),
    entry(&["LDRSB"], "<Xt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefOffset", "R(0), R(5), Ubits(10, 12)")]),
    entry(&["LDRAA", "LDRAB"], "<Xt>,[<Xn|SP>{,#<simm>}]", &[("S", 1, 22), ("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefOffset", "R(0), R(5), BSscaled(10, 3), Sslice(12, 9, 3), Sslice(22, 1, 12), A")]),
    entry(&["LDAPUR", "LDAPURSB", "LDAPURSH", "LDAPURSW", "LDTR", "LDTRSB", "LDTRSH", "LDTRSW", "LDUR", "LDURSB", "LDURSH", "LDURSW", "STLUR", "STTR", "STUR"], "<Xt>,[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefOffset", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDRAA", "LDRAB"], "<Xt>,[<Xn|SP>{,#<simm>}]!", &[("S", 1, 22), ("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("X, RefPre", "R(0), R(5), BSscaled(10, 3), Sslice(12, 9, 3), Sslice(22, 1, 12), A")]),
    entry(&["B", "BL"], "<label>", &[("imm26", 26, 0)])
        .encodes(&[("Offset", "Offset(B)")]),
    entry(&["RET"], "{<Xn>}", &[("Rn", 5, 5)])
        .encodes(&[
            ("X", "R(5)"),
            ("", "Static(5, 0b11110)"),
        ]),
];
