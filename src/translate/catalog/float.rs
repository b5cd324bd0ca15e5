//! Scalar floating-point instructions.

use crate::translate::entry::{EntryDef, entry};

pub static ENTRIES: &[EntryDef] = &[
    entry(&["FMOV"], "<Dd>,#<imm>", &[("imm8", 8, 13), ("Rd", 5, 0)])
        .encodes(&[("D, Imm", "R(0), Special(13, FLOAT_IMMEDIATE)")]),
    entry(&["FABS", "FMOV", "FNEG", "FRINTA", "FRINTI", "FRINTM", "FRINTN", "FRINTP", "FRINTX", "FRINTZ", "FSQRT"], "<Dd>,<Dn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D", "R(0), R(5)")]),
    entry(&["FADD", "FDIV", "FMAX", "FMAXNM", "FMIN", "FMINNM", "FMUL", "FNMUL", "FSUB"], "<Dd>,<Dn>,<Dm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D, D", "R(0), R(5), R(16)")]),
    entry(&["FMADD", "FMSUB", "FNMADD", "FNMSUB"], "<Dd>,<Dn>,<Dm>,<Da>", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D, D, D", "R(0), R(5), R(16), R(10)")]),
    entry(&["FCSEL"], "<Dd>,<Dn>,<Dm>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D, D, Cond", "R(0), R(5), R(16), Cond(12)")]),
    entry(&["FCVT"], "<Dd>,<Hn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, H", "R(0), R(5)")]),
    entry(&["FCVT"], "<Dd>,<Sn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, S", "R(0), R(5)")]),
    entry(&["SCVTF", "UCVTF"], "<Dd>,<Wn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, W", "R(0), R(5)")]),
    entry(&["SCVTF", "UCVTF"], "<Dd>,<Wn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, W, Imm", "R(0), R(5), BUrange(1, 32), Usub(10, 6, 64)")]),
    entry(&["FMOV", "SCVTF", "UCVTF"], "<Dd>,<Xn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, X", "R(0), R(5)")]),
    entry(&["SCVTF", "UCVTF"], "<Dd>,<Xn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, X, Imm", "R(0), R(5), Usub(10, 6, 64)")]),
    entry(&["FCMP", "FCMPE"], "<Dn>,#0.0", &[("Rm", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("D, LitFloat(0.0)", "R(5)")]),
    entry(&["FCMP", "FCMPE"], "<Dn>,<Dm>", &[("Rm", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("D, D", "R(5), R(16)")]),
    entry(&["FCCMP", "FCCMPE"], "<Dn>,<Dm>,#<nzcv>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("nzcv", 4, 0)])
        .encodes(&[("D, D, Imm, Cond", "R(5), R(16), Ubits(0, 4), Cond(12)")]),
    entry(&["FMOV"], "<Hd>,#<imm>", &[("imm8", 8, 13), ("Rd", 5, 0)])
        .encodes(&[("H, Imm", "R(0), Special(13, FLOAT_IMMEDIATE)")]),
    entry(&["FCVT"], "<Hd>,<Dn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, D", "R(0), R(5)")]),
    entry(&["FABS", "FMOV", "FNEG", "FRINTA", "FRINTI", "FRINTM", "FRINTN", "FRINTP", "FRINTX", "FRINTZ", "FSQRT"], "<Hd>,<Hn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H", "R(0), R(5)")]),
    entry(&["FADD", "FDIV", "FMAX", "FMAXNM", "FMIN", "FMINNM", "FMUL", "FNMUL", "FSUB"], "<Hd>,<Hn>,<Hm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H, H", "R(0), R(5), R(16)")]),
    entry(&["FMADD", "FMSUB", "FNMADD", "FNMSUB"], "<Hd>,<Hn>,<Hm>,<Ha>", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H, H, H", "R(0), R(5), R(16), R(10)")]),
    entry(&["FCSEL"], "<Hd>,<Hn>,<Hm>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H, H, Cond", "R(0), R(5), R(16), Cond(12)")]),
    entry(&["FCVT"], "<Hd>,<Sn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, S", "R(0), R(5)")]),
    entry(&["FMOV", "SCVTF", "UCVTF"], "<Hd>,<Wn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, W", "R(0), R(5)")]),
    entry(&["SCVTF", "UCVTF"], "<Hd>,<Wn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, W, Imm", "R(0), R(5), BUrange(1, 32), Usub(10, 6, 64)")]),
    entry(&["FMOV", "SCVTF", "UCVTF"], "<Hd>,<Xn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, X", "R(0), R(5)")]),
    entry(&["SCVTF", "UCVTF"], "<Hd>,<Xn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, X, Imm", "R(0), R(5), Usub(10, 6, 64)")]),
    entry(&["FCMP", "FCMPE"], "<Hn>,#0.0", &[("Rm", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("H, LitFloat(0.0)", "R(5)")]),
    entry(&["FCMP", "FCMPE"], "<Hn>,<Hm>", &[("Rm", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("H, H", "R(5), R(16)")]),
    entry(&["FCCMP", "FCCMPE"], "<Hn>,<Hm>,#<nzcv>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("nzcv", 4, 0)])
        .encodes(&[("H, H, Imm, Cond", "R(5), R(16), Ubits(0, 4), Cond(12)")]),
    entry(&["FMOV"], "<Sd>,#<imm>", &[("imm8", 8, 13), ("Rd", 5, 0)])
        .encodes(&[("S, Imm", "R(0), Special(13, FLOAT_IMMEDIATE)")]),
    entry(&["FCVT"], "<Sd>,<Dn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, D", "R(0), R(5)")]),
    entry(&["FCVT"], "<Sd>,<Hn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, H", "R(0), R(5)")]),
    entry(&["FABS", "FMOV", "FNEG", "FRINTA", "FRINTI", "FRINTM", "FRINTN", "FRINTP", "FRINTX", "FRINTZ", "FSQRT"], "<Sd>,<Sn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, S", "R(0), R(5)")]),
    entry(&["FADD", "FDIV", "FMAX", "FMAXNM", "FMIN", "FMINNM", "FMUL", "FNMUL", "FSUB"], "<Sd>,<Sn>,<Sm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, S, S", "R(0), R(5), R(16)")]),
    entry(&["FMADD", "FMSUB", "FNMADD", "FNMSUB"], "<Sd>,<Sn>,<Sm>,<Sa>", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, S, S, S", "R(0), R(5), R(16), R(10)")]),
    entry(&["FCSEL"], "<Sd>,<Sn>,<Sm>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, S, S, Cond", "R(0), R(5), R(16), Cond(12)")]),
    entry(&["FMOV", "SCVTF", "UCVTF"], "<Sd>,<Wn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, W", "R(0), R(5)")]),
    entry(&["SCVTF", "UCVTF"], "<Sd>,<Wn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, W, Imm", "R(0), R(5), BUrange(1, 32), Usub(10, 6, 64)")]),
    entry(&["SCVTF", "UCVTF"], "<Sd>,<Xn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, X", "R(0), R(5)")]),
    entry(&["SCVTF", "UCVTF"], "<Sd>,<Xn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, X, Imm", "R(0), R(5), Usub(10, 6, 64)")]),
    entry(&["FCMP", "FCMPE"], "<Sn>,#0.0", &[("Rm", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("S, LitFloat(0.0)", "R(5)")]),
    entry(&["FCMP", "FCMPE"], "<Sn>,<Sm>", &[("Rm", 5, 16), ("Rn", 5, 5)])
        .encodes(&[("S, S", "R(5), R(16)")]),
    entry(&["FCCMP", "FCCMPE"], "<Sn>,<Sm>,#<nzcv>,<cond>", &[("Rm", 5, 16), ("cond", 4, 12), ("Rn", 5, 5), ("nzcv", 4, 0)])
        .encodes(&[("S, S, Imm, Cond", "R(5), R(16), Ubits(0, 4), Cond(12)")]),
    entry(&["FMOV"], "<Vd>.D[1],<Xn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VElementStatic(QWORD, 1), X", "R(0), R(5)")]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FJCVTZS"], "<Wd>,<Dn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, D", "R(0), R(5)")]),
    entry(&["FCVTZS", "FCVTZU"], "<Wd>,<Dn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, D, Imm", "R(0), R(5), BUrange(1, 32), Usub(10, 6, 64)")]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FMOV"], "<Wd>,<Hn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, H", "R(0), R(5)")]),
    entry(&["FCVTZS", "FCVTZU"], "<Wd>,<Hn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, H, Imm", "R(0), R(5), BUrange(1, 32), Usub(10, 6, 64)")]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FMOV"], "<Wd>,<Sn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, S", "R(0), R(5)")]),
    entry(&["FCVTZS", "FCVTZU"], "<Wd>,<Sn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, S, Imm", "R(0), R(5), BUrange(1, 32), Usub(10, 6, 64)")]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FMOV"], "<Xd>,<Dn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, D", "R(0), R(5)")]),
    entry(&["FCVTZS", "FCVTZU"], "<Xd>,<Dn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, D, Imm", "R(0), R(5), Usub(10, 6, 64)")]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FMOV"], "<Xd>,<Hn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, H", "R(0), R(5)")]),
    entry(&["FCVTZS", "FCVTZU"], "<Xd>,<Hn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, H, Imm", "R(0), R(5), Usub(10, 6, 64)")]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU"], "<Xd>,<Sn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, S", "R(0), R(5)")]),
    entry(&["FCVTZS", "FCVTZU"], "<Xd>,<Sn>,#<fbits>", &[("scale", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, S, Imm", "R(0), R(5), Usub(10, 6, 64)")]),
    entry(&["FMOV"], "<Xd>,<Vn>.D[1]", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, VElementStatic(QWORD, 1)", "R(0), R(5)")]),
];
