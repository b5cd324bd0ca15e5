//! Scalar loads and stores of floating-point and vector registers.

use crate::translate::entry::{EntryDef, entry};

pub static ENTRIES: &[EntryDef] = &[
    entry(&["LDR", "STR"], "<Bt>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("B, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Bt>,[<Xn|SP>,(<Wm>|<Xm>),<extend>{<amount>}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("B, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 0])")]),
    entry(&["LDR", "STR"], "<Bt>,[<Xn|SP>,<Xm>{,LSL<amount>}]", &[("Rm", 5, 16), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .forget(),
    entry(&["LDR", "STR"], "<Bt>,[<Xn|SP>],#<simm>", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("B, RefBase, Imm", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Bt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("B, RefOffset", "R(0), R(5), Ubits(10, 12)")]),
    entry(&["LDUR", "STUR"], "<Bt>,[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("B, RefOffset", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDP", "STP"], "<Dt1>,<Dt2>,[<Xn|SP>,#<imm>]!", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, D, RefPre", "R(0), R(10), R(5), Sscaled(15, 7, 3)")]),
    entry(&["LDP", "STP"], "<Dt1>,<Dt2>,[<Xn|SP>],#<imm>", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, D, RefBase, Imm", "R(0), R(10), R(5), Sscaled(15, 7, 3)")]),
    entry(&["LDNP", "LDP", "STNP", "STP"], "<Dt1>,<Dt2>,[<Xn|SP>{,#<imm>}]", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, D, RefOffset", "R(0), R(10), R(5), Sscaled(15, 7, 3)")]),
    entry(&["LDR"], "<Dt>,<label>", &[("imm19", 19, 5), ("Rt", 5, 0)])
        .encodes(&[("D, Offset", "R(0), Offset(BCOND)")]),
    entry(&["LDR", "STR"], "<Dt>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Dt>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 3])")]),
    entry(&["LDR", "STR"], "<Dt>,[<Xn|SP>],#<simm>", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, RefBase, Imm", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Dt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, RefOffset", "R(0), R(5), Uscaled(10, 12, 3)")]),
    entry(&["LDUR", "STUR"], "<Dt>,[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("D, RefOffset", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Ht>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("H, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Ht>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("H, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 1])")]),
    entry(&["LDR", "STR"], "<Ht>,[<Xn|SP>],#<simm>", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("H, RefBase, Imm", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Ht>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("H, RefOffset", "R(0), R(5), Uscaled(10, 12, 1)")]),
    entry(&["LDUR", "STUR"], "<Ht>,[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("H, RefOffset", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDP", "STP"], "<Qt1>,<Qt2>,[<Xn|SP>,#<imm>]!", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, Q, RefPre", "R(0), R(10), R(5), Sscaled(15, 7, 4)")]),
    entry(&["LDP", "STP"], "<Qt1>,<Qt2>,[<Xn|SP>],#<imm>", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, Q, RefBase, Imm", "R(0), R(10), R(5), Sscaled(15, 7, 4)")]),
    entry(&["LDNP", "LDP", "STNP", "STP"], "<Qt1>,<Qt2>,[<Xn|SP>{,#<imm>}]", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, Q, RefOffset", "R(0), R(10), R(5), Sscaled(15, 7, 4)")]),
    entry(&["LDR"], "<Qt>,<label>", &[("imm19", 19, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, Offset", "R(0), Offset(BCOND)")]),
    entry(&["LDR", "STR"], "<Qt>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Qt>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 4])")]),
    entry(&["LDR", "STR"], "<Qt>,[<Xn|SP>],#<simm>", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, RefBase, Imm", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<Qt>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, RefOffset", "R(0), R(5), Uscaled(10, 12, 4)")]),
    entry(&["LDUR", "STUR"], "<Qt>,[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("Q, RefOffset", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDP", "STP"], "<St1>,<St2>,[<Xn|SP>,#<imm>]!", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, S, RefPre", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["LDP", "STP"], "<St1>,<St2>,[<Xn|SP>],#<imm>", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, S, RefBase, Imm", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["LDNP", "LDP", "STNP", "STP"], "<St1>,<St2>,[<Xn|SP>{,#<imm>}]", &[("imm7", 7, 15), ("Rt2", 5, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, S, RefOffset", "R(0), R(10), R(5), Sscaled(15, 7, 2)")]),
    entry(&["LDR"], "<St>,<label>", &[("imm19", 19, 5), ("Rt", 5, 0)])
        .encodes(&[("S, Offset", "R(0), Offset(BCOND)")]),
    entry(&["LDR", "STR"], "<St>,[<Xn|SP>,#<simm>]!", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, RefPre", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<St>,[<Xn|SP>,(<Wm>|<Xm>){,<extend>{<amount>}}]", &[("Rm", 5, 16), ("option", 3, 13), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 2])")]),
    entry(&["LDR", "STR"], "<St>,[<Xn|SP>],#<simm>", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, RefBase, Imm", "R(0), R(5), Sbits(12, 9)")]),
    entry(&["LDR", "STR"], "<St>,[<Xn|SP>{,#<pimm>}]", &[("imm12", 12, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, RefOffset", "R(0), R(5), Uscaled(10, 12, 2)")]),
    entry(&["LDUR", "STUR"], "<St>,[<Xn|SP>{,#<simm>}]", &[("imm9", 9, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("S, RefOffset", "R(0), R(5), Sbits(12, 9)")]),
];
