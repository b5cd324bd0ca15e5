//! Advanced SIMD vector instructions.

use crate::translate::entry::{EntryDef, entry};

pub static ENTRIES: &[EntryDef] = &[
    entry(&["MOVI"], "<Dd>,#<imm>", &[("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[("D, Imm", "R(0), Special(5, STRETCHED_IMMEDIATE)")]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FRECPE", "FRECPX", "FRSQRTE", "SCVTF", "UCVTF"], "<Hd>,<Hn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H", "R(0), R(5)")]),
    entry(&["FCMEQ", "FCMGE", "FCMGT", "FCMLE", "FCMLT"], "<Hd>,<Hn>,#0.0", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H, LitFloat(0.0)", "R(0), R(5)")]),
    entry(&["FABD", "FACGE", "FACGT", "FCMEQ", "FCMGE", "FCMGT", "FMULX", "FRECPS", "FRSQRTS"], "<Hd>,<Hn>,<Hm>", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H, H", "R(0), R(5), R(16)")]),
    entry(&["FMLA", "FMLS", "FMUL", "FMULX"], "<Hd>,<Hn>,<Vm>.H[<index>]", &[("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, H, VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20])")]),
    entry(&["SHA512H", "SHA512H2"], "<Qd>,<Qn>,<Vm>.2D", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("Q, Q, VStatic(QWORD, 2)", "R(0), R(5), R(16)")]),
    entry(&["SHA256H", "SHA256H2"], "<Qd>,<Qn>,<Vm>.4S", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("Q, Q, VStatic(DWORD, 4)", "R(0), R(5), R(16)")]),
    entry(&["SHA1C", "SHA1M", "SHA1P"], "<Qd>,<Sn>,<Vm>.4S", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("Q, S, VStatic(DWORD, 4)", "R(0), R(5), R(16)")]),
    entry(&["SHA1H"], "<Sd>,<Sn>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, S", "R(0), R(5)")]),
    entry(&["ABS", "NEG"], "<V><d>,<V><n>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D", "R(0), R(5), Static(22, 0b11)")]),
    entry(&["SQABS", "SQNEG", "SUQADD", "USQADD"], "<V><d>,<V><n>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("B, B", "R(0), R(5), Static(22, 0b00)"),
            ("H, H", "R(0), R(5), Static(22, 0b01)"),
            ("S, S", "R(0), R(5), Static(22, 0b10)"),
            ("D, D", "R(0), R(5), Static(22, 0b11)"),
        ]),
    entry(&["FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FRECPE", "FRECPX", "FRSQRTE", "SCVTF", "UCVTF"], "<V><d>,<V><n>", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("S, S", "R(0), R(5), Static(22, 0b0)"),
            ("D, D", "R(0), R(5), Static(22, 0b1)"),
        ]),
    entry(&["CMEQ", "CMGE", "CMGT", "CMLE", "CMLT"], "<V><d>,<V><n>,#0", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D, LitInt(0)", "R(0), R(5), Static(22, 0b11)")]),
    entry(&["FCMEQ", "FCMGE", "FCMGT", "FCMLE", "FCMLT"], "<V><d>,<V><n>,#0.0", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("S, S, LitFloat(0.0)", "R(0), R(5), Static(22, 0b0)"),
            ("D, D, LitFloat(0.0)", "R(0), R(5), Static(22, 0b1)"),
        ]),
    entry(&["FCVTZS", "FCVTZU", "SCVTF", "UCVTF"], "<V><d>,<V><n>,#<fbits>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("H, H, Imm", "R(0), R(5), BUrange(1, 16), Usub(16, 5, 32)"),
            ("S, S, Imm", "R(0), R(5), BUrange(1, 32), Usub(16, 6, 64)"),
            ("D, D, Imm", "R(0), R(5), BUrange(1, 64), Usub(16, 7, 128)"),
        ]),
    entry(&["SHL", "SLI"], "<V><d>,<V><n>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D, Imm", "R(0), R(5), Ubits(16, 6), Static(22, 0b1)")]),
    entry(&["SQSHL", "SQSHLU", "UQSHL"], "<V><d>,<V><n>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("B, B, Imm", "R(0), R(5), Ubits(16, 3), Static(19, 0b1)"),
            ("H, H, Imm", "R(0), R(5), Ubits(16, 4), Static(20, 0b1)"),
            ("S, S, Imm", "R(0), R(5), Ubits(16, 5), Static(21, 0b1)"),
            ("D, D, Imm", "R(0), R(5), Ubits(16, 6), Static(22, 0b1)"),
        ]),
    entry(&["SRI", "SRSHR", "SRSRA", "SSHR", "SSRA", "URSHR", "URSRA", "USHR", "USRA"], "<V><d>,<V><n>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D, Imm", "R(0), R(5), BUrange(1, 64), Usub(16, 7, 128)")]),
    entry(&["ADD", "CMEQ", "CMGE", "CMGT", "CMHI", "CMHS", "CMTST", "SRSHL", "SSHL", "SUB", "URSHL", "USHL"], "<V><d>,<V><n>,<V><m>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, D, D", "R(0), R(5), R(16), Static(22, 0b11)")]),
    entry(&["SQADD", "SQRSHL", "SQSHL", "SQSUB", "UQADD", "UQRSHL", "UQSHL", "UQSUB"], "<V><d>,<V><n>,<V><m>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("B, B, B", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("H, H, H", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("S, S, S", "R(0), R(5), R(16), Static(22, 0b10)"),
            ("D, D, D", "R(0), R(5), R(16), Static(22, 0b11)"),
        ]),
    entry(&["SQDMULH", "SQRDMLAH", "SQRDMLSH", "SQRDMULH"], "<V><d>,<V><n>,<V><m>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("H, H, H", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("S, S, S", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["FABD", "FACGE", "FACGT", "FCMEQ", "FCMGE", "FCMGT", "FMULX", "FRECPS", "FRSQRTS"], "<V><d>,<V><n>,<V><m>", &[("sz", 1, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("S, S, S", "R(0), R(5), R(16), Static(22, 0b0)"),
            ("D, D, D", "R(0), R(5), R(16), Static(22, 0b1)"),
        ]),
    entry(&["SQDMULH", "SQRDMLAH", "SQRDMLSH", "SQRDMULH"], "<V><d>,<V><n>,<Vm>.<Ts>[<index>]", &[("size", 2, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("H, H, VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Static(22, 0b01)"),
            ("S, S, VElement(DWORD)", "R(0), R(5), R(16), Ufields(&[11, 21]), Static(22, 0b10)"),
        ]),
    entry(&["FMLA", "FMLS", "FMUL", "FMULX"], "<V><d>,<V><n>,<Vm>.<Ts>[<index>]", &[("sz", 1, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("S, S, VElement(DWORD)", "R(0), R(5), R(16), Ufields(&[11, 21]), Static(22, 0b0)"),
            ("D, D, VElement(QWORD)", "R(0), R(5), R(16), Ufields(&[11]), Static(22, 0b1)"),
        ]),
    entry(&["FMAXNMV", "FMAXV", "FMINNMV", "FMINV"], "<V><d>,<Vn>.<T>", &[("Q", 1, 30), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, V(WORD)", "R(0), R(5), Rwidth(30)")]),
    entry(&["ADDV", "SMAXV", "SMINV", "UMAXV", "UMINV"], "<V><d>,<Vn>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("B, V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("H, V(WORD)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
            ("S, VStatic(DWORD, 4)", "R(0), R(5), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["SADDLV", "UADDLV"], "<V><d>,<Vn>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("H, V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("S, V(WORD)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
            ("D, VStatic(DWORD, 4)", "R(0), R(5), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["FMAXNMV", "FMAXV", "FMINNMV", "FMINV"], "<V><d>,<Vn>.<T>", &[("Q", 1, 30), ("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, VStatic(DWORD, 4)", "R(0), R(5), Rwidth(30), Static(22, 0b0)")]),
    entry(&["FADDP", "FMAXNMP", "FMAXP", "FMINNMP", "FMINP"], "<V><d>,<Vn>.<T>", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("H, VStatic(WORD, 2)", "R(0), R(5)")]),
    entry(&["ADDP"], "<V><d>,<Vn>.<T>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("D, VStatic(QWORD, 2)", "R(0), R(5), Static(22, 0b11)")]),
    entry(&["FADDP", "FMAXNMP", "FMAXP", "FMINNMP", "FMINP"], "<V><d>,<Vn>.<T>", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("S, VStatic(DWORD, 2)", "R(0), R(5), Static(22, 0b0)"),
            ("D, VStatic(QWORD, 2)", "R(0), R(5), Static(22, 0b1)"),
        ]),
    entry(&["DUP", "MOV"], "<V><d>,<Vn>.<T>[<index>]", &[("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("B, VElement(BYTE)", "R(0), R(5), Ubits(17, 4), Static(16, 0b00001)"),
            ("H, VElement(WORD)", "R(0), R(5), Ubits(18, 3), Static(16, 0b00010)"),
            ("S, VElement(DWORD)", "R(0), R(5), Ubits(19, 2), Static(16, 0b00100)"),
            ("D, VElement(QWORD)", "R(0), R(5), Ubits(20, 1), Static(16, 0b01000)"),
        ]),
    entry(&["SQDMLAL", "SQDMLSL", "SQDMULL"], "<Va><d>,<Vb><n>,<Vb><m>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("S, H, H", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("D, S, S", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["SQDMLAL", "SQDMLSL", "SQDMULL"], "<Va><d>,<Vb><n>,<Vm>.<Ts>[<index>]", &[("size", 2, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("S, H, VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Static(22, 0b01)"),
            ("D, S, VElement(DWORD)", "R(0), R(5), R(16), Ufields(&[11, 21]), Static(22, 0b10)"),
        ]),
    entry(&["SQXTN", "SQXTUN", "UQXTN"], "<Vb><d>,<Va><n>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("B, H", "R(0), R(5), Static(22, 0b00)"),
            ("H, S", "R(0), R(5), Static(22, 0b01)"),
            ("S, D", "R(0), R(5), Static(22, 0b10)"),
        ]),
    entry(&["FCVTXN"], "<Vb><d>,<Va><n>", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("S, D", "R(0), R(5), Static(22, 0b1)")]),
    entry(&["SQRSHRN", "SQRSHRUN", "SQSHRN", "SQSHRUN", "UQRSHRN", "UQSHRN"], "<Vb><d>,<Va><n>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("B, H, Imm", "R(0), R(5), BUrange(1, 8), Usub(16, 4, 16)"),
            ("H, S, Imm", "R(0), R(5), BUrange(1, 16), Usub(16, 5, 32)"),
            ("S, D, Imm", "R(0), R(5), BUrange(1, 32), Usub(16, 6, 64)"),
        ]),
    entry(&["AESD", "AESE", "AESIMC", "AESMC"], "<Vd>.16B,<Vn>.16B", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(BYTE, 16), VStatic(BYTE, 16)", "R(0), R(5)")]),
    entry(&["BCAX", "EOR3"], "<Vd>.16B,<Vn>.16B,<Vm>.16B,<Va>.16B", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(BYTE, 16), VStatic(BYTE, 16), VStatic(BYTE, 16), VStatic(BYTE, 16)", "R(0), R(5), R(16), R(10)")]),
    entry(&["FMOV"], "<Vd>.2D,#<imm>", &[("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(QWORD, 2), Imm", "R(0), Special(5, SPLIT_FLOAT_IMMEDIATE)")]),
    entry(&["MOVI"], "<Vd>.2D,#<imm>", &[("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(QWORD, 2), Imm", "R(0), Special(5, STRETCHED_IMMEDIATE)")]),
    entry(&["SHA512SU0"], "<Vd>.2D,<Vn>.2D", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5)")]),
    entry(&["RAX1", "SHA512SU1"], "<Vd>.2D,<Vn>.2D,<Vm>.2D", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), R(16)")]),
    entry(&["XAR"], "<Vd>.2D,<Vn>.2D,<Vm>.2D,#<imm6>", &[("Rm", 5, 16), ("imm6", 6, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(QWORD, 2), Imm", "R(0), R(5), R(16), Ubits(10, 6)")]),
    entry(&["SHA1SU1", "SHA256SU0", "SM4E"], "<Vd>.4S,<Vn>.4S", &[("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(DWORD, 4), VStatic(DWORD, 4)", "R(0), R(5)")]),
    entry(&["SHA1SU0", "SHA256SU1", "SM3PARTW1", "SM3PARTW2", "SM4EKEY"], "<Vd>.4S,<Vn>.4S,<Vm>.4S", &[("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(DWORD, 4), VStatic(DWORD, 4), VStatic(DWORD, 4)", "R(0), R(5), R(16)")]),
    entry(&["SM3SS1"], "<Vd>.4S,<Vn>.4S,<Vm>.4S,<Va>.4S", &[("Rm", 5, 16), ("Ra", 5, 10), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(DWORD, 4), VStatic(DWORD, 4), VStatic(DWORD, 4), VStatic(DWORD, 4)", "R(0), R(5), R(16), R(10)")]),
    entry(&["SM3TT1A", "SM3TT1B", "SM3TT2A", "SM3TT2B"], "<Vd>.4S,<Vn>.4S,<Vm>.S[<imm2>]", &[("Rm", 5, 16), ("imm2", 2, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(DWORD, 4), VStatic(DWORD, 4), VElement(DWORD)", "R(0), R(5), R(16), Ubits(12, 2)")]),
    entry(&["MOVI", "MVNI"], "<Vd>.<T>,#<imm8>,MSL#<amount>", &[("Q", 1, 30), ("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("cmode", 4, 12), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[("V(DWORD), Imm, LitMod(MSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(12, &[8, 16]), Rwidth(30)")]),
    entry(&["MOVI"], "<Vd>.<T>,#<imm8>{,LSL#0}", &[("Q", 1, 30), ("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, BUbits(0), A, Rwidth(30)")]),
    entry(&["MVNI"], "<Vd>.<T>,#<imm8>{,LSL#<amount>}", &[("Q", 1, 30), ("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("cmode", 4, 12), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8]), Rwidth(30)"),
            ("V(DWORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8, 16, 24]), Rwidth(30)"),
        ])
        .bits(&[
            "0x10111100000xxx10x001xxxxxxxxxx",
            "0x10111100000xxx0xx001xxxxxxxxxx",
        ]),
    entry(&["MOVI"], "<Vd>.<T>,#<imm8>{,LSL#<amount>}", &[("Q", 1, 30), ("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("cmode", 4, 12), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8]), Rwidth(30)"),
            ("V(DWORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8, 16, 24]), Rwidth(30)"),
        ])
        .bits(&[
            "0x00111100000xxx10x001xxxxxxxxxx",
            "0x00111100000xxx0xx001xxxxxxxxxx",
        ]),
    entry(&["ORR"], "<Vd>.<T>,#<imm8>{,LSL#<amount>}", &[("Q", 1, 30), ("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8]), Rwidth(30)"),
            ("V(DWORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8, 16, 24]), Rwidth(30)"),
        ])
        .bits(&[
            "0x00111100000xxx10x101xxxxxxxxxx",
            "0x00111100000xxx0xx101xxxxxxxxxx",
        ]),
    entry(&["BIC"], "<Vd>.<T>,#<imm8>{,LSL#<amount>}", &[("Q", 1, 30), ("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8]), Rwidth(30)"),
            ("V(DWORD), Imm, End, LitMod(LSL)", "R(0), BUbits(8), Uslice(5, 5, 0), Uslice(16, 3, 5), A, Ulist(13, &[0, 8, 16, 24]), Rwidth(30)"),
        ])
        .bits(&[
            "0x10111100000xxx10x101xxxxxxxxxx",
            "0x10111100000xxx0xx101xxxxxxxxxx",
        ]),
    entry(&["FMOV"], "<Vd>.<T>,#<imm>", &[("Q", 1, 30), ("a", 1, 18), ("b", 1, 17), ("c", 1, 16), ("d", 1, 9), ("e", 1, 8), ("f", 1, 7), ("g", 1, 6), ("h", 1, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), Imm", "R(0), Special(5, SPLIT_FLOAT_IMMEDIATE), Rwidth(30)"),
            ("V(DWORD), Imm", "R(0), Special(5, SPLIT_FLOAT_IMMEDIATE), Rwidth(30)"),
        ])
        .bits(&[
            "0x00111100000xxx111111xxxxxxxxxx",
            "0x00111100000xxx111101xxxxxxxxxx",
        ]),
    entry(&["DUP"], "<Vd>.<T>,<R><n>", &[("Q", 1, 30), ("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), W", "R(0), Rwidth(30), R(5), Static(16, 0b00001)"),
            ("V(WORD), W", "R(0), Rwidth(30), R(5), Static(16, 0b00010)"),
            ("V(DWORD), W", "R(0), Rwidth(30), R(5), Static(16, 0b00100)"),
            ("VStatic(QWORD, 2), X", "R(0), Rwidth(30), R(5), Static(16, 0b01000)"),
        ]),
    entry(&["MOV"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), V(BYTE)", "R(0), R(5), C, R(16), Rwidth(30)")]),
    entry(&["FABS", "FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FNEG", "FRECPE", "FRINTA", "FRINTI", "FRINTM", "FRINTN", "FRINTP", "FRINTX", "FRINTZ", "FRSQRTE", "FSQRT", "SCVTF", "UCVTF"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(WORD), V(WORD)", "R(0), R(5), Rwidth(30)")]),
    entry(&["MVN", "NOT", "RBIT"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), V(BYTE)", "R(0), R(5), Rwidth(30)")]),
    entry(&["ABS", "NEG", "SQABS", "SQNEG", "SUQADD", "USQADD"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("V(WORD), V(WORD)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD)", "R(0), R(5), Rwidth(30), Static(22, 0b10)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), Rwidth(30), Static(22, 0b11)"),
        ]),
    entry(&["CLS", "CLZ"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("V(WORD), V(WORD)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD)", "R(0), R(5), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["CNT", "REV16"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)")]),
    entry(&["REV32"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("V(WORD), V(WORD)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
        ]),
    entry(&["REV64"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("V(WORD), V(WORD)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD)", "R(0), R(5), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["FABS", "FCVTAS", "FCVTAU", "FCVTMS", "FCVTMU", "FCVTNS", "FCVTNU", "FCVTPS", "FCVTPU", "FCVTZS", "FCVTZU", "FNEG", "FRECPE", "FRINTA", "FRINTI", "FRINTM", "FRINTN", "FRINTP", "FRINTX", "FRINTZ", "FRSQRTE", "FSQRT", "SCVTF", "UCVTF"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(DWORD), V(DWORD)", "R(0), R(5), Rwidth(30), Static(22, 0b0)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), Rwidth(30), Static(22, 0b1)"),
        ]),
    entry(&["URECPE", "URSQRTE"], "<Vd>.<T>,<Vn>.<T>", &[("Q", 1, 30), ("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(DWORD), V(DWORD)", "R(0), R(5), Rwidth(30), Static(22, 0b0)")]),
    entry(&["CMEQ", "CMGE", "CMGT", "CMLE", "CMLT"], "<Vd>.<T>,<Vn>.<T>,#0", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE), LitInt(0)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("V(WORD), V(WORD), LitInt(0)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD), LitInt(0)", "R(0), R(5), Rwidth(30), Static(22, 0b10)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), LitInt(0)", "R(0), R(5), Rwidth(30), Static(22, 0b11)"),
        ]),
    entry(&["FCMEQ", "FCMGE", "FCMGT", "FCMLE", "FCMLT"], "<Vd>.<T>,<Vn>.<T>,#0.0", &[("Q", 1, 30), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(WORD), V(WORD), LitFloat(0.0)", "R(0), R(5), Rwidth(30)")]),
    entry(&["FCMEQ", "FCMGE", "FCMGT", "FCMLE", "FCMLT"], "<Vd>.<T>,<Vn>.<T>,#0.0", &[("Q", 1, 30), ("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(DWORD), V(DWORD), LitFloat(0.0)", "R(0), R(5), Rwidth(30), Static(22, 0b0)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), LitFloat(0.0)", "R(0), R(5), Rwidth(30), Static(22, 0b1)"),
        ]),
    entry(&["FCVTZS", "FCVTZU", "SCVTF", "UCVTF"], "<Vd>.<T>,<Vn>.<T>,#<fbits>", &[("Q", 1, 30), ("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), V(WORD), Imm", "R(0), R(5), Usub(16, 4, 16), Rwidth(30), Static(19, 0b0010)"),
            ("V(DWORD), V(DWORD), Imm", "R(0), R(5), Usub(16, 5, 32), Rwidth(30), Static(19, 0b0100)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), Imm", "R(0), R(5), Usub(16, 6, 64), Rwidth(30), Static(19, 0b1000)"),
        ]),
    entry(&["SHL", "SLI", "SQSHL", "SQSHLU", "UQSHL"], "<Vd>.<T>,<Vn>.<T>,#<shift>", &[("Q", 1, 30), ("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE), Imm", "R(0), R(5), Ubits(16, 3), Rwidth(30), Static(19, 0b0001)"),
            ("V(WORD), V(WORD), Imm", "R(0), R(5), Ubits(16, 4), Rwidth(30), Static(19, 0b0010)"),
            ("V(DWORD), V(DWORD), Imm", "R(0), R(5), Ubits(16, 5), Rwidth(30), Static(19, 0b0100)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), Imm", "R(0), R(5), Ubits(16, 6), Rwidth(30), Static(19, 0b1000)"),
        ]),
    entry(&["SRI", "SRSHR", "SRSRA", "SSHR", "SSRA", "URSHR", "URSRA", "USHR", "USRA"], "<Vd>.<T>,<Vn>.<T>,#<shift>", &[("Q", 1, 30), ("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE), Imm", "R(0), R(5), Usub(16, 3, 8), Rwidth(30), Static(19, 0b0001)"),
            ("V(WORD), V(WORD), Imm", "R(0), R(5), Usub(16, 4, 16), Rwidth(30), Static(19, 0b0010)"),
            ("V(DWORD), V(DWORD), Imm", "R(0), R(5), Usub(16, 5, 32), Rwidth(30), Static(19, 0b0100)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), Imm", "R(0), R(5), Usub(16, 6, 64), Rwidth(30), Static(19, 0b1000)"),
        ]),
    entry(&["AND", "BIC", "BIF", "BIT", "BSL", "EOR", "ORN", "ORR"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), V(BYTE), V(BYTE)", "R(0), R(5), R(16), Rwidth(30)")]),
    entry(&["FABD", "FACGE", "FACGT", "FADD", "FADDP", "FCMEQ", "FCMGE", "FCMGT", "FDIV", "FMAX", "FMAXNM", "FMAXNMP", "FMAXP", "FMIN", "FMINNM", "FMINNMP", "FMINP", "FMLA", "FMLS", "FMUL", "FMULX", "FRECPS", "FRSQRTS", "FSUB"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(WORD), V(WORD), V(WORD)", "R(0), R(5), R(16), Rwidth(30)")]),
    entry(&["ADD", "ADDP", "CMEQ", "CMGE", "CMGT", "CMHI", "CMHS", "CMTST", "SQADD", "SQRSHL", "SQSHL", "SQSUB", "SRSHL", "SSHL", "SUB", "TRN1", "TRN2", "UQADD", "UQRSHL", "UQSHL", "UQSUB", "URSHL", "USHL", "UZP1", "UZP2", "ZIP1", "ZIP2"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE), V(BYTE)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b00)"),
            ("V(WORD), V(WORD), V(WORD)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD), V(DWORD)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b10)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b11)"),
        ]),
    entry(&["MLA", "MLS", "MUL", "SABA", "SABD", "SHADD", "SHSUB", "SMAX", "SMAXP", "SMIN", "SMINP", "SRHADD", "UABA", "UABD", "UHADD", "UHSUB", "UMAX", "UMAXP", "UMIN", "UMINP", "URHADD"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), V(BYTE), V(BYTE)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b00)"),
            ("V(WORD), V(WORD), V(WORD)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD), V(DWORD)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["SQDMULH", "SQRDMLAH", "SQRDMLSH", "SQRDMULH"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), V(WORD), V(WORD)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD), V(DWORD)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["PMUL"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>", &[("Q", 1, 30), ("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), V(BYTE), V(BYTE)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b00)")]),
    entry(&["FABD", "FACGE", "FACGT", "FADD", "FADDP", "FCMEQ", "FCMGE", "FCMGT", "FDIV", "FMAX", "FMAXNM", "FMAXNMP", "FMAXP", "FMIN", "FMINNM", "FMINNMP", "FMINP", "FMLA", "FMLS", "FMUL", "FMULX", "FRECPS", "FRSQRTS", "FSUB"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>", &[("Q", 1, 30), ("sz", 1, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(DWORD), V(DWORD), V(DWORD)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b0)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), R(16), Rwidth(30), Static(22, 0b1)"),
        ]),
    entry(&["EXT"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>,#<index>", &[("Q", 1, 30), ("Rm", 5, 16), ("imm4", 4, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(BYTE, 8), VStatic(BYTE, 8), VStatic(BYTE, 8), Imm", "R(0), R(5), R(16), Ubits(11, 3), Static(30, 0b0)"),
            ("VStatic(BYTE, 16), VStatic(BYTE, 16), VStatic(BYTE, 16), Imm", "R(0), R(5), R(16), Ubits(11, 4), Static(30, 0b1)"),
        ]),
    entry(&["FCADD"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>,#<rotate>", &[("Q", 1, 30), ("size", 2, 22), ("Rm", 5, 16), ("rot", 1, 12), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), V(WORD), V(WORD), Imm", "R(0), R(5), R(16), Ulist(12, &[90, 270]), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD), V(DWORD), Imm", "R(0), R(5), R(16), Ulist(12, &[90, 270]), Rwidth(30), Static(22, 0b10)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(QWORD, 2), Imm", "R(0), R(5), R(16), Ulist(12, &[90, 270]), Rwidth(30), Static(22, 0b11)"),
        ]),
    entry(&["FCMLA"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<T>,#<rotate>", &[("Q", 1, 30), ("size", 2, 22), ("Rm", 5, 16), ("rot", 2, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), V(WORD), V(WORD), Imm", "R(0), R(5), R(16), Ulist(11, &[0, 90, 180, 270]), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD), V(DWORD), Imm", "R(0), R(5), R(16), Ulist(11, &[0, 90, 180, 270]), Rwidth(30), Static(22, 0b10)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(QWORD, 2), Imm", "R(0), R(5), R(16), Ulist(11, &[0, 90, 180, 270]), Rwidth(30), Static(22, 0b11)"),
        ]),
    entry(&["MLA", "MLS", "MUL", "SQDMULH", "SQRDMLAH", "SQRDMLSH", "SQRDMULH"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<Ts>[<index>]", &[("Q", 1, 30), ("size", 2, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), V(WORD), VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Rwidth(30), Static(22, 0b01)"),
            ("V(DWORD), V(DWORD), VElement(DWORD)", "R(0), R(5), R(16), Ufields(&[11, 21]), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["FMLA", "FMLS", "FMUL", "FMULX"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<Ts>[<index>]", &[("Q", 1, 30), ("sz", 1, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(DWORD), V(DWORD), VElement(DWORD)", "R(0), R(5), R(16), Ufields(&[11, 21]), Rwidth(30), Static(22, 0b0)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), VElement(QWORD)", "R(0), R(5), R(16), Ufields(&[11]), Rwidth(30), Static(22, 0b1)"),
        ]),
    entry(&["FCMLA"], "<Vd>.<T>,<Vn>.<T>,<Vm>.<Ts>[<index>],#<rotate>", &[("Q", 1, 30), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("rot", 2, 13), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 4), VStatic(WORD, 4), VElement(WORD), Imm", "R(0), R(5), R(16), Ufields(&[21]), Ulist(13, &[0, 90, 180, 270]), Static(30, 0b0)"),
            ("VStatic(WORD, 8), VStatic(WORD, 8), VElement(WORD), Imm", "R(0), R(5), R(16), Ufields(&[11, 21]), Ulist(13, &[0, 90, 180, 270]), Static(30, 0b1)"),
            ("VStatic(DWORD, 4), VStatic(DWORD, 4), VElement(DWORD), Imm", "R(0), R(5), R(16), Ufields(&[11]), Ulist(13, &[0, 90, 180, 270]), Rwidth(30)"),
        ])
        .bits(&[
            "0x10111101xxxxxx0xx1x0xxxxxxxxxx",
            "0x10111101xxxxxx0xx1x0xxxxxxxxxx",
            "0x10111110xxxxxx0xx1x0xxxxxxxxxx",
        ]),
    entry(&["FMLA", "FMLS", "FMUL", "FMULX"], "<Vd>.<T>,<Vn>.<T>,<Vm>.H[<index>]", &[("Q", 1, 30), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(WORD), V(WORD), VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Rwidth(30)")]),
    entry(&["DUP"], "<Vd>.<T>,<Vn>.<Ts>[<index>]", &[("Q", 1, 30), ("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(BYTE), VElement(BYTE)", "R(0), R(5), Ubits(17, 4), Rwidth(30), Static(16, 0b00001)"),
            ("V(WORD), VElement(WORD)", "R(0), R(5), Ubits(18, 3), Rwidth(30), Static(16, 0b00010)"),
            ("V(DWORD), VElement(DWORD)", "R(0), R(5), Ubits(19, 2), Rwidth(30), Static(16, 0b00100)"),
            ("VStatic(QWORD, 2), VElement(QWORD)", "R(0), R(5), Ubits(20, 1), Rwidth(30), Static(16, 0b01000)"),
        ]),
    entry(&["SADALP", "SADDLP", "UADALP", "UADDLP"], "<Vd>.<Ta>,<Vn>.<Tb>", &[("Q", 1, 30), ("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("V(WORD), V(BYTE)", "R(0), R(5), Rwidth(30), Static(22, 0b00)"),
            ("V(DWORD), V(WORD)", "R(0), R(5), Rwidth(30), Static(22, 0b01)"),
            ("V(QWORD), V(DWORD)", "R(0), R(5), Rwidth(30), Static(22, 0b10)"),
        ]),
    entry(&["SDOT", "UDOT"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.4B[<index>]", &[("Q", 1, 30), ("size", 2, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 2), VStatic(BYTE, 8), VStaticElement(BYTE, 4)", "R(0), R(5), R(16), Ufields(&[11, 21]), Static(30, 0b0), Static(22, 0b10)"),
            ("VStatic(DWORD, 4), VStatic(BYTE, 16), VStaticElement(BYTE, 4)", "R(0), R(5), R(16), Ufields(&[11, 21]), Static(30, 0b1), Static(22, 0b10)"),
        ]),
    entry(&["FMLAL", "FMLAL2", "FMLSL", "FMLSL2"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 2), VStatic(WORD, 2), VStatic(WORD, 2)", "R(0), R(5), R(16), Static(30, 0b0)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 4), VStatic(WORD, 4)", "R(0), R(5), R(16), Static(30, 0b1)"),
        ]),
    entry(&["SDOT", "UDOT"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("Q", 1, 30), ("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 2), VStatic(BYTE, 8), VStatic(BYTE, 8)", "R(0), R(5), R(16), Static(30, 0b0), Static(22, 0b10)"),
            ("VStatic(DWORD, 4), VStatic(BYTE, 16), VStatic(BYTE, 16)", "R(0), R(5), R(16), Static(30, 0b1), Static(22, 0b10)"),
        ]),
    entry(&["FMLAL", "FMLAL2", "FMLSL", "FMLSL2"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.H[<index>]", &[("Q", 1, 30), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 2), VStatic(WORD, 2), VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Static(30, 0b0)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 4), VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Static(30, 0b1)"),
        ]),
    entry(&["TBL", "TBX"], "<Vd>.<Ta>,{<Vn>.16B,<Vn+1>.16B,<Vn+2>.16B,<Vn+3>.16B},<Vm>.<Ta>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), RegListStatic(4, BYTE, 16), V(BYTE)", "R(0), R(5), R(16), Rwidth(30)")]),
    entry(&["TBL", "TBX"], "<Vd>.<Ta>,{<Vn>.16B,<Vn+1>.16B,<Vn+2>.16B},<Vm>.<Ta>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), RegListStatic(3, BYTE, 16), V(BYTE)", "R(0), R(5), R(16), Rwidth(30)")]),
    entry(&["TBL", "TBX"], "<Vd>.<Ta>,{<Vn>.16B,<Vn+1>.16B},<Vm>.<Ta>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), RegListStatic(2, BYTE, 16), V(BYTE)", "R(0), R(5), R(16), Rwidth(30)")]),
    entry(&["TBL", "TBX"], "<Vd>.<Ta>,{<Vn>.16B},<Vm>.<Ta>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("V(BYTE), RegListStatic(1, BYTE, 16), V(BYTE)", "R(0), R(5), R(16), Rwidth(30)")]),
    entry(&["INS", "MOV"], "<Vd>.<Ts>[<index1>],<Vn>.<Ts>[<index2>]", &[("imm5", 5, 16), ("imm4", 4, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VElement(BYTE), VElement(BYTE)", "R(0), Ubits(17, 4), R(5), Ubits(11, 4), Static(16, 0b00001)"),
            ("VElement(WORD), VElement(WORD)", "R(0), Ubits(18, 3), R(5), Ubits(12, 3), Static(16, 0b00010)"),
            ("VElement(DWORD), VElement(DWORD)", "R(0), Ubits(19, 2), R(5), Ubits(13, 2), Static(16, 0b00100)"),
            ("VElement(QWORD), VElement(QWORD)", "R(0), Ubits(20, 1), R(5), Ubits(14, 1), Static(16, 0b01000)"),
        ]),
    entry(&["INS", "MOV"], "<Vd>.<Ts>[<index>],<R><n>", &[("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VElement(BYTE), W", "R(0), Ubits(17, 4), R(5), Static(16, 0b00001)"),
            ("VElement(WORD), W", "R(0), Ubits(18, 3), R(5), Static(16, 0b00010)"),
            ("VElement(DWORD), W", "R(0), Ubits(19, 2), R(5), Static(16, 0b00100)"),
            ("VElement(QWORD), X", "R(0), Ubits(20, 1), R(5), Static(16, 0b01000)"),
        ]),
    entry(&["SMOV"], "<Wd>,<Vn>.<Ts>[<index>]", &[("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("W, VElement(BYTE)", "R(0), R(5), Ubits(17, 4), Static(16, 0b00001)"),
            ("W, VElement(WORD)", "R(0), R(5), Ubits(18, 3), Static(16, 0b00010)"),
        ]),
    entry(&["UMOV"], "<Wd>,<Vn>.<Ts>[<index>]", &[("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("W, VElement(BYTE)", "R(0), R(5), Ubits(17, 4), Static(16, 0b00001)"),
            ("W, VElement(WORD)", "R(0), R(5), Ubits(18, 3), Static(16, 0b00010)"),
            ("W, VElement(DWORD)", "R(0), R(5), Ubits(19, 2), Static(16, 0b00100)"),
        ]),
    entry(&["MOV"], "<Wd>,<Vn>.S[<index>]", &[("imm5", 1, 20), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("W, VElement(DWORD)", "R(0), R(5), Ubits(19, 2), Static(16, 0b00100)")]),
    entry(&["SMOV"], "<Xd>,<Vn>.<Ts>[<index>]", &[("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("X, VElement(BYTE)", "R(0), R(5), Ubits(17, 4), Static(16, 0b00001)"),
            ("X, VElement(WORD)", "R(0), R(5), Ubits(18, 3), Static(16, 0b00010)"),
            ("X, VElement(DWORD)", "R(0), R(5), Ubits(19, 2), Static(16, 0b00100)"),
        ]),
    entry(&["UMOV"], "<Xd>,<Vn>.<Ts>[<index>]", &[("imm5", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, VElement(QWORD)", "R(0), R(5), Ubits(20, 1), Static(16, 0b01000)")]),
    entry(&["MOV"], "<Xd>,<Vn>.D[<index>]", &[("imm5", 1, 20), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("X, VElement(QWORD)", "R(0), R(5), Ubits(20, 1), Static(16, 0b01000)")]),
    entry(&["SADDW", "SSUBW", "UADDW", "USUBW"], "<Vd>.<Ta>,<Vn>.<Ta>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(WORD, 8), VStatic(BYTE, 8)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(DWORD, 4), VStatic(DWORD, 4), VStatic(WORD, 4)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(DWORD, 2)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["SADDW2", "SSUBW2", "UADDW2", "USUBW2"], "<Vd>.<Ta>,<Vn>.<Ta>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(WORD, 8), VStatic(BYTE, 16)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(DWORD, 4), VStatic(DWORD, 4), VStatic(WORD, 8)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(QWORD, 2), VStatic(DWORD, 4)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["SXTL", "UXTL"], "<Vd>.<Ta>,<Vn>.<Tb>", &[("immh", 4, 19), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 8)", "R(0), R(5), Static(19, 0b0001)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 4)", "R(0), R(5), Static(19, 0b0010)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 2)", "R(0), R(5), Static(19, 0b0100)"),
        ]),
    entry(&["SXTL2", "UXTL2"], "<Vd>.<Ta>,<Vn>.<Tb>", &[("immh", 4, 19), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 16)", "R(0), R(5), Static(19, 0b0001)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 8)", "R(0), R(5), Static(19, 0b0010)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 4)", "R(0), R(5), Static(19, 0b0100)"),
        ]),
    entry(&["FCVTL"], "<Vd>.<Ta>,<Vn>.<Tb>", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 4), VStatic(WORD, 4)", "R(0), R(5), Static(22, 0b0)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 2)", "R(0), R(5), Static(22, 0b1)"),
        ]),
    entry(&["FCVTL2"], "<Vd>.<Ta>,<Vn>.<Tb>", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 4), VStatic(WORD, 8)", "R(0), R(5), Static(22, 0b0)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 4)", "R(0), R(5), Static(22, 0b1)"),
        ]),
    entry(&["SSHLL", "USHLL"], "<Vd>.<Ta>,<Vn>.<Tb>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 8), Imm", "R(0), R(5), Ubits(16, 3), Static(19, 0b0001)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 4), Imm", "R(0), R(5), Ubits(16, 4), Static(19, 0b0010)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 2), Imm", "R(0), R(5), Ubits(16, 5), Static(19, 0b0100)"),
        ]),
    entry(&["SSHLL2", "USHLL2"], "<Vd>.<Ta>,<Vn>.<Tb>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 16), Imm", "R(0), R(5), Ubits(16, 3), Static(19, 0b0001)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 8), Imm", "R(0), R(5), Ubits(16, 4), Static(19, 0b0010)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 4), Imm", "R(0), R(5), Ubits(16, 5), Static(19, 0b0100)"),
        ]),
    entry(&["SHLL"], "<Vd>.<Ta>,<Vn>.<Tb>,#<shift>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 8), LitInt(8)", "R(0), R(5), Static(22, 0b00)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 4), LitInt(16)", "R(0), R(5), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 2), LitInt(32)", "R(0), R(5), Static(22, 0b10)"),
        ]),
    entry(&["SHLL2"], "<Vd>.<Ta>,<Vn>.<Tb>,#<shift>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 16), LitInt(8)", "R(0), R(5), Static(22, 0b00)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 8), LitInt(16)", "R(0), R(5), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 4), LitInt(32)", "R(0), R(5), Static(22, 0b10)"),
        ]),
    entry(&["PMULL"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 8), VStatic(BYTE, 8)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(OWORD, 1), VStatic(QWORD, 1), VStatic(QWORD, 1)", "R(0), R(5), R(16), Static(22, 0b11)"),
        ]),
    entry(&["PMULL2"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 16), VStatic(BYTE, 16)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(OWORD, 1), VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), R(16), Static(22, 0b11)"),
        ]),
    entry(&["SABAL", "SABDL", "SADDL", "SMLAL", "SMLSL", "SMULL", "SSUBL", "UABAL", "UABDL", "UADDL", "UMLAL", "UMLSL", "UMULL", "USUBL"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 8), VStatic(BYTE, 8)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 4), VStatic(WORD, 4)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 2), VStatic(DWORD, 2)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["SABAL2", "SABDL2", "SADDL2", "SMLAL2", "SMLSL2", "SMULL2", "SSUBL2", "UABAL2", "UABDL2", "UADDL2", "UMLAL2", "UMLSL2", "UMULL2", "USUBL2"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(WORD, 8), VStatic(BYTE, 16), VStatic(BYTE, 16)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(DWORD, 4), VStatic(WORD, 8), VStatic(WORD, 8)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 4), VStatic(DWORD, 4)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["SQDMLAL", "SQDMLSL", "SQDMULL"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 4), VStatic(WORD, 4), VStatic(WORD, 4)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 2), VStatic(DWORD, 2)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["SQDMLAL2", "SQDMLSL2", "SQDMULL2"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Tb>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 4), VStatic(WORD, 8), VStatic(WORD, 8)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 4), VStatic(DWORD, 4)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["SMLAL", "SMLSL", "SMULL", "SQDMLAL", "SQDMLSL", "SQDMULL", "UMLAL", "UMLSL", "UMULL"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Ts>[<index>]", &[("size", 2, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 4), VStatic(WORD, 4), VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 2), VElement(DWORD)", "R(0), R(5), R(16), Ufields(&[11, 21]), Static(22, 0b10)"),
        ]),
    entry(&["SMLAL2", "SMLSL2", "SMULL2", "SQDMLAL2", "SQDMLSL2", "SQDMULL2", "UMLAL2", "UMLSL2", "UMULL2"], "<Vd>.<Ta>,<Vn>.<Tb>,<Vm>.<Ts>[<index>]", &[("size", 2, 22), ("L", 1, 21), ("M", 1, 20), ("Rm", 4, 16), ("H", 1, 11), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(DWORD, 4), VStatic(WORD, 8), VElement(WORD)", "R(0), R(5), R4(16), Ufields(&[11, 21, 20]), Static(22, 0b01)"),
            ("VStatic(QWORD, 2), VStatic(DWORD, 4), VElement(DWORD)", "R(0), R(5), R(16), Ufields(&[11, 21]), Static(22, 0b10)"),
        ]),
    entry(&["SQXTN", "SQXTUN", "UQXTN", "XTN"], "<Vd>.<Tb>,<Vn>.<Ta>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(BYTE, 8), VStatic(WORD, 8)", "R(0), R(5), Static(22, 0b00)"),
            ("VStatic(WORD, 4), VStatic(DWORD, 4)", "R(0), R(5), Static(22, 0b01)"),
            ("VStatic(DWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), Static(22, 0b10)"),
        ]),
    entry(&["SQXTN2", "SQXTUN2", "UQXTN2", "XTN2"], "<Vd>.<Tb>,<Vn>.<Ta>", &[("size", 2, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(BYTE, 16), VStatic(WORD, 8)", "R(0), R(5), Static(22, 0b00)"),
            ("VStatic(WORD, 8), VStatic(DWORD, 4)", "R(0), R(5), Static(22, 0b01)"),
            ("VStatic(DWORD, 4), VStatic(QWORD, 2)", "R(0), R(5), Static(22, 0b10)"),
        ]),
    entry(&["FCVTN", "FCVTXN"], "<Vd>.<Tb>,<Vn>.<Ta>", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(DWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), Static(22, 0b1)")]),
    entry(&["FCVTN2", "FCVTXN2"], "<Vd>.<Tb>,<Vn>.<Ta>", &[("sz", 1, 22), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[("VStatic(DWORD, 4), VStatic(QWORD, 2)", "R(0), R(5), Static(22, 0b1)")]),
    entry(&["RSHRN", "SHRN", "SQRSHRN", "SQRSHRUN", "SQSHRN", "SQSHRUN", "UQRSHRN", "UQSHRN"], "<Vd>.<Tb>,<Vn>.<Ta>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(BYTE, 8), VStatic(WORD, 8), Imm", "R(0), R(5), Usub(16, 3, 8), Static(19, 0b0001)"),
            ("VStatic(WORD, 4), VStatic(DWORD, 4), Imm", "R(0), R(5), Usub(16, 4, 16), Static(19, 0b0010)"),
            ("VStatic(DWORD, 2), VStatic(QWORD, 2), Imm", "R(0), R(5), Usub(16, 5, 32), Static(19, 0b0100)"),
        ]),
    entry(&["RSHRN2", "SHRN2", "SQRSHRN2", "SQRSHRUN2", "SQSHRN2", "SQSHRUN2", "UQRSHRN2", "UQSHRN2"], "<Vd>.<Tb>,<Vn>.<Ta>,#<shift>", &[("immh", 4, 19), ("immb", 3, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(BYTE, 16), VStatic(WORD, 8), Imm", "R(0), R(5), Usub(16, 3, 8), Static(19, 0b0001)"),
            ("VStatic(WORD, 8), VStatic(DWORD, 4), Imm", "R(0), R(5), Usub(16, 4, 16), Static(19, 0b0010)"),
            ("VStatic(DWORD, 4), VStatic(QWORD, 2), Imm", "R(0), R(5), Usub(16, 5, 32), Static(19, 0b0100)"),
        ]),
    entry(&["ADDHN", "RADDHN", "RSUBHN", "SUBHN"], "<Vd>.<Tb>,<Vn>.<Ta>,<Vm>.<Ta>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(BYTE, 8), VStatic(WORD, 8), VStatic(WORD, 8)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(WORD, 4), VStatic(DWORD, 4), VStatic(DWORD, 4)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(DWORD, 2), VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["ADDHN2", "RADDHN2", "RSUBHN2", "SUBHN2"], "<Vd>.<Tb>,<Vn>.<Ta>,<Vm>.<Ta>", &[("size", 2, 22), ("Rm", 5, 16), ("Rn", 5, 5), ("Rd", 5, 0)])
        .encodes(&[
            ("VStatic(BYTE, 16), VStatic(WORD, 8), VStatic(WORD, 8)", "R(0), R(5), R(16), Static(22, 0b00)"),
            ("VStatic(WORD, 8), VStatic(DWORD, 4), VStatic(DWORD, 4)", "R(0), R(5), R(16), Static(22, 0b01)"),
            ("VStatic(DWORD, 4), VStatic(QWORD, 2), VStatic(QWORD, 2)", "R(0), R(5), R(16), Static(22, 0b10)"),
        ]),
    entry(&["LD1", "LD4R", "ST1"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>,<Vt4>.<T>},[<Xn|SP>]", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(4, BYTE), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(4, WORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(4, DWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(4, QWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD4", "ST4"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>,<Vt4>.<T>},[<Xn|SP>]", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(4, BYTE), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(4, WORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(4, DWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegListStatic(4, QWORD, 2), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "LD4R", "ST1"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>,<Vt4>.<T>},[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(4, BYTE), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b00)"),
            ("RegList(4, WORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b01)"),
            ("RegList(4, DWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b10)"),
            ("RegList(4, QWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD4", "ST4"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>,<Vt4>.<T>},[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(4, BYTE), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b00)"),
            ("RegList(4, WORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b01)"),
            ("RegList(4, DWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b10)"),
            ("RegListStatic(4, QWORD, 2), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "ST1"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>,<Vt4>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegListStatic(4, BYTE, 8), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b0), Static(10, 0b00)"),
            ("RegListStatic(4, WORD, 4), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b0), Static(10, 0b01)"),
            ("RegListStatic(4, DWORD, 2), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b0), Static(10, 0b10)"),
            ("RegListStatic(4, QWORD, 1), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b0), Static(10, 0b11)"),
            ("RegListStatic(4, BYTE, 16), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b00)"),
            ("RegListStatic(4, WORD, 8), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b01)"),
            ("RegListStatic(4, DWORD, 4), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b10)"),
            ("RegListStatic(4, QWORD, 2), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b11)"),
        ]),
    entry(&["LD4", "ST4"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>,<Vt4>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegListStatic(4, BYTE, 8), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b0), Static(10, 0b00)"),
            ("RegListStatic(4, WORD, 4), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b0), Static(10, 0b01)"),
            ("RegListStatic(4, DWORD, 2), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b0), Static(10, 0b10)"),
            ("RegListStatic(4, BYTE, 16), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b00)"),
            ("RegListStatic(4, WORD, 8), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b01)"),
            ("RegListStatic(4, DWORD, 4), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b10)"),
            ("RegListStatic(4, QWORD, 2), RefBase, LitInt(64)", "R(0), R(5), Static(30, 0b1), Static(10, 0b11)"),
        ]),
    entry(&["LD4R"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>,<Vt4>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(4, BYTE), RefBase, LitInt(4)", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(4, WORD), RefBase, LitInt(8)", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(4, DWORD), RefBase, LitInt(16)", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(4, QWORD), RefBase, LitInt(32)", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "LD3R", "ST1"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>},[<Xn|SP>]", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(3, BYTE), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(3, WORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(3, DWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(3, QWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD3", "ST3"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>},[<Xn|SP>]", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(3, BYTE), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(3, WORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(3, DWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegListStatic(3, QWORD, 2), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "LD3R", "ST1"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>},[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(3, BYTE), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b00)"),
            ("RegList(3, WORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b01)"),
            ("RegList(3, DWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b10)"),
            ("RegList(3, QWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD3", "ST3"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>},[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(3, BYTE), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b00)"),
            ("RegList(3, WORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b01)"),
            ("RegList(3, DWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b10)"),
            ("RegListStatic(3, QWORD, 2), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "ST1"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegListStatic(3, BYTE, 8), RefBase, LitInt(24)", "R(0), R(5), Static(30, 0b0), Static(10, 0b00)"),
            ("RegListStatic(3, WORD, 4), RefBase, LitInt(24)", "R(0), R(5), Static(30, 0b0), Static(10, 0b01)"),
            ("RegListStatic(3, DWORD, 2), RefBase, LitInt(24)", "R(0), R(5), Static(30, 0b0), Static(10, 0b10)"),
            ("RegListStatic(3, QWORD, 1), RefBase, LitInt(24)", "R(0), R(5), Static(30, 0b0), Static(10, 0b11)"),
            ("RegListStatic(3, BYTE, 16), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b00)"),
            ("RegListStatic(3, WORD, 8), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b01)"),
            ("RegListStatic(3, DWORD, 4), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b10)"),
            ("RegListStatic(3, QWORD, 2), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b11)"),
        ]),
    entry(&["LD3", "ST3"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegListStatic(3, BYTE, 8), RefBase, LitInt(24)", "R(0), R(5), Static(30, 0b0), Static(10, 0b00)"),
            ("RegListStatic(3, WORD, 4), RefBase, LitInt(24)", "R(0), R(5), Static(30, 0b0), Static(10, 0b01)"),
            ("RegListStatic(3, DWORD, 2), RefBase, LitInt(24)", "R(0), R(5), Static(30, 0b0), Static(10, 0b10)"),
            ("RegListStatic(3, BYTE, 16), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b00)"),
            ("RegListStatic(3, WORD, 8), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b01)"),
            ("RegListStatic(3, DWORD, 4), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b10)"),
            ("RegListStatic(3, QWORD, 2), RefBase, LitInt(48)", "R(0), R(5), Static(30, 0b1), Static(10, 0b11)"),
        ]),
    entry(&["LD3R"], "{<Vt>.<T>,<Vt2>.<T>,<Vt3>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(3, BYTE), RefBase, LitInt(3)", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(3, WORD), RefBase, LitInt(6)", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(3, DWORD), RefBase, LitInt(12)", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(3, QWORD), RefBase, LitInt(24)", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "LD2R", "ST1"], "{<Vt>.<T>,<Vt2>.<T>},[<Xn|SP>]", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(2, BYTE), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(2, WORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(2, DWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(2, QWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD2", "ST2"], "{<Vt>.<T>,<Vt2>.<T>},[<Xn|SP>]", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(2, BYTE), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(2, WORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(2, DWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegListStatic(2, QWORD, 2), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "LD2R", "ST1"], "{<Vt>.<T>,<Vt2>.<T>},[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(2, BYTE), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b00)"),
            ("RegList(2, WORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b01)"),
            ("RegList(2, DWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b10)"),
            ("RegList(2, QWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD2", "ST2"], "{<Vt>.<T>,<Vt2>.<T>},[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(2, BYTE), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b00)"),
            ("RegList(2, WORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b01)"),
            ("RegList(2, DWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b10)"),
            ("RegListStatic(2, QWORD, 2), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "ST1"], "{<Vt>.<T>,<Vt2>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegListStatic(2, BYTE, 8), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b0), Static(10, 0b00)"),
            ("RegListStatic(2, WORD, 4), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b0), Static(10, 0b01)"),
            ("RegListStatic(2, DWORD, 2), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b0), Static(10, 0b10)"),
            ("RegListStatic(2, QWORD, 1), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b0), Static(10, 0b11)"),
            ("RegListStatic(2, BYTE, 16), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b00)"),
            ("RegListStatic(2, WORD, 8), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b01)"),
            ("RegListStatic(2, DWORD, 4), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b10)"),
            ("RegListStatic(2, QWORD, 2), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b11)"),
        ]),
    entry(&["LD2", "ST2"], "{<Vt>.<T>,<Vt2>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegListStatic(2, BYTE, 8), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b0), Static(10, 0b00)"),
            ("RegListStatic(2, WORD, 4), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b0), Static(10, 0b01)"),
            ("RegListStatic(2, DWORD, 2), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b0), Static(10, 0b10)"),
            ("RegListStatic(2, BYTE, 16), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b00)"),
            ("RegListStatic(2, WORD, 8), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b01)"),
            ("RegListStatic(2, DWORD, 4), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b10)"),
            ("RegListStatic(2, QWORD, 2), RefBase, LitInt(32)", "R(0), R(5), Static(30, 0b1), Static(10, 0b11)"),
        ]),
    entry(&["LD2R"], "{<Vt>.<T>,<Vt2>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(2, BYTE), RefBase, LitInt(2)", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(2, WORD), RefBase, LitInt(4)", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(2, DWORD), RefBase, LitInt(8)", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(2, QWORD), RefBase, LitInt(16)", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "LD1R", "ST1"], "{<Vt>.<T>},[<Xn|SP>]", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(1, BYTE), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(1, WORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(1, DWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(1, QWORD), RefBase", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "LD1R", "ST1"], "{<Vt>.<T>},[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(1, BYTE), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b00)"),
            ("RegList(1, WORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b01)"),
            ("RegList(1, DWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b10)"),
            ("RegList(1, QWORD), RefBase, X", "R(0), R(5), RNoZr(16), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD1", "ST1"], "{<Vt>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegListStatic(1, BYTE, 8), RefBase, LitInt(8)", "R(0), R(5), Static(30, 0b0), Static(10, 0b00)"),
            ("RegListStatic(1, WORD, 4), RefBase, LitInt(8)", "R(0), R(5), Static(30, 0b0), Static(10, 0b01)"),
            ("RegListStatic(1, DWORD, 2), RefBase, LitInt(8)", "R(0), R(5), Static(30, 0b0), Static(10, 0b10)"),
            ("RegListStatic(1, QWORD, 1), RefBase, LitInt(8)", "R(0), R(5), Static(30, 0b0), Static(10, 0b11)"),
            ("RegListStatic(1, BYTE, 16), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b1), Static(10, 0b00)"),
            ("RegListStatic(1, WORD, 8), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b1), Static(10, 0b01)"),
            ("RegListStatic(1, DWORD, 4), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b1), Static(10, 0b10)"),
            ("RegListStatic(1, QWORD, 2), RefBase, LitInt(16)", "R(0), R(5), Static(30, 0b1), Static(10, 0b11)"),
        ]),
    entry(&["LD1R"], "{<Vt>.<T>},[<Xn|SP>],<imm>", &[("Q", 1, 30), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[
            ("RegList(1, BYTE), RefBase, LitInt(1)", "R(0), R(5), Rwidth(30), Static(10, 0b00)"),
            ("RegList(1, WORD), RefBase, LitInt(2)", "R(0), R(5), Rwidth(30), Static(10, 0b01)"),
            ("RegList(1, DWORD), RefBase, LitInt(4)", "R(0), R(5), Rwidth(30), Static(10, 0b10)"),
            ("RegList(1, QWORD), RefBase, LitInt(8)", "R(0), R(5), Rwidth(30), Static(10, 0b11)"),
        ]),
    entry(&["LD4", "ST4"], "{<Vt>.B,<Vt2>.B,<Vt3>.B,<Vt4>.B}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, BYTE), RefBase", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.B,<Vt2>.B,<Vt3>.B,<Vt4>.B}[<index>],[<Xn|SP>],#4", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, BYTE), RefBase, LitInt(4)", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.B,<Vt2>.B,<Vt3>.B,<Vt4>.B}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, BYTE), RefBase, X", "R(0), Ufields(&[30, 12, 11, 10]), R(5), RNoZr(16)")]),
    entry(&["LD3", "ST3"], "{<Vt>.B,<Vt2>.B,<Vt3>.B}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, BYTE), RefBase", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.B,<Vt2>.B,<Vt3>.B}[<index>],[<Xn|SP>],#3", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, BYTE), RefBase, LitInt(3)", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.B,<Vt2>.B,<Vt3>.B}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, BYTE), RefBase, X", "R(0), Ufields(&[30, 12, 11, 10]), R(5), RNoZr(16)")]),
    entry(&["LD2", "ST2"], "{<Vt>.B,<Vt2>.B}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, BYTE), RefBase", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.B,<Vt2>.B}[<index>],[<Xn|SP>],#2", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, BYTE), RefBase, LitInt(2)", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.B,<Vt2>.B}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, BYTE), RefBase, X", "R(0), Ufields(&[30, 12, 11, 10]), R(5), RNoZr(16)")]),
    entry(&["LD1", "ST1"], "{<Vt>.B}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, BYTE), RefBase", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.B}[<index>],[<Xn|SP>],#1", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, BYTE), RefBase, LitInt(1)", "R(0), Ufields(&[30, 12, 11, 10]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.B}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, BYTE), RefBase, X", "R(0), Ufields(&[30, 12, 11, 10]), R(5), RNoZr(16)")]),
    entry(&["LD4", "ST4"], "{<Vt>.D,<Vt2>.D,<Vt3>.D,<Vt4>.D}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, QWORD), RefBase", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.D,<Vt2>.D,<Vt3>.D,<Vt4>.D}[<index>],[<Xn|SP>],#32", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, QWORD), RefBase, LitInt(32)", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.D,<Vt2>.D,<Vt3>.D,<Vt4>.D}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, QWORD), RefBase, X", "R(0), Ufields(&[30]), R(5), RNoZr(16)")]),
    entry(&["LD3", "ST3"], "{<Vt>.D,<Vt2>.D,<Vt3>.D}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, QWORD), RefBase", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.D,<Vt2>.D,<Vt3>.D}[<index>],[<Xn|SP>],#24", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, QWORD), RefBase, LitInt(24)", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.D,<Vt2>.D,<Vt3>.D}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, QWORD), RefBase, X", "R(0), Ufields(&[30]), R(5), RNoZr(16)")]),
    entry(&["LD2", "ST2"], "{<Vt>.D,<Vt2>.D}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, QWORD), RefBase", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.D,<Vt2>.D}[<index>],[<Xn|SP>],#16", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, QWORD), RefBase, LitInt(16)", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.D,<Vt2>.D}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, QWORD), RefBase, X", "R(0), Ufields(&[30]), R(5), RNoZr(16)")]),
    entry(&["LD1", "ST1"], "{<Vt>.D}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, QWORD), RefBase", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.D}[<index>],[<Xn|SP>],#8", &[("Q", 1, 30), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, QWORD), RefBase, LitInt(8)", "R(0), Ufields(&[30]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.D}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, QWORD), RefBase, X", "R(0), Ufields(&[30]), R(5), RNoZr(16)")]),
    entry(&["LD4", "ST4"], "{<Vt>.H,<Vt2>.H,<Vt3>.H,<Vt4>.H}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, WORD), RefBase", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.H,<Vt2>.H,<Vt3>.H,<Vt4>.H}[<index>],[<Xn|SP>],#8", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, WORD), RefBase, LitInt(8)", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.H,<Vt2>.H,<Vt3>.H,<Vt4>.H}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, WORD), RefBase, X", "R(0), Ufields(&[30, 12, 11]), R(5), RNoZr(16)")]),
    entry(&["LD3", "ST3"], "{<Vt>.H,<Vt2>.H,<Vt3>.H}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, WORD), RefBase", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.H,<Vt2>.H,<Vt3>.H}[<index>],[<Xn|SP>],#6", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, WORD), RefBase, LitInt(6)", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.H,<Vt2>.H,<Vt3>.H}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, WORD), RefBase, X", "R(0), Ufields(&[30, 12, 11]), R(5), RNoZr(16)")]),
    entry(&["LD2", "ST2"], "{<Vt>.H,<Vt2>.H}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, WORD), RefBase", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.H,<Vt2>.H}[<index>],[<Xn|SP>],#4", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, WORD), RefBase, LitInt(4)", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.H,<Vt2>.H}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, WORD), RefBase, X", "R(0), Ufields(&[30, 12, 11]), R(5), RNoZr(16)")]),
    entry(&["LD1", "ST1"], "{<Vt>.H}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, WORD), RefBase", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.H}[<index>],[<Xn|SP>],#2", &[("Q", 1, 30), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, WORD), RefBase, LitInt(2)", "R(0), Ufields(&[30, 12, 11]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.H}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("size", 2, 10), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, WORD), RefBase, X", "R(0), Ufields(&[30, 12, 11]), R(5), RNoZr(16)")]),
    entry(&["LD4", "ST4"], "{<Vt>.S,<Vt2>.S,<Vt3>.S,<Vt4>.S}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, DWORD), RefBase", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.S,<Vt2>.S,<Vt3>.S,<Vt4>.S}[<index>],[<Xn|SP>],#16", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, DWORD), RefBase, LitInt(16)", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD4", "ST4"], "{<Vt>.S,<Vt2>.S,<Vt3>.S,<Vt4>.S}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(4, DWORD), RefBase, X", "R(0), Ufields(&[30, 12]), R(5), RNoZr(16)")]),
    entry(&["LD3", "ST3"], "{<Vt>.S,<Vt2>.S,<Vt3>.S}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, DWORD), RefBase", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.S,<Vt2>.S,<Vt3>.S}[<index>],[<Xn|SP>],#12", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, DWORD), RefBase, LitInt(12)", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD3", "ST3"], "{<Vt>.S,<Vt2>.S,<Vt3>.S}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(3, DWORD), RefBase, X", "R(0), Ufields(&[30, 12]), R(5), RNoZr(16)")]),
    entry(&["LD2", "ST2"], "{<Vt>.S,<Vt2>.S}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, DWORD), RefBase", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.S,<Vt2>.S}[<index>],[<Xn|SP>],#8", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, DWORD), RefBase, LitInt(8)", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD2", "ST2"], "{<Vt>.S,<Vt2>.S}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(2, DWORD), RefBase, X", "R(0), Ufields(&[30, 12]), R(5), RNoZr(16)")]),
    entry(&["LD1", "ST1"], "{<Vt>.S}[<index>],[<Xn|SP>]", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, DWORD), RefBase", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.S}[<index>],[<Xn|SP>],#4", &[("Q", 1, 30), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, DWORD), RefBase, LitInt(4)", "R(0), Ufields(&[30, 12]), R(5)")]),
    entry(&["LD1", "ST1"], "{<Vt>.S}[<index>],[<Xn|SP>],<Xm>", &[("Q", 1, 30), ("Rm", 5, 16), ("S", 1, 12), ("Rn", 5, 5), ("Rt", 5, 0)])
        .encodes(&[("RegListElement(1, DWORD), RefBase, X", "R(0), Ufields(&[30, 12]), R(5), RNoZr(16)")]),
];
