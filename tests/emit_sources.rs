use std::path::PathBuf;

use hex_literal::hex;
use opforge::testgen::{SourceTarget, parse_compiled_cases, write_sources};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/compiled").join(name)
}

fn bytes(digits: &str) -> Vec<u8> {
    (0..digits.len())
        .step_by(2)
        .map(|at| u8::from_str_radix(&digits[at..at + 2], 16).expect("hex"))
        .collect()
}

#[test]
fn aarch64_sources_from_compiled_cases() {
    let path = fixture("aarch64_cases.txt");
    let text = std::fs::read_to_string(&path).expect("read");
    let mut diagnostics = Vec::new();
    let cases = parse_compiled_cases(&text, &path, &mut diagnostics);
    assert_eq!(cases.len(), 4);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "testgen.malformed-case");

    // adc w1, w2, w3
    assert_eq!(bytes(&cases[0].bytes), hex!("41 00 03 1a"));

    let out = tempfile::tempdir().expect("tempdir");
    let written = write_sources(SourceTarget::Aarch64, &cases, out.path()).expect("write");
    assert_eq!(written, vec![out.path().join("aarch64_tests_0.rs.gen")]);
    let source = std::fs::read_to_string(&written[0]).expect("read source");
    assert!(source.contains("fn adc_0() {"));
    assert!(source.contains("        ; .arch aarch64\n        ; adc w1, w2, w3\n"));
    assert!(source.contains("assert_eq!(hex, \"41, 00, 03, 1A\", \"adc w1, w2, w3\");"));
    assert!(source.contains("fn b_eq_2() {"));
    assert!(!source.contains("adrp"));
}

#[test]
fn riscv_sources_carry_the_feature_label() {
    let path = fixture("rv64_cases.txt");
    let text = std::fs::read_to_string(&path).expect("read");
    let mut diagnostics = Vec::new();
    let cases = parse_compiled_cases(&text, &path, &mut diagnostics);
    assert!(diagnostics.is_empty());
    assert_eq!(bytes(&cases[1].bytes), hex!("b3 02 73 02"));

    let out = tempfile::tempdir().expect("tempdir");
    let written = write_sources(SourceTarget::Rv64, &cases, out.path()).expect("write");
    let source = std::fs::read_to_string(&written[0]).expect("read source");
    assert!(source.contains("dynasmrt::SimpleAssembler::new()"));
    assert!(source.contains("        ; .arch riscv64\n        ; .feature zmmul\n        ; mul x5, x6, x7\n"));
    assert!(source.contains("assert_eq!(hex, \"B3, 00, 31, 00\", \"add x1, x2, x3\");"));

    // emitting again leaves the file alone
    let before = std::fs::metadata(&written[0]).and_then(|meta| meta.modified()).expect("mtime");
    write_sources(SourceTarget::Rv64, &cases, out.path()).expect("rewrite");
    let after = std::fs::metadata(&written[0]).and_then(|meta| meta.modified()).expect("mtime");
    assert_eq!(before, after);
}
