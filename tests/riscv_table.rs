use std::path::PathBuf;

use opforge::config::BuildConfig;
use opforge::loader::riscv::{RiscvTarget, load_archive};
use opforge::pipeline;
use opforge::testgen::{CaseTarget, Sampler, generate, write_cases};

fn fixtures() -> (PathBuf, PathBuf) {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/riscv");
    (root.join("opcodes"), root.join("arg_lut.csv"))
}

fn build(config: &BuildConfig) -> String {
    let (opcodes, lut) = fixtures();
    let out = tempfile::tempdir().expect("tempdir");
    let output = out.path().join("opmap.rs");
    let mut diagnostics = Vec::new();
    assert!(pipeline::build_riscv(&opcodes, &lut, &output, config, &mut diagnostics).expect("build"));
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    std::fs::read_to_string(&output).expect("read table")
}

#[test]
fn builds_table_for_both_widths() {
    let table = build(&BuildConfig::default());
    assert!(table.starts_with("// The base of this file was generated by gen_opmap\nOps!(\n"));
    for line in [
        "// Extension(s) i",
        "// Extension(s) m, zmmul",
        "    // add rd, rs1, rs2 (i)",
        "    Single(0b00000000_00000000_00000000_00110011), RV32 | RV64, [X, X, X] => [R(7), R(15), R(20)], [Ex_I];",
        "    Single(0b00000010_00000000_00000000_00110011), RV32 | RV64, [X, X, X] => [R(7), R(15), R(20)], [Ex_M, Ex_Zmmul];",
    ] {
        assert!(table.contains(line), "missing {line:?} in\n{table}");
    }
    assert!(!table.contains("zz.op"));

    // slli differs in shift width, addiw only exists on RV64
    let slli = &table[table.find("\"slli\" = [").expect("slli")..];
    let slli = &slli[..slli.find("],\n").expect("group end")];
    assert!(slli.contains("Single(0b00000000_00000000_00010000_00010011), RV32, "));
    assert!(slli.contains("Single(0b00000000_00000000_00010000_00010011), RV64, "));
    let addiw = &table[table.find("\"addiw\" = [").expect("addiw")..];
    assert!(addiw.lines().nth(2).is_some_and(|line| line.contains("), RV64, ")));
}

#[test]
fn unverified_extensions_are_opt_in() {
    let config = BuildConfig {
        include_unverified: true,
        ..BuildConfig::default()
    };
    let table = build(&config);
    assert!(table.contains("\"zz.op\" = ["));
    assert!(table.contains("[Ex_Zzz];"));
}

#[test]
fn rv32_cases_skip_blacklisted_and_wide_rows() {
    let (opcodes, lut) = fixtures();
    let config = BuildConfig::default();
    let mut diagnostics = Vec::new();
    let archive = load_archive(&opcodes, &lut, &mut diagnostics).expect("archive");
    let rows = pipeline::compile_riscv(&archive, RiscvTarget::Rv32, &config, &mut diagnostics).expect("rows");
    assert!(rows.iter().all(|row| row.mnemonic != "addiw"));

    let cases = generate(&rows, CaseTarget::Riscv(RiscvTarget::Rv32), 6, &mut Sampler::seeded(3), &mut diagnostics);
    assert!(
        diagnostics.iter().all(|diagnostic| diagnostic.code != "testgen.unencodable"),
        "{diagnostics:?}"
    );
    assert!(cases.iter().all(|case| !case.reference.starts_with("lui ")));
    assert!(cases.iter().any(|case| case.reference.starts_with("mul ")));
    for case in cases.iter().filter(|case| case.reference.starts_with("mul ")) {
        let extension = case.extensions.as_deref().expect("extension label");
        assert!(extension == "m" || extension == "zmmul", "{extension}");
    }

    let out = tempfile::tempdir().expect("tempdir");
    let path = out.path().join("rv32_cases.txt");
    write_cases(&path, &cases).expect("write");
    let text = std::fs::read_to_string(&path).expect("read");
    assert_eq!(text.lines().count(), cases.len());
    assert!(text.lines().all(|line| line.split('\t').count() == 3));
}
