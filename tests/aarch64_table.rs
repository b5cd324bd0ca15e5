use std::path::PathBuf;

use opforge::config::BuildConfig;
use opforge::isa::variant::InstrClass;
use opforge::pipeline;
use opforge::testgen::{CaseTarget, Sampler, TestTemplate, generate};
use proptest::prelude::*;

fn xml_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/aarch64")
}

#[test]
fn builds_table_from_xml_pages() {
    let out = tempfile::tempdir().expect("tempdir");
    let output = out.path().join("opmap.rs");
    let mut diagnostics = Vec::new();
    let changed = pipeline::build_aarch64(&xml_dir(), &output, &BuildConfig::default(), &mut diagnostics)
        .expect("build");
    assert!(changed);

    // broken.xml is reported, onebigfile.xml is never read
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    assert_eq!(diagnostics[0].code, "aarch64.xml");

    let table = std::fs::read_to_string(&output).expect("read table");
    assert!(table.starts_with("// This file was generated by gen_opmap\nOps!(\n"));
    assert!(table.ends_with("\n);\n"));
    for line in [
        "\"adc\" = [",
        "    0b00011010_00000000_00000000_00000000 = [W, W, W] => [R(0), R(5), R(16)];",
        "    0b10011010_00000000_00000000_00000000 = [X, X, X] => [R(0), R(5), R(16)];",
        "    0b01010100_00000000_00000000_00000000 = [Dot, Cond, Offset] => [Cond(0), Offset(BCOND)];",
        "    0b01010010_10000000_00000000_00000000 = [W, Imm, End, LitMod(LSL)] => [R(0), Ubits(5, 16), Ulist(21, &[0, 16])];",
        "    0b00000000_00000000_00000000_00000000 = [Imm] => [Ubits(0, 16)];",
    ] {
        assert!(table.contains(line), "missing {line:?} in\n{table}");
    }
    let order: Vec<usize> = ["\"adc\"", "\"b\"", "\"movz\"", "\"udf\""]
        .iter()
        .map(|name| table.find(name).expect("group"))
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn unchanged_table_is_not_rewritten() {
    let out = tempfile::tempdir().expect("tempdir");
    let output = out.path().join("opmap.rs");
    let config = BuildConfig::default();
    let mut diagnostics = Vec::new();
    assert!(pipeline::build_aarch64(&xml_dir(), &output, &config, &mut diagnostics).expect("first"));
    let first = std::fs::read(&output).expect("read");
    assert!(!pipeline::build_aarch64(&xml_dir(), &output, &config, &mut diagnostics).expect("second"));
    assert_eq!(std::fs::read(&output).expect("read"), first);
}

#[test]
fn width_pairs_merge_into_one_row() {
    let config = BuildConfig {
        merge_width_pairs: true,
        ..BuildConfig::default()
    };
    let mut diagnostics = Vec::new();
    let groups = pipeline::aarch64_groups(&xml_dir(), &config, &mut diagnostics).expect("groups");
    let adc = groups.iter().find(|group| group.mnemonic == "ADC").expect("adc");
    assert_eq!(adc.rows.len(), 1);
    assert_eq!(adc.rows[0].matcher_text(), "WX, WX, WX");
}

#[test]
fn skeleton_lists_general_shapes() {
    let mut diagnostics = Vec::new();
    let text = pipeline::aarch64_skeleton(&xml_dir(), &InstrClass::General, &BuildConfig::default(), &mut diagnostics)
        .expect("skeleton");
    assert!(text.contains(r##"entry(&["ADC"], "<Wd>,<Wn>,<Wm>""##), "{text}");
    assert!(text.contains(r##"entry(&["UDF"], "#<imm>""##), "{text}");
    assert!(
        pipeline::aarch64_skeleton(&xml_dir(), &InstrClass::Float, &BuildConfig::default(), &mut diagnostics)
            .expect("skeleton")
            .is_empty()
    );
}

#[test]
fn cases_cover_every_row() {
    let mut diagnostics = Vec::new();
    let groups = pipeline::aarch64_groups(&xml_dir(), &BuildConfig::default(), &mut diagnostics).expect("groups");
    let rows: Vec<_> = groups.into_iter().flat_map(|group| group.rows).collect();
    diagnostics.clear();
    let cases = generate(&rows, CaseTarget::Aarch64, 8, &mut Sampler::seeded(11), &mut diagnostics);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert_eq!(cases.len(), rows.len() * 8);
    for case in &cases {
        assert!(case.extensions.is_none());
        assert_eq!(case.reference, case.reference.to_lowercase());
    }
    assert!(cases.iter().any(|case| case.reference.starts_with("b.")));
    assert!(cases.iter().any(|case| case.reference.starts_with("udf #")));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sampled_operands_keep_fixed_bits(seed in any::<u64>()) {
        let mut diagnostics = Vec::new();
        let groups = pipeline::aarch64_groups(&xml_dir(), &BuildConfig::default(), &mut diagnostics)
            .expect("groups");
        let mut sampler = Sampler::seeded(seed);
        for row in groups.iter().flat_map(|group| &group.rows) {
            let template = TestTemplate::from_row(row);
            let instance = template.sample(&mut sampler);
            let word = template.encode(&instance).expect("encodable sample");
            prop_assert_eq!(word & row.bits.fixed_mask(), row.bits.fixed_bits());
        }
    }
}
