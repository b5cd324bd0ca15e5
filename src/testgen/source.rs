//! Rust test sources from cases whose reference bytes have been filled in.

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use crate::emit::digest::write_if_changed;
use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase, SourcePosition, SourceSpan};

/// Tests per generated file.
pub const CHUNK: usize = 800;

/// Mnemonics the reference toolchain assembles position-dependently.
const AARCH64_BLACKLIST: &[&str] = &["adrp"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceTarget {
    Aarch64,
    Rv32,
    Rv64,
}

impl SourceTarget {
    fn file_name(self, index: usize) -> String {
        match self {
            SourceTarget::Aarch64 => format!("aarch64_tests_{index}.rs.gen"),
            SourceTarget::Rv32 => format!("riscv32_tests_{index}.rs.gen"),
            SourceTarget::Rv64 => format!("riscv64_tests_{index}.rs.gen"),
        }
    }

    fn blacklist(self) -> &'static [&'static str] {
        match self {
            SourceTarget::Aarch64 => AARCH64_BLACKLIST,
            SourceTarget::Rv32 | SourceTarget::Rv64 => &[],
        }
    }
}

/// A case line after the reference toolchain appended its bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledCase {
    pub internal: String,
    pub reference: String,
    pub extensions: Option<String>,
    /// Lowercase or uppercase hex digits, two per byte, in memory order.
    pub bytes: String,
}

/// Parses `internal\treference[\textensions]\tbytes` lines. Lines with another shape are reported
/// and skipped.
pub fn parse_compiled_cases(text: &str, path: &Path, diagnostics: &mut Vec<Diagnostic>) -> Vec<CompiledCase> {
    let mut cases = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let case = match fields.as_slice() {
            [internal, reference, bytes] => CompiledCase {
                internal: internal.to_string(),
                reference: reference.to_string(),
                extensions: None,
                bytes: bytes.to_string(),
            },
            [internal, reference, extensions, bytes] => CompiledCase {
                internal: internal.to_string(),
                reference: reference.to_string(),
                extensions: Some(extensions.to_string()),
                bytes: bytes.to_string(),
            },
            _ => {
                diagnostics.push(Diagnostic::warning(
                    DiagnosticPhase::TestGeneration,
                    "testgen.malformed-case",
                    format!("expected 3 or 4 tab-separated fields, found {}", fields.len()),
                    Some(SourceSpan::point(path.to_path_buf(), SourcePosition::new(number + 1, 1))),
                ));
                continue;
            }
        };
        if case.bytes.len() % 2 != 0 || !case.bytes.chars().all(|ch| ch.is_ascii_hexdigit()) {
            diagnostics.push(Diagnostic::warning(
                DiagnosticPhase::TestGeneration,
                "testgen.malformed-case",
                format!("'{}' is not a hex byte string", case.bytes),
                Some(SourceSpan::point(path.to_path_buf(), SourcePosition::new(number + 1, 1))),
            ));
            continue;
        }
        cases.push(case);
    }
    cases
}

/// `d503201f` becomes `D5, 03, 20, 1F`.
fn byte_list(bytes: &str) -> String {
    bytes
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

fn test_name(internal: &str) -> String {
    internal
        .split(' ')
        .next()
        .unwrap_or_default()
        .replace('.', "_")
        .to_lowercase()
}

/// One `#[test]` asserting that the internal form assembles to the reference bytes.
pub fn test_function(target: SourceTarget, case: &CompiledCase, index: usize) -> String {
    let name = test_name(&case.internal);
    let expected = byte_list(&case.bytes);
    let message = case.internal.replace('{', "{{").replace('}', "}}");
    let (assembler, directives, finalize) = match target {
        SourceTarget::Aarch64 => (
            "dynasmrt::aarch64::Assembler::new().unwrap()",
            "        ; .arch aarch64\n".to_string(),
            "ops.finalize().unwrap()",
        ),
        SourceTarget::Rv32 | SourceTarget::Rv64 => {
            let bits = if target == SourceTarget::Rv32 { 32 } else { 64 };
            let feature = case.extensions.as_deref().unwrap_or_default();
            (
                "dynasmrt::SimpleAssembler::new()",
                format!("        ; .arch riscv{bits}\n        ; .feature {feature}\n"),
                "ops.finalize()",
            )
        }
    };

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "#[test]");
    let _ = writeln!(out, "fn {name}_{index}() {{");
    let _ = writeln!(out, "    let mut ops = {assembler};");
    let _ = writeln!(out, "    dynasm!(ops");
    out.push_str(&directives);
    let _ = writeln!(out, "        ; {}", case.internal);
    let _ = writeln!(out, "    );");
    let _ = writeln!(out, "    let buf = {finalize};");
    let _ = writeln!(out, "    let hex: Vec<String> = buf.iter().map(|x| format!(\"{{:02X}}\", *x)).collect();");
    let _ = writeln!(out, "    let hex = hex.join(\", \");");
    let _ = writeln!(out, "    assert_eq!(hex, \"{expected}\", \"{message}\");");
    let _ = writeln!(out, "}}");
    out
}

/// Writes the test functions into numbered files of at most [`CHUNK`] cases each. Case numbers
/// keep counting across files; blacklisted cases leave a gap.
pub fn write_sources(target: SourceTarget, cases: &[CompiledCase], dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (chunk_index, chunk) in cases.chunks(CHUNK).enumerate() {
        let mut text = String::new();
        for (offset, case) in chunk.iter().enumerate() {
            let name = test_name(&case.internal);
            if target.blacklist().contains(&name.as_str()) {
                continue;
            }
            text.push_str(&test_function(target, case, chunk_index * CHUNK + offset));
        }
        let path = dir.join(target.file_name(chunk_index));
        write_if_changed(&path, &text)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(internal: &str, extensions: Option<&str>, bytes: &str) -> CompiledCase {
        CompiledCase {
            internal: internal.into(),
            reference: internal.into(),
            extensions: extensions.map(String::from),
            bytes: bytes.into(),
        }
    }

    #[test]
    fn parses_three_and_four_field_lines() {
        let text = "nop\tnop\t1f2003d5\nadd x1, x2, x3\tadd x1, x2, x3\ti\tb3003100\nbroken line\n";
        let mut diagnostics = Vec::new();
        let cases = parse_compiled_cases(text, Path::new("cases.txt"), &mut diagnostics);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].extensions, None);
        assert_eq!(cases[1].extensions.as_deref(), Some("i"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span.as_ref().map(|span| span.start.line), Some(3));
    }

    #[test]
    fn aarch64_test_function() {
        let text = test_function(SourceTarget::Aarch64, &case("ld1 {v1.B16 * 2}, [x0]", None, "20a0404c"), 7);
        assert!(text.contains("fn ld1_7() {"));
        assert!(text.contains("dynasmrt::aarch64::Assembler::new().unwrap()"));
        assert!(text.contains("        ; .arch aarch64\n        ; ld1 {v1.B16 * 2}, [x0]\n"));
        assert!(text.contains("assert_eq!(hex, \"20, A0, 40, 4C\", \"ld1 {{v1.B16 * 2}}, [x0]\");"));
        assert!(text.contains("let buf = ops.finalize().unwrap();"));
    }

    #[test]
    fn riscv_test_function() {
        let text = test_function(SourceTarget::Rv64, &case("C.ADDI x1, 3", Some("c"), "8d00"), 0);
        assert!(text.contains("fn c_addi_0() {"));
        assert!(text.contains("dynasmrt::SimpleAssembler::new()"));
        assert!(text.contains("        ; .arch riscv64\n        ; .feature c\n"));
        assert!(text.contains("let buf = ops.finalize();"));
    }

    #[test]
    fn chunks_and_blacklist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut cases: Vec<CompiledCase> = (0..CHUNK + 1).map(|_| case("nop", None, "1f2003d5")).collect();
        cases[1] = case("adrp x0, 4096", None, "00000090");
        let written = write_sources(SourceTarget::Aarch64, &cases, dir.path()).expect("write");
        assert_eq!(written.len(), 2);
        assert!(written[1].ends_with("aarch64_tests_1.rs.gen"));
        let first = std::fs::read_to_string(&written[0]).expect("read");
        assert_eq!(first.matches("#[test]").count(), CHUNK - 1);
        assert!(!first.contains("adrp"));
        let second = std::fs::read_to_string(&written[1]).expect("read");
        assert!(second.contains(&format!("fn nop_{CHUNK}()")));
    }
}
