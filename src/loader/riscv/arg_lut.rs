//! Bit bounds of every named operand field, read from the `arg_lut.csv` table.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase, SourcePosition, SourceSpan};
use crate::isa::error::BuildError;
use crate::isa::field::Field;

/// Parts of the `mop` hint encodings that the table only declares as a whole.
const SPLIT_MOP_FIELDS: &[(&str, u8, u8)] = &[
    ("mop_r_t_30", 30, 30),
    ("mop_r_t_27_26", 27, 26),
    ("mop_r_t_21_20", 21, 20),
    ("mop_rr_t_30", 30, 30),
    ("mop_rr_t_27_26", 27, 26),
    ("c_mop_t", 10, 8),
];

#[derive(Clone, Debug, Default)]
pub struct ArgLut {
    bounds: AHashMap<String, (u8, u8)>,
}

impl ArgLut {
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let src = fs::read_to_string(path)?;
        Self::parse(&src, path)
    }

    /// Parses `name, top, bottom` rows. Names may be quoted.
    pub fn parse(src: &str, path: &Path) -> Result<Self, BuildError> {
        let mut bounds = AHashMap::new();
        let mut diagnostics = Vec::new();
        for (index, line) in src.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split(',').map(|cell| cell.trim().trim_matches('"')).collect();
            let parsed = match cells.as_slice() {
                [name, top, bottom, ..] => top
                    .parse::<u8>()
                    .ok()
                    .zip(bottom.parse::<u8>().ok())
                    .filter(|(top, bottom)| top >= bottom && *top < 32)
                    .map(|bounds| (name.to_string(), bounds)),
                _ => None,
            };
            match parsed {
                Some((name, range)) => {
                    bounds.insert(name, range);
                }
                None => diagnostics.push(Diagnostic::error(
                    DiagnosticPhase::Parser,
                    "riscv.arg-lut.row",
                    format!("malformed field bound row '{line}'"),
                    Some(SourceSpan::point(path.to_path_buf(), SourcePosition::new(index + 1, 1))),
                )),
            }
        }
        if !diagnostics.is_empty() {
            return Err(BuildError::Diagnostics {
                phase: DiagnosticPhase::Parser,
                diagnostics,
            });
        }
        for (name, top, bottom) in SPLIT_MOP_FIELDS {
            bounds.insert(name.to_string(), (*top, *bottom));
        }
        Ok(Self { bounds })
    }

    /// `(top, bottom)` of a field, looked up by its base name.
    pub fn bounds(&self, name: &str) -> Option<(u8, u8)> {
        self.bounds.get(name).copied()
    }

    /// The field a declared name refers to. `rs2=rs1` keeps its full name but takes the bounds
    /// of `rs2`.
    pub fn field(&self, declared: &str) -> Option<Field> {
        let base = declared.split('=').next().unwrap_or(declared);
        let (top, bottom) = self.bounds(base)?;
        Some(Field::new(declared, top - bottom + 1, bottom))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const LUT: &str = "\"rd\", 11, 7\n\"rs1\", 19, 15\n\"rs2\",24,20\n\"imm12\", 31, 20\n\"aq\", 26, 26\n";

    #[test]
    fn parses_quoted_rows_and_adds_mop_parts() {
        let lut = ArgLut::parse(LUT, Path::new("arg_lut.csv")).expect("parse");
        assert_eq!(lut.bounds("imm12"), Some((31, 20)));
        assert_eq!(lut.bounds("aq"), Some((26, 26)));
        assert_eq!(lut.bounds("c_mop_t"), Some((10, 8)));
        assert_eq!(lut.bounds("bogus"), None);
    }

    #[test]
    fn aliased_fields_take_base_bounds() {
        let lut = ArgLut::parse(LUT, Path::new("arg_lut.csv")).expect("parse");
        let field = lut.field("rs2=rs1").expect("field");
        assert_eq!(field, Field::new("rs2=rs1", 5, 20));
    }

    #[test]
    fn rejects_malformed_rows() {
        let err = ArgLut::parse("rd, 7, 11\n", Path::new("arg_lut.csv")).expect_err("inverted");
        assert!(matches!(err, BuildError::Diagnostics { ref diagnostics, .. } if diagnostics.len() == 1));
        assert!(ArgLut::parse("rd\n", Path::new("arg_lut.csv")).is_err());
    }
}
