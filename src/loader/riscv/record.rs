//! Resolution of a parsed instruction line into fields and a bit template.

use crate::isa::error::BuildError;
use crate::isa::field::{FieldList, mask_for_width};
use crate::isa::template::BitTemplate;
use crate::loader::riscv::arg_lut::ArgLut;
use crate::loader::riscv::parser::RawInstruction;

/// A fully resolved encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    pub fields: FieldList,
    /// Declared field names in source order.
    pub order: Vec<String>,
    pub template: BitTemplate,
}

/// Why a line could not be resolved.
#[derive(Debug)]
pub enum ResolveError {
    /// The record is skipped with a diagnostic.
    Malformed(String),
    Fatal(BuildError),
}

impl From<BuildError> for ResolveError {
    fn from(err: BuildError) -> Self {
        ResolveError::Fatal(err)
    }
}

pub fn resolve(instruction: &RawInstruction, lut: &ArgLut) -> Result<Encoding, ResolveError> {
    let overlap = |detail: String| BuildError::OverlappingEncoding {
        mnemonic: instruction.name.clone(),
        detail,
    };

    let mut fixed_mask = 0u32;
    let mut fixed_bits = 0u32;
    for assignment in &instruction.bits {
        let width = assignment.top - assignment.bottom + 1;
        let mask = mask_for_width(width) << assignment.bottom;
        if fixed_mask & mask != 0 {
            return Err(overlap(format!(
                "bit range {}..{} assigned twice",
                assignment.top, assignment.bottom
            ))
            .into());
        }
        fixed_mask |= mask;
        fixed_bits |= assignment.value << assignment.bottom;
    }

    let mut fields = Vec::with_capacity(instruction.fields.len());
    for declared in &instruction.fields {
        let field = lut
            .field(declared)
            .ok_or_else(|| ResolveError::Malformed(format!("unknown field '{declared}'")))?;
        fields.push(field);
    }
    let fields = FieldList::from_fields(fields);
    fields.check_disjoint(32).map_err(overlap)?;
    let field_mask = fields.mask();
    if field_mask & fixed_mask != 0 {
        return Err(overlap(format!(
            "fields {:#010x} overlap fixed bits {:#010x}",
            field_mask, fixed_mask
        ))
        .into());
    }

    let width = match field_mask | fixed_mask {
        0xFFFF => 16,
        0xFFFF_FFFF => 32,
        total => {
            return Err(ResolveError::Malformed(format!(
                "bits {:#010x} are not accounted for",
                !total
            )));
        }
    };

    Ok(Encoding {
        fields,
        order: instruction.fields.clone(),
        template: BitTemplate::from_parts(width, fixed_mask, fixed_bits),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::loader::riscv::parser::BitAssignment;

    fn lut() -> ArgLut {
        let src = "rd,11,7\nrs1,19,15\nrs2,24,20\nimm12,31,20\nrd_rs1_n0,11,7\nc_nzimm6lo,6,2\nc_nzimm6hi,12,12\n";
        ArgLut::parse(src, Path::new("arg_lut.csv")).expect("lut")
    }

    fn raw(fields: &[&str], bits: &[(u8, u8, u32)]) -> RawInstruction {
        RawInstruction {
            name: "test".into(),
            fields: fields.iter().map(|name| name.to_string()).collect(),
            bits: bits
                .iter()
                .map(|&(top, bottom, value)| BitAssignment { top, bottom, value })
                .collect(),
            line: 1,
        }
    }

    #[test]
    fn resolves_full_word() {
        let addi = raw(&["rd", "rs1", "imm12"], &[(14, 12, 0), (6, 2, 4), (1, 0, 3)]);
        let encoding = resolve(&addi, &lut()).expect("resolve");
        assert_eq!(encoding.template.width(), 32);
        assert_eq!(encoding.template.fixed_bits(), 0x13);
        assert_eq!(encoding.order, vec!["rd", "rs1", "imm12"]);
        assert_eq!(encoding.fields.names(), vec!["imm12", "rs1", "rd"]);
    }

    #[test]
    fn resolves_compressed_word() {
        let addi = raw(
            &["rd_rs1_n0", "c_nzimm6lo", "c_nzimm6hi"],
            &[(15, 13, 0), (1, 0, 1)],
        );
        let encoding = resolve(&addi, &lut()).expect("resolve");
        assert_eq!(encoding.template.width(), 16);
        assert_eq!(encoding.template.fixed_bits(), 1);
    }

    #[test]
    fn incomplete_words_and_unknown_fields_are_malformed() {
        let short = raw(&["rd"], &[(6, 0, 0x13)]);
        assert!(matches!(resolve(&short, &lut()), Err(ResolveError::Malformed(_))));
        let unknown = raw(&["zz"], &[(6, 0, 0x13)]);
        assert!(matches!(resolve(&unknown, &lut()), Err(ResolveError::Malformed(msg)) if msg.contains("zz")));
    }

    #[test]
    fn overlaps_are_fatal() {
        let twice = raw(&["rd"], &[(6, 0, 0x13), (3, 2, 0)]);
        assert!(matches!(
            resolve(&twice, &lut()),
            Err(ResolveError::Fatal(BuildError::OverlappingEncoding { .. }))
        ));
        let field_over_fixed = raw(&["rd", "rs1", "imm12"], &[(14, 7, 0), (6, 0, 0x13)]);
        assert!(matches!(
            resolve(&field_over_fixed, &lut()),
            Err(ResolveError::Fatal(BuildError::OverlappingEncoding { .. }))
        ));
    }
}
