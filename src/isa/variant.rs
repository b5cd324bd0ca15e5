use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::isa::error::BuildError;
use crate::isa::field::{Field, FieldList};
use crate::isa::template::BitTemplate;

bitflags! {
    /// RISC-V base widths a row is valid for.
    #[derive(Default, Debug, PartialEq, Eq, Hash, Copy, Clone)]
    pub struct IsaFlags: u8 {
        const RV32 = 0b01;
        const RV64 = 0b10;
    }
}

impl fmt::Display for IsaFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rv32 = self.contains(IsaFlags::RV32);
        let rv64 = self.contains(IsaFlags::RV64);
        match (rv32, rv64) {
            (true, true) => f.write_str("RV32 | RV64"),
            (true, false) => f.write_str("RV32"),
            (false, true) => f.write_str("RV64"),
            (false, false) => f.write_str("0"),
        }
    }
}

/// Instruction class used to filter records and to pick catalog sources.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InstrClass {
    General,
    System,
    Float,
    Fpsimd,
    Advsimd,
    Sve,
    Other(String),
}

impl InstrClass {
    pub fn as_str(&self) -> &str {
        match self {
            InstrClass::General => "general",
            InstrClass::System => "system",
            InstrClass::Float => "float",
            InstrClass::Fpsimd => "fpsimd",
            InstrClass::Advsimd => "advsimd",
            InstrClass::Sve => "sve",
            InstrClass::Other(name) => name,
        }
    }
}

impl FromStr for InstrClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "general" => InstrClass::General,
            "system" => InstrClass::System,
            "float" => InstrClass::Float,
            "fpsimd" => InstrClass::Fpsimd,
            "advsimd" => InstrClass::Advsimd,
            "sve" => InstrClass::Sve,
            other => InstrClass::Other(other.to_string()),
        })
    }
}

impl fmt::Display for InstrClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architecture-specific tags carried from ingestion to emission.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArchTag {
    Aarch64 {
        /// Minimum architecture revision (`ARMv8.2`), if the record declares one.
        variant: Option<String>,
    },
    Riscv {
        isa: IsaFlags,
        /// Alternative extension labels; each label may join several extensions with `_`.
        extensions: Vec<String>,
        /// `(extension, instruction)` this record is a subformat of.
        parent: Option<(String, String)>,
    },
}

impl ArchTag {
    pub fn riscv_extensions(&self) -> &[String] {
        match self {
            ArchTag::Riscv { extensions, .. } => extensions,
            ArchTag::Aarch64 { .. } => &[],
        }
    }
}

/// One concrete instruction encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalVariant {
    pub mnemonic: String,
    /// Human-readable instruction name used for `names` disambiguation and emission comments.
    pub title: String,
    pub operand_template: String,
    pub fields: FieldList,
    pub bits: BitTemplate,
    pub arch: ArchTag,
    pub class: InstrClass,
}

impl CanonicalVariant {
    /// Checks the field invariants: every field fits the word and no two fields overlap.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.fields
            .check_disjoint(self.bits.width())
            .map_err(|detail| BuildError::OverlappingEncoding {
                mnemonic: self.mnemonic.clone(),
                detail,
            })
    }

    /// Like [`validate`](Self::validate), additionally requiring that no field covers a fixed bit.
    pub fn validate_strict(&self) -> Result<(), BuildError> {
        self.validate()?;
        let clash = self.fields.mask() & self.bits.fixed_mask();
        if clash != 0 {
            let field = self
                .fields
                .iter()
                .find(|field| field.mask() & clash != 0)
                .map(Field::to_string)
                .unwrap_or_default();
            return Err(BuildError::OverlappingEncoding {
                mnemonic: self.mnemonic.clone(),
                detail: format!("field {field} overlaps fixed bits {}", self.bits),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::field::Field;

    fn variant(fields: FieldList, bits: BitTemplate) -> CanonicalVariant {
        CanonicalVariant {
            mnemonic: "TEST".into(),
            title: "TEST".into(),
            operand_template: String::new(),
            fields,
            bits,
            arch: ArchTag::Aarch64 { variant: None },
            class: InstrClass::General,
        }
    }

    #[test]
    fn strict_validation_rejects_field_over_fixed_bits() {
        let fields = FieldList::from_fields([Field::new("Rd", 5, 0)]);
        let loose = variant(fields.clone(), BitTemplate::from_parts(32, 0x1, 0x1));
        assert!(loose.validate().is_ok());
        let err = loose.validate_strict().expect_err("overlap");
        assert!(matches!(err, BuildError::OverlappingEncoding { .. }));

        let clean = variant(fields, BitTemplate::from_parts(32, !0x1F, 0));
        clean.validate_strict().expect("disjoint");
    }

    #[test]
    fn isa_flags_render_like_table_rows() {
        assert_eq!((IsaFlags::RV32 | IsaFlags::RV64).to_string(), "RV32 | RV64");
        assert_eq!(IsaFlags::RV64.to_string(), "RV64");
    }

    #[test]
    fn classes_round_trip_through_names() {
        for name in ["general", "system", "float", "fpsimd", "advsimd", "sve", "sme"] {
            let class: InstrClass = name.parse().expect("infallible");
            assert_eq!(class.as_str(), name);
        }
    }
}
