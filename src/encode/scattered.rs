//! Known shapes of immediates whose bits are declared across several fields.
//!
//! Each shape names the co-occurring field set it applies to and how the logical value's bits
//! land in those fields. Anything not listed here is rejected at build time.

use crate::encode::command::{Command, Relocation};
use crate::isa::field::Field;

/// Where a slice of the logical value goes, relative to the bottom bit of one part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// `width` value bits starting at bit `from`, contiguous.
    Range { part: usize, width: u8, from: u8 },
    /// One value bit per template bit, listed most significant template bit first.
    Bits { part: usize, bits: &'static [u8] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeEncoding {
    Immediate {
        /// Logical width including the scale bits.
        bits: u8,
        /// Number of low bits that must be zero.
        scale: u8,
        signed: bool,
        nonzero: bool,
        placements: &'static [Placement],
    },
    Offset(Relocation),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScatteredShape {
    pub parts: &'static [&'static str],
    pub encoding: ShapeEncoding,
}

const fn imm(
    parts: &'static [&'static str],
    bits: u8,
    scale: u8,
    signed: bool,
    nonzero: bool,
    placements: &'static [Placement],
) -> ScatteredShape {
    ScatteredShape {
        parts,
        encoding: ShapeEncoding::Immediate {
            bits,
            scale,
            signed,
            nonzero,
            placements,
        },
    }
}

const fn range(part: usize, width: u8, from: u8) -> Placement {
    Placement::Range { part, width, from }
}

const fn bits(part: usize, bits: &'static [u8]) -> Placement {
    Placement::Bits { part, bits }
}

pub const SHAPES: &[ScatteredShape] = &[
    imm(&["c_nzimm6lo", "c_nzimm6hi"], 6, 0, true, true, &[range(0, 5, 0), range(1, 1, 5)]),
    imm(&["c_nzimm10lo", "c_nzimm10hi"], 10, 4, true, true, &[bits(0, &[4, 6, 8, 7, 5]), range(1, 1, 9)]),
    imm(&["c_imm6lo", "c_imm6hi"], 6, 0, true, false, &[range(0, 5, 0), range(1, 1, 5)]),
    imm(&["c_bimm9lo", "c_bimm9hi"], 9, 1, true, false, &[bits(0, &[7, 6, 2, 1, 5]), bits(1, &[8, 4, 3])]),
    imm(&["c_nzimm18lo", "c_nzimm18hi"], 18, 12, true, true, &[range(0, 5, 12), range(1, 1, 17)]),
    imm(&["c_uimm7lo", "c_uimm7hi"], 7, 2, false, false, &[bits(0, &[2, 6]), range(1, 3, 3)]),
    imm(&["c_uimm8splo", "c_uimm8sphi"], 8, 2, false, false, &[bits(0, &[4, 3, 2, 7, 6]), range(1, 1, 5)]),
    imm(&["c_nzuimm6lo", "c_nzuimm6hi"], 6, 0, false, true, &[range(0, 5, 0), range(1, 1, 5)]),
    imm(&["c_nzuimm6lo"], 5, 0, false, true, &[range(0, 5, 0)]),
    imm(&["c_uimm8lo", "c_uimm8hi"], 8, 3, false, false, &[range(0, 2, 6), range(1, 3, 3)]),
    imm(&["c_uimm9splo", "c_uimm9sphi"], 9, 3, false, false, &[bits(0, &[4, 3, 8, 7, 6]), range(1, 1, 5)]),
    imm(&["imm12lo", "imm12hi"], 12, 0, true, false, &[range(0, 5, 0), range(1, 7, 5)]),
    imm(&["imm12hi"], 12, 5, true, false, &[range(0, 7, 5)]),
    ScatteredShape {
        parts: &["bimm12lo", "bimm12hi"],
        encoding: ShapeEncoding::Offset(Relocation::RvBranch),
    },
    imm(&["mop_rr_t_27_26", "mop_rr_t_30"], 3, 0, false, false, &[range(0, 2, 0), range(1, 1, 2)]),
    imm(
        &["mop_r_t_21_20", "mop_r_t_27_26", "mop_r_t_30"],
        5,
        0,
        false,
        false,
        &[range(0, 2, 0), range(1, 2, 2), range(2, 1, 4)],
    ),
];

/// Whether a field name is one part of a scattered immediate.
pub fn is_part(name: &str) -> bool {
    SHAPES.iter().any(|shape| shape.parts.contains(&name))
}

/// Finds the shape whose part set equals `names`, in any order.
pub fn find_shape(names: &[&str]) -> Option<&'static ScatteredShape> {
    SHAPES.iter().find(|shape| {
        shape.parts.len() == names.len() && shape.parts.iter().all(|part| names.contains(part))
    })
}

impl ScatteredShape {
    /// Encoder commands for this shape, given the declared fields of its parts.
    pub fn commands(&self, fields: &[&Field]) -> Option<Vec<Command>> {
        let offsets = self.part_offsets(fields)?;
        let ShapeEncoding::Immediate {
            bits,
            scale,
            signed,
            nonzero,
            placements,
        } = self.encoding
        else {
            if let ShapeEncoding::Offset(relocation) = self.encoding {
                return Some(vec![Command::Offset(relocation)]);
            }
            return None;
        };

        let mut commands = vec![match (signed, nonzero) {
            (false, false) => Command::UImm(bits, scale),
            (false, true) => Command::UImmNo0(bits, scale),
            (true, false) => Command::SImm(bits, scale),
            (true, true) => Command::SImmNo0(bits, scale),
        }];
        for placement in placements {
            commands.push(match *placement {
                Placement::Range { part, width, from } => Command::BitRange(offsets[part], width, from),
                Placement::Bits { part, bits } => Command::Bits(offsets[part], bits.to_vec()),
            });
        }
        commands.push(Command::Next);
        Some(commands)
    }

    /// `(logical bit, template bit)` for every bit the shape writes.
    pub fn bit_map(&self, fields: &[&Field]) -> Vec<(u8, u8)> {
        let Some(offsets) = self.part_offsets(fields) else {
            return Vec::new();
        };
        let ShapeEncoding::Immediate { placements, .. } = self.encoding else {
            return Vec::new();
        };
        let mut map = Vec::new();
        for placement in placements {
            match *placement {
                Placement::Range { part, width, from } => {
                    map.extend((0..width).map(|i| (from + i, offsets[part] + i)));
                }
                Placement::Bits { part, bits } => {
                    map.extend(
                        bits.iter()
                            .rev()
                            .enumerate()
                            .map(|(i, bit)| (*bit, offsets[part] + i as u8)),
                    );
                }
            }
        }
        map
    }

    fn part_offsets(&self, fields: &[&Field]) -> Option<Vec<u8>> {
        self.parts
            .iter()
            .map(|part| {
                fields
                    .iter()
                    .find(|field| field.name == *part)
                    .map(|field| field.offset)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::interp::{EncodeOptions, Operand, encode};
    use proptest::prelude::*;

    fn part_widths(shape: &ScatteredShape) -> Vec<u8> {
        let ShapeEncoding::Immediate { placements, .. } = shape.encoding else {
            return Vec::new();
        };
        (0..shape.parts.len())
            .map(|part| {
                placements
                    .iter()
                    .map(|placement| match *placement {
                        Placement::Range { part: p, width, .. } if p == part => width,
                        Placement::Bits { part: p, bits } if p == part => bits.len() as u8,
                        _ => 0,
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn every_shape_places_each_logical_bit_once() {
        for shape in SHAPES {
            let ShapeEncoding::Immediate { bits, scale, .. } = shape.encoding else {
                continue;
            };
            // lay the parts out back to back so template bits never collide
            let widths = part_widths(shape);
            let mut offset = 0;
            let fields: Vec<Field> = shape
                .parts
                .iter()
                .zip(&widths)
                .map(|(name, width)| {
                    let field = Field::new(*name, *width, offset);
                    offset += width;
                    field
                })
                .collect();
            let refs: Vec<&Field> = fields.iter().collect();
            let mut logical: Vec<u8> = shape.bit_map(&refs).into_iter().map(|(bit, _)| bit).collect();
            logical.sort_unstable();
            let expected: Vec<u8> = (scale..bits).collect();
            assert_eq!(logical, expected, "{:?}", shape.parts);
        }
    }

    #[test]
    fn finds_shapes_regardless_of_declaration_order() {
        assert!(find_shape(&["imm12hi", "imm12lo"]).is_some());
        assert!(find_shape(&["imm12hi"]).is_some());
        assert!(find_shape(&["imm12lo"]).is_none());
        assert!(find_shape(&["c_nzimm6lo", "c_imm6hi"]).is_none());
        assert!(is_part("mop_r_t_30"));
        assert!(!is_part("rd"));
    }

    #[test]
    fn store_word_split_immediate() {
        // sw x2, -4(x1): imm[11:5] at 25, imm[4:0] at 7
        let lo = Field::new("imm12lo", 5, 7);
        let hi = Field::new("imm12hi", 7, 25);
        let shape = find_shape(&["imm12hi", "imm12lo"]).expect("shape");
        let commands = shape.commands(&[&hi, &lo]).expect("commands");
        let word = encode(0, &commands, &[Operand::Immediate(-4)], &EncodeOptions::default());
        assert_eq!(word, Ok((0x7F << 25) | (0x1C << 7)));
    }

    #[test]
    fn branch_parts_become_a_relocation() {
        let lo = Field::new("bimm12lo", 5, 7);
        let hi = Field::new("bimm12hi", 7, 25);
        let shape = find_shape(&["bimm12lo", "bimm12hi"]).expect("shape");
        assert_eq!(
            shape.commands(&[&lo, &hi]),
            Some(vec![Command::Offset(Relocation::RvBranch)])
        );
    }

    proptest! {
        #[test]
        fn store_offsets_reassemble(value in -2048i64..2048) {
            let lo = Field::new("imm12lo", 5, 7);
            let hi = Field::new("imm12hi", 7, 25);
            let shape = find_shape(&["imm12lo", "imm12hi"]).expect("shape");
            let commands = shape.commands(&[&lo, &hi]).expect("commands");
            let word = encode(0, &commands, &[Operand::Immediate(value)], &EncodeOptions::default())
                .expect("encode");
            let raw = ((word >> 25) << 5) | ((word >> 7) & 0x1F);
            prop_assert_eq!(i64::from(((raw << 20) as i32) >> 20), value);
        }
    }
}
