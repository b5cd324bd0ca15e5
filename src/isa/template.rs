//! Fixed-width instruction words with every bit marked fixed-0, fixed-1, or variable.

use std::fmt;

use crate::isa::field::mask_for_width;

/// State of one template bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trit {
    Zero,
    One,
    Variable,
}

/// Instruction word template. Bits outside `fixed_mask` are variable; `fixed_bits` never has
/// bits set outside `fixed_mask`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitTemplate {
    width: u8,
    fixed_mask: u32,
    fixed_bits: u32,
}

/// A pin that disagrees with a bit that is already fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConflict {
    pub bit: u8,
}

impl BitTemplate {
    /// All-variable template of the given word width.
    pub fn variable(width: u8) -> Self {
        Self {
            width,
            fixed_mask: 0,
            fixed_bits: 0,
        }
    }

    pub fn from_parts(width: u8, fixed_mask: u32, fixed_bits: u32) -> Self {
        let word = mask_for_width(width);
        let fixed_mask = fixed_mask & word;
        Self {
            width,
            fixed_mask,
            fixed_bits: fixed_bits & fixed_mask,
        }
    }

    /// Parses an MSB-first pattern such as `0x10111100000xxx10x001xxxxxxxxxx`. Any character
    /// other than `0` or `1` marks a variable bit.
    pub fn parse(pattern: &str) -> Option<Self> {
        let width = pattern.chars().count();
        if width != 16 && width != 32 {
            return None;
        }
        let mut template = Self::variable(width as u8);
        for (index, ch) in pattern.chars().enumerate() {
            let bit = (width - 1 - index) as u8;
            match ch {
                '0' => template.set(bit, Trit::Zero),
                '1' => template.set(bit, Trit::One),
                _ => {}
            }
        }
        Some(template)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn fixed_mask(&self) -> u32 {
        self.fixed_mask
    }

    pub fn fixed_bits(&self) -> u32 {
        self.fixed_bits
    }

    pub fn variable_mask(&self) -> u32 {
        mask_for_width(self.width) & !self.fixed_mask
    }

    pub fn get(&self, bit: u8) -> Trit {
        let mask = 1u32 << bit;
        if self.fixed_mask & mask == 0 {
            Trit::Variable
        } else if self.fixed_bits & mask != 0 {
            Trit::One
        } else {
            Trit::Zero
        }
    }

    /// Overwrites a single bit.
    pub fn set(&mut self, bit: u8, value: Trit) {
        let mask = 1u32 << bit;
        match value {
            Trit::Zero => {
                self.fixed_mask |= mask;
                self.fixed_bits &= !mask;
            }
            Trit::One => {
                self.fixed_mask |= mask;
                self.fixed_bits |= mask;
            }
            Trit::Variable => {
                self.fixed_mask &= !mask;
                self.fixed_bits &= !mask;
            }
        }
    }

    /// Fixes `width` bits starting at `offset` to `value`. Pinning a bit to the value it already
    /// holds is a no-op; pinning it to the opposite value is rejected without modifying `self`.
    /// A range reaching past the word is rejected at its first out-of-word bit.
    pub fn pin(&mut self, offset: u8, width: u8, value: u32) -> Result<(), PinConflict> {
        if u16::from(offset) + u16::from(width) > u16::from(self.width) {
            return Err(PinConflict {
                bit: offset.max(self.width),
            });
        }
        let mask = mask_for_width(width) << offset;
        let bits = (value << offset) & mask;
        let clash = self.fixed_mask & mask & (self.fixed_bits ^ bits);
        if clash != 0 {
            return Err(PinConflict {
                bit: clash.trailing_zeros() as u8,
            });
        }
        self.fixed_mask |= mask;
        self.fixed_bits = (self.fixed_bits & !mask) | bits;
        Ok(())
    }

    /// Positions where both templates are fixed but hold different values.
    pub fn fixed_difference(&self, other: &BitTemplate) -> u32 {
        self.fixed_mask & other.fixed_mask & (self.fixed_bits ^ other.fixed_bits)
    }

    /// MSB-first pattern with `x` for variable bits.
    pub fn pattern(&self) -> String {
        (0..self.width)
            .rev()
            .map(|bit| match self.get(bit) {
                Trit::Zero => '0',
                Trit::One => '1',
                Trit::Variable => 'x',
            })
            .collect()
    }

    /// Binary literal with variable bits rendered as zero and `_` at every byte boundary.
    pub fn binary_literal(&self) -> String {
        let mut out = String::from("0b");
        for bit in (0..self.width).rev() {
            out.push(if self.fixed_bits & (1 << bit) != 0 { '1' } else { '0' });
            if bit != 0 && bit % 8 == 0 {
                out.push('_');
            }
        }
        out
    }
}

impl fmt::Display for BitTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_msb_first_pattern() {
        let template = BitTemplate::parse("0x10111100000xxx10x001xxxxxxxxxx").expect("pattern");
        assert_eq!(template.width(), 32);
        assert_eq!(template.get(31), Trit::Zero);
        assert_eq!(template.get(30), Trit::Variable);
        assert_eq!(template.get(29), Trit::One);
        assert_eq!(template.pattern(), "0x10111100000xxx10x001xxxxxxxxxx");
        assert!(BitTemplate::parse("0101").is_none());
    }

    #[test]
    fn renders_binary_literal_with_byte_separators() {
        let template = BitTemplate::from_parts(32, 0xFF00_00FF, 0x0B00_0001);
        assert_eq!(
            template.binary_literal(),
            "0b00001011_00000000_00000000_00000001"
        );
        let compressed = BitTemplate::from_parts(16, 0xE003, 0x0001);
        assert_eq!(compressed.binary_literal(), "0b00000000_00000001");
    }

    #[test]
    fn pin_same_value_is_noop_and_conflict_is_rejected() {
        let mut template = BitTemplate::parse("0000000000000000000000000000xx11").expect("pattern");
        let before = template;
        template.pin(0, 2, 0b11).expect("same value");
        assert_eq!(template, before);

        let err = template.pin(0, 2, 0b01).expect_err("conflict");
        assert_eq!(err.bit, 1);
        assert_eq!(template, before);

        template.pin(2, 2, 0b10).expect("variable bits");
        assert_eq!(template.get(3), Trit::One);
        assert_eq!(template.get(2), Trit::Zero);
    }

    #[test]
    fn pin_outside_the_word_is_rejected() {
        let mut template = BitTemplate::variable(16);
        assert_eq!(template.pin(14, 4, 0), Err(PinConflict { bit: 16 }));
        assert_eq!(template.pin(40, 1, 1), Err(PinConflict { bit: 40 }));
        assert_eq!(template, BitTemplate::variable(16));

        let mut word = BitTemplate::variable(32);
        assert_eq!(word.pin(32, 1, 1), Err(PinConflict { bit: 32 }));
        word.pin(28, 4, 0b1010).expect("top nibble");
        assert_eq!(word.fixed_bits(), 0xA000_0000);
    }

    #[test]
    fn reports_fixed_difference() {
        let narrow = BitTemplate::parse("0xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx").expect("pattern");
        let wide = BitTemplate::parse("1xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx").expect("pattern");
        assert_eq!(narrow.fixed_difference(&wide), 1 << 31);
    }
}
