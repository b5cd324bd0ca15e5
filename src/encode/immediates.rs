//! Encoders for AArch64 immediates that are not plain bit ranges.

/// Encodes a bitmask immediate as `N:immr:imms` (13 bits, `imms` lowest). `reg_size` is 32 or 64.
pub fn encode_logical_immediate(value: u64, reg_size: u32) -> Option<u32> {
    let reg_mask = if reg_size == 64 {
        u64::MAX
    } else {
        (1u64 << reg_size) - 1
    };
    if value == 0 || value & !reg_mask != 0 || value == reg_mask {
        return None;
    }

    // smallest element that repeats across the register
    let mut size = reg_size;
    loop {
        size /= 2;
        let mask = (1u64 << size) - 1;
        if (value & mask) != ((value >> size) & mask) {
            size *= 2;
            break;
        }
        if size <= 2 {
            break;
        }
    }

    let mask = u64::MAX >> (64 - size);
    let mut element = value & mask;
    let (rotation, ones) = if is_shifted_mask(element) {
        let rotation = element.trailing_zeros();
        (rotation, (element >> rotation).trailing_ones())
    } else {
        element |= !mask;
        if !is_shifted_mask(!element) {
            return None;
        }
        let leading = element.leading_ones();
        (64 - leading, leading + element.trailing_ones() - (64 - size))
    };

    let immr = (size - rotation) & (size - 1);
    let nimms = (!(size - 1) << 1) | (ones - 1);
    let n = ((nimms >> 6) & 1) ^ 1;
    let imms = nimms & 0x3F;
    Some((n << 12) | (immr << 6) | imms)
}

fn is_mask(value: u64) -> bool {
    value != 0 && (value.wrapping_add(1) & value) == 0
}

fn is_shifted_mask(value: u64) -> bool {
    value != 0 && is_mask((value - 1) | value)
}

/// Encodes a value that is one 16-bit chunk at a 16-bit aligned position as `hw:imm16`.
pub fn encode_wide_immediate(value: u64, reg_size: u32) -> Option<u32> {
    if reg_size == 32 && value > u64::from(u32::MAX) {
        return None;
    }
    let shift_mask = if reg_size == 32 { 0b10000 } else { 0b110000 };
    let shift = value.trailing_zeros() & shift_mask;
    let chunk = 0xFFFF & (value >> shift);
    if chunk << shift == value {
        Some((chunk as u32) | (shift << 12))
    } else {
        None
    }
}

/// As [`encode_wide_immediate`], for the bitwise inverse of `value` within the register.
pub fn encode_inverted_wide_immediate(value: u64, reg_size: u32) -> Option<u32> {
    let inverted = if reg_size == 32 {
        if value > u64::from(u32::MAX) {
            return None;
        }
        u64::from(!(value as u32))
    } else {
        !value
    };
    encode_wide_immediate(inverted, reg_size)
}

/// Encodes a 64-bit value whose every byte is `0x00` or `0xFF` into an 8-bit mask.
pub fn encode_stretched_immediate(value: u64) -> Option<u32> {
    let mut test = value & 0x0101_0101_0101_0101;
    test |= test << 1;
    test |= test << 2;
    test |= test << 4;
    if test != value {
        return None;
    }
    let mut masked = value & 0x8040_2010_0804_0201;
    masked |= masked >> 32;
    masked |= masked >> 16;
    masked |= masked >> 8;
    Some((masked as u32) & 0xFF)
}

/// Encodes an 8-bit floating point immediate `abcdefgh` representing `±(16 + efgh) / 16 * 2^n`.
pub fn encode_float_immediate(value: f64) -> Option<u32> {
    let single = value as f32;
    if !single.is_finite() || f64::from(single) != value {
        return None;
    }
    let bits = single.to_bits();
    let exponent_pattern = (bits >> 25) & 0x3F;
    if (exponent_pattern == 0b100000 || exponent_pattern == 0b011111) && bits & 0x7FFFF == 0 {
        Some(((bits >> 24) & 0x80) | ((bits >> 19) & 0x7F))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(encoded: u32) -> (u32, u32, u32) {
        (encoded >> 12, (encoded >> 6) & 0x3F, encoded & 0x3F)
    }

    #[test]
    fn logical_immediate_single_bit() {
        // and w0, w1, #1
        assert_eq!(encode_logical_immediate(1, 32).map(fields), Some((0, 0, 0)));
    }

    #[test]
    fn logical_immediate_repeating_patterns() {
        // orr w0, wzr, #0x55555555 encodes imms = 0b111100
        assert_eq!(
            encode_logical_immediate(0x5555_5555, 32).map(fields),
            Some((0, 0, 0b111100))
        );
        // 0xff00 as a 64-bit element: N = 1, eight ones rotated right by 56
        assert_eq!(
            encode_logical_immediate(0xFF00, 64).map(fields),
            Some((1, 56, 7))
        );
        // wrap-around run: 0x8000_0001 is two ones rotated right by one
        assert_eq!(
            encode_logical_immediate(0x8000_0001, 32).map(fields),
            Some((0, 1, 1))
        );
    }

    #[test]
    fn logical_immediate_rejects_unencodable() {
        assert_eq!(encode_logical_immediate(0, 64), None);
        assert_eq!(encode_logical_immediate(u64::MAX, 64), None);
        assert_eq!(encode_logical_immediate(0xFFFF_FFFF, 32), None);
        assert_eq!(encode_logical_immediate(0b1011, 32), None);
        assert_eq!(encode_logical_immediate(1 << 40, 32), None);
    }

    #[test]
    fn wide_immediates() {
        assert_eq!(encode_wide_immediate(0x1234, 64), Some(0x1234));
        assert_eq!(encode_wide_immediate(0x1234_0000, 32), Some(0x1234 | (1 << 16)));
        assert_eq!(
            encode_wide_immediate(0xBEEF_0000_0000_0000, 64),
            Some(0xBEEF | (3 << 16))
        );
        assert_eq!(encode_wide_immediate(0x1_0001, 64), None);
        assert_eq!(encode_wide_immediate(0x1_0000_0000, 32), None);
        assert_eq!(encode_inverted_wide_immediate(0xFFFF_EDCB, 32), Some(0x1234));
    }

    #[test]
    fn stretched_immediate() {
        assert_eq!(encode_stretched_immediate(0xFF00_FF00_FF00_FF00), Some(0b1010_1010));
        assert_eq!(encode_stretched_immediate(0x0000_0000_0000_00FF), Some(1));
        assert_eq!(encode_stretched_immediate(0x0000_0000_0000_00F0), None);
    }

    #[test]
    fn float_immediate() {
        assert_eq!(encode_float_immediate(1.0), Some(0x70));
        assert_eq!(encode_float_immediate(-2.0), Some(0x80));
        assert_eq!(encode_float_immediate(0.125), Some(0x40));
        assert_eq!(encode_float_immediate(0.1), None);
        assert_eq!(encode_float_immediate(f64::INFINITY), None);
    }
}
