//! Seeded value sampling for operand slots.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::encode::command::SpecialComm;
use crate::encode::interp::Operand;
use crate::encode::matcher::{Modifier, RegFamily};
use crate::encode::tables::NameTable;
use crate::testgen::constraint::Constraint;

/// A concrete operand value chosen for one slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Register { family: RegFamily, index: u8 },
    /// RISC-V register list code, `4..=15`.
    SavedList(u8),
    Immediate(i64),
    /// A bit pattern, written as an unsigned number.
    Pattern(u64),
    Float(f64),
    Name(String),
    Modifier(Modifier),
    /// Part of a dropped optional suffix.
    Omitted,
}

impl Value {
    /// The operand the reference encoder receives for this value.
    pub fn operand(&self) -> Operand {
        match self {
            Value::Register { family, index } => Operand::reg(*family, *index),
            Value::SavedList(code) => Operand::RegisterList {
                first: 1,
                count: saved_registers(*code) + 1,
            },
            Value::Immediate(value) => Operand::Immediate(*value),
            Value::Pattern(bits) => Operand::Immediate(*bits as i64),
            Value::Float(value) => Operand::Float(*value),
            Value::Name(name) => Operand::Name(name.clone()),
            Value::Modifier(modifier) => Operand::Modifier(*modifier),
            Value::Omitted => Operand::Default,
        }
    }

    pub fn register_family(&self) -> Option<RegFamily> {
        match self {
            Value::Register { family, .. } => Some(*family),
            _ => None,
        }
    }
}

/// Saved `s` registers in a list code: `{ra}` is 4 and `{ra, s0-s11}` is 15.
pub fn saved_registers(code: u8) -> u8 {
    if code >= 15 { 12 } else { code.saturating_sub(4) }
}

/// Seedable source of every random choice made while generating cases.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.rng)
    }

    /// A value for a slot of the given register family (if any) under `constraint`. `history`
    /// holds the values already chosen for earlier slots.
    pub fn value(&mut self, constraint: &Constraint, family: Option<RegFamily>, history: &[Value]) -> Value {
        let family = family.unwrap_or(RegFamily::X);
        match constraint {
            Constraint::Register(mask) => {
                let allowed: Vec<u8> = (0u8..32).filter(|index| mask & (1 << index) != 0).collect();
                let index = self.pick(&allowed).copied().unwrap_or(0);
                Value::Register { family, index }
            }
            Constraint::NextRegister => {
                let previous = match history.last() {
                    Some(Value::Register { index, .. }) => *index,
                    _ => 0,
                };
                Value::Register {
                    family,
                    index: (previous + 1) % 32,
                }
            }
            Constraint::SavedList => Value::SavedList(self.rng.gen_range(4..=15)),
            Constraint::Range {
                min,
                max,
                step,
                nonzero,
            } => Value::Immediate(self.in_range(*min, *max, *step, *nonzero)),
            Constraint::List(options) => Value::Immediate(self.pick(options).copied().unwrap_or(0)),
            Constraint::SumWithPrevious(limit) => {
                let previous = match history.last() {
                    Some(Value::Immediate(value)) => *value,
                    _ => 0,
                };
                let high = (limit - previous).max(1);
                Value::Immediate(self.rng.gen_range(1..=high))
            }
            Constraint::Names(names) => Value::Name(self.pick(names).cloned().unwrap_or_default()),
            Constraint::Modifiers(members) => match self.pick(members) {
                Some(modifier) => Value::Modifier(*modifier),
                None => Value::Omitted,
            },
            Constraint::IndexExtend => {
                let wide = history
                    .last()
                    .and_then(Value::register_family)
                    .is_some_and(RegFamily::is_wide);
                let options = if wide {
                    [Modifier::Lsl, Modifier::Sxtx]
                } else {
                    [Modifier::Uxtw, Modifier::Sxtw]
                };
                Value::Modifier(options[usize::from(self.coin())])
            }
            Constraint::Special(special) => self.special(*special),
            Constraint::Csr => {
                let entries = NameTable::Csr.entries();
                let (name, code) = self.pick(entries).copied().unwrap_or(("fflags", 1));
                if self.coin() {
                    Value::Name(name.to_string())
                } else {
                    Value::Immediate(i64::from(code))
                }
            }
            Constraint::Free => Value::Immediate(0),
        }
    }

    /// A multiple of `step` within `min..=max`, never zero when `nonzero` is set and the range
    /// has another choice.
    fn in_range(&mut self, min: i64, max: i64, step: i64, nonzero: bool) -> i64 {
        let step = step.max(1);
        let low = min.div_euclid(step) + i64::from(min.rem_euclid(step) != 0);
        let high = max.div_euclid(step);
        if high < low {
            return low * step;
        }
        let zero_inside = nonzero && low <= 0 && 0 <= high;
        if zero_inside && low == high {
            return 0;
        }
        let span = high - low + 1 - i64::from(zero_inside);
        let mut index = low + self.rng.gen_range(0..span);
        if zero_inside && index >= 0 {
            index += 1;
        }
        index * step
    }

    fn special(&mut self, special: SpecialComm) -> Value {
        match special {
            SpecialComm::WideImmediateW => Value::Pattern(self.wide_integer(false)),
            SpecialComm::WideImmediateX => Value::Pattern(self.wide_integer(true)),
            SpecialComm::InvertedWideImmediateW => Value::Pattern(self.wide_integer(false) ^ 0xFFFF_FFFF),
            SpecialComm::InvertedWideImmediateX => Value::Pattern(!self.wide_integer(true)),
            SpecialComm::LogicalImmediateW => Value::Pattern(self.logical_immediate(false)),
            SpecialComm::LogicalImmediateX => Value::Pattern(self.logical_immediate(true)),
            SpecialComm::StretchedImmediate => Value::Pattern(self.stretched_immediate()),
            SpecialComm::FloatImmediate | SpecialComm::SplitFloatImmediate => Value::Float(self.float_immediate()),
        }
    }

    /// One 16-bit chunk at a 16-bit aligned shift.
    pub fn wide_integer(&mut self, wide: bool) -> u64 {
        let chunks: u32 = if wide { 4 } else { 2 };
        let chunk: u64 = self.rng.gen_range(0..1 << 16);
        chunk << (16 * self.rng.gen_range(0..chunks))
    }

    /// A run of ones rotated within a replicated element.
    pub fn logical_immediate(&mut self, wide: bool) -> u64 {
        let sizes: &[u32] = if wide { &[2, 4, 8, 16, 32, 64] } else { &[2, 4, 8, 16, 32] };
        let element_size = self.pick(sizes).copied().unwrap_or(2);
        let ones = self.rng.gen_range(1..element_size);
        let rotation = self.rng.gen_range(0..element_size);
        let register = if wide { 64 } else { 32 };

        let element = (1u64 << ones) - 1;
        let mut value = 0u64;
        for index in 0..register / element_size {
            value |= element << (index * element_size);
        }
        if rotation != 0 {
            let mask = if wide { u64::MAX } else { 0xFFFF_FFFF };
            value = ((value << rotation) | (value >> (register - rotation))) & mask;
        }
        value
    }

    /// `±(16 + m) / 16 * 2^e` with `m` in `0..16` and `e` in `-3..5`.
    pub fn float_immediate(&mut self) -> f64 {
        let sign = if self.coin() { -1.0 } else { 1.0 };
        let mantissa: i32 = self.rng.gen_range(0..16);
        let exponent: i32 = self.rng.gen_range(-3..5);
        sign * 2f64.powi(exponent) * f64::from(16 + mantissa) / 16.0
    }

    /// Each bit of a random byte stretched over one byte of the result.
    pub fn stretched_immediate(&mut self) -> u64 {
        let byte: u8 = self.rng.r#gen();
        (0..8)
            .filter(|bit| byte & (1 << bit) != 0)
            .fold(0u64, |value, bit| value | (0xFF << (bit * 8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::immediates::{
        encode_float_immediate, encode_logical_immediate, encode_stretched_immediate, encode_wide_immediate,
    };
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_values() {
        let constraint = Constraint::Range {
            min: -64,
            max: 63,
            step: 1,
            nonzero: false,
        };
        let mut first = Sampler::seeded(7);
        let mut second = Sampler::seeded(7);
        let a: Vec<Value> = (0..32).map(|_| first.value(&constraint, None, &[])).collect();
        let b: Vec<Value> = (0..32).map(|_| second.value(&constraint, None, &[])).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn next_register_wraps() {
        let mut sampler = Sampler::seeded(1);
        let history = [Value::Register {
            family: RegFamily::X,
            index: 31,
        }];
        assert_eq!(
            sampler.value(&Constraint::NextRegister, Some(RegFamily::X), &history),
            Value::Register {
                family: RegFamily::X,
                index: 0
            }
        );
    }

    #[test]
    fn saved_list_codes_map_to_register_counts() {
        assert_eq!(saved_registers(4), 0);
        assert_eq!(saved_registers(14), 10);
        assert_eq!(saved_registers(15), 12);
        assert_eq!(
            Value::SavedList(15).operand(),
            Operand::RegisterList { first: 1, count: 13 }
        );
    }

    #[test]
    fn index_extend_follows_register_width() {
        let mut sampler = Sampler::seeded(3);
        for _ in 0..16 {
            let narrow = [Value::Register {
                family: RegFamily::W,
                index: 2,
            }];
            match sampler.value(&Constraint::IndexExtend, None, &narrow) {
                Value::Modifier(Modifier::Uxtw | Modifier::Sxtw) => {}
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    proptest! {
        #[test]
        fn ranges_respect_bounds_alignment_and_zero(seed in any::<u64>(), scale in 0u8..4, nonzero in any::<bool>()) {
            let step = 1i64 << scale;
            let constraint = Constraint::Range { min: -64, max: 60, step, nonzero };
            let mut sampler = Sampler::seeded(seed);
            for _ in 0..16 {
                match sampler.value(&constraint, None, &[]) {
                    Value::Immediate(value) => {
                        prop_assert!((-64..=60).contains(&value));
                        prop_assert_eq!(value % step, 0);
                        prop_assert!(!nonzero || value != 0);
                    }
                    other => prop_assert!(false, "unexpected {:?}", other),
                }
            }
        }

        #[test]
        fn special_generators_are_always_encodable(seed in any::<u64>()) {
            let mut sampler = Sampler::seeded(seed);
            let wide = sampler.coin();
            let register = if wide { 64 } else { 32 };
            prop_assert!(encode_logical_immediate(sampler.logical_immediate(wide), register).is_some());
            prop_assert!(encode_wide_immediate(sampler.wide_integer(wide), register).is_some());
            prop_assert!(encode_stretched_immediate(sampler.stretched_immediate()).is_some());
            prop_assert!(encode_float_immediate(sampler.float_immediate()).is_some());
        }
    }
}
