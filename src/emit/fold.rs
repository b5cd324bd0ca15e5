//! Static-bit folding: `Static` pins leave the command list and become fixed template bits.

use crate::encode::command::Command;
use crate::isa::compiled::CompiledEntry;
use crate::isa::error::BuildError;

/// Moves every `Static` command of `row` into its bit template. A pin that contradicts a bit
/// already fixed fails with `StaticBitConflict` and leaves the row untouched.
pub fn fold_statics(row: &mut CompiledEntry) -> Result<(), BuildError> {
    let mut bits = row.bits;
    for command in &row.commands {
        if let Command::Static { offset, value, width } = *command {
            bits.pin(offset, width, value)
                .map_err(|conflict| BuildError::StaticBitConflict {
                    mnemonic: row.mnemonic.clone(),
                    bit: conflict.bit,
                    template: row.bits.pattern(),
                })?;
        }
    }
    row.bits = bits;
    row.commands.retain(|command| !command.is_static());
    Ok(())
}

pub fn fold_all(rows: &mut [CompiledEntry]) -> Result<(), BuildError> {
    rows.iter_mut().try_for_each(fold_statics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::matcher::Matcher;
    use crate::isa::field::{Field, FieldList};
    use crate::isa::template::{BitTemplate, Trit};
    use crate::isa::variant::{ArchTag, CanonicalVariant, InstrClass};
    use proptest::prelude::*;

    fn row(pattern: &str, commands: &str) -> CompiledEntry {
        let variant = CanonicalVariant {
            mnemonic: "FCMLA".into(),
            title: "FCMLA".into(),
            operand_template: String::new(),
            fields: FieldList::from_fields([Field::new("Rd", 5, 0)]),
            bits: BitTemplate::parse(pattern).expect("pattern"),
            arch: ArchTag::Aarch64 { variant: None },
            class: InstrClass::Advsimd,
        };
        CompiledEntry::from_variant(
            &variant,
            Matcher::parse_list("V(WORD)").expect("matchers"),
            Command::parse_list(commands).expect("commands"),
            0,
        )
    }

    #[test]
    fn pins_become_template_bits() {
        let mut entry = row("0x101111xxxxxxxx0xx1x0xxxxxxxxxx", "R(0), Static(30, 0b1), Static(22, 0b01)");
        fold_statics(&mut entry).expect("fold");
        assert_eq!(entry.command_text(), "R(0)");
        assert_eq!(entry.bits.get(30), Trit::One);
        assert_eq!(entry.bits.get(23), Trit::Zero);
        assert_eq!(entry.bits.get(22), Trit::One);
    }

    #[test]
    fn conflicting_pin_is_an_error() {
        let mut entry = row("01101111xxxxxxxx0xx1x0xxxxxxxxxx", "R(0), Static(30, 0b0)");
        let before = entry.clone();
        match fold_statics(&mut entry) {
            Err(BuildError::StaticBitConflict { bit, mnemonic, .. }) => {
                assert_eq!(bit, 30);
                assert_eq!(mnemonic, "FCMLA");
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(entry, before);
    }

    #[test]
    fn pin_past_the_word_is_an_error() {
        let mut entry = row("0x101111xxxxxxxx0xx1x0xxxxxxxxxx", "R(0), Static(31, 0b11)");
        let before = entry.clone();
        match fold_statics(&mut entry) {
            Err(BuildError::StaticBitConflict { bit, .. }) => assert_eq!(bit, 32),
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(entry, before);
    }

    proptest! {
        #[test]
        fn folding_a_fixed_bit_to_its_own_value_is_a_no_op(offset in 0u8..32, value in 0u32..2) {
            let mut bits = BitTemplate::variable(32);
            bits.set(offset, if value == 1 { Trit::One } else { Trit::Zero });
            let mut entry = row(&bits.pattern(), &format!("Static({offset}, 0b{value})"));
            let expected = entry.bits;
            fold_statics(&mut entry).expect("fold");
            prop_assert_eq!(entry.bits, expected);
            prop_assert!(entry.commands.is_empty());
        }

        #[test]
        fn folding_never_overwrites_a_fixed_bit(offset in 0u8..32, value in 0u32..2) {
            let mut bits = BitTemplate::variable(32);
            bits.set(offset, if value == 1 { Trit::Zero } else { Trit::One });
            let mut entry = row(&bits.pattern(), &format!("Static({offset}, 0b{value})"));
            prop_assert!(fold_statics(&mut entry).is_err());
            prop_assert_eq!(entry.bits, bits);
        }
    }
}
