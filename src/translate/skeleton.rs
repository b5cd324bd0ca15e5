//! Catalog skeletons: every operand shape of one instruction class written out as an entry with
//! placeholder matchers and commands, ready to be filled in.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::isa::field::FieldList;
use crate::isa::variant::{CanonicalVariant, InstrClass};

const PLACEHOLDER: &str = "Unimp";

fn quote(text: &str) -> String {
    if text.contains('"') || text.contains('\\') {
        format!("r#\"{text}\"#")
    } else {
        format!("\"{text}\"")
    }
}

fn field_slice(fields: &FieldList) -> String {
    let items: Vec<String> = fields
        .iter()
        .map(|field| format!("({}, {}, {})", quote(&field.name), field.width, field.offset))
        .collect();
    format!("&[{}]", items.join(", "))
}

/// Entry skeletons for every distinct `(template, fields)` shape among the variants of `class`,
/// ordered by template and then field list.
pub fn skeleton<'a>(variants: impl IntoIterator<Item = &'a CanonicalVariant>, class: &InstrClass) -> String {
    let mut shapes: BTreeMap<(String, String), (FieldList, Vec<String>)> = BTreeMap::new();
    for variant in variants.into_iter().filter(|variant| &variant.class == class) {
        let key = (variant.operand_template.clone(), variant.fields.to_string());
        let (_, mnemonics) = shapes
            .entry(key)
            .or_insert_with(|| (variant.fields.clone(), Vec::new()));
        if !mnemonics.contains(&variant.mnemonic) {
            mnemonics.push(variant.mnemonic.clone());
        }
    }

    let mut out = String::new();
    for ((template, _), (fields, mut mnemonics)) in shapes {
        mnemonics.sort();
        let names: Vec<String> = mnemonics.iter().map(|name| quote(name)).collect();
        let _ = writeln!(
            out,
            "    entry(&[{}], {}, {})\n        .encodes(&[({}, {})]),",
            names.join(", "),
            quote(&template),
            field_slice(&fields),
            quote(PLACEHOLDER),
            quote(PLACEHOLDER),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::field::Field;
    use crate::isa::template::BitTemplate;
    use crate::isa::variant::ArchTag;

    fn variant(mnemonic: &str, template: &str, class: InstrClass) -> CanonicalVariant {
        CanonicalVariant {
            mnemonic: mnemonic.into(),
            title: mnemonic.into(),
            operand_template: template.into(),
            fields: FieldList::from_fields([Field::new("Rd", 5, 0), Field::new("Rn", 5, 5)]),
            bits: BitTemplate::variable(32),
            arch: ArchTag::Aarch64 { variant: None },
            class,
        }
    }

    #[test]
    fn one_entry_per_shape_with_sorted_mnemonics() {
        let variants = [
            variant("RBIT", "<Wd>,<Wn>", InstrClass::General),
            variant("CLZ", "<Wd>,<Wn>", InstrClass::General),
            variant("CLZ", "<Wd>,<Wn>", InstrClass::General),
            variant("FABS", "<Sd>,<Sn>", InstrClass::Float),
            variant("CLZ", "<Xd>,<Xn>", InstrClass::General),
        ];
        let text = skeleton(&variants, &InstrClass::General);
        assert_eq!(
            text,
            concat!(
                "    entry(&[\"CLZ\", \"RBIT\"], \"<Wd>,<Wn>\", &[(\"Rn\", 5, 5), (\"Rd\", 5, 0)])\n",
                "        .encodes(&[(\"Unimp\", \"Unimp\")]),\n",
                "    entry(&[\"CLZ\"], \"<Xd>,<Xn>\", &[(\"Rn\", 5, 5), (\"Rd\", 5, 0)])\n",
                "        .encodes(&[(\"Unimp\", \"Unimp\")]),\n",
            )
        );
    }
}
