//! Register diagrams: `<box>` elements laying named fields and constant cells over a 32-bit word.

use roxmltree::Node;

use crate::isa::field::{Field, FieldList};
use crate::isa::template::{BitTemplate, Trit};

pub const WORD_WIDTH: u8 = 32;

fn attribute_u8(node: Node<'_, '_>, name: &str, default: Option<u8>) -> Result<u8, String> {
    match node.attribute(name) {
        Some(text) => text
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("<{}> attribute {name}=\"{text}\" is not a bit count", node.tag_name().name())),
        None => default.ok_or_else(|| format!("<{}> lacks attribute {name}", node.tag_name().name())),
    }
}

/// Value of a single-bit cell. `(0)` and `(1)` are "should be" bits and count as constants;
/// anything else (`N`, `Z`, `!= 000`) leaves the bit variable.
fn cell_value(text: &str) -> Trit {
    match text.trim().trim_start_matches('(').trim_end_matches(')') {
        "0" => Trit::Zero,
        "1" => Trit::One,
        _ => Trit::Variable,
    }
}

/// Writes the cells of every `<box>` below `node` into `template`, and collects the boxes that
/// carry a name as fields.
pub fn overlay(node: Node<'_, '_>, template: &mut BitTemplate, fields: &mut Vec<Field>) -> Result<(), String> {
    for bx in node.descendants().filter(|child| child.has_tag_name("box")) {
        let hibit = attribute_u8(bx, "hibit", None)?;
        let width = attribute_u8(bx, "width", Some(1))?;
        if hibit >= WORD_WIDTH || width == 0 || width > hibit + 1 {
            return Err(format!("box at bit {hibit} with width {width} leaves the word"));
        }

        let mut bit = i32::from(hibit);
        for cell in bx.descendants().filter(|child| child.has_tag_name("c")) {
            let span = attribute_u8(cell, "colspan", Some(1))?;
            if bit < 0 {
                return Err(format!("box at bit {hibit} has more cells than bits"));
            }
            if span == 1 {
                if let Some(text) = cell.text() {
                    template.set(bit as u8, cell_value(text));
                }
            }
            bit -= i32::from(span);
        }

        if let Some(name) = bx.attribute("name") {
            fields.push(Field::new(name, width, hibit + 1 - width));
        }
    }
    Ok(())
}

/// Fields that still have at least one variable bit once the encoding is overlaid.
pub fn open_fields(fields: &[Field], template: &BitTemplate) -> FieldList {
    FieldList::from_fields(
        fields
            .iter()
            .filter(|field| field.mask() & template.variable_mask() != 0)
            .cloned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAGRAM: &str = r#"<regdiagram form="32">
  <box hibit="31" name="sf" usename="1"><c></c></box>
  <box hibit="30" width="6" settings="6"><c>0</c><c>0</c><c>1</c><c>0</c><c>1</c><c>1</c></box>
  <box hibit="24" width="2" name="shift"><c colspan="2"></c></box>
  <box hibit="22" width="8"><c>(0)</c><c>(1)</c><c>N</c><c colspan="5"></c></box>
  <box hibit="14" width="10" name="imm"><c colspan="10"></c></box>
  <box hibit="4" width="5" name="Rd"><c colspan="5"></c></box>
</regdiagram>"#;

    #[test]
    fn reads_cells_and_named_boxes() {
        let doc = roxmltree::Document::parse(DIAGRAM).expect("xml");
        let mut template = BitTemplate::variable(WORD_WIDTH);
        let mut fields = Vec::new();
        overlay(doc.root_element(), &mut template, &mut fields).expect("overlay");

        assert_eq!(
            fields,
            vec![
                Field::new("sf", 1, 31),
                Field::new("shift", 2, 23),
                Field::new("imm", 10, 5),
                Field::new("Rd", 5, 0),
            ]
        );
        assert_eq!(&template.pattern()[..12], "x001011xx01x");
    }

    #[test]
    fn encoding_overlay_closes_fields() {
        let doc = roxmltree::Document::parse(DIAGRAM).expect("xml");
        let mut template = BitTemplate::variable(WORD_WIDTH);
        let mut fields = Vec::new();
        overlay(doc.root_element(), &mut template, &mut fields).expect("overlay");

        let encoding =
            roxmltree::Document::parse(r#"<encoding><box hibit="31" width="1" name="sf"><c>1</c></box></encoding>"#)
                .expect("xml");
        overlay(encoding.root_element(), &mut template, &mut Vec::new()).expect("overlay");
        let open = open_fields(&fields, &template);
        assert!(!open.contains("sf"));
        assert!(open.contains("Rd"));
        assert_eq!(template.get(31), Trit::One);
    }

    #[test]
    fn rejects_boxes_outside_the_word() {
        let doc = roxmltree::Document::parse(r#"<r><box hibit="2" width="5"><c colspan="5"/></box></r>"#)
            .expect("xml");
        let mut template = BitTemplate::variable(WORD_WIDTH);
        assert!(overlay(doc.root_element(), &mut template, &mut Vec::new()).is_err());
    }
}
