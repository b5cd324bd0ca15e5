//! Named operand fields inside an instruction word.

use std::fmt;

use smallvec::SmallVec;

pub(crate) fn mask_for_width(width: u8) -> u32 {
    if width == 0 {
        0
    } else if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// One named bit range `[offset, offset + width)` of an instruction word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Field {
    pub name: String,
    pub width: u8,
    pub offset: u8,
}

impl Field {
    pub fn new(name: impl Into<String>, width: u8, offset: u8) -> Self {
        Self {
            name: name.into(),
            width,
            offset,
        }
    }

    pub fn mask(&self) -> u32 {
        mask_for_width(self.width) << self.offset
    }

    pub fn top(&self) -> u8 {
        self.offset + self.width - 1
    }

    /// Base name with any `=alias` suffix removed (`rs2=rs1` yields `rs2`).
    pub fn base_name(&self) -> &str {
        self.name.split('=').next().unwrap_or(&self.name)
    }

    pub fn alias(&self) -> Option<&str> {
        self.name.split_once('=').map(|(_, alias)| alias)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {}, {})", self.name, self.width, self.offset)
    }
}

/// Field set of one variant, kept in canonical order (highest offset first) so it can serve as
/// part of a lookup key regardless of declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldList {
    fields: SmallVec<[Field; 6]>,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut list = Self {
            fields: fields.into_iter().collect(),
        };
        list.canonicalize();
        list
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
        self.canonicalize();
    }

    pub fn remove(&mut self, name: &str) -> Option<Field> {
        let index = self.fields.iter().position(|field| field.name == name)?;
        Some(self.fields.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.name.clone()).collect()
    }

    /// Union of every field's bit mask.
    pub fn mask(&self) -> u32 {
        self.fields.iter().fold(0, |acc, field| acc | field.mask())
    }

    /// Checks that every field lies within the word and that no two fields share a bit.
    /// Returns a description of the first violation.
    pub fn check_disjoint(&self, word_width: u8) -> Result<(), String> {
        let mut seen = 0u32;
        for field in &self.fields {
            if field.width == 0 || u32::from(field.offset) + u32::from(field.width) > u32::from(word_width)
            {
                return Err(format!(
                    "field {field} does not fit a {word_width}-bit word"
                ));
            }
            if seen & field.mask() != 0 {
                let other = self
                    .fields
                    .iter()
                    .find(|other| other.name != field.name && other.mask() & field.mask() != 0)
                    .map(|other| other.to_string())
                    .unwrap_or_default();
                return Err(format!("field {field} overlaps {other}"));
            }
            seen |= field.mask();
        }
        Ok(())
    }

    fn canonicalize(&mut self) {
        self.fields
            .sort_by(|a, b| b.offset.cmp(&a.offset).then_with(|| a.name.cmp(&b.name)));
    }
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str(")")
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_fields_by_descending_offset() {
        let list = FieldList::from_fields([
            Field::new("Rd", 5, 0),
            Field::new("Rm", 5, 16),
            Field::new("Rn", 5, 5),
        ]);
        assert_eq!(list.names(), vec!["Rm", "Rn", "Rd"]);
        assert_eq!(list.to_string(), "(('Rm', 5, 16), ('Rn', 5, 5), ('Rd', 5, 0))");
    }

    #[test]
    fn equal_sets_compare_equal_regardless_of_order() {
        let a = FieldList::from_fields([Field::new("Rd", 5, 0), Field::new("Rn", 5, 5)]);
        let b = FieldList::from_fields([Field::new("Rn", 5, 5), Field::new("Rd", 5, 0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn detects_overlap_and_out_of_range() {
        let overlapping = FieldList::from_fields([Field::new("a", 4, 0), Field::new("b", 4, 3)]);
        let err = overlapping.check_disjoint(32).expect_err("overlap");
        assert!(err.contains("overlaps"), "{err}");

        let wide = FieldList::from_fields([Field::new("imm", 8, 12)]);
        assert!(wide.check_disjoint(16).is_err());
        assert!(wide.check_disjoint(32).is_ok());
    }

    #[test]
    fn splits_aliased_names() {
        let field = Field::new("rs2=rs1", 5, 20);
        assert_eq!(field.base_name(), "rs2");
        assert_eq!(field.alias(), Some("rs1"));
        assert_eq!(field.mask(), 0x1F << 20);
        assert_eq!(field.top(), 24);
    }
}
