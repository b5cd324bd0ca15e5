//! XML ingestion for the AArch64 instruction description files.
//!
//! Every file describes one instruction page. Each `<iclass>` holds a register diagram shared by
//! its `<encoding>` children; an encoding overlays its own constant cells, names its mnemonic in
//! docvars and spells its operand syntax in an `<asmtemplate>`.

pub mod regdiagram;

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};

use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase, SourceSpan};
use crate::isa::error::BuildError;
use crate::isa::field::Field;
use crate::isa::template::{BitTemplate, Trit};
use crate::isa::variant::{ArchTag, CanonicalVariant, InstrClass};
use crate::loader::source::VariantSource;
use regdiagram::{WORD_WIDTH, open_fields, overlay};

/// Operand-template prefix of a widening/narrowing pair.
const PAIR_MARKER: &str = "{2}";
/// Selector of the wide form of a pair: `Q` at bit 30.
const PAIR_SELECTOR: (&str, u8, u8) = ("Q", 1, 30);
const IGNORED_PREFIX: &str = "onebigfile";

/// XML documents kept in memory so the source can be walked repeatedly.
#[derive(Clone, Debug, Default)]
pub struct Aarch64Source {
    documents: Vec<(PathBuf, String)>,
}

impl Aarch64Source {
    /// Reads every `.xml` file directly under `dir`, in file-name order.
    pub fn load(dir: &Path) -> Result<Self, BuildError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if path.is_file() && name.ends_with(".xml") && !name.starts_with(IGNORED_PREFIX) {
                paths.push(path);
            }
        }
        paths.sort();
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path)?;
            documents.push((path, text));
        }
        Ok(Self { documents })
    }

    pub fn from_documents(documents: impl IntoIterator<Item = (PathBuf, String)>) -> Self {
        Self {
            documents: documents.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl VariantSource for Aarch64Source {
    fn name(&self) -> &str {
        "aarch64"
    }

    fn variants(&self, diagnostics: &mut Vec<Diagnostic>) -> Result<Vec<CanonicalVariant>, BuildError> {
        let mut variants = Vec::new();
        for (path, text) in &self.documents {
            match Document::parse(text) {
                Ok(doc) => analyse_document(&doc, path, &mut variants, diagnostics)?,
                Err(err) => diagnostics.push(skipped(path, "aarch64.xml", format!("unparsable XML: {err}"))),
            }
        }
        Ok(variants)
    }
}

fn skipped(path: &Path, code: &'static str, message: String) -> Diagnostic {
    Diagnostic::warning(
        DiagnosticPhase::Ingestion,
        code,
        message,
        Some(SourceSpan::file(path.to_path_buf())),
    )
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| child.has_tag_name(tag))
}

fn docvar<'a>(encoding: Node<'a, '_>, key: &str) -> impl Iterator<Item = &'a str> {
    encoding
        .descendants()
        .filter(|node| node.has_tag_name("docvar") && node.attribute("key") == Some(key))
        .filter_map(|node| node.attribute("value"))
}

/// Concatenated text of an element and all of its descendants.
fn full_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .collect()
}

/// Appends the variants of one parsed file. Records that cannot be read are skipped with a
/// diagnostic; overlapping fields are fatal.
pub fn analyse_document(
    doc: &Document<'_>,
    path: &Path,
    out: &mut Vec<CanonicalVariant>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), BuildError> {
    let root = doc.root_element();
    let heading = child(root, "heading").and_then(|node| node.text()).map(str::trim);

    for iclass in root.descendants().filter(|node| node.has_tag_name("iclass")) {
        let arch_variant = match child(iclass, "arch_variants") {
            Some(variants) => {
                let names: Vec<&str> = variants
                    .children()
                    .filter(|node| node.is_element())
                    .filter_map(|node| node.attribute("name"))
                    .collect();
                match names.as_slice() {
                    [] => None,
                    [name] => Some(name.to_string()),
                    _ => {
                        diagnostics.push(skipped(
                            path,
                            "aarch64.arch-variant",
                            format!("instruction class lists {} architecture variants", names.len()),
                        ));
                        continue;
                    }
                }
            }
            None => None,
        };

        let mut base = BitTemplate::variable(WORD_WIDTH);
        let mut fields = Vec::new();
        if let Some(diagram) = child(iclass, "regdiagram") {
            if let Err(message) = overlay(diagram, &mut base, &mut fields) {
                diagnostics.push(skipped(path, "aarch64.regdiagram", message));
                continue;
            }
        }

        for encoding in iclass.children().filter(|node| node.has_tag_name("encoding")) {
            let record = Record {
                path,
                heading,
                arch_variant: arch_variant.as_deref(),
                base,
                fields: &fields,
            };
            match record.read(encoding) {
                Ok(variants) => {
                    for variant in variants {
                        variant.validate()?;
                        out.push(variant);
                    }
                }
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }
    }
    Ok(())
}

/// State shared by the encodings of one instruction class.
struct Record<'a> {
    path: &'a Path,
    heading: Option<&'a str>,
    arch_variant: Option<&'a str>,
    base: BitTemplate,
    fields: &'a [Field],
}

impl Record<'_> {
    fn read(&self, encoding: Node<'_, '_>) -> Result<Vec<CanonicalVariant>, Diagnostic> {
        let encoding_name = encoding.attribute("name").unwrap_or("encoding");
        let mnemonic = docvar(encoding, "alias_mnemonic")
            .last()
            .or_else(|| docvar(encoding, "mnemonic").next())
            .ok_or_else(|| {
                skipped(
                    self.path,
                    "aarch64.missing-mnemonic",
                    format!("{encoding_name} declares no mnemonic"),
                )
            })?;

        let mut bits = self.base;
        overlay(encoding, &mut bits, &mut Vec::new())
            .map_err(|message| skipped(self.path, "aarch64.regdiagram", message))?;
        let mut fields = open_fields(self.fields, &bits);

        let class: InstrClass = match docvar(encoding, "instr-class").next() {
            Some(name) => name.parse().unwrap_or(InstrClass::General),
            None => InstrClass::General,
        };

        let templates: Vec<String> = encoding
            .children()
            .filter(|node| node.has_tag_name("asmtemplate"))
            .map(full_text)
            .collect();
        let [template] = templates.as_slice() else {
            return Err(skipped(
                self.path,
                "aarch64.asmtemplate",
                format!("{encoding_name} has {} assembly templates", templates.len()),
            ));
        };
        let operands: String = template
            .get(mnemonic.len()..)
            .unwrap_or_default()
            .chars()
            .filter(|ch| *ch != ' ')
            .collect();

        let variant = |name: String, operand_template: &str, fields, bits| CanonicalVariant {
            title: self.heading.unwrap_or(mnemonic).to_string(),
            mnemonic: name,
            operand_template: operand_template.to_string(),
            fields,
            bits,
            arch: ArchTag::Aarch64 {
                variant: self.arch_variant.map(str::to_string),
            },
            class: class.clone(),
        };

        let Some(rest) = operands.strip_prefix(PAIR_MARKER) else {
            return Ok(vec![variant(mnemonic.to_string(), &operands, fields, bits)]);
        };
        let (name, width, offset) = PAIR_SELECTOR;
        if fields.get(name) != Some(&Field::new(name, width, offset)) {
            return Err(skipped(
                self.path,
                "aarch64.pair-selector",
                format!("{mnemonic}: pair form without a {name} selector at bit {offset}"),
            ));
        }
        fields.remove(name);
        let mut wide = bits;
        wide.set(offset, Trit::One);
        let mut narrow = bits;
        narrow.set(offset, Trit::Zero);
        Ok(vec![
            variant(format!("{mnemonic}2"), rest, fields.clone(), wide),
            variant(mnemonic.to_string(), rest, fields, narrow),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<instructionsection id="ADD_addsub_imm" title="ADD (immediate)" type="instruction">
  <heading>ADD (immediate)</heading>
  <classes>
    <iclass name="Not setting the condition flags" oneof="2" id="no_s" no_encodings="2" isa="A64">
      <docvars><docvar key="instr-class" value="general" /></docvars>
      <regdiagram form="32" psname="aarch64/instrs/integer/arithmetic/add-sub/immediate/ADD_32_addsub_imm">
        <box hibit="31" name="sf" usename="1"><c></c></box>
        <box hibit="30" name="op" settings="1"><c>0</c></box>
        <box hibit="29" name="S" settings="1"><c>0</c></box>
        <box hibit="28" width="6" settings="6"><c>1</c><c>0</c><c>0</c><c>0</c><c>1</c><c>0</c></box>
        <box hibit="22" name="sh" usename="1"><c></c></box>
        <box hibit="21" width="12" name="imm12" usename="1"><c colspan="12"></c></box>
        <box hibit="9" width="5" name="Rn" usename="1"><c colspan="5"></c></box>
        <box hibit="4" width="5" name="Rd" usename="1"><c colspan="5"></c></box>
      </regdiagram>
      <encoding name="ADD_32_addsub_imm" oneofinclass="2" oneof="2" label="32-bit">
        <docvars>
          <docvar key="mnemonic" value="ADD" />
          <docvar key="instr-class" value="general" />
        </docvars>
        <box hibit="31" width="1" name="sf"><c>0</c></box>
        <asmtemplate><text>ADD  </text><a link="sa_wd_wsp">&lt;Wd|WSP&gt;</a><text>, </text><a>&lt;Wn|WSP&gt;</a><text>, #</text><a>&lt;imm&gt;</a><text>{, </text><a>&lt;shift&gt;</a><text>}</text></asmtemplate>
      </encoding>
      <encoding name="ADD_64_addsub_imm" oneofinclass="2" oneof="2" label="64-bit">
        <docvars>
          <docvar key="mnemonic" value="ADD" />
          <docvar key="alias_mnemonic" value="MOV" />
        </docvars>
        <box hibit="31" width="1" name="sf"><c>1</c></box>
        <asmtemplate><text>MOV  </text><a>&lt;Xd|SP&gt;</a><text>, </text><a>&lt;Xn|SP&gt;</a></asmtemplate>
      </encoding>
      <encoding name="broken">
        <asmtemplate><text>ADD</text></asmtemplate>
      </encoding>
    </iclass>
  </classes>
</instructionsection>
"#;

    const SADDL_XML: &str = r#"<instructionsection>
  <heading>SADDL, SADDL2</heading>
  <classes>
    <iclass name="Advanced SIMD">
      <arch_variants><arch_variant name="ARMv8.2" /></arch_variants>
      <regdiagram form="32">
        <box hibit="31"><c>0</c></box>
        <box hibit="30" name="Q"><c></c></box>
        <box hibit="29" width="5"><c>0</c><c>0</c><c>1</c><c>1</c><c>1</c></box>
        <box hibit="24" width="3"><c>0</c><c>0</c><c>1</c></box>
        <box hibit="21" width="22" name="rest"><c colspan="22"></c></box>
      </regdiagram>
      <encoding name="SADDL_asimddiff_L">
        <docvars><docvar key="mnemonic" value="SADDL" /><docvar key="instr-class" value="advsimd" /></docvars>
        <asmtemplate><text>SADDL{2}  </text><a>&lt;Vd&gt;</a><text>.</text><a>&lt;Ta&gt;</a></asmtemplate>
      </encoding>
    </iclass>
  </classes>
</instructionsection>"#;

    fn read(xml: &str) -> (Vec<CanonicalVariant>, Vec<Diagnostic>) {
        let source = Aarch64Source::from_documents([(PathBuf::from("doc.xml"), xml.to_string())]);
        let mut diagnostics = Vec::new();
        let variants = source.variants(&mut diagnostics).expect("variants");
        (variants, diagnostics)
    }

    #[test]
    fn reads_encodings_with_alias_mnemonics() {
        let (variants, diagnostics) = read(ADD_XML);
        assert_eq!(variants.len(), 2);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "aarch64.missing-mnemonic");

        let add = &variants[0];
        assert_eq!(add.mnemonic, "ADD");
        assert_eq!(add.title, "ADD (immediate)");
        assert_eq!(add.operand_template, "<Wd|WSP>,<Wn|WSP>,#<imm>{,<shift>}");
        assert_eq!(add.fields.names(), vec!["sh", "imm12", "Rn", "Rd"]);
        assert_eq!(add.bits.pattern(), format!("000100010{}", "x".repeat(23)));
        assert_eq!(add.class, InstrClass::General);
        assert_eq!(add.arch, ArchTag::Aarch64 { variant: None });

        let mov = &variants[1];
        assert_eq!(mov.mnemonic, "MOV");
        assert_eq!(mov.operand_template, "<Xd|SP>,<Xn|SP>");
        assert_eq!(mov.bits.get(31), Trit::One);
    }

    #[test]
    fn splits_widening_pairs_on_q() {
        let (variants, diagnostics) = read(SADDL_XML);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let names: Vec<&str> = variants.iter().map(|variant| variant.mnemonic.as_str()).collect();
        assert_eq!(names, vec!["SADDL2", "SADDL"]);
        assert_eq!(variants[0].bits.get(30), Trit::One);
        assert_eq!(variants[1].bits.get(30), Trit::Zero);
        assert!(!variants[0].fields.contains("Q"));
        assert_eq!(variants[0].operand_template, "<Vd>.<Ta>");
        assert_eq!(variants[0].class, InstrClass::Advsimd);
        assert_eq!(
            variants[0].arch,
            ArchTag::Aarch64 {
                variant: Some("ARMv8.2".into())
            }
        );
    }

    #[test]
    fn pair_marker_without_selector_is_skipped() {
        let xml = SADDL_XML.replace(r#"name="Q""#, r#"name="size""#);
        let (variants, diagnostics) = read(&xml);
        assert!(variants.is_empty());
        assert_eq!(diagnostics[0].code, "aarch64.pair-selector");
    }

    #[test]
    fn unparsable_files_are_reported_and_skipped() {
        let source = Aarch64Source::from_documents([
            (PathBuf::from("bad.xml"), "<instructionsection>".to_string()),
            (PathBuf::from("add.xml"), ADD_XML.to_string()),
        ]);
        let mut diagnostics = Vec::new();
        let variants = source.variants(&mut diagnostics).expect("variants");
        assert_eq!(variants.len(), 2);
        assert_eq!(diagnostics[0].code, "aarch64.xml");
        assert!(diagnostics[0].format_human().contains("bad.xml"));
    }

    #[test]
    fn load_ignores_combined_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("add.xml"), ADD_XML).expect("write");
        fs::write(dir.path().join("onebigfile.xml"), "<broken").expect("write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write");
        let source = Aarch64Source::load(dir.path()).expect("load");
        assert_eq!(source.len(), 1);
    }
}
