//! Line parser for opcode description files.
//!
//! Three line forms exist:
//!
//! ```text
//! name <encoding>
//! $pseudo_op ext::parent name <encoding>
//! $import ext::name
//! ```
//!
//! where `<encoding>` is a run of field names (`rd`, `rs2=rs1`), single-bit assignments (`12=1`)
//! and range assignments (`14..12=0x2`). A malformed line is reported and skipped; parsing
//! resumes on the next line.

use std::path::Path;

use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase, SourcePosition, SourceSpan};
use crate::loader::riscv::lexer::{Lexer, Token, TokenKind, number_value};

/// `top..bottom = value`; a single bit has `top == bottom`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitAssignment {
    pub top: u8,
    pub bottom: u8,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawInstruction {
    pub name: String,
    /// Field names in declaration order, aliases kept as `field=alias`.
    pub fields: Vec<String>,
    pub bits: Vec<BitAssignment>,
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Concrete(RawInstruction),
    Pseudo {
        parent_extension: String,
        parent_name: String,
        instruction: RawInstruction,
    },
    Import {
        extension: String,
        name: String,
        line: usize,
    },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Concrete(instruction) | Entry::Pseudo { instruction, .. } => &instruction.name,
            Entry::Import { name, .. } => name,
        }
    }
}

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    peeked: Option<Token>,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str, path: &Path) -> Self {
        Self {
            lexer: Lexer::new(src, path.to_path_buf()),
            peeked: None,
        }
    }

    /// Parses every line, collecting one diagnostic per skipped line.
    pub fn parse(mut self, diagnostics: &mut Vec<Diagnostic>) -> Vec<Entry> {
        let mut entries = Vec::new();
        loop {
            match self.peek_kind() {
                Ok(TokenKind::EOF) => break,
                Ok(TokenKind::Newline) => {
                    self.peeked = None;
                }
                Ok(_) => match self.parse_line() {
                    Ok(entry) => entries.push(entry),
                    Err(diagnostic) => {
                        diagnostics.push(diagnostic);
                        self.recover();
                    }
                },
                Err(diagnostic) => {
                    diagnostics.push(diagnostic);
                    self.recover();
                }
            }
        }
        entries
    }

    fn parse_line(&mut self) -> Result<Entry, Diagnostic> {
        if self.peek_kind()? != TokenKind::Dollar {
            return Ok(Entry::Concrete(self.parse_instruction()?));
        }
        self.consume()?;
        let directive = self.expect(TokenKind::Name, "directive name")?;
        match directive.lexeme.as_str() {
            "pseudo_op" => {
                let parent_extension = self.expect(TokenKind::Name, "parent extension")?.lexeme;
                self.expect(TokenKind::DoubleColon, "'::'")?;
                let parent_name = self.expect(TokenKind::Name, "parent instruction")?.lexeme;
                let instruction = self.parse_instruction()?;
                Ok(Entry::Pseudo {
                    parent_extension,
                    parent_name,
                    instruction,
                })
            }
            "import" => {
                let extension = self.expect(TokenKind::Name, "imported extension")?;
                self.expect(TokenKind::DoubleColon, "'::'")?;
                let name = self.expect(TokenKind::Name, "imported instruction")?.lexeme;
                self.end_of_line()?;
                Ok(Entry::Import {
                    extension: extension.lexeme,
                    name,
                    line: extension.line,
                })
            }
            other => Err(self.error(
                &directive,
                "riscv.parser.directive",
                format!("unknown directive '${other}'"),
            )),
        }
    }

    fn parse_instruction(&mut self) -> Result<RawInstruction, Diagnostic> {
        let name = self.expect(TokenKind::Name, "instruction name")?;
        let mut instruction = RawInstruction {
            name: name.lexeme,
            fields: Vec::new(),
            bits: Vec::new(),
            line: name.line,
        };
        loop {
            match self.peek_kind()? {
                TokenKind::Newline | TokenKind::EOF => break,
                TokenKind::Name => {
                    let field = self.consume()?.lexeme;
                    if self.peek_kind()? == TokenKind::Equals {
                        self.consume()?;
                        let alias = self.expect(TokenKind::Name, "field alias")?;
                        instruction.fields.push(format!("{field}={}", alias.lexeme));
                    } else {
                        instruction.fields.push(field);
                    }
                }
                _ => {
                    let assignment = self.parse_assignment()?;
                    instruction.bits.push(assignment);
                }
            }
        }
        Ok(instruction)
    }

    fn parse_assignment(&mut self) -> Result<BitAssignment, Diagnostic> {
        let first = self.expect(TokenKind::Number, "bit position")?;
        let top = self.small(&first)?;
        let bottom = if self.peek_kind()? == TokenKind::DoublePeriod {
            self.consume()?;
            let token = self.expect(TokenKind::Number, "range bottom")?;
            self.small(&token)?
        } else {
            top
        };
        self.expect(TokenKind::Equals, "'='")?;
        let token = self.expect(TokenKind::Number, "bit value")?;
        let value = number_value(&token.lexeme)
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| self.error(&token, "riscv.parser.number", "unparsable value"))?;

        if bottom > top || top >= 32 {
            return Err(self.error(
                &first,
                "riscv.parser.range",
                format!("invalid bit range {top}..{bottom}"),
            ));
        }
        let width = u32::from(top - bottom) + 1;
        if width < 32 && value >> width != 0 {
            return Err(self.error(
                &token,
                "riscv.parser.range",
                format!("value {value:#x} does not fit {top}..{bottom}"),
            ));
        }
        Ok(BitAssignment { top, bottom, value })
    }

    fn small(&self, token: &Token) -> Result<u8, Diagnostic> {
        number_value(&token.lexeme)
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| self.error(token, "riscv.parser.number", "unparsable bit position"))
    }

    fn end_of_line(&mut self) -> Result<(), Diagnostic> {
        match self.peek_kind()? {
            TokenKind::Newline | TokenKind::EOF => Ok(()),
            _ => {
                let token = self.consume()?;
                Err(self.error(&token, "riscv.parser.trailing", "unexpected tokens after import"))
            }
        }
    }

    fn expect(&mut self, kind: TokenKind, context: &str) -> Result<Token, Diagnostic> {
        let token = self.consume()?;
        if token.kind == kind {
            return Ok(token);
        }
        let found = match token.kind {
            TokenKind::Newline => "end of line",
            TokenKind::EOF => "end of file",
            _ => token.lexeme.as_str(),
        };
        let err = self.error(
            &token,
            "riscv.parser.unexpected-token",
            format!("expected {context}, found '{found}'"),
        );
        if matches!(token.kind, TokenKind::Newline | TokenKind::EOF) {
            self.peeked = Some(token);
        }
        Err(err)
    }

    fn peek_kind(&mut self) -> Result<TokenKind, Diagnostic> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.as_ref().map_or(TokenKind::EOF, |token| token.kind))
    }

    fn consume(&mut self) -> Result<Token, Diagnostic> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }
        self.lexer.next_token()
    }

    /// Drops the remainder of the current line.
    fn recover(&mut self) {
        match self.peeked.take() {
            Some(token) if matches!(token.kind, TokenKind::Newline | TokenKind::EOF) => {
                self.peeked = Some(token);
            }
            _ => self.lexer.skip_line(),
        }
    }

    fn error(&self, token: &Token, code: &'static str, message: impl Into<String>) -> Diagnostic {
        let span = SourceSpan::point(
            self.lexer.path().clone(),
            SourcePosition::new(token.line, token.column),
        );
        Diagnostic::error(DiagnosticPhase::Parser, code, message, Some(span))
    }
}

/// Parses one description file.
pub fn parse_str(src: &str, path: &Path, diagnostics: &mut Vec<Diagnostic>) -> Vec<Entry> {
    Parser::new(src, path).parse(diagnostics)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn parse(src: &str) -> (Vec<Entry>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let entries = parse_str(src, Path::new("rv_i"), &mut diagnostics);
        (entries, diagnostics)
    }

    #[test]
    fn parses_all_line_forms() {
        let src = "\
# base integer
addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3
$pseudo_op rv_i::addi nop 31..0=0x13
$import rv_i::lui
c.mv rd_n0 c_rs2_n0 15..13=4 12=0 1..0=2
sext.w rd rs1 rs2=rs1 31..25=0 14..12=0 6..2=0x06 1..0=3
";
        let (entries, diagnostics) = parse(src);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(entries.len(), 5);

        let Entry::Concrete(addi) = &entries[0] else {
            panic!("expected concrete entry");
        };
        assert_eq!(addi.fields, vec!["rd", "rs1", "imm12"]);
        assert_eq!(addi.bits[1], BitAssignment { top: 6, bottom: 2, value: 4 });
        assert_eq!(addi.line, 2);

        assert!(matches!(
            &entries[1],
            Entry::Pseudo { parent_extension, parent_name, instruction }
                if parent_extension == "rv_i" && parent_name == "addi" && instruction.name == "nop"
        ));
        assert!(matches!(&entries[2], Entry::Import { extension, name, .. } if extension == "rv_i" && name == "lui"));
        let Entry::Concrete(mv) = &entries[3] else {
            panic!("expected concrete entry");
        };
        assert_eq!(mv.bits[1], BitAssignment { top: 12, bottom: 12, value: 0 });
        assert_eq!(entries[4].name(), "sext.w");
        let Entry::Concrete(sext) = &entries[4] else {
            panic!("expected concrete entry");
        };
        assert_eq!(sext.fields[2], "rs2=rs1");
    }

    #[test]
    fn skips_malformed_lines_and_keeps_going() {
        let src = "\
bad rd 14..12=9
$frobnicate x
ok rd 31..7=0
worse rd @ 1..0=3
last rd 6..0=0x33
";
        let (entries, diagnostics) = parse(src);
        let names: Vec<_> = entries.iter().map(Entry::name).collect();
        assert_eq!(names, vec!["ok", "last"]);
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics[0].code, "riscv.parser.range");
        assert_eq!(diagnostics[1].code, "riscv.parser.directive");
        assert_eq!(diagnostics[2].code, "riscv.lexer.unexpected-char");
        assert!(diagnostics[1].format_human().contains("rv_i:2:"));
    }

    #[test]
    fn import_requires_qualified_name() {
        let (entries, diagnostics) = parse("$import lui\nlui rd imm20 6..2=0x0D 1..0=3\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'::'"), "{}", diagnostics[0].message);
        // the following line survives the recovery
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "lui");
    }
}
