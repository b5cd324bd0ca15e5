//! Tokenizer for the line-oriented opcode description files.

use std::path::PathBuf;

use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase, SourcePosition, SourceSpan};

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Dollar,
    DoubleColon,
    DoublePeriod,
    Equals,
    Number,
    Name,
    Newline,
    EOF,
}

#[derive(Clone, Copy)]
enum Radix {
    Binary,
    Decimal,
    Hex,
}

impl Radix {
    fn accepts(self, ch: char) -> bool {
        match self {
            Radix::Binary => matches!(ch, '0' | '1'),
            Radix::Decimal => ch.is_ascii_digit(),
            Radix::Hex => ch.is_ascii_hexdigit(),
        }
    }

    fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

pub struct Lexer<'src> {
    src: &'src str,
    path: PathBuf,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str, path: PathBuf) -> Self {
        Self {
            src,
            path,
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Produces the next token. Newlines are significant and reported as tokens.
    pub fn next_token(&mut self) -> Result<Token, Diagnostic> {
        self.skip_ignorable();
        let (line, column) = self.position();
        let Some(ch) = self.peek_char() else {
            return Ok(self.make_token(TokenKind::EOF, "", line, column));
        };

        match ch {
            '\n' => Ok(self.consume_single(TokenKind::Newline)),
            '$' => Ok(self.consume_single(TokenKind::Dollar)),
            '=' => Ok(self.consume_single(TokenKind::Equals)),
            ':' if self.peek_next_char() == Some(':') => Ok(self.consume_pair(TokenKind::DoubleColon)),
            '.' if self.peek_next_char() == Some('.') => Ok(self.consume_pair(TokenKind::DoublePeriod)),
            ch if ch.is_ascii_digit() => self.consume_number(),
            ch if is_name_start(ch) => Ok(self.consume_name()),
            _ => {
                let err = self.error_here("riscv.lexer.unexpected-char", format!("unexpected character '{ch}'"));
                self.advance_char();
                Err(err)
            }
        }
    }

    /// Skips the rest of the current line, leaving the newline itself unconsumed.
    pub fn skip_line(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance_char();
        }
    }

    fn consume_name(&mut self) -> Token {
        let start = self.offset;
        let (line, column) = self.position();
        self.advance_char();
        loop {
            match self.peek_char() {
                Some(ch) if is_name_part(ch) => self.advance_char(),
                // a dot joins name segments but never starts a `..`
                Some('.') if self.peek_next_char().is_some_and(is_name_part) => self.advance_char(),
                _ => break,
            }
        }
        self.make_token_from_span(TokenKind::Name, start, self.offset, line, column)
    }

    fn consume_number(&mut self) -> Result<Token, Diagnostic> {
        let start = self.offset;
        let (line, column) = self.position();
        let mut radix = Radix::Decimal;
        let mut digits = 0usize;

        if self.peek_char() == Some('0') {
            match self.peek_next_char() {
                Some('x' | 'X') => {
                    radix = Radix::Hex;
                    self.advance_char();
                    self.advance_char();
                }
                Some('b' | 'B') => {
                    radix = Radix::Binary;
                    self.advance_char();
                    self.advance_char();
                }
                _ => {}
            }
        }

        while let Some(ch) = self.peek_char() {
            if radix.accepts(ch) {
                self.advance_char();
                digits += 1;
            } else {
                break;
            }
        }

        if digits == 0 {
            return Err(self.error_at(
                "riscv.lexer.number",
                "numeric literal requires digits after prefix",
                line,
                column,
            ));
        }
        if self.peek_char().is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(self.error_at(
                "riscv.lexer.number",
                format!("malformed numeric literal '{}'", &self.src[start..=self.offset]),
                line,
                column,
            ));
        }
        Ok(self.make_token_from_span(TokenKind::Number, start, self.offset, line, column))
    }

    fn consume_single(&mut self, kind: TokenKind) -> Token {
        let start = self.offset;
        let (line, column) = self.position();
        self.advance_char();
        self.make_token_from_span(kind, start, self.offset, line, column)
    }

    fn consume_pair(&mut self, kind: TokenKind) -> Token {
        let start = self.offset;
        let (line, column) = self.position();
        self.advance_char();
        self.advance_char();
        self.make_token_from_span(kind, start, self.offset, line, column)
    }

    fn skip_ignorable(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '#' => {
                    while self.peek_char().is_some_and(|ch| ch != '\n') {
                        self.advance_char();
                    }
                }
                '\n' => break,
                ch if ch.is_whitespace() => self.advance_char(),
                _ => break,
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.offset..].chars().next()
    }

    fn peek_next_char(&self) -> Option<char> {
        let mut iter = self.src[self.offset..].chars();
        iter.next()?;
        iter.next()
    }

    fn advance_char(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.offset += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    fn position(&self) -> (usize, usize) {
        (self.line, self.column + 1)
    }

    fn make_token(&self, kind: TokenKind, lexeme: &str, line: usize, column: usize) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            line,
            column,
        }
    }

    fn make_token_from_span(
        &self,
        kind: TokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
    ) -> Token {
        self.make_token(kind, &self.src[start..end], line, column)
    }

    fn error_at(
        &self,
        code: &'static str,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Diagnostic {
        let span = SourceSpan::point(self.path.clone(), SourcePosition::new(line, column));
        Diagnostic::error(DiagnosticPhase::Lexer, code, message, Some(span))
    }

    fn error_here(&self, code: &'static str, message: impl Into<String>) -> Diagnostic {
        let (line, column) = self.position();
        self.error_at(code, message, line, column)
    }
}

/// Value of a number token's lexeme (`0x..`, `0b..` or decimal).
pub fn number_value(lexeme: &str) -> Option<u64> {
    let (radix, digits) = if let Some(hex) = lexeme.strip_prefix("0x").or_else(|| lexeme.strip_prefix("0X")) {
        (Radix::Hex, hex)
    } else if let Some(bin) = lexeme.strip_prefix("0b").or_else(|| lexeme.strip_prefix("0B")) {
        (Radix::Binary, bin)
    } else {
        (Radix::Decimal, lexeme)
    };
    u64::from_str_radix(digits, radix.base()).ok()
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_name_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Lexer, TokenKind, number_value};

    fn lex(src: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(src, PathBuf::from("rv_i"));
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().expect("tokenize");
            let done = token.kind == TokenKind::EOF;
            tokens.push((token.kind, token.lexeme));
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn lexes_instruction_line() {
        let tokens = lex("addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3 # comment\n");
        let kinds: Vec<_> = tokens.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Number,
                TokenKind::DoublePeriod,
                TokenKind::Number,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::DoublePeriod,
                TokenKind::Number,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::DoublePeriod,
                TokenKind::Number,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::EOF,
            ]
        );
        assert_eq!(tokens[5].1, "..");
        assert_eq!(tokens[9].1, "6");
    }

    #[test]
    fn dotted_names_and_directives() {
        let tokens = lex("$pseudo_op rv64_i::srli c.addi16sp fence.tso rs2=rs1");
        let lexemes: Vec<_> = tokens.iter().map(|(_, lexeme)| lexeme.as_str()).collect();
        assert_eq!(
            lexemes,
            vec!["$", "pseudo_op", "rv64_i", "::", "srli", "c.addi16sp", "fence.tso", "rs2", "=", "rs1", ""]
        );
    }

    #[test]
    fn reports_position_of_bad_character() {
        let mut lexer = Lexer::new("lui rd\n  @", PathBuf::from("rv_i"));
        for _ in 0..3 {
            lexer.next_token().expect("token");
        }
        let diag = lexer.next_token().expect_err("bad char");
        assert_eq!(diag.code, "riscv.lexer.unexpected-char");
        assert!(diag.format_human().ends_with("rv_i:2:3"), "{}", diag.format_human());
    }

    #[test]
    fn parses_number_values() {
        assert_eq!(number_value("0x1F"), Some(31));
        assert_eq!(number_value("0b101"), Some(5));
        assert_eq!(number_value("42"), Some(42));
        assert_eq!(number_value("0x"), None);
    }
}
