//! Textual form of matcher and command lists, e.g. `R(0), Ulist(21, &[0, 16]), Lit("sy")`.

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Arg {
    Int(i64),
    /// A `0b` literal, which also carries its digit count.
    Binary { value: i64, digits: u8 },
    Float(f32),
    List(Vec<i64>),
    Ident(String),
    Str(String),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Call {
    pub name: String,
    pub args: Vec<Arg>,
}

impl Call {
    pub fn int(&self, index: usize) -> Result<i64, String> {
        match self.args.get(index) {
            Some(Arg::Int(value)) | Some(Arg::Binary { value, .. }) => Ok(*value),
            other => Err(format!("{}: argument {index} must be an integer, got {other:?}", self.name)),
        }
    }

    /// Value and digit count of a binary literal argument.
    pub fn binary(&self, index: usize) -> Result<(i64, u8), String> {
        match self.args.get(index) {
            Some(Arg::Binary { value, digits }) => Ok((*value, *digits)),
            other => Err(format!("{}: argument {index} must be a 0b literal, got {other:?}", self.name)),
        }
    }

    pub fn small(&self, index: usize) -> Result<u8, String> {
        let value = self.int(index)?;
        u8::try_from(value).map_err(|_| format!("{}: argument {index} out of range: {value}", self.name))
    }

    pub fn list(&self, index: usize) -> Result<&[i64], String> {
        match self.args.get(index) {
            Some(Arg::List(values)) => Ok(values),
            other => Err(format!("{}: argument {index} must be a list, got {other:?}", self.name)),
        }
    }

    /// Identifier or string argument.
    pub fn word(&self, index: usize) -> Result<&str, String> {
        match self.args.get(index) {
            Some(Arg::Ident(word)) | Some(Arg::Str(word)) => Ok(word),
            other => Err(format!("{}: argument {index} must be a name, got {other:?}", self.name)),
        }
    }

    pub fn arity(&self, expected: usize) -> Result<(), String> {
        if self.args.len() == expected {
            Ok(())
        } else {
            Err(format!(
                "{} takes {expected} argument(s), got {}",
                self.name,
                self.args.len()
            ))
        }
    }
}

struct Cursor<'src> {
    src: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    fn peek(&self) -> Option<char> {
        self.src[self.offset..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.offset += ch.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(format!("expected '{expected}' at offset {} in '{}'", self.offset, self.src))
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset;
        while matches!(self.peek(), Some(ch) if pred(ch)) {
            self.bump();
        }
        &self.src[start..self.offset]
    }

    fn ident(&mut self) -> Result<String, String> {
        self.skip_ws();
        let word = self.take_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if word.is_empty() || word.starts_with(|ch: char| ch.is_ascii_digit()) {
            return Err(format!("expected a name at offset {} in '{}'", self.offset, self.src));
        }
        Ok(word.to_string())
    }

    fn number(&mut self) -> Result<Arg, String> {
        self.skip_ws();
        let start = self.offset;
        if self.peek() == Some('-') {
            self.bump();
        }
        let body = self.take_while(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '.');
        let raw = &self.src[start..self.offset];
        if body.contains('.') {
            return raw
                .parse::<f32>()
                .map(Arg::Float)
                .map_err(|_| format!("invalid float literal '{raw}'"));
        }
        let value = parse_int(raw)?;
        match body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
            Some(bin) => {
                let digits = bin.chars().filter(|ch| *ch != '_').count();
                let digits = u8::try_from(digits).map_err(|_| format!("binary literal too long '{raw}'"))?;
                Ok(Arg::Binary { value, digits })
            }
            None => Ok(Arg::Int(value)),
        }
    }

    fn arg(&mut self) -> Result<Arg, String> {
        self.skip_ws();
        match self.peek() {
            Some('&') => {
                self.bump();
                self.expect('[')?;
                let mut values = Vec::new();
                if !self.eat(']') {
                    loop {
                        match self.number()? {
                            Arg::Int(value) | Arg::Binary { value, .. } => values.push(value),
                            other => return Err(format!("list element must be an integer, got {other:?}")),
                        }
                        if self.eat(']') {
                            break;
                        }
                        self.expect(',')?;
                    }
                }
                Ok(Arg::List(values))
            }
            Some('"') => {
                self.bump();
                let text = self.take_while(|ch| ch != '"').to_string();
                self.expect('"')?;
                Ok(Arg::Str(text))
            }
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.number(),
            _ => self.ident().map(Arg::Ident),
        }
    }
}

/// Parses integers in decimal, `0x` hex, or `0b` binary, with an optional leading `-` and `_`
/// separators.
pub(crate) fn parse_int(raw: &str) -> Result<i64, String> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let digits = digits.replace('_', "");
    let parsed = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16)
    } else if let Some(bin) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2)
    } else {
        digits.parse::<i64>()
    };
    parsed
        .map(|value| if negative { -value } else { value })
        .map_err(|_| format!("invalid integer literal '{raw}'"))
}

/// Parses a comma separated list of `Name` or `Name(args)` items. An empty string is an empty
/// list.
pub(crate) fn parse_calls(text: &str) -> Result<Vec<Call>, String> {
    let mut cursor = Cursor { src: text, offset: 0 };
    let mut calls = Vec::new();
    cursor.skip_ws();
    if cursor.peek().is_none() {
        return Ok(calls);
    }
    loop {
        let name = cursor.ident()?;
        let mut args = Vec::new();
        if cursor.eat('(') && !cursor.eat(')') {
            loop {
                args.push(cursor.arg()?);
                if cursor.eat(')') {
                    break;
                }
                cursor.expect(',')?;
            }
        }
        calls.push(Call { name, args });
        cursor.skip_ws();
        if cursor.peek().is_none() {
            return Ok(calls);
        }
        cursor.expect(',')?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calls_with_mixed_arguments() {
        let calls = parse_calls(r#"R(0), Ulist(21, &[0, 16]), Lit("sy"), End, Static(22, 0b11)"#)
            .expect("parse");
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0].name, "R");
        assert_eq!(calls[1].list(1).expect("list"), &[0, 16]);
        assert_eq!(calls[2].word(0).expect("word"), "sy");
        assert!(calls[3].args.is_empty());
        assert_eq!(calls[4].int(1).expect("int"), 3);
        assert_eq!(calls[4].binary(1).expect("binary"), (3, 2));
        assert!(calls[4].binary(0).is_err());
    }

    #[test]
    fn parses_negative_float_and_identifier_arguments() {
        let calls = parse_calls("LitFloat(0.0), Offset(BCOND), Usub(10, 6, -1)").expect("parse");
        assert_eq!(calls[0].args, vec![Arg::Float(0.0)]);
        assert_eq!(calls[1].word(0).expect("ident"), "BCOND");
        assert_eq!(calls[2].int(2).expect("int"), -1);
    }

    #[test]
    fn empty_text_is_empty_list_and_garbage_is_rejected() {
        assert!(parse_calls("   ").expect("empty").is_empty());
        assert!(parse_calls("R(0) R(5)").is_err());
        assert!(parse_calls("R(0,").is_err());
    }
}
