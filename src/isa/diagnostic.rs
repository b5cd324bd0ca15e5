use std::fmt;
use std::path::PathBuf;

/// Stage of the build that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticPhase {
    Lexer,
    Parser,
    Ingestion,
    Assignment,
    Emission,
    TestGeneration,
}

/// Severity of a build diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// A 1-indexed line/column position inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Location of a diagnostic within a specific input file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub path: PathBuf,
    pub start: SourcePosition,
}

impl SourceSpan {
    pub fn point(path: PathBuf, position: SourcePosition) -> Self {
        Self {
            path,
            start: position,
        }
    }

    /// Span for inputs that have no meaningful line structure, such as one XML document.
    pub fn file(path: PathBuf) -> Self {
        Self {
            path,
            start: SourcePosition::new(0, 0),
        }
    }
}

/// Structured diagnostic emitted while ingesting or compiling instruction descriptions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub phase: DiagnosticPhase,
    pub level: DiagnosticLevel,
    pub code: &'static str,
    pub message: String,
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    pub fn new(
        phase: DiagnosticPhase,
        level: DiagnosticLevel,
        code: &'static str,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        Self {
            phase,
            level,
            code,
            message: message.into(),
            span,
        }
    }

    pub fn warning(
        phase: DiagnosticPhase,
        code: &'static str,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        Self::new(phase, DiagnosticLevel::Warning, code, message, span)
    }

    pub fn error(
        phase: DiagnosticPhase,
        code: &'static str,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        Self::new(phase, DiagnosticLevel::Error, code, message, span)
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }

    pub fn format_human(&self) -> String {
        let location = self
            .span
            .as_ref()
            .map(|span| {
                if span.start.line == 0 {
                    span.path.display().to_string()
                } else {
                    format!("{}:{}:{}", span.path.display(), span.start.line, span.start.column)
                }
            })
            .unwrap_or_else(|| "<unknown>".to_string());
        format!(
            "{level:?} {code}: {message} @ {location}",
            level = self.level,
            code = self.code,
            message = self.message,
            location = location
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_human())
    }
}

/// Prints every diagnostic on standard error, one per line.
pub fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.format_human());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn formats_point_location() {
        let diag = Diagnostic::warning(
            DiagnosticPhase::Lexer,
            "riscv.lexer.unexpected-char",
            "unexpected character '@'",
            Some(SourceSpan::point(
                PathBuf::from("rv_i"),
                SourcePosition::new(3, 7),
            )),
        );
        assert_eq!(
            diag.format_human(),
            "Warning riscv.lexer.unexpected-char: unexpected character '@' @ rv_i:3:7"
        );
    }

    #[test]
    fn formats_whole_file_and_missing_location() {
        let diag = Diagnostic::error(
            DiagnosticPhase::Ingestion,
            "aarch64.xml",
            "bad document",
            Some(SourceSpan::file(PathBuf::from("add.xml"))),
        );
        assert!(diag.format_human().ends_with("@ add.xml"));
        assert!(diag.is_error());

        let bare = Diagnostic::warning(DiagnosticPhase::Emission, "emit.note", "x", None);
        assert!(bare.format_human().ends_with("@ <unknown>"));
    }
}
