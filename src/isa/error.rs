use std::fmt;

use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase};

/// Fatal failures that stop a build. Every variant names the offending entity.
#[derive(Debug)]
pub enum BuildError {
    Io(std::io::Error),
    /// Two fields, or a field and a fixed bit range, claim the same bit.
    OverlappingEncoding {
        mnemonic: String,
        detail: String,
    },
    DuplicateTranslationEntry {
        mnemonic: String,
        template: String,
        fields: String,
    },
    UnresolvedVariant {
        mnemonic: String,
        template: String,
        fields: String,
    },
    /// A `names` or `bits` disambiguator selected nothing (or, for bits, more than one row).
    DisambiguationFailed {
        mnemonic: String,
        template: String,
        wanted: String,
    },
    StaticBitConflict {
        mnemonic: String,
        bit: u8,
        template: String,
    },
    UnhandledFieldCombination {
        mnemonic: String,
        fields: Vec<String>,
    },
    InvalidCatalogEntry {
        source: &'static str,
        mnemonics: String,
        template: String,
        message: String,
    },
    ImportCycle {
        chain: Vec<String>,
    },
    InvalidConfig(String),
    Diagnostics {
        phase: DiagnosticPhase,
        diagnostics: Vec<Diagnostic>,
    },
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Io(err) => write!(f, "I/O error: {err}"),
            BuildError::OverlappingEncoding { mnemonic, detail } => {
                write!(f, "overlapping encoding in '{mnemonic}': {detail}")
            }
            BuildError::DuplicateTranslationEntry {
                mnemonic,
                template,
                fields,
            } => write!(
                f,
                "duplicate translation entry for '{mnemonic}' template '{template}' fields {fields}"
            ),
            BuildError::UnresolvedVariant {
                mnemonic,
                template,
                fields,
            } => write!(
                f,
                "no translation entry for '{mnemonic}' template '{template}' fields {fields}"
            ),
            BuildError::DisambiguationFailed {
                mnemonic,
                template,
                wanted,
            } => write!(
                f,
                "disambiguation for '{mnemonic}' template '{template}' found no unique match for {wanted}"
            ),
            BuildError::StaticBitConflict {
                mnemonic,
                bit,
                template,
            } => write!(
                f,
                "static bit {bit} of '{mnemonic}' conflicts with fixed template {template}"
            ),
            BuildError::UnhandledFieldCombination { mnemonic, fields } => write!(
                f,
                "unhandled field combination in '{mnemonic}': {}",
                fields.join(", ")
            ),
            BuildError::InvalidCatalogEntry {
                source,
                mnemonics,
                template,
                message,
            } => write!(
                f,
                "invalid {source} catalog entry [{mnemonics}] '{template}': {message}"
            ),
            BuildError::ImportCycle { chain } => {
                write!(f, "cyclic import detected: {}", chain.join(" -> "))
            }
            BuildError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            BuildError::Diagnostics { phase, diagnostics } => {
                writeln!(f, "{phase:?} produced {} issue(s):", diagnostics.len())?;
                for diag in diagnostics {
                    writeln!(f, "  - {}", diag.format_human())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BuildError;

    #[test]
    fn unresolved_variant_names_entity() {
        let err = BuildError::UnresolvedVariant {
            mnemonic: "ADD".into(),
            template: "<Wd>,<Wn>".into(),
            fields: "(Rn, 5, 5), (Rd, 5, 0)".into(),
        };
        let text = err.to_string();
        assert!(text.contains("'ADD'"));
        assert!(text.contains("<Wd>,<Wn>"));
        assert!(text.contains("(Rn, 5, 5)"));
    }

    #[test]
    fn io_errors_convert() {
        let err: BuildError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, BuildError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
