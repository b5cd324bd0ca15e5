//! Canonical instruction model shared by every ingestion adapter and later stage.

pub mod compiled;
pub mod diagnostic;
pub mod error;
pub mod expand;
pub mod field;
pub mod group;
pub mod template;
pub mod variant;

pub use compiled::CompiledEntry;
pub use diagnostic::{Diagnostic, DiagnosticLevel, DiagnosticPhase};
pub use error::BuildError;
pub use field::{Field, FieldList};
pub use template::{BitTemplate, Trit};
pub use variant::{ArchTag, CanonicalVariant, InstrClass, IsaFlags};
