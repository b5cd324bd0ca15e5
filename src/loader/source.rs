//! The capability shared by every ingestion adapter.

use crate::isa::diagnostic::Diagnostic;
use crate::isa::error::BuildError;
use crate::isa::variant::CanonicalVariant;

/// Produces canonical variants from one architecture's raw description.
///
/// Each call to [`variants`](VariantSource::variants) starts over from the loaded input, so a
/// source can be walked as many times as a build needs. Skipped records are reported through
/// `diagnostics`; only compiler-invariant violations are returned as errors.
pub trait VariantSource {
    /// Short label used in progress notes.
    fn name(&self) -> &str;

    fn variants(&self, diagnostics: &mut Vec<Diagnostic>) -> Result<Vec<CanonicalVariant>, BuildError>;
}
