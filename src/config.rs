//! Build configuration shared by the pipeline drivers and the command line tools.

use crate::isa::error::BuildError;
use crate::isa::variant::InstrClass;

/// Every tunable of a build. `Default` reproduces the reference table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Architecture revisions kept from the XML source. Records without a revision are always kept.
    pub aarch64_variants: Vec<String>,
    pub aarch64_classes: Vec<InstrClass>,
    /// Collapse rows that differ only in `W`/`X` register width into one row.
    pub merge_width_pairs: bool,
    /// Extensions starting with any of these are left out of RISC-V builds.
    pub riscv_excluded_prefixes: Vec<String>,
    /// Also read extension files from the `unratified/` directory.
    pub include_unverified: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            aarch64_variants: ["ARMv8.1", "ARMv8.2", "ARMv8.3", "ARMv8.4"]
                .into_iter()
                .map(String::from)
                .collect(),
            aarch64_classes: vec![
                InstrClass::General,
                InstrClass::System,
                InstrClass::Float,
                InstrClass::Fpsimd,
                InstrClass::Advsimd,
            ],
            merge_width_pairs: false,
            riscv_excluded_prefixes: ["v", "s", "h", "zv", "aliases"]
                .into_iter()
                .map(String::from)
                .collect(),
            include_unverified: false,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.aarch64_classes.is_empty() {
            return Err(BuildError::InvalidConfig(
                "at least one AArch64 instruction class must be selected".into(),
            ));
        }
        if let Some(prefix) = self.riscv_excluded_prefixes.iter().find(|prefix| prefix.is_empty()) {
            return Err(BuildError::InvalidConfig(format!(
                "empty RISC-V exclusion prefix {prefix:?} would exclude every extension"
            )));
        }
        Ok(())
    }

    /// Whether a record tagged with `variant` passes the architecture revision filter.
    pub fn keeps_aarch64_variant(&self, variant: Option<&str>) -> bool {
        variant.is_none_or(|name| self.aarch64_variants.iter().any(|allowed| allowed == name))
    }

    pub fn keeps_aarch64_class(&self, class: &InstrClass) -> bool {
        self.aarch64_classes.contains(class)
    }

    pub fn keeps_riscv_extension(&self, extension: &str) -> bool {
        !self
            .riscv_excluded_prefixes
            .iter()
            .any(|prefix| extension.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_build() {
        let config = BuildConfig::default();
        config.validate().expect("valid defaults");
        assert!(!config.merge_width_pairs);
        assert!(config.keeps_aarch64_variant(None));
        assert!(config.keeps_aarch64_variant(Some("ARMv8.2")));
        assert!(!config.keeps_aarch64_variant(Some("ARMv8.5")));
        assert!(config.keeps_aarch64_class(&InstrClass::Advsimd));
        assert!(!config.keeps_aarch64_class(&InstrClass::Sve));
    }

    #[test]
    fn riscv_prefixes_exclude_whole_families() {
        let config = BuildConfig::default();
        assert!(config.keeps_riscv_extension("zba"));
        assert!(config.keeps_riscv_extension("c"));
        assert!(!config.keeps_riscv_extension("zvbb"));
        assert!(!config.keeps_riscv_extension("svinval"));
        assert!(!config.keeps_riscv_extension("v"));
    }

    #[test]
    fn rejects_empty_selections() {
        let config = BuildConfig {
            aarch64_classes: Vec::new(),
            ..BuildConfig::default()
        };
        assert!(matches!(config.validate(), Err(BuildError::InvalidConfig(_))));
        let config = BuildConfig {
            riscv_excluded_prefixes: vec![String::new()],
            ..BuildConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
