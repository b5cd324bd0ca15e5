//! Ingestion adapters for the raw per-architecture descriptions.

pub mod aarch64;
pub mod riscv;
pub mod source;

pub use aarch64::Aarch64Source;
pub use riscv::{RiscvSource, RiscvTarget};
pub use source::VariantSource;
