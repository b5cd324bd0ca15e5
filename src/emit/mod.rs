//! Static folding and the generated table writers.

pub mod aarch64;
pub mod digest;
pub mod fold;
pub mod riscv;

pub use aarch64::TableGroup;
pub use digest::write_if_changed;
pub use fold::{fold_all, fold_statics};
pub use riscv::RiscvGroup;
