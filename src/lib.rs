//! Instruction-encoding table compiler.
//!
//! Raw AArch64 XML pages and RISC-V opcode files are ingested into one canonical variant model,
//! matched against the translation catalog (or derived field by field), folded and written as
//! `Ops!` tables for the assembler's code generator. The `testgen` module samples the compiled
//! rows to produce differential test cases against a reference assembler.

pub mod config;
pub mod emit;
pub mod encode;
pub mod isa;
pub mod loader;
pub mod pipeline;
pub mod testgen;
pub mod translate;
