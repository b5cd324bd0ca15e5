//! Differential test generation: random, encodable samples of every compiled row rendered in the
//! internal and the reference assembler syntax.

pub mod cases;
pub mod constraint;
pub mod render;
pub mod sample;
pub mod source;
pub mod template;

pub use cases::{CaseTarget, TestCase, generate, write_cases};
pub use sample::Sampler;
pub use source::{CompiledCase, SourceTarget, parse_compiled_cases, write_sources};
pub use template::TestTemplate;
