//! Matcher and command catalogs, the field-to-encoder derivation and the reference encoder.

pub mod command;
pub mod derive;
pub mod immediates;
pub mod interp;
pub mod matcher;
pub mod scattered;
pub mod syntax;
pub mod tables;

pub use command::{Command, Relocation, SpecialComm};
pub use interp::{EncodeError, EncodeErrorKind, EncodeOptions, Operand, encode};
pub use matcher::{Matcher, RegFamily};
