//! Deterministic, pure command model.
//!
//! Core modules are free of I/O and logging. They validate caller input,
//! build immutable command specs, and render them to SCPI lines.

pub mod command;
pub mod error;
pub mod param;
pub mod parse;

pub use command::{CommandKind, CommandSpec};
pub use error::{InvalidParameter, UnknownCommand};
pub use param::{Field, Keyword, Number, ParamValue, RawParam, validate};
pub use parse::{ParseError, parse_line};
