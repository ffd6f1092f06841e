//! Read a rendered command line back into a [`CommandSpec`].
//!
//! Grammar: `<HEADER>[ <arg>[,<arg>]]`, header matched case-insensitively.
//! Arguments go through the same validator as [`CommandSpec::new`], so
//! `parse_line(&spec.render())` always yields `spec` again.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::command::{CommandKind, CommandSpec};
use crate::core::error::InvalidParameter;
use crate::core::param::RawParam;

const MAX_ARGS: usize = 2;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<header>[A-Za-z:]+\??)(?:\s+(?P<args>.*))?$").expect("valid line regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("malformed command line: {0:?}")]
    Malformed(String),

    #[error("unknown command header {0:?}")]
    UnknownHeader(String),

    #[error("expected at most 2 arguments, got {0}")]
    TooManyArguments(usize),

    #[error("argument {0} is empty")]
    EmptyArgument(usize),

    #[error(transparent)]
    Invalid(#[from] InvalidParameter),
}

/// Parse and validate one command line.
pub fn parse_line(line: &str) -> Result<CommandSpec, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    let caps = LINE_RE
        .captures(line)
        .ok_or_else(|| ParseError::Malformed(line.to_string()))?;
    let header = &caps["header"];
    let kind = CommandKind::from_prefix(header)
        .ok_or_else(|| ParseError::UnknownHeader(header.to_string()))?;

    let args = match caps.name("args") {
        Some(args) => split_args(args.as_str())?,
        None => Vec::new(),
    };
    let mut args = args.into_iter();
    let range = args.next().unwrap_or_default();
    let resolution = args.next().unwrap_or_default();
    Ok(CommandSpec::new(kind, &range, &resolution)?)
}

fn split_args(raw: &str) -> Result<Vec<RawParam>, ParseError> {
    let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    if tokens.len() > MAX_ARGS {
        return Err(ParseError::TooManyArguments(tokens.len()));
    }
    tokens
        .into_iter()
        .enumerate()
        .map(|(idx, token)| {
            if token.is_empty() {
                Err(ParseError::EmptyArgument(idx + 1))
            } else {
                Ok(RawParam::from_token(token))
            }
        })
        .collect()
}
