//! Error types for the `parser` module.

use std::result;

use crate::token::{Position, Token};

extern crate thiserror;
use thiserror::Error;

/// A Result type specialized for use with an Error.
pub type Result<T> = result::Result<T, Error>;

/// A syntax error and the position in the source at which it was found.
#[derive(Debug, Error, PartialEq)]
#[error("{position}: {kind}")]
pub struct Error {
    pub kind: ErrorKind,
    pub position: Position,
}

impl Error {
    /// Creates an `Error` of `kind` found at `position`.
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Error { kind, position }
    }
}

/// Describes syntax errors which may occur during `Parser::parse`.
#[derive(Debug, Error, PartialEq)]
pub enum ErrorKind {
    #[error("expected next token to be {want}, got {got} instead")]
    UnexpectedToken { want: String, got: Token },
    #[error("no prefix parse function for {0} found")]
    NoPrefixRule(Token),
    #[error("illegal character {0:?}")]
    IllegalCharacter(char),
    #[error("could not parse {0} as integer")]
    InvalidInteger(String),
    #[error("expressions nested more than {0} deep")]
    NestingTooDeep(usize),
}
