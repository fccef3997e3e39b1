//! Error types for the `evaluator` module.

use std::result;

use crate::ast::{InfixOperator, PrefixOperator};
use crate::object;

extern crate thiserror;
use thiserror::Error;

/// A Result type specialized for use with an Error.
pub type Result<T> = result::Result<T, Error>;

/// Describes runtime errors which may occur while evaluating a program.
/// Operand types are named as reported by `Object::type_name`.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("identifier not found: {0}")]
    UnknownIdentifier(String),
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: InfixOperator,
        right: &'static str,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownOperator {
        left: &'static str,
        operator: InfixOperator,
        right: &'static str,
    },
    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator {
        operator: PrefixOperator,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("not a function: {0}")]
    NotAFunction(&'static str),
    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },
    #[error("unusable as hash key: {0}")]
    UnhashableKey(&'static str),
    #[error("index operator not supported: {left}[{index}]")]
    IndexNotSupported {
        left: &'static str,
        index: &'static str,
    },
    #[error("maximum call depth of {0} exceeded")]
    DepthExceeded(usize),
    #[error(transparent)]
    Object(#[from] object::Error),
}
