//! Error types for the `object` module.

use std::result;

use crate::object::Builtin;

extern crate thiserror;
use thiserror::Error;

/// A Result type specialized for use with an Error.
pub type Result<T> = result::Result<T, Error>;

/// Specifies the different classes of errors which may occur.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("built-in {0}: {1}")]
    Builtin(Builtin, String),
}
