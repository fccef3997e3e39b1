//! Built-in functions available to every Monkey program.

use crate::object::{Error, Object, Result};

use std::fmt;

/// The object representation of a built-in Monkey function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Builtin {
    Len,
}

impl Builtin {
    /// Constructs a built-in using its name.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Builtin::Len),

            _ => None,
        }
    }

    /// Applies the appropriate built-in function on `args` to produce an
    /// `Object`.
    pub fn apply(&self, args: &[Object]) -> Result<Object> {
        match self {
            Builtin::Len => builtin_len(args),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Builtin::Len => write!(f, "len"),
        }
    }
}

fn builtin_len(args: &[Object]) -> Result<Object> {
    if args.len() != 1 {
        return Err(Error::Builtin(
            Builtin::Len,
            format!("expected 1 argument, but got {}", args.len()),
        ));
    }

    match &args[0] {
        Object::String(s) => Ok(Object::Integer(s.len() as i64)),
        Object::Array(a) => Ok(Object::Integer(a.elements.len() as i64)),

        obj => Err(Error::Builtin(
            Builtin::Len,
            format!("argument of type {} is not supported", obj.type_name()),
        )),
    }
}
