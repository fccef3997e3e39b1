//! Objects produced when evaluating the Monkey programming language from
//! <https://interpreterbook.com/>.

pub mod builtin;
pub use builtin::Builtin;

pub mod environment;
pub use environment::Environment;

pub mod error;
pub use error::{Error, Result};

use crate::ast;

use std::collections::BTreeMap;
use std::fmt;
use std::ptr;
use std::rc::Rc;

/// Objects produced when evaluating Monkey source code, along with their
/// associated data if applicable.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Null,
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(Array),
    Hash(Hash),
    Function(Rc<Function>),
    Builtin(Builtin),
}

impl Object {
    /// Returns the name of this object's type as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "NULL",
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
        }
    }

    /// Determines if an object is truthy in Monkey: everything except `false`
    /// and `null`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Integer(i) => i.fmt(f),
            Object::Boolean(b) => b.fmt(f),
            Object::String(s) => write!(f, "\"{}\"", s),
            Object::Array(a) => a.fmt(f),
            Object::Hash(h) => h.fmt(f),
            Object::Function(func) => func.fmt(f),
            Object::Builtin(b) => write!(f, "builtin({})", b),
        }
    }
}

/// Objects which may be used as keys in a `Hash`. Keys compare by value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hashable {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl Hashable {
    /// Converts `obj` into a `Hashable` key, or returns `None` if its type
    /// cannot be used as a key.
    pub fn from_object(obj: &Object) -> Option<Self> {
        match obj {
            Object::Integer(i) => Some(Hashable::Integer(*i)),
            Object::Boolean(b) => Some(Hashable::Boolean(*b)),
            Object::String(s) => Some(Hashable::String(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Hashable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Hashable::Integer(i) => i.fmt(f),
            Hashable::Boolean(b) => b.fmt(f),
            Hashable::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// The object representation of a Monkey array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    pub elements: Vec<Object>,
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let elements: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();

        write!(f, "[{}]", elements.join(", "))
    }
}

/// The object representation of a Monkey hash.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hash {
    pub pairs: BTreeMap<Hashable, Object>,
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();

        write!(f, "{{{}}}", pairs.join(", "))
    }
}

/// The object representation of a Monkey function: its parameters and body
/// along with the environment it closes over.
///
/// Storing a `Function` in its own `env` leaks both; see `Environment`.
pub struct Function {
    pub parameters: Vec<String>,
    pub body: ast::BlockStatement,
    pub env: Environment,
}

// Functions are only equal to themselves; comparing captured environments
// could recurse forever through a closure bound in its own environment.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let params = self.parameters.join(", ");

        write!(f, "fn({}) {{\n{}\n}}", params, self.body)
    }
}
