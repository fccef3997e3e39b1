//! The entry point for hosts which evaluate Monkey source text, either once
//! or REPL-style with bindings carried from one call to the next.

use crate::evaluator::{self, Evaluator};
use crate::lexer::Lexer;
use crate::object::{Environment, Object};
use crate::parser::{self, Parser};

use std::result;

/// Evaluates `source` in a fresh environment, producing the rendered value
/// of the program or a list of diagnostics.
pub fn evaluate(source: &str) -> result::Result<String, Vec<String>> {
    Session::new().evaluate(source)
}

/// Parses `source` into an `ast::Program`, or returns every syntax error.
pub fn parse(source: &str) -> result::Result<crate::ast::Program, Vec<parser::Error>> {
    Parser::new(Lexer::new(source)).parse()
}

/// An evaluation session whose `Environment` persists across calls.
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
    evaluator: Evaluator,
}

impl Session {
    /// Creates a `Session` with an empty environment and no call depth limit.
    pub fn new() -> Self {
        Session::default()
    }

    /// Creates a `Session` whose programs may nest at most `max_depth`
    /// function calls.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Session {
            env: Environment::new(),
            evaluator: Evaluator::with_max_depth(max_depth),
        }
    }

    /// Returns the environment holding this session's bindings.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Parses and evaluates `source`, producing the resulting `Object`.
    ///
    /// Nothing is evaluated if `source` has syntax errors. On a runtime error,
    /// bindings made by earlier statements remain in the session.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run(&mut self, source: &str) -> Result<Object> {
        let program = parse(source).map_err(Error::Parse)?;

        let obj = self.evaluator.eval(&program, &self.env).map_err(|err| {
            tracing::debug!(%err, "evaluation failed");
            err
        })?;

        Ok(obj)
    }

    /// Like `run`, but renders the result for display: the printed value on
    /// success, otherwise one message per syntax error or the runtime error.
    pub fn evaluate(&mut self, source: &str) -> result::Result<String, Vec<String>> {
        self.run(source)
            .map(|obj| obj.to_string())
            .map_err(|err| err.diagnostics())
    }
}

/// A Result type specialized for use with an Error.
pub type Result<T> = result::Result<T, Error>;

/// Specifies the different classes of errors which may occur.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("found {} syntax error(s)", .0.len())]
    Parse(Vec<parser::Error>),
    #[error(transparent)]
    Eval(#[from] evaluator::Error),
}

impl Error {
    /// Returns one human-readable message per underlying error.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            Error::Parse(errs) => errs.iter().map(|err| err.to_string()).collect(),
            Error::Eval(err) => vec![err.to_string()],
        }
    }
}
