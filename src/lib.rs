//! A tree-walking interpreter for the Monkey programming language from
//! <https://interpreterbook.com/>.
//!
//! ```
//! assert_eq!(rmonkey::evaluate("let x = 2; x * 21"), Ok("42".to_string()));
//! ```

pub mod ast;
pub mod evaluator;
pub mod format;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod session;
pub mod token;

pub use session::{evaluate, Session};
