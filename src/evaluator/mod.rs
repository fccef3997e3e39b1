//! An AST evaluator for the Monkey programming language from
//! <https://interpreterbook.com/>.

pub mod error;
pub use error::{Error, Result};

use crate::ast;
use crate::object::{self, Builtin, Environment, Hashable, Object};

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::rc::Rc;
use std::result;

/// Evaluates `prog` in `env` with no limit on call depth.
pub fn eval(prog: &ast::Program, env: &Environment) -> Result<Object> {
    Evaluator::new().eval(prog, env)
}

/// Walks an `ast::Program` to produce an `Object`.
///
/// Integer arithmetic wraps on overflow. Without a depth limit, unbounded
/// recursion in the evaluated program will exhaust the native stack.
#[derive(Debug, Default)]
pub struct Evaluator {
    max_depth: Option<usize>,
    depth: usize,
}

// Unwinds evaluation up to the nearest function boundary for a return, or
// out of the program entirely for an error.
enum Unwind {
    Return(Object),
    Error(Error),
}

impl From<Error> for Unwind {
    fn from(err: Error) -> Self {
        Unwind::Error(err)
    }
}

type Flow<T> = result::Result<T, Unwind>;

impl Evaluator {
    /// Creates an `Evaluator` with no limit on call depth.
    pub fn new() -> Self {
        Evaluator::default()
    }

    /// Creates an `Evaluator` which fails with `Error::DepthExceeded` rather
    /// than nest more than `max_depth` function calls.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Evaluator {
            max_depth: Some(max_depth),
            depth: 0,
        }
    }

    /// Evaluates a program and returns the value of its last statement, or
    /// the value of a top-level `return`. Evaluation stops at the first
    /// error; bindings made before it remain in `env`.
    pub fn eval(&mut self, prog: &ast::Program, env: &Environment) -> Result<Object> {
        self.depth = 0;
        let mut result = Object::Null;

        for stmt in &prog.statements {
            result = match self.eval_statement(stmt, env) {
                Ok(obj) => obj,
                Err(Unwind::Return(obj)) => return Ok(obj),
                Err(Unwind::Error(err)) => return Err(err),
            };
        }

        Ok(result)
    }

    fn eval_statement(&mut self, stmt: &ast::Statement, env: &Environment) -> Flow<Object> {
        match stmt {
            ast::Statement::Expression(expr) => self.eval_expression(expr, env),
            ast::Statement::Let(stmt) => {
                let obj = self.eval_expression(&stmt.value, env)?;

                // eval succeeded; capture this binding in our environment.
                env.set(stmt.name.clone(), obj.clone());
                Ok(obj)
            }
            ast::Statement::Return(ret) => {
                Err(Unwind::Return(self.eval_expression(&ret.value, env)?))
            }
        }
    }

    /// Evaluates a block statement and returns the value of its last
    /// statement. A return unwinds past the block to the enclosing function.
    fn eval_block_statement(
        &mut self,
        block: &ast::BlockStatement,
        env: &Environment,
    ) -> Flow<Object> {
        let mut result = Object::Null;

        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
        }

        Ok(result)
    }

    fn eval_expression(&mut self, expr: &ast::Expression, env: &Environment) -> Flow<Object> {
        match expr {
            ast::Expression::Identifier(id) => Ok(eval_identifier(id, env)?),
            ast::Expression::Integer(i) => Ok(Object::Integer(*i)),
            ast::Expression::Boolean(b) => Ok(Object::Boolean(*b)),
            ast::Expression::String(s) => Ok(Object::String(s.clone())),
            ast::Expression::Array(a) => Ok(Object::Array(object::Array {
                elements: self.eval_expressions(&a.elements, env)?,
            })),
            ast::Expression::Hash(h) => self.eval_hash_literal(h, env),
            ast::Expression::Prefix(p) => {
                // Evaluate the right side before applying the prefix operator.
                let right = self.eval_expression(&p.right, env)?;
                Ok(eval_prefix_expression(p.operator, right)?)
            }
            ast::Expression::Infix(i) => {
                let left = self.eval_expression(&i.left, env)?;
                let right = self.eval_expression(&i.right, env)?;
                Ok(eval_infix_expression(i.operator, left, right)?)
            }
            ast::Expression::If(stmt) => self.eval_if_expression(stmt, env),
            ast::Expression::Function(func) => {
                let obj = Object::Function(Rc::new(object::Function {
                    parameters: func.parameters.clone(),
                    body: func.body.clone(),
                    env: env.clone(),
                }));

                // A named function is also bound where it is defined, which
                // lets it call itself.
                if let Some(name) = &func.name {
                    env.set(name.clone(), obj.clone());
                }

                Ok(obj)
            }
            ast::Expression::Call(call) => {
                let func = self.eval_expression(&call.function, env)?;
                let args = self.eval_expressions(&call.arguments, env)?;

                Ok(self.apply_function(func, &args)?)
            }
            ast::Expression::Index(i) => {
                let left = self.eval_expression(&i.left, env)?;
                let index = self.eval_expression(&i.index, env)?;

                Ok(eval_index_expression(left, index)?)
            }
        }
    }

    /// Evaluates several expressions in order and produces objects for each
    /// of them.
    fn eval_expressions(
        &mut self,
        expressions: &[ast::Expression],
        env: &Environment,
    ) -> Flow<Vec<Object>> {
        let mut results = vec![];

        for expr in expressions {
            results.push(self.eval_expression(expr, env)?);
        }

        Ok(results)
    }

    fn eval_hash_literal(&mut self, hash: &ast::HashLiteral, env: &Environment) -> Flow<Object> {
        let mut pairs = BTreeMap::new();

        for (k, v) in &hash.pairs {
            let key = self.eval_expression(k, env)?;
            let key =
                Hashable::from_object(&key).ok_or_else(|| Error::UnhashableKey(key.type_name()))?;

            pairs.insert(key, self.eval_expression(v, env)?);
        }

        Ok(Object::Hash(object::Hash { pairs }))
    }

    /// Evaluates an if/else expression to produce an Object.
    fn eval_if_expression(&mut self, expr: &ast::IfExpression, env: &Environment) -> Flow<Object> {
        let condition = self.eval_expression(&expr.condition, env)?;

        if condition.is_truthy() {
            self.eval_block_statement(&expr.consequence, env)
        } else if let Some(alt) = &expr.alternative {
            self.eval_block_statement(alt, env)
        } else {
            Ok(Object::Null)
        }
    }

    /// Applies a function or built-in with arguments to produce a result
    /// object.
    fn apply_function(&mut self, func: Object, args: &[Object]) -> Result<Object> {
        let function = match func {
            Object::Function(f) => f,
            // Built-ins use their own execution logic.
            Object::Builtin(b) => return Ok(b.apply(args)?),
            other => return Err(Error::NotAFunction(other.type_name())),
        };

        if let Some(max) = self.max_depth {
            if self.depth >= max {
                return Err(Error::DepthExceeded(max));
            }
        }

        // Bind function arguments in an enclosed environment.
        let extended_env = extend_function_env(&function, args)?;

        tracing::trace!(depth = self.depth, arguments = args.len(), "applying function");

        self.depth += 1;
        let evaluated = self.eval_block_statement(&function.body, &extended_env);
        self.depth -= 1;

        // A return stops at the function boundary.
        match evaluated {
            Ok(obj) | Err(Unwind::Return(obj)) => Ok(obj),
            Err(Unwind::Error(err)) => Err(err),
        }
    }
}

/// Evaluates an object bound to an identifier and returns the result.
fn eval_identifier(id: &str, env: &Environment) -> Result<Object> {
    if let Some(obj) = env.get(id) {
        return Ok(obj);
    }

    // User-defined identifiers may shadow built-ins.
    Builtin::lookup(id)
        .map(Object::Builtin)
        .ok_or_else(|| Error::UnknownIdentifier(id.to_string()))
}

/// Evaluates a prefix expression to produce an Object.
fn eval_prefix_expression(operator: ast::PrefixOperator, right: Object) -> Result<Object> {
    match operator {
        // Logical negation of the operand's truthiness.
        ast::PrefixOperator::Bang => Ok(Object::Boolean(!right.is_truthy())),
        // Negative numbers.
        ast::PrefixOperator::Minus => match right {
            Object::Integer(i) => Ok(Object::Integer(i.wrapping_neg())),

            _ => Err(Error::UnknownPrefixOperator {
                operator,
                right: right.type_name(),
            }),
        },
    }
}

/// Evaluates an infix expression to produce an Object.
fn eval_infix_expression(operator: ast::InfixOperator, left: Object, right: Object) -> Result<Object> {
    use crate::ast::InfixOperator as Op;

    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),

        (Object::String(l), Object::String(r)) => match operator {
            Op::Plus => Ok(Object::String(l.to_owned() + r)),
            Op::Equal => Ok(Object::Boolean(l == r)),
            Op::NotEqual => Ok(Object::Boolean(l != r)),

            _ => Err(unknown_operator(operator, &left, &right)),
        },

        (Object::Boolean(l), Object::Boolean(r)) => match operator {
            Op::Equal => Ok(Object::Boolean(l == r)),
            Op::NotEqual => Ok(Object::Boolean(l != r)),

            _ => Err(unknown_operator(operator, &left, &right)),
        },

        (Object::Null, Object::Null) => match operator {
            Op::Equal => Ok(Object::Boolean(true)),
            Op::NotEqual => Ok(Object::Boolean(false)),

            _ => Err(unknown_operator(operator, &left, &right)),
        },

        _ if left.type_name() != right.type_name() => Err(Error::TypeMismatch {
            left: left.type_name(),
            operator,
            right: right.type_name(),
        }),

        _ => Err(unknown_operator(operator, &left, &right)),
    }
}

// Evaluates `l (op) r` for two integers. Arithmetic wraps on overflow.
fn eval_integer_infix(operator: ast::InfixOperator, l: i64, r: i64) -> Result<Object> {
    use crate::ast::InfixOperator as Op;

    let obj = match operator {
        Op::Plus => Object::Integer(l.wrapping_add(r)),
        Op::Minus => Object::Integer(l.wrapping_sub(r)),
        Op::Asterisk => Object::Integer(l.wrapping_mul(r)),
        Op::Slash => {
            if r == 0 {
                return Err(Error::DivisionByZero);
            }

            Object::Integer(l.wrapping_div(r))
        }
        Op::LessThan => Object::Boolean(l < r),
        Op::GreaterThan => Object::Boolean(l > r),
        Op::Equal => Object::Boolean(l == r),
        Op::NotEqual => Object::Boolean(l != r),
    };

    Ok(obj)
}

fn unknown_operator(operator: ast::InfixOperator, left: &Object, right: &Object) -> Error {
    Error::UnknownOperator {
        left: left.type_name(),
        operator,
        right: right.type_name(),
    }
}

/// Evaluates an index into an array or hash. Out of range indices and
/// missing keys produce null.
fn eval_index_expression(left: Object, index: Object) -> Result<Object> {
    match (&left, &index) {
        (Object::Array(a), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| a.elements.get(i))
            .cloned()
            .unwrap_or(Object::Null)),

        (Object::Hash(h), key) => {
            let key =
                Hashable::from_object(key).ok_or_else(|| Error::UnhashableKey(key.type_name()))?;

            Ok(h.pairs.get(&key).cloned().unwrap_or(Object::Null))
        }

        _ => Err(Error::IndexNotSupported {
            left: left.type_name(),
            index: index.type_name(),
        }),
    }
}

// Extends a function's environment to bind its arguments.
fn extend_function_env(func: &object::Function, args: &[Object]) -> Result<Environment> {
    if func.parameters.len() != args.len() {
        return Err(Error::WrongArgumentCount {
            want: func.parameters.len(),
            got: args.len(),
        });
    }

    let env = Environment::new_enclosed(&func.env);

    for (param, arg) in func.parameters.iter().zip(args) {
        env.set(param.clone(), arg.clone());
    }

    Ok(env)
}
