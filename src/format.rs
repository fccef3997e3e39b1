//! A source formatter for the Monkey programming language.
//!
//! Formatting a parsed `ast::Program` produces canonical source: one
//! statement per line, each ending in `;`, block bodies indented by four
//! spaces, and parentheses only where operator precedence requires them.
//! Parsing the output produces the same `ast::Program` again.

use crate::ast;
use crate::parser::Precedence;

const INDENT: &str = "    ";

/// Formats `prog` as canonical Monkey source.
pub fn format(prog: &ast::Program) -> String {
    Formatter::new().format(prog)
}

/// Produces canonical Monkey source from an `ast::Program`.
#[derive(Debug, Default)]
pub struct Formatter {
    out: String,
    depth: usize,
}

impl Formatter {
    /// Creates a new `Formatter`.
    pub fn new() -> Self {
        Formatter::default()
    }

    /// Consumes the `Formatter` to format every statement in `prog`.
    pub fn format(mut self, prog: &ast::Program) -> String {
        for (i, stmt) in prog.statements.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }

            self.statement(stmt);
        }

        self.out
    }

    fn statement(&mut self, stmt: &ast::Statement) {
        match stmt {
            ast::Statement::Let(stmt) => {
                self.out.push_str("let ");
                self.out.push_str(&stmt.name);
                self.out.push_str(" = ");
                self.expression(&stmt.value);
            }
            ast::Statement::Return(stmt) => {
                self.out.push_str("return ");
                self.expression(&stmt.value);
            }
            ast::Statement::Expression(expr) => self.expression(expr),
        }

        self.out.push(';');
    }

    fn block(&mut self, block: &ast::BlockStatement) {
        if block.statements.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push_str("{\n");
        self.depth += 1;

        for stmt in &block.statements {
            self.indent();
            self.statement(stmt);
            self.out.push('\n');
        }

        self.depth -= 1;
        self.indent();
        self.out.push('}');
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    /// Formats an expression whose surroundings already delimit it, so it
    /// needs no outer parentheses.
    fn expression(&mut self, expr: &ast::Expression) {
        match expr {
            ast::Expression::Identifier(id) => self.out.push_str(id),
            ast::Expression::Integer(i) => self.out.push_str(&i.to_string()),
            ast::Expression::Boolean(b) => self.out.push_str(&b.to_string()),
            ast::Expression::String(s) => {
                self.out.push('"');
                self.out.push_str(s);
                self.out.push('"');
            }
            ast::Expression::Array(a) => {
                self.out.push('[');
                self.list(&a.elements);
                self.out.push(']');
            }
            ast::Expression::Hash(h) => {
                self.out.push('{');
                for (i, (k, v)) in h.pairs.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }

                    self.expression(k);
                    self.out.push_str(": ");
                    self.expression(v);
                }
                self.out.push('}');
            }
            ast::Expression::Prefix(p) => {
                self.out.push_str(&p.operator.to_string());
                self.operand(&p.right, Precedence::Prefix, false);
            }
            ast::Expression::Infix(i) => {
                // Operators associate to the left, so a right operand of equal
                // precedence keeps its parentheses.
                let precedence = Precedence::of_operator(i.operator);

                self.operand(&i.left, precedence, false);
                self.out.push(' ');
                self.out.push_str(&i.operator.to_string());
                self.out.push(' ');
                self.operand(&i.right, precedence, true);
            }
            ast::Expression::If(expr) => {
                self.out.push_str("if (");
                self.expression(&expr.condition);
                self.out.push_str(") ");
                self.block(&expr.consequence);

                if let Some(alt) = &expr.alternative {
                    self.out.push_str(" else ");
                    self.block(alt);
                }
            }
            ast::Expression::Function(func) => {
                self.out.push_str("fn");
                if let Some(name) = &func.name {
                    self.out.push(' ');
                    self.out.push_str(name);
                }

                self.out.push('(');
                self.out.push_str(&func.parameters.join(", "));
                self.out.push_str(") ");
                self.block(&func.body);
            }
            ast::Expression::Call(call) => {
                self.postfix_operand(&call.function);
                self.out.push('(');
                self.list(&call.arguments);
                self.out.push(')');
            }
            ast::Expression::Index(index) => {
                self.postfix_operand(&index.left);
                self.out.push('[');
                self.expression(&index.index);
                self.out.push(']');
            }
        }
    }

    // Formats an operand which must bind more tightly than `precedence`, or at
    // least as tightly unless `strict` is set, parenthesizing it otherwise.
    fn operand(&mut self, expr: &ast::Expression, precedence: Precedence, strict: bool) {
        let binds = binding(expr);
        let parenthesize = if strict {
            binds <= precedence
        } else {
            binds < precedence
        };

        if parenthesize {
            self.out.push('(');
            self.expression(expr);
            self.out.push(')');
        } else {
            self.expression(expr);
        }
    }

    // Calls and indexes chain onto anything tighter than a prefix operator.
    fn postfix_operand(&mut self, expr: &ast::Expression) {
        self.operand(expr, Precedence::Prefix, true);
    }

    fn list(&mut self, exprs: &[ast::Expression]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }

            self.expression(expr);
        }
    }
}

// Returns how tightly an expression binds when it appears as an operand.
fn binding(expr: &ast::Expression) -> Precedence {
    match expr {
        ast::Expression::Infix(i) => Precedence::of_operator(i.operator),
        ast::Expression::Prefix(_) => Precedence::Prefix,
        ast::Expression::Call(_) => Precedence::Call,
        _ => Precedence::Index,
    }
}
