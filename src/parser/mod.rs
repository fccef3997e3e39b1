//! A parser for the Monkey programming language from <https://interpreterbook.com/>.

pub mod error;
pub use error::{Error, ErrorKind, Result};

use crate::ast;
use crate::lexer::Lexer;
use crate::token::{Position, Token};

use std::mem;
use std::result;

/// Operator precedence levels, from weakest to strongest binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl Precedence {
    /// Returns the binding precedence of `tok` when it appears in infix
    /// position.
    pub fn of(tok: &Token) -> Self {
        match tok {
            Token::LeftParen => Precedence::Call,
            Token::LeftBracket => Precedence::Index,
            tok => infix_operator(tok).map_or(Precedence::Lowest, Precedence::of_operator),
        }
    }

    /// Returns the binding precedence of an infix operator.
    pub fn of_operator(op: ast::InfixOperator) -> Self {
        use crate::ast::InfixOperator as Op;

        match op {
            Op::Equal | Op::NotEqual => Precedence::Equals,
            Op::LessThan | Op::GreaterThan => Precedence::LessGreater,
            Op::Plus | Op::Minus => Precedence::Sum,
            Op::Asterisk | Op::Slash => Precedence::Product,
        }
    }
}

// Maps a token to the infix operator it spells, if any.
fn infix_operator(tok: &Token) -> Option<ast::InfixOperator> {
    use crate::ast::InfixOperator as Op;

    let op = match tok {
        Token::Plus => Op::Plus,
        Token::Minus => Op::Minus,
        Token::Asterisk => Op::Asterisk,
        Token::Slash => Op::Slash,
        Token::Equal => Op::Equal,
        Token::NotEqual => Op::NotEqual,
        Token::LessThan => Op::LessThan,
        Token::GreaterThan => Op::GreaterThan,

        _ => return None,
    };

    Some(op)
}

/// The deepest expressions may nest before parsing fails with
/// `ErrorKind::NestingTooDeep`.
pub const MAX_NESTING: usize = 256;

/// Parses `Token`s and produces an `ast::Program` for the Monkey programming
/// language.
pub struct Parser<'a> {
    lexer: Lexer<'a>,

    // The current and peek tokens, along with where they start.
    current: Token,
    current_position: Position,
    peek: Token,
    peek_position: Position,

    errors: Vec<Error>,

    // How many expressions are currently being parsed inside one another.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new `Parser` which consumes `Token`s from `lexer`.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut p = Parser {
            lexer,

            current: Token::Eof,
            current_position: Position::default(),
            peek: Token::Eof,
            peek_position: Position::default(),

            errors: vec![],
            depth: 0,
        };

        p.next_token();
        p.next_token();

        p
    }

    /// Parses the input `Token` stream and creates an `ast::Program`.
    ///
    /// Parsing continues past syntax errors so that every error in the input
    /// can be reported at once. If any error occurred, all of them are
    /// returned in source order instead of the `ast::Program`.
    pub fn parse(&mut self) -> result::Result<ast::Program, Vec<Error>> {
        let mut prog = ast::Program::new();

        while !self.current_is(&Token::Eof) {
            match self.parse_statement() {
                Ok(stmt) => prog.statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }

            self.next_token();
        }

        if self.errors.is_empty() {
            Ok(prog)
        } else {
            tracing::debug!(errors = self.errors.len(), "program failed to parse");
            Err(mem::take(&mut self.errors))
        }
    }

    /// Looks at the current `Token` and determines if it is the same type as `tok`.
    fn current_is(&self, tok: &Token) -> bool {
        self.current == *tok
    }

    /// Peeks at the next `Token` and determines if it is the same type as `tok`.
    fn peek_is(&self, tok: &Token) -> bool {
        self.peek == *tok
    }

    /// Expects the next `Token` to be the same type as `tok` and advances to
    /// it, or returns an error if it is not.
    fn expect_peek(&mut self, tok: Token) -> Result<()> {
        if self.peek_is(&tok) {
            self.next_token();
            Ok(())
        } else {
            Err(self.unexpected_peek(tok.to_string()))
        }
    }

    /// Peeks and extracts the value from a `Token::Identifier`, or returns an
    /// error if the `Token` is of a different type.
    fn peek_extract_identifier(&self) -> Result<String> {
        if let Token::Identifier(id) = &self.peek {
            Ok(id.clone())
        } else {
            Err(self.unexpected_peek("identifier".to_string()))
        }
    }

    // Produces an error describing an unexpected peek token.
    fn unexpected_peek(&self, want: String) -> Error {
        Error::new(
            ErrorKind::UnexpectedToken {
                want,
                got: self.peek.clone(),
            },
            self.peek_position,
        )
    }

    /// Advances the parser once in its `Token` stream.
    fn next_token(&mut self) {
        // current takes the value of peek, and peek is overwritten immediately
        // after by the next token.
        let peek = self.lexer.next_token();
        let peek_position = self.lexer.position();

        self.current = mem::replace(&mut self.peek, peek);
        self.current_position = mem::replace(&mut self.peek_position, peek_position);
    }

    /// Skips tokens after a syntax error until the end of the failed
    /// statement, so parsing can resume with the statement after it.
    fn synchronize(&mut self) {
        while !self.current_is(&Token::Semicolon) && !self.current_is(&Token::Eof) {
            if self.peek_is(&Token::Let) || self.peek_is(&Token::Return) {
                return;
            }

            self.next_token();
        }
    }

    /// Parses a let, return, or expression statement.
    fn parse_statement(&mut self) -> Result<ast::Statement> {
        match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a let statement.
    fn parse_let_statement(&mut self) -> Result<ast::Statement> {
        let name = self.peek_extract_identifier()?;
        self.next_token();

        self.expect_peek(Token::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Ok(ast::Statement::Let(ast::LetStatement { name, value }))
    }

    /// Parses a return statement.
    fn parse_return_statement(&mut self) -> Result<ast::Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Ok(ast::Statement::Return(ast::ReturnStatement { value }))
    }

    /// Parses an expression statement.
    fn parse_expression_statement(&mut self) -> Result<ast::Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Ok(ast::Statement::Expression(expr))
    }

    /// Parses a block statement, starting at its opening brace.
    fn parse_block_statement(&mut self) -> Result<ast::BlockStatement> {
        let mut statements = vec![];
        self.next_token();

        while !self.current_is(&Token::RightBrace) {
            if self.current_is(&Token::Eof) {
                return Err(Error::new(
                    ErrorKind::UnexpectedToken {
                        want: Token::RightBrace.to_string(),
                        got: Token::Eof,
                    },
                    self.current_position,
                ));
            }

            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(ast::BlockStatement { statements })
    }

    /// Parses an expression, absorbing infix operators which bind more
    /// tightly than `precedence`. Fails once expressions nest deeper than
    /// `MAX_NESTING`.
    fn parse_expression(&mut self, precedence: Precedence) -> Result<ast::Expression> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(
                ErrorKind::NestingTooDeep(MAX_NESTING),
                self.current_position,
            ));
        }

        self.depth += 1;
        let expr = self.parse_operators(precedence);
        self.depth -= 1;

        expr
    }

    // The Pratt loop proper: a prefix expression extended by each infix or
    // postfix operator that binds tightly enough.
    fn parse_operators(&mut self, precedence: Precedence) -> Result<ast::Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && precedence < Precedence::of(&self.peek) {
            self.next_token();

            left = match self.current {
                Token::LeftParen => self.parse_call_expression(left)?,
                Token::LeftBracket => self.parse_index_expression(left)?,
                _ => self.parse_infix_expression(left)?,
            };
        }

        Ok(left)
    }

    /// Dispatches to the prefix parse rule for the current `Token`.
    fn parse_prefix(&mut self) -> Result<ast::Expression> {
        match &self.current {
            Token::Identifier(id) => Ok(ast::Expression::Identifier(id.clone())),
            Token::Integer(raw) => raw.parse().map(ast::Expression::Integer).map_err(|_| {
                Error::new(
                    ErrorKind::InvalidInteger(raw.clone()),
                    self.current_position,
                )
            }),
            Token::String(s) => Ok(ast::Expression::String(s.clone())),
            Token::True => Ok(ast::Expression::Boolean(true)),
            Token::False => Ok(ast::Expression::Boolean(false)),
            Token::Bang | Token::Minus => self.parse_prefix_expression(),
            Token::LeftParen => self.parse_grouped_expression(),
            Token::LeftBracket => self.parse_array_literal(),
            Token::LeftBrace => self.parse_hash_literal(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),

            Token::Illegal(c) => Err(Error::new(
                ErrorKind::IllegalCharacter(*c),
                self.current_position,
            )),
            tok => Err(Error::new(
                ErrorKind::NoPrefixRule(tok.clone()),
                self.current_position,
            )),
        }
    }

    /// Parses a prefix expression.
    fn parse_prefix_expression(&mut self) -> Result<ast::Expression> {
        let operator = match self.current {
            Token::Bang => ast::PrefixOperator::Bang,
            _ => ast::PrefixOperator::Minus,
        };

        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(ast::Expression::Prefix(ast::PrefixExpression {
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses an infix expression.
    fn parse_infix_expression(&mut self, left: ast::Expression) -> Result<ast::Expression> {
        let operator = infix_operator(&self.current).ok_or_else(|| {
            Error::new(
                ErrorKind::UnexpectedToken {
                    want: "infix operator".to_string(),
                    got: self.current.clone(),
                },
                self.current_position,
            )
        })?;

        let precedence = Precedence::of_operator(operator);
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Ok(ast::Expression::Infix(ast::InfixExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// Parses an expression wrapped in parentheses.
    fn parse_grouped_expression(&mut self) -> Result<ast::Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RightParen)?;

        Ok(expr)
    }

    /// Parses an array literal.
    fn parse_array_literal(&mut self) -> Result<ast::Expression> {
        Ok(ast::Expression::Array(ast::ArrayLiteral {
            elements: self.parse_expression_list(Token::RightBracket)?,
        }))
    }

    /// Parses a hash literal.
    fn parse_hash_literal(&mut self) -> Result<ast::Expression> {
        let mut pairs = vec![];

        while !self.peek_is(&Token::RightBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(Token::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            // Either this is the final pair, or another must follow.
            if !self.peek_is(&Token::RightBrace) {
                self.expect_peek(Token::Comma)?;
            }
        }

        self.expect_peek(Token::RightBrace)?;

        Ok(ast::Expression::Hash(ast::HashLiteral { pairs }))
    }

    /// Parses an if/else expression.
    fn parse_if_expression(&mut self) -> Result<ast::Expression> {
        self.expect_peek(Token::LeftParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(Token::RightParen)?;
        self.expect_peek(Token::LeftBrace)?;

        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();
            self.expect_peek(Token::LeftBrace)?;

            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(ast::Expression::If(ast::IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Parses a function literal, which may be named.
    fn parse_function_literal(&mut self) -> Result<ast::Expression> {
        let name = if let Token::Identifier(id) = &self.peek {
            let id = id.clone();
            self.next_token();
            Some(id)
        } else {
            None
        };

        self.expect_peek(Token::LeftParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(Token::LeftBrace)?;
        let body = self.parse_block_statement()?;

        Ok(ast::Expression::Function(ast::FunctionLiteral {
            name,
            parameters,
            body,
        }))
    }

    /// Parses the parameter list of a function literal.
    fn parse_function_parameters(&mut self) -> Result<Vec<String>> {
        let mut parameters = vec![];

        // No parameters.
        if self.peek_is(&Token::RightParen) {
            self.next_token();
            return Ok(parameters);
        }

        parameters.push(self.peek_extract_identifier()?);
        self.next_token();

        while self.peek_is(&Token::Comma) {
            self.next_token();

            parameters.push(self.peek_extract_identifier()?);
            self.next_token();
        }

        self.expect_peek(Token::RightParen)?;

        Ok(parameters)
    }

    /// Parses a call expression, starting at its opening parenthesis.
    fn parse_call_expression(&mut self, function: ast::Expression) -> Result<ast::Expression> {
        Ok(ast::Expression::Call(ast::CallExpression {
            function: Box::new(function),
            arguments: self.parse_expression_list(Token::RightParen)?,
        }))
    }

    /// Parses an index expression, starting at its opening bracket.
    fn parse_index_expression(&mut self, left: ast::Expression) -> Result<ast::Expression> {
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RightBracket)?;

        Ok(ast::Expression::Index(ast::IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    /// Parses comma-separated expressions until the `end` delimiter.
    fn parse_expression_list(&mut self, end: Token) -> Result<Vec<ast::Expression>> {
        let mut list = vec![];

        if self.peek_is(&end) {
            self.next_token();
            return Ok(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;

        Ok(list)
    }
}
