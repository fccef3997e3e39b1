//! A lexer for the Monkey programming language from <https://interpreterbook.com/>.

use crate::token::{Position, Token};

use std::iter::Peekable;
use std::str::CharIndices;

/// Lexes input and produces a stream of `Token`s for the Monkey programming
/// language.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,

    // Byte offset and location of the current character. Once input is
    // exhausted, ch is NUL and exhausted is set.
    position: usize,
    ch: char,
    line: usize,
    column: usize,
    exhausted: bool,

    // Where the most recently produced token started.
    start: Position,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` by accepting an input string.
    pub fn new(input: &'a str) -> Self {
        let mut l = Lexer {
            input,
            chars: input.char_indices().peekable(),

            position: 0,
            ch: 0 as char,
            line: 1,
            column: 0,
            exhausted: false,

            start: Position::default(),
            done: false,
        };

        // Advance once to ready the Lexer.
        l.read_char();
        l
    }

    /// Lexes all tokens from an input string and produces a vector of `Token`s
    /// until an `Eof` token is encountered.
    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        // Consume tokens from the stream until Eof.
        loop {
            let t = self.next_token();
            match t {
                Token::Eof => {
                    tokens.push(t);
                    return tokens;
                }
                _ => {
                    tokens.push(t);
                }
            }
        }
    }

    /// Returns the position at which the most recent `Token` started.
    pub fn position(&self) -> Position {
        self.start
    }

    /// Advances the lexer once and produces a single Token. Once input is
    /// exhausted every call produces `Token::Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = Position::new(self.line, self.column);

        if self.exhausted {
            return Token::Eof;
        }

        let t = match self.ch {
            '=' => {
                // Is this '==' or just '='?
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::Equal
                } else {
                    Token::Assign
                }
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '!' => {
                // Is this '!=' or just '!'?
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::NotEqual
                } else {
                    Token::Bang
                }
            }
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '<' => Token::LessThan,
            '>' => Token::GreaterThan,
            ',' => Token::Comma,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '"' => Token::String(self.read_string().to_string()),

            _ => {
                if is_letter(self.ch) {
                    let ident = self.read_identifier();

                    // Determine if this identifier is actually a keyword, and
                    // return that keyword if so.
                    if let Some(key) = lookup_keyword(ident) {
                        return key;
                    } else {
                        return Token::Identifier(ident.to_string());
                    }
                } else if is_number(self.ch) {
                    return Token::Integer(self.read_number().to_string());
                } else {
                    // No known tokens for this character, return Illegal.
                    Token::Illegal(self.ch)
                }
            }
        };

        // Advance to the next character in preparation for the next call.
        self.read_char();
        t
    }

    // Peeks at the next character in the input without advancing the Lexer.
    fn peek_char(&mut self) -> char {
        self.chars.peek().map_or(0 as char, |&(_, ch)| ch)
    }

    // Consumes the next character of input while advancing the Lexer.
    fn read_char(&mut self) {
        if self.ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        match self.chars.next() {
            Some((pos, ch)) => {
                self.position = pos;
                self.ch = ch;
            }
            None => {
                self.position = self.input.len();
                self.ch = 0 as char;
                self.exhausted = true;
            }
        }
    }

    // Reads an identifier or keyword string.
    fn read_identifier(&mut self) -> &'a str {
        let pos = self.position;

        // Numbers okay in identifiers after first character.
        while is_letter(self.ch) || is_number(self.ch) {
            self.read_char();
        }

        &self.input[pos..self.position]
    }

    // Reads a run of decimal digits. Range checking is left to the parser.
    fn read_number(&mut self) -> &'a str {
        let pos = self.position;

        while is_number(self.ch) {
            self.read_char();
        }

        &self.input[pos..self.position]
    }

    // Reads the contents of a string literal, leaving the closing quote as the
    // current character. An unterminated string runs to the end of input.
    fn read_string(&mut self) -> &'a str {
        // Skip the opening quote.
        self.read_char();
        let pos = self.position;

        while self.ch != '"' && !self.exhausted {
            self.read_char();
        }

        &self.input[pos..self.position]
    }

    // Advances the lexer until all contiguous whitespace is consumed.
    fn skip_whitespace(&mut self) {
        while self.ch.is_ascii_whitespace() {
            self.read_char();
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (Token, Position);

    /// Produces each `Token` with its starting `Position`, ending after the
    /// first `Token::Eof`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let t = self.next_token();
        if t == Token::Eof {
            self.done = true;
        }

        Some((t, self.start))
    }
}

// Produces Some(Token) if s matches a keyword, or None if not.
fn lookup_keyword(s: &str) -> Option<Token> {
    match s {
        "fn" => Some(Token::Function),
        "let" => Some(Token::Let),
        "true" => Some(Token::True),
        "false" => Some(Token::False),
        "if" => Some(Token::If),
        "else" => Some(Token::Else),
        "return" => Some(Token::Return),
        _ => None,
    }
}

// Determines if a character is considered a letter in Monkey.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

// Determines if a character is considered a number in Monkey.
fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}
