extern crate rmonkey;

use pretty_assertions::assert_eq;
use rmonkey::lexer::Lexer;
use rmonkey::token::{Position, Token};

fn ident(s: &str) -> Token {
    Token::Identifier(s.to_string())
}

fn int(s: &str) -> Token {
    Token::Integer(s.to_string())
}

fn string(s: &str) -> Token {
    Token::String(s.to_string())
}

#[test]
fn lex_next_token() {
    let got = Lexer::new(
        r#"
let five = 5;
let ten = 10;

let add = fn(x, y) {
    x + y;
};

let result = add(five, ten);

!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
&five
"#,
    )
    .lex();

    let want = vec![
        //
        Token::Let,
        ident("five"),
        Token::Assign,
        int("5"),
        Token::Semicolon,
        //
        Token::Let,
        ident("ten"),
        Token::Assign,
        int("10"),
        Token::Semicolon,
        //
        Token::Let,
        ident("add"),
        Token::Assign,
        Token::Function,
        Token::LeftParen,
        ident("x"),
        Token::Comma,
        ident("y"),
        Token::RightParen,
        Token::LeftBrace,
        ident("x"),
        Token::Plus,
        ident("y"),
        Token::Semicolon,
        Token::RightBrace,
        Token::Semicolon,
        //
        Token::Let,
        ident("result"),
        Token::Assign,
        ident("add"),
        Token::LeftParen,
        ident("five"),
        Token::Comma,
        ident("ten"),
        Token::RightParen,
        Token::Semicolon,
        //
        Token::Bang,
        Token::Minus,
        Token::Slash,
        Token::Asterisk,
        int("5"),
        Token::Semicolon,
        //
        int("5"),
        Token::LessThan,
        int("10"),
        Token::GreaterThan,
        int("5"),
        Token::Semicolon,
        //
        Token::If,
        Token::LeftParen,
        int("5"),
        Token::LessThan,
        int("10"),
        Token::RightParen,
        Token::LeftBrace,
        Token::Return,
        Token::True,
        Token::Semicolon,
        Token::RightBrace,
        Token::Else,
        Token::LeftBrace,
        Token::Return,
        Token::False,
        Token::Semicolon,
        Token::RightBrace,
        //
        int("10"),
        Token::Equal,
        int("10"),
        Token::Semicolon,
        //
        int("10"),
        Token::NotEqual,
        int("9"),
        Token::Semicolon,
        //
        string("foobar"),
        string("foo bar"),
        //
        Token::LeftBracket,
        int("1"),
        Token::Comma,
        int("2"),
        Token::RightBracket,
        Token::Semicolon,
        //
        Token::LeftBrace,
        string("foo"),
        Token::Colon,
        string("bar"),
        Token::RightBrace,
        //
        Token::Illegal('&'),
        ident("five"),
        //
        Token::Eof,
    ];

    assert_eq!(want, got);
}

#[test]
fn lex_identifiers_with_digits_and_underscores() {
    let got = Lexer::new("foo_bar1 _x 9lives").lex();

    let want = vec![
        ident("foo_bar1"),
        ident("_x"),
        int("9"),
        ident("lives"),
        Token::Eof,
    ];

    assert_eq!(want, got);
}

#[test]
fn lex_unterminated_string() {
    let got = Lexer::new(r#"let s = "abc"#).lex();

    let want = vec![
        Token::Let,
        ident("s"),
        Token::Assign,
        string("abc"),
        Token::Eof,
    ];

    assert_eq!(want, got);
}

#[test]
fn lex_non_ascii_is_illegal() {
    let got = Lexer::new("é + \"héllo\"").lex();

    let want = vec![
        Token::Illegal('é'),
        Token::Plus,
        string("héllo"),
        Token::Eof,
    ];

    assert_eq!(want, got);
}

#[test]
fn lex_nul_is_illegal() {
    let got = Lexer::new("1\u{0}2 \"a\u{0}b\"").lex();

    let want = vec![
        int("1"),
        Token::Illegal('\0'),
        int("2"),
        string("a\u{0}b"),
        Token::Eof,
    ];

    assert_eq!(want, got);
}

#[test]
fn lex_eof_repeats() {
    let mut l = Lexer::new("x");

    assert_eq!(ident("x"), l.next_token());
    assert_eq!(Token::Eof, l.next_token());
    assert_eq!(Token::Eof, l.next_token());

    let mut l = Lexer::new("\u{0}");

    assert_eq!(Token::Illegal('\0'), l.next_token());
    assert_eq!(Token::Eof, l.next_token());
    assert_eq!(Token::Eof, l.next_token());
}

#[test]
fn lex_iterator_positions() {
    let got: Vec<(Token, Position)> = Lexer::new("let x = 10;\n  x != \"a\"").collect();

    let want = vec![
        (Token::Let, Position::new(1, 1)),
        (ident("x"), Position::new(1, 5)),
        (Token::Assign, Position::new(1, 7)),
        (int("10"), Position::new(1, 9)),
        (Token::Semicolon, Position::new(1, 11)),
        (ident("x"), Position::new(2, 3)),
        (Token::NotEqual, Position::new(2, 5)),
        (string("a"), Position::new(2, 8)),
        (Token::Eof, Position::new(2, 11)),
    ];

    assert_eq!(want, got);
}

#[test]
fn lex_iterator_ends_after_eof() {
    let mut l = Lexer::new("");

    assert_eq!(Some((Token::Eof, Position::new(1, 1))), l.next());
    assert_eq!(None, l.next());
}
