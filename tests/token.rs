extern crate rmonkey;

use rmonkey::token::{Position, Token};

#[test]
fn token_display() {
    let tests = vec![
        (Token::Illegal('x'), "illegal(x)"),
        (Token::Eof, "EOF"),
        (
            Token::Identifier("string".to_string()),
            "identifier(string)",
        ),
        (Token::Integer("101".to_string()), "101"),
        (Token::String("foo bar".to_string()), r#""foo bar""#),
        (Token::Assign, "="),
        (Token::Plus, "+"),
        (Token::Minus, "-"),
        (Token::Bang, "!"),
        (Token::Asterisk, "*"),
        (Token::Slash, "/"),
        (Token::Equal, "=="),
        (Token::NotEqual, "!="),
        (Token::LessThan, "<"),
        (Token::GreaterThan, ">"),
        (Token::Comma, ","),
        (Token::Colon, ":"),
        (Token::Semicolon, ";"),
        (Token::LeftParen, "("),
        (Token::RightParen, ")"),
        (Token::LeftBrace, "{"),
        (Token::RightBrace, "}"),
        (Token::LeftBracket, "["),
        (Token::RightBracket, "]"),
        (Token::Function, "fn"),
        (Token::Let, "let"),
        (Token::True, "true"),
        (Token::False, "false"),
        (Token::If, "if"),
        (Token::Else, "else"),
        (Token::Return, "return"),
    ];

    for test in tests {
        let (token, string) = test;

        assert_eq!(string, format!("{}", token));
    }
}

#[test]
fn position_display() {
    assert_eq!("1:1", Position::default().to_string());
    assert_eq!("12:7", Position::new(12, 7).to_string());
}
