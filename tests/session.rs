extern crate rmonkey;

use pretty_assertions::assert_eq;
use rmonkey::object::Object;
use rmonkey::session::{self, Session};
use rmonkey::{evaluator, parser};

#[test]
fn session_bindings_persist() {
    let mut s = Session::new();

    assert_eq!(Ok("5".to_string()), s.evaluate("let five = 5;"));
    assert_eq!(
        Ok("10".to_string()),
        s.evaluate("let double = fn(x) { x * 2 }; double(five)")
    );
    assert_eq!(Ok("15".to_string()), s.evaluate("five + double(five)"));

    assert_eq!(vec!["double", "five"], s.environment().names());
}

#[test]
fn session_survives_errors() {
    let mut s = Session::new();

    assert_eq!(
        Err(vec!["identifier not found: x".to_string()]),
        s.evaluate("let a = 1; x; let b = 2;")
    );

    // Statements before the error took effect; those after it did not.
    assert_eq!(Ok("1".to_string()), s.evaluate("a"));
    assert_eq!(
        Err(vec!["identifier not found: b".to_string()]),
        s.evaluate("b")
    );

    // A program with syntax errors is never evaluated.
    let got = s.evaluate("let c = 3; let = 4;").expect_err("expected syntax error");
    assert_eq!(vec!["1:16: expected next token to be identifier, got = instead"], got);
    assert!(s.environment().get("c").is_none());
}

#[test]
fn session_reports_every_syntax_error() {
    let err = Session::new()
        .run("let = 1;\nlet y 2;")
        .expect_err("expected syntax errors");

    assert_eq!("found 2 syntax error(s)", err.to_string());
    assert_eq!(
        vec![
            "1:5: expected next token to be identifier, got = instead",
            "2:7: expected next token to be =, got 2 instead",
        ],
        err.diagnostics()
    );

    match err {
        session::Error::Parse(errs) => assert_eq!(2, errs.len()),
        session::Error::Eval(err) => panic!("unexpected evaluation error: {}", err),
    }
}

#[test]
fn session_run_returns_objects() {
    let mut s = Session::new();

    assert_eq!(Object::Null, s.run("").expect("failed to run empty program"));
    assert_eq!(
        Object::String("ab".to_string()),
        s.run(r#""a" + "b""#).expect("failed to run program")
    );

    let err = s.run("1 / 0").expect_err("expected evaluation error");
    assert!(matches!(
        err,
        session::Error::Eval(evaluator::Error::DivisionByZero)
    ));
}

#[test]
fn session_max_depth() {
    let mut s = Session::with_max_depth(50);

    s.evaluate("let loop = fn(n) { loop(n + 1) };")
        .expect("failed to define function");
    assert_eq!(
        Err(vec!["maximum call depth of 50 exceeded".to_string()]),
        s.evaluate("loop(0)")
    );

    // The session is still usable afterward.
    assert_eq!(
        Ok("2".to_string()),
        s.evaluate("let f = fn(n) { if (n > 0) { f(n - 1) } else { 2 } }; f(10)")
    );
}

#[test]
fn evaluate_in_fresh_environment() {
    assert_eq!(Ok("42".to_string()), rmonkey::evaluate("let x = 2; x * 21"));
    assert_eq!(Ok("null".to_string()), rmonkey::evaluate("if (false) { 1 }"));

    // Bindings made by one call are not visible to the next.
    rmonkey::evaluate("let hidden = 1;").expect("failed to evaluate program");
    assert_eq!(
        Err(vec!["identifier not found: hidden".to_string()]),
        rmonkey::evaluate("hidden")
    );
}

#[test]
fn parse_returns_program_or_errors() {
    let prog = session::parse("let x = 1 + 2;").expect("failed to parse program");
    assert_eq!("let x = (1 + 2);", prog.to_string());

    let errs = session::parse("1 + ;").expect_err("expected syntax errors");
    assert_eq!(
        vec![parser::Error::new(
            parser::ErrorKind::NoPrefixRule(rmonkey::token::Token::Semicolon),
            rmonkey::token::Position::new(1, 5),
        )],
        errs
    );
}

#[test]
fn evaluate_renders_strings_verbatim() {
    let tests = vec![
        (r#""a\b""#, r#""a\b""#),
        ("\"a\nb\"", "\"a\nb\""),
        ("\"café\t\"", "\"café\t\""),
        (r#"{"k\n": ["\"]}"#, r#"{"k\n": ["\"]}"#),
    ];

    for (input, want) in tests {
        assert_eq!(Ok(want.to_string()), rmonkey::evaluate(input), "input: {}", input);
    }
}

#[test]
fn evaluate_reports_deep_nesting() {
    let input = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));

    assert_eq!(
        Err(vec!["1:257: expressions nested more than 256 deep".to_string()]),
        rmonkey::evaluate(&input)
    );
}

#[test]
fn evaluate_reports_source_after_nul() {
    assert_eq!(
        Err(vec![
            "1:3: illegal character '\\0'".to_string(),
            "2:10: no prefix parse function for ; found".to_string(),
        ]),
        rmonkey::evaluate("1;\u{0}\n let x = ; 99")
    );
}
