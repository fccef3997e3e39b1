extern crate rmonkey;

use rmonkey::ast;

#[test]
fn ast_display() {
    let program = ast::Program {
        statements: vec![ast::Statement::Let(ast::LetStatement {
            name: "myVar".to_string(),
            value: ast::Expression::Identifier("anotherVar".to_string()),
        })],
    };

    assert_eq!(format!("{}", program), "let myVar = anotherVar;")
}

#[test]
fn ast_display_nested() {
    let add = ast::Expression::Infix(ast::InfixExpression {
        left: Box::new(ast::Expression::Identifier("x".to_string())),
        operator: ast::InfixOperator::Plus,
        right: Box::new(ast::Expression::Prefix(ast::PrefixExpression {
            operator: ast::PrefixOperator::Minus,
            right: Box::new(ast::Expression::Integer(1)),
        })),
    });

    let program = ast::Program {
        statements: vec![
            ast::Statement::Let(ast::LetStatement {
                name: "f".to_string(),
                value: ast::Expression::Function(ast::FunctionLiteral {
                    name: None,
                    parameters: vec!["x".to_string()],
                    body: ast::BlockStatement {
                        statements: vec![ast::Statement::Return(ast::ReturnStatement {
                            value: add,
                        })],
                    },
                }),
            }),
            ast::Statement::Expression(ast::Expression::Index(ast::IndexExpression {
                left: Box::new(ast::Expression::Array(ast::ArrayLiteral {
                    elements: vec![
                        ast::Expression::String("a".to_string()),
                        ast::Expression::Boolean(true),
                    ],
                })),
                index: Box::new(ast::Expression::Call(ast::CallExpression {
                    function: Box::new(ast::Expression::Identifier("f".to_string())),
                    arguments: vec![ast::Expression::Integer(1)],
                })),
            })),
        ],
    };

    assert_eq!(
        r#"let f = fn(x) { return (x + (-1)); };(["a", true][f(1)])"#,
        format!("{}", program)
    );
}

#[test]
fn ast_display_if_and_hash() {
    let expr = ast::Expression::If(ast::IfExpression {
        condition: Box::new(ast::Expression::Boolean(false)),
        consequence: ast::BlockStatement::default(),
        alternative: Some(ast::BlockStatement {
            statements: vec![ast::Statement::Expression(ast::Expression::Hash(
                ast::HashLiteral {
                    pairs: vec![(
                        ast::Expression::Integer(1),
                        ast::Expression::String("one".to_string()),
                    )],
                },
            ))],
        }),
    });

    assert_eq!(r#"if (false) {  } else { {1: "one"} }"#, format!("{}", expr));
}
