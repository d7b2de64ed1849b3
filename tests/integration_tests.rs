//! Integration tests for the public parsing API.
//!
//! These tests drive the crate the way an evaluator or REPL would: build a
//! lexer, hand it to a parser, then inspect the program and the diagnostics.

use monkeylang::{
    ast::ast::{Expression, Node, Statement},
    display_error,
    lexer::tokens::TokenKind,
    parse, Lexer, Parser,
};
use std::thread;

fn lexer(source: &str) -> Lexer {
    Lexer::new(source.to_string(), Some("test.monkey".to_string()))
}

#[test]
fn test_parse_whole_program() {
    let source = r#"
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
        "foo bar";
        [1, 2];
        {"foo": "bar"}
    "#;

    let mut parser = Parser::new(lexer(source));
    let program = parser.parse_program();

    // Neither `/` nor the `*` parsing resumes at can start an expression.
    let errors = parser.errors().iter().map(|e| e.to_string()).collect::<Vec<String>>();
    assert_eq!(
        errors,
        vec!["no prefix parse function for /", "no prefix parse function for *"]
    );

    let literals = program
        .statements
        .iter()
        .map(|stmt| stmt.token_literal().to_string())
        .collect::<Vec<String>>();

    assert_eq!(
        literals,
        vec![
            "let", "let", "let", "let", "5", "5", "if", "10", "10", "foobar", "foo bar", "[", "{",
        ]
    );
}

#[test]
fn test_statement_kinds() {
    let (program, errors) = parse(lexer("let a = 1; return a; a;"));

    assert!(errors.is_empty());
    assert!(matches!(program.statements[0], Statement::Let(_)));
    assert!(matches!(program.statements[1], Statement::Return(_)));
    assert!(matches!(
        &program.statements[2],
        Statement::Expression(stmt) if matches!(stmt.expression, Expression::Identifier(_))
    ));
}

#[test]
fn test_leading_tokens_are_kept() {
    let (program, _) = parse(lexer("let x = -a * b(c)[0];"));

    let Statement::Let(let_stmt) = &program.statements[0] else {
        panic!("expected let statement");
    };

    assert_eq!(let_stmt.token().kind, TokenKind::Let);
    assert_eq!(let_stmt.name.token().kind, TokenKind::Identifier);

    // The outermost node is the `*` infix; its token is the operator.
    let Expression::Infix(infix) = &let_stmt.value else {
        panic!("expected infix expression");
    };
    assert_eq!(infix.token_literal(), "*");
    assert_eq!(infix.left.token_literal(), "-");
    assert_eq!(infix.right.token_literal(), "[");
    assert_eq!(infix.get_span().start.0, 11);
}

#[test]
fn test_printed_program_reparses() {
    let source = "let f = fn(a) { if (a < 2) { return a } else { return f(a - 1) + a } }; f([1, 2][0]);";

    let (first, errors) = parse(lexer(source));
    assert!(errors.is_empty());

    let printed = first.to_string();
    let (second, errors) = parse(lexer(&printed));

    assert!(errors.is_empty(), "errors in reprinted program: {:?}", errors);
    assert_eq!(second.to_string(), printed);
    assert_eq!(second, first);
}

#[test]
fn test_rendered_diagnostic() {
    let source = "let x 5;";
    let (_, errors) = parse(lexer(source));

    let rendered = display_error(&errors[0], source);
    assert!(rendered.starts_with("Error: TokenMismatch"));
    assert!(rendered.contains("-> test.monkey"));
    assert!(rendered.contains("1 | let x 5;"));
}

#[test]
fn test_parsers_on_separate_threads() {
    let handles = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("let v{} = {} * (1 + 2); *", i, i);
                let (program, errors) = parse(Lexer::new(source, None));

                (program.to_string(), errors.len())
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let (printed, error_count) = handle.join().expect("parser thread panicked");
        assert_eq!(printed, format!("let v{} = ({} * (1 + 2));", i, i));
        assert_eq!(error_count, 1);
    }
}
