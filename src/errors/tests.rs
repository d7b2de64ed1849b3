//! Unit tests for error handling.
//!
//! This module contains tests for error types and error rendering.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::{lexer::Lexer, tokens::TokenKind};
use crate::parser::parser::parse;
use crate::{display_error, Position};
use std::rc::Rc;

fn position(offset: u32) -> Position {
    Position(offset, Rc::new("test.monkey".to_string()))
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Star,
            token: "*".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "no prefix parse function for *");
}

#[test]
fn test_token_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TokenMismatch {
            expected: TokenKind::Assignment,
            found: TokenKind::Number,
            token: "5".to_string(),
        },
        position(6),
    );

    assert_eq!(error.get_error_name(), "TokenMismatch");
    assert_eq!(error.to_string(), "expected next token to be =, got INT instead");
    assert_eq!(error.get_tip().to_string(), "expected `=`, found `5`");
}

#[test]
fn test_integer_parse_error() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            token: "99999999999999999999".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(error.to_string(), "could not parse \"99999999999999999999\" as integer");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 64 }, position(3));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 64 levels");
    assert_eq!(error.get_tip().to_string(), "split the expression up with `let` bindings");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Semicolon,
            token: ";".to_string(),
        },
        position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.monkey");
}

#[test]
fn test_error_tip_none_for_illegal() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Illegal,
            token: "@".to_string(),
        },
        position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::CloseCurly,
            token: "}".to_string(),
        },
        position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`}` cannot start an expression"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_display_error() {
    let source = "let a = 1;\n  let x 5;\n";
    let (_, errors) = parse(Lexer::new(source.to_string(), None));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        display_error(&errors[0], source),
        "Error: TokenMismatch (expected `=`, found `5`)\n\
         -> shell\n  \
           |\n\
         2 | let x 5;\n  \
           | ------^\n"
    );
}

#[test]
fn test_display_error_at_end_of_input() {
    let source = "let a =";
    let (_, errors) = parse(Lexer::new(source.to_string(), None));

    assert_eq!(errors[0].to_string(), "no prefix parse function for EOF");
    assert!(display_error(&errors[0], source).contains("1 | let a ="));
}

#[test]
fn test_display_error_counts_characters() {
    let source = "let s = \"\u{e9}\u{e9}\u{e9}\" @;";
    let (_, errors) = parse(Lexer::new(source.to_string(), None));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_position().0, 17);
    assert_eq!(
        display_error(&errors[0], source),
        "Error: UnexpectedToken\n\
         -> shell\n  \
           |\n\
         1 | let s = \"\u{e9}\u{e9}\u{e9}\" @;\n  \
           | --------------^\n"
    );
}
