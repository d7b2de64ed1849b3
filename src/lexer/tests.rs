//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals, including escapes
//! - Operators and punctuation
//! - Comments, spans and illegal characters

use super::{
    lexer::{clamp_offset, tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.monkey".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let fn if else return true false"),
        vec![
            TokenKind::Let,
            TokenKind::Fn,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore letter".to_string(), None);

    let values = tokens.iter().map(|token| token.value.as_str()).collect::<Vec<&str>>();
    assert_eq!(values, vec!["foo", "bar", "baz_123", "_underscore", "letter", ""]);

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == != , ; : ( ) { } [ ]"),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_spaces() {
    assert_eq!(
        kinds("x==10!=y;"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let add = fn(x, y) {\n  x + y;\n};\nlet result = add(five, ten);";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Fn,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 838383".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "838383");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize("\"foobar\" \"foo bar\" \"\"".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "foobar");
    assert_eq!(tokens[1].value, "foo bar");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""a\nb\t\"c\"\\ \q""#.to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\nb\t\"c\"\\ \\q");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_skip_comments() {
    assert_eq!(
        kinds("// a comment\nx // trailing\n"),
        vec![TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_illegal_character() {
    let tokens = tokenize("a @ b".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_unterminated_string_is_illegal() {
    let tokens = tokenize("\"abc".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "\"");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  xy = 10;".to_string(), Some("spans.monkey".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 12);
    assert_eq!(tokens[0].span.start.1.as_str(), "spans.monkey");
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert!(lexer.at_eof());
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Number.to_string(), "INT");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::Star.to_string(), "*");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
    assert_eq!(TokenKind::Fn.to_string(), "FUNCTION");
}

#[test]
fn test_offsets_clamp_to_u32() {
    assert_eq!(clamp_offset(17), 17);
    assert_eq!(clamp_offset(u32::MAX as usize), u32::MAX);
    assert_eq!(clamp_offset(usize::MAX), u32::MAX);
}
