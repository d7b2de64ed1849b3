use crate::{
    ast::{
        ast::Statement,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{expr::parse_identifier, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some(stmt_fn) = parser.get_stmt_handler(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_semicolon();

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = parse_identifier(parser);

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_semicolon();

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_semicolon();

    Ok(Statement::Return(ReturnStatement { token, value }))
}

/// Parses `{ ... }` starting at the opening brace.
///
/// Statements inside the block recover the same way top-level ones do:
/// a failed statement is recorded and skipped. Only a missing closing
/// brace fails the block itself. Blocks count towards the nesting limit.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, Error> {
    parser.enter_nesting()?;
    let result = parse_block_body(parser);
    parser.exit_nesting();

    result
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStatement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut body = vec![];

    while !parser.current_token_is(TokenKind::CloseCurly) {
        if parser.current_token_is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::TokenMismatch {
                    expected: TokenKind::CloseCurly,
                    found: TokenKind::EOF,
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }

        match parse_stmt(parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => parser.recover(error),
        }
        parser.advance();
    }

    Ok(BlockStatement { token, body })
}
