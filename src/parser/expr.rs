use crate::{
    ast::{
        ast::Expression,
        expressions::{
            ArrayLiteral, BooleanLiteral, CallExpression, FunctionLiteral, HashLiteral, Identifier,
            IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
            StringLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, bp);
    parser.exit_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_handler(token_kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                kind: token_kind,
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_handler(parser.peek_token_kind()) else {
            return Ok(left);
        };

        let led_bp = parser.peek_binding_power();
        log::trace!("led {} at {:?} over {:?}", parser.peek_token_kind(), led_bp, bp);

        parser.advance();
        left = led(parser, left, led_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::Identifier(parse_identifier(parser)))
}

pub(super) fn parse_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();

    Identifier {
        value: token.value.clone(),
        token,
    }
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::Boolean(BooleanLiteral {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::String(StringLiteral {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    // Same binding power on the right keeps the operator left associative
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_params(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_fn_params(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(parse_identifier(parser));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(parse_identifier(parser));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expression, _bp: BindingPower) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expression::Call(CallExpression {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expression, _bp: BindingPower) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let index = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseBracket)?;

    Ok(Expression::Index(IndexExpression {
        token,
        left: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let elements = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Ok(Expression::Array(ArrayLiteral { token, elements }))
}

pub fn parse_hash_expr(parser: &mut Parser) -> Result<Expression, Error> {
    // {key: value, key: value}
    let token = parser.current_token().clone();
    let mut pairs = vec![];

    while !parser.peek_token_is(TokenKind::CloseCurly) {
        parser.advance();
        let key = parse_expr(parser, BindingPower::Lowest)?;

        parser.expect_peek(TokenKind::Colon)?;
        parser.advance();
        let value = parse_expr(parser, BindingPower::Lowest)?;

        pairs.push((key, value));

        if !parser.peek_token_is(TokenKind::CloseCurly) {
            parser.expect_peek(TokenKind::Comma)?;
        }
    }

    parser.expect_peek(TokenKind::CloseCurly)?;

    Ok(Expression::Hash(HashLiteral { token, pairs }))
}

/// Parses a comma separated list that ends with `end`.
///
/// Expects the opening delimiter as the current token and leaves the
/// closing one as current.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expression>, Error> {
    let mut list = vec![];

    if parser.peek_token_is(end) {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(list)
}
