//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry point.
//! The parser pulls tokens from a [`Lexer`] one at a time and keeps exactly
//! one token of lookahead (`current` and `peek`).
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is built for one parse: construct it over a lexer, call
/// [`Parser::parse_program`] once, then read [`Parser::errors`].
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
}

/// Deepest expression nesting accepted before the parser gives up on a
/// statement. Keeps recursion well inside a default thread stack.
pub const MAX_NESTING_DEPTH: usize = 64;

impl Parser {
    /// Creates a new Parser and primes `current` and `peek` from the lexer.
    ///
    /// All handler tables are built here and are not changed afterwards.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails to parse leaves no node behind; its error is
    /// recorded and parsing resumes at the next token.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => self.recover(error),
            }
            self.advance();
        }

        Program { statements }
    }

    /// Returns the diagnostics recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub(super) fn record_error(&mut self, error: Error) {
        log::debug!("recorded error at {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// Records the error of a failed statement and steps onto a `;` that
    /// directly follows the failure point, so the terminator is not parsed
    /// as the start of the next statement.
    pub(super) fn recover(&mut self, error: Error) {
        self.record_error(error);
        self.skip_semicolon();
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts `peek` into `current` and pulls a new `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        log::trace!("advance: current = {}", self.current);
    }

    /// Advances if the peek token is of `expected_kind`.
    ///
    /// On a mismatch nothing is consumed; the returned error names the
    /// expected kind and the kind actually found.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::TokenMismatch {
                expected: expected_kind,
                found: self.peek.kind,
                token: self.peek.value.clone(),
            },
            self.peek.span.start.clone(),
        ))
    }

    /// Consumes a statement terminator if one follows.
    pub fn skip_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Enters one level of expression nesting, failing once the limit is hit.
    pub(super) fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the binding power of the peek token, `Lowest` if it has none.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    pub(super) fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub(super) fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub(super) fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}

/// Parses everything the lexer yields.
///
/// This is a convenience over [`Parser::new`] and [`Parser::parse_program`].
/// The caller should treat the program as incomplete whenever the returned
/// error list is non-empty.
pub fn parse(lexer: Lexer) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (program, parser.into_errors())
}
