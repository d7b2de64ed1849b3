use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{
        ArrayLiteral, BooleanLiteral, CallExpression, FunctionLiteral, HashLiteral, Identifier,
        IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
        StringLiteral,
    },
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Every AST node keeps the token it started at. The token is only read
/// back for diagnostics and for printing literal text.
pub trait Node: Display {
    /// Returns the leading token of the node.
    fn token(&self) -> &Token;
    /// Returns the literal text of the leading token.
    fn token_literal(&self) -> &str {
        &self.token().value
    }
    /// Returns the span of the leading token.
    fn get_span(&self) -> &Span {
        &self.token().span
    }
}

/// Program
///
/// The root of the tree. Statements are kept in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Node for Statement {
    fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => stmt.token(),
            Statement::Return(stmt) => stmt.token(),
            Statement::Expression(stmt) => stmt.token(),
            Statement::Block(stmt) => stmt.token(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
            Statement::Block(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
}

impl Node for Expression {
    fn token(&self) -> &Token {
        match self {
            Expression::Identifier(expr) => expr.token(),
            Expression::Integer(expr) => expr.token(),
            Expression::Boolean(expr) => expr.token(),
            Expression::String(expr) => expr.token(),
            Expression::Prefix(expr) => expr.token(),
            Expression::Infix(expr) => expr.token(),
            Expression::If(expr) => expr.token(),
            Expression::Function(expr) => expr.token(),
            Expression::Call(expr) => expr.token(),
            Expression::Array(expr) => expr.token(),
            Expression::Index(expr) => expr.token(),
            Expression::Hash(expr) => expr.token(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Boolean(expr) => write!(f, "{}", expr),
            Expression::String(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
            Expression::If(expr) => write!(f, "{}", expr),
            Expression::Function(expr) => write!(f, "{}", expr),
            Expression::Call(expr) => write!(f, "{}", expr),
            Expression::Array(expr) => write!(f, "{}", expr),
            Expression::Index(expr) => write!(f, "{}", expr),
            Expression::Hash(expr) => write!(f, "{}", expr),
        }
    }
}
