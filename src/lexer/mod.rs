//! Lexical analysis for the parser front end.
//!
//! The lexer converts source text into tokens on demand. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token spans for error reporting
//! - Comments and whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
