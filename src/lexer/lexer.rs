use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// A pattern handler returns the token it matched, or `None` for skipped
/// input such as whitespace and comments.
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Every pattern is anchored at the start of the remaining input. Order
// matters: two-character operators come before their one-character prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"(\\\\.|[^\"\\\\])*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Pull-based token source.
///
/// Each call to [`Lexer::next_token`] scans exactly one token from the
/// remaining input. Once the input is exhausted every further call yields
/// an `EOF` token.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span covering `len` bytes from the current position.
    ///
    /// Offsets past `u32::MAX` are clamped to it.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(clamp_offset(self.pos), Rc::clone(&self.file)),
            end: Position(clamp_offset(self.pos + len), Rc::clone(&self.file)),
        }
    }

    pub fn next_token(&mut self) -> Token {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                if !pattern.regex.is_match(self.remainder()) {
                    continue;
                }

                match (pattern.handler)(self, &pattern.regex) {
                    Some(token) => return token,
                    None => continue 'scan,
                }
            }

            return illegal_handler(self);
        }

        MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0))
    }
}

pub(super) fn clamp_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

fn matched_len(lexer: &Lexer, regex: &Regex) -> usize {
    regex.find(lexer.remainder()).map_or(0, |m| m.end())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = matched_len(lexer, regex);
    let matched = lexer.remainder()[..len].to_string();

    let token = MK_TOKEN!(TokenKind::Number, matched, lexer.span_of(len));
    lexer.advance_n(len);
    Some(token)
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = matched_len(lexer, regex);
    lexer.advance_n(len);
    None
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = matched_len(lexer, regex);
    // Strip the surrounding quotes.
    let string_literal = &lexer.remainder()[1..len - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('0') => result.push('\0'),
            _ => {
                result.push(ch); // Keep unknown escapes verbatim
                continue;
            }
        }
        chars.next();
    }

    let token = MK_TOKEN!(TokenKind::String, result, lexer.span_of(len));
    lexer.advance_n(len);
    Some(token)
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = matched_len(lexer, regex);
    let value = &lexer.remainder()[..len];

    let kind = RESERVED_LOOKUP.get(value).copied().unwrap_or(TokenKind::Identifier);

    let token = MK_TOKEN!(kind, String::from(value), lexer.span_of(len));
    lexer.advance_n(len);
    Some(token)
}

fn illegal_handler(lexer: &mut Lexer) -> Token {
    let ch = lexer.remainder().chars().next().unwrap_or('\0');
    let len = ch.len_utf8();

    let token = MK_TOKEN!(TokenKind::Illegal, ch.to_string(), lexer.span_of(len));
    lexer.advance_n(len);
    token
}

/// Scans the whole source up front, including the trailing `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
