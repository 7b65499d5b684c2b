/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Token scanner for the clause language.
//!
//! The scan is permissive: anything that is not an identifier, `:-` or one of
//! `( ) . ,` is skipped without complaint.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{map, value},
    IResult,
};

/// 1-based position of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `[A-Za-z_]+`
    Identifier(String),
    /// `:-`
    Neck,
    LParen,
    RParen,
    Dot,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => f.write_str(name),
            Token::Neck => f.write_str(":-"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Dot => f.write_str("."),
            Token::Comma => f.write_str(","),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_identifier_char)(input)
}

/// Recognize one token at the very start of `input`.
pub fn token(input: &str) -> IResult<&str, Token> {
    alt((
        map(identifier, |name: &str| Token::Identifier(name.to_string())),
        value(Token::Neck, tag(":-")),
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
        value(Token::Dot, char('.')),
        value(Token::Comma, char(',')),
    ))(input)
}

/// Lazy token stream over a source string.
pub struct Lexer<'a> {
    rest: &'a str,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            line: 1,
            column: 1,
        }
    }

    /// Position of the next unread character.
    pub fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn advance(&mut self, len: usize) {
        let (consumed, rest) = self.rest.split_at(len);
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.rest = rest;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Spanned> {
        loop {
            let skipped = self.rest.chars().next()?;
            match token(self.rest) {
                Ok((remaining, token)) => {
                    let span = self.span();
                    self.advance(self.rest.len() - remaining.len());
                    return Some(Spanned { token, span });
                }
                Err(_) => self.advance(skipped.len_utf8()),
            }
        }
    }
}

/// Collect every token of `input`, dropping positions.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).map(|spanned| spanned.token).collect()
}
