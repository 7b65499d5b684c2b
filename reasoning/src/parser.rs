/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Recursive descent parser for rules and query terms.
//!
//! ```text
//! term := '(' term (',' term)* ')'
//!       | atom ['(' term (',' term)* ')']
//!       | variable
//! rule := term '.'
//!       | term ':-' term (',' term)* '.'
//! ```

use shared::rule::Rule;
use shared::scope::Scope;
use shared::terms::Term;

use crate::error::SyntaxError;
use crate::lexer::{Lexer, Spanned, Token};

pub struct Parser<'a> {
    tokens: Lexer<'a>,
    current: Option<Spanned>,
    scope: Scope,
}

fn is_variable_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase() || c == '_')
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut tokens = Lexer::new(input);
        let current = tokens.next();
        Self {
            tokens,
            current,
            scope: Scope::new(),
        }
    }

    fn advance(&mut self) -> Option<Spanned> {
        let next = self.tokens.next();
        std::mem::replace(&mut self.current, next)
    }

    fn check(&self, token: &Token) -> bool {
        matches!(&self.current, Some(spanned) if &spanned.token == token)
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        match &self.current {
            Some(spanned) => SyntaxError::Unexpected {
                expected,
                found: spanned.token.clone(),
                span: spanned.span,
            },
            None => SyntaxError::UnexpectedEof {
                expected,
                span: self.tokens.span(),
            },
        }
    }

    /// True once every token has been consumed.
    pub fn is_done(&self) -> bool {
        self.current.is_none()
    }

    /// Parse every remaining rule. Each rule gets its own variable scope.
    pub fn parse_rules(&mut self) -> Result<Vec<Rule>, SyntaxError> {
        let mut rules = Vec::new();
        while !self.is_done() {
            self.scope = Scope::new();
            rules.push(self.rule()?);
        }
        Ok(rules)
    }

    /// Parse one term in a fresh variable scope. Tokens after the term are
    /// left unread.
    pub fn parse_term(&mut self) -> Result<Term, SyntaxError> {
        self.scope = Scope::new();
        self.term()
    }

    /// Parse a complete query: one term, an optional `.`, then end of input.
    pub fn parse_query(&mut self) -> Result<Term, SyntaxError> {
        let goal = self.parse_term()?;
        if self.check(&Token::Dot) {
            self.advance();
        }
        if !self.is_done() {
            return Err(self.unexpected("end of input"));
        }
        Ok(goal)
    }

    fn rule(&mut self) -> Result<Rule, SyntaxError> {
        let head = self.term()?;

        if self.check(&Token::Dot) {
            self.advance();
            return Ok(Rule::fact(head));
        }
        if !self.check(&Token::Neck) {
            return Err(self.unexpected(":- or ."));
        }
        self.advance();

        let mut goals = self.sequence(Token::Dot, ", or .")?;
        let body = if goals.len() == 1 {
            goals.remove(0)
        } else {
            Term::Conjunction(goals)
        };
        Ok(Rule::new(head, body))
    }

    /// `term (',' term)* <close>`; the closing token is consumed.
    fn sequence(&mut self, close: Token, expected: &'static str) -> Result<Vec<Term>, SyntaxError> {
        let mut terms = vec![self.term()?];
        loop {
            if self.check(&Token::Comma) {
                self.advance();
                terms.push(self.term()?);
            } else if self.check(&close) {
                self.advance();
                return Ok(terms);
            } else {
                return Err(self.unexpected(expected));
            }
        }
    }

    fn term(&mut self) -> Result<Term, SyntaxError> {
        let spanned = match &self.current {
            Some(spanned) => spanned.clone(),
            None => return Err(self.unexpected("a term")),
        };

        match spanned.token {
            Token::LParen => {
                self.advance();
                let goals = self.sequence(Token::RParen, ", or )")?;
                Ok(Term::Conjunction(goals))
            }
            Token::Identifier(name) => {
                self.advance();
                if is_variable_name(&name) {
                    return Ok(Term::Variable(self.scope.variable(&name)));
                }
                if self.check(&Token::LParen) {
                    self.advance();
                    let args = self.sequence(Token::RParen, ", or )")?;
                    Ok(Term::Compound {
                        functor: name,
                        args,
                    })
                } else {
                    Ok(Term::atom(name))
                }
            }
            found => Err(SyntaxError::BadAtom {
                found,
                span: spanned.span,
            }),
        }
    }
}

/// Parse a whole rule set.
pub fn parse_rules(input: &str) -> Result<Vec<Rule>, SyntaxError> {
    Parser::new(input).parse_rules()
}

/// Parse a standalone query term.
pub fn parse_query(input: &str) -> Result<Term, SyntaxError> {
    Parser::new(input).parse_query()
}
