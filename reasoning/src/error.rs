/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::lexer::{Span, Token};

/// Malformed clause text. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("bad atom name: {found} at {span}")]
    BadAtom { found: Token, span: Span },

    #[error("expected {expected} but got {found} at {span}")]
    Unexpected {
        expected: &'static str,
        found: Token,
        span: Span,
    },

    #[error("expected {expected} but reached end of input at {span}")]
    UnexpectedEof { expected: &'static str, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::BadAtom { span, .. }
            | SyntaxError::Unexpected { span, .. }
            | SyntaxError::UnexpectedEof { span, .. } => *span,
        }
    }

    /// Multi-line report pointing at the offending spot in `input`.
    pub fn render(&self, input: &str) -> String {
        let span = self.span();
        let lines: Vec<&str> = input.lines().collect();
        let error_line = if span.line <= lines.len() {
            lines[span.line - 1]
        } else {
            "[end of input]"
        };

        format!(
            "Syntax error at line {}, column {}: {}\n    |\n{:>3} | {}\n    | {}^\n",
            span.line,
            span.column,
            self,
            span.line,
            error_line,
            " ".repeat(span.column - 1)
        )
    }
}
