/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod error;
pub mod lexer;
pub mod parser;
pub mod resolution;
pub mod unification;

pub use error::SyntaxError;
pub use lexer::{Lexer, Span, Token};
pub use parser::{parse_query, parse_rules, Parser};
pub use resolution::{Database, Solutions};
pub use unification::{merge_bindings, substitute, unify};
