/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! hornlog: Horn clauses, unification and lazy SLD resolution.
//!
//! ```
//! use hornlog::Database;
//!
//! let db = Database::from_source("likes(tom, jerry). likes(tom, spike).").unwrap();
//! let answers: Vec<String> = db
//!     .query_str("likes(tom, Y)")
//!     .unwrap()
//!     .map(|t| t.to_string())
//!     .collect();
//! assert_eq!(answers, ["likes(tom, jerry)", "likes(tom, spike)"]);
//! ```

pub use reasoning::error::SyntaxError;
pub use reasoning::lexer::{tokenize, Lexer, Span, Spanned, Token};
pub use reasoning::parser::{parse_query, parse_rules, Parser};
pub use reasoning::resolution::{Database, Solutions};
pub use reasoning::unification::{merge_bindings, resolve_term, substitute, unify};
pub use shared::rule::Rule;
pub use shared::scope::Scope;
pub use shared::terms::{Bindings, Term, Variable};
