/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::iter;
use std::rc::Rc;

use log::{debug, trace};
use shared::rule::Rule;
use shared::terms::{Bindings, Term};

use crate::error::SyntaxError;
use crate::parser::{parse_query, parse_rules};
use crate::unification::{merge_bindings, substitute, unify};

type Stream<'a> = Box<dyn Iterator<Item = Term> + 'a>;

/// An ordered, immutable rule set.
#[derive(Debug, Clone, Default)]
pub struct Database {
    rules: Vec<Rule>,
    max_depth: Option<usize>,
}

impl Database {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            max_depth: None,
        }
    }

    /// Parse a complete rule set and wrap it.
    pub fn from_source(input: &str) -> Result<Self, SyntaxError> {
        Ok(Self::new(parse_rules(input)?))
    }

    /// Stop expanding a derivation once it nests more than `depth` rule
    /// applications. Unbounded by default.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs SLD resolution for `goal` and returns its solutions lazily.
    ///
    /// Each solution is `goal` with the bindings of one successful derivation
    /// applied. Solutions come out in a fixed order: rules are tried in the
    /// order they were declared, and the goals of a conjunction are solved
    /// left to right. Nothing is computed before the iterator is pulled, so
    /// rule sets with infinitely many derivations can still be sampled.
    pub fn query(&self, goal: &Term) -> Solutions<'_> {
        debug!("Query {} against {} rules", goal, self.rules.len());
        Solutions {
            inner: self.solve(goal.clone(), 0),
        }
    }

    /// Parse `input` as a query term and run it.
    pub fn query_str(&self, input: &str) -> Result<Solutions<'_>, SyntaxError> {
        let goal = parse_query(input)?;
        Ok(self.query(&goal))
    }

    fn solve<'a>(&'a self, goal: Term, depth: usize) -> Stream<'a> {
        match goal {
            Term::True => Box::new(iter::once(Term::True)),
            Term::Conjunction(goals) => self.solve_conjunction(Rc::from(goals), 0, Bindings::new(), depth),
            goal => self.solve_goal(goal, depth),
        }
    }

    /// Try every rule whose head unifies with `goal`.
    fn solve_goal<'a>(&'a self, goal: Term, depth: usize) -> Stream<'a> {
        if let Some(max_depth) = self.max_depth {
            if depth >= max_depth {
                debug!("Depth limit {} reached at {}", max_depth, goal);
                return Box::new(iter::empty());
            }
        }

        Box::new(self.rules.iter().flat_map(move |rule| -> Stream<'a> {
            if let (Some(head), Some(wanted)) = (rule.head.functor_arity(), goal.functor_arity()) {
                if head != wanted {
                    return Box::new(iter::empty());
                }
            }
            // Fresh variables for every use so recursive calls never share bindings
            let renamed = rule.rename_variables();
            let Some(head_bindings) = unify(&renamed.head, &goal) else {
                return Box::new(iter::empty());
            };
            trace!("{} matches rule {}", goal, rule);

            let head = substitute(&renamed.head, &head_bindings);
            let body = substitute(&renamed.body, &head_bindings);
            let solutions = self.solve(body.clone(), depth + 1);
            Box::new(solutions.filter_map(move |solved| {
                let body_bindings = unify(&body, &solved)?;
                Some(substitute(&head, &body_bindings))
            }))
        }))
    }

    /// Depth-first over the goals of a conjunction, starting at `index`.
    fn solve_conjunction<'a>(
        &'a self,
        goals: Rc<[Term]>,
        index: usize,
        bindings: Bindings,
        depth: usize,
    ) -> Stream<'a> {
        let Some(current) = goals.get(index).cloned() else {
            let solved = goals.iter().map(|g| substitute(g, &bindings)).collect();
            return Box::new(iter::once(Term::Conjunction(solved)));
        };

        let solutions = self.solve(substitute(&current, &bindings), depth);
        Box::new(
            solutions
                .filter_map(move |solved| {
                    let unified = merge_bindings(&unify(&current, &solved)?, &bindings)?;
                    Some(self.solve_conjunction(Rc::clone(&goals), index + 1, unified, depth))
                })
                .flatten(),
        )
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(".\n")?;
            }
            write!(f, "{}", rule)?;
        }
        f.write_str(".")
    }
}

/// Lazy sequence of solutions for one query.
///
/// Dropping it part-way is the only way to cancel a query; nothing else needs
/// releasing.
pub struct Solutions<'a> {
    inner: Stream<'a>,
}

impl<'a> Iterator for Solutions<'a> {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        self.inner.next()
    }
}
