/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::terms::{Bindings, Term, Variable};

/// Find bindings that make `term1` and `term2` identical.
///
/// `None` means the terms do not unify; that is an ordinary outcome, not an
/// error. No occurs-check is done.
pub fn unify(term1: &Term, term2: &Term) -> Option<Bindings> {
    match (term1, term2) {
        (Term::Variable(v), other) | (other, Term::Variable(v)) => Some(bind(v, other)),
        (
            Term::Compound { functor: f1, args: a1 },
            Term::Compound { functor: f2, args: a2 },
        ) => {
            if f1 != f2 || a1.len() != a2.len() {
                return None;
            }
            unify_all(a1, a2)
        }
        (Term::Conjunction(g1), Term::Conjunction(g2)) => {
            if g1.len() != g2.len() {
                return None;
            }
            unify_all(g1, g2)
        }
        (Term::True, Term::True) => Some(Bindings::new()),
        _ => None,
    }
}

fn bind(variable: &Variable, value: &Term) -> Bindings {
    let mut bindings = Bindings::new();
    match value {
        Term::Variable(other) if other == variable => {}
        _ => {
            bindings.insert(variable.clone(), value.clone());
        }
    }
    bindings
}

fn unify_all(left: &[Term], right: &[Term]) -> Option<Bindings> {
    left.iter()
        .zip(right)
        .try_fold(Bindings::new(), |acc, (l, r)| {
            let pair = unify(l, r)?;
            merge_bindings(&acc, &pair)
        })
}

/// Union of two binding sets.
///
/// A variable bound on both sides has its two values unified and the result
/// merged in as well; if they do not unify the merge fails.
pub fn merge_bindings(first: &Bindings, second: &Bindings) -> Option<Bindings> {
    let mut merged = first.clone();
    for (variable, value) in second {
        merged = insert_binding(merged, variable, value)?;
    }
    Some(merged)
}

fn insert_binding(mut acc: Bindings, variable: &Variable, value: &Term) -> Option<Bindings> {
    if let Some(existing) = acc.get(variable) {
        let sub = unify(existing, value)?;
        return merge_bindings(&acc, &sub);
    }
    // X -> ... -> X adds nothing and would make substitution loop
    let closes_cycle = matches!(resolve_term(value, &acc), Term::Variable(end) if end == variable);
    if closes_cycle {
        return Some(acc);
    }
    acc.insert(variable.clone(), value.clone());
    Some(acc)
}

/// Follow a chain of variable-to-variable bindings to its last link.
pub fn resolve_term<'a>(term: &'a Term, bindings: &'a Bindings) -> &'a Term {
    let mut current = term;
    // A chain can never be longer than the map itself.
    for _ in 0..=bindings.len() {
        match current {
            Term::Variable(v) => match bindings.get(v) {
                Some(bound) => current = bound,
                None => break,
            },
            _ => break,
        }
    }
    current
}

/// Replace every bound variable in `term`, recursing into bound values so
/// chains like `X -> f(Y), Y -> a` come out fully applied.
pub fn substitute(term: &Term, bindings: &Bindings) -> Term {
    match term {
        Term::Variable(v) => match bindings.get(v) {
            Some(bound) => substitute(bound, bindings),
            None => term.clone(),
        },
        Term::Compound { functor, args } => Term::Compound {
            functor: functor.clone(),
            args: args.iter().map(|a| substitute(a, bindings)).collect(),
        },
        Term::Conjunction(goals) => {
            Term::Conjunction(goals.iter().map(|g| substitute(g, bindings)).collect())
        }
        Term::True => Term::True,
    }
}
