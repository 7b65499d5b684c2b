/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

// Every variable ever allocated gets its own id, across scopes and parses.
static NEXT_VARIABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// A logic variable.
///
/// Two variables are the same entity only when they share an id. The name is
/// kept for rendering and never takes part in comparisons.
#[derive(Debug, Clone)]
pub struct Variable {
    id: usize,
    name: Arc<str>,
}

impl Variable {
    /// Allocate a brand-new variable that is distinct from every other one.
    pub fn fresh(name: &str) -> Self {
        Variable {
            id: NEXT_VARIABLE_ID.fetch_add(1, AtomicOrdering::Relaxed),
            name: Arc::from(name),
        }
    }

    /// A new variable carrying the same display name as `self`.
    pub fn renamed(&self) -> Self {
        Variable {
            id: NEXT_VARIABLE_ID.fetch_add(1, AtomicOrdering::Relaxed),
            name: Arc::clone(&self.name),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_anonymous(&self) -> bool {
        &*self.name == "_"
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// The closed set of terms the engine works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// `functor(args..)`; an atom when `args` is empty.
    Compound { functor: String, args: Vec<Term> },
    Variable(Variable),
    /// Goals solved left to right. Only built by the parser for rule bodies
    /// and parenthesized goal lists.
    Conjunction(Vec<Term>),
    /// Body of a fact.
    True,
}

/// Variable -> value mapping produced by unification.
pub type Bindings = BTreeMap<Variable, Term>;

impl Term {
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Compound {
            functor: name.into(),
            args: Vec::new(),
        }
    }

    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Compound {
            functor: functor.into(),
            args,
        }
    }

    pub fn var(variable: &Variable) -> Self {
        Term::Variable(variable.clone())
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// `(name, arity)` for atoms and compounds.
    pub fn functor_arity(&self) -> Option<(&str, usize)> {
        match self {
            Term::Compound { functor, args } => Some((functor.as_str(), args.len())),
            _ => None,
        }
    }

    /// Returns true if no variable occurs anywhere in the term.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Compound { args, .. } | Term::Conjunction(args) => {
                args.iter().all(Term::is_ground)
            }
            Term::True => true,
        }
    }

    /// Distinct variables in first-occurrence order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<Variable>) {
        match self {
            Term::Variable(v) => {
                if !vars.contains(v) {
                    vars.push(v.clone());
                }
            }
            Term::Compound { args, .. } | Term::Conjunction(args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
            Term::True => {}
        }
    }

    /// Structural equality that ignores variable identity but requires the
    /// same sharing pattern on both sides.
    pub fn is_variant_of(&self, other: &Term) -> bool {
        fn walk(a: &Term, b: &Term, pairs: &mut BTreeMap<Variable, Variable>) -> bool {
            match (a, b) {
                (Term::Variable(x), Term::Variable(y)) => match pairs.get(x) {
                    Some(bound) => bound == y,
                    None => {
                        if pairs.values().any(|v| v == y) {
                            return false;
                        }
                        pairs.insert(x.clone(), y.clone());
                        true
                    }
                },
                (
                    Term::Compound { functor: f1, args: a1 },
                    Term::Compound { functor: f2, args: a2 },
                ) => {
                    f1 == f2
                        && a1.len() == a2.len()
                        && a1.iter().zip(a2).all(|(x, y)| walk(x, y, pairs))
                }
                (Term::Conjunction(a1), Term::Conjunction(a2)) => {
                    a1.len() == a2.len() && a1.iter().zip(a2).all(|(x, y)| walk(x, y, pairs))
                }
                (Term::True, Term::True) => true,
                _ => false,
            }
        }
        walk(self, other, &mut BTreeMap::new())
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", term)?;
    }
    Ok(())
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Compound { functor, args } if args.is_empty() => f.write_str(functor),
            Term::Compound { functor, args } => {
                write!(f, "{}(", functor)?;
                write_joined(f, args)?;
                f.write_str(")")
            }
            Term::Variable(v) => write!(f, "{}", v),
            Term::Conjunction(goals) => write_joined(f, goals),
            Term::True => f.write_str("true"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_identity_ignores_name() {
        let x1 = Variable::fresh("X");
        let x2 = Variable::fresh("X");
        assert_ne!(x1, x2);
        assert!(x1.id() < x2.id());
        assert_eq!(x1, x1.clone());

        let renamed = x1.renamed();
        assert_ne!(renamed, x1);
        assert_ne!(renamed.id(), x1.id());
        assert_eq!(renamed.name(), "X");
    }

    #[test]
    fn test_display() {
        let x = Variable::fresh("X");
        let term = Term::compound(
            "likes",
            vec![Term::atom("tom"), Term::var(&x), Term::compound("f", vec![Term::atom("a")])],
        );
        assert_eq!(term.to_string(), "likes(tom, X, f(a))");
        assert_eq!(Term::atom("tom").to_string(), "tom");
        assert_eq!(Term::True.to_string(), "true");

        let conj = Term::Conjunction(vec![Term::atom("a"), Term::compound("b", vec![Term::var(&x)])]);
        assert_eq!(conj.to_string(), "a, b(X)");
    }

    #[test]
    fn test_ground_and_variables() {
        let x = Variable::fresh("X");
        let y = Variable::fresh("Y");
        let term = Term::compound("f", vec![Term::var(&x), Term::var(&y), Term::var(&x)]);
        assert!(!term.is_ground());
        assert_eq!(term.variables(), vec![x, y]);
        assert!(Term::compound("f", vec![Term::atom("a")]).is_ground());
        assert_eq!(Term::atom("a").functor_arity(), Some(("a", 0)));
    }

    #[test]
    fn test_variant_respects_sharing() {
        let (x, y) = (Variable::fresh("X"), Variable::fresh("Y"));
        let (a, b) = (Variable::fresh("A"), Variable::fresh("B"));

        let xx = Term::compound("f", vec![Term::var(&x), Term::var(&x)]);
        let aa = Term::compound("f", vec![Term::var(&a), Term::var(&a)]);
        let ab = Term::compound("f", vec![Term::var(&a), Term::var(&b)]);
        let xy = Term::compound("f", vec![Term::var(&x), Term::var(&y)]);

        assert!(xx.is_variant_of(&aa));
        assert!(!xx.is_variant_of(&ab));
        assert!(!ab.is_variant_of(&aa));
        assert!(xy.is_variant_of(&ab));
    }
}
