/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::fmt;

use crate::terms::{Term, Variable};

/// A Horn clause. Facts have `Term::True` as body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub head: Term,
    pub body: Term,
}

impl Rule {
    pub fn new(head: Term, body: Term) -> Self {
        Rule { head, body }
    }

    pub fn fact(head: Term) -> Self {
        Rule {
            head,
            body: Term::True,
        }
    }

    pub fn is_fact(&self) -> bool {
        self.body == Term::True
    }

    /// Copy of the rule with every variable replaced by a fresh one of the
    /// same name. Sharing inside the rule is preserved.
    pub fn rename_variables(&self) -> Rule {
        let mut var_map = HashMap::new();
        Rule {
            head: rename_term(&self.head, &mut var_map),
            body: rename_term(&self.body, &mut var_map),
        }
    }

    /// Same shape as `other` up to a consistent renaming of variables.
    pub fn is_variant_of(&self, other: &Rule) -> bool {
        let lhs = Term::Conjunction(vec![self.head.clone(), self.body.clone()]);
        let rhs = Term::Conjunction(vec![other.head.clone(), other.body.clone()]);
        lhs.is_variant_of(&rhs)
    }
}

fn rename_term(term: &Term, var_map: &mut HashMap<Variable, Variable>) -> Term {
    match term {
        Term::Variable(v) => {
            let renamed = var_map.entry(v.clone()).or_insert_with(|| v.renamed());
            Term::Variable(renamed.clone())
        }
        Term::Compound { functor, args } => Term::Compound {
            functor: functor.clone(),
            args: args.iter().map(|a| rename_term(a, var_map)).collect(),
        },
        Term::Conjunction(goals) => {
            Term::Conjunction(goals.iter().map(|g| rename_term(g, var_map)).collect())
        }
        Term::True => Term::True,
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :- {}", self.head, self.body)
    }
}
