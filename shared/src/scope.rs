/*
 * Copyright © 2024 ladroid
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use crate::terms::Variable;

/// Name -> variable table for one rule or one query.
///
/// Looking up a name twice returns the same variable. The anonymous name `_`
/// is never stored, every lookup of it allocates a new variable.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    name_to_variable: HashMap<String, Variable>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            name_to_variable: HashMap::new(),
        }
    }

    pub fn variable(&mut self, name: &str) -> Variable {
        if name == "_" {
            return Variable::fresh(name);
        }
        if let Some(variable) = self.name_to_variable.get(name) {
            variable.clone()
        } else {
            let variable = Variable::fresh(name);
            self.name_to_variable.insert(name.to_string(), variable.clone());
            variable
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.name_to_variable.get(name)
    }

    pub fn len(&self) -> usize {
        self.name_to_variable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_variable.is_empty()
    }
}
