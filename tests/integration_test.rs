/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate hornlog;
use hornlog::*;

#[cfg(test)]
mod tests {
    use super::*;

    // What a front end would show for one query.
    fn present(rules: &str, query: &str) -> Result<Vec<String>, SyntaxError> {
        let db = Database::new(parse_rules(rules)?);
        let goal = parse_query(query)?;
        let mut lines: Vec<String> = db.query(&goal).map(|t| t.to_string()).collect();
        if lines.is_empty() {
            lines.push("No solutions".to_string());
        }
        Ok(lines)
    }

    #[test]
    fn test_likes() {
        let rules = "likes(tom, jerry).\nlikes(tom, spike).";
        assert_eq!(
            present(rules, "likes(tom, Y)").unwrap(),
            vec!["likes(tom, jerry)", "likes(tom, spike)"]
        );
    }

    #[test]
    fn test_no_solutions_only_when_empty() {
        let rules = "likes(tom, jerry).";
        assert_eq!(present(rules, "likes(spike, X)").unwrap(), vec!["No solutions"]);
        assert_eq!(present(rules, "likes(X, jerry)").unwrap(), vec!["likes(tom, jerry)"]);
    }

    #[test]
    fn test_ancestor_terminates() {
        let rules = "
            ancestor(X,Y) :- parent(X,Y).
            ancestor(X,Y) :- parent(X,Z), ancestor(Z,Y).
            parent(a,b).
            parent(b,c).
        ";
        assert_eq!(
            present(rules, "ancestor(a,Z)").unwrap(),
            vec!["ancestor(a, b)", "ancestor(a, c)"]
        );
    }

    #[test]
    fn test_syntax_errors_surface() {
        let err = present("foo(", "foo").unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedEof { .. }));
        assert!(err.render("foo(").contains("line 1, column 5"));

        let err = present("foo.", "foo(").unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedEof { .. }));

        let err = present("a :- b c.", "a").unwrap_err();
        assert_eq!(err.span(), Span::new(1, 8));
    }

    #[test]
    fn test_database_round_trip() {
        let source = "
            grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
            parent(tom, bob).
            parent(bob, ann).
            lonely(_).
        ";
        let db = Database::from_source(source).unwrap();
        let rendered = db.to_string();
        let reparsed = Database::from_source(&rendered).unwrap();

        assert_eq!(reparsed.len(), db.len());
        assert_eq!(reparsed.to_string(), rendered);
        for (original, again) in db.rules().iter().zip(reparsed.rules()) {
            assert_eq!(original.head.functor_arity(), again.head.functor_arity());
        }
        assert!(db.rules()[0].is_variant_of(&reparsed.rules()[0]));

        let answers: Vec<String> = db
            .query_str("grandparent(tom, Who)")
            .unwrap()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(answers, vec!["grandparent(tom, ann)"]);
    }

    #[test]
    fn test_lexer_is_permissive() {
        let rules = "likes ( tom , jerry ) .   ## 42 !! ;;\nlikes(tom,spike).";
        assert_eq!(
            present(rules, "likes(tom, Y)").unwrap(),
            vec!["likes(tom, jerry)", "likes(tom, spike)"]
        );
        assert_eq!(tokenize("a :- b.").len(), 4);
    }

    #[test]
    fn test_manual_term_construction() {
        let x = Variable::fresh("X");
        let rule = Rule::fact(Term::compound("likes", vec![Term::atom("tom"), Term::var(&x)]));
        let db = Database::new(vec![rule]);

        let goal = Term::compound("likes", vec![Term::atom("tom"), Term::atom("anyone")]);
        let solutions: Vec<Term> = db.query(&goal).collect();
        assert_eq!(solutions, vec![goal.clone()]);

        let mut scope = Scope::new();
        let y = scope.variable("Y");
        let open = Term::compound("likes", vec![Term::var(&y), Term::var(&y)]);
        let solutions: Vec<String> = db.query(&open).map(|t| t.to_string()).collect();
        assert_eq!(solutions, vec!["likes(tom, tom)"]);
    }
}
