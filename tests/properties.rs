//! Property tests over a catalogue of hand-written formulas.
//!
//! Covers parsing round-trips, idempotence of the normal forms, truth-table
//! equivalence of a formula and its normal forms, and soundness/completeness
//! of the solver.

use std::collections::HashSet;

use formula_rs::ast::Node;
use formula_rs::debug::verify_truth_table;
use formula_rs::parser::parse;
use formula_rs::solution::{Solution, VarOrder};

const PARSE_CASES: &[&str] = &[
    "a",
    "a+b",
    "a+b+c",
    "a&b",
    "a&b&c",
    "a&b+c",
    "a+b&c",
    "a+(b+c)",
    "(a+b)+c",
    "a&(b&c)",
    "(a&b)&c",
    "a+(b&c)",
    "a&(b+c)",
    "(a+b)&c",
    "(a&b)+c",
    "a&b+b&c+a&b&c",
    "(a&b)&(b&c)&(a&b&c)",
    "(a+b)&(b+c)&(a+b+c)",
    "!a",
    "!a+b",
    "!a&b",
    "a+!b",
    "a&!b",
    "!a&b+b&c+a&b&c",
    "a+!(b&!(a&!c))",
    "!!a",
    "!(!a)",
    "!(!(a+b)&!(a&c))",
    "b&!!a",
    "b&(!!(a))",
];

const DNF_CASES: &[&str] = &[
    "a",
    "!a",
    "a+b",
    "a&b",
    "a&b&c",
    "a&b+c",
    "a&(b+c)",
    "a&!b",
    "!(a+b)",
    "!(a&b)",
    "!(a+b&c)",
    "(a+b)&(b+c)",
    "(!a+b)&(a+b)",
    "(!a+b+c)&(a+!b+c)",
    "(!a+b+c)&(a+!b+c)&(a+b+!c)",
];

const CNF_CASES: &[&str] = &[
    "a",
    "!a",
    "a+b",
    "a+!b",
    "a&b",
    "!a&b",
    "a+b&c",
    "a+!a&b+!a&c",
    "!a&(b+c)",
    "(a+b)&(!b+c+!d)&(d+!e)",
    "!(b+c)",
    "(a&b)+c",
    "a&(b+(d&e))",
];

fn all_cases() -> impl Iterator<Item = &'static str> {
    PARSE_CASES.iter().chain(DNF_CASES).chain(CNF_CASES).copied()
}

fn strings<'a>(items: impl IntoIterator<Item = &'a Solution>) -> Vec<String> {
    items.into_iter().map(|s| s.to_string()).collect()
}

fn assert_equivalent(original: &Node, transformed: &Node) {
    let vars = original.variables();
    let failures = verify_truth_table(transformed, &vars, |assignment| {
        original.eval(&|name| vars.iter().position(|&v| v == name).map_or(false, |i| assignment[i]))
    });
    assert!(
        failures.is_empty(),
        "{} and {} differ on: {:?}",
        original,
        transformed,
        failures
    );
}

#[test]
fn round_trip() {
    for formula in PARSE_CASES {
        let ast = parse(formula).unwrap();
        let rendered = ast.to_string();
        println!("{} => {}", formula, rendered);
        println!("{}", ast.dump());
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(reparsed, ast, "round-trip of {}", formula);
    }
}

#[test]
fn parse_is_equivalent_to_reparse() {
    for formula in PARSE_CASES {
        let ast = parse(formula).unwrap();
        let reparsed = parse(&ast.to_string()).unwrap();
        assert_equivalent(&ast, &reparsed);
    }
}

#[test]
fn dnf_is_idempotent() {
    for formula in all_cases() {
        let dnf = parse(formula).unwrap().to_dnf();
        assert_eq!(dnf.to_dnf(), dnf, "DNF of {} is {}", formula, dnf);
    }
}

#[test]
fn cnf_is_idempotent() {
    for formula in all_cases() {
        let cnf = parse(formula).unwrap().to_cnf();
        assert_eq!(cnf.to_cnf(), cnf, "CNF of {} is {}", formula, cnf);
    }
}

#[test]
fn dnf_shape() {
    for formula in all_cases() {
        let dnf = parse(formula).unwrap().to_dnf();
        for term in dnf.clone().into_disjuncts() {
            assert!(
                term.clone().into_conjuncts().iter().all(Node::is_literal),
                "{} is not in DNF (term {})",
                dnf,
                term
            );
        }
    }
}

#[test]
fn cnf_shape() {
    for formula in all_cases() {
        let cnf = parse(formula).unwrap().to_cnf();
        for clause in cnf.clone().into_conjuncts() {
            assert!(
                clause.clone().into_disjuncts().iter().all(Node::is_literal),
                "{} is not in CNF (clause {})",
                cnf,
                clause
            );
        }
    }
}

#[test]
fn normal_forms_preserve_semantics() {
    for formula in all_cases() {
        let ast = parse(formula).unwrap();
        let dnf = ast.to_dnf();
        let cnf = ast.to_cnf();
        println!("{} => DNF {} => CNF {}", ast, dnf, cnf);
        assert_equivalent(&ast, &dnf);
        assert_equivalent(&ast, &cnf);
    }
}

#[test]
fn solve_is_sound() {
    for formula in all_cases() {
        let ast = parse(formula).unwrap();
        let order = VarOrder::from(ast.variables().as_slice());
        for solution in ast.solve(&order) {
            for total in solution.extensions() {
                assert_eq!(
                    ast.eval_solution(&total),
                    Some(true),
                    "{} (from {}) does not satisfy {}",
                    total,
                    solution,
                    formula
                );
            }
        }
    }
}

#[test]
fn solve_is_complete() {
    for formula in all_cases() {
        let ast = parse(formula).unwrap();
        let order = VarOrder::from(ast.variables().as_slice());
        let solutions = ast.solve(&order);
        for total in Solution::new(&order).extensions() {
            if ast.eval_solution(&total) == Some(true) {
                assert!(
                    solutions.iter().any(|s| s.subsumes(&total)),
                    "model {} of {} is not covered by {:?}",
                    total,
                    formula,
                    strings(&solutions)
                );
            }
        }
    }
}

#[test]
fn solve_agrees_with_normal_forms() {
    for formula in all_cases() {
        let ast = parse(formula).unwrap();
        let order = VarOrder::from(ast.variables().as_slice());
        let models = |node: &Node| -> HashSet<String> {
            node.solve(&order)
                .iter()
                .flat_map(Solution::extensions)
                .map(|s| s.to_string())
                .collect()
        };
        let expected = models(&ast);
        assert_eq!(models(&ast.to_dnf()), expected, "DNF of {}", formula);
        assert_eq!(models(&ast.to_cnf()), expected, "CNF of {}", formula);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(strings(&parse("a&b").unwrap().solve("ab")), vec!["tt"]);
    assert_eq!(parse("a+b").unwrap().to_dnf().to_string(), "a+b");

    let dnf = parse("a&(b+c)").unwrap().to_dnf().to_string();
    let terms: HashSet<&str> = dnf.split('+').collect();
    assert_eq!(terms, HashSet::from(["a&b", "a&c"]));

    assert_eq!(parse("!(a&b)").unwrap().to_cnf().to_string(), "!a+!b");
    assert!(parse("a&!a").unwrap().solve("a").is_empty());
}

#[test]
fn normalization_does_not_alias() {
    let ast = parse("(a+b)&(!b+c)").unwrap();
    let dnf = ast.to_dnf();
    let cnf = ast.to_cnf();
    assert_eq!(ast.to_string(), "(a+b)&(!b+c)");
    assert_eq!(cnf, ast);
    assert_ne!(dnf, ast);
    assert_equivalent(&dnf, &cnf);
}
