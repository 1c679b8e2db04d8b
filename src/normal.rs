//! Disjunctive and conjunctive normal forms.
//!
//! Both transforms rewrite a formula with De Morgan's laws, double-negation
//! elimination and distribution, building a new tree and leaving the input
//! untouched:
//!
//! - **DNF**: a disjunction whose operands are literals or conjunctions of literals.
//! - **CNF**: a conjunction whose operands are literals or disjunctions of literals.
//!
//! A conjunction reaches DNF by distributing it over the disjuncts of its
//! operands. A disjunction reaches CNF by a double flip:
//! the DNF of its negation is computed, then negated once more into CNF.
//!
//! # Polarity
//!
//! The `*_with` entry points take a polarity flag that is threaded down the
//! tree. De Morgan's laws are only applied under positive polarity; under
//! negative polarity a negated conjunction/disjunction yields its operand
//! unchanged. The plain [`Node::to_dnf`] and [`Node::to_cnf`] use positive
//! polarity, which is what produces an equivalent formula.
//!
//! # Complexity
//!
//! Distribution is exponential in the number of operands in the worst case.
//! Unsatisfiable products are pruned and equal terms merged, but no
//! subsumption is performed.

use itertools::Itertools;
use log::debug;

use crate::ast::Node;

impl Node {
    /// Equivalent formula in disjunctive normal form.
    ///
    /// # Examples
    ///
    /// ```
    /// use formula_rs::parser::parse;
    ///
    /// let f = parse("a&(b+c)").unwrap();
    /// assert_eq!(f.to_dnf().to_string(), "a&b+a&c");
    /// ```
    pub fn to_dnf(&self) -> Node {
        self.to_dnf_with(true)
    }

    /// Equivalent formula in conjunctive normal form.
    ///
    /// # Examples
    ///
    /// ```
    /// use formula_rs::parser::parse;
    ///
    /// let f = parse("!(a&b)").unwrap();
    /// assert_eq!(f.to_cnf().to_string(), "!a+!b");
    /// ```
    pub fn to_cnf(&self) -> Node {
        self.to_cnf_with(true)
    }

    pub fn to_dnf_with(&self, polarity: bool) -> Node {
        match self {
            Node::Var { .. } => self.clone(),
            Node::Neg { pos, arg } => match arg.as_ref() {
                Node::Var { .. } => self.clone(),
                // Not built by the constructors; normalized at positive polarity regardless.
                Node::Neg { arg: inner, .. } => inner.to_dnf_with(true),
                Node::Conjunction { args, .. } if polarity => {
                    debug!("to_dnf: De Morgan !(A&B) => !A+!B at {}", pos);
                    let negated = args.iter().map(|a| Node::neg(a.position(), a.clone()).to_dnf_with(true));
                    Node::disjunction(*pos, negated).to_dnf_with(true)
                }
                Node::Disjunction { args, .. } if polarity => {
                    debug!("to_dnf: De Morgan !(A+B) => !A&!B at {}", pos);
                    let negated = args.iter().map(|a| Node::neg(a.position(), a.clone()).to_dnf_with(true));
                    Node::conjunction(*pos, negated).to_dnf_with(true)
                }
                _ => arg.as_ref().clone(),
            },
            Node::Disjunction { pos, args } => {
                let args = args.iter().flat_map(|a| a.to_dnf_with(polarity).into_disjuncts());
                Node::disjunction(*pos, args.unique())
            }
            Node::Conjunction { pos, args } => distribute(*pos, args, polarity),
        }
    }

    pub fn to_cnf_with(&self, polarity: bool) -> Node {
        match self {
            Node::Var { .. } => self.clone(),
            Node::Neg { pos, arg } => match arg.as_ref() {
                Node::Var { .. } => self.clone(),
                Node::Neg { arg: inner, .. } => inner.to_cnf_with(true),
                Node::Conjunction { args, .. } if polarity => {
                    debug!("to_cnf: De Morgan !(A&B) => !A+!B at {}", pos);
                    let negated = args.iter().map(|a| Node::neg(a.position(), a.clone()).to_cnf_with(true));
                    Node::disjunction(*pos, negated).to_cnf_with(true)
                }
                Node::Disjunction { args, .. } if polarity => {
                    debug!("to_cnf: De Morgan !(A+B) => !A&!B at {}", pos);
                    let negated = args.iter().map(|a| Node::neg(a.position(), a.clone()).to_cnf_with(true));
                    Node::conjunction(*pos, negated).to_cnf_with(true)
                }
                _ => arg.as_ref().clone(),
            },
            Node::Conjunction { pos, args } => {
                let args = args.iter().flat_map(|a| a.to_cnf_with(polarity).into_conjuncts());
                Node::conjunction(*pos, args.unique())
            }
            Node::Disjunction { pos, args } => {
                if args.iter().all(Node::is_literal) {
                    return self.clone();
                }
                debug!("to_cnf: flipping {} through DNF", self);
                let dnf = Node::neg(*pos, self.clone()).to_dnf_with(polarity);
                Node::neg(*pos, dnf).to_cnf_with(polarity)
            }
        }
    }
}

/// Terms of a DNF formula, each as a list of literals.
fn dnf_terms(node: &Node, polarity: bool) -> Vec<Vec<Node>> {
    node.to_dnf_with(polarity)
        .into_disjuncts()
        .into_iter()
        .map(Node::into_conjuncts)
        .collect()
}

/// DNF of the conjunction of `args`.
///
/// Keeps a list of terms (conjunctions of literals). The first operand is
/// normalized at `polarity`, every further one at positive polarity, and each
/// current term is paired with each of its terms.
/// Literals already present are dropped, and a pair holding a literal together
/// with its complement is discarded altogether.
fn distribute(pos: usize, args: &[Node], polarity: bool) -> Node {
    let Some((first, rest)) = args.split_first() else {
        return Node::conjunction(pos, []);
    };

    let mut terms = dnf_terms(first, polarity);
    for arg in rest {
        if terms.is_empty() {
            break;
        }
        let right_terms = dnf_terms(arg, true);
        terms = terms
            .iter()
            .cartesian_product(&right_terms)
            .filter_map(|(left, right)| conjoin(left, right))
            .unique()
            .collect();
        debug!("distribute: {} term(s) after {}", terms.len(), arg);
    }

    let mut terms = terms.into_iter().map(|term| Node::conjunction(pos, term)).collect_vec();
    match terms.len() {
        1 => terms.remove(0),
        _ => Node::disjunction(pos, terms.into_iter().unique()),
    }
}

/// Conjunction of two terms, or `None` if they contradict each other.
///
/// A term extended with new literals is sorted by variable name, so that
/// equal products built in a different order compare equal.
fn conjoin(left: &[Node], right: &[Node]) -> Option<Vec<Node>> {
    let mut increment: Vec<&Node> = Vec::new();
    for lit in right {
        if left.contains(lit) || increment.contains(&lit) {
            continue;
        }
        if left.iter().chain(increment.iter().copied()).any(|l| l.is_complement_of(lit)) {
            return None;
        }
        increment.push(lit);
    }

    if increment.is_empty() {
        return Some(left.to_vec());
    }

    let mut term = left.to_vec();
    term.extend(increment.into_iter().cloned());
    term.sort_by_key(Node::literal);
    Some(term)
}
