use std::collections::BTreeSet;

use log::debug;

use crate::ast::Node;
use crate::solution::{Solution, VarOrder};
use crate::types::Value;

impl Node {
    /// Returns all satisfying assignments of the formula, as partial
    /// assignments over `order`.
    ///
    /// Variables that do not matter for a given solution are left as
    /// don't-care. Variables of the formula missing from `order` are not
    /// recorded. An unsatisfiable formula yields the empty set.
    ///
    /// The enumeration is a plain recursive combination of per-operand
    /// solutions, exponential in the size of the formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use formula_rs::parser::parse;
    ///
    /// let f = parse("a&b").unwrap();
    /// let solutions = f.solve("ab");
    /// assert_eq!(solutions.len(), 1);
    /// assert_eq!(solutions.first().unwrap().to_string(), "tt");
    /// ```
    pub fn solve(&self, order: impl Into<VarOrder>) -> BTreeSet<Solution> {
        let order = order.into();
        self.solve_with(&order, true)
    }

    /// Assignments under which the formula evaluates to `polarity`.
    ///
    /// Negation flips the polarity instead of being pushed into the operands;
    /// under negative polarity a conjunction holds if any operand fails and a
    /// disjunction only if all of them fail.
    pub fn solve_with(&self, order: &VarOrder, polarity: bool) -> BTreeSet<Solution> {
        match self {
            Node::Var { name, .. } => {
                let mut solution = Solution::new(order);
                if !solution.set_var(*name, Value::from_polarity(polarity)) {
                    debug!("solve: variable {} is not in order {}", name, order);
                }
                BTreeSet::from([solution])
            }
            Node::Neg { arg, .. } => arg.solve_with(order, !polarity),
            Node::Conjunction { args, .. } if polarity => combine_all(args, order, polarity),
            Node::Conjunction { args, .. } => union_all(args, order, polarity),
            Node::Disjunction { args, .. } if polarity => union_all(args, order, polarity),
            Node::Disjunction { args, .. } => combine_all(args, order, polarity),
        }
    }

    /// Checks whether the formula has at least one model.
    pub fn is_satisfiable(&self) -> bool {
        let order = VarOrder::from(self.variables().as_slice());
        !self.solve_with(&order, true).is_empty()
    }
}

fn union_all(args: &[Node], order: &VarOrder, polarity: bool) -> BTreeSet<Solution> {
    args.iter().flat_map(|arg| arg.solve_with(order, polarity)).collect()
}

/// Pairwise combination: every operand must hold at once.
fn combine_all(args: &[Node], order: &VarOrder, polarity: bool) -> BTreeSet<Solution> {
    let mut solutions = BTreeSet::from([Solution::new(order)]);
    for arg in args {
        if solutions.is_empty() {
            break;
        }
        let rhs = arg.solve_with(order, polarity);
        solutions = solutions
            .iter()
            .flat_map(|lhs| {
                rhs.iter()
                    .filter(move |other| !lhs.contradicts_with(other))
                    .map(move |other| lhs.combine(other))
            })
            .collect();
        debug!("solve: {} partial solution(s) after {}", solutions.len(), arg);
    }
    solutions
}
