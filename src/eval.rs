use std::ops::{BitAnd, BitOr, Not};

use crate::ast::Node;
use crate::solution::Solution;

impl BitAnd for Node {
    type Output = Node;

    fn bitand(self, rhs: Self) -> Self::Output {
        Node::conjunction(self.position(), [self, rhs])
    }
}

impl BitOr for Node {
    type Output = Node;

    fn bitor(self, rhs: Self) -> Self::Output {
        Node::disjunction(self.position(), [self, rhs])
    }
}

impl Not for Node {
    type Output = Node;

    fn not(self) -> Self::Output {
        Node::neg(self.position(), self)
    }
}

impl Node {
    /// Evaluates the formula under a total assignment.
    pub fn eval<F>(&self, model: &F) -> bool
    where
        F: Fn(char) -> bool,
    {
        match self {
            Node::Var { name, .. } => model(*name),
            Node::Neg { arg, .. } => !arg.eval(model),
            Node::Conjunction { args, .. } => args.iter().all(|a| a.eval(model)),
            Node::Disjunction { args, .. } => args.iter().any(|a| a.eval(model)),
        }
    }

    /// Evaluates the formula under a solution.
    ///
    /// Returns `None` if some variable of the formula is don't-care or absent
    /// from the solution's order.
    pub fn eval_solution(&self, solution: &Solution) -> Option<bool> {
        let assigned = self
            .variables()
            .into_iter()
            .all(|v| solution.get_var(v).and_then(|value| value.to_bool()).is_some());
        if !assigned {
            return None;
        }
        Some(self.eval(&|v| solution.get_var(v).and_then(|value| value.to_bool()) == Some(true)))
    }
}
