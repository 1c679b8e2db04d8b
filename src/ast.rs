//! Abstract syntax tree of propositional formulas.
//!
//! A formula is a [`Node`], a closed tagged union of four variants:
//!
//! - [`Node::Var`]: an atomic proposition `a`..`z`,
//! - [`Node::Neg`]: negation of a variable, a conjunction or a disjunction,
//! - [`Node::Conjunction`]: `&` over two or more operands,
//! - [`Node::Disjunction`]: `+` over two or more operands.
//!
//! The constructors keep the tree in a canonical shape: conjunctions never hold
//! conjunctions, disjunctions never hold disjunctions, a one-operand
//! conjunction/disjunction collapses into its operand, and double negation is
//! cancelled on the spot.
//!
//! Every node also carries the offset of the token it originated from. The
//! parser needs it to decide operator adjacency; it takes no part in equality
//! or hashing.
//!
//! Empty operand lists are not produced by the parser, but the normal-form
//! algorithms use them as constants: an empty disjunction is *false* and an
//! empty conjunction is *true*.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;

#[derive(Debug, Clone)]
pub enum Node {
    Var { pos: usize, name: char },
    Neg { pos: usize, arg: Box<Node> },
    Conjunction { pos: usize, args: Vec<Node> },
    Disjunction { pos: usize, args: Vec<Node> },
}

// Constructors
impl Node {
    /// Variable leaf at position 0.
    pub fn var(name: char) -> Self {
        Node::var_at(0, name)
    }

    pub fn var_at(pos: usize, name: char) -> Self {
        Node::Var { pos, name }
    }

    /// Negates `arg`.
    ///
    /// Negating a negation cancels both: the inner operand is returned,
    /// relocated to `pos`.
    pub fn neg(pos: usize, arg: Self) -> Self {
        match arg {
            Node::Neg { arg, .. } => arg.with_position(pos),
            arg => Node::Neg { pos, arg: Box::new(arg) },
        }
    }

    /// Conjunction of `args`, flattening nested conjunctions.
    pub fn conjunction<I>(pos: usize, args: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut args = args.into_iter().flat_map(Node::into_conjuncts).collect_vec();
        match args.len() {
            1 => args.remove(0),
            _ => Node::Conjunction { pos, args },
        }
    }

    /// Disjunction of `args`, flattening nested disjunctions.
    pub fn disjunction<I>(pos: usize, args: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut args = args.into_iter().flat_map(Node::into_disjuncts).collect_vec();
        match args.len() {
            1 => args.remove(0),
            _ => Node::Disjunction { pos, args },
        }
    }
}

impl Node {
    /// Offset of the token this node originated from.
    pub fn position(&self) -> usize {
        match self {
            Node::Var { pos, .. } | Node::Neg { pos, .. } | Node::Conjunction { pos, .. } | Node::Disjunction { pos, .. } => *pos,
        }
    }

    /// Returns the same node relocated to `pos`.
    pub fn with_position(mut self, new_pos: usize) -> Self {
        match &mut self {
            Node::Var { pos, .. } | Node::Neg { pos, .. } | Node::Conjunction { pos, .. } | Node::Disjunction { pos, .. } => {
                *pos = new_pos;
            }
        }
        self
    }

    /// Variant label, as used in tree dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Var { .. } => "variable",
            Node::Neg { .. } => "negation",
            Node::Conjunction { .. } => "conjunction",
            Node::Disjunction { .. } => "disjunction",
        }
    }

    /// Direct operands of the node (none for a variable).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Var { .. } => &[],
            Node::Neg { arg, .. } => std::slice::from_ref(arg.as_ref()),
            Node::Conjunction { args, .. } | Node::Disjunction { args, .. } => args,
        }
    }

    /// Returns `(name, polarity)` if the node is a variable or a negated variable.
    pub fn literal(&self) -> Option<(char, bool)> {
        match self {
            Node::Var { name, .. } => Some((*name, true)),
            Node::Neg { arg, .. } => match arg.as_ref() {
                Node::Var { name, .. } => Some((*name, false)),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.literal().is_some()
    }

    /// Checks whether `self` and `other` are opposite literals of the same variable.
    pub fn is_complement_of(&self, other: &Node) -> bool {
        match (self.literal(), other.literal()) {
            (Some((a, pa)), Some((b, pb))) => a == b && pa != pb,
            _ => false,
        }
    }

    /// Top-level operands of a disjunction, or the node itself.
    pub fn into_disjuncts(self) -> Vec<Node> {
        match self {
            Node::Disjunction { args, .. } => args,
            node => vec![node],
        }
    }

    /// Top-level operands of a conjunction, or the node itself.
    pub fn into_conjuncts(self) -> Vec<Node> {
        match self {
            Node::Conjunction { args, .. } => args,
            node => vec![node],
        }
    }

    /// Sorted distinct names of the variables occurring in the formula.
    pub fn variables(&self) -> Vec<char> {
        fn collect(node: &Node, acc: &mut BTreeSet<char>) {
            match node {
                Node::Var { name, .. } => {
                    acc.insert(*name);
                }
                _ => {
                    for child in node.children() {
                        collect(child, acc);
                    }
                }
            }
        }

        let mut acc = BTreeSet::new();
        collect(self, &mut acc);
        acc.into_iter().collect()
    }

    /// Total number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }

    fn is_empty_operator(&self) -> bool {
        match self {
            Node::Conjunction { args, .. } | Node::Disjunction { args, .. } => args.is_empty(),
            _ => false,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Var { name: a, .. }, Node::Var { name: b, .. }) => a == b,
            (Node::Neg { arg: a, .. }, Node::Neg { arg: b, .. }) => a == b,
            (Node::Conjunction { args: a, .. }, Node::Conjunction { args: b, .. }) => a == b,
            (Node::Disjunction { args: a, .. }, Node::Disjunction { args: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Node {}

// Must agree with `PartialEq`: the position is not hashed.
impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Node::Var { name, .. } => name.hash(state),
            Node::Neg { arg, .. } => arg.hash(state),
            Node::Conjunction { args, .. } | Node::Disjunction { args, .. } => args.hash(state),
        }
    }
}

struct Operand<'a> {
    node: &'a Node,
    parenthesize_disjunction: bool,
}

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let wrap = self.node.is_empty_operator() || (self.parenthesize_disjunction && matches!(self.node, Node::Disjunction { .. }));
        if wrap {
            write!(f, "({})", self.node)
        } else {
            write!(f, "{}", self.node)
        }
    }
}

impl Display for Node {
    /// Canonical infix rendering, e.g. `a&(b+!c)+!(a&b)`.
    ///
    /// The alternate form (`{:#}`) spells out the structure instead:
    /// `Or(And(a, Or(b, Not(c))), Not(And(a, b)))`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return match self {
                Node::Var { name, .. } => write!(f, "{name}"),
                Node::Neg { arg, .. } => write!(f, "Not({arg:#})"),
                Node::Conjunction { args, .. } => write!(f, "And({:#})", args.iter().format(", ")),
                Node::Disjunction { args, .. } => write!(f, "Or({:#})", args.iter().format(", ")),
            };
        }

        match self {
            Node::Var { name, .. } => write!(f, "{name}"),
            Node::Neg { arg, .. } => match arg.as_ref() {
                Node::Var { .. } => write!(f, "!{arg}"),
                _ => write!(f, "!({arg})"),
            },
            Node::Conjunction { args, .. } => {
                let operands = args.iter().map(|node| Operand {
                    node,
                    parenthesize_disjunction: true,
                });
                write!(f, "{}", operands.format("&"))
            }
            Node::Disjunction { args, .. } => {
                let operands = args.iter().map(|node| Operand {
                    node,
                    parenthesize_disjunction: false,
                });
                write!(f, "{}", operands.format("+"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_log::test;

    use super::*;

    fn a() -> Node {
        Node::var('a')
    }

    fn b() -> Node {
        Node::var('b')
    }

    fn c() -> Node {
        Node::var('c')
    }

    #[test]
    fn test_double_negation_cancels() {
        let x = Node::var_at(4, 'x');
        let not_x = Node::neg(3, x);
        assert_eq!(not_x.to_string(), "!x");
        let x = Node::neg(2, not_x);
        assert!(matches!(x, Node::Var { pos: 2, name: 'x' }));
    }

    #[test]
    fn test_flattening() {
        let inner = Node::conjunction(0, [a(), b()]);
        let outer = Node::conjunction(0, [inner, c()]);
        assert_eq!(outer.children().len(), 3);
        assert_eq!(outer.to_string(), "a&b&c");

        let inner = Node::disjunction(0, [b(), c()]);
        let outer = Node::disjunction(0, [a(), inner]);
        assert_eq!(outer.children().len(), 3);
        assert_eq!(outer.to_string(), "a+b+c");
    }

    #[test]
    fn test_singleton_collapses() {
        assert_eq!(Node::conjunction(0, [a()]), a());
        assert_eq!(Node::disjunction(0, [a()]), a());
    }

    #[test]
    fn test_rendering() {
        let f = Node::conjunction(0, [a(), Node::disjunction(2, [b(), c()])]);
        assert_eq!(f.to_string(), "a&(b+c)");
        assert_eq!(format!("{:#}", f), "And(a, Or(b, c))");

        let g = Node::disjunction(0, [Node::conjunction(0, [a(), b()]), Node::neg(4, c())]);
        assert_eq!(g.to_string(), "a&b+!c");

        let h = Node::neg(0, Node::conjunction(1, [a(), b()]));
        assert_eq!(h.to_string(), "!(a&b)");
        let h = Node::neg(0, Node::disjunction(1, [a(), b()]));
        assert_eq!(h.to_string(), "!(a+b)");
    }

    #[test]
    fn test_empty_operators() {
        let falsum = Node::disjunction(0, []);
        let verum = Node::conjunction(0, []);
        assert_eq!(falsum.to_string(), "");
        assert_eq!(verum.to_string(), "");
        assert_eq!(Node::Conjunction { pos: 0, args: vec![a(), falsum] }.to_string(), "a&()");
    }

    #[test]
    fn test_equality_ignores_position() {
        let f = Node::conjunction(0, [Node::var_at(0, 'a'), Node::var_at(2, 'b')]);
        let g = Node::conjunction(5, [Node::var_at(7, 'a'), Node::var_at(9, 'b')]);
        assert_eq!(f, g);

        let set: HashSet<Node> = [f, g].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_equality_respects_shape() {
        let and = Node::conjunction(0, [a(), b()]);
        let or = Node::disjunction(0, [a(), b()]);
        assert_ne!(and, or);
        assert_ne!(Node::conjunction(0, [a(), b()]), Node::conjunction(0, [b(), a()]));
    }

    #[test]
    fn test_literals() {
        assert_eq!(a().literal(), Some(('a', true)));
        assert_eq!(Node::neg(0, a()).literal(), Some(('a', false)));
        assert_eq!(Node::neg(0, Node::conjunction(0, [a(), b()])).literal(), None);
        assert!(a().is_complement_of(&Node::neg(0, a())));
        assert!(!a().is_complement_of(&Node::neg(0, b())));
        assert!(!a().is_complement_of(&a()));
    }

    #[test]
    fn test_variables() {
        let f = Node::disjunction(0, [Node::conjunction(0, [c(), a()]), Node::neg(0, c())]);
        assert_eq!(f.variables(), vec!['a', 'c']);
        assert_eq!(f.size(), 6);
    }
}
