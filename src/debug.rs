//! Debug utilities for inspecting formula trees.
//!
//! These are primarily useful in tests and during development.

use std::fmt::{self, Write};

use crate::ast::Node;

/// Indented dump of a formula tree: one node per line, `<variant>:<position>`
/// header, operands indented by two spaces.
///
/// ```text
/// disjunction:0
///   variable:0 a
///   conjunction:2
///     variable:2 b
///     negation:4
///       variable:5 c
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeTree<'a> {
    pub root: &'a Node,
}

impl NodeTree<'_> {
    fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}:{}", "", node.kind(), node.position(), indent = 2 * depth)?;
        if let Node::Var { name, .. } = node {
            write!(f, " {}", name)?;
        }
        writeln!(f)?;
        for child in node.children() {
            Self::write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for NodeTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.root, 0)
    }
}

impl Node {
    pub fn debug_tree(&self) -> NodeTree<'_> {
        NodeTree { root: self }
    }

    /// Tree dump as a string. See [`NodeTree`].
    pub fn dump(&self) -> String {
        let mut result = String::new();
        // Writing into a `String` cannot fail.
        let _ = write!(&mut result, "{}", self.debug_tree());
        result
    }
}

/// Verify that a formula evaluates correctly for all assignments of `vars`.
///
/// Returns a list of assignments where evaluation doesn't match expected,
/// as `(assignment, expected, actual)`.
pub fn verify_truth_table(root: &Node, vars: &[char], expected_fn: impl Fn(&[bool]) -> bool) -> Vec<(Vec<bool>, bool, bool)> {
    let mut failures = Vec::new();
    let n = vars.len();

    for bits in 0..(1u64 << n) {
        let assignment: Vec<bool> = (0..n).map(|i| (bits >> i) & 1 == 1).collect();

        let actual = root.eval(&|name| {
            vars.iter()
                .position(|&v| v == name)
                .map_or(false, |i| assignment[i])
        });
        let expected = expected_fn(&assignment);

        if actual != expected {
            failures.push((assignment, expected, actual));
        }
    }

    failures
}
