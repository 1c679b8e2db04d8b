//! Single-pass parser for infix formulas.
//!
//! Grammar (no whitespace):
//!
//! ```text
//! Formula := Term ('+' Term)*
//! Term    := Factor ('&' Factor)*
//! Factor  := '!'* ( '(' Formula ')' | Var )
//! Var     := [a-z]
//! ```
//!
//! There is no precedence table. The scan keeps three stacks (operands, open
//! brackets, pending `&`/`!` operators) and an operator is applied as soon as a
//! finished operand starts exactly one token after it. Since an operand of `&`
//! is completed before the `+` that follows it is even seen, negation binds
//! tighter than conjunction, which binds tighter than disjunction. Disjunction
//! needs no stack action at all: the operands left between a pair of brackets
//! (or in the whole formula) are the operands of one disjunction.
//!
//! The grammar is checked on the fly, so malformed input is rejected with a
//! [`ParseError`] before the stacks could get out of shape.

use std::fmt;

use log::debug;

use crate::ast::Node;

/// Error type for parsing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The input is empty.
    EmptyFormula,
    /// A character outside of `[a-z!&+()]`.
    UnexpectedCharacter { position: usize, found: char },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnbalancedBracket { position: usize },
    /// A valid token in a place where the grammar does not allow it.
    MisplacedToken { position: usize, found: char },
    /// The input ends where an operand is still expected.
    UnexpectedEnd { position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyFormula => write!(f, "empty formula"),
            ParseError::UnexpectedCharacter { position, found } => {
                write!(f, "unexpected character {:?} at position {}", found, position)
            }
            ParseError::UnbalancedBracket { position } => {
                write!(f, "unbalanced bracket at position {}", position)
            }
            ParseError::MisplacedToken { position, found } => {
                write!(f, "misplaced token {:?} at position {}", found, position)
            }
            ParseError::UnexpectedEnd { position } => {
                write!(f, "unexpected end of formula at position {}, expected an operand", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Op {
    And,
    Not,
}

#[derive(Debug, Default)]
struct Parser {
    /// Completed subtrees.
    operands: Vec<Node>,
    /// Per open bracket: operand stack depth at that point, and the bracket position.
    brackets: Vec<(usize, usize)>,
    /// Operators waiting for their right operand.
    pending: Vec<(Op, usize)>,
}

impl Parser {
    /// Pushes a finished operand, first applying every pending operator
    /// that sits right before it.
    fn push(&mut self, mut node: Node) -> Result<(), ParseError> {
        while let Some(&(op, op_pos)) = self.pending.last() {
            if op_pos + 1 != node.position() {
                break;
            }
            self.pending.pop();
            node = match op {
                Op::And => {
                    let lhs = self.operands.pop().ok_or(ParseError::MisplacedToken {
                        position: op_pos,
                        found: '&',
                    })?;
                    Node::conjunction(lhs.position(), [lhs, node])
                }
                Op::Not => Node::neg(op_pos, node),
            };
        }
        self.operands.push(node);
        Ok(())
    }

    /// Collapses everything pushed since the matching `(` into one operand.
    fn close(&mut self, position: usize) -> Result<(), ParseError> {
        let (depth, open) = self.brackets.pop().ok_or(ParseError::UnbalancedBracket { position })?;
        let inner = self.operands.split_off(depth);
        debug!("close(open = {}, close = {}, operands = {})", open, position, inner.len());
        if inner.is_empty() {
            return Err(ParseError::MisplacedToken { position, found: ')' });
        }
        let node = Node::disjunction(open, inner).with_position(open);
        self.push(node)
    }

    fn finish(mut self) -> Result<Node, ParseError> {
        match self.operands.len() {
            0 => Err(ParseError::EmptyFormula),
            1 => self.operands.pop().ok_or(ParseError::EmptyFormula),
            _ => Ok(Node::disjunction(0, self.operands)),
        }
    }
}

/// Parses a formula into its syntax tree.
///
/// # Examples
///
/// ```
/// use formula_rs::parser::parse;
///
/// let f = parse("a&(b+!c)").unwrap();
/// assert_eq!(f.to_string(), "a&(b+!c)");
/// assert_eq!(f.variables(), vec!['a', 'b', 'c']);
/// ```
pub fn parse(formula: &str) -> Result<Node, ParseError> {
    debug!("parse(formula = {:?})", formula);

    if formula.is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    let mut parser = Parser::default();
    // Whether the next token must start an operand.
    let mut expect_operand = true;
    let mut length = 0;

    for (position, token) in formula.chars().enumerate() {
        length = position + 1;
        let misplaced = ParseError::MisplacedToken { position, found: token };
        match token {
            'a'..='z' => {
                if !expect_operand {
                    return Err(misplaced);
                }
                parser.push(Node::var_at(position, token))?;
                expect_operand = false;
            }
            '!' => {
                if !expect_operand {
                    return Err(misplaced);
                }
                parser.pending.push((Op::Not, position));
            }
            '(' => {
                if !expect_operand {
                    return Err(misplaced);
                }
                parser.brackets.push((parser.operands.len(), position));
            }
            '&' => {
                if expect_operand {
                    return Err(misplaced);
                }
                parser.pending.push((Op::And, position));
                expect_operand = true;
            }
            '+' => {
                if expect_operand {
                    return Err(misplaced);
                }
                expect_operand = true;
            }
            ')' => {
                if expect_operand {
                    return Err(misplaced);
                }
                parser.close(position)?;
            }
            _ => {
                return Err(ParseError::UnexpectedCharacter { position, found: token });
            }
        }
    }

    if expect_operand {
        return Err(ParseError::UnexpectedEnd { position: length });
    }
    if let Some(&(_, position)) = parser.brackets.last() {
        return Err(ParseError::UnbalancedBracket { position });
    }

    let root = parser.finish()?;
    debug!("parse: {} => {}", formula, root);
    Ok(root)
}
