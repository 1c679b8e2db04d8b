//! # formula-rs: propositional formulas in Rust
//!
//! **`formula-rs`** parses small propositional formulas, rewrites them into
//! normal forms and enumerates their satisfying assignments.
//!
//! ## Formulas
//!
//! Variables are the letters `a`..`z`. Operators are `!` (negation), `&`
//! (conjunction) and `+` (disjunction), by decreasing precedence, with
//! parentheses for grouping. No whitespace is allowed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use formula_rs::parser::parse;
//!
//! // 1. Parse a formula
//! let f = parse("a&(b+!c)").unwrap();
//! assert_eq!(f.to_string(), "a&(b+!c)");
//!
//! // 2. Normal forms
//! assert_eq!(f.to_dnf().to_string(), "a&b+a&!c");
//! assert_eq!(f.to_cnf().to_string(), "a&(b+!c)");
//!
//! // 3. Solve over a variable order
//! let solutions: Vec<String> = f.solve("abc").iter().map(|s| s.to_string()).collect();
//! assert_eq!(solutions, vec!["tt-", "t-f"]);
//! ```
//!
//! ## Core Components
//!
//! - **[`ast`]**: The [`Node`][crate::ast::Node] syntax tree, its constructors and canonical rendering.
//! - **[`parser`]**: The stack-based parser and its [`ParseError`][crate::parser::ParseError].
//! - **[`normal`]**: DNF and CNF transforms.
//! - **[`sat`]**: Enumeration of satisfying partial assignments.
//! - **[`solution`]**: The [`Solution`][crate::solution::Solution] partial assignment.
//!
//! All computations are exhaustive and meant for small, hand-written formulas.

pub mod ast;
pub mod debug;
pub mod eval;
pub mod normal;
pub mod parser;
pub mod sat;
pub mod solution;
pub mod types;
