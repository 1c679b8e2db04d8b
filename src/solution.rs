//! Partial assignments over a fixed variable order.
//!
//! A [`Solution`] pairs a [`VarOrder`] with one [`Value`] per variable. Don't-care
//! values leave a variable unconstrained, so a single solution can stand for
//! many total assignments.
//!
//! Two solutions are equal iff their value sequences are equal; the order is
//! assumed to be shared by every solution of one solving session.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::types::Value;

/// Ordered list of variable names, shared by all solutions of a session.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VarOrder(Rc<[char]>);

impl VarOrder {
    pub fn new(vars: &str) -> Self {
        VarOrder(vars.chars().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of `name` in the order.
    pub fn index_of(&self, name: char) -> Option<usize> {
        self.0.iter().position(|&v| v == name)
    }

    pub fn vars(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for VarOrder {
    fn from(vars: &str) -> Self {
        VarOrder::new(vars)
    }
}

impl From<&[char]> for VarOrder {
    fn from(vars: &[char]) -> Self {
        VarOrder(vars.into())
    }
}

impl From<&VarOrder> for VarOrder {
    fn from(order: &VarOrder) -> Self {
        order.clone()
    }
}

impl fmt::Display for VarOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.0.iter() {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Solution {
    order: VarOrder,
    values: Vec<Value>,
}

impl Solution {
    /// Creates a solution with every variable set to don't-care.
    pub fn new(order: impl Into<VarOrder>) -> Self {
        let order = order.into();
        let values = vec![Value::DontCare; order.len()];
        Self { order, values }
    }

    /// Creates a solution from an assignment string of `t`, `f` and `-`.
    ///
    /// The string is adopted only if it has one valid code per variable;
    /// otherwise every variable is don't-care.
    pub fn with_assignment(order: impl Into<VarOrder>, assignment: &str) -> Self {
        let mut solution = Self::new(order);
        let values: Option<Vec<Value>> = assignment.chars().map(Value::from_char).collect();
        if let Some(values) = values {
            if values.len() == solution.values.len() {
                solution.values = values;
            }
        }
        solution
    }

    pub fn order(&self) -> &VarOrder {
        &self.order
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Assigns `value` to `name`.
    ///
    /// Returns `false` (and changes nothing) if `name` is not in the order.
    pub fn set_var(&mut self, name: char, value: Value) -> bool {
        match self.order.index_of(name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Value of `name`, or `None` if it is not in the order.
    pub fn get_var(&self, name: char) -> Option<Value> {
        self.order.index_of(name).map(|i| self.values[i])
    }

    /// Checks whether some variable is assigned here and has the opposite
    /// value in `other`. Don't-care is compatible with anything.
    pub fn contradicts_with(&self, other: &Solution) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .any(|(&mine, &theirs)| !mine.is_dont_care() && theirs == mine.negate())
    }

    /// Merges two solutions, preferring `self`'s values over `other`'s.
    ///
    /// The caller is expected to check [`Solution::contradicts_with`] first.
    pub fn combine(&self, other: &Solution) -> Solution {
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&mine, &theirs)| if mine.is_dont_care() { theirs } else { mine })
            .collect();
        Solution {
            order: self.order.clone(),
            values,
        }
    }

    /// Checks whether no variable is don't-care.
    pub fn is_total(&self) -> bool {
        self.values.iter().all(|v| !v.is_dont_care())
    }

    /// Checks whether every total assignment covered by `other` is also covered by `self`.
    pub fn subsumes(&self, other: &Solution) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .all(|(&mine, &theirs)| mine.is_dont_care() || mine == theirs)
    }

    /// All total assignments covered by this solution.
    ///
    /// Note: there are `2^k` of them for `k` don't-care variables.
    pub fn extensions(&self) -> Vec<Solution> {
        let mut result = vec![self.clone()];
        for (i, value) in self.values.iter().enumerate() {
            if !value.is_dont_care() {
                continue;
            }
            result = result
                .into_iter()
                .flat_map(|s| {
                    [Value::True, Value::False].map(|v| {
                        let mut s = s.clone();
                        s.values[i] = v;
                        s
                    })
                })
                .collect();
        }
        result
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for Solution {}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.cmp(&other.values)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.values {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
