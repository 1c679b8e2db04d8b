//! Tri-state values of a (possibly partial) assignment.
//!
//! A [`Value`] is what a [`Solution`][crate::solution::Solution] stores for
//! every variable of its order: the variable is either forced to true, forced
//! to false, or left unconstrained.
use std::fmt;

/// Value of a single variable inside a partial assignment.
///
/// The derived ordering is `True < False < DontCare`, which makes solution sets
/// list the most constrained assignments first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Value {
    True,
    False,
    DontCare,
}

impl Value {
    /// Returns the value forced by a literal of the given polarity.
    pub fn from_polarity(polarity: bool) -> Self {
        if polarity {
            Value::True
        } else {
            Value::False
        }
    }

    /// Swaps `True` and `False`, leaving `DontCare` as is.
    pub fn negate(self) -> Self {
        match self {
            Value::True => Value::False,
            Value::False => Value::True,
            Value::DontCare => Value::DontCare,
        }
    }

    /// Checks whether the value is unconstrained.
    pub fn is_dont_care(self) -> bool {
        self == Value::DontCare
    }

    /// Returns the truth value, or `None` for `DontCare`.
    pub fn to_bool(self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            Value::DontCare => None,
        }
    }

    /// Single-character code: `t`, `f` or `-`.
    pub fn to_char(self) -> char {
        match self {
            Value::True => 't',
            Value::False => 'f',
            Value::DontCare => '-',
        }
    }

    /// Inverse of [`Value::to_char`].
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            't' => Some(Value::True),
            'f' => Some(Value::False),
            '-' => Some(Value::DontCare),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::from_polarity(value)
    }
}
