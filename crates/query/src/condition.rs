//! Comparison conditions.
//!
//! A condition is an operator prefix followed by a number, e.g. `>=50000` or
//! `< 3`. Whitespace between the operator and the number is ignored.

use std::fmt;
use std::str::FromStr;

use crate::error::ConditionParseError;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Greater than (`>`).
    Gt,
    /// Less than (`<`).
    Lt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Less than or equal (`<=`).
    Le,
    /// Exactly equal (`=`).
    Eq,
}

impl Operator {
    /// Operators in the order prefixes are tried.
    ///
    /// Two-character operators come first so `>=` is never read as `>`
    /// followed by `=`.
    pub const PARSE_ORDER: [Operator; 5] = [
        Operator::Ge,
        Operator::Le,
        Operator::Gt,
        Operator::Lt,
        Operator::Eq,
    ];

    /// Returns the textual form of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Eq => "=",
        }
    }

    /// Splits a leading operator off `input`.
    ///
    /// Returns the operator and the untouched remainder.
    pub fn extract(input: &str) -> Option<(Self, &str)> {
        Self::PARSE_ORDER.iter().find_map(|op| {
            input
                .strip_prefix(op.symbol())
                .map(|remainder| (*op, remainder))
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed comparison: operator plus finite operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    operator: Operator,
    operand: f64,
}

impl Condition {
    /// Creates a condition, returning `None` if `operand` is not finite.
    pub fn new(operator: Operator, operand: f64) -> Option<Self> {
        operand.is_finite().then_some(Self { operator, operand })
    }

    /// Returns the operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the operand.
    pub fn operand(&self) -> f64 {
        self.operand
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.operand)
    }
}

impl FromStr for Condition {
    type Err = ConditionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a condition string.
///
/// The operator must be the very first character(s) of `condition`. The rest
/// is trimmed and parsed as a decimal number with an optional sign and
/// fraction. Infinite and NaN spellings are rejected.
///
/// # Errors
///
/// - [`ConditionParseError::MissingOperator`] if no operator prefix matches
/// - [`ConditionParseError::MissingOperand`] if nothing follows the operator
/// - [`ConditionParseError::InvalidOperand`] if the remainder is not a finite number
///
/// # Example
///
/// ```
/// use roster_query::{Operator, parse};
///
/// let condition = parse(">= 50000").unwrap();
/// assert_eq!(condition.operator(), Operator::Ge);
/// assert_eq!(condition.operand(), 50000.0);
///
/// assert!(parse("abc").is_err());
/// assert!(parse(">").is_err());
/// ```
pub fn parse(condition: &str) -> Result<Condition, ConditionParseError> {
    let (operator, remainder) =
        Operator::extract(condition).ok_or_else(|| ConditionParseError::MissingOperator {
            input: condition.to_string(),
        })?;

    let operand = remainder.trim();
    if operand.is_empty() {
        return Err(ConditionParseError::MissingOperand { operator });
    }

    let invalid = || ConditionParseError::InvalidOperand {
        operand: operand.to_string(),
    };

    let value: f64 = operand.parse().map_err(|_| invalid())?;
    Condition::new(operator, value).ok_or_else(invalid)
}
