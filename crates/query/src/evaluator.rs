//! Numeric predicate evaluation.

use crate::condition::{Condition, Operator};

/// Tests `value` against `condition`.
///
/// Integral and fractional values are both widened to `f64` before the
/// comparison. `=` is exact equality on that representation, with no epsilon,
/// so `=0.3` will not match a value computed as `0.1 + 0.2`.
///
/// # Example
///
/// ```
/// use roster_query::{evaluate, parse};
///
/// let condition = parse(">=5").unwrap();
/// assert!(evaluate(5u32, &condition));
/// assert!(evaluate(5.5, &condition));
/// assert!(!evaluate(4i32, &condition));
/// ```
pub fn evaluate(value: impl Into<f64>, condition: &Condition) -> bool {
    let value = value.into();
    let operand = condition.operand();

    match condition.operator() {
        Operator::Gt => value > operand,
        Operator::Lt => value < operand,
        Operator::Ge => value >= operand,
        Operator::Le => value <= operand,
        Operator::Eq => value == operand,
    }
}

impl Condition {
    /// Tests `value` against this condition. See [`evaluate`].
    pub fn matches(&self, value: impl Into<f64>) -> bool {
        evaluate(value, self)
    }
}
