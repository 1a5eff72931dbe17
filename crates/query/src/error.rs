//! Error types for condition parsing and queries.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::condition::Operator;

/// A comparison string could not be parsed into a [`Condition`](crate::Condition).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionParseError {
    /// The input does not start with a recognized operator.
    #[error("condition {input:?} must start with one of >=, <=, >, <, =")]
    MissingOperator { input: String },

    /// Nothing but whitespace follows the operator.
    #[error("condition has no operand after '{operator}'")]
    MissingOperand { operator: Operator },

    /// The operand is not a finite decimal number.
    #[error("operand {operand:?} is not a finite number")]
    InvalidOperand { operand: String },
}

/// Errors surfaced by [`EmployeeQuery`](crate::EmployeeQuery).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The identifier argument is not an integer.
    #[error("invalid employee id: {value:?}")]
    InvalidId { value: String },

    /// No employee has the identifier.
    #[error("employee not found: {id}")]
    NotFound { id: i64 },

    /// A comparison filter is malformed and the query rejects malformed filters.
    #[error("invalid filter '{parameter}': {source}")]
    InvalidFilter {
        parameter: &'static str,
        #[source]
        source: ConditionParseError,
    },
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
