//! The filter pipeline.
//!
//! A [`FilterSet`] is the conjunction of [`FieldPredicate`]s built from one
//! request's parameters. [`filter`] applies it in a single pass and keeps the
//! source order of the records it accepts.

use std::collections::HashMap;

use roster_store::Employee;

use crate::condition::{Condition, parse};
use crate::error::ConditionParseError;

/// Recognized query parameter names.
pub mod params {
    /// Case-insensitive exact match on department.
    pub const DEPARTMENT: &str = "department";
    /// Case-insensitive exact match on job title.
    pub const JOB_TITLE: &str = "job_title";
    /// Case-insensitive substring match on name.
    pub const NAME: &str = "name";
    /// Comparison against years of service.
    pub const YEARS_OF_SERVICE: &str = "years_of_service";
    /// Comparison against salary.
    pub const SALARY: &str = "salary";
}

/// A comparison filter as received, parsed or not.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericFilter {
    /// The value parsed into a condition.
    Valid(Condition),
    /// The value did not parse. Matches nothing.
    Malformed {
        /// The raw parameter value.
        raw: String,
        /// Why it did not parse.
        error: ConditionParseError,
    },
}

impl NumericFilter {
    /// Parses `raw`, keeping the failure instead of returning it.
    pub fn parse(raw: &str) -> Self {
        match parse(raw) {
            Ok(condition) => NumericFilter::Valid(condition),
            Err(error) => NumericFilter::Malformed {
                raw: raw.to_string(),
                error,
            },
        }
    }

    /// Returns the parse error, if the filter is malformed.
    pub fn error(&self) -> Option<&ConditionParseError> {
        match self {
            NumericFilter::Valid(_) => None,
            NumericFilter::Malformed { error, .. } => Some(error),
        }
    }

    fn matches(&self, value: impl Into<f64>) -> bool {
        match self {
            NumericFilter::Valid(condition) => condition.matches(value),
            NumericFilter::Malformed { .. } => false,
        }
    }
}

/// A single constraint on one employee field.
///
/// String needles are stored lowercased.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPredicate {
    /// Department equals the needle, ignoring case.
    Department(String),
    /// Job title equals the needle, ignoring case.
    JobTitle(String),
    /// Name contains the needle, ignoring case.
    NameContains(String),
    /// Years of service (current year minus hire year) satisfies the filter.
    YearsOfService(NumericFilter),
    /// Salary satisfies the filter.
    Salary(NumericFilter),
}

impl FieldPredicate {
    /// Builds a department predicate.
    pub fn department(value: &str) -> Self {
        FieldPredicate::Department(value.to_lowercase())
    }

    /// Builds a job title predicate.
    pub fn job_title(value: &str) -> Self {
        FieldPredicate::JobTitle(value.to_lowercase())
    }

    /// Builds a name substring predicate.
    pub fn name_contains(value: &str) -> Self {
        FieldPredicate::NameContains(value.to_lowercase())
    }

    /// Returns the query parameter this predicate came from.
    pub fn parameter(&self) -> &'static str {
        match self {
            FieldPredicate::Department(_) => params::DEPARTMENT,
            FieldPredicate::JobTitle(_) => params::JOB_TITLE,
            FieldPredicate::NameContains(_) => params::NAME,
            FieldPredicate::YearsOfService(_) => params::YEARS_OF_SERVICE,
            FieldPredicate::Salary(_) => params::SALARY,
        }
    }

    /// Returns the parse error of a malformed comparison predicate.
    pub fn parse_error(&self) -> Option<&ConditionParseError> {
        match self {
            FieldPredicate::YearsOfService(filter) | FieldPredicate::Salary(filter) => {
                filter.error()
            }
            _ => None,
        }
    }

    /// Tests one employee. `current_year` feeds the years-of-service field.
    pub fn matches(&self, employee: &Employee, current_year: i32) -> bool {
        match self {
            FieldPredicate::Department(needle) => employee.department.to_lowercase() == *needle,
            FieldPredicate::JobTitle(needle) => employee.job_title.to_lowercase() == *needle,
            FieldPredicate::NameContains(needle) => {
                employee.name.to_lowercase().contains(needle.as_str())
            }
            FieldPredicate::YearsOfService(filter) => {
                filter.matches(employee.years_of_service(current_year))
            }
            FieldPredicate::Salary(filter) => filter.matches(employee.salary),
        }
    }
}

/// The predicates of one query, combined with AND.
///
/// An empty set accepts every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    predicates: Vec<FieldPredicate>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter set from raw query parameters.
    ///
    /// Parameters that are missing or empty are skipped. Unrecognized
    /// parameters are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use roster_query::FilterSet;
    ///
    /// let params = HashMap::from([
    ///     ("department".to_string(), "Engineering".to_string()),
    ///     ("salary".to_string(), ">=60000".to_string()),
    ///     ("name".to_string(), String::new()),
    ///     ("page".to_string(), "2".to_string()),
    /// ]);
    ///
    /// let filters = FilterSet::from_params(&params);
    /// assert_eq!(filters.len(), 2);
    /// ```
    pub fn from_params(raw: &HashMap<String, String>) -> Self {
        let get = |name: &str| {
            raw.get(name)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        };

        let mut filters = Self::new();
        if let Some(value) = get(params::DEPARTMENT) {
            filters.push(FieldPredicate::department(value));
        }
        if let Some(value) = get(params::JOB_TITLE) {
            filters.push(FieldPredicate::job_title(value));
        }
        if let Some(value) = get(params::NAME) {
            filters.push(FieldPredicate::name_contains(value));
        }
        if let Some(value) = get(params::YEARS_OF_SERVICE) {
            filters.push(FieldPredicate::YearsOfService(NumericFilter::parse(value)));
        }
        if let Some(value) = get(params::SALARY) {
            filters.push(FieldPredicate::Salary(NumericFilter::parse(value)));
        }
        filters
    }

    /// Builds a filter set with a single department predicate.
    pub fn department(value: &str) -> Self {
        Self::new().with(FieldPredicate::department(value))
    }

    /// Adds a predicate.
    pub fn with(mut self, predicate: FieldPredicate) -> Self {
        self.push(predicate);
        self
    }

    /// Adds a predicate in place.
    pub fn push(&mut self, predicate: FieldPredicate) {
        self.predicates.push(predicate);
    }

    /// Returns the predicates in application order.
    pub fn predicates(&self) -> &[FieldPredicate] {
        &self.predicates
    }

    /// Returns the number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true if the set has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Yields the parameter name and error of every malformed comparison.
    pub fn malformed(&self) -> impl Iterator<Item = (&'static str, &ConditionParseError)> {
        self.predicates
            .iter()
            .filter_map(|p| p.parse_error().map(|error| (p.parameter(), error)))
    }

    /// Tests one employee against every predicate.
    pub fn matches(&self, employee: &Employee, current_year: i32) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(employee, current_year))
    }
}

/// Returns the records accepted by `filters`, in their original order.
pub fn filter<'a>(
    records: &'a [Employee],
    filters: &FilterSet,
    current_year: i32,
) -> Vec<&'a Employee> {
    records
        .iter()
        .filter(|employee| filters.matches(employee, current_year))
        .collect()
}
