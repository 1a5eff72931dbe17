//! The employee record.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single synthetic employee.
///
/// Field order matches the serialized JSON form. Dates serialize as
/// `YYYY-MM-DD` strings.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_store::Employee;
///
/// let employee = Employee {
///     id: 1,
///     name: "John Smith".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2018, 4, 2).unwrap(),
///     ..Employee::default()
/// };
///
/// assert_eq!(employee.years_of_service(2025), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, `1..=N` in generation order.
    pub id: u32,
    /// Full name ("First Last").
    pub name: String,
    /// Gender.
    pub gender: String,
    /// Phone number in `+1-DDD-DDD-DDDD` form.
    pub phone: String,
    /// Date of birth.
    pub birthday: NaiveDate,
    /// Email address derived from the name.
    pub email: String,
    /// Job title, always one of the titles of [`Employee::department`].
    pub job_title: String,
    /// Department name.
    pub department: String,
    /// Date of hire.
    pub hire_date: NaiveDate,
    /// Annual salary.
    pub salary: f64,
    /// Employment status.
    pub work_status: String,
    /// Opaque bank reference.
    pub bank_info: String,
    /// Identifier of the supervising employee.
    pub supervisor_id: u32,
    /// Special leave days granted per year.
    pub total_special_leave: u32,
    /// Special leave days already taken.
    pub used_special_leave: u32,
}

impl Employee {
    /// Returns whole calendar years between the hire year and `current_year`.
    ///
    /// Only the year components are compared, so an employee hired in
    /// December counts a full year on the following 1 January.
    pub fn years_of_service(&self, current_year: i32) -> i32 {
        current_year - self.hire_date.year()
    }

    /// Returns the special leave days still available.
    pub fn remaining_special_leave(&self) -> u32 {
        self.total_special_leave.saturating_sub(self.used_special_leave)
    }
}
