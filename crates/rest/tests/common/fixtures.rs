//! Test fixtures for REST API testing.
//!
//! Provides predefined employees for use in tests. Hire dates are relative to
//! the current year so `years_of_service` filters stay stable over time.

use chrono::{Datelike, Local, NaiveDate};
use roster_store::Employee;

/// Builder for a single test employee.
#[derive(Debug, Clone)]
pub struct EmployeeFixture {
    employee: Employee,
}

impl EmployeeFixture {
    /// Creates an active employee with the given ID and name.
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            employee: Employee {
                id,
                name: name.to_string(),
                gender: "Female".to_string(),
                email: format!("employee{}@example.com", id),
                work_status: "Active".to_string(),
                total_special_leave: 10,
                ..Default::default()
            },
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: &str) -> Self {
        self.employee.department = department.to_string();
        self
    }

    /// Sets the job title.
    pub fn with_job_title(mut self, job_title: &str) -> Self {
        self.employee.job_title = job_title.to_string();
        self
    }

    /// Sets the salary.
    pub fn with_salary(mut self, salary: f64) -> Self {
        self.employee.salary = salary;
        self
    }

    /// Sets the hire date to January 15th, `years` years before this year.
    pub fn hired_years_ago(mut self, years: i32) -> Self {
        self.employee.hire_date = NaiveDate::from_ymd_opt(current_year() - years, 1, 15).unwrap();
        self
    }

    /// Returns the built employee.
    pub fn build(self) -> Employee {
        self.employee
    }
}

/// Returns today's calendar year.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Collection of test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// Creates the standard six-employee roster.
    ///
    /// | id | name | department | job title | salary | years |
    /// |----|------|------------|-----------|--------|-------|
    /// | 1 | John Smith | Engineering | Tech Lead | 95000 | 10 |
    /// | 2 | Jane Davis | Engineering | Software Engineer | 59999 | 2 |
    /// | 3 | Emily Johnson | Sales | Sales Manager | 72000 | 6 |
    /// | 4 | Michael Jones | Engineering | DevOps Engineer | 60000 | 5 |
    /// | 5 | Sarah Moore | Human Resources | Recruiter | 41000 | 1 |
    /// | 6 | David Brown | Sales | Account Executive | 52000.5 | 3 |
    pub fn standard() -> Vec<Employee> {
        vec![
            EmployeeFixture::new(1, "John Smith")
                .with_department("Engineering")
                .with_job_title("Tech Lead")
                .with_salary(95000.0)
                .hired_years_ago(10)
                .build(),
            EmployeeFixture::new(2, "Jane Davis")
                .with_department("Engineering")
                .with_job_title("Software Engineer")
                .with_salary(59999.0)
                .hired_years_ago(2)
                .build(),
            EmployeeFixture::new(3, "Emily Johnson")
                .with_department("Sales")
                .with_job_title("Sales Manager")
                .with_salary(72000.0)
                .hired_years_ago(6)
                .build(),
            EmployeeFixture::new(4, "Michael Jones")
                .with_department("Engineering")
                .with_job_title("DevOps Engineer")
                .with_salary(60000.0)
                .hired_years_ago(5)
                .build(),
            EmployeeFixture::new(5, "Sarah Moore")
                .with_department("Human Resources")
                .with_job_title("Recruiter")
                .with_salary(41000.0)
                .hired_years_ago(1)
                .build(),
            EmployeeFixture::new(6, "David Brown")
                .with_department("Sales")
                .with_job_title("Account Executive")
                .with_salary(52000.5)
                .hired_years_ago(3)
                .build(),
        ]
    }
}
