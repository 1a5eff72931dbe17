//! Synthetic employee generation.
//!
//! Produces plausible but fake employee records. Every department has its own
//! set of job titles and a record's title is always drawn from its
//! department. Pass a seed in [`GeneratorConfig`] for reproducible output.

use std::ops::Range;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::types::Employee;

/// Departments and the job titles available in each.
pub const DEPARTMENTS: &[(&str, &[&str])] = &[
    (
        "Engineering",
        &[
            "Software Engineer",
            "Senior Engineer",
            "Tech Lead",
            "DevOps Engineer",
        ],
    ),
    (
        "Sales",
        &["Sales Representative", "Sales Manager", "Account Executive"],
    ),
    (
        "Marketing",
        &["Marketing Specialist", "Marketing Manager", "Content Writer"],
    ),
    ("HR", &["HR Specialist", "HR Manager", "Recruiter"]),
    (
        "Finance",
        &["Accountant", "Financial Analyst", "Finance Manager"],
    ),
    (
        "Operations",
        &["Operations Manager", "Project Manager", "Business Analyst"],
    ),
];

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Emily", "David", "Sarah", "James", "Emma", "William", "Olivia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Brown", "Davis", "Wilson", "Anderson", "Taylor", "Thomas", "Moore",
    "Martin",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

const GENDERS: &[&str] = &["Male", "Female"];

/// Settings for [`generate_employees`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of records to generate. Ids run `1..=count`.
    pub count: u32,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Birth years, end exclusive.
    pub birth_years: Range<i32>,

    /// Hire years, end exclusive.
    pub hire_years: Range<i32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: None,
            birth_years: 1970..2000,
            hire_years: 2015..2023,
        }
    }
}

/// Uniform sampler over the days of a year range.
struct DateSpan {
    start: NaiveDate,
    days: u64,
}

impl DateSpan {
    fn new(field: &'static str, years: &Range<i32>) -> StoreResult<Self> {
        let invalid = || StoreError::InvalidYearRange {
            field,
            start: years.start,
            end: years.end,
        };

        if years.start >= years.end {
            return Err(invalid());
        }

        let start = NaiveDate::from_ymd_opt(years.start, 1, 1).ok_or_else(invalid)?;
        let end = NaiveDate::from_ymd_opt(years.end, 1, 1).ok_or_else(invalid)?;
        let days = u64::try_from((end - start).num_days()).map_err(|_| invalid())?;

        Ok(Self { start, days })
    }

    fn sample(&self, rng: &mut StdRng) -> NaiveDate {
        self.start + Days::new(rng.random_range(0..self.days))
    }
}

/// Generates `config.count` synthetic employees.
///
/// # Errors
///
/// Returns [`StoreError::InvalidYearRange`] if either year range is empty or
/// outside the representable date range.
pub fn generate_employees(config: &GeneratorConfig) -> StoreResult<Vec<Employee>> {
    let birthdays = DateSpan::new("birth", &config.birth_years)?;
    let hire_dates = DateSpan::new("hire", &config.hire_years)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let employees: Vec<_> = (1..=config.count)
        .map(|id| generate_employee(&mut rng, id, config.count, &birthdays, &hire_dates))
        .collect();

    info!(
        count = employees.len(),
        seed = ?config.seed,
        "Generated synthetic employees"
    );

    Ok(employees)
}

fn generate_employee(
    rng: &mut StdRng,
    id: u32,
    count: u32,
    birthdays: &DateSpan,
    hire_dates: &DateSpan,
) -> Employee {
    let (department, titles) = DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())];
    let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
    let total_special_leave = rng.random_range(10..=25);

    Employee {
        id,
        email: email_for(rng, &name),
        name,
        gender: pick(rng, GENDERS).to_string(),
        phone: format!(
            "+1-{}-{}-{}",
            digits(rng, 3),
            digits(rng, 3),
            digits(rng, 4)
        ),
        birthday: birthdays.sample(rng),
        job_title: pick(rng, titles).to_string(),
        department: department.to_string(),
        hire_date: hire_dates.sample(rng),
        salary: f64::from(rng.random_range(30_000u32..100_000)),
        work_status: "Active".to_string(),
        bank_info: format!(
            "Bank-{}-{}",
            rng.random_range(1..=5),
            rng.random_range(0..100_000)
        ),
        supervisor_id: rng.random_range(1..=count),
        total_special_leave,
        used_special_leave: rng.random_range(0..=total_special_leave),
    }
}

fn pick(rng: &mut StdRng, options: &[&'static str]) -> &'static str {
    options[rng.random_range(0..options.len())]
}

fn digits(rng: &mut StdRng, n: usize) -> String {
    (0..n)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn email_for(rng: &mut StdRng, name: &str) -> String {
    format!(
        "{}@{}",
        name.replace(' ', ".").to_lowercase(),
        pick(rng, EMAIL_DOMAINS)
    )
}
