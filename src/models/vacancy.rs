use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Salary text emitted when a platform discloses no pay range.
pub const NEGOTIABLE: &str = "По договоренности";

const SALARY_FROM: &str = "от";
const SALARY_TO: &str = "до";

/// Common cross-platform shape every source normalizes into.
/// Field names are the keys of the output JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedVacancy {
    pub name: String,
    pub url: String,
    pub salary: String,
    pub experience: String,
    pub requirement_and_responsibility: String,
}

/// Format a salary range as "от {from} до {to}". A missing bound reads 0.
pub fn format_salary(from: Option<u64>, to: Option<u64>) -> String {
    format!(
        "{SALARY_FROM} {} {SALARY_TO} {}",
        from.unwrap_or(0),
        to.unwrap_or(0)
    )
}

/// Inverse of [`format_salary`]. The sentinel parses as (0, 0).
pub fn parse_salary_bounds(text: &str) -> Result<(u64, u64)> {
    if text == NEGOTIABLE {
        return Ok((0, 0));
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(AppError::MalformedSalary(text.to_string()));
    }

    let bound = |token: &str| {
        token
            .parse::<u64>()
            .map_err(|_| AppError::MalformedSalary(text.to_string()))
    };
    Ok((bound(tokens[1])?, bound(tokens[3])?))
}

/// A normalized vacancy together with the salary used to rank it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyRecord {
    vacancy: NormalizedVacancy,
    rank_salary: u64,
}

impl TryFrom<NormalizedVacancy> for VacancyRecord {
    type Error = AppError;

    fn try_from(vacancy: NormalizedVacancy) -> Result<Self> {
        let (min, max) = parse_salary_bounds(&vacancy.salary)?;
        Ok(Self {
            vacancy,
            rank_salary: min.max(max),
        })
    }
}

impl VacancyRecord {
    pub fn rank_salary(&self) -> u64 {
        self.rank_salary
    }

    pub fn vacancy(&self) -> &NormalizedVacancy {
        &self.vacancy
    }

    pub fn cmp_salary(&self, other: &VacancyRecord) -> Ordering {
        self.rank_salary.cmp(&other.rank_salary)
    }

    /// Salary ordering against an arbitrary value. Anything that is not a
    /// `VacancyRecord` is rejected instead of coerced.
    pub fn compare_by_salary(&self, other: &dyn Any) -> Result<Ordering> {
        Ok(self.cmp_salary(Self::downcast(other)?))
    }

    pub fn combined_salary(&self, other: &dyn Any) -> Result<u64> {
        let other = Self::downcast(other)?;
        self.rank_salary
            .checked_add(other.rank_salary)
            .ok_or_else(|| {
                AppError::SalaryOverflow(format!("{} + {}", self.rank_salary, other.rank_salary))
            })
    }

    pub fn salary_difference(&self, other: &dyn Any) -> Result<i64> {
        let other = Self::downcast(other)?;
        let diff = i128::from(self.rank_salary) - i128::from(other.rank_salary);
        i64::try_from(diff).map_err(|_| {
            AppError::SalaryOverflow(format!("{} - {}", self.rank_salary, other.rank_salary))
        })
    }

    fn downcast(other: &dyn Any) -> Result<&VacancyRecord> {
        other.downcast_ref::<VacancyRecord>().ok_or_else(|| {
            AppError::TypeMismatch("salary can only be compared with another vacancy".to_string())
        })
    }
}

impl fmt::Display for VacancyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.vacancy;
        write!(
            f,
            "{} ({}, {}, {}, {})",
            v.name, v.salary, v.url, v.experience, v.requirement_and_responsibility
        )
    }
}
