//! Queries over the company registry.

use chrono::{DateTime, Months, TimeDelta, Utc};
use linqs_query::{ClauseValue, Dir, Query, QueryEnum, QueryTimestamp, Queryable};
use tracing::debug;

use crate::error::{ExerciseError, Result};
use crate::model::{BusinessProfile, Company, Employee};

fn run<'a>(companies: &'a [Company], query: Query) -> Vec<&'a Company> {
    query.filter(companies, Company::accessor)
}

pub fn all(companies: &[Company]) -> Vec<&Company> {
    run(companies, Query::new())
}

/// Case-insensitive substring match on the company name.
pub fn with_name_containing<'a>(companies: &'a [Company], needle: &str) -> Vec<&'a Company> {
    run(companies, Query::new().and_icontains(Company::NAME, needle))
}

pub fn by_profile(companies: &[Company], profile: BusinessProfile) -> Vec<&Company> {
    run(
        companies,
        Query::new().and_eq(Company::PROFILE, ClauseValue::Enum(profile.discriminant())),
    )
}

pub fn with_profile_in<'a>(
    companies: &'a [Company],
    profiles: &[BusinessProfile],
) -> Vec<&'a Company> {
    run(
        companies,
        Query::new().and_in(Company::PROFILE, profiles.iter().map(BusinessProfile::discriminant)),
    )
}

pub fn with_more_employees_than(companies: &[Company], count: u32) -> Vec<&Company> {
    run(companies, Query::new().and_gt(Company::EMPLOYEE_COUNT, count))
}

/// Employee count in `low..=high`.
pub fn with_employee_count_between(
    companies: &[Company],
    low: u32,
    high: u32,
) -> Result<Vec<&Company>> {
    let query = Query::new()
        .and_between(Company::EMPLOYEE_COUNT, low..=high)
        .try_build()?;
    Ok(run(companies, query))
}

pub fn by_profile_with_more_employees_than(
    companies: &[Company],
    profile: BusinessProfile,
    count: u32,
) -> Vec<&Company> {
    run(
        companies,
        Query::new()
            .and_eq(Company::PROFILE, ClauseValue::Enum(profile.discriminant()))
            .and_gt(Company::EMPLOYEE_COUNT, count),
    )
}

/// Companies founded strictly before `now` minus `years` calendar years.
pub fn founded_more_than_years_ago(
    companies: &[Company],
    years: u32,
    now: DateTime<Utc>,
) -> Result<Vec<&Company>> {
    let out_of_range = || ExerciseError::DateOutOfRange {
        amount: i64::from(years),
        unit: "years",
        now,
    };
    let months = years.checked_mul(12).ok_or_else(out_of_range)?;
    let threshold = now
        .checked_sub_months(Months::new(months))
        .ok_or_else(out_of_range)?;
    debug!(target: "linqs::exercises", years, %threshold, "founding threshold");

    Ok(run(
        companies,
        Query::new().and_before(Company::FOUNDED, threshold.to_timestamp()),
    ))
}

/// Companies whose founding instant is exactly `now` minus `days` days.
///
/// Founding dates sit at midnight UTC, so only a midnight `now` can match.
pub fn founded_days_ago(
    companies: &[Company],
    days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<&Company>> {
    let target = TimeDelta::try_days(days)
        .and_then(|delta| now.checked_sub_signed(delta))
        .ok_or(ExerciseError::DateOutOfRange {
            amount: days,
            unit: "days",
            now,
        })?;
    debug!(target: "linqs::exercises", days, %target, "founding instant");

    Ok(run(
        companies,
        Query::new().and_eq(Company::FOUNDED, target.to_timestamp()),
    ))
}

/// Case-insensitive match on the last word of the director's name.
pub fn by_director_last_name<'a>(companies: &'a [Company], last_name: &str) -> Vec<&'a Company> {
    run(
        companies,
        Query::new().and_ieq(Company::DIRECTOR_LAST_NAME, last_name),
    )
}

pub fn sorted_by_founding(companies: &[Company], dir: Dir) -> Vec<&Company> {
    run(companies, Query::new().order_by(Company::FOUNDED, dir))
}

/// Employees of the company with exactly this name; empty when there is none.
pub fn employees_of<'a>(companies: &'a [Company], name: &str) -> &'a [Employee] {
    match Query::new()
        .and_eq(Company::NAME, name)
        .find(companies, Company::accessor)
    {
        Some(company) => company.employees.as_slice(),
        None => {
            debug!(target: "linqs::exercises", company = name, "no company with this name");
            &[]
        }
    }
}
