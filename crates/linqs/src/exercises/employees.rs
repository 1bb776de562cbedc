//! Queries over every employee of every company.

use linqs_query::{Dir, Query, Queryable};

use crate::error::Result;
use crate::exercises::companies;
use crate::model::{Company, Employee};

/// Flattens employees in company order.
pub fn all_employees(companies: &[Company]) -> Vec<&Employee> {
    companies.iter().flat_map(|c| &c.employees).collect()
}

fn run<'a>(companies: &'a [Company], query: Query) -> Vec<&'a Employee> {
    let employees = all_employees(companies);
    query
        .filter(&employees, <&Employee>::accessor)
        .into_iter()
        .copied()
        .collect()
}

/// Case-sensitive substring match on the position title.
pub fn with_position_containing<'a>(companies: &'a [Company], needle: &str) -> Vec<&'a Employee> {
    run(companies, Query::new().and_contains(Employee::POSITION, needle))
}

pub fn with_salary_greater_than(companies: &[Company], amount: u32) -> Vec<&Employee> {
    run(companies, Query::new().and_gt(Employee::SALARY, amount))
}

/// Employees whose email ends in `@domain`, ignoring case.
pub fn with_email_domain<'a>(companies: &'a [Company], domain: &str) -> Result<Vec<&'a Employee>> {
    let pattern = format!("@{}$", regex::escape(domain));
    let query = Query::new().and_iregex(Employee::EMAIL, &pattern)?;
    Ok(run(companies, query))
}

/// Employees of one company ordered by salary.
pub fn of_company_by_salary<'a>(
    companies: &'a [Company],
    company_name: &str,
    dir: Dir,
) -> Vec<&'a Employee> {
    Query::new()
        .order_by(Employee::SALARY, dir)
        .filter(companies::employees_of(companies, company_name), Employee::accessor)
}
