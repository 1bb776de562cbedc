//! Queries over the student roster.

use linqs_query::{Dir, Query, Queryable};

use crate::error::Result;
use crate::model::Student;

fn run<'a>(students: &'a [Student], query: Query) -> Vec<&'a Student> {
    query.filter(students, Student::accessor)
}

pub fn all(students: &[Student]) -> Vec<&Student> {
    run(students, Query::new())
}

/// Case-sensitive surname prefix.
pub fn with_surname_starting_with<'a>(students: &'a [Student], prefix: &str) -> Vec<&'a Student> {
    run(students, Query::new().and_startswith(Student::SURNAME, prefix))
}

/// Ages in `low..=high`.
pub fn aged_between(students: &[Student], low: u8, high: u8) -> Result<Vec<&Student>> {
    let query = Query::new()
        .and_between(Student::AGE, low..=high)
        .try_build()?;
    Ok(run(students, query))
}

pub fn older_than(students: &[Student], age: u8) -> Vec<&Student> {
    run(students, Query::new().and_gt(Student::AGE, age))
}

pub fn at_institution_containing<'a>(students: &'a [Student], needle: &str) -> Vec<&'a Student> {
    run(students, Query::new().and_icontains(Student::INSTITUTION, needle))
}

/// Students whose first name has exactly `len` characters.
pub fn with_name_length(students: &[Student], len: usize) -> Vec<&Student> {
    run(students, Query::new().and_len_eq(Student::NAME, len))
}

/// Students of equal age keep their roster order.
pub fn sorted_by_age(students: &[Student], dir: Dir) -> Vec<&Student> {
    run(students, Query::new().order_by(Student::AGE, dir))
}
