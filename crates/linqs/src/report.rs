//! Builds the demonstration transcript as renderer-independent sections.
//!
//! Each exercise contributes a run of [`Section`]s: a title plus either a
//! single comma-joined list (primitive collections) or one line per record.

use chrono::{DateTime, Utc};
use linqs_query::Dir;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::exercises::{cities, companies, employees, numbers, students, Exercise};
use crate::model::{BusinessProfile, Company, Employee, Student};
use crate::sample::SampleData;

/// Ordered `label: value` pairs describing one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<(&'static str, String)>);

impl Record {
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// `"Label: value"` pairs joined by `", "`.
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl From<&Company> for Record {
    fn from(c: &Company) -> Self {
        Record(vec![
            ("Name", c.name.clone()),
            ("Founded", c.founded.to_string()),
            ("Profile", c.profile.to_string()),
            ("Director", c.director.clone()),
            ("Employees", c.employee_count.to_string()),
            ("Address", c.address.clone()),
        ])
    }
}

impl From<&Employee> for Record {
    fn from(e: &Employee) -> Self {
        Record(vec![
            ("Name", e.full_name.clone()),
            ("Position", e.position.clone()),
            ("Phone", e.contact_number.clone()),
            ("Email", e.email.clone()),
            ("Salary", e.salary.to_string()),
        ])
    }
}

impl From<&Student> for Record {
    fn from(s: &Student) -> Self {
        Record(vec![
            ("Name", s.name.clone()),
            ("Surname", s.surname.clone()),
            ("Age", s.age.to_string()),
            ("Institution", s.institution.clone()),
        ])
    }
}

/// Result rows of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rows {
    /// Primitive values, printed on a single comma-joined line.
    List(Vec<String>),
    /// One line per record.
    Records(Vec<Record>),
}

impl Rows {
    fn list<T: ToString>(items: impl IntoIterator<Item = T>) -> Self {
        Rows::List(items.into_iter().map(|item| item.to_string()).collect())
    }

    fn records<'a, T>(items: impl IntoIterator<Item = &'a T>) -> Self
    where
        T: 'a,
        Record: From<&'a T>,
    {
        Rows::Records(items.into_iter().map(Record::from).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Rows::List(items) => items.len(),
            Rows::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text lines for this section body.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Rows::List(items) => vec![items.join(", ")],
            Rows::Records(records) => records.iter().map(Record::describe).collect(),
        }
    }
}

/// A titled block of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub exercise: Exercise,
    pub title: String,
    pub rows: Rows,
}

struct Builder {
    exercise: Exercise,
    sections: Vec<Section>,
}

impl Builder {
    fn push(&mut self, title: impl Into<String>, rows: Rows) {
        let title = title.into();
        debug!(target: "linqs::report", exercise = %self.exercise, %title, rows = rows.len(), "section");
        self.sections.push(Section {
            exercise: self.exercise,
            title,
            rows,
        });
    }
}

/// Runs the selected exercises against `data`, in the order given.
///
/// `now` anchors the date-relative company queries.
pub fn build(exercises: &[Exercise], data: &SampleData, now: DateTime<Utc>) -> Result<Vec<Section>> {
    let mut sections = Vec::new();
    for &exercise in exercises {
        let mut builder = Builder {
            exercise,
            sections: Vec::new(),
        };
        match exercise {
            Exercise::Cities => city_sections(&mut builder, &data.cities),
            Exercise::Numbers => number_sections(&mut builder, &data.numbers)?,
            Exercise::Companies => company_sections(&mut builder, &data.companies, now)?,
            Exercise::Employees => employee_sections(&mut builder, &data.companies)?,
            Exercise::Students => student_sections(&mut builder, &data.students)?,
        }
        sections.append(&mut builder.sections);
    }
    Ok(sections)
}

fn city_sections(b: &mut Builder, data: &[&str]) {
    b.push("All cities", Rows::list(cities::all(data)));
    b.push(
        "Cities with name length equal to 10",
        Rows::list(cities::by_length(data, 10)),
    );
    b.push("Cities starting with 'A'", Rows::list(cities::starting_with_a(data)));
    b.push("Cities ending with 'M'", Rows::list(cities::ending_with_m(data)));
    b.push(
        "Cities starting with 'N' and ending with 'K'",
        Rows::list(cities::starting_with_n_ending_with_k(data)),
    );
    b.push(
        "Cities starting with 'Ne' in descending order",
        Rows::list(cities::starting_with_ne_descending(data)),
    );
}

fn number_sections(b: &mut Builder, data: &[i64]) -> Result<()> {
    b.push("All numbers", Rows::list(numbers::all(data)));
    b.push("Even numbers", Rows::list(numbers::even(data)));
    b.push("Odd numbers", Rows::list(numbers::odd(data)));
    b.push(
        "Numbers greater than 10",
        Rows::list(numbers::greater_than(data, 10)),
    );
    b.push(
        "Numbers between 5 and 15",
        Rows::list(numbers::between(data, 5, 15)?),
    );
    b.push(
        "Multiples of 7 in ascending order",
        Rows::list(numbers::multiples_of_seven_ascending(data)),
    );
    b.push(
        "Multiples of 8 in descending order",
        Rows::list(numbers::multiples_of_eight_descending(data)),
    );
    Ok(())
}

fn company_sections(b: &mut Builder, data: &[Company], now: DateTime<Utc>) -> Result<()> {
    b.push("All companies", Rows::records(companies::all(data)));
    b.push(
        "Companies with 'food' in the name",
        Rows::records(companies::with_name_containing(data, "food")),
    );
    b.push(
        "Marketing companies",
        Rows::records(companies::by_profile(data, BusinessProfile::Marketing)),
    );
    b.push(
        "IT or Finance companies",
        Rows::records(companies::with_profile_in(
            data,
            &[BusinessProfile::It, BusinessProfile::Finance],
        )),
    );
    b.push(
        "Companies with more than 100 employees",
        Rows::records(companies::with_more_employees_than(data, 100)),
    );
    b.push(
        "Companies with 50 to 300 employees",
        Rows::records(companies::with_employee_count_between(data, 50, 300)?),
    );
    b.push(
        "IT companies with more than 100 employees",
        Rows::records(companies::by_profile_with_more_employees_than(
            data,
            BusinessProfile::It,
            100,
        )),
    );
    b.push(
        "Companies founded more than 20 years ago",
        Rows::records(companies::founded_more_than_years_ago(data, 20, now)?),
    );
    b.push(
        "Companies founded exactly 30 days ago",
        Rows::records(companies::founded_days_ago(data, 30, now)?),
    );
    b.push(
        "Companies whose director's last name is 'White'",
        Rows::records(companies::by_director_last_name(data, "White")),
    );
    b.push(
        "Companies by founding date",
        Rows::records(companies::sorted_by_founding(data, Dir::Asc)),
    );
    b.push(
        "Employees of Tech Innovators",
        Rows::records(companies::employees_of(data, "Tech Innovators")),
    );
    Ok(())
}

fn employee_sections(b: &mut Builder, data: &[Company]) -> Result<()> {
    b.push(
        "All employees",
        Rows::records(employees::all_employees(data)),
    );
    b.push(
        "Employees with 'Manager' in their position",
        Rows::records(employees::with_position_containing(data, "Manager")),
    );
    b.push(
        "Employees earning more than 6000",
        Rows::records(employees::with_salary_greater_than(data, 6000)),
    );
    b.push(
        "Employees with a brightads.com email",
        Rows::records(employees::with_email_domain(data, "brightads.com")?),
    );
    b.push(
        "Tech Innovators employees by salary, highest first",
        Rows::records(employees::of_company_by_salary(
            data,
            "Tech Innovators",
            Dir::Desc,
        )),
    );
    Ok(())
}

fn student_sections(b: &mut Builder, data: &[Student]) -> Result<()> {
    b.push("All students", Rows::records(students::all(data)));
    b.push(
        "Students with surname starting with 'Bro'",
        Rows::records(students::with_surname_starting_with(data, "Bro")),
    );
    b.push(
        "Students aged 20 to 22",
        Rows::records(students::aged_between(data, 20, 22)?),
    );
    b.push(
        "Students older than 22",
        Rows::records(students::older_than(data, 22)),
    );
    b.push(
        "Students at an institution containing 'oxford'",
        Rows::records(students::at_institution_containing(data, "oxford")),
    );
    b.push(
        "Students with a 4-letter name",
        Rows::records(students::with_name_length(data, 4)),
    );
    b.push(
        "Students by age",
        Rows::records(students::sorted_by_age(data, Dir::Asc)),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn student_record_describes_itself() {
        let student = Student {
            name: "John".to_string(),
            surname: "Brown".to_string(),
            age: 21,
            institution: "Oxford University".to_string(),
        };
        assert_eq!(
            Record::from(&student).describe(),
            "Name: John, Surname: Brown, Age: 21, Institution: Oxford University"
        );
    }

    #[test]
    fn empty_list_is_one_blank_line() {
        assert_eq!(Rows::List(Vec::new()).lines(), vec![String::new()]);
        assert!(Rows::Records(Vec::new()).lines().is_empty());
    }

    #[test]
    fn sections_follow_requested_order() {
        let data = SampleData::load();
        let sections = build(&[Exercise::Students, Exercise::Cities], &data, now()).unwrap();
        assert_eq!(sections.first().map(|s| s.exercise), Some(Exercise::Students));
        assert_eq!(sections.last().map(|s| s.exercise), Some(Exercise::Cities));
        assert_eq!(sections.len(), 7 + 6);
    }

    #[test]
    fn number_lists_are_comma_joined() {
        let data = SampleData::load();
        let sections = build(&[Exercise::Numbers], &data, now()).unwrap();
        let eights = sections
            .iter()
            .find(|s| s.title == "Multiples of 8 in descending order")
            .unwrap();
        assert_eq!(eights.rows.lines(), vec!["40, 24, 16, 8".to_string()]);
    }

    #[test]
    fn record_serializes_as_ordered_map() {
        let data = SampleData::load();
        let record = Record::from(&data.companies[0]);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with(r#"{"Name":"Tech Innovators","Founded":"1998-05-12""#));
    }
}
