//! Fixed sample data the exercises run against.

use chrono::NaiveDate;

use crate::model::{BusinessProfile, Company, Employee, Student};

/// All sample collections, built once at startup.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub cities: Vec<&'static str>,
    pub numbers: Vec<i64>,
    pub companies: Vec<Company>,
    pub students: Vec<Student>,
}

impl SampleData {
    pub fn load() -> Self {
        SampleData {
            cities: cities(),
            numbers: numbers(),
            companies: companies(),
            students: students(),
        }
    }
}

pub fn cities() -> Vec<&'static str> {
    vec![
        "New York",
        "Los Angeles",
        "Chicago",
        "Houston",
        "Phoenix",
        "Philadelphia",
        "San Antonio",
        "San Diego",
    ]
}

pub fn numbers() -> Vec<i64> {
    (1..=10).chain([14, 16, 21, 24, 28, 35, 40]).collect()
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

fn employee(full_name: &str, position: &str, phone: &str, email: &str, salary: u32) -> Employee {
    Employee {
        full_name: full_name.to_string(),
        position: position.to_string(),
        contact_number: phone.to_string(),
        email: email.to_string(),
        salary,
    }
}

pub fn companies() -> Vec<Company> {
    vec![
        Company {
            name: "Tech Innovators".to_string(),
            founded: const { date(1998, 5, 12) },
            profile: BusinessProfile::It,
            director: "John Michael Smith".to_string(),
            employee_count: 250,
            address: "123 Silicon Ave, San Jose, CA".to_string(),
            employees: vec![
                employee(
                    "Alice Johnson",
                    "Software Engineer",
                    "+1-408-555-0101",
                    "alice.johnson@techinnovators.com",
                    7200,
                ),
                employee(
                    "Brian Lee",
                    "Project Manager",
                    "+1-408-555-0102",
                    "brian.lee@techinnovators.com",
                    8100,
                ),
                employee(
                    "Carla Gomez",
                    "QA Analyst",
                    "+1-408-555-0103",
                    "carla.gomez@techinnovators.com",
                    5400,
                ),
            ],
        },
        Company {
            name: "Green Foods Market".to_string(),
            founded: const { date(2015, 3, 1) },
            profile: BusinessProfile::Food,
            director: "Maria Garcia".to_string(),
            employee_count: 45,
            address: "77 Market St, Portland, OR".to_string(),
            employees: vec![
                employee(
                    "Daniel Kim",
                    "Store Manager",
                    "+1-503-555-0110",
                    "daniel.kim@greenfoods.com",
                    4800,
                ),
                employee(
                    "Eva Novak",
                    "Cashier",
                    "+1-503-555-0111",
                    "eva.novak@greenfoods.com",
                    2900,
                ),
            ],
        },
        Company {
            name: "BrightAds Marketing".to_string(),
            founded: const { date(2009, 9, 20) },
            profile: BusinessProfile::Marketing,
            director: "Peter White".to_string(),
            employee_count: 120,
            address: "5 Madison Ave, New York, NY".to_string(),
            employees: vec![
                employee(
                    "Frank Miller",
                    "Marketing Manager",
                    "+1-212-555-0130",
                    "frank.miller@brightads.com",
                    6900,
                ),
                employee(
                    "Grace Chen",
                    "Copywriter",
                    "+1-212-555-0131",
                    "grace.chen@BrightAds.com",
                    4300,
                ),
            ],
        },
        Company {
            name: "Solid Build Construction".to_string(),
            founded: const { date(1985, 1, 10) },
            profile: BusinessProfile::Construction,
            director: "Robert Brown".to_string(),
            employee_count: 600,
            address: "900 Industrial Rd, Houston, TX".to_string(),
            employees: vec![employee(
                "Henry Walker",
                "Site Engineer",
                "+1-713-555-0140",
                "henry.walker@solidbuild.com",
                6100,
            )],
        },
        Company {
            name: "CloudNet Systems".to_string(),
            founded: const { date(2020, 7, 15) },
            profile: BusinessProfile::It,
            director: "Linda White".to_string(),
            employee_count: 80,
            address: "42 Cloud Blvd, Austin, TX".to_string(),
            employees: Vec::new(),
        },
        Company {
            name: "Fresh Bakery Foods".to_string(),
            founded: const { date(1970, 11, 3) },
            profile: BusinessProfile::Food,
            director: "Anna Kowalski".to_string(),
            employee_count: 12,
            address: "3 Baker Ln, Chicago, IL".to_string(),
            employees: vec![employee(
                "Ivan Petrov",
                "Baker",
                "+1-312-555-0150",
                "ivan.petrov@freshbakery.com",
                3100,
            )],
        },
        Company {
            name: "Capital Finance Group".to_string(),
            founded: const { date(2001, 2, 28) },
            profile: BusinessProfile::Finance,
            director: "Samuel Whiteford".to_string(),
            employee_count: 340,
            address: "1 Wall St, New York, NY".to_string(),
            employees: vec![
                employee(
                    "Julia Roberts",
                    "Financial Analyst",
                    "+1-212-555-0160",
                    "julia.roberts@capitalfinance.com",
                    7600,
                ),
                employee(
                    "Kevin Brooks",
                    "Account Manager",
                    "+1-212-555-0161",
                    "kevin.brooks@capitalfinance.com",
                    6500,
                ),
            ],
        },
    ]
}

fn student(name: &str, surname: &str, age: u8, institution: &str) -> Student {
    Student {
        name: name.to_string(),
        surname: surname.to_string(),
        age,
        institution: institution.to_string(),
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student("John", "Brown", 21, "Oxford University"),
        student("Alice", "Brooks", 19, "Cambridge University"),
        student("Michael", "Smith", 23, "Harvard University"),
        student("Emily", "Brooks", 22, "Oxford University"),
        student("David", "Johnson", 20, "Stanford University"),
        student("Adam", "Brown", 24, "Massachusetts Institute of Technology"),
        student("Sophia", "Miller", 18, "Cambridge University"),
        student("Olivia", "Davis", 22, "Harvard University"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_match_the_exercise_set() {
        assert_eq!(
            numbers(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 14, 16, 21, 24, 28, 35, 40]
        );
    }

    #[test]
    fn collections_are_populated() {
        let data = SampleData::load();
        assert_eq!(data.cities.len(), 8);
        assert_eq!(data.companies.len(), 7);
        assert_eq!(data.students.len(), 8);
        assert!(data
            .companies
            .iter()
            .flat_map(|c| &c.employees)
            .all(|e| e.email.contains('@')));
    }
}
