use chrono::NaiveDate;
use linqs_macros::Queryable;
use linqs_query::{Number, QueryEnum, QueryTimestamp, Queryable, Value};

/// Line of business a company operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessProfile {
    It,
    Marketing,
    Food,
    Construction,
    Finance,
}

impl BusinessProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            BusinessProfile::It => "IT",
            BusinessProfile::Marketing => "Marketing",
            BusinessProfile::Food => "Food",
            BusinessProfile::Construction => "Construction",
            BusinessProfile::Finance => "Finance",
        }
    }
}

impl std::fmt::Display for BusinessProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryEnum for BusinessProfile {
    fn discriminant(&self) -> u32 {
        match self {
            BusinessProfile::It => 0,
            BusinessProfile::Marketing => 1,
            BusinessProfile::Food => 2,
            BusinessProfile::Construction => 3,
            BusinessProfile::Finance => 4,
        }
    }
}

/// A person on a company's payroll.
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct Employee {
    #[query(text)]
    pub full_name: String,
    #[query(text)]
    pub position: String,
    #[query(text)]
    pub contact_number: String,
    #[query(text)]
    pub email: String,
    #[query(number)]
    pub salary: u32,
}

/// A company and the employees it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
    pub founded: NaiveDate,
    pub profile: BusinessProfile,
    pub director: String,
    pub employee_count: u32,
    pub address: String,
    pub employees: Vec<Employee>,
}

impl Company {
    pub const NAME: &'static str = "name";
    pub const FOUNDED: &'static str = "founded";
    pub const PROFILE: &'static str = "profile";
    pub const DIRECTOR: &'static str = "director";
    /// Last space-separated token of the director's full name.
    pub const DIRECTOR_LAST_NAME: &'static str = "director_last_name";
    pub const EMPLOYEE_COUNT: &'static str = "employee_count";
    pub const ADDRESS: &'static str = "address";

    /// Returns the director's last name; empty if the name is blank.
    pub fn director_last_name(&self) -> &str {
        self.director.split_whitespace().next_back().unwrap_or("")
    }
}

impl Queryable for Company {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            Self::NAME => Value::String(&self.name),
            Self::FOUNDED => Value::Timestamp(self.founded.to_timestamp()),
            Self::PROFILE => Value::Enum(self.profile.discriminant()),
            Self::DIRECTOR => Value::String(&self.director),
            Self::DIRECTOR_LAST_NAME => Value::String(self.director_last_name()),
            Self::EMPLOYEE_COUNT => Value::Number(Number::from(self.employee_count)),
            Self::ADDRESS => Value::String(&self.address),
            _ => Value::None,
        }
    }
}
