use linqs_macros::Queryable;

/// A student enrolled at an institution.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct Student {
    #[query(text)]
    pub name: String,
    #[query(text)]
    pub surname: String,
    #[query(number)]
    pub age: u8,
    #[query(text)]
    pub institution: String,
}
