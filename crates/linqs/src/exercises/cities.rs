//! Filters over a list of city names.

use linqs_query::{Dir, Query, Value};

const NAME: &str = "name";

fn name_of<'a>(city: &'a &str, _field: &str) -> Value<'a> {
    Value::String(city)
}

fn run<'a>(cities: &[&'a str], query: Query) -> Vec<&'a str> {
    query.filter(cities, name_of).into_iter().copied().collect()
}

pub fn all<'a>(cities: &[&'a str]) -> Vec<&'a str> {
    run(cities, Query::new())
}

/// Names with exactly `len` characters.
pub fn by_length<'a>(cities: &[&'a str], len: usize) -> Vec<&'a str> {
    run(cities, Query::new().and_len_eq(NAME, len))
}

pub fn starting_with_a<'a>(cities: &[&'a str]) -> Vec<&'a str> {
    run(cities, Query::new().and_startswith(NAME, "A"))
}

pub fn ending_with_m<'a>(cities: &[&'a str]) -> Vec<&'a str> {
    run(cities, Query::new().and_endswith(NAME, "M"))
}

/// Both checks are case-sensitive, so "New York" does not qualify.
pub fn starting_with_n_ending_with_k<'a>(cities: &[&'a str]) -> Vec<&'a str> {
    run(
        cities,
        Query::new()
            .and_startswith(NAME, "N")
            .and_endswith(NAME, "K"),
    )
}

pub fn starting_with_ne_descending<'a>(cities: &[&'a str]) -> Vec<&'a str> {
    run(
        cities,
        Query::new()
            .and_startswith(NAME, "Ne")
            .order_by(NAME, Dir::Desc),
    )
}
