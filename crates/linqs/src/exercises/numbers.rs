//! Filters over a list of integers.

use linqs_query::{Dir, Number, Query, Value};

use crate::error::Result;

const VALUE: &str = "value";

fn value_of<'a>(n: &'a i64, _field: &str) -> Value<'a> {
    Value::Number(Number::I64(*n))
}

fn run(numbers: &[i64], query: Query) -> Vec<i64> {
    query.filter_cloned(numbers, value_of)
}

pub fn all(numbers: &[i64]) -> Vec<i64> {
    run(numbers, Query::new())
}

pub fn even(numbers: &[i64]) -> Vec<i64> {
    run(numbers, Query::new().and_divisible_by(VALUE, 2i64))
}

pub fn odd(numbers: &[i64]) -> Vec<i64> {
    run(numbers, Query::new().not_divisible_by(VALUE, 2i64))
}

pub fn greater_than(numbers: &[i64], n: i64) -> Vec<i64> {
    run(numbers, Query::new().and_gt(VALUE, n))
}

/// Values in `low..=high`. Fails when the bounds are inverted.
pub fn between(numbers: &[i64], low: i64, high: i64) -> Result<Vec<i64>> {
    let query = Query::new().and_between(VALUE, low..=high).try_build()?;
    Ok(run(numbers, query))
}

/// Multiples of `n`, sorted in `dir`. A zero divisor matches nothing.
pub fn multiples_of(numbers: &[i64], n: i64, dir: Dir) -> Vec<i64> {
    run(
        numbers,
        Query::new()
            .and_divisible_by(VALUE, n)
            .order_by(VALUE, dir),
    )
}

pub fn multiples_of_seven_ascending(numbers: &[i64]) -> Vec<i64> {
    multiples_of(numbers, 7, Dir::Asc)
}

pub fn multiples_of_eight_descending(numbers: &[i64]) -> Vec<i64> {
    multiples_of(numbers, 8, Dir::Desc)
}
