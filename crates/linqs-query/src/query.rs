//! The fluent query builder and its execution methods.

use std::ops::RangeInclusive;

use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::clause::{Clause, ClauseValue};
use crate::error::Result;
use crate::op::Op;
use crate::ordering::{compare_by_orderings, Dir, OrderBy};
use crate::value::{Number, Timestamp, Value};

/// Clauses plus ordering keys, runnable against any slice.
///
/// `and` clauses must all hold, at least one `or` clause must hold when
/// any exist, and no `not` clause may hold.
///
/// ```
/// use linqs_query::{Query, Value, Number};
///
/// let numbers = vec![1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10, 14, 16, 21, 24, 28, 35, 40];
///
/// fn accessor<'a>(n: &'a i64, _field: &str) -> Value<'a> {
///     Value::Number(Number::I64(*n))
/// }
///
/// let eights = Query::new()
///     .and_divisible_by("value", 8i64)
///     .order_desc("value")
///     .filter_cloned(&numbers, accessor);
/// assert_eq!(eights, vec![40, 24, 16, 8]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
    orderings: Vec<OrderBy>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    /// An empty query: matches everything and keeps input order.
    pub fn new() -> Self {
        Query::default()
    }

    fn push(mut self, group: Group, clause: Clause) -> Self {
        match group {
            Group::And => self.and_clauses.push(clause),
            Group::Or => self.or_clauses.push(clause),
            Group::Not => self.not_clauses.push(clause),
        }
        self
    }

    /// Requires `field op value` to hold.
    pub fn and(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::And, Clause::new(field, op, value))
    }

    /// Adds an alternative; at least one alternative must hold.
    pub fn or(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::Or, Clause::new(field, op, value))
    }

    /// Excludes items for which `field op value` holds.
    pub fn not(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::Not, Clause::new(field, op, value))
    }

    // Comparison shorthands. The clause value decides which field kind
    // they apply to.

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    pub fn and_gt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gt, value)
    }

    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    pub fn or_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Eq, value)
    }

    pub fn not_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Eq, value)
    }

    // Numeric shorthands.

    /// `low <= field <= high`.
    pub fn and_between<N: Into<Number>>(self, field: &str, range: RangeInclusive<N>) -> Self {
        self.and(field, Op::Between, range)
    }

    pub fn and_divisible_by(self, field: &str, divisor: impl Into<Number>) -> Self {
        self.and(field, Op::DivisibleBy, divisor.into())
    }

    pub fn not_divisible_by(self, field: &str, divisor: impl Into<Number>) -> Self {
        self.not(field, Op::DivisibleBy, divisor.into())
    }

    // String shorthands. Plain variants compare exactly; the `i` variants
    // lowercase both sides first.

    pub fn and_startswith(self, field: &str, prefix: &str) -> Self {
        self.and(field, Op::StartsWith, prefix)
    }

    pub fn and_endswith(self, field: &str, suffix: &str) -> Self {
        self.and(field, Op::EndsWith, suffix)
    }

    pub fn and_contains(self, field: &str, needle: &str) -> Self {
        self.and(field, Op::Contains, needle)
    }

    pub fn and_icontains(self, field: &str, needle: &str) -> Self {
        self.and(field, Op::IContains, needle)
    }

    pub fn or_icontains(self, field: &str, needle: &str) -> Self {
        self.or(field, Op::IContains, needle)
    }

    pub fn and_ieq(self, field: &str, value: &str) -> Self {
        self.and(field, Op::IEq, value)
    }

    /// Field length in characters (not bytes) equals `len`.
    pub fn and_len_eq(self, field: &str, len: usize) -> Self {
        self.and(field, Op::LenEq, len)
    }

    /// Compiles `pattern` and requires the field to match it anywhere.
    pub fn and_regex(self, field: &str, pattern: &str) -> Result<Self> {
        Ok(self.and(field, Op::Regex, Regex::new(pattern)?))
    }

    /// Like [`and_regex`](Self::and_regex), ignoring case.
    pub fn and_iregex(self, field: &str, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(self.and(field, Op::Regex, regex))
    }

    // Timestamp and enum shorthands.

    /// Field timestamp strictly earlier than `ts`.
    pub fn and_before(self, field: &str, ts: Timestamp) -> Self {
        self.and(field, Op::Before, ts)
    }

    /// Enum discriminant is one of `values`.
    pub fn and_in<I>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.and(field, Op::In, ClauseValue::EnumSet(values.into_iter().collect()))
    }

    /// Sorts results by `field`. Keys compare in the order they were added.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(field, dir));
        self
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Keeps at most `n` results, counted after the offset.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Drops the first `n` sorted results.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Ends a builder chain as is.
    pub fn build(self) -> Self {
        self
    }

    /// Ends a builder chain after [`validate`](Self::validate).
    pub fn try_build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Rejects clauses whose operator cannot apply to their value, and
    /// ranges whose bounds are inverted.
    pub fn validate(&self) -> Result<()> {
        self.clauses().try_for_each(Clause::validate)
    }

    fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.and_clauses
            .iter()
            .chain(&self.or_clauses)
            .chain(&self.not_clauses)
    }

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }

    /// True when no clause was added, so every item matches.
    pub fn is_empty(&self) -> bool {
        self.clauses().next().is_none()
    }

    /// Evaluates the clause groups against one item.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let holds = |clause: &Clause| clause.matches(&accessor(item, &clause.field));

        self.and_clauses.iter().all(holds)
            && (self.or_clauses.is_empty() || self.or_clauses.iter().any(holds))
            && !self.not_clauses.iter().any(holds)
    }

    /// Returns references to the matching items.
    ///
    /// Without ordering keys the input order is kept; with them the sort is
    /// stable. Offset, then limit, apply to the sorted list.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();
        let matched = results.len();

        if !self.orderings.is_empty() {
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings, &accessor));
            trace!(target: "linqs::query", keys = self.orderings.len(), "sorted results");
        }

        let offset = self.offset.unwrap_or(0).min(results.len());
        let mut results = results.split_off(offset);
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        debug!(
            target: "linqs::query",
            total = items.len(),
            matched,
            returned = results.len(),
            "filter evaluated"
        );
        results
    }

    /// [`filter`](Self::filter), cloning each match.
    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filter(items, accessor).into_iter().cloned().collect()
    }

    /// Number of matching items. Ignores offset and limit.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().filter(|item| self.matches(*item, &accessor)).count()
    }

    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

    /// True for an empty slice.
    pub fn all<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().all(|item| self.matches(item, &accessor))
    }

    /// First match in input order; ordering keys are not consulted.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items.iter().find(|item| self.matches(*item, &accessor))
    }

    pub fn position<T, F>(&self, items: &[T], accessor: F) -> Option<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().position(|item| self.matches(item, &accessor))
    }
}

#[derive(Clone, Copy)]
enum Group {
    And,
    Or,
    Not,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;

    #[derive(Debug, Clone, PartialEq)]
    struct Student {
        name: String,
        surname: String,
        age: u8,
        institution: String,
    }

    fn accessor<'a>(s: &'a Student, field: &str) -> Value<'a> {
        match field {
            "name" => Value::String(&s.name),
            "surname" => Value::String(&s.surname),
            "age" => Value::Number(Number::from(s.age)),
            "institution" => Value::String(&s.institution),
            _ => Value::None,
        }
    }

    fn student(name: &str, surname: &str, age: u8, institution: &str) -> Student {
        Student {
            name: name.to_string(),
            surname: surname.to_string(),
            age,
            institution: institution.to_string(),
        }
    }

    fn students() -> Vec<Student> {
        vec![
            student("John", "Brown", 21, "Oxford University"),
            student("Alice", "Brooks", 19, "Cambridge University"),
            student("Michael", "Smith", 23, "Harvard University"),
            student("Emily", "Brooks", 22, "Oxford University"),
            student("Adam", "Brown", 24, "MIT"),
        ]
    }

    fn names(results: &[&Student]) -> Vec<String> {
        results.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn empty_query_matches_all_in_order() {
        let items = students();
        let results = Query::new().build().filter(&items, accessor);
        assert_eq!(
            names(&results),
            vec!["John", "Alice", "Michael", "Emily", "Adam"]
        );
    }

    #[test]
    fn and_clauses_preserve_input_order() {
        let items = students();
        let query = Query::new().and_startswith("surname", "Bro").build();

        let results = query.filter(&items, accessor);
        assert_eq!(names(&results), vec!["John", "Alice", "Emily", "Adam"]);
    }

    #[test]
    fn and_clauses_combine_by_conjunction() {
        let items = students();
        let query = Query::new()
            .and_startswith("surname", "Bro")
            .and_gt("age", 21u8)
            .build();

        let results = query.filter(&items, accessor);
        assert_eq!(names(&results), vec!["Emily", "Adam"]);
    }

    #[test]
    fn or_and_not_groups() {
        let items = students();
        let query = Query::new()
            .or_icontains("institution", "oxford")
            .or_eq("institution", "MIT")
            .not_eq("name", "Emily")
            .build();

        let results = query.filter(&items, accessor);
        assert_eq!(names(&results), vec!["John", "Adam"]);
    }

    #[test]
    fn between_is_inclusive() {
        let items = students();
        let query = Query::new().and_between("age", 21u8..=23u8).build();

        let results = query.filter(&items, accessor);
        assert_eq!(names(&results), vec!["John", "Michael", "Emily"]);
    }

    #[test]
    fn ordering_is_stable() {
        let items = students();
        let query = Query::new().order_asc("surname").build();

        let results = query.filter(&items, accessor);
        // Brooks before Brown; equal surnames keep input order
        assert_eq!(
            names(&results),
            vec!["Alice", "Emily", "John", "Adam", "Michael"]
        );
    }

    #[test]
    fn ordering_descending() {
        let items = students();
        let query = Query::new().order_desc("age").build();

        let results = query.filter(&items, accessor);
        assert_eq!(
            names(&results),
            vec!["Adam", "Michael", "Emily", "John", "Alice"]
        );
    }

    #[test]
    fn ordering_multiple_keys() {
        let items = students();
        let query = Query::new()
            .order_asc("surname")
            .order_desc("age")
            .build();

        let results = query.filter(&items, accessor);
        assert_eq!(
            names(&results),
            vec!["Emily", "Alice", "Adam", "John", "Michael"]
        );
    }

    #[test]
    fn offset_and_limit() {
        let items = students();
        let query = Query::new().offset(1).limit(2).build();

        let results = query.filter(&items, accessor);
        assert_eq!(names(&results), vec!["Alice", "Michael"]);

        let beyond = Query::new().offset(10).build();
        assert!(beyond.filter(&items, accessor).is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let items = students();
        let query = Query::new().and_eq("surname", "Nobody").build();

        assert!(query.filter(&items, accessor).is_empty());
        assert_eq!(query.count(&items, accessor), 0);
        assert!(!query.any(&items, accessor));
        assert!(query.find(&items, accessor).is_none());
        assert_eq!(query.position(&items, accessor), None);
    }

    #[test]
    fn lookups() {
        let items = students();
        let query = Query::new().and_eq("name", "Michael").build();

        assert_eq!(query.count(&items, accessor), 1);
        assert_eq!(query.position(&items, accessor), Some(2));
        assert_eq!(
            query.find(&items, accessor).map(|s| s.surname.as_str()),
            Some("Smith")
        );

        let adults = Query::new().and_gte("age", 18u8).build();
        assert!(adults.all(&items, accessor));
    }

    #[test]
    fn filter_cloned_returns_owned() {
        let items = students();
        let query = Query::new().and_eq("institution", "MIT").build();

        let owned: Vec<Student> = query.filter_cloned(&items, accessor);
        assert_eq!(owned, vec![items[4].clone()]);
    }

    #[test]
    fn regex_clauses() {
        let items = students();
        let query = Query::new()
            .and_iregex("institution", r"^(oxford|mit)\b")
            .unwrap()
            .build();
        assert_eq!(query.count(&items, accessor), 3);

        assert!(matches!(
            Query::new().and_regex("name", "("),
            Err(QueryError::InvalidRegex(_))
        ));
    }

    #[test]
    fn try_build_validates_all_groups() {
        assert!(Query::new().and_len_eq("name", 4).try_build().is_ok());
        assert!(Query::new()
            .not("age", Op::StartsWith, 3u8)
            .try_build()
            .is_err());
        assert!(Query::new()
            .and_between("age", 30u8..=20u8)
            .try_build()
            .is_err());
    }

    #[test]
    fn introspection() {
        let query = Query::new()
            .and_eq("a", "1")
            .or_eq("b", "2")
            .not_eq("c", "3")
            .order_asc("d")
            .build();

        assert_eq!(query.and_clauses().len(), 1);
        assert_eq!(query.or_clauses().len(), 1);
        assert_eq!(query.not_clauses().len(), 1);
        assert_eq!(query.orderings(), &[OrderBy::asc("d")]);
        assert!(!query.is_empty());
        assert!(Query::new().is_empty());
    }

    #[test]
    fn nan_keys_sort_after_every_number() {
        let mut readings: Vec<f64> = (0..40).map(|i| f64::from((i * 17) % 23) - 11.5).collect();
        for slot in (3..40).step_by(5) {
            readings[slot] = f64::NAN;
        }
        fn reading<'a>(r: &'a f64, _: &str) -> Value<'a> {
            Value::Number(Number::from(*r))
        }

        let sorted = Query::new().order_asc("v").filter(&readings, reading);
        let (finite, nans) = sorted.split_at(sorted.len() - 8);
        assert!(nans.iter().all(|r| r.is_nan()));
        assert!(finite.windows(2).all(|w| w[0] <= w[1]));

        let desc = Query::new().order_desc("v").filter(&readings, reading);
        assert!(desc[..8].iter().all(|r| r.is_nan()));
        assert!(desc[8..].windows(2).all(|w| w[0] >= w[1]));
    }
}
