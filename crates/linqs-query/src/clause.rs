//! Single-field predicates.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use regex::Regex;

use crate::error::{QueryError, Result};
use crate::op::{Kind, Op};
use crate::value::{Number, Timestamp, Value};

/// One predicate: `field op value`.
///
/// ```
/// use linqs_query::{Clause, Op, Value};
///
/// let clause = Clause::new("surname", Op::StartsWith, "Bro");
/// assert!(clause.matches(&Value::String("Brooks")));
/// assert!(!clause.matches(&Value::String("Smith")));
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub value: ClauseValue,
}

impl Clause {
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Tests a field value against this clause.
    ///
    /// A missing field, or a value of the wrong kind, never matches, not
    /// even under `Ne`.
    pub fn matches(&self, field: &Value<'_>) -> bool {
        let op = self.op;

        match (field, &self.value) {
            (Value::String(s), ClauseValue::String(pattern)) => string_matches(op, s, pattern),
            (Value::String(s), ClauseValue::Regex(re)) => op == Op::Regex && re.is_match(s),
            (Value::String(s), ClauseValue::Number(len)) => {
                let chars = Number::from(s.chars().count());
                op == Op::LenEq && chars.compare(*len).is_some_and(Ordering::is_eq)
            }
            (Value::Number(n), ClauseValue::Number(other)) if op == Op::DivisibleBy => {
                n.is_divisible_by(*other)
            }
            (Value::Number(n), ClauseValue::Number(other)) => {
                n.compare(*other).is_some_and(|o| op.eval_ordering(o))
            }
            (Value::Number(n), ClauseValue::Range(low, high)) => {
                op == Op::Between && n.is_between(*low, *high)
            }
            (Value::Timestamp(t), ClauseValue::Timestamp(other)) => op.eval_ordering(t.cmp(other)),
            (Value::Enum(d), ClauseValue::Enum(other)) => match op {
                Op::Eq => d == other,
                Op::Ne => d != other,
                _ => false,
            },
            (Value::Enum(d), ClauseValue::EnumSet(set)) => op == Op::In && set.contains(d),
            _ => false,
        }
    }

    /// Rejects operator/value pairs that can never match, and inverted
    /// ranges.
    pub fn validate(&self) -> Result<()> {
        let op = self.op;
        let kind = match &self.value {
            ClauseValue::Number(_) if op == Op::LenEq => return Ok(()),
            ClauseValue::Range(low, high) => {
                if low.compare(*high).is_some_and(|o| o.is_gt()) {
                    return Err(QueryError::InvertedRange {
                        low: low.to_string(),
                        high: high.to_string(),
                    });
                }
                (op == Op::Between).then_some(Kind::Number)
            }
            ClauseValue::String(_) => (!matches!(op, Op::Regex | Op::LenEq)).then_some(Kind::String),
            ClauseValue::Regex(_) => (op == Op::Regex).then_some(Kind::String),
            ClauseValue::Number(_) => (op != Op::Between).then_some(Kind::Number),
            ClauseValue::Timestamp(_) => Some(Kind::Timestamp),
            ClauseValue::Enum(_) => (op != Op::In).then_some(Kind::Enum),
            ClauseValue::EnumSet(_) => (op == Op::In).then_some(Kind::Enum),
        };

        match kind {
            Some(kind) if op.accepts(kind) => Ok(()),
            _ => Err(QueryError::InvalidOperatorForType {
                op: op.as_str(),
                value_type: self.value.type_name(),
            }),
        }
    }
}

fn string_matches(op: Op, field: &str, pattern: &str) -> bool {
    match op {
        Op::Eq => field == pattern,
        Op::Ne => field != pattern,
        Op::StartsWith => field.starts_with(pattern),
        Op::EndsWith => field.ends_with(pattern),
        Op::Contains => field.contains(pattern),
        Op::IEq => field.to_lowercase() == pattern.to_lowercase(),
        Op::IContains => field.to_lowercase().contains(&pattern.to_lowercase()),
        _ => false,
    }
}

/// The right-hand side of a clause.
///
/// Owns its data, unlike [`Value`], so a built query can outlive the
/// records it is run against.
#[derive(Debug, Clone)]
pub enum ClauseValue {
    String(String),
    Number(Number),
    /// Inclusive bounds for `Between`.
    Range(Number, Number),
    Timestamp(Timestamp),
    Enum(u32),
    /// Accepted discriminants for `In`.
    EnumSet(Vec<u32>),
    Regex(Regex),
}

impl ClauseValue {
    fn type_name(&self) -> &'static str {
        match self {
            ClauseValue::String(_) => "string",
            ClauseValue::Number(_) => "number",
            ClauseValue::Range(..) => "range",
            ClauseValue::Timestamp(_) => "timestamp",
            ClauseValue::Enum(_) => "enum",
            ClauseValue::EnumSet(_) => "enum set",
            ClauseValue::Regex(_) => "regex",
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_owned())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<Timestamp> for ClauseValue {
    fn from(t: Timestamp) -> Self {
        ClauseValue::Timestamp(t)
    }
}

impl From<Regex> for ClauseValue {
    fn from(re: Regex) -> Self {
        ClauseValue::Regex(re)
    }
}

impl From<Vec<u32>> for ClauseValue {
    fn from(set: Vec<u32>) -> Self {
        ClauseValue::EnumSet(set)
    }
}

impl<N: Into<Number>> From<RangeInclusive<N>> for ClauseValue {
    fn from(range: RangeInclusive<N>) -> Self {
        let (low, high) = range.into_inner();
        ClauseValue::Range(low.into(), high.into())
    }
}

macro_rules! clause_value_from_number {
    ($($source:ty),+) => {
        $(
            impl From<$source> for ClauseValue {
                fn from(n: $source) -> Self {
                    ClauseValue::Number(Number::from(n))
                }
            }
        )+
    };
}

clause_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
