//! Field values as seen by the query engine.
//!
//! Accessors return a [`Value`] borrowing from the record, so evaluating a
//! clause never copies string data.

use std::cmp::Ordering;
use std::fmt;

use crate::op::Kind;

/// A field value borrowed from a record.
///
/// ```
/// use linqs_query::{Value, Number};
///
/// struct Student {
///     surname: String,
///     age: u8,
/// }
///
/// fn accessor<'a>(student: &'a Student, field: &str) -> Value<'a> {
///     match field {
///         "surname" => Value::String(&student.surname),
///         "age" => Value::Number(Number::from(student.age)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Timestamp(Timestamp),
    /// Discriminant from [`QueryEnum`](crate::QueryEnum).
    Enum(u32),
    /// Unknown or unqueryable field. Matches no clause.
    None,
}

impl Value<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn kind(&self) -> Option<Kind> {
        Some(match self {
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Enum(_) => Kind::Enum,
            Value::None => return None,
        })
    }
}

/// A numeric field or clause value.
///
/// Integers keep their sign so that comparisons between them are exact;
/// anything involving a float compares as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// The exact integer value, widened so any `i64` or `u64` fits.
    ///
    /// Floats qualify only when finite, whole and within `i64`-ish range.
    pub fn as_integer(self) -> Option<i128> {
        match self {
            Number::I64(n) => Some(i128::from(n)),
            Number::U64(n) => Some(i128::from(n)),
            Number::F64(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e18 => {
                Some(f as i128)
            }
            Number::F64(_) => None,
        }
    }

    /// Numeric order, exact across integer and float variants.
    ///
    /// `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            (Number::F64(f), n) => Some(int_vs_float(n.as_integer()?, f)?.reverse()),
            (n, Number::F64(f)) => int_vs_float(n.as_integer()?, f),
            _ => Some(self.as_integer()?.cmp(&other.as_integer()?)),
        }
    }

    /// Total order for sorting: [`compare`](Self::compare), with NaN after
    /// every other number and equal to itself.
    pub fn sort_cmp(self, other: Number) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.compare(other).unwrap_or(Ordering::Equal),
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(f) if f.is_nan())
    }

    /// Whether `self` is a whole multiple of `divisor`.
    ///
    /// Zero and fractional divisors, and fractional values, never divide.
    pub fn is_divisible_by(self, divisor: Number) -> bool {
        match (self.as_integer(), divisor.as_integer()) {
            (Some(n), Some(d)) if d != 0 => n % d == 0,
            _ => false,
        }
    }

    /// `low <= self <= high`.
    pub fn is_between(self, low: Number, high: Number) -> bool {
        matches!(self.compare(low), Some(o) if o.is_ge())
            && matches!(self.compare(high), Some(o) if o.is_le())
    }
}

/// Compares an integer with a float without rounding the integer.
fn int_vs_float(i: i128, f: f64) -> Option<Ordering> {
    // Beyond any i64 or u64, so the sign alone decides.
    const FAR: f64 = 1.0e30;

    if f.is_nan() {
        return None;
    }
    if f >= FAR {
        return Some(Ordering::Less);
    }
    if f <= -FAR {
        return Some(Ordering::Greater);
    }
    let floor = f.floor();
    let whole = floor as i128;
    Some(match i.cmp(&whole) {
        Ordering::Equal if f > floor => Ordering::Less,
        Ordering::Equal => Ordering::Equal,
        Ordering::Less => Ordering::Less,
        Ordering::Greater => Ordering::Greater,
    })
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Milliseconds since the Unix epoch, UTC.
///
/// ```
/// use linqs_query::Timestamp;
///
/// assert!(Timestamp::from_secs(1) < Timestamp::from_millis(1500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
