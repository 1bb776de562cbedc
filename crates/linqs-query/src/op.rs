//! Clause operators and the field kinds they apply to.

use std::cmp::Ordering;
use std::fmt;

/// Predicate applied by a clause.
///
/// | Kind | Operators |
/// |------|-----------|
/// | any | `Eq`, `Ne` |
/// | string | `StartsWith`, `EndsWith`, `Contains`, `Regex`, `IEq`, `IContains`, `LenEq` |
/// | number | `Gt`, `Gte`, `Lt`, `Lte`, `Between`, `DivisibleBy` |
/// | timestamp | `Gt`, `Gte`, `Lt`, `Lte`, `Before`, `After` |
/// | enum | `In` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    StartsWith,
    EndsWith,
    Contains,
    Regex,
    /// Equality after lowercasing both sides.
    IEq,
    /// Containment after lowercasing both sides.
    IContains,
    /// Character count equals the clause number.
    LenEq,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Inclusive on both ends.
    Between,
    /// Integer divisibility. Zero divides nothing.
    DivisibleBy,
    /// Same as `Lt`, reads better on dates.
    Before,
    /// Same as `Gt`, reads better on dates.
    After,
    /// Enum discriminant belongs to a set.
    In,
}

/// Kind of value a field or clause carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Timestamp,
    Enum,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Timestamp => "timestamp",
            Kind::Enum => "enum",
        }
    }
}

impl Op {
    /// Whether this operator means anything for values of `kind`.
    pub fn accepts(self, kind: Kind) -> bool {
        use Op::*;

        match self {
            Eq | Ne => true,
            StartsWith | EndsWith | Contains | Regex | IEq | IContains | LenEq => {
                kind == Kind::String
            }
            Between | DivisibleBy => kind == Kind::Number,
            Gt | Gte | Lt | Lte => matches!(kind, Kind::Number | Kind::Timestamp),
            Before | After => kind == Kind::Timestamp,
            In => kind == Kind::Enum,
        }
    }

    /// Applies a comparison operator to `field.cmp(clause)`.
    ///
    /// Non-comparison operators never hold.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering.is_eq(),
            Op::Ne => ordering.is_ne(),
            Op::Gt | Op::After => ordering.is_gt(),
            Op::Gte => ordering.is_ge(),
            Op::Lt | Op::Before => ordering.is_lt(),
            Op::Lte => ordering.is_le(),
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::StartsWith => "starts_with",
            Op::EndsWith => "ends_with",
            Op::Contains => "contains",
            Op::Regex => "regex",
            Op::IEq => "ieq",
            Op::IContains => "icontains",
            Op::LenEq => "len_eq",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::Between => "between",
            Op::DivisibleBy => "divisible_by",
            Op::Before => "before",
            Op::After => "after",
            Op::In => "in",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
