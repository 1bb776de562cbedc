//! Sort keys.

use std::cmp::Ordering;
use std::fmt;

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Flips `ordering` for descending keys.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        if self == Dir::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key: a field name and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Dir::Desc)
    }

    /// Orders two field values under this key.
    ///
    /// The direction only flips comparisons between present values; a
    /// missing value goes last either way.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        let ordering = compare_values(a, b);
        if a.is_none() || b.is_none() {
            ordering
        } else {
            self.dir.apply(ordering)
        }
    }
}

/// Total order over field values, so any sort over them is well defined.
///
/// Strings use byte order and numbers their numeric order, with NaN after
/// every other number. Values of different kinds are grouped by kind
/// (strings, numbers, timestamps, enums). [`Value::None`] sorts after any
/// present value.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    use Value::*;

    match (a, b) {
        (String(x), String(y)) => x.cmp(y),
        (Number(x), Number(y)) => x.sort_cmp(*y),
        (Timestamp(x), Timestamp(y)) => x.cmp(y),
        (Enum(x), Enum(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::String(_) => 0,
        Value::Number(_) => 1,
        Value::Timestamp(_) => 2,
        Value::Enum(_) => 3,
        Value::None => 4,
    }
}

/// Orders two items by the first key on which they differ.
pub fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    orderings
        .iter()
        .map(|key| key.compare(&accessor(a, &key.field), &accessor(b, &key.field)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
