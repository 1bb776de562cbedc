//! Traits connecting record types to the query engine.
//!
//! [`Queryable`] is usually derived with `#[derive(Queryable)]` from
//! `linqs-macros`; records with computed fields implement it by hand.

use crate::value::{Timestamp, Value};

/// A record type whose fields can be addressed by name in a query.
///
/// Hand-written impls are the way to expose computed fields:
///
/// ```
/// use linqs_query::{Queryable, Query, Value, Number};
///
/// struct Company {
///     name: String,
///     director: String,
///     employee_count: u32,
/// }
///
/// impl Queryable for Company {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "director_last_name" => {
///                 Value::String(self.director.rsplit(' ').next().unwrap_or(""))
///             }
///             "employee_count" => Value::Number(Number::from(self.employee_count)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let companies = vec![Company {
///     name: "BrightAds".into(),
///     director: "Peter White".into(),
///     employee_count: 120,
/// }];
///
/// let query = Query::new().and_ieq("director_last_name", "white").build();
/// assert_eq!(query.count(&companies, Company::accessor), 1);
/// ```
pub trait Queryable {
    /// Returns the value of a field, or [`Value::None`] for unknown names.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function usable with every [`Query`](crate::Query) execution
    /// method.
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

/// Lets a slice of references (e.g. records flattened out of their owners)
/// be queried with `<&T>::accessor`.
impl<T: Queryable + ?Sized> Queryable for &T {
    fn field_value(&self, field: &str) -> Value<'_> {
        (**self).field_value(field)
    }
}

/// Maps an enum variant to a stable discriminant for `choice` fields.
///
/// Fieldless enums with explicit discriminants can simply cast:
///
/// ```
/// use linqs_query::QueryEnum;
///
/// #[derive(Clone, Copy)]
/// enum Profile {
///     It = 0,
///     Food = 1,
/// }
///
/// impl QueryEnum for Profile {
///     fn discriminant(&self) -> u32 {
///         *self as u32
///     }
/// }
///
/// assert_eq!(Profile::Food.discriminant(), 1);
/// ```
pub trait QueryEnum {
    /// Must stay fixed for a variant across releases.
    fn discriminant(&self) -> u32;
}

/// Date-like field types usable with `#[query(date)]`.
///
/// Plain `i64` values are taken as epoch milliseconds.
pub trait QueryTimestamp {
    fn to_timestamp(&self) -> Timestamp;
}

impl QueryTimestamp for i64 {
    fn to_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl QueryTimestamp for Timestamp {
    fn to_timestamp(&self) -> Timestamp {
        *self
    }
}

/// Dates map to midnight UTC.
#[cfg(feature = "chrono")]
impl QueryTimestamp for chrono::NaiveDate {
    fn to_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(
            self.and_time(chrono::NaiveTime::MIN)
                .and_utc()
                .timestamp_millis(),
        )
    }
}

#[cfg(feature = "chrono")]
impl QueryTimestamp for chrono::NaiveDateTime {
    fn to_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.and_utc().timestamp_millis())
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> QueryTimestamp for chrono::DateTime<Tz> {
    fn to_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.timestamp_millis())
    }
}
